use std::io::{self, Stdout, Write};

use crate::config::Locale;
use crate::domain::order::NotifyError;

use super::{NotificationChannel, Notifier};

/// Console email notifier.
///
/// Prints `Enviando e-mail: <message>` (or the English wording) instead of
/// talking to an SMTP server.
#[derive(Debug)]
pub struct EmailNotifier<W: Write = Stdout> {
    out: W,
    locale: Locale,
}

impl EmailNotifier<Stdout> {
    pub fn new(locale: Locale) -> Self {
        Self::with_writer(io::stdout(), locale)
    }
}

impl<W: Write> EmailNotifier<W> {
    pub fn with_writer(out: W, locale: Locale) -> Self {
        Self { out, locale }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for EmailNotifier<W> {
    fn notify(&mut self, message: &str) -> Result<(), NotifyError> {
        tracing::debug!(channel = "email", message_len = message.len(), "Sending notification");

        writeln!(self.out, "{}{}", self.locale.email_prefix(), message)?;
        self.out.flush()?;
        Ok(())
    }

    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Email
    }
}
