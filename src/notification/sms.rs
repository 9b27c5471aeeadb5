use std::io::{self, Stdout, Write};

use crate::config::Locale;
use crate::domain::order::NotifyError;

use super::{NotificationChannel, Notifier};

/// Console SMS notifier
#[derive(Debug)]
pub struct SmsNotifier<W: Write = Stdout> {
    out: W,
    locale: Locale,
}

impl SmsNotifier<Stdout> {
    pub fn new(locale: Locale) -> Self {
        Self::with_writer(io::stdout(), locale)
    }
}

impl<W: Write> SmsNotifier<W> {
    pub fn with_writer(out: W, locale: Locale) -> Self {
        Self { out, locale }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for SmsNotifier<W> {
    fn notify(&mut self, message: &str) -> Result<(), NotifyError> {
        tracing::debug!(channel = "sms", message_len = message.len(), "Sending notification");

        writeln!(self.out, "{}{}", self.locale.sms_prefix(), message)?;
        self.out.flush()?;
        Ok(())
    }

    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Sms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_output() {
        let mut notifier = SmsNotifier::with_writer(Vec::new(), Locale::Portuguese);
        notifier.notify("Pedido pronto").unwrap();
        assert_eq!(notifier.channel(), NotificationChannel::Sms);

        let out = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(out, "Enviando SMS: Pedido pronto\n");
    }

    #[test]
    fn test_sms_output_english() {
        let mut notifier = SmsNotifier::with_writer(Vec::new(), Locale::English);
        notifier.notify("ready").unwrap();

        let out = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(out, "Sending SMS: ready\n");
    }
}
