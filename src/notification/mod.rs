// ============================================================================
// Customer Notification
// ============================================================================
//
// A notifier pushes a human-readable status line to the customer through
// one channel. The console notifiers here stand in for real email and SMS
// gateways.
//
// ============================================================================

mod email;
mod sms;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::config::Locale;
use crate::domain::order::NotifyError;

pub use email::EmailNotifier;
pub use sms::SmsNotifier;

pub trait Notifier {
    /// Deliver `message` to the customer
    fn notify(&mut self, message: &str) -> Result<(), NotifyError>;

    fn channel(&self) -> NotificationChannel;
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, message: &str) -> Result<(), NotifyError> {
        (**self).notify(message)
    }

    fn channel(&self) -> NotificationChannel {
        (**self).channel()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
}

impl NotificationChannel {
    /// Console notifier for this channel, writing to stdout
    pub fn notifier(self, locale: Locale) -> Box<dyn Notifier> {
        self.notifier_with_writer(io::stdout(), locale)
    }

    pub fn notifier_with_writer<W: Write + 'static>(
        self,
        out: W,
        locale: Locale,
    ) -> Box<dyn Notifier> {
        match self {
            NotificationChannel::Email => Box::new(EmailNotifier::with_writer(out, locale)),
            NotificationChannel::Sms => Box::new(SmsNotifier::with_writer(out, locale)),
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationChannel::Email => write!(f, "email"),
            NotificationChannel::Sms => write!(f, "sms"),
        }
    }
}

impl FromStr for NotificationChannel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "e-mail" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            other => anyhow::bail!("Unknown notification channel: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_parsing() {
        assert_eq!("email".parse::<NotificationChannel>().unwrap(), NotificationChannel::Email);
        assert_eq!("E-Mail".parse::<NotificationChannel>().unwrap(), NotificationChannel::Email);
        assert_eq!("sms".parse::<NotificationChannel>().unwrap(), NotificationChannel::Sms);
        assert!("pigeon".parse::<NotificationChannel>().is_err());
    }

    #[test]
    fn test_channel_builds_matching_notifier() {
        assert_eq!(
            NotificationChannel::Email.notifier(Locale::English).channel(),
            NotificationChannel::Email
        );
        assert_eq!(
            NotificationChannel::Sms.notifier(Locale::English).channel(),
            NotificationChannel::Sms
        );
    }
}
