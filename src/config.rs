use crate::domain::order::{format_amount, CustomerTier};
use crate::notification::NotificationChannel;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Plain structs with defaults and named presets. The binary takes no
// arguments; `AppConfig::default()` reproduces the reference run.
//
// ============================================================================

/// Language of every customer-facing line the program prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Portuguese,
    English,
}

impl Locale {
    pub fn store_confirmation(self) -> &'static str {
        match self {
            Locale::Portuguese => "Pedido salvo no banco de dados.",
            Locale::English => "Order saved to database.",
        }
    }

    pub fn email_prefix(self) -> &'static str {
        match self {
            Locale::Portuguese => "Enviando e-mail: ",
            Locale::English => "Sending email: ",
        }
    }

    pub fn sms_prefix(self) -> &'static str {
        match self {
            Locale::Portuguese => "Enviando SMS: ",
            Locale::English => "Sending SMS: ",
        }
    }

    /// Success message sent to the customer once an order is stored
    pub fn order_processed(self, customer: &str, final_amount: f64) -> String {
        let amount = format_amount(final_amount);
        match self {
            Locale::Portuguese => format!(
                "Pedido de {} processado com sucesso! Valor final: {}",
                customer, amount
            ),
            Locale::English => format!(
                "Order for {} processed successfully! Final value: {}",
                customer, amount
            ),
        }
    }
}

/// The order processed by the binary
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOrder {
    pub amount: f64,
    pub customer: String,
}

impl Default for DemoOrder {
    fn default() -> Self {
        Self {
            amount: 100.0,
            customer: "João".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Discount tier applied to the order
    pub tier: CustomerTier,
    /// Channel used to tell the customer
    pub channel: NotificationChannel,
    pub locale: Locale,
    pub demo_order: DemoOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tier: CustomerTier::Vip,
            channel: NotificationChannel::Email,
            locale: Locale::Portuguese,
            demo_order: DemoOrder::default(),
        }
    }
}

impl AppConfig {
    /// Same run as the default, with English wording
    pub fn english() -> Self {
        Self {
            locale: Locale::English,
            ..Self::default()
        }
    }
}
