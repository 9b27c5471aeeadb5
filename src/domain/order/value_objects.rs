use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// A customer purchase: how much, and for whom.
///
/// Immutable once built. Applying a discount yields a new `Order` via
/// [`Order::with_amount`]; the original is left as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    amount: f64,
    customer: String,
}

impl Order {
    /// Build an order, rejecting negative or non-finite amounts and blank
    /// customer identifiers.
    pub fn new(amount: f64, customer: impl Into<String>) -> Result<Self, OrderError> {
        let customer = customer.into();
        validate_amount(amount)?;
        if customer.trim().is_empty() {
            return Err(OrderError::EmptyCustomer);
        }

        Ok(Self { amount, customer })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Copy of this order for the same customer with a different amount
    pub fn with_amount(&self, amount: f64) -> Result<Self, OrderError> {
        validate_amount(amount)?;

        Ok(Self {
            amount,
            customer: self.customer.clone(),
        })
    }
}

fn validate_amount(amount: f64) -> Result<(), OrderError> {
    if !amount.is_finite() {
        return Err(OrderError::NonFiniteAmount);
    }
    if amount < 0.0 {
        return Err(OrderError::NegativeAmount(amount));
    }
    Ok(())
}

/// Render an amount for customer-facing text.
///
/// Uses the shortest digits that round-trip. Within [1e-3, 1e7) whole values
/// keep a single decimal place (`90.0`, `94.05`); outside it the value is
/// printed in `E` notation with at least one fractional digit (`1.08E7`,
/// `2.0E7`, `4.5E-4`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        if amount.fract() == 0.0 {
            return format!("{:.1}", amount);
        }
        return amount.to_string();
    }

    let scientific = format!("{:e}", amount);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
