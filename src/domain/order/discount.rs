use std::fmt;
use std::str::FromStr;

// ============================================================================
// Discount Policies
// ============================================================================
//
// A policy maps an order amount to the amount the customer actually pays.
// Policies are pure: same input, same output, no side effects.
//
// ============================================================================

pub trait DiscountPolicy {
    /// Discounted amount for `amount`
    fn apply(&self, amount: f64) -> f64;

    /// Short label used in logs and metrics
    fn name(&self) -> &'static str;
}

impl<T: DiscountPolicy + ?Sized> DiscountPolicy for Box<T> {
    fn apply(&self, amount: f64) -> f64 {
        (**self).apply(amount)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// 5% off for regular customers
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonCustomerDiscount;

impl DiscountPolicy for CommonCustomerDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount * 0.95
    }

    fn name(&self) -> &'static str {
        "common"
    }
}

/// 10% off for VIP customers
#[derive(Debug, Clone, Copy, Default)]
pub struct VipCustomerDiscount;

impl DiscountPolicy for VipCustomerDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount * 0.90
    }

    fn name(&self) -> &'static str {
        "vip"
    }
}

/// Customer tier, selects the discount policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerTier {
    Common,
    #[default]
    Vip,
}

impl CustomerTier {
    pub fn policy(self) -> Box<dyn DiscountPolicy> {
        match self {
            CustomerTier::Common => Box::new(CommonCustomerDiscount),
            CustomerTier::Vip => Box::new(VipCustomerDiscount),
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerTier::Common => write!(f, "common"),
            CustomerTier::Vip => write!(f, "vip"),
        }
    }
}

impl FromStr for CustomerTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(CustomerTier::Common),
            "vip" => Ok(CustomerTier::Vip),
            other => anyhow::bail!("Unknown customer tier: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_common_discount() {
        let policy = CommonCustomerDiscount;
        for amount in [0.0, 1.0, 99.99, 100.0, 200.0, 12_345.67] {
            assert!((policy.apply(amount) - amount * 0.95).abs() < EPSILON);
        }
        assert!((policy.apply(200.0) - 190.0).abs() < EPSILON);
    }

    #[test]
    fn test_vip_discount() {
        let policy = VipCustomerDiscount;
        for amount in [0.0, 1.0, 99.99, 100.0, 200.0, 12_345.67] {
            assert!((policy.apply(amount) - amount * 0.90).abs() < EPSILON);
        }
        assert_eq!(policy.apply(100.0), 90.0);
    }

    #[test]
    fn test_tier_selects_policy() {
        assert_eq!(CustomerTier::Common.policy().name(), "common");
        assert_eq!(CustomerTier::Vip.policy().name(), "vip");
        assert!((CustomerTier::Vip.policy().apply(50.0) - 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!("vip".parse::<CustomerTier>().unwrap(), CustomerTier::Vip);
        assert_eq!(" Common ".parse::<CustomerTier>().unwrap(), CustomerTier::Common);
        assert!("gold".parse::<CustomerTier>().is_err());
    }

    #[test]
    fn test_tier_display_roundtrip() {
        for tier in [CustomerTier::Common, CustomerTier::Vip] {
            assert_eq!(tier.to_string().parse::<CustomerTier>().unwrap(), tier);
        }
    }
}
