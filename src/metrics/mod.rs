use prometheus::{Counter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for order processing
// ============================================================================
//
// Tracks:
// - Orders processed, by discount policy
// - Failed orders, by the stage that failed
// - Total discount handed out
//
// Nothing scrapes the registry yet; `main` logs a summary on exit.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_processed: IntCounterVec,
    pub order_failures: IntCounterVec,
    pub discount_total: Counter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_processed = IntCounterVec::new(
            Opts::new("orders_processed_total", "Total orders processed successfully"),
            &["policy"],
        )?;
        registry.register(Box::new(orders_processed.clone()))?;

        let order_failures = IntCounterVec::new(
            Opts::new("order_failures_total", "Total orders that failed processing"),
            &["stage"],
        )?;
        registry.register(Box::new(order_failures.clone()))?;

        let discount_total = Counter::new(
            "order_discount_total",
            "Sum of discounts applied to processed orders",
        )?;
        registry.register(Box::new(discount_total.clone()))?;

        Ok(Self {
            registry,
            orders_processed,
            order_failures,
            discount_total,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a fully processed order
    pub fn record_processed(&self, policy: &str, discount: f64) {
        self.orders_processed.with_label_values(&[policy]).inc();
        if discount > 0.0 {
            self.discount_total.inc_by(discount);
        }
    }

    /// Helper to record a failed order
    pub fn record_failure(&self, stage: &str) {
        self.order_failures.with_label_values(&[stage]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_processed("vip", 10.0);
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_record_processed() {
        let metrics = Metrics::new().unwrap();
        metrics.record_processed("vip", 10.0);
        metrics.record_processed("vip", 5.0);
        metrics.record_processed("common", 0.0);

        assert_eq!(metrics.orders_processed.with_label_values(&["vip"]).get(), 2);
        assert_eq!(metrics.orders_processed.with_label_values(&["common"]).get(), 1);
        assert!((metrics.discount_total.get() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_failure() {
        let metrics = Metrics::new().unwrap();
        metrics.record_failure("save");
        metrics.record_failure("save");
        metrics.record_failure("notify");

        assert_eq!(metrics.order_failures.with_label_values(&["save"]).get(), 2);
        assert_eq!(metrics.order_failures.with_label_values(&["notify"]).get(), 1);
    }
}
