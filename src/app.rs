use std::io::Write;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::order::{DiscountPolicy, Order, OrderProcessor};
use crate::metrics::Metrics;
use crate::store::InMemoryOrderStore;

// ============================================================================
// Application Wiring
// ============================================================================
//
// Builds one processor from the configuration and runs the configured order
// through it. Collaborator failures are logged, not returned: the run always
// completes.
//
// ============================================================================

/// Process the configured order, writing customer-facing lines to writers
/// produced by `make_writer` (one per collaborator).
pub fn run<W, F>(config: &AppConfig, metrics: Arc<Metrics>, make_writer: F) -> anyhow::Result<()>
where
    W: Write + 'static,
    F: Fn() -> W,
{
    let order = match Order::new(config.demo_order.amount, config.demo_order.customer.clone()) {
        Ok(order) => order,
        Err(e) => {
            metrics.record_failure("validation");
            tracing::error!(stage = "validation", error = %e, "Rejected configured order");
            return Ok(());
        }
    };

    let mut processor = OrderProcessor::new(
        config.tier.policy(),
        config.channel.notifier_with_writer(make_writer(), config.locale),
        InMemoryOrderStore::with_writer(make_writer(), config.locale),
    )
    .with_locale(config.locale)
    .with_metrics(metrics.clone());

    if let Err(e) = processor.process(&order) {
        tracing::error!(
            stage = e.stage(),
            error = %e,
            customer = %order.customer(),
            "Order processing failed"
        );
    }

    tracing::debug!(orders = %processor.store().to_json()?, "Store contents");
    tracing::info!(
        processed = metrics
            .orders_processed
            .with_label_values(&[processor.policy().name()])
            .get(),
        metric_families = metrics.registry().gather().len(),
        "🎉 Done"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }
    }

    #[test]
    fn test_run_prints_reference_lines() {
        let out = SharedBuffer::default();
        let metrics = Arc::new(Metrics::new().unwrap());

        run(&AppConfig::default(), metrics.clone(), || out.clone()).unwrap();

        let printed = String::from_utf8(out.0.borrow().clone()).unwrap();
        assert_eq!(
            printed,
            "Pedido salvo no banco de dados.\n\
             Enviando e-mail: Pedido de João processado com sucesso! Valor final: 90.0\n"
        );
        assert_eq!(metrics.orders_processed.with_label_values(&["vip"]).get(), 1);
    }

    #[test]
    fn test_run_succeeds_with_broken_output() {
        let metrics = Arc::new(Metrics::new().unwrap());

        let result = run(&AppConfig::english(), metrics.clone(), || BrokenWriter);

        assert!(result.is_ok());
        assert_eq!(metrics.order_failures.with_label_values(&["save"]).get(), 1);
        assert_eq!(metrics.orders_processed.with_label_values(&["vip"]).get(), 0);
    }

    #[test]
    fn test_run_succeeds_with_invalid_configured_order() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let mut config = AppConfig::default();
        config.demo_order.amount = -10.0;

        let out = SharedBuffer::default();
        run(&config, metrics.clone(), || out.clone()).unwrap();

        assert!(out.0.borrow().is_empty());
        assert_eq!(metrics.order_failures.with_label_values(&["validation"]).get(), 1);
    }
}
