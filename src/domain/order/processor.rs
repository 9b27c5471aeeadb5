use std::sync::Arc;

use crate::config::Locale;
use crate::metrics::Metrics;
use crate::notification::Notifier;
use crate::store::OrderStore;

use super::discount::DiscountPolicy;
use super::errors::ProcessError;
use super::value_objects::{format_amount, Order};

// ============================================================================
// Order Processor
// ============================================================================
//
// Orchestrates: Order → DiscountPolicy → discounted Order → OrderStore → Notifier
//
// Each step runs only if the previous one succeeded, so a failed save never
// produces a success notification.
//
// ============================================================================

pub struct OrderProcessor<D, N, S> {
    policy: D,
    notifier: N,
    store: S,
    locale: Locale,
    metrics: Option<Arc<Metrics>>,
}

impl<D, N, S> OrderProcessor<D, N, S>
where
    D: DiscountPolicy,
    N: Notifier,
    S: OrderStore,
{
    pub fn new(policy: D, notifier: N, store: S) -> Self {
        Self {
            policy,
            notifier,
            store,
            locale: Locale::default(),
            metrics: None,
        }
    }

    /// Language of the customer notification
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Discount, persist and notify one order.
    ///
    /// Returns the discounted order that was saved. `order` itself is left
    /// unchanged.
    pub fn process(&mut self, order: &Order) -> Result<Order, ProcessError> {
        let result = self.run(order);

        if let (Err(e), Some(metrics)) = (&result, &self.metrics) {
            metrics.record_failure(e.stage());
        }

        result
    }

    fn run(&mut self, order: &Order) -> Result<Order, ProcessError> {
        let discounted_amount = self.policy.apply(order.amount());
        let discounted = order.with_amount(discounted_amount)?;

        tracing::info!(
            customer = %order.customer(),
            policy = self.policy.name(),
            original_amount = order.amount(),
            final_amount = discounted_amount,
            "Processing order"
        );

        self.store.save(discounted.clone()).map_err(|e| {
            tracing::error!(customer = %order.customer(), error = %e, "Failed to save order");
            e
        })?;

        let message = self.locale.order_processed(order.customer(), discounted_amount);
        self.notifier.notify(&message).map_err(|e| {
            tracing::error!(
                customer = %order.customer(),
                channel = %self.notifier.channel(),
                error = %e,
                "Order saved but customer notification failed"
            );
            e
        })?;

        if let Some(metrics) = &self.metrics {
            metrics.record_processed(self.policy.name(), order.amount() - discounted_amount);
        }

        tracing::info!(
            customer = %order.customer(),
            final_amount = %format_amount(discounted_amount),
            channel = %self.notifier.channel(),
            "✅ Order processed"
        );

        Ok(discounted)
    }

    pub fn policy(&self) -> &D {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (D, N, S) {
        (self.policy, self.notifier, self.store)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
