use std::io::{self, Stdout, Write};

use crate::config::Locale;
use crate::domain::order::{Order, StoreError};

use super::OrderStore;

/// Process-lifetime order store.
///
/// Orders are kept in insertion order with no keys and no deduplication.
/// Every save prints a confirmation line to the configured writer.
#[derive(Debug)]
pub struct InMemoryOrderStore<W: Write = Stdout> {
    orders: Vec<Order>,
    out: W,
    locale: Locale,
}

impl InMemoryOrderStore<Stdout> {
    pub fn new(locale: Locale) -> Self {
        Self::with_writer(io::stdout(), locale)
    }
}

impl<W: Write> InMemoryOrderStore<W> {
    pub fn with_writer(out: W, locale: Locale) -> Self {
        Self {
            orders: Vec::new(),
            out,
            locale,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Stored orders as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.orders)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OrderStore for InMemoryOrderStore<W> {
    fn save(&mut self, order: Order) -> Result<(), StoreError> {
        tracing::debug!(
            customer = %order.customer(),
            amount = order.amount(),
            position = self.orders.len(),
            "Saving order"
        );

        // Only keep the order once the confirmation went out.
        writeln!(self.out, "{}", self.locale.store_confirmation())?;
        self.out.flush()?;
        self.orders.push(order);
        Ok(())
    }
}
