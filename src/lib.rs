//! Order processing: apply a customer's discount, store the order and
//! tell the customer about it.
//!
//! The three collaborators are traits ([`DiscountPolicy`], [`OrderStore`],
//! [`Notifier`]) injected into [`OrderProcessor`].

pub mod app;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod notification;
pub mod store;

pub use config::{AppConfig, Locale};
pub use domain::order::{DiscountPolicy, Order, OrderProcessor, ProcessError};
pub use notification::Notifier;
pub use store::OrderStore;
