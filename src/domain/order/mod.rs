// ============================================================================
// Order Domain - Business Logic for Order Processing
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (Order, amount formatting)
// - Discount policies (CommonCustomerDiscount, VipCustomerDiscount)
// - Errors (OrderError, StoreError, NotifyError, ProcessError)
// - Processor (OrderProcessor: discount → save → notify)
//
// Persistence and notification channels live outside the domain, in
// `crate::store` and `crate::notification`.
//
// ============================================================================

pub mod value_objects;
pub mod discount;
pub mod errors;
pub mod processor;

// Re-export for convenience
pub use value_objects::*;
pub use discount::*;
pub use errors::*;
pub use processor::*;
