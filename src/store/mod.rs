// ============================================================================
// Order Persistence
// ============================================================================
//
// `OrderStore` is the seam a real database plugs into. The processor only
// ever calls `save`.
//
// ============================================================================

mod memory;

use crate::domain::order::{Order, StoreError};

pub use memory::InMemoryOrderStore;

pub trait OrderStore {
    /// Persist a processed order
    fn save(&mut self, order: Order) -> Result<(), StoreError>;
}

impl<T: OrderStore + ?Sized> OrderStore for Box<T> {
    fn save(&mut self, order: Order) -> Result<(), StoreError> {
        (**self).save(order)
    }
}
