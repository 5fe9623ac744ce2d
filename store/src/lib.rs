//! Haul Store
//!
//! Row persistence behind the [`Store`] trait, plus the in-memory
//! [`MemoryStore`] used by the services and their tests.

mod error;
mod index;
mod memory;
mod store;
mod transaction;

pub use error::{StoreError, StoreResult};
pub use index::ForeignKeyIndex;
pub use memory::MemoryStore;
pub use store::{Scope, Store, StoreExt};
pub use transaction::TransactionState;
