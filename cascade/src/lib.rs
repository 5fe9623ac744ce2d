//! Haul Cascade
//!
//! Walks a record's declared associations and soft-deletes the record
//! together with everything reachable from it.

mod result;
mod soft_delete;
mod walker;

pub use result::DeletedRecords;
pub use soft_delete::soft_destroy;
pub use walker::discover_associations;
