//! In-memory storage for staffing entities.
//!
//! # Responsibility
//! - Own every persisted `Position` and `Employee` record.
//! - Expose raw keyed primitives with no business rules.
//!
//! # Invariants
//! - Entries are keyed by the hyphenated id string of the stored value.
//! - Enumeration order is ascending by that key.

mod memory;

pub use memory::MemoryStore;
