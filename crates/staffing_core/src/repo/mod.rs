//! Repository layer over the in-memory store.
//!
//! # Responsibility
//! - Define the single data access contract used by the service.
//! - Isolate locking details from business orchestration.
//!
//! # Invariants
//! - Repositories enforce no business rules; callers validate first.
//! - `update_*` and `delete_*` return `RepoError::NotFound` for absent ids.

pub mod staff_repo;
