//! Staffing use-case services.
//!
//! # Responsibility
//! - Enforce uniqueness, referential integrity and pagination rules.
//! - Keep transport layers decoupled from storage details.
//!
//! # Invariants
//! - Every check runs before any mutation; failed calls never write.
//! - Every operation receives an explicit `RequestContext`.

pub mod context;
pub mod error;
pub mod pagination;
pub mod staff_service;
