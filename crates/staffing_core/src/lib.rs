//! Core domain logic for the staffing service.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingConfig};
pub use model::employee::{Employee, EmployeeId, NewEmployee};
pub use model::position::{NewPosition, Position, PositionId};
pub use model::{EntityKind, ModelValidationError};
pub use repo::staff_repo::{MemoryStaffRepository, RepoError, RepoResult, StaffRepository};
pub use service::context::RequestContext;
pub use service::error::{ErrorKind, ServiceError, ServiceResult};
pub use service::pagination::{PageRequest, DEFAULT_MAX_PAGE_LIMIT};
pub use service::staff_service::{parse_id, ServiceConfig, StaffService};
pub use store::MemoryStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
