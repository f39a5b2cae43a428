//! Service error taxonomy.

use crate::model::position::PositionId;
use crate::model::{EntityKind, ModelValidationError};
use crate::repo::staff_repo::RepoError;
use crate::service::pagination::PageError;
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coarse error family consumed by transport adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    AlreadyExists,
    PositionDoesNotExist,
    Parse,
    Internal,
}

/// Service error for staffing use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Nil id, invalid field shape or invalid pagination window.
    BadRequest(String),
    /// Entity absent, or page past the end of the collection.
    NotFound(String),
    PositionAlreadyExists { name: String, salary: Decimal },
    EmployeeAlreadyExists { first_name: String, last_name: String },
    /// Employee references a position that is not stored.
    PositionDoesNotExist(PositionId),
    /// Identifier text could not be parsed.
    Parse { input: String, reason: String },
    /// Store-level failure (lock poisoning).
    Internal(String),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::PositionAlreadyExists { .. } | Self::EmployeeAlreadyExists { .. } => {
                ErrorKind::AlreadyExists
            }
            Self::PositionDoesNotExist(_) => ErrorKind::PositionDoesNotExist,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn not_found(kind: EntityKind, id: Uuid) -> Self {
        Self::NotFound(format!("{kind} not found: {id}"))
    }

    pub(crate) fn nil_id(kind: EntityKind) -> Self {
        Self::BadRequest(format!("{kind} id must not be nil"))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::NotFound(message) => write!(f, "{message}"),
            Self::PositionAlreadyExists { name, salary } => {
                write!(f, "position already exists: name=`{name}` salary={salary}")
            }
            Self::EmployeeAlreadyExists {
                first_name,
                last_name,
            } => write!(f, "employee already exists: `{first_name} {last_name}`"),
            Self::PositionDoesNotExist(id) => write!(f, "position does not exist: {id}"),
            Self::Parse { input, reason } => write!(f, "cannot parse id `{input}`: {reason}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for ServiceError {}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { kind, id } => Self::not_found(kind, id),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ModelValidationError> for ServiceError {
    fn from(value: ModelValidationError) -> Self {
        Self::BadRequest(value.to_string())
    }
}

impl From<PageError> for ServiceError {
    fn from(value: PageError) -> Self {
        match value {
            PageError::OutOfRange { .. } => Self::NotFound(value.to_string()),
            other => Self::BadRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, ServiceError};
    use crate::model::EntityKind;
    use crate::repo::staff_repo::RepoError;
    use crate::service::pagination::PageError;
    use uuid::Uuid;

    #[test]
    fn repo_not_found_keeps_not_found_kind() {
        let err = ServiceError::from(RepoError::NotFound {
            kind: EntityKind::Employee,
            id: Uuid::nil(),
        });
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("employee not found"));
    }

    #[test]
    fn page_errors_split_between_bad_request_and_not_found() {
        assert_eq!(
            ServiceError::from(PageError::OutOfRange { total: 3 }).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ServiceError::from(PageError::LimitTooLarge { limit: 500, max: 100 }).kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn poisoned_lock_is_internal() {
        let err = ServiceError::from(RepoError::LockPoisoned("add_position"));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
