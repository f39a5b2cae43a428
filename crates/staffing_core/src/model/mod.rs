//! Staffing domain model.
//!
//! # Responsibility
//! - Define the canonical `Position` and `Employee` records.
//! - Provide field-shape validation shared by create and update paths.
//!
//! # Invariants
//! - Every entity is identified by a stable v4 `Uuid` assigned on creation.
//! - An `Employee` references exactly one `Position` through `position_id`.

pub mod employee;
pub mod position;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entity family used in diagnostics and not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Position,
    Employee,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Employee => "employee",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-shape violations detected before any store access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelValidationError {
    EmptyName,
    ZeroSalary,
    EmptyFirstName,
    EmptyLastName,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "position name must not be empty"),
            Self::ZeroSalary => write!(f, "position salary must not be zero"),
            Self::EmptyFirstName => write!(f, "employee first name must not be empty"),
            Self::EmptyLastName => write!(f, "employee last name must not be empty"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
