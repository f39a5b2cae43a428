//! Position domain model.
//!
//! # Invariants
//! - `id` is assigned by the service and never changes afterwards.
//! - `salary` is an exact decimal; equality ignores trailing zeros
//!   (`500` and `500.00` are the same salary).

use crate::model::{is_blank, ModelValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a position.
pub type PositionId = Uuid;

/// Job role with a name and a salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Missing in input decodes as nil, which updates reject.
    #[serde(default)]
    pub id: PositionId,
    pub name: String,
    pub salary: Decimal,
}

/// Creation request for a position. The id is assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPosition {
    pub name: String,
    pub salary: Decimal,
}

impl NewPosition {
    pub fn new(name: impl Into<String>, salary: Decimal) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }

    /// Checks creation-time field rules.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `ZeroSalary` when `salary` is zero.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if is_blank(&self.name) {
            return Err(ModelValidationError::EmptyName);
        }
        if self.salary.is_zero() {
            return Err(ModelValidationError::ZeroSalary);
        }
        Ok(())
    }

    /// Returns whether `position` carries the same name and salary.
    pub fn collides_with(&self, position: &Position) -> bool {
        position.name == self.name && position.salary == self.salary
    }

    pub fn into_position(self, id: PositionId) -> Position {
        Position {
            id,
            name: self.name,
            salary: self.salary,
        }
    }
}

impl Position {
    /// Checks update-time field rules. Salary is not re-checked on update.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if is_blank(&self.name) {
            return Err(ModelValidationError::EmptyName);
        }
        Ok(())
    }
}
