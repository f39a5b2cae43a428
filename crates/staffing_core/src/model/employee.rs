//! Employee domain model.

use crate::model::position::PositionId;
use crate::model::{is_blank, ModelValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an employee.
pub type EmployeeId = Uuid;

/// Person assigned to exactly one position.
///
/// Serialized with camelCase field names to match the external schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub position_id: PositionId,
}

/// Creation request for an employee. The id is assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    /// Missing in input decodes as nil and fails position resolution.
    #[serde(default)]
    pub position_id: PositionId,
}

impl NewEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position_id: PositionId,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            position_id,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        validate_names(&self.first_name, &self.last_name)
    }

    /// Returns whether `employee` carries the same first and last name.
    pub fn collides_with(&self, employee: &Employee) -> bool {
        employee.first_name == self.first_name && employee.last_name == self.last_name
    }

    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            position_id: self.position_id,
        }
    }
}

impl Employee {
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        validate_names(&self.first_name, &self.last_name)
    }
}

fn validate_names(first_name: &str, last_name: &str) -> Result<(), ModelValidationError> {
    if is_blank(first_name) {
        return Err(ModelValidationError::EmptyFirstName);
    }
    if is_blank(last_name) {
        return Err(ModelValidationError::EmptyLastName);
    }
    Ok(())
}
