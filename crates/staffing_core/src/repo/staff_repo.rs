//! Staff repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide id-keyed CRUD primitives for positions and employees.
//! - Guard the shared `MemoryStore` with a readers-writer lock.
//!
//! # Invariants
//! - Listing returns a copy; callers never observe later mutations.
//! - A failed primitive leaves the store untouched.

use crate::model::employee::{Employee, EmployeeId};
use crate::model::position::{Position, PositionId};
use crate::model::EntityKind;
use crate::store::MemoryStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for staff persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound { kind: EntityKind, id: Uuid },
    LockPoisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::LockPoisoned(context) => write!(f, "store lock poisoned during {context}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for staff CRUD operations.
pub trait StaffRepository {
    fn list_positions(&self) -> RepoResult<Vec<Position>>;
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    fn get_position(&self, id: PositionId) -> RepoResult<Option<Position>>;
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    fn add_position(&self, position: &Position) -> RepoResult<()>;
    fn add_employee(&self, employee: &Employee) -> RepoResult<()>;
    fn update_position(&self, position: &Position) -> RepoResult<()>;
    fn update_employee(&self, employee: &Employee) -> RepoResult<()>;
    fn delete_position(&self, id: PositionId) -> RepoResult<()>;
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()>;
}

impl<R: StaffRepository + ?Sized> StaffRepository for Arc<R> {
    fn list_positions(&self) -> RepoResult<Vec<Position>> {
        (**self).list_positions()
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        (**self).list_employees()
    }

    fn get_position(&self, id: PositionId) -> RepoResult<Option<Position>> {
        (**self).get_position(id)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        (**self).get_employee(id)
    }

    fn add_position(&self, position: &Position) -> RepoResult<()> {
        (**self).add_position(position)
    }

    fn add_employee(&self, employee: &Employee) -> RepoResult<()> {
        (**self).add_employee(employee)
    }

    fn update_position(&self, position: &Position) -> RepoResult<()> {
        (**self).update_position(position)
    }

    fn update_employee(&self, employee: &Employee) -> RepoResult<()> {
        (**self).update_employee(employee)
    }

    fn delete_position(&self, id: PositionId) -> RepoResult<()> {
        (**self).delete_position(id)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        (**self).delete_employee(id)
    }
}

/// Lock-guarded repository over a process-local `MemoryStore`.
#[derive(Debug, Default)]
pub struct MemoryStaffRepository {
    store: RwLock<MemoryStore>,
}

impl MemoryStaffRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, context: &'static str) -> RepoResult<RwLockReadGuard<'_, MemoryStore>> {
        self.store
            .read()
            .map_err(|_| RepoError::LockPoisoned(context))
    }

    fn write(&self, context: &'static str) -> RepoResult<RwLockWriteGuard<'_, MemoryStore>> {
        self.store
            .write()
            .map_err(|_| RepoError::LockPoisoned(context))
    }
}

impl StaffRepository for MemoryStaffRepository {
    fn list_positions(&self) -> RepoResult<Vec<Position>> {
        Ok(self.read("list_positions")?.positions().cloned().collect())
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.read("list_employees")?.employees().cloned().collect())
    }

    fn get_position(&self, id: PositionId) -> RepoResult<Option<Position>> {
        Ok(self.read("get_position")?.position(id).cloned())
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.read("get_employee")?.employee(id).cloned())
    }

    fn add_position(&self, position: &Position) -> RepoResult<()> {
        self.write("add_position")?.insert_position(position.clone());
        Ok(())
    }

    fn add_employee(&self, employee: &Employee) -> RepoResult<()> {
        self.write("add_employee")?.insert_employee(employee.clone());
        Ok(())
    }

    fn update_position(&self, position: &Position) -> RepoResult<()> {
        if !self
            .write("update_position")?
            .replace_position(position.clone())
        {
            return Err(RepoError::NotFound {
                kind: EntityKind::Position,
                id: position.id,
            });
        }
        Ok(())
    }

    fn update_employee(&self, employee: &Employee) -> RepoResult<()> {
        if !self
            .write("update_employee")?
            .replace_employee(employee.clone())
        {
            return Err(RepoError::NotFound {
                kind: EntityKind::Employee,
                id: employee.id,
            });
        }
        Ok(())
    }

    fn delete_position(&self, id: PositionId) -> RepoResult<()> {
        match self.write("delete_position")?.remove_position(id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound {
                kind: EntityKind::Position,
                id,
            }),
        }
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        match self.write("delete_employee")?.remove_employee(id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound {
                kind: EntityKind::Employee,
                id,
            }),
        }
    }
}
