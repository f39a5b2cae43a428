use crate::model::employee::{Employee, EmployeeId};
use crate::model::position::{Position, PositionId};
use std::collections::BTreeMap;

/// Flat id-keyed collections for both entity families.
///
/// Callers are responsible for locking; the store itself is not `Sync`-aware.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    positions: BTreeMap<String, Position>,
    employees: BTreeMap<String, Employee>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub fn position(&self, id: PositionId) -> Option<&Position> {
        self.positions.get(&key(id))
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&key(id))
    }

    /// Inserts or overwrites the entry keyed by `position.id`.
    pub fn insert_position(&mut self, position: Position) {
        self.positions.insert(key(position.id), position);
    }

    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(key(employee.id), employee);
    }

    /// Replaces an existing entry. Returns `false` when the id is absent.
    pub fn replace_position(&mut self, position: Position) -> bool {
        match self.positions.get_mut(&key(position.id)) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    pub fn replace_employee(&mut self, employee: Employee) -> bool {
        match self.employees.get_mut(&key(employee.id)) {
            Some(slot) => {
                *slot = employee;
                true
            }
            None => false,
        }
    }

    pub fn remove_position(&mut self, id: PositionId) -> Option<Position> {
        self.positions.remove(&key(id))
    }

    pub fn remove_employee(&mut self, id: EmployeeId) -> Option<Employee> {
        self.employees.remove(&key(id))
    }
}

fn key(id: uuid::Uuid) -> String {
    id.hyphenated().to_string()
}
