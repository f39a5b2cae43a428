//! Position and employee use-case service.
//!
//! # Responsibility
//! - Validate create/update input and enforce duplicate rules.
//! - Keep every employee pointing at a stored position on write.
//! - Serve paginated listings.
//!
//! # Invariants
//! - No two created positions share both `name` and `salary`.
//! - No two created employees share both `first_name` and `last_name`.
//! - Check-then-write sequences hold the exclusive gate, so concurrent
//!   duplicate creates cannot both succeed.
//! - Deleting a position never touches employees referencing it.

use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use crate::model::position::{NewPosition, Position, PositionId};
use crate::model::EntityKind;
use crate::repo::staff_repo::StaffRepository;
use crate::service::context::RequestContext;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::pagination::{paginate, PageRequest, DEFAULT_MAX_PAGE_LIMIT};
use log::{debug, info, warn};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Tunables for the staff service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Largest accepted `limit` for list operations.
    pub max_page_limit: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_page_limit: DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

/// Use-case service over a staff repository.
pub struct StaffService<R: StaffRepository> {
    repo: R,
    config: ServiceConfig,
    gate: RwLock<()>,
}

impl<R: StaffRepository> StaffService<R> {
    /// Creates a service with default configuration.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, ServiceConfig::default())
    }

    pub fn with_config(repo: R, config: ServiceConfig) -> Self {
        Self {
            repo,
            config,
            gate: RwLock::new(()),
        }
    }

    pub fn config(&self) -> ServiceConfig {
        self.config
    }

    /// Creates a position and returns its assigned id.
    ///
    /// # Errors
    /// - `BadRequest` for a blank name or zero salary.
    /// - `PositionAlreadyExists` when a stored position has the same name and salary.
    pub fn create_position(
        &self,
        ctx: &RequestContext,
        request: &NewPosition,
    ) -> ServiceResult<PositionId> {
        request.validate()?;

        let _guard = self.write_gate()?;
        if self
            .repo
            .list_positions()?
            .iter()
            .any(|existing| request.collides_with(existing))
        {
            warn!(
                "event=position_create module=service status=rejected reason=duplicate correlation_id={}",
                ctx.correlation_id()
            );
            return Err(ServiceError::PositionAlreadyExists {
                name: request.name.clone(),
                salary: request.salary,
            });
        }

        let position = request.clone().into_position(Uuid::new_v4());
        self.repo.add_position(&position)?;
        info!(
            "event=position_create module=service status=ok correlation_id={} position_id={}",
            ctx.correlation_id(),
            position.id
        );
        Ok(position.id)
    }

    /// Creates an employee and returns its assigned id.
    ///
    /// The referenced position is resolved before the duplicate-name check.
    ///
    /// # Errors
    /// - `BadRequest` for blank names.
    /// - `PositionDoesNotExist` when `position_id` is not stored.
    /// - `EmployeeAlreadyExists` when a stored employee has the same names.
    pub fn create_employee(
        &self,
        ctx: &RequestContext,
        request: &NewEmployee,
    ) -> ServiceResult<EmployeeId> {
        request.validate()?;

        let _guard = self.write_gate()?;
        self.ensure_position_exists(ctx, request.position_id)?;
        if self
            .repo
            .list_employees()?
            .iter()
            .any(|existing| request.collides_with(existing))
        {
            warn!(
                "event=employee_create module=service status=rejected reason=duplicate correlation_id={}",
                ctx.correlation_id()
            );
            return Err(ServiceError::EmployeeAlreadyExists {
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
            });
        }

        let employee = request.clone().into_employee(Uuid::new_v4());
        self.repo.add_employee(&employee)?;
        info!(
            "event=employee_create module=service status=ok correlation_id={} employee_id={} position_id={}",
            ctx.correlation_id(),
            employee.id,
            employee.position_id
        );
        Ok(employee.id)
    }

    /// Lists one page of positions ordered by id.
    pub fn get_positions(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> ServiceResult<Vec<Position>> {
        let _guard = self.read_gate()?;
        let positions = self.repo.list_positions()?;
        let items = paginate(positions, page, self.config.max_page_limit)?;
        debug!(
            "event=position_list module=service status=ok correlation_id={} limit={} offset={} returned={}",
            ctx.correlation_id(),
            page.limit,
            page.offset,
            items.len()
        );
        Ok(items)
    }

    /// Lists one page of employees ordered by id.
    pub fn get_employees(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> ServiceResult<Vec<Employee>> {
        let _guard = self.read_gate()?;
        let employees = self.repo.list_employees()?;
        let items = paginate(employees, page, self.config.max_page_limit)?;
        debug!(
            "event=employee_list module=service status=ok correlation_id={} limit={} offset={} returned={}",
            ctx.correlation_id(),
            page.limit,
            page.offset,
            items.len()
        );
        Ok(items)
    }

    /// Gets one position by its textual id.
    pub fn get_position(&self, ctx: &RequestContext, id: &str) -> ServiceResult<Position> {
        let id = parse_id(id)?;
        let _guard = self.read_gate()?;
        let position = self
            .repo
            .get_position(id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Position, id))?;
        debug!(
            "event=position_get module=service status=ok correlation_id={} position_id={id}",
            ctx.correlation_id()
        );
        Ok(position)
    }

    /// Gets one employee by its textual id.
    pub fn get_employee(&self, ctx: &RequestContext, id: &str) -> ServiceResult<Employee> {
        let id = parse_id(id)?;
        let _guard = self.read_gate()?;
        let employee = self
            .repo
            .get_employee(id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Employee, id))?;
        debug!(
            "event=employee_get module=service status=ok correlation_id={} employee_id={id}",
            ctx.correlation_id()
        );
        Ok(employee)
    }

    /// Deletes a position. Employees referencing it are left as they are.
    pub fn delete_position(&self, ctx: &RequestContext, id: &str) -> ServiceResult<()> {
        let id = parse_id(id)?;
        let _guard = self.write_gate()?;
        let dangling = self
            .repo
            .list_employees()?
            .iter()
            .filter(|employee| employee.position_id == id)
            .count();
        self.repo.delete_position(id)?;

        if dangling > 0 {
            warn!(
                "event=position_delete module=service status=ok correlation_id={} position_id={id} dangling_employees={dangling}",
                ctx.correlation_id()
            );
        } else {
            info!(
                "event=position_delete module=service status=ok correlation_id={} position_id={id}",
                ctx.correlation_id()
            );
        }
        Ok(())
    }

    pub fn delete_employee(&self, ctx: &RequestContext, id: &str) -> ServiceResult<()> {
        let id = parse_id(id)?;
        let _guard = self.write_gate()?;
        self.repo.delete_employee(id)?;
        info!(
            "event=employee_delete module=service status=ok correlation_id={} employee_id={id}",
            ctx.correlation_id()
        );
        Ok(())
    }

    /// Replaces a stored position. The duplicate rule is not re-checked.
    ///
    /// # Errors
    /// - `BadRequest` for a nil id or blank name.
    /// - `NotFound` when no position has this id.
    pub fn update_position(&self, ctx: &RequestContext, position: &Position) -> ServiceResult<()> {
        if position.id.is_nil() {
            return Err(ServiceError::nil_id(EntityKind::Position));
        }
        position.validate()?;

        let _guard = self.write_gate()?;
        self.repo.update_position(position)?;
        info!(
            "event=position_update module=service status=ok correlation_id={} position_id={}",
            ctx.correlation_id(),
            position.id
        );
        Ok(())
    }

    /// Replaces a stored employee after re-resolving its position.
    ///
    /// # Errors
    /// - `BadRequest` for a nil id or blank names.
    /// - `PositionDoesNotExist` when `position_id` is not stored.
    /// - `NotFound` when no employee has this id.
    pub fn update_employee(&self, ctx: &RequestContext, employee: &Employee) -> ServiceResult<()> {
        if employee.id.is_nil() {
            return Err(ServiceError::nil_id(EntityKind::Employee));
        }
        employee.validate()?;

        let _guard = self.write_gate()?;
        self.ensure_position_exists(ctx, employee.position_id)?;
        self.repo.update_employee(employee)?;
        info!(
            "event=employee_update module=service status=ok correlation_id={} employee_id={} position_id={}",
            ctx.correlation_id(),
            employee.id,
            employee.position_id
        );
        Ok(())
    }

    fn ensure_position_exists(
        &self,
        ctx: &RequestContext,
        position_id: PositionId,
    ) -> ServiceResult<()> {
        if self.repo.get_position(position_id)?.is_none() {
            warn!(
                "event=position_resolve module=service status=rejected correlation_id={} position_id={position_id}",
                ctx.correlation_id()
            );
            return Err(ServiceError::PositionDoesNotExist(position_id));
        }
        Ok(())
    }

    fn read_gate(&self) -> ServiceResult<RwLockReadGuard<'_, ()>> {
        self.gate
            .read()
            .map_err(|_| ServiceError::Internal("service gate poisoned".to_string()))
    }

    fn write_gate(&self) -> ServiceResult<RwLockWriteGuard<'_, ()>> {
        self.gate
            .write()
            .map_err(|_| ServiceError::Internal("service gate poisoned".to_string()))
    }
}

/// Parses a textual entity id.
///
/// # Errors
/// - `Parse` when `input` is not a valid UUID.
pub fn parse_id(input: &str) -> ServiceResult<Uuid> {
    Uuid::parse_str(input.trim()).map_err(|err| ServiceError::Parse {
        input: input.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_id, ServiceConfig, StaffService};
    use crate::model::position::NewPosition;
    use crate::repo::staff_repo::MemoryStaffRepository;
    use crate::service::context::RequestContext;
    use crate::service::error::ErrorKind;
    use crate::service::pagination::PageRequest;
    use rust_decimal::Decimal;

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(parse_id("6f0c1d2e-8a4b-4c3d-9e5f-0a1b2c3d4e5f").is_ok());
    }

    #[test]
    fn configured_page_limit_is_enforced() {
        let service = StaffService::with_config(
            MemoryStaffRepository::new(),
            ServiceConfig { max_page_limit: 5 },
        );
        let ctx = RequestContext::new();
        service
            .create_position(&ctx, &NewPosition::new("worker", Decimal::new(500, 0)))
            .unwrap();

        let err = service
            .get_positions(&ctx, PageRequest::new(6, 1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(
            service
                .get_positions(&ctx, PageRequest::new(5, 1))
                .unwrap()
                .len(),
            1
        );
    }
}
