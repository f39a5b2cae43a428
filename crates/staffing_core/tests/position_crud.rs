use rust_decimal::Decimal;
use staffing_core::{
    ErrorKind, MemoryStaffRepository, NewPosition, PageRequest, Position, RequestContext,
    ServiceError, StaffService,
};
use std::collections::HashSet;
use uuid::Uuid;

fn service() -> StaffService<MemoryStaffRepository> {
    StaffService::new(MemoryStaffRepository::new())
}

fn salary(units: i64) -> Decimal {
    Decimal::new(units, 0)
}

#[test]
fn create_and_get_roundtrip() {
    let service = service();
    let ctx = RequestContext::new();
    let request = NewPosition::new("worker", salary(500));

    let id = service.create_position(&ctx, &request).unwrap();
    let loaded = service.get_position(&ctx, &id.to_string()).unwrap();

    assert_eq!(loaded, request.into_position(id));
}

#[test]
fn duplicate_name_and_salary_is_rejected() {
    let service = service();
    let ctx = RequestContext::new();
    service
        .create_position(&ctx, &NewPosition::new("worker", salary(500)))
        .unwrap();

    let err = service
        .create_position(&ctx, &NewPosition::new("worker", Decimal::new(50000, 2)))
        .unwrap_err();
    assert!(matches!(err, ServiceError::PositionAlreadyExists { .. }));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    service
        .create_position(&ctx, &NewPosition::new("worker", salary(600)))
        .unwrap();
    service
        .create_position(&ctx, &NewPosition::new("manager", salary(500)))
        .unwrap();

    let all = service
        .get_positions(&ctx, PageRequest::new(100, 1))
        .unwrap();
    assert_eq!(all.len(), 3);
    let pairs = all
        .iter()
        .map(|p| (p.name.clone(), p.salary.normalize()))
        .collect::<HashSet<_>>();
    assert_eq!(pairs.len(), 3);
}

#[test]
fn invalid_fields_are_bad_requests() {
    let service = service();
    let ctx = RequestContext::new();

    let blank = service
        .create_position(&ctx, &NewPosition::new(" ", salary(500)))
        .unwrap_err();
    assert_eq!(blank.kind(), ErrorKind::BadRequest);

    let zero = service
        .create_position(&ctx, &NewPosition::new("worker", Decimal::ZERO))
        .unwrap_err();
    assert_eq!(zero.kind(), ErrorKind::BadRequest);
}

#[test]
fn get_rejects_malformed_and_unknown_ids() {
    let service = service();
    let ctx = RequestContext::new();

    let malformed = service.get_position(&ctx, "42").unwrap_err();
    assert_eq!(malformed.kind(), ErrorKind::Parse);

    let missing = service
        .get_position(&ctx, &Uuid::new_v4().to_string())
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);
}

#[test]
fn update_replaces_without_duplicate_check() {
    let service = service();
    let ctx = RequestContext::new();
    let first = service
        .create_position(&ctx, &NewPosition::new("worker", salary(500)))
        .unwrap();
    service
        .create_position(&ctx, &NewPosition::new("manager", salary(900)))
        .unwrap();

    let updated = Position {
        id: first,
        name: "manager".to_string(),
        salary: salary(900),
    };
    service.update_position(&ctx, &updated).unwrap();

    assert_eq!(
        service.get_position(&ctx, &first.to_string()).unwrap(),
        updated
    );
}

#[test]
fn update_rejects_nil_and_unknown_ids() {
    let service = service();
    let ctx = RequestContext::new();

    let nil = Position {
        id: Uuid::nil(),
        name: "worker".to_string(),
        salary: salary(500),
    };
    assert_eq!(
        service.update_position(&ctx, &nil).unwrap_err().kind(),
        ErrorKind::BadRequest
    );

    let unknown = Position {
        id: Uuid::new_v4(),
        ..nil
    };
    assert_eq!(
        service.update_position(&ctx, &unknown).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn delete_of_absent_id_is_always_not_found() {
    let service = service();
    let ctx = RequestContext::new();
    let id = service
        .create_position(&ctx, &NewPosition::new("worker", salary(500)))
        .unwrap()
        .to_string();

    service.delete_position(&ctx, &id).unwrap();
    for _ in 0..3 {
        let err = service.delete_position(&ctx, &id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}

#[test]
fn pagination_empty_and_boundary_cases() {
    let service = service();
    let ctx = RequestContext::new();

    assert!(service
        .get_positions(&ctx, PageRequest::new(1, 1))
        .unwrap()
        .is_empty());

    service
        .create_position(&ctx, &NewPosition::new("worker", salary(500)))
        .unwrap();
    service
        .create_position(&ctx, &NewPosition::new("manager", salary(900)))
        .unwrap();

    assert_eq!(
        service
            .get_positions(&ctx, PageRequest::new(2, 1))
            .unwrap()
            .len(),
        2
    );
    let err = service
        .get_positions(&ctx, PageRequest::new(1, 3))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let oversized = service
        .get_positions(&ctx, PageRequest::new(101, 1))
        .unwrap_err();
    assert_eq!(oversized.kind(), ErrorKind::BadRequest);
}

#[test]
fn pages_are_stable_and_disjoint() {
    let service = service();
    let ctx = RequestContext::new();
    for units in 1..=5 {
        service
            .create_position(&ctx, &NewPosition::new("worker", salary(units)))
            .unwrap();
    }

    let mut seen = Vec::new();
    for offset in 1..=3 {
        let page = service
            .get_positions(&ctx, PageRequest::new(2, offset))
            .unwrap();
        let again = service
            .get_positions(&ctx, PageRequest::new(2, offset))
            .unwrap();
        assert_eq!(page, again);
        seen.extend(page.into_iter().map(|p| p.id));
    }

    assert_eq!(seen.len(), 5);
    assert_eq!(seen.iter().collect::<HashSet<_>>().len(), 5);
}
