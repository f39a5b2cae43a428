use super::{decode_body, page_request, PageQuery};
use crate::error::ApiResult;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use staffing_core::{Employee, EmployeeId, NewEmployee, RequestContext};

pub async fn list_employees(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Employee>>> {
    let page = page_request(query)?;
    Ok(Json(state.service.get_employees(&ctx, page)?))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.service.get_employee(&ctx, &id)?))
}

/// Responds `201` with the assigned id.
pub async fn create_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EmployeeId>)> {
    let request = decode_body(payload)?;
    let id = state.service.create_employee(&ctx, &request)?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let employee = decode_body(payload)?;
    state.service.update_employee(&ctx, &employee)?;
    Ok(Json(employee))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.service.delete_employee(&ctx, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
