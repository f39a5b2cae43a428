use super::{decode_body, page_request, PageQuery};
use crate::error::ApiResult;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use staffing_core::{NewPosition, Position, PositionId, RequestContext};

pub async fn list_positions(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Position>>> {
    let page = page_request(query)?;
    Ok(Json(state.service.get_positions(&ctx, page)?))
}

pub async fn get_position(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> ApiResult<Json<Position>> {
    Ok(Json(state.service.get_position(&ctx, &id)?))
}

/// Responds `201` with the assigned id.
pub async fn create_position(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<NewPosition>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PositionId>)> {
    let request = decode_body(payload)?;
    let id = state.service.create_position(&ctx, &request)?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn update_position(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<Position>, JsonRejection>,
) -> ApiResult<Json<Position>> {
    let position = decode_body(payload)?;
    state.service.update_position(&ctx, &position)?;
    Ok(Json(position))
}

pub async fn delete_position(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.service.delete_position(&ctx, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
