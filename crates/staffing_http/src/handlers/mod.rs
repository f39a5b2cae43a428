//! Route handlers.

pub mod employees;
pub mod positions;

use crate::error::ApiError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use staffing_core::PageRequest;

const DEFAULT_PAGE_LIMIT: u32 = 10;
const DEFAULT_PAGE_OFFSET: u32 = 1;

/// Raw `limit`/`offset` query parameters, parsed after extraction so that
/// malformed numbers map onto the API error format.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    pub fn to_page_request(&self) -> Result<PageRequest, ApiError> {
        Ok(PageRequest::new(
            parse_page_param("limit", self.limit.as_deref(), DEFAULT_PAGE_LIMIT)?,
            parse_page_param("offset", self.offset.as_deref(), DEFAULT_PAGE_OFFSET)?,
        ))
    }
}

fn parse_page_param(name: &str, raw: Option<&str>, default: u32) -> Result<u32, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<u32>().map_err(|err| {
            ApiError::InvalidRequest(format!("`{name}` must be a non-negative integer: {err}"))
        }),
    }
}

pub(crate) fn page_request(
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<PageRequest, ApiError> {
    let Query(query) = query.map_err(|err| ApiError::InvalidRequest(err.body_text()))?;
    query.to_page_request()
}

pub(crate) fn decode_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|err| ApiError::Decode(err.body_text()))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": staffing_core::core_version() }))
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
