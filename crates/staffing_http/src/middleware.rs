//! Correlation-id and access-log middleware.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use crate::error::ErrorMessage;
use log::{error, info, warn};
use staffing_core::RequestContext;
use std::time::Instant;
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Adopts a valid incoming correlation id or generates one, stores the
/// resulting `RequestContext` in request extensions and echoes the id back.
pub async fn correlation_id(mut req: Request, next: Next) -> Response {
    let ctx = req
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .map(RequestContext::with_correlation_id)
        .unwrap_or_default();
    req.extensions_mut().insert(ctx);

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&ctx.correlation_id().to_string()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}

/// Logs method, path, status and elapsed time for every request, plus the
/// error text of failed ones.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let correlation_id = req
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.correlation_id().to_string())
        .unwrap_or_else(|| "-".to_string());
    let started = Instant::now();

    let response = next.run(req).await;

    if let Some(ErrorMessage(message)) = response.extensions().get::<ErrorMessage>() {
        let status = response.status();
        if status.is_server_error() {
            error!(
                "event=http_error module=http status={} correlation_id={correlation_id} error={message}",
                status.as_u16()
            );
        } else {
            warn!(
                "event=http_error module=http status={} correlation_id={correlation_id} error={message}",
                status.as_u16()
            );
        }
    }

    info!(
        "event=http_access module=http method={} path={} status={} elapsed_ms={} correlation_id={}",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis(),
        correlation_id
    );
    response
}
