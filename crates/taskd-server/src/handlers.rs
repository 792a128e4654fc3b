//! REST handlers for the task routes.
//!
//! Validation happens here first (body shape, required fields, numeric
//! path IDs) so every rejection uses the uniform error envelope; the
//! store's own checks remain behind it for non-HTTP callers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use taskd_store::{TaskId, TaskStatus};

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Liveness probe. Touches no store state, so it attests only that the
/// process is accepting connections.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn list_tasks(State(state): State<AppState>) -> impl IntoResponse {
    let tasks = state.store.list();
    Json(json!({
        "success": true,
        "count": tasks.len(),
        "tasks": tasks,
    }))
}

pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(bad_json)?;
    let title = body
        .title
        .as_deref()
        .ok_or_else(|| ApiError::validation("title is required"))?;

    let task = state
        .store
        .create(title, body.description.as_deref().unwrap_or(""))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "task": task })),
    ))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let task = state.store.get(parse_task_id(&id)?)?;
    Ok(Json(json!({ "success": true, "task": task })))
}

pub async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_task_id(&id)?;
    let Json(body) = payload.map_err(bad_json)?;
    let status: TaskStatus = body
        .status
        .as_deref()
        .ok_or_else(|| ApiError::validation("status is required"))?
        .parse()?;

    let task = state.store.update_status(id, status)?;
    Ok(Json(json!({ "success": true, "task": task })))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_task_id(&id)?;
    state.store.delete(id)?;
    Ok(Json(json!({
        "success": true,
        "message": format!("task {id} deleted"),
    })))
}

/// Fallback for routes outside the task surface.
pub async fn not_found_fallback() -> ApiError {
    ApiError::not_found("endpoint not found")
}

/// Path IDs must be positive integers; anything else is a 400, not a 404.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    match raw.parse::<TaskId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::validation(format!(
            "task id must be a positive integer, got {raw:?}"
        ))),
    }
}

fn bad_json(rejection: JsonRejection) -> ApiError {
    ApiError::validation(format!("invalid JSON body: {rejection}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_parsing() {
        assert_eq!(parse_task_id("1").unwrap(), 1);
        assert_eq!(parse_task_id("42").unwrap(), 42);
        assert!(parse_task_id("0").is_err());
        assert!(parse_task_id("-1").is_err());
        assert!(parse_task_id("abc").is_err());
        assert!(parse_task_id("1.5").is_err());
        assert!(parse_task_id("").is_err());
    }
}
