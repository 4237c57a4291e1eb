use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    db::{dao::TodoFields, entities::todo},
    error::AppError,
    state::AppState,
};

/// Body of create and update. Absent or `null` fields fall back to their
/// defaults.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl From<TodoPayload> for TodoFields {
    fn from(payload: TodoPayload) -> Self {
        Self {
            title: payload.title.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            completed: payload.completed.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.todos.list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todos.get(id).await?;
    Ok(Json(todo.into()))
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let payload = parse_payload(&body)?;
    let todo = state.todos.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<TodoResponse>, AppError> {
    let payload = parse_payload(&body)?;
    let todo = state.todos.update(id, payload.into()).await?;
    Ok(Json(todo.into()))
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// The content type is not checked; only the bytes have to be a valid payload.
fn parse_payload(body: &[u8]) -> Result<TodoPayload, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        debug!(reason = %err, "rejected request body");
        AppError::bad_request("invalid request body")
    })
}

impl From<todo::Model> for TodoResponse {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
