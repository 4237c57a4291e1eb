use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, FixedOffset, TimeZone};
use sea_orm::{DatabaseConnection, MockDatabase};

use crate::{config::AppConfig, db::entities::todo, routes::app, state::AppState};

/// Full middleware stack over the given connection, usually a
/// `MockDatabase`.
pub fn test_app(db: DatabaseConnection) -> Router {
    let state = AppState::new(AppConfig::default(), db);
    app(Arc::clone(&state))
}

pub fn mock_app(mock: MockDatabase) -> Router {
    test_app(mock.into_connection())
}

pub fn fixed_timestamp() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

/// A stored row as the database returns it right after creation.
pub fn sample_todo(id: i32, title: &str) -> todo::Model {
    let now = fixed_timestamp();
    todo::Model {
        id,
        title: title.to_string(),
        description: String::new(),
        completed: false,
        created_at: now,
        updated_at: now,
    }
}
