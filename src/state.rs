use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, db::dao::DaoContext, services::TodoService};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub todos: TodoService,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        let daos = DaoContext::new(&db);
        Arc::new(Self {
            todos: TodoService::new(daos.todo()),
            db,
            config,
        })
    }
}
