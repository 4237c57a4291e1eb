mod postgres;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

pub use postgres::PostgresDbProvider;

use crate::config::DatabaseConfig;

/// Opens and verifies connections for one database backend.
#[async_trait]
pub trait DbProvider: Send + Sync {
    async fn connect(&self, url: &str, cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr>;

    async fn ping(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        db.ping().await
    }
}
