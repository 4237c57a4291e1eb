//! Runs against a live Postgres configured through `DB_*`.
//!
//! `cargo test -- --ignored` after `docker compose up -d db` or similar.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use todo_api::{
    config::{DatabaseConfig, EnvConfig},
    db::{
        Bootstrapper,
        dao::{DaoContext, DaoLayerError, TodoFields},
    },
};

async fn connect() -> DatabaseConnection {
    let cfg = DatabaseConfig::from_env().expect("DB_* environment should load");
    let db = Bootstrapper::postgres(&cfg)
        .establish(&cfg)
        .await
        .expect("database should be reachable");
    db.execute_unprepared(include_str!("../sql/init.sql"))
        .await
        .expect("schema should apply");
    db
}

fn fields(title: &str) -> TodoFields {
    TodoFields {
        title: title.to_string(),
        description: String::new(),
        completed: false,
    }
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn created_rows_get_store_assigned_columns() {
    let db = connect().await;
    let todos = DaoContext::new(&db).todo();

    let created = todos
        .create(fields("integration: create"))
        .await
        .expect("insert should succeed");

    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.description, "");
    assert!(!created.completed);

    let listed = todos.list().await.expect("list should succeed");
    assert!(listed.iter().any(|todo| todo.id == created.id));
    assert!(listed.windows(2).all(|pair| pair[0].id < pair[1].id));

    todos.delete(created.id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn update_moves_updated_at_forward_only() {
    let db = connect().await;
    let todos = DaoContext::new(&db).todo();
    let created = todos
        .create(fields("integration: update"))
        .await
        .expect("insert should succeed");

    let updated = todos
        .update(
            created.id,
            TodoFields {
                title: "integration: updated".to_string(),
                description: "done".to_string(),
                completed: true,
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert!(updated.completed);
    assert_eq!(updated.description, "done");

    todos.delete(created.id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn second_delete_and_later_reads_are_not_found() {
    let db = connect().await;
    let todos = DaoContext::new(&db).todo();
    let created = todos
        .create(fields("integration: delete"))
        .await
        .expect("insert should succeed");

    todos
        .delete(created.id)
        .await
        .expect("first delete removes the row");

    let again = todos.delete(created.id).await.expect_err("already gone");
    assert!(matches!(again, DaoLayerError::NotFound { .. }));

    let read = todos
        .find_by_id(created.id)
        .await
        .expect_err("already gone");
    assert!(matches!(read, DaoLayerError::NotFound { .. }));

    let write = todos
        .update(created.id, fields("too late"))
        .await
        .expect_err("already gone");
    assert!(matches!(write, DaoLayerError::NotFound { .. }));
}
