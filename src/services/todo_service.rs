use tracing::error;

use crate::{
    db::{
        dao::{DaoLayerError, TodoDao, TodoFields},
        entities::todo,
    },
    error::AppError,
};

const NOT_FOUND: &str = "todo not found";

#[derive(Debug, Clone, Copy)]
enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "failed to fetch todos",
            Operation::Get => "failed to fetch todo",
            Operation::Create => "failed to create todo",
            Operation::Update => "failed to update todo",
            Operation::Delete => "failed to delete todo",
        }
    }
}

#[derive(Clone)]
pub struct TodoService {
    todo_dao: TodoDao,
}

impl TodoService {
    pub fn new(todo_dao: TodoDao) -> Self {
        Self { todo_dao }
    }

    pub async fn list(&self) -> Result<Vec<todo::Model>, AppError> {
        self.todo_dao
            .list()
            .await
            .map_err(|err| map_dao_error(Operation::List, err))
    }

    pub async fn get(&self, id: i32) -> Result<todo::Model, AppError> {
        self.todo_dao
            .find_by_id(id)
            .await
            .map_err(|err| map_dao_error(Operation::Get, err))
    }

    /// Rejects an empty title before touching the store. Any other title,
    /// whitespace included, is stored as given.
    pub async fn create(&self, fields: TodoFields) -> Result<todo::Model, AppError> {
        require_title(&fields.title)?;
        self.todo_dao
            .create(fields)
            .await
            .map_err(|err| map_dao_error(Operation::Create, err))
    }

    pub async fn update(&self, id: i32, fields: TodoFields) -> Result<todo::Model, AppError> {
        self.todo_dao
            .update(id, fields)
            .await
            .map_err(|err| map_dao_error(Operation::Update, err))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.todo_dao
            .delete(id)
            .await
            .map_err(|err| map_dao_error(Operation::Delete, err))
    }
}

fn require_title(title: &str) -> Result<(), AppError> {
    if title.is_empty() {
        return Err(AppError::bad_request("title is required"));
    }
    Ok(())
}

/// Driver details stay in the log; clients only see a generic message.
fn map_dao_error(operation: Operation, err: DaoLayerError) -> AppError {
    match err {
        DaoLayerError::NotFound { .. } => AppError::not_found(NOT_FOUND),
        DaoLayerError::Db(err) => {
            error!(operation = operation.as_str(), error = %err, "todo store error");
            AppError::internal(operation.failure_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::TodoService;
    use crate::{
        db::dao::{TodoDao, TodoFields},
        test_helpers::sample_todo,
    };

    fn service(mock: MockDatabase) -> TodoService {
        TodoService::new(TodoDao::new(&mock.into_connection()))
    }

    #[tokio::test]
    async fn empty_title_is_rejected_before_the_store() {
        let service = service(MockDatabase::new(DatabaseBackend::Postgres));

        let err = service
            .create(TodoFields::default())
            .await
            .expect_err("empty title must be rejected");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "title is required");
    }

    #[tokio::test]
    async fn whitespace_title_is_stored_as_given() {
        let stored = sample_todo(2, "   ");
        let service = service(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([[stored.clone()]]),
        );

        let created = service
            .create(TodoFields {
                title: "   ".to_string(),
                ..Default::default()
            })
            .await
            .expect("whitespace title is not empty");
        assert_eq!(created, stored);
    }

    #[tokio::test]
    async fn store_errors_hide_driver_details() {
        let service = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("password authentication failed".to_string())]),
        );

        let err = service.get(1).await.expect_err("query fails");

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "failed to fetch todo");
    }

    #[tokio::test]
    async fn missing_rows_become_not_found() {
        let service = service(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<crate::db::entities::todo::Model>::new()]),
        );

        let err = service.get(404).await.expect_err("row is missing");

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "todo not found");
    }
}
