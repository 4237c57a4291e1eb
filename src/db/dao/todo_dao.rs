use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QueryResult, Set, TransactionTrait, sea_query::Expr,
};
use tracing::warn;

use super::{DaoLayerError, DaoResult};
use crate::db::entities::{prelude::Todo, todo};

/// Caller-supplied columns of a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

/// Decodes each row on its own so one bad row does not fail the whole list.
struct ScannedTodo(Result<todo::Model, DbErr>);

impl FromQueryResult for ScannedTodo {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self(todo::Model::from_query_result(res, pre)))
    }
}

impl TodoDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// All todos by ascending id. Rows that fail to decode are logged and
    /// dropped.
    pub async fn list(&self) -> DaoResult<Vec<todo::Model>> {
        let rows = Todo::find()
            .order_by_asc(todo::Column::Id)
            .into_model::<ScannedTodo>()
            .all(&self.db)
            .await?;

        let todos = rows
            .into_iter()
            .enumerate()
            .filter_map(|(row, ScannedTodo(scanned))| match scanned {
                Ok(model) => Some(model),
                Err(err) => {
                    warn!(row, error = %err, "skipping unreadable todo row");
                    None
                }
            })
            .collect();
        Ok(todos)
    }

    pub async fn find_by_id(&self, id: i32) -> DaoResult<todo::Model> {
        find_on(&self.db, id).await
    }

    pub async fn create(&self, fields: TodoFields) -> DaoResult<todo::Model> {
        let model = todo::ActiveModel {
            title: Set(fields.title),
            description: Set(fields.description),
            completed: Set(fields.completed),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    /// Check, write and re-read in one transaction so a concurrent delete
    /// cannot slip between the steps.
    pub async fn update(&self, id: i32, fields: TodoFields) -> DaoResult<todo::Model> {
        let txn = self.db.begin().await?;

        find_on(&txn, id).await?;

        Todo::update_many()
            .col_expr(todo::Column::Title, Expr::value(fields.title))
            .col_expr(todo::Column::Description, Expr::value(fields.description))
            .col_expr(todo::Column::Completed, Expr::value(fields.completed))
            .col_expr(todo::Column::UpdatedAt, Expr::current_timestamp())
            .filter(todo::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        let updated = find_on(&txn, id).await?;
        txn.commit().await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> DaoResult<()> {
        let result = Todo::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound { entity: "todo", id });
        }
        Ok(())
    }
}

async fn find_on<C: ConnectionTrait>(conn: &C, id: i32) -> DaoResult<todo::Model> {
    Todo::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(DaoLayerError::NotFound { entity: "todo", id })
}
