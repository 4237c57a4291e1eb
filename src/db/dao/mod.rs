mod context;
pub mod error;
pub mod todo_dao;

pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use todo_dao::{TodoDao, TodoFields};
