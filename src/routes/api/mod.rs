pub mod public;
mod router;
pub mod todos;

pub use router::router;
