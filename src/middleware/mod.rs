mod cors;
mod json_error;
mod panic;

pub use cors::cors_middleware;
pub use json_error::json_error_middleware;
pub use panic::catch_panic_layer;
