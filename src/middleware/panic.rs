use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_to_json)
}

// The panic hook has already logged the payload and backtrace.
fn panic_to_json(_panic: Box<dyn Any + Send + 'static>) -> Response {
    AppError::internal("internal server error").into_response()
}
