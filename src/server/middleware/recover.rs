//! Panic boundary for the request pipeline.
//!
//! A panic inside a handler or inner middleware is caught by [`CatchPanicLayer`], logged with a
//! backtrace, and answered with a plain 500. The response asks the client to close the
//! connection since the panicking task may have left per-connection state inconsistent.

use std::{any::Any, backtrace::Backtrace};

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

/// Builds the outermost error boundary around the dynamic routes.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "Unknown panic payload"
    };

    tracing::error!(
        backtrace = %Backtrace::force_capture(),
        "Request handler panicked: {}",
        message
    );

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::INTERNAL_SERVER_ERROR
            .canonical_reason()
            .unwrap_or_default(),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));

    response
}
