//! Per-request access logging.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Logs the remote address, protocol version, method and URI of every request.
///
/// The request and response pass through untouched. When the server is not run with connect
/// info (as in tests) the remote address is logged as `unknown`.
pub async fn log_request(request: Request, next: Next) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!(
        "{} - {:?} {} {}",
        remote_addr,
        request.version(),
        request.method(),
        request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/")
    );

    next.run(request).await
}
