use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;

use super::response::{error_response, json_response};

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

pub async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
