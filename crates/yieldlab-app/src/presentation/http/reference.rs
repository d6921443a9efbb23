use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Response;

use super::response::json_response;
use crate::presentation::error::ApiError;
use yieldlab_domain::earnings::{find_tier, release_schedule, tier_table};
use yieldlab_domain::shared::DomainError;

pub async fn get_release_schedule() -> Response {
    json_response(StatusCode::OK, release_schedule())
}

pub async fn list_tiers() -> Response {
    json_response(StatusCode::OK, tier_table())
}

pub async fn get_tier(Path(name): Path<String>) -> Result<Response, ApiError> {
    let tier = find_tier(&name).ok_or_else(|| DomainError::NotFound(format!("tier '{name}'")))?;
    Ok(json_response(StatusCode::OK, tier))
}
