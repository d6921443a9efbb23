use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::response::json_response;
use crate::presentation::error::ApiError;
use crate::presentation::state::SharedState;
use yieldlab_domain::earnings::{InvestmentInput, ReferralInput, TeamRewardInput};

pub async fn calculate_investment(
    State(state): State<SharedState>,
    payload: Result<Json<InvestmentInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload?;
    let result = state.services.calculator.investment(&input)?;
    Ok(json_response(StatusCode::OK, result))
}

pub async fn calculate_referral(
    State(state): State<SharedState>,
    payload: Result<Json<ReferralInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload?;
    let result = state.services.calculator.referral(&input)?;
    Ok(json_response(StatusCode::OK, result))
}

pub async fn calculate_team(
    State(state): State<SharedState>,
    payload: Result<Json<TeamRewardInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload?;
    let result = state.services.calculator.team(&input)?;
    Ok(json_response(StatusCode::OK, result))
}
