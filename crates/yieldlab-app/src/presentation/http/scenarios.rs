use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::response::{json_response, with_cache_control};
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::scenario_commands::{
    CreateScenarioCommand, DeleteScenarioCommand,
};
use crate::presentation::error::ApiError;
use crate::presentation::state::SharedState;

pub async fn list_scenarios(State(state): State<SharedState>) -> Result<Response, ApiError> {
    let scenarios = state.queries.scenario.list_scenarios().await?;
    Ok(json_response(StatusCode::OK, scenarios))
}

pub async fn get_scenario(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let scenario = state.queries.scenario.get_scenario(&id).await?;
    Ok(json_response(StatusCode::OK, scenario))
}

pub async fn create_scenario(
    State(state): State<SharedState>,
    payload: Result<Json<CreateScenarioCommand>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(command) = payload?;
    let scenario = state.command_handlers.create_scenario.handle(command).await?;
    Ok(json_response(StatusCode::CREATED, scenario))
}

pub async fn delete_scenario(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    state
        .command_handlers
        .delete_scenario
        .handle(DeleteScenarioCommand { scenario_id: id })
        .await?;
    Ok(with_cache_control(StatusCode::NO_CONTENT))
}
