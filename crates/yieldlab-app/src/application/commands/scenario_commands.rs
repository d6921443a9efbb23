use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::ScenarioDto;

// ============================================================
// Create Scenario Command
// ============================================================

/// Body of `POST /api/scenarios`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScenarioCommand {
    pub name: String,
    pub calculator_type: String,
    pub input: serde_json::Value,
    /// Computed from `input` when absent
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Command for CreateScenarioCommand {}

pub type CreateScenarioResult = ScenarioDto;

// ============================================================
// Delete Scenario Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteScenarioCommand {
    pub scenario_id: String,
}

impl Command for DeleteScenarioCommand {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteScenarioResult {
    pub success: bool,
}
