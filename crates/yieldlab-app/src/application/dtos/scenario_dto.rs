use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use yieldlab_domain::scenario::{CalculatorType, Scenario};

/// Wire shape of a saved scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDto {
    pub id: String,
    pub name: String,
    pub calculator_type: CalculatorType,
    pub input: serde_json::Value,
    pub result: serde_json::Value,
    pub notes: Option<String>,
    /// RFC 3339, UTC
    pub created_at: String,
}

impl From<&Scenario> for ScenarioDto {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id().as_str().to_string(),
            name: scenario.name().to_string(),
            calculator_type: scenario.calculator_type(),
            input: scenario.input().clone(),
            result: scenario.result().clone(),
            notes: scenario.notes().map(str::to_string),
            created_at: scenario
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
