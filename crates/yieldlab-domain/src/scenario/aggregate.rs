use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::{DomainError, ScenarioId};

/// Which simulator produced a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorType {
    Investment,
    Referral,
    Team,
}

impl CalculatorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorType::Investment => "investment",
            CalculatorType::Referral => "referral",
            CalculatorType::Team => "team",
        }
    }
}

impl FromStr for CalculatorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "investment" => Ok(CalculatorType::Investment),
            "referral" => Ok(CalculatorType::Referral),
            "team" => Ok(CalculatorType::Team),
            _ => Err(DomainError::Validation(format!(
                "Invalid calculator type: {s}. Must be 'investment', 'referral' or 'team'"
            ))),
        }
    }
}

/// A scenario as submitted, before the store assigns identity
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioDraft {
    pub name: String,
    pub calculator_type: CalculatorType,
    pub input: serde_json::Value,
    pub result: serde_json::Value,
    pub notes: Option<String>,
}

/// A saved, named calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    id: ScenarioId,
    name: String,
    calculator_type: CalculatorType,
    input: serde_json::Value,
    result: serde_json::Value,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl Scenario {
    /// Assign a fresh id and the current time to a draft
    pub fn from_draft(draft: ScenarioDraft) -> Self {
        Self {
            id: ScenarioId::new(),
            name: draft.name,
            calculator_type: draft.calculator_type,
            input: draft.input,
            result: draft.result,
            notes: draft.notes,
            created_at: Utc::now(),
        }
    }

    /// Restore a Scenario from persistence
    pub fn restore(id: ScenarioId, draft: ScenarioDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            calculator_type: draft.calculator_type,
            input: draft.input,
            result: draft.result,
            notes: draft.notes,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> &ScenarioId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calculator_type(&self) -> CalculatorType {
        self.calculator_type
    }

    pub fn input(&self) -> &serde_json::Value {
        &self.input
    }

    pub fn result(&self) -> &serde_json::Value {
        &self.result
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
