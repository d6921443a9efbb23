use std::sync::Arc;

use crate::application::dtos::ScenarioDto;
use yieldlab_domain::scenario::ScenarioRepository;
use yieldlab_domain::shared::{DomainError, ScenarioId};

/// Scenario query service
/// Handles all read operations for saved scenarios
pub struct ScenarioQueryService {
    scenario_repo: Arc<dyn ScenarioRepository>,
}

impl ScenarioQueryService {
    pub fn new(scenario_repo: Arc<dyn ScenarioRepository>) -> Self {
        Self { scenario_repo }
    }

    /// All scenarios, newest first
    pub async fn list_scenarios(&self) -> Result<Vec<ScenarioDto>, DomainError> {
        let scenarios = self.scenario_repo.list().await?;
        Ok(scenarios.iter().map(ScenarioDto::from).collect())
    }

    pub async fn get_scenario(&self, scenario_id: &str) -> Result<ScenarioDto, DomainError> {
        let id = ScenarioId::from_string(scenario_id);
        self.scenario_repo
            .get(&id)
            .await?
            .map(|scenario| ScenarioDto::from(&scenario))
            .ok_or_else(|| DomainError::ScenarioNotFound(scenario_id.to_string()))
    }
}
