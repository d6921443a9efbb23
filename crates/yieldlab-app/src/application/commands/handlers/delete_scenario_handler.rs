use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::scenario_commands::*;
use yieldlab_domain::events::scenario_events::ScenarioDeleted;
use yieldlab_domain::events::EventBus;
use yieldlab_domain::scenario::ScenarioRepository;
use yieldlab_domain::shared::{DomainError, ScenarioId};

/// Delete scenario command handler
pub struct DeleteScenarioCommandHandler {
    scenario_repo: Arc<dyn ScenarioRepository>,
    event_bus: Arc<dyn EventBus>,
}

impl DeleteScenarioCommandHandler {
    pub fn new(scenario_repo: Arc<dyn ScenarioRepository>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            scenario_repo,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteScenarioCommand> for DeleteScenarioCommandHandler {
    type Result = DeleteScenarioResult;

    async fn handle(&self, cmd: DeleteScenarioCommand) -> Result<Self::Result, DomainError> {
        info!("Handling DeleteScenarioCommand for scenario: {}", cmd.scenario_id);

        let scenario_id = ScenarioId::from_string(&cmd.scenario_id);

        if !self.scenario_repo.delete(&scenario_id).await? {
            return Err(DomainError::ScenarioNotFound(cmd.scenario_id));
        }

        info!("Scenario deleted: {}", scenario_id);

        let event = ScenarioDeleted {
            scenario_id: scenario_id.clone(),
            occurred_at: Utc::now(),
        };
        self.event_bus.publish(Box::new(event)).await?;

        Ok(DeleteScenarioResult { success: true })
    }
}
