use async_trait::async_trait;
use chrono::Utc;
use log::info;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::scenario_commands::*;
use crate::application::dtos::ScenarioDto;
use crate::application::services::validation::{
    validate_scenario_name, validate_scenario_notes,
};
use crate::application::services::CalculatorService;
use yieldlab_domain::events::scenario_events::ScenarioCreated;
use yieldlab_domain::events::EventBus;
use yieldlab_domain::scenario::{CalculatorType, ScenarioDraft, ScenarioRepository};
use yieldlab_domain::shared::DomainError;

/// Create scenario command handler
pub struct CreateScenarioCommandHandler {
    scenario_repo: Arc<dyn ScenarioRepository>,
    calculator: Arc<CalculatorService>,
    event_bus: Arc<dyn EventBus>,
}

impl CreateScenarioCommandHandler {
    pub fn new(
        scenario_repo: Arc<dyn ScenarioRepository>,
        calculator: Arc<CalculatorService>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            scenario_repo,
            calculator,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateScenarioCommand> for CreateScenarioCommandHandler {
    type Result = CreateScenarioResult;

    async fn handle(&self, cmd: CreateScenarioCommand) -> Result<Self::Result, DomainError> {
        info!("Handling CreateScenarioCommand for scenario: {}", cmd.name);

        // 1. Validate the envelope
        let name = validate_scenario_name(&cmd.name)?;
        let calculator_type = CalculatorType::from_str(cmd.calculator_type.trim())?;
        validate_scenario_notes(cmd.notes.as_deref())?;

        // 2. Input must be usable by the named calculator
        self.calculator.check_input(calculator_type, &cmd.input)?;

        // 3. Fill in the result when the client did not send one
        let result = match cmd.result {
            Some(result) if !result.is_null() => result,
            _ => self.calculator.evaluate(calculator_type, &cmd.input)?,
        };

        // 4. Save
        let scenario = self
            .scenario_repo
            .create(ScenarioDraft {
                name,
                calculator_type,
                input: cmd.input,
                result,
                notes: cmd.notes,
            })
            .await?;

        info!(
            "Scenario created successfully: {} ({}) type={}",
            scenario.name(),
            scenario.id(),
            calculator_type.as_str()
        );

        // 5. Publish domain event
        let event = ScenarioCreated {
            scenario_id: scenario.id().clone(),
            name: scenario.name().to_string(),
            calculator_type,
            occurred_at: Utc::now(),
        };
        self.event_bus.publish(Box::new(event)).await?;

        Ok(ScenarioDto::from(&scenario))
    }
}
