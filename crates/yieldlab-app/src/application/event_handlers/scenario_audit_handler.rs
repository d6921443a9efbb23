use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use yieldlab_domain::events::scenario_events::*;
use yieldlab_domain::events::EventHandler;
use yieldlab_domain::shared::DomainError;

/// Writes an audit line for every scenario lifecycle event
#[derive(Clone, Default)]
pub struct ScenarioAuditHandler {
    created: Arc<AtomicU64>,
    deleted: Arc<AtomicU64>,
}

impl ScenarioAuditHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// (created, deleted) since startup
    pub fn totals(&self) -> (u64, u64) {
        (
            self.created.load(Ordering::Relaxed),
            self.deleted.load(Ordering::Relaxed),
        )
    }
}

#[async_trait]
impl EventHandler<ScenarioCreated> for ScenarioAuditHandler {
    async fn handle(&self, event: &ScenarioCreated) -> Result<(), DomainError> {
        let created = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            target: "yieldlab::audit",
            scenario_id = %event.scenario_id,
            calculator_type = event.calculator_type.as_str(),
            created_since_start = created,
            occurred_at = %event.occurred_at,
            "Scenario created: {}",
            event.name
        );
        Ok(())
    }
}

#[async_trait]
impl EventHandler<ScenarioDeleted> for ScenarioAuditHandler {
    async fn handle(&self, event: &ScenarioDeleted) -> Result<(), DomainError> {
        let deleted = self.deleted.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            target: "yieldlab::audit",
            scenario_id = %event.scenario_id,
            deleted_since_start = deleted,
            occurred_at = %event.occurred_at,
            "Scenario deleted"
        );
        Ok(())
    }
}
