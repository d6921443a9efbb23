use async_trait::async_trait;

use super::{Scenario, ScenarioDraft};
use crate::shared::{DomainError, ScenarioId};

/// Saved-scenario store. There is deliberately no update operation.
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// All scenarios, newest first
    async fn list(&self) -> Result<Vec<Scenario>, DomainError>;

    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, DomainError>;

    /// Persist a draft, assigning its id and creation timestamp
    async fn create(&self, draft: ScenarioDraft) -> Result<Scenario, DomainError>;

    /// Returns `false` when nothing was stored under `id`
    async fn delete(&self, id: &ScenarioId) -> Result<bool, DomainError>;
}
