use async_trait::async_trait;
use tokio::sync::RwLock;

use yieldlab_domain::scenario::{Scenario, ScenarioDraft, ScenarioRepository};
use yieldlab_domain::shared::{DomainError, ScenarioId};

/// Process-local scenario store; contents are lost on restart
pub struct InMemoryScenarioRepository {
    // Insertion order, oldest first
    scenarios: RwLock<Vec<Scenario>>,
}

impl InMemoryScenarioRepository {
    pub fn new() -> Self {
        Self {
            scenarios: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryScenarioRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScenarioRepository for InMemoryScenarioRepository {
    async fn list(&self) -> Result<Vec<Scenario>, DomainError> {
        let scenarios = self.scenarios.read().await;
        let mut newest_first: Vec<Scenario> = scenarios.iter().rev().cloned().collect();
        // Stable: equal timestamps keep most-recent-insert first
        newest_first.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(newest_first)
    }

    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, DomainError> {
        let scenarios = self.scenarios.read().await;
        Ok(scenarios.iter().find(|s| s.id() == id).cloned())
    }

    async fn create(&self, draft: ScenarioDraft) -> Result<Scenario, DomainError> {
        let scenario = Scenario::from_draft(draft);
        self.scenarios.write().await.push(scenario.clone());
        Ok(scenario)
    }

    async fn delete(&self, id: &ScenarioId) -> Result<bool, DomainError> {
        let mut scenarios = self.scenarios.write().await;
        let before = scenarios.len();
        scenarios.retain(|s| s.id() != id);
        Ok(scenarios.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use yieldlab_domain::scenario::CalculatorType;

    fn draft(name: &str) -> ScenarioDraft {
        ScenarioDraft {
            name: name.to_string(),
            calculator_type: CalculatorType::Referral,
            input: json!({ "downlineUnitCount": 10, "dailyRatePercent": 1.25 }),
            result: json!({ "directDailyReward": 2.5 }),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryScenarioRepository::new();
        let created = repo.create(draft("first")).await.unwrap();

        let found = repo.get(created.id()).await.unwrap().unwrap();
        assert_eq!(found, created);

        let missing = repo.get(&ScenarioId::new()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryScenarioRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(draft(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_anything_was_removed() {
        let repo = InMemoryScenarioRepository::new();
        let created = repo.create(draft("doomed")).await.unwrap();

        assert!(repo.delete(created.id()).await.unwrap());
        assert!(!repo.delete(created.id()).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
