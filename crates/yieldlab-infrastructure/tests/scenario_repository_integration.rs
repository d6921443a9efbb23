use std::sync::Arc;

use serde_json::json;
use yieldlab_domain::scenario::{CalculatorType, ScenarioRepository};
use yieldlab_domain::shared::ScenarioId;
use yieldlab_infrastructure::persistence::repositories::{
    InMemoryScenarioRepository, SqliteScenarioRepository,
};
use yieldlab_infrastructure::persistence::Database;

mod test_helpers;

async fn sqlite_repo() -> Arc<dyn ScenarioRepository> {
    let pool = test_helpers::setup_in_memory_db().await;
    Arc::new(SqliteScenarioRepository::new(Arc::new(pool)))
}

fn memory_repo() -> Arc<dyn ScenarioRepository> {
    Arc::new(InMemoryScenarioRepository::new())
}

async fn assert_create_get_roundtrip(repo: Arc<dyn ScenarioRepository>) {
    let created = repo
        .create(test_helpers::investment_draft("Ten units", 10))
        .await
        .expect("Create scenario");

    assert!(uuid_like(created.id().as_str()));

    let found = repo
        .get(created.id())
        .await
        .expect("Get scenario")
        .expect("Scenario should exist");

    assert_eq!(found, created);
    assert_eq!(found.name(), "Ten units");
    assert_eq!(found.calculator_type(), CalculatorType::Investment);
    assert_eq!(found.input()["unitCount"], json!(10));
    assert_eq!(found.result()["totalReturn"], json!(1800.0));
    assert_eq!(found.notes(), Some("integration"));
}

async fn assert_newest_first(repo: Arc<dyn ScenarioRepository>) {
    for (i, name) in ["oldest", "middle", "newest"].iter().enumerate() {
        repo.create(test_helpers::investment_draft(name, i as u32 + 1))
            .await
            .expect("Create scenario");
    }

    let list = repo.list().await.expect("List scenarios");
    let names: Vec<_> = list.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);

    for pair in list.windows(2) {
        assert!(pair[0].created_at() >= pair[1].created_at());
    }
}

async fn assert_delete_semantics(repo: Arc<dyn ScenarioRepository>) {
    let keep = repo
        .create(test_helpers::investment_draft("keep", 1))
        .await
        .unwrap();
    let drop = repo
        .create(test_helpers::investment_draft("drop", 2))
        .await
        .unwrap();

    assert!(repo.delete(drop.id()).await.unwrap());
    assert!(!repo.delete(drop.id()).await.unwrap());
    assert!(!repo.delete(&ScenarioId::new()).await.unwrap());

    assert!(repo.get(drop.id()).await.unwrap().is_none());
    let remaining = repo.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), keep.id());
}

fn uuid_like(s: &str) -> bool {
    s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
}

#[tokio::test]
async fn sqlite_scenario_repo_create_and_get() {
    assert_create_get_roundtrip(sqlite_repo().await).await;
}

#[tokio::test]
async fn memory_scenario_repo_create_and_get() {
    assert_create_get_roundtrip(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_scenario_repo_lists_newest_first() {
    assert_newest_first(sqlite_repo().await).await;
}

#[tokio::test]
async fn memory_scenario_repo_lists_newest_first() {
    assert_newest_first(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_scenario_repo_delete() {
    assert_delete_semantics(sqlite_repo().await).await;
}

#[tokio::test]
async fn memory_scenario_repo_delete() {
    assert_delete_semantics(memory_repo()).await;
}

#[tokio::test]
async fn sqlite_scenario_repo_survives_reopen() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let db_path = dir.path().join("nested").join("scenarios.db");

    let created_id = {
        let database = Database::new(&db_path).await.expect("Open database");
        database.run_migrations().await.expect("Run migrations");
        let repo = SqliteScenarioRepository::new(Arc::new(database.pool().clone()));
        let created = repo
            .create(test_helpers::investment_draft("persisted", 3))
            .await
            .expect("Create scenario");
        database.pool().close().await;
        created.id().clone()
    };

    let database = Database::new(&db_path).await.expect("Reopen database");
    database.run_migrations().await.expect("Migrations are idempotent");
    let repo = SqliteScenarioRepository::new(Arc::new(database.pool().clone()));

    let found = repo
        .get(&created_id)
        .await
        .expect("Get scenario")
        .expect("Scenario should survive reopen");
    assert_eq!(found.name(), "persisted");
}
