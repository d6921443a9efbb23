use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::ScenarioAuditHandler;
use crate::application::queries::ScenarioQueryService;
use crate::application::services::CalculatorService;
use crate::presentation::state::{
    AppState, CommandHandlers, Queries, Repositories, Runtime, Services,
};
use yieldlab_domain::events::scenario_events::*;
use yieldlab_domain::events::{EventBus, TypedEventHandlerWrapper};
use yieldlab_domain::scenario::ScenarioRepository;
use yieldlab_domain::shared::DomainError;
use yieldlab_infrastructure::config::{ServerConfig, StorageBackend};
use yieldlab_infrastructure::events::InMemoryEventBus;
use yieldlab_infrastructure::persistence::{
    repositories::{InMemoryScenarioRepository, SqliteScenarioRepository},
    Database,
};

pub async fn build_app_state(config: &ServerConfig) -> Result<AppState, DomainError> {
    let startup_started_at = Instant::now();

    // Storage
    let started_at = Instant::now();
    let (db, scenario_repo): (Option<Arc<Database>>, Arc<dyn ScenarioRepository>) =
        match config.storage {
            StorageBackend::Memory => (None, Arc::new(InMemoryScenarioRepository::new())),
            StorageBackend::Sqlite => {
                info!("Database path: {}", config.database_path.display());
                let db = Database::new(&config.database_path).await?;
                db.run_migrations().await?;
                let pool = Arc::new(db.pool().clone());
                (
                    Some(Arc::new(db)),
                    Arc::new(SqliteScenarioRepository::new(pool)),
                )
            }
        };
    info!(
        "✓ Scenario store ready: {} ({}ms)",
        config.storage.as_str(),
        started_at.elapsed().as_millis()
    );

    // Event bus
    let started_at = Instant::now();
    let event_bus = Arc::new(InMemoryEventBus::new());
    let audit = ScenarioAuditHandler::new();
    event_bus
        .subscribe::<ScenarioCreated>(Arc::new(TypedEventHandlerWrapper::<ScenarioCreated, _>::new(
            audit.clone(),
        )))
        .await?;
    event_bus
        .subscribe::<ScenarioDeleted>(Arc::new(TypedEventHandlerWrapper::<ScenarioDeleted, _>::new(
            audit.clone(),
        )))
        .await?;
    let event_bus: Arc<dyn EventBus> = event_bus;
    info!(
        "✓ Event handlers registered ({}ms)",
        started_at.elapsed().as_millis()
    );

    let calculator = Arc::new(CalculatorService::new());

    let command_handlers = CommandHandlers {
        create_scenario: Arc::new(CreateScenarioCommandHandler::new(
            scenario_repo.clone(),
            calculator.clone(),
            event_bus.clone(),
        )),
        delete_scenario: Arc::new(DeleteScenarioCommandHandler::new(
            scenario_repo.clone(),
            event_bus.clone(),
        )),
    };

    let queries = Queries {
        scenario: Arc::new(ScenarioQueryService::new(scenario_repo.clone())),
    };

    info!(
        "✓ Application state built ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        runtime: Runtime {
            config: config.clone(),
            db,
            event_bus,
            audit,
        },
        repositories: Repositories {
            scenario: scenario_repo,
        },
        services: Services { calculator },
        queries,
        command_handlers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend() {
        let state = build_app_state(&ServerConfig::default()).await.unwrap();
        assert!(state.runtime.db.is_none());
        assert!(state.repositories.scenario.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_backend_runs_migrations() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            storage: StorageBackend::Sqlite,
            database_path: dir.path().join("nested").join("scenarios.db"),
            ..ServerConfig::default()
        };

        let state = build_app_state(&config).await.unwrap();
        assert!(state.runtime.db.is_some());
        assert!(config.database_path.exists());
        assert!(state.repositories.scenario.list().await.unwrap().is_empty());
    }
}
