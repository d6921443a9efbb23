use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::ScenarioAuditHandler;
use crate::application::queries::ScenarioQueryService;
use crate::application::services::CalculatorService;
use yieldlab_domain::events::EventBus;
use yieldlab_domain::scenario::ScenarioRepository;
use yieldlab_infrastructure::config::ServerConfig;
use yieldlab_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub create_scenario: Arc<CreateScenarioCommandHandler>,
    pub delete_scenario: Arc<DeleteScenarioCommandHandler>,
}

pub struct Runtime {
    pub config: ServerConfig,
    /// Present only with the sqlite backend
    pub db: Option<Arc<Database>>,
    pub event_bus: Arc<dyn EventBus>,
    pub audit: ScenarioAuditHandler,
}

pub struct Repositories {
    pub scenario: Arc<dyn ScenarioRepository>,
}

pub struct Services {
    pub calculator: Arc<CalculatorService>,
}

pub struct Queries {
    pub scenario: Arc<ScenarioQueryService>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

pub type SharedState = Arc<AppState>;
