pub mod in_memory_scenario_repo;
pub mod scenario_repo;

pub use in_memory_scenario_repo::InMemoryScenarioRepository;
pub use scenario_repo::SqliteScenarioRepository;
