mod scenario_queries;

pub use scenario_queries::ScenarioQueryService;
