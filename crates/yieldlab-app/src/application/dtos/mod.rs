mod scenario_dto;

pub use scenario_dto::ScenarioDto;
