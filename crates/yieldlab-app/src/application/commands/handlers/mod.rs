mod create_scenario_handler;
mod delete_scenario_handler;


pub use create_scenario_handler::CreateScenarioCommandHandler;
pub use delete_scenario_handler::DeleteScenarioCommandHandler;
