mod aggregate;
mod repository;

pub use aggregate::{CalculatorType, Scenario, ScenarioDraft};
pub use repository::ScenarioRepository;
