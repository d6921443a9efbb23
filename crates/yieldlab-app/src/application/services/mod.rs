mod calculator_service;
pub mod validation;

pub use calculator_service::CalculatorService;
