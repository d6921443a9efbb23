mod scenario_audit_handler;

pub use scenario_audit_handler::ScenarioAuditHandler;
