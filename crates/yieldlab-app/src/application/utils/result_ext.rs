use yieldlab_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Infrastructure
    /// Usage: `result.to_infra_err()?`
    fn to_infra_err(self) -> Result<T, DomainError>;

    /// Convert error to DomainError::Validation with a leading context
    /// Usage: `serde_json::from_value(v).to_validation_err("Invalid referral input")?`
    fn to_validation_err(self, context: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_infra_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    fn to_validation_err(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Validation(format!("{context}: {e}")))
    }
}
