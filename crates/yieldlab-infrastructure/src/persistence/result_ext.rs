use yieldlab_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Serialization
    /// Usage: `serde_json::to_string(value).to_serialization_err()?`
    fn to_serialization_err(self) -> Result<T, DomainError>;

    /// Convert error to DomainError::DataIntegrity, for stored values that fail to parse
    fn to_integrity_err(self, what: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_serialization_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Serialization(e.to_string()))
    }

    fn to_integrity_err(self, what: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::DataIntegrity(format!("Invalid {what}: {e}")))
    }
}
