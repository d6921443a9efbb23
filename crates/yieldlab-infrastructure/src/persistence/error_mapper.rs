use yieldlab_domain::shared::DomainError;

/// Translates sqlx failures into domain errors with operation context
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(err: sqlx::Error, operation: &str) -> DomainError {
        match err {
            sqlx::Error::RowNotFound => {
                DomainError::NotFound(format!("{operation}: row not found"))
            }
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::DataIntegrity(format!(
                    "{operation}: unique constraint violated ({})",
                    db_err.message()
                ))
            }
            sqlx::Error::ColumnDecode { index, source } => DomainError::DataIntegrity(format!(
                "{operation}: failed to decode column {index}: {source}"
            )),
            other => DomainError::Repository(format!("{operation}: {other}")),
        }
    }
}
