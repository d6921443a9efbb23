use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;

use crate::persistence::{RepositoryErrorMapper, ResultExt};
use yieldlab_domain::scenario::{CalculatorType, Scenario, ScenarioDraft, ScenarioRepository};
use yieldlab_domain::shared::{DomainError, ScenarioId};

#[derive(FromRow)]
struct ScenarioRow {
    id: String,
    name: String,
    calculator_type: String,
    input: String,
    result: String,
    notes: Option<String>,
    created_at: String,
}

impl ScenarioRow {
    fn try_into_domain(self) -> Result<Scenario, DomainError> {
        let calculator_type = CalculatorType::from_str(&self.calculator_type).map_err(|e| {
            DomainError::DataIntegrity(format!(
                "Invalid calculator_type for scenario {}: {}",
                self.id, e
            ))
        })?;

        let input = serde_json::from_str(&self.input).to_integrity_err("input")?;
        let result = serde_json::from_str(&self.result).to_integrity_err("result")?;

        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .to_integrity_err("created_at")?
            .with_timezone(&Utc);

        let draft = ScenarioDraft {
            name: self.name,
            calculator_type,
            input,
            result,
            notes: self.notes,
        };

        Ok(Scenario::restore(
            ScenarioId::from_string(&self.id),
            draft,
            created_at,
        ))
    }
}

/// Fixed-width timestamps so lexical order matches chronological order
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub struct SqliteScenarioRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteScenarioRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScenarioRepository for SqliteScenarioRepository {
    async fn list(&self) -> Result<Vec<Scenario>, DomainError> {
        let rows = sqlx::query_as::<_, ScenarioRow>(
            r#"
            SELECT id, name, calculator_type, input, result, notes, created_at
            FROM scenarios
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "List scenarios"))?;

        rows.into_iter().map(ScenarioRow::try_into_domain).collect()
    }

    async fn get(&self, id: &ScenarioId) -> Result<Option<Scenario>, DomainError> {
        let row = sqlx::query_as::<_, ScenarioRow>(
            r#"
            SELECT id, name, calculator_type, input, result, notes, created_at
            FROM scenarios
            WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Get scenario"))?;

        row.map(ScenarioRow::try_into_domain).transpose()
    }

    async fn create(&self, draft: ScenarioDraft) -> Result<Scenario, DomainError> {
        let scenario = Scenario::from_draft(draft);

        let input = serde_json::to_string(scenario.input()).to_serialization_err()?;
        let result = serde_json::to_string(scenario.result()).to_serialization_err()?;

        sqlx::query(
            r#"
            INSERT INTO scenarios (id, name, calculator_type, input, result, notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(scenario.id().as_str())
        .bind(scenario.name())
        .bind(scenario.calculator_type().as_str())
        .bind(&input)
        .bind(&result)
        .bind(scenario.notes())
        .bind(format_timestamp(scenario.created_at()))
        .execute(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Create scenario"))?;

        // Return the row as stored (microsecond timestamps)
        self.get(scenario.id()).await?.ok_or_else(|| {
            DomainError::Repository(format!(
                "Scenario {} missing right after insert",
                scenario.id()
            ))
        })
    }

    async fn delete(&self, id: &ScenarioId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM scenarios WHERE id = ?")
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "Delete scenario"))?;

        Ok(result.rows_affected() > 0)
    }
}
