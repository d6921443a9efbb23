use serde_json::json;
use sqlx::SqlitePool;
use yieldlab_domain::scenario::{CalculatorType, ScenarioDraft};
use yieldlab_infrastructure::persistence::Database;

/// Fresh in-memory SQLite database with migrations applied
pub async fn setup_in_memory_db() -> SqlitePool {
    let database = Database::in_memory()
        .await
        .expect("Open in-memory database");
    database.run_migrations().await.expect("Run migrations");
    database.pool().clone()
}

pub fn investment_draft(name: &str, unit_count: u32) -> ScenarioDraft {
    ScenarioDraft {
        name: name.to_string(),
        calculator_type: CalculatorType::Investment,
        input: json!({ "unitCount": unit_count, "productType": "long", "dailyRatePercent": 1.0 }),
        result: json!({ "totalReturn": unit_count as f64 * 180.0 }),
        notes: Some("integration".to_string()),
    }
}
