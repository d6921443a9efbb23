use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::events::DomainEvent;
use crate::scenario::CalculatorType;
use crate::shared::ScenarioId;

/// Macro to implement DomainEvent trait with type name
macro_rules! impl_domain_event {
    ($type:ty) => {
        impl DomainEvent for $type {
            fn as_any(&self) -> &(dyn Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

/// Event fired when a scenario is saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCreated {
    pub scenario_id: ScenarioId,
    pub name: String,
    pub calculator_type: CalculatorType,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ScenarioCreated);

/// Event fired when a scenario is removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDeleted {
    pub scenario_id: ScenarioId,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(ScenarioDeleted);
