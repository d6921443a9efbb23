// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod earnings;
pub mod events;
pub mod scenario;
pub mod shared;

// Re-exports for convenience
pub use events::DomainEvent;
pub use shared::{DomainError, ScenarioId};
