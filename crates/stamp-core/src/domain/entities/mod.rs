pub mod plan;
pub mod project;

pub use crate::domain::DomainError;
pub use plan::{GenerationPlan, GenerationResult, PlannedFile};
pub use project::{Destination, ProjectContext};
