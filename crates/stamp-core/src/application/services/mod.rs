//! Application services - orchestrate use cases.
//!
//! [`GenerateService`] writes one plan; [`Orchestrator`] wraps it in the
//! interactive kind/name conversation.

pub mod generate_service;
pub mod orchestrator;

pub use generate_service::GenerateService;
pub use orchestrator::{AbortReason, Orchestrator, Outcome, Stage};
