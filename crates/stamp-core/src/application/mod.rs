//! Application layer for Stamp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, Orchestrator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Paths**: Directory and file ensuring on top of the filesystem port
//! - **Errors**: Application-specific error types
//!
//! Naming rules and templates live in `crate::domain`; this layer only
//! sequences them against the ports.

pub mod error;
pub mod paths;
pub mod ports;
pub mod services;

pub use services::{AbortReason, GenerateService, Orchestrator, Outcome, Stage};

// Re-export port traits (for adapter implementation)
pub use ports::{Collaborator, Filesystem};

pub use error::ApplicationError;
