//! Infrastructure adapters for Stamp.
//!
//! This crate implements the ports defined in `stamp-core::application::ports`.
//! It contains all I/O: the real disk, an in-memory disk for tests, and a
//! scripted stand-in for the person answering prompts.

pub mod collaborator;
pub mod filesystem;

// Re-export commonly used adapters
pub use collaborator::ScriptedCollaborator;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
