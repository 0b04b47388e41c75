//! Collaborator adapters.

mod scripted;

pub use scripted::ScriptedCollaborator;
