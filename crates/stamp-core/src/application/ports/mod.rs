//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the application and implemented elsewhere:
//!
//! - `Filesystem`: existence checks, directory and file creation, writes
//! - `Collaborator`: the editor or terminal the user drives generation from
//!
//! Implementations live in `stamp-adapters` (filesystems, scripted
//! collaborator for tests) and `stamp-cli` (terminal collaborator).

pub mod output;

pub use output::{Collaborator, Filesystem};
