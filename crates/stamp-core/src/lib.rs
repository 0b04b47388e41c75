//! Stamp Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Stamp file generator, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            stamp-cli (CLI)              │
//! │   (TerminalCollaborator, commands)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (Orchestrator, GenerateService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, Collaborator)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stamp-adapters (Infrastructure)     │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Kind, Identifier, templates, plans)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stamp_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> StampResult<()> {
//! let project = ProjectContext::new("/work/acme-web")?;
//! let service = GenerateService::new(filesystem, GeneratorOptions::default());
//!
//! let name = Identifier::parse(Kind::Duck, "userProfile")?;
//! let result = service.generate(Kind::Duck, &name, None, &project)?;
//! println!("{} files written", result.produced_files.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AbortReason, GenerateService, Orchestrator, Outcome, Stage,
        ports::{Collaborator, Filesystem},
    };
    pub use crate::domain::{
        Casing, Destination, GenerationPlan, GenerationResult, GeneratorOptions, Identifier, Kind,
        NameRejection, ProjectContext,
    };
    pub use crate::error::{StampError, StampResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
