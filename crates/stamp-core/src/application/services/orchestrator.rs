//! Orchestrator - one interactive generation run.
//!
//! ```text
//! AwaitingKind ─► AwaitingName ─► Validating ─► Generating ─► Opening ─► Done
//!      │               │              │              │
//!      └───────────────┴──────────────┴──────────────┴──► Aborted
//! ```
//!
//! Every question goes through the [`Collaborator`] port. Cancellation is
//! silent; a bad name or a failed write is shown once through
//! [`Collaborator::show_error`] before the run aborts.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    application::{ports::Collaborator, services::GenerateService},
    domain::{
        Casing, Destination, GenerationPlan, GenerationResult, Identifier, Kind, NameRejection,
        ProjectContext, naming,
    },
    error::StampError,
};

const KIND_PROMPT: &str = "What do you want to generate?";

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingKind,
    AwaitingName,
    Validating,
    Generating,
    Opening,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AwaitingKind => "awaiting kind",
            Self::AwaitingName => "awaiting name",
            Self::Validating => "validating",
            Self::Generating => "generating",
            Self::Opening => "opening",
            Self::Done => "done",
        };
        f.write_str(label)
    }
}

/// Why a run stopped before [`Stage::Done`].
#[derive(Debug, Clone)]
pub enum AbortReason {
    /// The user dismissed a prompt at the given stage.
    Cancelled(Stage),
    InvalidName(NameRejection),
    Failed(StampError),
}

/// How a run ended.
#[derive(Debug, Clone)]
pub enum Outcome {
    Done(GenerationResult),
    Aborted(AbortReason),
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Self::Done(result) => Some(result),
            Self::Aborted(_) => None,
        }
    }
}

/// Drives [`GenerateService`] from collaborator answers.
pub struct Orchestrator {
    service: GenerateService,
    dry_run: bool,
}

impl Orchestrator {
    pub fn new(service: GenerateService) -> Self {
        Self {
            service,
            dry_run: false,
        }
    }

    /// Plan only: report what would be written, write and open nothing.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn service(&self) -> &GenerateService {
        &self.service
    }

    /// General entry point: ask for a kind, then a name.
    ///
    /// A component picked here goes to the configured component directory.
    pub fn run(&self, collaborator: &dyn Collaborator, project: &ProjectContext) -> Outcome {
        transition(Stage::AwaitingKind);
        let options: Vec<&str> = Kind::ALL.iter().map(|k| k.as_str()).collect();
        let Some(tag) = collaborator.choose(KIND_PROMPT, &options) else {
            return cancelled(Stage::AwaitingKind);
        };

        let kind = tag.parse::<Kind>().ok();
        if kind.is_none() {
            debug!(tag = %tag, "Unrecognised kind tag");
        }
        self.name_and_generate(collaborator, project, kind, None)
    }

    /// "Generate component here": no kind question, destination derived from
    /// the directory the user selected.
    pub fn run_component_here(
        &self,
        collaborator: &dyn Collaborator,
        project: &ProjectContext,
        selected: &Path,
    ) -> Outcome {
        let destination = match Destination::from_selection(project, selected) {
            Ok(destination) => destination,
            Err(e) => return failed(collaborator, e.into()),
        };
        debug!(destination = %destination, "Destination resolved from selection");
        self.name_and_generate(collaborator, project, Some(Kind::Component), Some(&destination))
    }

    fn name_and_generate(
        &self,
        collaborator: &dyn Collaborator,
        project: &ProjectContext,
        kind: Option<Kind>,
        destination: Option<&Destination>,
    ) -> Outcome {
        transition(Stage::AwaitingName);
        let prompt = name_prompt(kind);
        let live = |candidate: &str| validate(kind, candidate).map_err(|r| r.to_string());
        let Some(name) = collaborator.prompt_text(&prompt, &live) else {
            return cancelled(Stage::AwaitingName);
        };

        transition(Stage::Validating);
        if let Err(reason) = validate(kind, &name) {
            warn!(name = %name, reason = %reason, "Name rejected");
            collaborator.show_error(&reason.to_string());
            return Outcome::Aborted(AbortReason::InvalidName(reason));
        }

        transition(Stage::Generating);
        let Some(kind) = kind else {
            return Outcome::Done(GenerationResult::empty());
        };
        let identifier = match Identifier::parse(kind, name) {
            Ok(identifier) => identifier,
            Err(e) => return failed(collaborator, e.into()),
        };

        let result = if self.dry_run {
            self.service
                .plan(kind, &identifier, destination, project)
                .map(|plan| self.preview(&plan, project))
        } else {
            self.service.generate(kind, &identifier, destination, project)
        };
        let result = match result {
            Ok(result) => result,
            Err(e) => return failed(collaborator, e),
        };

        if !self.dry_run {
            transition(Stage::Opening);
            for path in &result.produced_files {
                collaborator.open_document(path);
            }
            if let Some(message) = &result.advisory_message {
                collaborator.show_info(message);
            }
        }

        transition(Stage::Done);
        info!(
            kind = %kind,
            name = %identifier,
            produced = result.produced_files.len(),
            "Run finished"
        );
        Outcome::Done(result)
    }

    /// What executing `plan` would do right now.
    fn preview(&self, plan: &GenerationPlan, project: &ProjectContext) -> GenerationResult {
        let (skipped, produced) = plan
            .paths()
            .map(|p| project.resolve(p))
            .partition(|p| self.service.exists(p));
        GenerationResult {
            produced_files: produced,
            skipped_files: skipped,
            advisory_message: plan.advisory.clone(),
        }
    }
}

/// Unknown tags fall back to the lowerCamelCase rule.
fn validate(kind: Option<Kind>, name: &str) -> Result<(), NameRejection> {
    match kind {
        Some(kind) => naming::check(kind, name),
        None => naming::check_casing(Casing::LowerCamel, name),
    }
}

fn name_prompt(kind: Option<Kind>) -> String {
    let casing = kind.map_or(Casing::LowerCamel, Kind::casing);
    match kind {
        Some(kind) => format!("Name of the {kind} ({}, e.g. {})", casing.label(), casing.example()),
        None => format!("Name ({})", casing.label()),
    }
}

fn transition(stage: Stage) {
    debug!(stage = %stage, "Orchestrator stage");
}

fn cancelled(stage: Stage) -> Outcome {
    debug!(stage = %stage, "Cancelled by user");
    Outcome::Aborted(AbortReason::Cancelled(stage))
}

fn failed(collaborator: &dyn Collaborator, error: StampError) -> Outcome {
    warn!(error = %error, "Generation failed");
    collaborator.show_error(&error.to_string());
    Outcome::Aborted(AbortReason::Failed(error))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::output::MockFilesystem;
    use crate::domain::GeneratorOptions;

    #[derive(Default)]
    struct Script {
        kind: Option<String>,
        names: RefCell<VecDeque<String>>,
        live_messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
        infos: RefCell<Vec<String>>,
        opened: RefCell<Vec<PathBuf>>,
    }

    impl Script {
        fn new(kind: Option<&str>, name: Option<&str>) -> Self {
            Self {
                kind: kind.map(str::to_string),
                names: RefCell::new(name.map(str::to_string).into_iter().collect()),
                ..Self::default()
            }
        }
    }

    impl Collaborator for Script {
        fn choose(&self, _prompt: &str, options: &[&str]) -> Option<String> {
            assert_eq!(options.len(), 6);
            self.kind.clone()
        }

        fn prompt_text(
            &self,
            _prompt: &str,
            validate: &dyn Fn(&str) -> Result<(), String>,
        ) -> Option<String> {
            let name = self.names.borrow_mut().pop_front()?;
            if let Err(message) = validate(&name) {
                self.live_messages.borrow_mut().push(message);
            }
            Some(name)
        }

        fn show_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn show_info(&self, message: &str) {
            self.infos.borrow_mut().push(message.to_string());
        }

        fn open_document(&self, path: &Path) {
            self.opened.borrow_mut().push(path.to_path_buf());
        }
    }

    fn project() -> ProjectContext {
        ProjectContext::new("/p").unwrap()
    }

    fn untouched_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir().never();
        fs.expect_create_file().never();
        fs.expect_write_file().never();
        fs
    }

    fn writable_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/p") || p == Path::new("/"));
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_create_file().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    fn orchestrator(fs: MockFilesystem) -> Orchestrator {
        Orchestrator::new(GenerateService::new(
            Box::new(fs),
            GeneratorOptions::default(),
        ))
    }

    #[test]
    fn dismissed_kind_cancels_silently() {
        let script = Script::new(None, Some("cart"));
        let outcome = orchestrator(untouched_fs()).run(&script, &project());

        assert!(matches!(
            outcome,
            Outcome::Aborted(AbortReason::Cancelled(Stage::AwaitingKind))
        ));
        assert!(script.errors.borrow().is_empty());
    }

    #[test]
    fn dismissed_name_cancels_silently() {
        let script = Script::new(Some("duck"), None);
        let outcome = orchestrator(untouched_fs()).run(&script, &project());

        assert!(matches!(
            outcome,
            Outcome::Aborted(AbortReason::Cancelled(Stage::AwaitingName))
        ));
        assert!(script.errors.borrow().is_empty());
    }

    #[test]
    fn invalid_name_is_reported_once() {
        let script = Script::new(Some("duck"), Some("Cart"));
        let outcome = orchestrator(untouched_fs()).run(&script, &project());

        assert!(matches!(
            outcome,
            Outcome::Aborted(AbortReason::InvalidName(NameRejection::Casing(
                Casing::LowerCamel
            )))
        ));
        assert_eq!(*script.errors.borrow(), vec!["Should be lowerCamelCase"]);
        assert_eq!(*script.live_messages.borrow(), vec!["Should be lowerCamelCase"]);
    }

    #[test]
    fn duck_run_opens_files_and_shows_advisory() {
        let script = Script::new(Some("duck"), Some("cart"));
        let outcome = orchestrator(writable_fs()).run(&script, &project());

        let result = outcome.result().unwrap();
        assert_eq!(result.produced_files.len(), 5);
        assert_eq!(*script.opened.borrow(), result.produced_files);
        assert_eq!(
            *script.infos.borrow(),
            vec!["Remember to add reference to duck and epic"]
        );
    }

    #[test]
    fn service_run_has_no_advisory() {
        let script = Script::new(Some("service"), Some("billing"));
        let outcome = orchestrator(writable_fs()).run(&script, &project());

        assert!(outcome.is_done());
        assert!(script.infos.borrow().is_empty());
        assert_eq!(script.opened.borrow().len(), 1);
    }

    #[test]
    fn unknown_kind_tag_yields_empty_result() {
        let script = Script::new(Some("widget"), Some("thing"));
        let outcome = orchestrator(untouched_fs()).run(&script, &project());

        let result = outcome.result().unwrap();
        assert!(result.is_empty());
        assert!(script.opened.borrow().is_empty());
        assert!(script.errors.borrow().is_empty());
    }

    #[test]
    fn write_failure_is_reported_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let script = Script::new(Some("view"), Some("Dashboard"));
        let outcome = orchestrator(fs).run(&script, &project());

        assert!(matches!(outcome, Outcome::Aborted(AbortReason::Failed(_))));
        assert_eq!(script.errors.borrow().len(), 1);
        assert!(script.errors.borrow()[0].contains("read-only"));
        assert!(script.opened.borrow().is_empty());
    }

    #[test]
    fn component_here_uses_selected_directory() {
        let script = Script::new(None, Some("Widget"));
        let outcome = orchestrator(writable_fs()).run_component_here(
            &script,
            &project(),
            Path::new("/p/src/features/cart"),
        );

        let result = outcome.result().unwrap();
        assert_eq!(
            result.produced_files[0],
            PathBuf::from("/p/src/features/cart/Widget/Widget.typ.tsx")
        );
    }

    #[test]
    fn component_here_outside_project_fails() {
        let script = Script::new(None, Some("Widget"));
        let outcome = orchestrator(untouched_fs()).run_component_here(
            &script,
            &project(),
            Path::new("/elsewhere"),
        );

        assert!(matches!(outcome, Outcome::Aborted(AbortReason::Failed(_))));
        assert_eq!(script.errors.borrow().len(), 1);
    }

    #[test]
    fn dry_run_writes_and_opens_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().never();
        fs.expect_create_file().never();
        fs.expect_write_file().never();

        let script = Script::new(Some("report"), Some("sales"));
        let outcome = orchestrator(fs)
            .with_dry_run(true)
            .run(&script, &project());

        let result = outcome.result().unwrap();
        assert_eq!(result.produced_files.len(), 3);
        assert!(script.opened.borrow().is_empty());
        assert!(script.infos.borrow().is_empty());
    }
}
