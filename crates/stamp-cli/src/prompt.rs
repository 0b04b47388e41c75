//! Terminal front-end of the [`Collaborator`] port.
//!
//! Answers given on the command line are replayed as presets; anything
//! missing is asked with `dialoguer` when the `interactive` feature is on
//! and a terminal is attached.

use std::cell::RefCell;
use std::io::IsTerminal as _;
use std::path::Path;
use std::process::Command;

use stamp_core::application::ports::Collaborator;
use tracing::{debug, trace, warn};

use crate::output::OutputManager;

/// `true` when questions can be put to a person.
pub fn can_prompt() -> bool {
    cfg!(feature = "interactive") && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Collaborator backed by the terminal.
pub struct TerminalCollaborator<'a> {
    output: &'a OutputManager,
    kind: RefCell<Option<String>>,
    name: RefCell<Option<String>>,
    editor: Option<String>,
}

impl<'a> TerminalCollaborator<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            kind: RefCell::new(None),
            name: RefCell::new(None),
            editor: None,
        }
    }

    /// Answer the kind question with `kind` instead of asking.
    pub fn with_kind(self, kind: Option<String>) -> Self {
        *self.kind.borrow_mut() = kind;
        self
    }

    /// Answer the name question with `name` instead of asking.
    pub fn with_name(self, name: Option<String>) -> Self {
        *self.name.borrow_mut() = name;
        self
    }

    /// Open produced files with this command line.
    pub fn with_editor(mut self, editor: Option<String>) -> Self {
        self.editor = editor;
        self
    }
}

impl Collaborator for TerminalCollaborator<'_> {
    fn choose(&self, prompt: &str, options: &[&str]) -> Option<String> {
        if let Some(preset) = self.kind.borrow_mut().take() {
            trace!(preset = %preset, "kind given on the command line");
            return Some(preset);
        }
        select(prompt, options)
    }

    fn prompt_text(
        &self,
        prompt: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Option<String> {
        if let Some(preset) = self.name.borrow_mut().take() {
            trace!(preset = %preset, "name given on the command line");
            return Some(preset);
        }
        input(prompt, validate)
    }

    fn show_error(&self, message: &str) {
        let _ = self.output.error(message);
    }

    fn show_info(&self, message: &str) {
        let _ = self.output.info(message);
    }

    fn open_document(&self, path: &Path) {
        let Some(editor) = &self.editor else {
            trace!(path = %path.display(), "no editor, not opening");
            return;
        };
        if let Err(message) = open_with(editor, path) {
            warn!(editor = %editor, path = %path.display(), "{message}");
            let _ = self
                .output
                .warning(&format!("Could not open {}: {message}", path.display()));
        }
    }
}

/// Run `editor` (split on whitespace) with `path` appended.
fn open_with(editor: &str, path: &Path) -> Result<(), String> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or_else(|| "empty editor command".to_string())?;

    debug!(program, path = %path.display(), "opening document");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| format!("failed to run '{program}': {e}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("'{program}' exited with {status}"))
    }
}

#[cfg(feature = "interactive")]
fn select(prompt: &str, options: &[&str]) -> Option<String> {
    use dialoguer::{Select, theme::ColorfulTheme};

    match Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact_opt()
    {
        Ok(choice) => choice.and_then(|i| options.get(i)).map(|s| s.to_string()),
        Err(e) => {
            debug!(error = %e, "selection aborted");
            None
        }
    }
}

#[cfg(feature = "interactive")]
fn input(prompt: &str, validate: &dyn Fn(&str) -> Result<(), String>) -> Option<String> {
    use dialoguer::{Input, theme::ColorfulTheme};

    let theme = ColorfulTheme::default();
    let result = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .validate_with(|candidate: &String| -> Result<(), String> { validate(candidate) })
        .interact_text();

    match result {
        Ok(text) => Some(text),
        Err(e) => {
            debug!(error = %e, "input aborted");
            None
        }
    }
}

#[cfg(not(feature = "interactive"))]
fn select(prompt: &str, _options: &[&str]) -> Option<String> {
    debug!(prompt, "interactive feature disabled");
    None
}

#[cfg(not(feature = "interactive"))]
fn input(prompt: &str, _validate: &dyn Fn(&str) -> Result<(), String>) -> Option<String> {
    debug!(prompt, "interactive feature disabled");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;

    fn output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            root: None,
            output_format: OutputFormat::Plain,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn presets_answer_once() {
        let out = output();
        let collab = TerminalCollaborator::new(&out)
            .with_kind(Some("duck".into()))
            .with_name(Some("cart".into()));

        assert_eq!(collab.choose("kind?", &["duck"]).as_deref(), Some("duck"));
        assert_eq!(
            collab.prompt_text("name?", &|_| Ok(())).as_deref(),
            Some("cart")
        );
        assert!(collab.kind.borrow().is_none());
        assert!(collab.name.borrow().is_none());
    }

    #[test]
    fn presets_skip_live_validation() {
        let out = output();
        let collab = TerminalCollaborator::new(&out).with_name(Some("Bad_Name".into()));
        let answer = collab.prompt_text("name?", &|_| Err("Letters Only".into()));
        assert_eq!(answer.as_deref(), Some("Bad_Name"));
    }

    #[test]
    fn open_without_editor_is_noop() {
        let out = output();
        let collab = TerminalCollaborator::new(&out);
        collab.open_document(Path::new("/does/not/matter.tsx"));
    }

    #[test]
    fn open_with_missing_program_fails() {
        let err = open_with("stamp-no-such-editor-binary", Path::new("/tmp/a.tsx")).unwrap_err();
        assert!(err.contains("stamp-no-such-editor-binary"));
    }

    #[test]
    fn open_with_empty_command_fails() {
        assert!(open_with("   ", Path::new("/tmp/a.tsx")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn open_with_runs_command() {
        assert!(open_with("true", Path::new("/tmp/a.tsx")).is_ok());
        assert!(open_with("false", Path::new("/tmp/a.tsx")).is_err());
    }
}
