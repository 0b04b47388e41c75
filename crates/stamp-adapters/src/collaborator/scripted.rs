//! Scripted collaborator for tests and non-interactive runs.
//!
//! Answers are queued up front. Every notification is recorded so a test can
//! inspect what the user would have seen.

use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use stamp_core::application::ports::Collaborator;
use tracing::debug;

/// A [`Collaborator`] that replays queued answers.
///
/// `None` in a queue, or an empty queue, means the user dismissed the
/// prompt. Names pass through the live validator; rejections are kept in
/// [`validation_messages`](Self::validation_messages) and the name is still
/// returned, as a user pressing enter regardless would do.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCollaborator {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    choices: VecDeque<Option<String>>,
    texts: VecDeque<Option<String>>,
    prompts: Vec<String>,
    validation_messages: Vec<String>,
    errors: Vec<String>,
    infos: Vec<String>,
    opened: Vec<PathBuf>,
}

impl ScriptedCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next `choose`.
    pub fn choose_with(self, answer: Option<&str>) -> Self {
        self.update(|s| s.choices.push_back(answer.map(str::to_string)));
        self
    }

    /// Queue the answer to the next `prompt_text`.
    pub fn answer_with(self, answer: Option<&str>) -> Self {
        self.update(|s| s.texts.push_back(answer.map(str::to_string)));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.read(|s| s.prompts.clone())
    }

    pub fn validation_messages(&self) -> Vec<String> {
        self.read(|s| s.validation_messages.clone())
    }

    pub fn errors(&self) -> Vec<String> {
        self.read(|s| s.errors.clone())
    }

    pub fn infos(&self) -> Vec<String> {
        self.read(|s| s.infos.clone())
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.read(|s| s.opened.clone())
    }

    fn update(&self, f: impl FnOnce(&mut ScriptState)) {
        if let Ok(mut state) = self.state.lock() {
            f(&mut *state);
        }
    }

    fn read<T: Default>(&self, f: impl FnOnce(&ScriptState) -> T) -> T {
        self.state.lock().map(|s| f(&*s)).unwrap_or_default()
    }
}

impl Collaborator for ScriptedCollaborator {
    fn choose(&self, prompt: &str, options: &[&str]) -> Option<String> {
        let mut state = self.state.lock().ok()?;
        state.prompts.push(prompt.to_string());
        let answer = state.choices.pop_front().flatten();
        debug!(prompt, options = options.len(), answer = ?answer, "scripted choice");
        answer
    }

    fn prompt_text(
        &self,
        prompt: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Option<String> {
        let mut state = self.state.lock().ok()?;
        state.prompts.push(prompt.to_string());
        let answer = state.texts.pop_front().flatten()?;
        if let Err(message) = validate(&answer) {
            state.validation_messages.push(message);
        }
        Some(answer)
    }

    fn show_error(&self, message: &str) {
        self.update(|s| s.errors.push(message.to_string()));
    }

    fn show_info(&self, message: &str) {
        self.update(|s| s.infos.push(message.to_string()));
    }

    fn open_document(&self, path: &Path) {
        self.update(|s| s.opened.push(path.to_path_buf()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_dismisses_everything() {
        let collab = ScriptedCollaborator::new();
        assert_eq!(collab.choose("kind?", &["duck"]), None);
        assert_eq!(collab.prompt_text("name?", &|_| Ok(())), None);
        assert_eq!(collab.prompts(), vec!["kind?", "name?"]);
    }

    #[test]
    fn answers_replay_in_order() {
        let collab = ScriptedCollaborator::new()
            .choose_with(Some("duck"))
            .choose_with(None);
        assert_eq!(collab.choose("a", &[]).as_deref(), Some("duck"));
        assert_eq!(collab.choose("b", &[]), None);
    }

    #[test]
    fn live_validator_messages_are_recorded() {
        let collab = ScriptedCollaborator::new().answer_with(Some("bad_name"));
        let answer = collab.prompt_text("name?", &|_| Err("Letters Only".into()));
        assert_eq!(answer.as_deref(), Some("bad_name"));
        assert_eq!(collab.validation_messages(), vec!["Letters Only"]);
    }

    #[test]
    fn notifications_are_shared_between_clones() {
        let collab = ScriptedCollaborator::new();
        let handle = collab.clone();
        collab.show_error("boom");
        collab.show_info("note");
        collab.open_document(Path::new("/p/a.tsx"));

        assert_eq!(handle.errors(), vec!["boom"]);
        assert_eq!(handle.infos(), vec!["note"]);
        assert_eq!(handle.opened(), vec![PathBuf::from("/p/a.tsx")]);
    }
}
