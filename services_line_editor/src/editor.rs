//! Editing session
//!
//! A session owns one engine and one I/O backend. It turns engine outcomes
//! and errors into status messages; nothing here is fatal to the session.

use std::path::Path;

use line_core::{Command, CommandOutcome, EditError, EditorEngine, EngineConfig};
use thiserror::Error;

use crate::commands::CommandError;
use crate::io::{EditorIo, IoError};
use crate::render::TextView;

/// Editor error
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Editor result
pub type EditorResult<T> = Result<T, EditorError>;

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub engine: EngineConfig,
    /// Mark modified lines when displaying
    pub highlight: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            highlight: true,
        }
    }
}

/// The line editor session
pub struct Session<I: EditorIo> {
    engine: EditorEngine,
    io: I,
    config: SessionConfig,
    view: TextView,
    status_message: String,
}

impl<I: EditorIo> Session<I> {
    /// Create a session with an empty buffer
    pub fn new(io: I, config: SessionConfig) -> Self {
        Self {
            engine: EditorEngine::new(config.engine),
            io,
            config,
            view: TextView::new(config.highlight),
            status_message: String::new(),
        }
    }

    pub fn engine(&self) -> &EditorEngine {
        &self.engine
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Load a file as the session's starting state.
    ///
    /// On success the buffer and the undo history are replaced, with the
    /// file content as the oldest snapshot. On failure nothing changes.
    pub fn load(&mut self, path: &Path) -> EditorResult<()> {
        match self.io.load(path) {
            Ok(lines) => {
                log::info!("loaded {} lines from {}", lines.len(), path.display());
                self.engine = EditorEngine::from_lines(lines, self.config.engine);
                self.set_status_message("File loaded successfully!");
                Ok(())
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Write the buffer to `path`
    pub fn save(&mut self, path: &Path) -> EditorResult<()> {
        let lines: Vec<&str> = self.engine.buffer().to_lines().collect();
        match self.io.save(path, &lines) {
            Ok(()) => {
                log::info!("saved {} lines to {}", lines.len(), path.display());
                self.status_message =
                    format!("File saved successfully as '{}'!", path.display());
                Ok(())
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Apply one engine command and describe the result in the status line
    pub fn execute(&mut self, command: Command) -> EditorResult<CommandOutcome> {
        let message = match &command {
            Command::SearchReplace {
                needle,
                replacement,
            } => Some((needle.clone(), replacement.clone())),
            _ => None,
        };

        let outcome = match self.engine.apply(command) {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.fail(err.into())),
        };

        self.status_message = match (&outcome, message) {
            (CommandOutcome::Replaced { .. }, Some((needle, replacement))) => format!(
                "All occurrences of \"{}\" replaced with \"{}\".",
                needle, replacement
            ),
            (CommandOutcome::NoMatch, Some((needle, _))) => {
                format!("No occurrences of \"{}\" found.", needle)
            }
            _ => String::new(),
        };
        Ok(outcome)
    }

    /// Revert to the previous state
    pub fn undo(&mut self) -> EditorResult<CommandOutcome> {
        self.execute(Command::Undo)
    }

    /// Render the buffer with the configured view
    pub fn render(&self) -> String {
        self.view.render(self.engine.buffer())
    }

    pub fn render_menu(&self) -> String {
        self.view.render_menu()
    }

    fn fail(&mut self, err: EditorError) -> EditorError {
        self.status_message = match &err {
            EditorError::Edit(EditError::Index { .. }) => "Invalid index!".to_string(),
            EditorError::Io(io) => format!("Error: {}", io),
            other => other.to_string(),
        };
        if matches!(err, EditorError::Io(_)) {
            log::warn!("{}", err);
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryEditorIo;

    fn session() -> Session<MemoryEditorIo> {
        Session::new(MemoryEditorIo::new(), SessionConfig::default())
    }

    fn texts<I: EditorIo>(session: &Session<I>) -> Vec<String> {
        session
            .engine()
            .buffer()
            .to_lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = session();
        assert!(session.engine().buffer().is_empty());
        assert_eq!(session.status_message(), "");
    }

    #[test]
    fn test_load_replaces_engine() {
        let io = MemoryEditorIo::new().with_file("doc.txt", "one\ntwo\n");
        let mut session = Session::new(io, SessionConfig::default());
        session.execute(Command::Append("scratch".into())).unwrap();

        session.load(Path::new("doc.txt")).unwrap();
        assert_eq!(texts(&session), vec!["one", "two"]);
        assert_eq!(session.engine().history().depth(), 1);
        assert_eq!(session.status_message(), "File loaded successfully!");
    }

    #[test]
    fn test_failed_load_keeps_buffer() {
        let mut session = session();
        session.execute(Command::Append("keep".into())).unwrap();

        let err = session.load(Path::new("missing.txt")).unwrap_err();
        assert!(matches!(err, EditorError::Io(IoError::NotFound { .. })));
        assert_eq!(texts(&session), vec!["keep"]);
        assert!(session.status_message().starts_with("Error:"));
    }

    #[test]
    fn test_save_writes_lines() {
        let mut session = session();
        session.execute(Command::Append("a".into())).unwrap();
        session.execute(Command::Append("b".into())).unwrap();

        session.save(Path::new("out.txt")).unwrap();
        assert_eq!(session.io().content("out.txt"), Some("a\nb\n"));
        assert_eq!(
            session.status_message(),
            "File saved successfully as 'out.txt'!"
        );
    }

    #[test]
    fn test_search_replace_messages() {
        let mut session = session();
        session.execute(Command::Append("foo".into())).unwrap();

        session
            .execute(Command::SearchReplace {
                needle: "foo".into(),
                replacement: "bar".into(),
            })
            .unwrap();
        assert_eq!(
            session.status_message(),
            "All occurrences of \"foo\" replaced with \"bar\"."
        );

        session
            .execute(Command::SearchReplace {
                needle: "foo".into(),
                replacement: "bar".into(),
            })
            .unwrap();
        assert_eq!(session.status_message(), "No occurrences of \"foo\" found.");
    }

    #[test]
    fn test_undo_unavailable_message() {
        let mut session = session();
        let err = session.undo().unwrap_err();
        assert!(matches!(err, EditorError::Edit(EditError::UndoUnavailable)));
        assert_eq!(session.status_message(), "UNDO unavailable...");
    }

    #[test]
    fn test_index_error_is_reported() {
        let mut session = session();
        let err = session.execute(Command::Delete(1)).unwrap_err();
        assert!(matches!(err, EditorError::Edit(EditError::Index { .. })));
        assert_eq!(session.status_message(), "Invalid index!");
    }

    #[test]
    fn test_successful_undo_is_silent() {
        let mut session = session();
        session.execute(Command::Append("a".into())).unwrap();

        let outcome = session.undo().unwrap();
        assert_eq!(outcome, CommandOutcome::Reverted);
        assert_eq!(session.status_message(), "");
        assert!(session.engine().buffer().is_empty());
    }

    #[test]
    fn test_render_uses_config() {
        let config = SessionConfig {
            highlight: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(MemoryEditorIo::new(), config);
        session.execute(Command::Append("x".into())).unwrap();
        assert_eq!(session.render(), "Current text:\n1> x\n\n");
    }
}
