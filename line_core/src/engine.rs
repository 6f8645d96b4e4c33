//! EditorEngine: live buffer plus undo history
//!
//! `apply_command` is the single entry point hosts use to edit. It runs one
//! buffer mutator and records a snapshot only when that mutator succeeded.

use std::num::NonZeroUsize;

use crate::{
    buffer::LineBuffer,
    command::{Command, CommandOutcome},
    error::EditResult,
    history::UndoHistory,
    snapshot::BufferSnapshot,
};

/// Engine settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of stored snapshots; `None` keeps everything
    pub history_limit: Option<NonZeroUsize>,
}

/// Editor engine
///
/// Owns exactly one live buffer and one history for the session lifetime.
#[derive(Debug, Clone)]
pub struct EditorEngine {
    buffer: LineBuffer,
    history: UndoHistory,
}

impl EditorEngine {
    /// Create an engine with an empty buffer
    pub fn new(config: EngineConfig) -> Self {
        Self::with_buffer(LineBuffer::new(), config)
    }

    /// Create an engine whose initial state is the given file lines
    pub fn from_lines<I, S>(lines: I, config: EngineConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_buffer(LineBuffer::from_lines(lines), config)
    }

    fn with_buffer(buffer: LineBuffer, config: EngineConfig) -> Self {
        let history = UndoHistory::with_limit(&buffer, config.history_limit);
        Self { buffer, history }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Capture the engine state for comparison
    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot::capture(&self.buffer, self.history.depth())
    }

    /// Apply a command; see [`apply_command`]
    pub fn apply(&mut self, command: Command) -> EditResult<CommandOutcome> {
        apply_command(self, command)
    }

    fn run(&mut self, command: Command) -> EditResult<CommandOutcome> {
        match command {
            Command::Append(text) => {
                self.buffer.append(text);
                Ok(CommandOutcome::Applied)
            }
            Command::InsertAt { index, text } => {
                self.buffer.insert_at(index, text)?;
                Ok(CommandOutcome::Applied)
            }
            Command::Replace { index, text } => {
                self.buffer.replace(index, text)?;
                Ok(CommandOutcome::Applied)
            }
            Command::Swap(first, second) => {
                self.buffer.swap(first, second)?;
                Ok(CommandOutcome::Applied)
            }
            Command::Delete(index) => {
                self.buffer.delete(index)?;
                Ok(CommandOutcome::Applied)
            }
            Command::SearchReplace {
                needle,
                replacement,
            } => match self.buffer.search_replace(&needle, &replacement)? {
                0 => Ok(CommandOutcome::NoMatch),
                lines_changed => Ok(CommandOutcome::Replaced { lines_changed }),
            },
            Command::Undo => {
                self.buffer = self.history.revert()?;
                Ok(CommandOutcome::Reverted)
            }
        }
    }
}

/// Run one command against the engine.
///
/// A successful mutation is followed by a snapshot, including mutations
/// with no visible effect (`swap(i, i)`, a search that finds nothing). A
/// failed command leaves both the buffer and the history untouched.
pub fn apply_command(engine: &mut EditorEngine, command: Command) -> EditResult<CommandOutcome> {
    let name = command.name();
    let snapshot_after = command.is_mutation();

    match engine.run(command) {
        Ok(outcome) => {
            if snapshot_after {
                engine.history.snapshot(&engine.buffer);
            }
            log::debug!(
                "{} applied: {:?} ({} lines, undo depth {})",
                name,
                outcome,
                engine.buffer.len(),
                engine.history.depth()
            );
            Ok(outcome)
        }
        Err(err) => {
            log::warn!("{} rejected: {}", name, err);
            Err(err)
        }
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
