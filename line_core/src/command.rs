//! Engine commands and their outcomes

/// A single request against the engine
///
/// Indices are 1-based and range-checked by the buffer, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a line at the end
    Append(String),
    /// Insert a line before `index`
    InsertAt { index: usize, text: String },
    /// Overwrite the line at `index`
    Replace { index: usize, text: String },
    /// Interchange two lines
    Swap(usize, usize),
    /// Remove a line
    Delete(usize),
    /// Replace every occurrence of `needle`
    SearchReplace { needle: String, replacement: String },
    /// Revert to the previous snapshot
    Undo,
}

impl Command {
    /// Whether a successful run must be followed by a snapshot
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::Undo)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Append(_) => "append",
            Command::InsertAt { .. } => "insert",
            Command::Replace { .. } => "replace",
            Command::Swap(..) => "swap",
            Command::Delete(_) => "delete",
            Command::SearchReplace { .. } => "search-replace",
            Command::Undo => "undo",
        }
    }
}

/// Result of a successfully applied command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Buffer mutated
    Applied,
    /// Search/replace changed this many lines
    Replaced { lines_changed: usize },
    /// Search/replace found nothing (still a success)
    NoMatch,
    /// Live buffer replaced by the previous snapshot
    Reverted,
}
