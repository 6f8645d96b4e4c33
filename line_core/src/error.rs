//! Engine errors

use thiserror::Error;

/// Error returned by a rejected buffer or history operation.
///
/// Every variant is recoverable: the operation is aborted with no
/// side effects and the session continues.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Invalid index {index}: expected a line number from 1 to {max}")]
    Index { index: usize, max: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("UNDO unavailable...")]
    UndoUnavailable,
}

/// Engine result
pub type EditResult<T> = Result<T, EditError>;
