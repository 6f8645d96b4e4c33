//! # Line Core
//!
//! The line-buffer engine behind the line editor.
//!
//! ## Philosophy
//!
//! - **Lines are opaque**: The buffer is an ordered sequence of text records, nothing more
//! - **Validate, then mutate**: A rejected operation leaves no trace on the buffer
//! - **Full snapshots**: Undo restores a complete prior state, never a patch
//! - **No ambient I/O**: Loading and saving happen in the host; the engine sees lines only
//!
//! ## Design
//!
//! The core provides:
//! - Line: A text record with a modified flag
//! - LineBuffer: Ordered lines with 1-based structural mutators
//! - UndoHistory: Stack of independent buffer snapshots
//! - EditorEngine: Buffer + history, driven through `apply_command`
//! - BufferSnapshot: Deterministic state for test comparison

pub mod buffer;
pub mod command;
pub mod engine;
pub mod error;
pub mod history;
pub mod line;
pub mod snapshot;

pub use buffer::{LineBuffer, RenderedLine};
pub use command::{Command, CommandOutcome};
pub use engine::{apply_command, EditorEngine, EngineConfig};
pub use error::{EditError, EditResult};
pub use history::UndoHistory;
pub use line::Line;
pub use snapshot::BufferSnapshot;
