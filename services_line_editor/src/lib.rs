//! # Line Editor Service
//!
//! This crate implements a menu-driven line editor on top of `line_core`.
//!
//! ## Philosophy
//!
//! - **Thin host**: All structural editing lives in the engine; this crate prompts, loads, saves and renders
//! - **Recoverable errors**: Bad indices, empty searches, missing files and empty undo history are reported, never fatal
//! - **Scriptable**: The console reads any `BufRead` and writes any `Write`
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A screen editor (no cursor, no viewport)
//! - A redo-capable editor
//! - Aware of syntax or encodings beyond UTF-8 text
//!
//! ## Design
//!
//! - `Session` owns one engine and one `EditorIo` backend
//! - `Console` maps menu selections to engine commands
//! - Files are newline-terminated plain text; modified flags are not persisted

pub mod commands;
pub mod editor;
pub mod interactive;
pub mod io;
pub mod render;

pub use commands::{CommandError, MenuChoice, MenuParser};
pub use editor::{EditorError, EditorResult, Session, SessionConfig};
pub use interactive::{Console, ExitReason};
pub use io::{EditorIo, FsEditorIo, IoError, MemoryEditorIo};
pub use render::TextView;
