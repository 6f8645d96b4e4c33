//! Document I/O operations
//!
//! Files are plain text: one buffer line per text line, each followed by a
//! newline. Loads are all-or-nothing; the engine only sees the lines once the
//! whole file has been read.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Document I/O error
#[derive(Debug, Error)]
pub enum IoError {
    #[error("Could not open file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open file '{}' for writing: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: '{}'", path.display())]
    NotFound { path: PathBuf },
}

/// Editor I/O abstraction
pub trait EditorIo {
    /// Read every line of `path`
    fn load(&mut self, path: &Path) -> Result<Vec<String>, IoError>;
    /// Write `lines` to `path`, replacing its content
    fn save(&mut self, path: &Path, lines: &[&str]) -> Result<(), IoError>;
}

/// Serialize lines in the save format
pub fn join_lines(lines: &[&str]) -> String {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}

/// Split file content into buffer lines
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(String::from).collect()
}

/// Filesystem-backed editor I/O
#[derive(Debug, Default, Clone, Copy)]
pub struct FsEditorIo;

impl EditorIo for FsEditorIo {
    fn load(&mut self, path: &Path) -> Result<Vec<String>, IoError> {
        let bytes = fs::read(path).map_err(|source| IoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            log::warn!(
                "{} is not valid UTF-8; invalid bytes were replaced",
                path.display()
            );
        }
        Ok(split_lines(&content))
    }

    fn save(&mut self, path: &Path, lines: &[&str]) -> Result<(), IoError> {
        fs::write(path, join_lines(lines)).map_err(|source| IoError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory editor I/O, for scripted sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryEditorIo {
    files: HashMap<PathBuf, String>,
}

impl MemoryEditorIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Raw content of a stored file
    pub fn content(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl EditorIo for MemoryEditorIo {
    fn load(&mut self, path: &Path) -> Result<Vec<String>, IoError> {
        self.files
            .get(path)
            .map(|content| split_lines(content))
            .ok_or_else(|| IoError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn save(&mut self, path: &Path, lines: &[&str]) -> Result<(), IoError> {
        self.files.insert(path.to_path_buf(), join_lines(lines));
        Ok(())
    }
}
