//! Engine state snapshot for deterministic comparison

use crate::buffer::LineBuffer;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Complete engine state in plain values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct BufferSnapshot {
    pub lines: Vec<String>,
    /// 1-based numbers of lines carrying the modified flag
    pub modified: Vec<usize>,
    pub undo_depth: usize,
}

impl BufferSnapshot {
    pub fn capture(buffer: &LineBuffer, undo_depth: usize) -> Self {
        Self {
            lines: buffer.to_lines().map(String::from).collect(),
            modified: buffer
                .render()
                .filter(|line| line.modified)
                .map(|line| line.number)
                .collect(),
            undo_depth,
        }
    }

    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for line in &self.lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        for number in &self.modified {
            hasher.update(number.to_le_bytes());
        }

        hasher.update(self.undo_depth.to_le_bytes());

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
