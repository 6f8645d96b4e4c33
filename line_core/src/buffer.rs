//! Ordered line storage and structural mutators
//!
//! All user-facing indices are 1-based. Bounds are checked against the
//! length before the operation starts; a rejected call changes nothing.

use crate::error::{EditError, EditResult};
use crate::line::Line;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// One row of a rendered buffer view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    /// 1-based line number
    pub number: usize,
    pub text: &'a str,
    pub modified: bool,
}

/// Line buffer
///
/// An empty buffer (zero lines) is valid and is the state of a fresh session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a buffer from file lines; none of them are marked modified
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buffer = Self::new();
        buffer.load_lines(lines);
        buffer
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at a 1-based index
    pub fn line(&self, index: usize) -> Option<&Line> {
        index.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Add a modified line at the end
    pub fn append(&mut self, text: impl Into<String>) {
        self.lines.push(Line::edited(text));
    }

    /// Insert a modified line before `index` (`1..=len+1`)
    pub fn insert_at(&mut self, index: usize, text: impl Into<String>) -> EditResult<()> {
        let max = self.lines.len() + 1;
        if index == 0 || index > max {
            return Err(EditError::Index { index, max });
        }
        self.lines.insert(index - 1, Line::edited(text));
        Ok(())
    }

    /// Overwrite the text of the line at `index`
    pub fn replace(&mut self, index: usize, text: impl Into<String>) -> EditResult<()> {
        let slot = self.slot(index)?;
        self.lines[slot].set_text(text);
        Ok(())
    }

    /// Exchange two lines, flags included. `swap(i, i)` is a valid no-op.
    pub fn swap(&mut self, first: usize, second: usize) -> EditResult<()> {
        let a = self.slot(first)?;
        let b = self.slot(second)?;
        self.lines.swap(a, b);
        Ok(())
    }

    /// Remove the line at `index`, shifting the rest up
    pub fn delete(&mut self, index: usize) -> EditResult<Line> {
        let slot = self.slot(index)?;
        Ok(self.lines.remove(slot))
    }

    /// Replace every non-overlapping occurrence of `needle` in every line.
    ///
    /// Scanning resumes after each inserted replacement, so a replacement
    /// containing `needle` is not matched again. Returns the number of lines
    /// that changed; zero means nothing was found, which is not an error.
    pub fn search_replace(&mut self, needle: &str, replacement: &str) -> EditResult<usize> {
        if needle.is_empty() {
            return Err(EditError::InvalidArgument(
                "search text must not be empty".into(),
            ));
        }

        let mut changed = 0;
        for line in &mut self.lines {
            if let Some(text) = replace_all(line.text(), needle, replacement) {
                line.set_text(text);
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Read-only view in document order. Call again to restart.
    pub fn render(&self) -> impl Iterator<Item = RenderedLine<'_>> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| RenderedLine {
                number: i + 1,
                text: line.text(),
                modified: line.is_modified(),
            })
    }

    /// Replace the whole content with unmodified lines
    pub fn load_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Line::loaded).collect();
    }

    /// Texts in order, for saving
    pub fn to_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(Line::text)
    }

    fn slot(&self, index: usize) -> EditResult<usize> {
        let max = self.lines.len();
        if index == 0 || index > max {
            return Err(EditError::Index { index, max });
        }
        Ok(index - 1)
    }
}

/// `None` when `needle` does not occur in `haystack`
fn replace_all(haystack: &str, needle: &str, replacement: &str) -> Option<String> {
    let mut rest = haystack;
    let mut out: Option<String> = None;

    while let Some(pos) = rest.find(needle) {
        let out = out.get_or_insert_with(|| String::with_capacity(haystack.len()));
        out.push_str(&rest[..pos]);
        out.push_str(replacement);
        rest = &rest[pos + needle.len()..];
    }

    out.map(|mut out| {
        out.push_str(rest);
        out
    })
}
