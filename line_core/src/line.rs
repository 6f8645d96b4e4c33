//! Single text line with a modified marker

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// One line of the document.
///
/// `modified` is a display annotation: it is set whenever the text is
/// written or the line is created by an edit, and never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Line {
    text: String,
    modified: bool,
}

impl Line {
    /// Line created by an edit
    pub fn edited(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modified: true,
        }
    }

    /// Line read from a file
    pub fn loaded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modified: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Overwrite the text and mark the line modified
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.modified = true;
    }
}
