//! Text rendering for the console
//!
//! Provides plain-text representations of the buffer and the menu suitable
//! for a terminal or test output.

use line_core::LineBuffer;

use crate::commands::MenuChoice;

/// Marker placed before modified lines in highlighted output
pub const MODIFIED_MARKER: &str = "* ";

/// Buffer view for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextView {
    /// Whether modified lines are marked
    highlight: bool,
}

impl TextView {
    pub fn new(highlight: bool) -> Self {
        Self { highlight }
    }

    /// Render the buffer, one numbered line per row, followed by a blank line
    pub fn render(&self, buffer: &LineBuffer) -> String {
        let mut output = String::new();

        if self.highlight {
            output.push_str("Current text (Modified lines marked with *):\n");
        } else {
            output.push_str("Current text:\n");
        }

        for line in buffer.render() {
            output.push_str(&line.number.to_string());
            output.push_str("> ");
            if self.highlight && line.modified {
                output.push_str(MODIFIED_MARKER);
            }
            output.push_str(line.text);
            output.push('\n');
        }

        output.push('\n');
        output
    }

    /// Render the selection menu, ending with the input prompt
    pub fn render_menu(&self) -> String {
        let mut output = String::from("Enter your Selection:\n");
        for choice in MenuChoice::ALL {
            output.push_str(choice.key());
            output.push_str(". ");
            output.push_str(choice.label());
            output.push('\n');
        }
        output.push_str(">> ");
        output
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new(true)
    }
}
