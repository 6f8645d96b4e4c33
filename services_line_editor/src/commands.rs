//! Menu selection and argument parsing

use thiserror::Error;

/// Menu parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid option: {0}")]
    UnknownOption(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Menu entry selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Append a line
    InsertLine,
    /// Insert a line at an index
    InsertAt,
    /// Replace a line
    ReplaceLine,
    /// Interchange two lines
    Interchange,
    /// Delete a line
    DeleteLine,
    /// Search and replace a word
    SearchReplace,
    /// Display the text with modified lines marked
    Display,
    /// Save to a file
    Save,
    /// Undo the last change
    Undo,
    /// Leave the editor
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::InsertLine,
        MenuChoice::InsertAt,
        MenuChoice::ReplaceLine,
        MenuChoice::Interchange,
        MenuChoice::DeleteLine,
        MenuChoice::SearchReplace,
        MenuChoice::Display,
        MenuChoice::Save,
        MenuChoice::Undo,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuChoice::InsertLine => "1",
            MenuChoice::InsertAt => "2",
            MenuChoice::ReplaceLine => "3",
            MenuChoice::Interchange => "4",
            MenuChoice::DeleteLine => "5",
            MenuChoice::SearchReplace => "6",
            MenuChoice::Display => "7",
            MenuChoice::Save => "8",
            MenuChoice::Undo => "9",
            MenuChoice::Exit => "-1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::InsertLine => "Insert line",
            MenuChoice::InsertAt => "Insert line at index",
            MenuChoice::ReplaceLine => "Replace a line",
            MenuChoice::Interchange => "Interchange two lines",
            MenuChoice::DeleteLine => "Delete line",
            MenuChoice::SearchReplace => "Search and Replace word",
            MenuChoice::Display => "Display text with highlights",
            MenuChoice::Save => "Save File",
            MenuChoice::Undo => "Undo changes",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Menu parser
pub struct MenuParser;

impl MenuParser {
    /// Parse a menu selection line
    pub fn parse(input: &str) -> Result<MenuChoice, CommandError> {
        let trimmed = input.trim();

        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == trimmed)
            .ok_or_else(|| CommandError::UnknownOption(trimmed.to_string()))
    }

    /// Parse a 1-based line number.
    ///
    /// Negative numbers map to 0 so the buffer rejects them as out of range.
    pub fn parse_index(input: &str) -> Result<usize, CommandError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| CommandError::InvalidNumber(trimmed.to_string()))?;
        Ok(usize::try_from(value).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_entries() {
        assert_eq!(MenuParser::parse("1"), Ok(MenuChoice::InsertLine));
        assert_eq!(MenuParser::parse(" 6 "), Ok(MenuChoice::SearchReplace));
        assert_eq!(MenuParser::parse("9"), Ok(MenuChoice::Undo));
        assert_eq!(MenuParser::parse("-1"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_unknown_option() {
        assert_eq!(
            MenuParser::parse("10"),
            Err(CommandError::UnknownOption("10".to_string()))
        );
        assert_eq!(
            MenuParser::parse(""),
            Err(CommandError::UnknownOption(String::new()))
        );
    }

    #[test]
    fn test_menu_keys_are_unique() {
        for (i, a) in MenuChoice::ALL.iter().enumerate() {
            for b in &MenuChoice::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(MenuParser::parse_index("3"), Ok(3));
        assert_eq!(MenuParser::parse_index(" 12\n"), Ok(12));
        assert_eq!(MenuParser::parse_index("-4"), Ok(0));
        assert_eq!(
            MenuParser::parse_index("two"),
            Err(CommandError::InvalidNumber("two".to_string()))
        );
    }
}
