//! Interactive menu loop
//!
//! The console reads selections and arguments from any `BufRead` and writes
//! prompts and results to any `Write`, so a scripted input drives exactly
//! the same code path as a terminal.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use line_core::Command;

use crate::commands::{CommandError, MenuChoice, MenuParser};
use crate::editor::{EditorError, EditorResult, Session};
use crate::io::EditorIo;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user picked the exit entry
    Requested,
    /// Input ran out
    EndOfInput,
}

/// Interactive console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Load the starting document.
    ///
    /// With no path the user is asked for one; a blank answer starts an
    /// empty buffer. A failed load is reported and the session starts empty.
    pub fn open_initial<I: EditorIo>(
        &mut self,
        session: &mut Session<I>,
        path: Option<&Path>,
    ) -> io::Result<()> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let answer = self
                    .prompt("Enter the filename to load (or leave blank to start fresh): ")?
                    .unwrap_or_default();
                if answer.is_empty() {
                    return Ok(());
                }
                PathBuf::from(answer)
            }
        };

        if session.load(&path).is_err() {
            log::debug!("starting with an empty buffer");
        }
        self.report(session)
    }

    /// Run the menu loop until exit or end of input
    pub fn run<I: EditorIo>(&mut self, session: &mut Session<I>) -> io::Result<ExitReason> {
        loop {
            let menu = session.render_menu();
            self.output.write_all(menu.as_bytes())?;
            self.output.flush()?;

            let Some(selection) = self.read_line()? else {
                log::debug!("input closed, leaving menu loop");
                return Ok(ExitReason::EndOfInput);
            };

            let choice = match MenuParser::parse(&selection) {
                Ok(choice) => choice,
                Err(err) => {
                    log::debug!("{}", err);
                    writeln!(self.output, "Invalid option. Try again!")?;
                    continue;
                }
            };

            match self.dispatch(session, choice) {
                Ok(Some(reason)) => {
                    writeln!(self.output, "Editor exited...")?;
                    return Ok(reason);
                }
                Ok(None) => {}
                Err(Interrupted::Closed) => return Ok(ExitReason::EndOfInput),
                Err(Interrupted::Io(err)) => return Err(err),
            }
        }
    }

    fn dispatch<I: EditorIo>(
        &mut self,
        session: &mut Session<I>,
        choice: MenuChoice,
    ) -> Result<Option<ExitReason>, Interrupted> {
        let result = match choice {
            MenuChoice::InsertLine => {
                let text = self.ask("Enter the line to insert:\n")?;
                session.execute(Command::Append(text)).map(drop)
            }
            MenuChoice::InsertAt => match self.ask_index("Enter index: ")? {
                Ok(index) => {
                    let text = self.ask("Enter the line to insert:\n")?;
                    session.execute(Command::InsertAt { index, text }).map(drop)
                }
                Err(err) => Err(err.into()),
            },
            MenuChoice::ReplaceLine => match self.ask_index("Enter line number to replace: ")? {
                Ok(index) => {
                    let text = self.ask("Enter the new line:\n")?;
                    session.execute(Command::Replace { index, text }).map(drop)
                }
                Err(err) => Err(err.into()),
            },
            MenuChoice::Interchange => {
                let first = self.ask_index("Enter the first line number: ")?;
                let second = self.ask_index("Enter the second line number: ")?;
                match (first, second) {
                    (Ok(first), Ok(second)) => {
                        session.execute(Command::Swap(first, second)).map(drop)
                    }
                    (Err(err), _) | (_, Err(err)) => Err(err.into()),
                }
            }
            MenuChoice::DeleteLine => match self.ask_index("Enter line number to delete: ")? {
                Ok(index) => session.execute(Command::Delete(index)).map(drop),
                Err(err) => Err(err.into()),
            },
            MenuChoice::SearchReplace => {
                let needle = self.ask("Enter the word to search: ")?;
                let replacement = self.ask("Enter the word to replace with: ")?;
                session
                    .execute(Command::SearchReplace {
                        needle,
                        replacement,
                    })
                    .map(drop)
            }
            MenuChoice::Display => {
                let rendered = session.render();
                self.output.write_all(rendered.as_bytes())?;
                return Ok(None);
            }
            MenuChoice::Save => {
                let name = self.ask("Enter filename to save: ")?;
                session.save(Path::new(&name))
            }
            MenuChoice::Undo => session.undo().map(drop),
            MenuChoice::Exit => return Ok(Some(ExitReason::Requested)),
        };

        self.finish(session, result)?;
        Ok(None)
    }

    fn finish<I: EditorIo>(
        &mut self,
        session: &mut Session<I>,
        result: EditorResult<()>,
    ) -> io::Result<()> {
        if let Err(EditorError::Command(err)) = &result {
            session.set_status_message(err.to_string());
        }
        self.report(session)
    }

    /// Print and clear the session's status message
    fn report<I: EditorIo>(&mut self, session: &mut Session<I>) -> io::Result<()> {
        if !session.status_message().is_empty() {
            writeln!(self.output, "{}", session.status_message())?;
            session.set_status_message("");
        }
        Ok(())
    }

    fn ask(&mut self, text: &str) -> Result<String, Interrupted> {
        self.prompt(text)?.ok_or(Interrupted::Closed)
    }

    fn ask_index(&mut self, text: &str) -> Result<Result<usize, CommandError>, Interrupted> {
        let answer = self.ask(text)?;
        Ok(MenuParser::parse_index(&answer))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Input stopped while a command was collecting arguments
enum Interrupted {
    Closed,
    Io(io::Error),
}

impl From<io::Error> for Interrupted {
    fn from(err: io::Error) -> Self {
        Interrupted::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::SessionConfig;
    use crate::io::MemoryEditorIo;

    fn run_script(script: &str) -> (Session<MemoryEditorIo>, String, ExitReason) {
        let mut session = Session::new(MemoryEditorIo::new(), SessionConfig::default());
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let reason = console.run(&mut session).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (session, output, reason)
    }

    fn texts(session: &Session<MemoryEditorIo>) -> Vec<&str> {
        session.engine().buffer().to_lines().collect()
    }

    #[test]
    fn test_exit_option() {
        let (_, output, reason) = run_script("-1\n");
        assert_eq!(reason, ExitReason::Requested);
        assert!(output.ends_with("Editor exited...\n"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (_, _, reason) = run_script("1\nhello\n");
        assert_eq!(reason, ExitReason::EndOfInput);
    }

    #[test]
    fn test_end_of_input_mid_command() {
        let (session, _, reason) = run_script("2\n1\n");
        assert_eq!(reason, ExitReason::EndOfInput);
        assert!(session.engine().buffer().is_empty());
    }

    #[test]
    fn test_insert_and_display() {
        let (session, output, _) = run_script("1\nhello\n2\n1\nfirst\n7\n-1\n");
        assert_eq!(texts(&session), vec!["first", "hello"]);
        assert!(output.contains("1> * first\n2> * hello\n"));
    }

    #[test]
    fn test_invalid_option() {
        let (_, output, _) = run_script("42\n-1\n");
        assert!(output.contains("Invalid option. Try again!\n"));
    }

    #[test]
    fn test_invalid_number_aborts_command() {
        let (session, output, _) = run_script("5\nabc\n-1\n");
        assert!(output.contains("Invalid number: abc"));
        assert_eq!(session.engine().history().depth(), 1);
    }

    #[test]
    fn test_invalid_index_reported() {
        let (session, output, _) = run_script("3\n4\nnope\n-1\n");
        assert!(output.contains("Enter the new line:\nInvalid index!\n"));
        assert!(session.engine().buffer().is_empty());
    }

    #[test]
    fn test_negative_index_rejected() {
        let (_, output, _) = run_script("1\na\n5\n-2\n-1\n");
        assert!(output.contains("Enter line number to delete: Invalid index!\n"));
    }

    #[test]
    fn test_delete_from_empty_buffer() {
        let (session, output, reason) = run_script("5\n1\n-1\n");
        assert_eq!(reason, ExitReason::Requested);
        assert!(output.contains("Enter line number to delete: Invalid index!\n"));
        assert_eq!(session.engine().history().depth(), 1);
    }

    #[test]
    fn test_undo_unavailable() {
        let (_, output, _) = run_script("9\n-1\n");
        assert!(output.contains("UNDO unavailable...\n"));
    }

    #[test]
    fn test_save_from_menu() {
        let (session, output, _) = run_script("1\nsaved line\n8\nout.txt\n-1\n");
        assert_eq!(session.io().content("out.txt"), Some("saved line\n"));
        assert!(output.contains("File saved successfully as 'out.txt'!"));
    }

    #[test]
    fn test_open_initial_prompts_when_no_path() {
        let io = MemoryEditorIo::new().with_file("doc.txt", "x\n");
        let mut session = Session::new(io, SessionConfig::default());
        let mut console = Console::new("doc.txt\n".as_bytes(), Vec::new());
        console.open_initial(&mut session, None).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("File loaded successfully!"));
        assert_eq!(texts(&session), vec!["x"]);
    }

    #[test]
    fn test_open_initial_blank_starts_fresh() {
        let mut session = Session::new(MemoryEditorIo::new(), SessionConfig::default());
        let mut console = Console::new("\n".as_bytes(), Vec::new());
        console.open_initial(&mut session, None).unwrap();
        assert!(session.engine().buffer().is_empty());
    }

    #[test]
    fn test_open_initial_missing_file_reports() {
        let mut session = Session::new(MemoryEditorIo::new(), SessionConfig::default());
        let mut console = Console::new("".as_bytes(), Vec::new());
        console
            .open_initial(&mut session, Some(Path::new("gone.txt")))
            .unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Error:"));
        assert!(session.engine().buffer().is_empty());
    }
}
