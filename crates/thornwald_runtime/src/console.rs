//! Line input abstraction over rustyline.
//!
//! The [`Console`] trait keeps the session loop testable with a scripted
//! console, while [`RustylineConsole`] is what the binary runs. Raw
//! up-arrow escape sequences that survive into the line recall earlier
//! input instead of being interpreted literally.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::Result;

/// The up-arrow escape sequence as it appears in a raw input line.
const UP_ARROW: &str = "\u{1b}[A";

/// Result of reading a line from the console.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// The player pressed Ctrl+C.
    Interrupted,
    /// The player pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over terminal line input.
pub trait Console {
    /// Reads one line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;
}

/// Resolves raw up-arrow recall against remembered input.
///
/// Plain lines are remembered and returned unchanged. A line containing
/// `n` up-arrow sequences instead recalls the `n`th-from-last remembered
/// line, without re-remembering it; when history does not reach that far
/// the recall falls back to `"where"`, so a fresh session's stray arrow
/// key still produces a sensible command.
#[must_use]
pub fn resolve_recall(line: &str, remembered: &mut Vec<String>) -> String {
    let presses = line.matches(UP_ARROW).count();
    if presses == 0 {
        remembered.push(line.to_string());
        return line.to_string();
    }
    remembered
        .len()
        .checked_sub(presses)
        .and_then(|i| remembered.get(i))
        .cloned()
        .unwrap_or_else(|| "where".to_string())
}

/// Line input backed by rustyline.
pub struct RustylineConsole {
    editor: DefaultEditor,
}

impl RustylineConsole {
    /// Creates a console over the controlling terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }
}

impl Console for RustylineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(&line);
                Ok(ReadResult::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(e.into()),
        }
    }
}
