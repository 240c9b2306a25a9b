//! Word-wrapped terminal output.
//!
//! Engine text is queued as transcript notes; this module turns them into
//! wrapped lines on stdout. Wrapping is greedy at a fixed column, after
//! whitespace collapse, so engine code can format messages without caring
//! about terminal width.

use std::io::{self, Write};

use thornwald_engine::Note;

/// Default wrap column.
pub const WRAP_WIDTH: usize = 70;

/// Splits text into lines no wider than `width` columns.
///
/// Words are kept whole; a single word wider than the column gets a line
/// of its own. Empty text produces no lines.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders transcript notes to stdout.
#[derive(Clone, Debug)]
pub struct Display {
    width: usize,
}

impl Display {
    /// Creates a display wrapping at the given column.
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Prints each note: text wrapped line by line, clear requests as an
    /// ANSI erase-and-home sequence.
    pub fn render(&self, notes: Vec<Note>) {
        let mut out = io::stdout().lock();
        for note in notes {
            match note {
                Note::Text(text) => {
                    for line in wrap(&text, self.width) {
                        let _ = writeln!(out, "{line}");
                    }
                }
                Note::ClearScreen => {
                    let _ = write!(out, "\x1b[2J\x1b[1;1H");
                }
            }
        }
        let _ = out.flush();
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new(WRAP_WIDTH)
    }
}
