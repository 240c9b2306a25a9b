//! Outbound text events.
//!
//! Everything the simulation says to the player passes through a
//! transcript: an ordered queue of notes the display adapter drains after
//! each step. Runs of whitespace are collapsed on entry so description
//! fragments can be joined carelessly.

/// One outbound event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Note {
    /// A line of player-visible text.
    Text(String),
    /// Request to clear the scrolling display.
    ClearScreen,
}

/// Ordered queue of outbound events.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    notes: Vec<Note>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Appends a text line, collapsing whitespace runs.
    pub fn say(&mut self, line: impl AsRef<str>) {
        let collapsed = line.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
        self.notes.push(Note::Text(collapsed));
    }

    /// Appends a clear-screen request.
    pub fn clear_screen(&mut self) {
        self.notes.push(Note::ClearScreen);
    }

    /// Removes and returns everything queued so far.
    pub fn drain(&mut self) -> Vec<Note> {
        std::mem::take(&mut self.notes)
    }

    /// The queued text lines, ignoring clear requests. Test convenience.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.notes
            .iter()
            .filter_map(|n| match n {
                Note::Text(line) => Some(line.as_str()),
                Note::ClearScreen => None,
            })
            .collect()
    }
}
