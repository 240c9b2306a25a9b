//! The blocking session loop.
//!
//! Alternates the player phase (read and dispatch lines until an action
//! ends the turn) with the world phase (every viewpoint creature moves).
//! EOF and interrupt are the only ways out.

use rand_chacha::ChaCha8Rng;

use thornwald_engine::{Game, Note};

use crate::console::{Console, ReadResult, RustylineConsole, resolve_recall};
use crate::display::Display;
use crate::error::Result;

/// Prompt shown before every read.
const PROMPT: &str = ">->";

/// One interactive run of the game.
pub struct Session<C: Console = RustylineConsole> {
    console: C,
    game: Game,
    display: Display,
    rng: ChaCha8Rng,
    remembered: Vec<String>,
}

impl Session<RustylineConsole> {
    /// Creates a session on the controlling terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new(game: Game, rng: ChaCha8Rng) -> Result<Self> {
        Ok(Self::with_console(RustylineConsole::new()?, game, rng))
    }
}

impl<C: Console> Session<C> {
    /// Creates a session over any console, for scripted runs.
    pub fn with_console(console: C, game: Game, rng: ChaCha8Rng) -> Self {
        Self {
            console,
            game,
            display: Display::default(),
            rng,
            remembered: Vec::new(),
        }
    }

    /// The underlying game, for inspection after a run.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the loop until EOF or interrupt.
    ///
    /// An inactive player skips the command phase; the session still waits
    /// for a line (discarded) before running the world phase, so an
    /// unconscious player watches regeneration attempts at their own pace
    /// rather than in a spin loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn run(&mut self) -> Result<()> {
        self.flush();
        loop {
            if self.game.player_active() {
                while self.game.player_active() && !self.game.turn_over() {
                    match self.console.read_line(PROMPT)? {
                        ReadResult::Line(raw) => {
                            let line = resolve_recall(&raw, &mut self.remembered);
                            self.game.handle_line(&line, &mut self.rng);
                            self.flush();
                        }
                        ReadResult::Interrupted | ReadResult::Eof => return Ok(()),
                    }
                }
            } else {
                self.display.render(vec![Note::Text(
                    "You are to injured to do anything.".to_string(),
                )]);
                match self.console.read_line(PROMPT)? {
                    ReadResult::Line(_) => {}
                    ReadResult::Interrupted | ReadResult::Eof => return Ok(()),
                }
            }
            self.game.world_phase(&mut self.rng);
            self.flush();
        }
    }

    fn flush(&mut self) {
        self.display.render(self.game.drain_output());
    }
}
