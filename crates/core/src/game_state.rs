//! Game state module - ties the core components together.
//!
//! `GameState` owns the corpus, RNG, spawner, field, input buffer and
//! scorer, and drives them from a single `tick` entry point. Everything is
//! a pure function of the seed and the frame sequence: no clock, no I/O,
//! no global state.

use crate::corpus::WordCorpus;
use crate::field::{Word, WordField};
use crate::input_buffer::InputBuffer;
use crate::matcher::select_target;
use crate::rng::SimpleRng;
use crate::scoring::Scorer;
use crate::snapshot::{GameSnapshot, WordView};
use crate::spawner::Spawner;
use crate::types::*;

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    corpus: WordCorpus,
    rng: SimpleRng,
    spawner: Spawner,
    field: WordField,
    input: InputBuffer,
    scorer: Scorer,
    phase: GamePhase,
    /// Completed Running ticks this run. Paused and game-over frames do
    /// not count, and restart resets it.
    ticks: u64,
}

impl GameState {
    /// Create a new game with the given RNG seed. Starts Running.
    pub fn new(seed: u32) -> Self {
        Self {
            corpus: WordCorpus::builtin(),
            rng: SimpleRng::new(seed),
            spawner: Spawner::new(),
            field: WordField::new(),
            input: InputBuffer::new(),
            scorer: Scorer::new(),
            phase: GamePhase::Running,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.scorer.score()
    }

    pub fn lives(&self) -> u32 {
        self.scorer.lives()
    }

    pub fn words(&self) -> &[Word] {
        self.field.words()
    }

    pub fn input_text(&self) -> &str {
        self.input.as_str()
    }

    /// Index of the word the buffer is aimed at, under the same rule the
    /// completion step uses
    pub fn target(&self) -> Option<usize> {
        select_target(self.field.words(), self.input.as_str())
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn field_mut(&mut self) -> &mut WordField {
        &mut self.field
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// Order within a Running tick: spawn, advance, danger sweep, ingest
    /// input, match and complete, depletion check. A fatal crossing still
    /// lets the same tick's typed input land before the phase flips.
    pub fn tick(&mut self, frame: &FrameInput) {
        match self.phase {
            GamePhase::GameOver => {
                // Only the restart edge is heard; typed input is dropped.
                if frame.restart {
                    self.reset_run();
                }
                return;
            }
            GamePhase::Paused => {
                // Resume consumes the frame; simulation picks up next tick.
                if frame.pause {
                    self.phase = GamePhase::Running;
                }
                return;
            }
            GamePhase::Running => {}
        }

        if frame.pause {
            self.phase = GamePhase::Paused;
            return;
        }

        self.ticks += 1;

        if self.spawner.advance() {
            self.spawn_word();
        }

        self.field.advance();

        let crossings = self.field.sweep();
        for _ in 0..crossings {
            self.scorer.on_life_lost();
        }

        for c in frame.chars.chars() {
            self.input.push_char(c);
        }
        if frame.backspace {
            self.input.backspace();
        }

        self.try_complete();

        if self.scorer.is_depleted() {
            self.phase = GamePhase::GameOver;
        }
    }

    /// Spawn the next word. Two RNG draws, word index first and then x;
    /// every seeded sequence depends on this order.
    fn spawn_word(&mut self) {
        let text = self.corpus.pick(&mut self.rng);
        let x = self.rng.next_range(SCREEN_WIDTH - SPAWN_RIGHT_MARGIN) as f64;
        self.field.push(Word::spawn(text, x));
    }

    /// Complete the target word if the buffer matches its text exactly.
    /// At most one completion per tick.
    fn try_complete(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let Some(index) = select_target(self.field.words(), self.input.as_str()) else {
            return;
        };
        if self.field.words()[index].text == self.input.as_str() {
            let word = self.field.remove(index);
            self.scorer.on_word_completed(word.text.len());
            self.input.clear();
        }
    }

    /// Fresh run after game over. The RNG keeps its state, so the new run
    /// draws the next words in the stream rather than replaying.
    fn reset_run(&mut self) {
        self.field.clear();
        self.input.clear();
        self.scorer.reset();
        self.spawner.reset();
        self.ticks = 0;
        self.phase = GamePhase::Running;
    }

    /// Fill a caller-owned snapshot. Does not allocate once `out` has
    /// warmed-up capacity (see `GameSnapshot::default`).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.words.clear();
        out.words
            .extend(self.field.words().iter().copied().map(WordView::from));
        out.input.clear();
        out.input.push_str(self.input.as_str());
        out.target = select_target(self.field.words(), self.input.as_str());
        out.score = self.scorer.score();
        out.lives = self.scorer.lives();
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
