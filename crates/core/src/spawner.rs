//! Spawn cadence.
//!
//! Words spawn on a fixed 90-tick rhythm with zero drift: the counter
//! resets on the tick a spawn fires, so spawns land exactly on ticks 90,
//! 180, 270, ... of a run.

use tui_typefall_types::SPAWN_DELAY_TICKS;

/// Counts ticks toward the next word spawn.
#[derive(Debug, Clone)]
pub struct Spawner {
    ticks: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Advance one tick. True when a spawn is due this tick.
    pub fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= SPAWN_DELAY_TICKS {
            self.ticks = 0;
            true
        } else {
            false
        }
    }

    /// Restart the cadence for a new run
    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
