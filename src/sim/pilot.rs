//! Demo pilot
//!
//! Plays the game on its own by emitting a seeded stream of events. Used by
//! the headless driver and for soak-testing the reducer. Obstacle placement
//! never touches this RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;
use super::tick::{Event, Step};

/// Seeded event source that reacts to the latest snapshot
#[derive(Debug, Clone)]
pub struct Pilot {
    rng: Pcg32,
    /// Chance that the next event is a move instead of a tick
    move_chance: f64,
    /// Whether to press restart after dying
    auto_restart: bool,
    ticks: u64,
}

impl Pilot {
    pub fn new(seed: u64, move_chance: f64, auto_restart: bool) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            move_chance: move_chance.clamp(0.0, 1.0),
            auto_restart,
            ticks: 0,
        }
    }

    /// Ticks handed out so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Pick the next event given the current snapshot
    pub fn next_event(&mut self, state: &GameState) -> Event {
        if state.game_over && self.auto_restart {
            return Event::Restart;
        }

        if self.rng.random_bool(self.move_chance) {
            // Bias towards the goals: half of all moves go up
            let step = match self.rng.random_range(0..6) {
                0..=2 => Step::Up,
                3 => Step::Down,
                4 => Step::Left,
                _ => Step::Right,
            };
            Event::Move(step)
        } else {
            let elapsed = self.ticks;
            self.ticks += 1;
            Event::Tick { elapsed }
        }
    }
}
