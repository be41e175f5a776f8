//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One snapshot in, one snapshot out per event
//! - No randomness in obstacle placement
//! - Stable ordering of every body collection
//! - No rendering, input or platform dependencies

pub mod collision;
pub mod layout;
pub mod pilot;
pub mod state;
pub mod tick;

pub use collision::{FrogContacts, overlaps, resolve};
pub use layout::create_obstacles;
pub use pilot::Pilot;
pub use state::{Body, BodyKind, Direction, GamePhase, GameState, frog_start};
pub use tick::{Axis, Event, Step, reduce, replay, run};
