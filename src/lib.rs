//! Frog Crossing - a cross-the-road-and-river arcade game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, collisions, scoring, event reducer)
//! - `settings`: Runtime settings for the headless driver

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Width of the (square) play field; horizontal positions wrap at this extent
    pub const CANVAS_SIZE: f32 = 600.0;
    /// Cadence of simulation ticks produced by the driver (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 150;

    /// Frog defaults
    pub const FROG_START_X: f32 = 255.0;
    pub const FROG_START_Y: f32 = 555.0;
    pub const FROG_WIDTH: f32 = 30.0;
    pub const FROG_HEIGHT: f32 = 30.0;
    /// Distance covered by a single move command
    pub const MOVE_STEP: f32 = 60.0;

    /// Per-kind multiplier applied to a body's base speed every tick
    pub const HAZARD_SPEED_SCALE: f32 = 5.0;
    pub const RAFT_SPEED_SCALE: f32 = 5.0;
    /// Extra displacement per tick for each level reached
    pub const DIFFICULTY_MULTIPLIER: f32 = 1.5;

    /// Vertical distance between consecutive obstacle rows
    pub const ROW_PITCH: f32 = 60.0;
    /// Base speed lost by each row after the first
    pub const SPEED_DECREMENT_PER_ROW: f32 = 0.5;

    /// Cars (hazards)
    pub const CAR_WIDTH: f32 = 55.0;
    pub const CAR_HEIGHT: f32 = 30.0;
    pub const CAR_SEPARATION: f32 = 100.0;
    pub const CARS_PER_ROW: usize = 3;
    pub const CAR_ROWS: usize = 3;
    pub const CAR_FIRST_ROW: f32 = 375.0;
    pub const CAR_START_SPEED: f32 = 2.0;

    /// Logs (rafts)
    pub const LOG_WIDTH: f32 = 100.0;
    pub const LOG_HEIGHT: f32 = 40.0;
    pub const LOG_SEPARATION: f32 = 150.0;
    pub const LOGS_PER_ROW: usize = 2;
    pub const LOG_ROWS: usize = 3;
    pub const LOG_FIRST_ROW: f32 = 130.0;
    pub const LOG_START_SPEED: f32 = 1.5;

    /// River
    pub const RIVER_X: f32 = 0.0;
    pub const RIVER_Y: f32 = 120.0;
    pub const RIVER_WIDTH: f32 = 600.0;
    pub const RIVER_HEIGHT: f32 = 180.0;

    /// Goal zones
    pub const GOAL_ZONE_COUNT: usize = 3;
    pub const GOAL_ZONE_WIDTH: f32 = 30.0;
    pub const GOAL_ZONE_HEIGHT: f32 = 30.0;
    pub const GOAL_ZONE_ROW: f32 = 75.0;
    pub const GOAL_ZONE_XS: [f32; GOAL_ZONE_COUNT] = [75.0, 255.0, 435.0];

    /// Progression
    pub const INITIAL_LEVEL: u32 = 1;
    pub const INITIAL_SCORE: u32 = 0;

    /// Colours (0xRRGGBB), cosmetic only
    pub const FROG_COLOR: u32 = 0x9ACD32; // yellowgreen
    pub const FROG_DEAD_COLOR: u32 = 0xFF0000;
    pub const CAR_COLOR: u32 = 0xFFA500;
    pub const LOG_COLOR: u32 = 0xA52A2A;
    pub const RIVER_COLOR: u32 = 0x1E90FF;
    pub const GOAL_ZONE_COLOR: u32 = 0xFFFFFF;
    pub const GOAL_ZONE_OCCUPIED_COLOR: u32 = 0x696969;
}

/// Wrap a horizontal coordinate onto the cyclic play field `[0, CANVAS_SIZE)`
#[inline]
pub fn torus_wrap(x: f32) -> f32 {
    let size = consts::CANVAS_SIZE;
    let wrapped = x.rem_euclid(size);
    // rem_euclid can round up to `size` for tiny negative inputs
    if wrapped >= size { 0.0 } else { wrapped }
}
