//! Game state and core simulation types
//!
//! A `GameState` is an immutable snapshot: the reducer never edits one in
//! place, it always hands back a new value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::create_obstacles;
use crate::consts::*;

/// Coarse phase of the game, derived from the `game_over` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frog is alive, moves and ticks are accepted
    Playing,
    /// Frog died, only a restart is accepted
    GameOver,
}

/// What a body is, for collision purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Frog,
    /// Car lane obstacle, fatal on contact
    Hazard,
    /// Floating log, makes the river safe while the frog stands on it
    Raft,
    Water,
    GoalZone,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Frog => "frog",
            BodyKind::Hazard => "car",
            BodyKind::Raft => "log",
            BodyKind::Water => "river",
            BodyKind::GoalZone => "goal",
        }
    }

    /// Multiplier applied to a body's base speed each tick (0 for static kinds)
    pub fn speed_scale(&self) -> f32 {
        match self {
            BodyKind::Hazard => HAZARD_SPEED_SCALE,
            BodyKind::Raft => RAFT_SPEED_SCALE,
            BodyKind::Frog | BodyKind::Water | BodyKind::GoalZone => 0.0,
        }
    }
}

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    /// Stationary or player-controlled
    #[default]
    Still,
    Right,
}

impl Direction {
    /// -1, 0 or 1
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Still => 0.0,
            Direction::Right => 1.0,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Still => Direction::Still,
            Direction::Right => Direction::Left,
        }
    }
}

/// Any positioned, sized, collidable object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique within its collection
    pub id: String,
    pub kind: BodyKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// 0xRRGGBB, never read by game logic
    pub color: u32,
    /// Base speed (0 for the frog and the river)
    pub speed: f32,
    pub direction: Direction,
    /// Only meaningful for goal zones
    pub occupied: bool,
}

impl Body {
    pub fn new(
        id: impl Into<String>,
        kind: BodyKind,
        pos: Vec2,
        size: Vec2,
        color: u32,
        speed: f32,
        direction: Direction,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            pos,
            size,
            color,
            speed,
            direction,
            occupied: false,
        }
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal displacement applied by one tick at the given level
    pub fn tick_displacement(&self, level: u32) -> f32 {
        self.direction.sign()
            * (self.speed * self.kind.speed_scale() + level as f32 * DIFFICULTY_MULTIPLIER)
    }

    /// Colour a renderer should use for this body
    pub fn display_color(&self) -> u32 {
        if self.kind == BodyKind::GoalZone && self.occupied {
            GOAL_ZONE_OCCUPIED_COLOR
        } else {
            self.color
        }
    }
}

/// The player at its starting square
pub fn create_frog() -> Body {
    Body::new(
        "frog",
        BodyKind::Frog,
        frog_start(),
        Vec2::new(FROG_WIDTH, FROG_HEIGHT),
        FROG_COLOR,
        0.0,
        Direction::Still,
    )
}

/// Where the frog spawns and returns to after reaching a goal
#[inline]
pub fn frog_start() -> Vec2 {
    Vec2::new(FROG_START_X, FROG_START_Y)
}

pub fn create_river() -> Body {
    Body::new(
        "river",
        BodyKind::Water,
        Vec2::new(RIVER_X, RIVER_Y),
        Vec2::new(RIVER_WIDTH, RIVER_HEIGHT),
        RIVER_COLOR,
        0.0,
        Direction::Still,
    )
}

pub fn create_goal_zones() -> Vec<Body> {
    GOAL_ZONE_XS
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            Body::new(
                format!("goal-{}", i + 1),
                BodyKind::GoalZone,
                Vec2::new(x, GOAL_ZONE_ROW),
                Vec2::new(GOAL_ZONE_WIDTH, GOAL_ZONE_HEIGHT),
                GOAL_ZONE_COLOR,
                0.0,
                Direction::Still,
            )
        })
        .collect()
}

/// Complete world snapshot (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub frog: Body,
    /// Cars, fixed count after construction
    pub hazards: Vec<Body>,
    /// Logs, fixed count after construction
    pub rafts: Vec<Body>,
    pub water: Body,
    /// Always `GOAL_ZONE_COUNT` entries
    pub goal_zones: Vec<Body>,
    pub game_over: bool,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
}

impl GameState {
    /// Fresh world at level 1 with nothing scored
    pub fn new() -> Self {
        Self {
            frog: create_frog(),
            hazards: create_obstacles(
                CARS_PER_ROW,
                CAR_FIRST_ROW,
                CAR_ROWS,
                BodyKind::Hazard,
                CAR_START_SPEED,
                Direction::Left,
            ),
            rafts: create_obstacles(
                LOGS_PER_ROW,
                LOG_FIRST_ROW,
                LOG_ROWS,
                BodyKind::Raft,
                LOG_START_SPEED,
                Direction::Left,
            ),
            water: create_river(),
            goal_zones: create_goal_zones(),
            game_over: false,
            score: INITIAL_SCORE,
            high_score: INITIAL_SCORE,
            level: INITIAL_LEVEL,
        }
    }

    /// Fresh world that keeps only the given high score
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::new()
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    /// Number of goal zones currently occupied
    pub fn occupied_goals(&self) -> usize {
        self.goal_zones.iter().filter(|z| z.occupied).count()
    }

    /// True when every goal zone holds a frog
    pub fn wave_complete(&self) -> bool {
        self.goal_zones.iter().all(|z| z.occupied)
    }

    /// Frog colour for renderers (turns red on death)
    pub fn frog_display_color(&self) -> u32 {
        if self.game_over {
            FROG_DEAD_COLOR
        } else {
            self.frog.color
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
