//! Collision detection and scoring
//!
//! `resolve` corrects a candidate state produced by the reducer: it decides
//! death, captures goal zones, clears full waves and bumps score and level.
//! Every check reads the incoming state; nothing moves in here except the
//! frog being sent back to the start after reaching a goal.

use super::state::{Body, GameState, frog_start};

/// Axis-aligned overlap, half-open on the far edges
///
/// Bodies that merely touch (one's right edge equals the other's left edge)
/// do not overlap.
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// What the frog is touching in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrogContacts {
    pub hit_hazard: bool,
    pub on_raft: bool,
    pub in_water: bool,
    pub on_goal: bool,
}

impl FrogContacts {
    pub fn of(state: &GameState) -> Self {
        let frog = &state.frog;
        Self {
            hit_hazard: state.hazards.iter().any(|h| overlaps(frog, h)),
            on_raft: state.rafts.iter().any(|r| overlaps(frog, r)),
            in_water: overlaps(frog, &state.water),
            on_goal: state.goal_zones.iter().any(|z| overlaps(frog, z)),
        }
    }

    /// Run over, or in the river without a log underneath
    pub fn is_fatal(&self) -> bool {
        self.hit_hazard || (self.in_water && !self.on_raft)
    }
}

/// Apply death, goal capture, wave clear and high score rules
///
/// Two lags are kept deliberately:
/// - the wave clears on the step *after* the last goal fills, because the
///   "all occupied" check reads occupancy as it was on entry;
/// - `high_score` compares against the score before this step's bonus.
pub fn resolve(state: &GameState) -> GameState {
    let contacts = FrogContacts::of(state);
    let wave_cleared = state.wave_complete();

    let goal_zones = state
        .goal_zones
        .iter()
        .map(|zone| Body {
            occupied: !wave_cleared && (zone.occupied || overlaps(&state.frog, zone)),
            ..zone.clone()
        })
        .collect();

    let frog = if contacts.on_goal {
        Body {
            pos: frog_start(),
            ..state.frog.clone()
        }
    } else {
        state.frog.clone()
    };

    let game_over = state.game_over || contacts.is_fatal();

    if game_over && !state.game_over {
        log::debug!(
            "Frog died at ({}, {}): hazard={} water={} raft={}",
            state.frog.pos.x,
            state.frog.pos.y,
            contacts.hit_hazard,
            contacts.in_water,
            contacts.on_raft
        );
    }
    if contacts.on_goal {
        log::debug!("Goal reached, frog back to start");
    }
    if wave_cleared {
        log::debug!(
            "Wave cleared at level {}: +{} points",
            state.level,
            state.level
        );
    }

    GameState {
        frog,
        hazards: state.hazards.clone(),
        rafts: state.rafts.clone(),
        water: state.water.clone(),
        goal_zones,
        game_over,
        score: if wave_cleared {
            state.score + state.level
        } else {
            state.score
        },
        high_score: state.high_score.max(state.score),
        level: if wave_cleared {
            state.level + 1
        } else {
            state.level
        },
    }
}
