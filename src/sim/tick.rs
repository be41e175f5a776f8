//! Event reducer
//!
//! Folds a single ordered stream of events into successive world snapshots.
//! Each event produces exactly one new state; events are never reordered
//! or batched.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve;
use super::state::{Body, GamePhase, GameState};
use crate::consts::*;
use crate::torus_wrap;

/// Axis a move command acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// One square of frog movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Up, Step::Down, Step::Left, Step::Right];

    pub fn axis(&self) -> Axis {
        match self {
            Step::Up | Step::Down => Axis::Y,
            Step::Left | Step::Right => Axis::X,
        }
    }

    /// Signed distance along `axis()`
    pub fn delta(&self) -> f32 {
        match self {
            Step::Up | Step::Left => -MOVE_STEP,
            Step::Down | Step::Right => MOVE_STEP,
        }
    }
}

/// Input to the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Periodic simulation step; `elapsed` is the tick counter of the driver
    Tick { elapsed: u64 },
    /// Player movement
    Move(Step),
    /// Start over, keeping only the high score
    Restart,
}

/// Produce the next snapshot for `event`
pub fn reduce(state: &GameState, event: &Event) -> GameState {
    match (state.phase(), event) {
        (_, Event::Restart) => {
            // Fold in the current score so a lagging high score is not lost
            let high_score = state.high_score.max(state.score);
            log::debug!("Restart (high score {})", high_score);
            GameState::with_high_score(high_score)
        }
        (GamePhase::GameOver, _) => state.clone(),
        (GamePhase::Playing, Event::Move(step)) => resolve(&move_frog(state, *step)),
        (GamePhase::Playing, Event::Tick { .. }) => resolve(&advance_obstacles(state)),
    }
}

/// Candidate state with the frog shifted one step (x wraps, y does not)
fn move_frog(state: &GameState, step: Step) -> GameState {
    let pos = state.frog.pos;
    let pos = match step.axis() {
        Axis::X => Vec2::new(torus_wrap(pos.x + step.delta()), pos.y),
        Axis::Y => Vec2::new(pos.x, pos.y + step.delta()),
    };
    GameState {
        frog: Body {
            pos,
            ..state.frog.clone()
        },
        ..state.clone()
    }
}

/// Candidate state with every car and log advanced by one tick
fn advance_obstacles(state: &GameState) -> GameState {
    let advance = |body: &Body| Body {
        pos: Vec2::new(
            torus_wrap(body.pos.x + body.tick_displacement(state.level)),
            body.pos.y,
        ),
        ..body.clone()
    };
    GameState {
        hazards: state.hazards.iter().map(advance).collect(),
        rafts: state.rafts.iter().map(advance).collect(),
        ..state.clone()
    }
}

/// Left fold: the state after every event has been applied
pub fn run<I>(initial: GameState, events: I) -> GameState
where
    I: IntoIterator<Item = Event>,
{
    events
        .into_iter()
        .fold(initial, |state, event| reduce(&state, &event))
}

/// Scan: one snapshot per event, in arrival order
pub fn replay<I>(initial: GameState, events: I) -> impl Iterator<Item = GameState>
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().scan(initial, |state, event| {
        *state = reduce(state, &event);
        Some(state.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::frog_start;
    use proptest::prelude::*;

    fn tick(elapsed: u64) -> Event {
        Event::Tick { elapsed }
    }

    #[test]
    fn test_step_axes() {
        assert_eq!(Step::Up.axis(), Axis::Y);
        assert_eq!(Step::Up.delta(), -MOVE_STEP);
        assert_eq!(Step::Right.axis(), Axis::X);
        assert_eq!(Step::Right.delta(), MOVE_STEP);
    }

    #[test]
    fn test_move_only_changes_one_axis() {
        let state = GameState::new();
        let left = reduce(&state, &Event::Move(Step::Left));
        assert_eq!(left.frog.pos, Vec2::new(195.0, 555.0));

        let down = reduce(&state, &Event::Move(Step::Down));
        assert_eq!(down.frog.pos, Vec2::new(255.0, 615.0));
        assert!(!down.game_over);
    }

    #[test]
    fn test_move_wraps_horizontally() {
        let mut state = GameState::new();
        state.frog.pos.x = 15.0;
        let wrapped = reduce(&state, &Event::Move(Step::Left));
        assert_eq!(wrapped.frog.pos.x, 555.0);
        let back = reduce(&wrapped, &Event::Move(Step::Right));
        assert_eq!(back.frog.pos.x, 15.0);
    }

    #[test]
    fn test_move_leaves_input_untouched() {
        let state = GameState::new();
        let before = state.clone();
        let _ = reduce(&state, &Event::Move(Step::Up));
        assert_eq!(state, before);
    }

    #[test]
    fn test_tick_moves_obstacles_not_frog() {
        let state = GameState::new();
        let next = reduce(&state, &tick(0));

        assert_eq!(next.frog, state.frog);
        assert_eq!(next.water, state.water);
        for (before, after) in state.hazards.iter().zip(&next.hazards) {
            let expected = torus_wrap(before.pos.x + before.tick_displacement(1));
            assert_eq!(after.pos.x, expected);
            assert_eq!(after.pos.y, before.pos.y);
        }
        // First car lane runs left at 2.0 * 5 + 1.5
        assert_eq!(next.hazards[0].pos.x, state.hazards[0].pos.x - 11.5);
        assert_eq!(next.rafts.len(), state.rafts.len());
    }

    #[test]
    fn test_tick_speed_grows_with_level() {
        let mut state = GameState::new();
        let slow = reduce(&state, &tick(0));
        state.level = 4;
        let fast = reduce(&state, &tick(0));
        let d_slow = (slow.rafts[0].pos.x - state.rafts[0].pos.x).abs();
        let d_fast = (fast.rafts[0].pos.x - state.rafts[0].pos.x).abs();
        assert!(d_fast > d_slow);
    }

    #[test]
    fn test_stepping_into_open_water_is_fatal() {
        let mut state = GameState::new();
        // Bank between the road and the river, far left of every log
        state.frog.pos = Vec2::new(15.0, 315.0);
        assert!(!resolve(&state).game_over);

        let states: Vec<GameState> =
            replay(state, [Event::Move(Step::Up), tick(0), Event::Move(Step::Down)]).collect();
        assert_eq!(states.len(), 3);
        assert!(states[0].game_over);
        assert_eq!(states[0].frog.pos, Vec2::new(15.0, 255.0));
        // Nothing moves once dead
        assert_eq!(states[1], states[0]);
        assert_eq!(states[2], states[0]);
    }

    #[test]
    fn test_restart_preserves_high_score() {
        let mut state = GameState::new();
        state.score = 7;
        state.high_score = 5;
        state.level = 3;
        state.game_over = true;
        state.frog.pos = Vec2::new(15.0, 135.0);

        let restarted = reduce(&state, &Event::Restart);
        assert_eq!(restarted.score, 0);
        assert_eq!(restarted.high_score, 7);
        assert_eq!(restarted.level, 1);
        assert!(!restarted.game_over);
        assert_eq!(restarted.frog.pos, frog_start());
        assert_eq!(restarted.hazards, GameState::new().hazards);
    }

    #[test]
    fn test_restart_while_playing() {
        let mut state = reduce(&GameState::new(), &tick(0));
        state.high_score = 3;
        let restarted = reduce(&state, &Event::Restart);
        assert_eq!(restarted, GameState::with_high_score(3));
    }

    #[test]
    fn test_wave_clear_through_reducer() {
        let mut state = GameState::new();
        state.hazards.clear();
        state.goal_zones[0].occupied = true;
        state.goal_zones[1].occupied = true;
        // One step below the third goal
        state.frog.pos = Vec2::new(GOAL_ZONE_XS[2], GOAL_ZONE_ROW + MOVE_STEP);

        let landed = reduce(&state, &Event::Move(Step::Up));
        assert!(landed.wave_complete());
        assert_eq!(landed.frog.pos, frog_start());
        assert_eq!(landed.score, 0);

        let cleared = reduce(&landed, &Event::Move(Step::Right));
        assert_eq!(cleared.occupied_goals(), 0);
        assert_eq!(cleared.score, 1);
        assert_eq!(cleared.level, 2);
    }

    #[test]
    fn test_run_matches_replay() {
        let events = vec![
            tick(0),
            Event::Move(Step::Left),
            tick(1),
            Event::Move(Step::Up),
            tick(2),
        ];
        let last = replay(GameState::new(), events.clone()).last();
        assert_eq!(last, Some(run(GameState::new(), events)));
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        prop_oneof![
            (0u64..1000).prop_map(|elapsed| Event::Tick { elapsed }),
            prop::sample::select(Step::ALL.to_vec()).prop_map(Event::Move),
        ]
    }

    proptest! {
        #[test]
        fn prop_death_is_sticky(events in prop::collection::vec(event_strategy(), 0..50)) {
            let mut dead = GameState::new();
            dead.game_over = true;
            dead.score = 4;
            let after = run(dead.clone(), events);
            prop_assert_eq!(after, dead);
        }

        #[test]
        fn prop_invariants_hold(events in prop::collection::vec(event_strategy(), 0..200)) {
            let initial = GameState::new();
            let mut level = initial.level;
            for state in replay(initial.clone(), events) {
                prop_assert_eq!(state.hazards.len(), initial.hazards.len());
                prop_assert_eq!(state.rafts.len(), initial.rafts.len());
                prop_assert_eq!(state.goal_zones.len(), GOAL_ZONE_COUNT);
                prop_assert!(state.level >= level);
                prop_assert!((0.0..CANVAS_SIZE).contains(&state.frog.pos.x));
                level = state.level;
            }
        }
    }
}
