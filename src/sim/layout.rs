//! Obstacle row layout
//!
//! Builds lanes of cars or logs. Placement is fully deterministic: the same
//! arguments always produce the same bodies in the same order.

use glam::Vec2;

use super::state::{Body, BodyKind, Direction};
use crate::consts::*;

/// Width, height, horizontal gap and colour for an obstacle kind
fn obstacle_dimensions(kind: BodyKind) -> (Vec2, f32, u32) {
    match kind {
        BodyKind::Raft => (Vec2::new(LOG_WIDTH, LOG_HEIGHT), LOG_SEPARATION, LOG_COLOR),
        _ => (Vec2::new(CAR_WIDTH, CAR_HEIGHT), CAR_SEPARATION, CAR_COLOR),
    }
}

/// Create `rows` lanes of `per_row` obstacles, top to bottom
///
/// The first lane sits at `first_row` with the given speed and direction.
/// Every following lane is `ROW_PITCH` lower, runs the opposite way and is
/// `SPEED_DECREMENT_PER_ROW` slower. Column 0 is left empty, so the obstacle
/// in column `c` starts at `c * (width + separation)`.
pub fn create_obstacles(
    per_row: usize,
    first_row: f32,
    rows: usize,
    kind: BodyKind,
    speed: f32,
    direction: Direction,
) -> Vec<Body> {
    let (size, separation, color) = obstacle_dimensions(kind);
    let mut obstacles = Vec::with_capacity(per_row * rows);
    let mut lane_direction = direction;

    for row in 0..rows {
        let y = first_row + row as f32 * ROW_PITCH;
        let lane_speed = speed - row as f32 * SPEED_DECREMENT_PER_ROW;

        for column in 1..=per_row {
            obstacles.push(Body::new(
                format!("{}-{}-{}", kind.as_str(), row, column),
                kind,
                Vec2::new(column as f32 * (size.x + separation), y),
                size,
                color,
                lane_speed,
                lane_direction,
            ));
        }

        lane_direction = lane_direction.opposite();
    }

    obstacles
}
