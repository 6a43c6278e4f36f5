use macroquad::math::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::math::normalize_angle;

/// Distance reported when neither scan reaches a wall before leaving the grid
pub const NO_HIT_DISTANCE: f32 = f32::MAX;

/// One line of sight cast from the player
///
/// Rays live in a fixed-size buffer owned by the player and are overwritten in
/// place on every cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Direction in radians, kept in `[0, 2π)`
    pub angle: f32,
    /// Straight-line distance from the cast origin to the wall crossing
    pub distance: f32,
    /// Grid-line crossing where the wall was found
    pub wall_intersection: Vec2,
    /// True when the nearer hit came from crossing a vertical grid line
    pub vertical_hit: bool,
}

/// Quadrant flags derived once per ray from its normalized angle
///
/// Screen coordinates grow downwards, so angles in `(0, π)` point down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facing {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Facing {
    /// `angle` must already be normalized
    pub fn from_angle(angle: f32) -> Self {
        let down = angle > 0.0 && angle < PI;
        let right = angle < FRAC_PI_2 || angle > 1.5 * PI;
        Facing {
            up: !down,
            down,
            left: !right,
            right,
        }
    }
}

impl Ray {
    /// Create a ray pointing at `angle`, normalized into `[0, 2π)`
    pub fn new(angle: f32) -> Self {
        Ray {
            angle: normalize_angle(angle),
            ..Ray::default()
        }
    }

    pub fn facing(&self) -> Facing {
        Facing::from_angle(self.angle)
    }

    /// Whether the last cast found a wall
    pub fn has_hit(&self) -> bool {
        self.distance < NO_HIT_DISTANCE
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray {
            angle: 0.0,
            distance: NO_HIT_DISTANCE,
            wall_intersection: Vec2::ZERO,
            vertical_hit: false,
        }
    }
}
