use macroquad::logging::warn;
use macroquad::math::Vec2;

use crate::config::Config;
use crate::grid::Grid;
use crate::math::normalize_angle;
use crate::ray::Ray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    None,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDirection {
    Backward,
    None,
    Forward,
}

impl TurnDirection {
    /// -1 for left, 0 for none, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            TurnDirection::Left => -1.0,
            TurnDirection::None => 0.0,
            TurnDirection::Right => 1.0,
        }
    }
}

impl WalkDirection {
    /// -1 for backward, 0 for none, +1 for forward
    pub fn sign(self) -> f32 {
        match self {
            WalkDirection::Backward => -1.0,
            WalkDirection::None => 0.0,
            WalkDirection::Forward => 1.0,
        }
    }
}

/// The viewpoint moving through the maze
///
/// Owns the ray fan; the buffer is sized once from the viewport width and the
/// wall strip width and is rewritten in place by [`Player::cast_rays`].
#[derive(Clone, Debug)]
pub struct Player {
    /// World position
    pub position: Vec2,
    /// Facing in radians. Not wrapped; only rays are normalized.
    pub rotation_angle: f32,
    pub turn_direction: TurnDirection,
    pub walk_direction: WalkDirection,

    fov: f32,
    move_speed: f32,
    rotation_speed: f32,
    rays: Vec<Ray>,
}

impl Player {
    /// Create a player at `position` facing `rotation_angle`, with no intent
    pub fn new(config: &Config, grid: &Grid, position: Vec2, rotation_angle: f32) -> Self {
        let ray_count = config.view.ray_count(grid.width());
        Player {
            position,
            rotation_angle,
            turn_direction: TurnDirection::None,
            walk_direction: WalkDirection::None,
            fov: config.view.fov(),
            move_speed: config.player.move_speed,
            rotation_speed: config.player.rotation_speed(),
            rays: vec![Ray::default(); ray_count],
        }
    }

    /// Create a player at the configured start, defaulting to the maze centre
    ///
    /// A configured start that is blocked in `grid` falls back to the centre.
    pub fn spawn(config: &Config, grid: &Grid) -> Self {
        let center = grid.center();
        let mut position = Vec2::new(
            config.player.start_x.unwrap_or(center.x),
            config.player.start_y.unwrap_or(center.y),
        );
        if grid.has_wall_at(position) {
            warn!(
                "Start position ({}, {}) is blocked, spawning at maze centre",
                position.x, position.y
            );
            position = center;
        }
        Self::new(config, grid, position, config.player.start_angle())
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Unit vector along the current facing
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.rotation_angle.cos(), self.rotation_angle.sin())
    }

    /// Advance one tick
    ///
    /// Rotation is applied first, then the move is taken along the new facing.
    /// A move whose end point is blocked is dropped entirely.
    pub fn update(&mut self, grid: &Grid, delta_time: f32) {
        self.rotation_angle += self.turn_direction.sign() * self.rotation_speed * delta_time;

        let move_step = self.walk_direction.sign() * self.move_speed * delta_time;
        let candidate = self.position + self.direction() * move_step;

        if !grid.has_wall_at(candidate) {
            self.position = candidate;
        }
    }

    /// Recast the whole fan from the current position and facing
    ///
    /// Ray 0 points at `rotation - fov / 2`; each following ray is one
    /// `fov / ray_count` step further clockwise.
    pub fn cast_rays(&mut self, grid: &Grid) {
        let step = self.fov / self.rays.len() as f32;
        let mut ray_angle = self.rotation_angle - self.fov / 2.0;

        for ray in self.rays.iter_mut() {
            ray.angle = normalize_angle(ray_angle);
            grid.cast_ray(self.position, ray);
            ray_angle += step;
        }
    }
}
