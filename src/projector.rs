use macroquad::color::Color;
use macroquad::math::Rect;

use crate::canvas::Canvas;
use crate::config::{rgb, Config};
use crate::grid::Grid;
use crate::player::Player;
use crate::ray::Ray;

/// First-person view: one vertical wall strip per ray
#[derive(Debug, Clone)]
pub struct Projector {
    viewport_width: f32,
    viewport_height: f32,
    strip_width: f32,
    tile_size: f32,
    distance_to_projection_plane: f32,
    ceiling: Color,
    floor: Color,
    wall_vertical: Color,
    wall_horizontal: Color,
}

impl Projector {
    pub fn new(config: &Config, grid: &Grid) -> Self {
        let viewport_width = grid.width();
        Projector {
            viewport_width,
            viewport_height: grid.height(),
            strip_width: config.view.wall_strip_width,
            tile_size: grid.tile_size(),
            distance_to_projection_plane: (viewport_width / 2.0) / (config.view.fov() / 2.0).tan(),
            ceiling: rgb(config.visual.ceiling),
            floor: rgb(config.visual.floor),
            wall_vertical: rgb(config.visual.wall_vertical),
            wall_horizontal: rgb(config.visual.wall_horizontal),
        }
    }

    pub fn distance_to_projection_plane(&self) -> f32 {
        self.distance_to_projection_plane
    }

    /// Ray distance projected onto the view direction (removes fisheye)
    pub fn corrected_distance(ray: &Ray, view_angle: f32) -> f32 {
        ray.distance * (ray.angle - view_angle).cos()
    }

    /// On-screen height of a wall seen at `corrected_distance`
    ///
    /// A zero distance would give an infinite strip; it is reported as the
    /// viewport height instead.
    pub fn strip_height(&self, corrected_distance: f32) -> f32 {
        let height = self.tile_size / corrected_distance * self.distance_to_projection_plane;
        if height.is_finite() {
            height
        } else {
            self.viewport_height
        }
    }

    /// Shade for a hit: vertical-line hits are the bright side
    pub fn wall_color(&self, ray: &Ray) -> Color {
        if ray.vertical_hit {
            self.wall_vertical
        } else {
            self.wall_horizontal
        }
    }

    /// Screen rectangle for the strip of ray number `index`
    pub fn strip_rect(&self, index: usize, ray: &Ray, view_angle: f32) -> Rect {
        let height = self.strip_height(Self::corrected_distance(ray, view_angle));
        Rect::new(
            index as f32 * self.strip_width,
            self.viewport_height / 2.0 - height / 2.0,
            self.strip_width,
            height,
        )
    }

    /// Ceiling, floor, then every wall strip left to right
    pub fn draw(&self, player: &Player, canvas: &mut impl Canvas) {
        let half = self.viewport_height / 2.0;
        canvas.fill_rect(Rect::new(0.0, 0.0, self.viewport_width, half), self.ceiling);
        canvas.fill_rect(Rect::new(0.0, half, self.viewport_width, half), self.floor);

        for (i, ray) in player.rays().iter().enumerate() {
            let rect = self.strip_rect(i, ray, player.rotation_angle);
            canvas.fill_rect(rect, self.wall_color(ray));
        }
    }
}
