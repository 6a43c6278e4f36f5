use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};

use crate::canvas::Canvas;
use crate::config::{rgb, Config};
use crate::grid::Grid;
use crate::player::Player;

/// Scaled top-down overview drawn over the first-person view
#[derive(Debug, Clone)]
pub struct Minimap {
    scale: f32,
    dot_radius: f32,
    wall: Color,
    floor: Color,
    player_cell: Color,
    outline: Color,
    ray: Color,
}

impl Minimap {
    pub fn new(config: &Config) -> Self {
        Minimap {
            scale: config.view.minimap_scale,
            dot_radius: config.view.player_dot_radius,
            wall: rgb(config.visual.minimap_wall),
            floor: rgb(config.visual.minimap_floor),
            player_cell: rgb(config.visual.minimap_player_cell),
            outline: rgb(config.visual.minimap_outline),
            ray: rgb(config.visual.minimap_ray),
        }
    }

    /// World point to minimap pixels
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        point * self.scale
    }

    /// Tiles row by row, then the player dot, then one line per ray
    pub fn draw(&self, grid: &Grid, player: &Player, canvas: &mut impl Canvas) {
        let tile = grid.tile_size();
        let player_cell = grid.cell_at(player.position);

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let color = if player_cell == Some((row, col)) {
                    self.player_cell
                } else if grid.cell(row, col).is_wall() {
                    self.wall
                } else {
                    self.floor
                };

                let rect = Rect::new(
                    col as f32 * tile * self.scale,
                    row as f32 * tile * self.scale,
                    tile * self.scale,
                    tile * self.scale,
                );
                canvas.fill_rect(rect, color);
                canvas.stroke_rect(rect, 1.0, self.outline);
            }
        }

        let dot = self.to_screen(player.position);
        canvas.draw_circle(dot, self.dot_radius, 2.0, self.outline);

        for ray in player.rays() {
            canvas.draw_line(dot, ray.distance * self.scale, ray.angle, self.ray);
        }
    }
}
