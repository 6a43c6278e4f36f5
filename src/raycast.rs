use macroquad::math::Vec2;

use crate::grid::Grid;
use crate::ray::{Facing, Ray, NO_HIT_DISTANCE};

/// Nearest wall hit picked from the two scans
#[derive(Debug, Clone, Copy, PartialEq)]
struct Hit {
    point: Vec2,
    distance: f32,
    vertical: bool,
}

impl Grid {
    /// Cast `ray` from `origin` and overwrite its distance, hit point and hit kind
    ///
    /// Two scans walk the ray across grid lines: one stops at horizontal lines
    /// (y = k * tile), the other at vertical lines (x = k * tile). Each reports
    /// the first crossing whose neighbouring cell in the direction of travel is
    /// a wall. The nearer crossing wins; on equal distances the vertical-line
    /// crossing wins.
    pub fn cast_ray(&self, origin: Vec2, ray: &mut Ray) {
        let facing = ray.facing();
        let horizontal = self.horizontal_crossing(origin, ray.angle, facing);
        let vertical = self.vertical_crossing(origin, ray.angle, facing);

        let hit = nearest_hit(origin, horizontal, vertical);
        ray.distance = hit.distance;
        ray.wall_intersection = hit.point;
        ray.vertical_hit = hit.vertical;
    }

    /// First wall crossing on a horizontal grid line
    fn horizontal_crossing(&self, origin: Vec2, angle: f32, facing: Facing) -> Option<Vec2> {
        let tile = self.tile_size();
        let tan = angle.tan();

        let mut y_intercept = (origin.y / tile).floor() * tile;
        if facing.down {
            y_intercept += tile;
        }
        let x_intercept = origin.x + (y_intercept - origin.y) / tan;

        let y_step = if facing.up { -tile } else { tile };
        let mut x_step = tile / tan;
        if (facing.left && x_step > 0.0) || (facing.right && x_step < 0.0) {
            x_step = -x_step;
        }

        // Looking up, the crossing sits on the top edge of the cell being left
        let probe = Vec2::new(0.0, if facing.up { -1.0 } else { 0.0 });

        self.scan(
            Vec2::new(x_intercept, y_intercept),
            Vec2::new(x_step, y_step),
            probe,
        )
    }

    /// First wall crossing on a vertical grid line
    fn vertical_crossing(&self, origin: Vec2, angle: f32, facing: Facing) -> Option<Vec2> {
        let tile = self.tile_size();
        let tan = angle.tan();

        let mut x_intercept = (origin.x / tile).floor() * tile;
        if facing.right {
            x_intercept += tile;
        }
        let y_intercept = origin.y + (x_intercept - origin.x) * tan;

        let x_step = if facing.left { -tile } else { tile };
        let mut y_step = tile * tan;
        if (facing.up && y_step > 0.0) || (facing.down && y_step < 0.0) {
            y_step = -y_step;
        }

        // Looking left, the crossing sits on the left edge of the cell being left
        let probe = Vec2::new(if facing.left { -1.0 } else { 0.0 }, 0.0);

        self.scan(
            Vec2::new(x_intercept, y_intercept),
            Vec2::new(x_step, y_step),
            probe,
        )
    }

    /// Step from `first` by `step` while inside the grid, testing `crossing + probe`
    ///
    /// Returns the crossing itself, not the probed point. Non-finite
    /// intercepts (rays parallel to the scanned lines) fail the bounds test on
    /// the first iteration.
    fn scan(&self, first: Vec2, step: Vec2, probe: Vec2) -> Option<Vec2> {
        let mut crossing = first;

        while self.contains(crossing) {
            if self.has_wall_at(crossing + probe) {
                return Some(crossing);
            }
            crossing += step;
        }

        None
    }
}

fn nearest_hit(origin: Vec2, horizontal: Option<Vec2>, vertical: Option<Vec2>) -> Hit {
    let horizontal_distance = horizontal.map_or(NO_HIT_DISTANCE, |p| origin.distance(p));
    let vertical_distance = vertical.map_or(NO_HIT_DISTANCE, |p| origin.distance(p));

    if vertical_distance <= horizontal_distance {
        Hit {
            point: vertical.unwrap_or(origin),
            distance: vertical_distance,
            vertical: true,
        }
    } else {
        Hit {
            point: horizontal.unwrap_or(origin),
            distance: horizontal_distance,
            vertical: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn room() -> Grid {
        Grid::parse("11111\n10001\n10001\n10001\n11111", 64.0).unwrap()
    }

    fn cast(grid: &Grid, origin: Vec2, angle: f32) -> Ray {
        let mut ray = Ray::new(angle);
        grid.cast_ray(origin, &mut ray);
        ray
    }

    #[test]
    fn test_equal_distances_pick_vertical() {
        let origin = Vec2::new(96.0, 96.0);
        let hit = nearest_hit(
            origin,
            Some(Vec2::new(96.0, 128.0)),
            Some(Vec2::new(128.0, 96.0)),
        );
        assert!(hit.vertical);
        assert_eq!(hit.distance, 32.0);
        assert_eq!(hit.point, Vec2::new(128.0, 96.0));
    }

    #[test]
    fn test_nearer_horizontal_wins() {
        let origin = Vec2::new(96.0, 96.0);
        let hit = nearest_hit(
            origin,
            Some(Vec2::new(96.0, 128.0)),
            Some(Vec2::new(160.0, 96.0)),
        );
        assert!(!hit.vertical);
        assert_eq!(hit.distance, 32.0);
    }

    #[test]
    fn test_no_hit_sentinel() {
        let origin = Vec2::new(10.0, 20.0);
        let hit = nearest_hit(origin, None, None);
        assert_eq!(hit.distance, NO_HIT_DISTANCE);
        assert_eq!(hit.point, origin);
    }

    #[test]
    fn test_scan_from_cell_centre_each_axis() {
        let grid = room();
        let origin = Vec2::new(160.0, 160.0);

        // East and west walls are 96 units from the centre of the middle cell
        let east = cast(&grid, origin, 0.0);
        assert!((east.distance - 96.0).abs() < 1e-3);
        assert!(east.vertical_hit);

        let west = cast(&grid, origin, PI);
        assert!((west.distance - 96.0).abs() < 1e-3);
        assert!(west.vertical_hit);
        assert!((west.wall_intersection.x - 64.0).abs() < 1e-3);

        let south = cast(&grid, origin, FRAC_PI_2);
        assert!((south.distance - 96.0).abs() < 1e-3);
        assert!(!south.vertical_hit);

        let north = cast(&grid, origin, 1.5 * PI);
        assert!((north.distance - 96.0).abs() < 1e-3);
        assert!(!north.vertical_hit);
        assert!((north.wall_intersection.y - 64.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_edge_stops_open_grid() {
        let grid = Grid::parse("0", 64.0).unwrap();
        let ray = cast(&grid, Vec2::new(10.0, 32.0), 0.0);
        // The only vertical crossing ahead is the far edge, which counts as wall
        assert!(ray.has_hit());
        assert!((ray.distance - 54.0).abs() < 1e-3);
    }
}
