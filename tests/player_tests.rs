mod common;

use common::{assert_close, example_grid, TOLERANCE};
use macroquad::math::Vec2;
use raycaster::math::normalize_angle;
use raycaster::{Config, Grid, Player, TurnDirection, WalkDirection};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

#[test]
fn test_blocked_move_leaves_position_untouched() {
    let config = Config::default();
    let grid = Grid::parse("111\n101\n111", 64.0).unwrap();
    let mut player = Player::new(&config, &grid, Vec2::new(96.0, 96.0), 0.0);
    player.walk_direction = WalkDirection::Forward;
    player.turn_direction = TurnDirection::Right;

    let before = player.position;
    player.update(&grid, 1.0);

    assert_eq!(player.position.x.to_bits(), before.x.to_bits());
    assert_eq!(player.position.y.to_bits(), before.y.to_bits());
    // Rotation still applies
    assert_close(player.rotation_angle, FRAC_PI_4, 1e-6, "rotation");
}

#[test]
fn test_rotation_applies_before_translation() {
    let config = Config::default();
    let grid = example_grid();
    let mut player = Player::new(&config, &grid, grid.center(), 0.0);
    player.turn_direction = TurnDirection::Right;
    player.walk_direction = WalkDirection::Forward;

    player.update(&grid, 1.0);

    // Moved 100 units along 45 degrees, not along 0
    let expected = grid.center() + Vec2::new(FRAC_PI_4.cos(), FRAC_PI_4.sin()) * 100.0;
    assert_close(player.position.x, expected.x, TOLERANCE, "x");
    assert_close(player.position.y, expected.y, TOLERANCE, "y");
}

#[test]
fn test_rotation_is_not_wrapped() {
    let config = Config::default();
    let grid = example_grid();
    let mut player = Player::new(&config, &grid, grid.center(), 0.0);
    player.turn_direction = TurnDirection::Right;

    // 45 deg/s for 10 s
    for _ in 0..10 {
        player.update(&grid, 1.0);
    }
    assert_close(player.rotation_angle, 10.0 * FRAC_PI_4, 1e-4, "rotation");

    player.cast_rays(&grid);
    assert!(player
        .rays()
        .iter()
        .all(|ray| (0.0..std::f32::consts::TAU).contains(&ray.angle)));
}

#[test]
fn test_start_scenario() {
    let config = Config::default();
    let grid = example_grid();
    let mut player = Player::spawn(&config, &grid);
    assert_eq!(player.position, Vec2::new(480.0, 352.0));

    let position = player.position;
    let rotation = player.rotation_angle;
    player.update(&grid, 0.016);
    assert_eq!(player.position, position);
    assert_eq!(player.rotation_angle, rotation);

    player.cast_rays(&grid);
    let rays = player.rays();
    assert_eq!(rays.len(), 120);

    let middle = rays[rays.len() / 2];
    assert_close(middle.angle, normalize_angle(FRAC_PI_2), 1e-4, "middle angle");

    // Straight down from the centre of cell (5, 7): wall cell (6, 7) starts at y = 384
    assert_close(middle.distance, 32.0, 1e-2, "middle distance");
    assert_close(middle.wall_intersection.x, 480.0, 1e-2, "middle hit x");
    assert_close(middle.wall_intersection.y, 384.0, 1e-2, "middle hit y");
    assert!(!middle.vertical_hit);
}

#[test]
fn test_ray_buffer_is_reused() {
    let config = Config::default();
    let grid = example_grid();
    let mut player = Player::spawn(&config, &grid);

    player.cast_rays(&grid);
    let first = player.rays().as_ptr();
    let len = player.rays().len();

    player.rotation_angle += 1.0;
    player.cast_rays(&grid);
    assert_eq!(player.rays().as_ptr(), first);
    assert_eq!(player.rays().len(), len);
}
