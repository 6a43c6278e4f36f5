use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};
use raycaster::{Canvas, Control, Grid, InputSource, Ray};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const TOLERANCE: f32 = 1e-3;

pub fn assert_close(actual: f32, expected: f32, tolerance: f32, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

/// The built-in 11 x 15 maze at 64 units per tile
pub fn example_grid() -> Grid {
    Grid::example(64.0).unwrap()
}

/// Cast a single ray at `angle` from `origin`
pub fn cast(grid: &Grid, origin: Vec2, angle: f32) -> Ray {
    let mut ray = Ray::new(angle);
    grid.cast_ray(origin, &mut ray);
    ray
}

/// One draw request captured by [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill(Rect, Color),
    Stroke(Rect, Color),
    Circle(Vec2, f32, Color),
    Line(Vec2, f32, f32, Color),
}

/// Canvas that records every request instead of drawing
#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(*call)).count()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, _thickness: f32, color: Color) {
        self.calls.push(DrawCall::Stroke(rect, color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, _thickness: f32, color: Color) {
        self.calls.push(DrawCall::Circle(center, radius, color));
    }

    fn draw_line(&mut self, from: Vec2, length: f32, angle: f32, color: Color) {
        self.calls.push(DrawCall::Line(from, length, angle, color));
    }
}

/// Input with a fixed set of held controls
#[derive(Default)]
pub struct ScriptedInput {
    held: HashSet<Control>,
}

impl ScriptedInput {
    pub fn holding(controls: &[Control]) -> Self {
        ScriptedInput {
            held: controls.iter().copied().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn is_down(&self, control: Control) -> bool {
        self.held.contains(&control)
    }
}

/// Expected result of one cast, stored as JSON under test_data/casts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastFixture {
    pub name: String,
    pub layout: Vec<String>,
    pub tile_size: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub angle_degrees: f32,
    pub expected_distance: f32,
    pub expected_x: f32,
    pub expected_y: f32,
    pub vertical_hit: bool,
}

impl CastFixture {
    pub fn grid(&self) -> Grid {
        Grid::parse(&self.layout.join("\n"), self.tile_size).unwrap()
    }
}

/// Load a cast fixture from a JSON file
pub fn load_fixture(path: &Path) -> Result<CastFixture, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let fixture: CastFixture = serde_json::from_str(&contents)?;
    Ok(fixture)
}
