//! macroquad side of the drawing and input seams

use macroquad::color::Color;
use macroquad::input::{is_key_down, is_key_pressed, KeyCode};
use macroquad::math::{Rect, Vec2};
use macroquad::shapes::{draw_circle_lines, draw_line, draw_rectangle, draw_rectangle_lines};

use raycaster::canvas::{line_end, Canvas};
use raycaster::{Control, InputSource};

/// Draws straight to the current macroquad frame
pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color) {
        draw_circle_lines(center.x, center.y, radius, thickness, color);
    }

    fn draw_line(&mut self, from: Vec2, length: f32, angle: f32, color: Color) {
        let to = line_end(from, length, angle);
        draw_line(from.x, from.y, to.x, to.y, 1.0, color);
    }
}

/// W/S walk, A/D turn, Esc quits, C copies the maze, F5/F9 save/load the pose
pub struct MacroquadInput;

fn key_for(control: Control) -> KeyCode {
    match control {
        Control::MoveForward => KeyCode::W,
        Control::MoveBackward => KeyCode::S,
        Control::TurnLeft => KeyCode::A,
        Control::TurnRight => KeyCode::D,
        Control::Exit => KeyCode::Escape,
        Control::CopyLayout => KeyCode::C,
        Control::SaveSnapshot => KeyCode::F5,
        Control::LoadSnapshot => KeyCode::F9,
    }
}

impl InputSource for MacroquadInput {
    fn is_down(&self, control: Control) -> bool {
        is_key_down(key_for(control))
    }

    fn is_pressed(&self, control: Control) -> bool {
        is_key_pressed(key_for(control))
    }
}
