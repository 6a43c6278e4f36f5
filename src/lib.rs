pub mod canvas;
pub mod config;
pub mod controls;
pub mod game;
pub mod grid;
pub mod math;
pub mod minimap;
pub mod player;
pub mod projector;
pub mod ray;
pub mod raycast;
pub mod snapshot;

pub use canvas::Canvas;
pub use config::Config;
pub use controls::{Control, InputSource};
pub use game::Game;
pub use grid::{Cell, Grid};
pub use player::{Player, TurnDirection, WalkDirection};
pub use projector::Projector;
pub use ray::Ray;
