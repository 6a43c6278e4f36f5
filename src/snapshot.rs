use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::grid::Grid;
use crate::player::Player;

/// Saved player pose. Intent and ray contents are not stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub rotation_angle: f32,
}

impl PlayerSnapshot {
    pub fn capture(player: &Player) -> Self {
        PlayerSnapshot {
            x: player.position.x,
            y: player.position.y,
            rotation_angle: player.rotation_angle,
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize snapshot: {}", e))?;

        fs::write(path.as_ref(), json)
            .map_err(|e| format!("Failed to write snapshot file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read snapshot file: {}", e))?;

        let snapshot: PlayerSnapshot = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse snapshot file: {}", e))?;

        Ok(snapshot)
    }

    /// Put the player back at the saved pose
    ///
    /// Leaves the player untouched if the saved position is blocked in `grid`.
    pub fn restore(&self, player: &mut Player, grid: &Grid) -> Result<(), String> {
        let position = Vec2::new(self.x, self.y);
        if grid.has_wall_at(position) {
            return Err(format!(
                "Snapshot position ({}, {}) is inside a wall",
                self.x, self.y
            ));
        }

        player.position = position;
        player.rotation_angle = self.rotation_angle;
        Ok(())
    }
}
