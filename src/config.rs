use macroquad::color::Color;
use macroquad::logging::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MazeConfig {
    /// World units per cell edge; also pixels per cell in the first-person view
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    /// Digit layout file. None uses the built-in maze.
    #[serde(default)]
    pub layout_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_wall_strip_width")]
    pub wall_strip_width: f32,
    #[serde(default = "default_fov_degrees")]
    pub fov_degrees: f32,
    #[serde(default = "default_minimap_scale")]
    pub minimap_scale: f32,
    #[serde(default = "default_player_dot_radius")]
    pub player_dot_radius: f32,
    /// Longest frame step fed to the player, in seconds
    #[serde(default = "default_max_frame_time")]
    pub max_frame_time: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    /// World units per second
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "default_rotation_speed_degrees")]
    pub rotation_speed_degrees: f32,
    #[serde(default = "default_start_angle_degrees")]
    pub start_angle_degrees: f32,
    /// Start position; either axis left out falls back to the maze centre
    #[serde(default)]
    pub start_x: Option<f32>,
    #[serde(default)]
    pub start_y: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_ceiling")]
    pub ceiling: [u8; 3],
    #[serde(default = "default_floor")]
    pub floor: [u8; 3],
    #[serde(default = "default_wall_vertical")]
    pub wall_vertical: [u8; 3],
    #[serde(default = "default_wall_horizontal")]
    pub wall_horizontal: [u8; 3],
    #[serde(default = "default_minimap_wall")]
    pub minimap_wall: [u8; 3],
    #[serde(default = "default_minimap_floor")]
    pub minimap_floor: [u8; 3],
    #[serde(default = "default_minimap_player_cell")]
    pub minimap_player_cell: [u8; 3],
    #[serde(default = "default_minimap_outline")]
    pub minimap_outline: [u8; 3],
    #[serde(default = "default_minimap_ray")]
    pub minimap_ray: [u8; 3],
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

// Default values
fn default_tile_size() -> f32 { 64.0 }
fn default_wall_strip_width() -> f32 { 8.0 }
fn default_fov_degrees() -> f32 { 60.0 }
fn default_minimap_scale() -> f32 { 0.2 }
fn default_player_dot_radius() -> f32 { 4.0 }
fn default_max_frame_time() -> f32 { 0.1 }
fn default_move_speed() -> f32 { 100.0 }
fn default_rotation_speed_degrees() -> f32 { 45.0 }
fn default_start_angle_degrees() -> f32 { 90.0 }
fn default_ceiling() -> [u8; 3] { [64, 64, 64] }
fn default_floor() -> [u8; 3] { [130, 130, 130] }
fn default_wall_vertical() -> [u8; 3] { [255, 255, 255] }
fn default_wall_horizontal() -> [u8; 3] { [199, 199, 199] }
fn default_minimap_wall() -> [u8; 3] { [128, 128, 128] }
fn default_minimap_floor() -> [u8; 3] { [255, 255, 255] }
fn default_minimap_player_cell() -> [u8; 3] { [255, 255, 0] }
fn default_minimap_outline() -> [u8; 3] { [0, 0, 0] }
fn default_minimap_ray() -> [u8; 3] { [255, 0, 0] }
fn default_snapshot_path() -> String { "player_snapshot.json".to_string() }

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            layout_path: None,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            wall_strip_width: default_wall_strip_width(),
            fov_degrees: default_fov_degrees(),
            minimap_scale: default_minimap_scale(),
            player_dot_radius: default_player_dot_radius(),
            max_frame_time: default_max_frame_time(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: default_move_speed(),
            rotation_speed_degrees: default_rotation_speed_degrees(),
            start_angle_degrees: default_start_angle_degrees(),
            start_x: None,
            start_y: None,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            ceiling: default_ceiling(),
            floor: default_floor(),
            wall_vertical: default_wall_vertical(),
            wall_horizontal: default_wall_horizontal(),
            minimap_wall: default_minimap_wall(),
            minimap_floor: default_minimap_floor(),
            minimap_player_cell: default_minimap_player_cell(),
            minimap_outline: default_minimap_outline(),
            minimap_ray: default_minimap_ray(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            view: ViewConfig::default(),
            player: PlayerConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

impl ViewConfig {
    pub fn fov(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// One ray per wall strip across the viewport, never fewer than one
    pub fn ray_count(&self, viewport_width: f32) -> usize {
        ((viewport_width / self.wall_strip_width).floor() as usize).max(1)
    }
}

impl PlayerConfig {
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed_degrees.to_radians()
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle_degrees.to_radians()
    }
}

/// Opaque colour from an RGB triple
pub fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

impl Config {
    /// Load configuration from `config.toml`, or use defaults if it is missing or invalid
    pub fn load() -> Self {
        if !Path::new(CONFIG_PATH).exists() {
            info!("No {} found, using default configuration", CONFIG_PATH);
            return Config::default();
        }

        match Self::load_from(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded configuration from {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("{}", e);
                warn!("Using default configuration");
                Config::default()
            }
        }
    }

    /// Read, parse and validate a configuration file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::parse(&contents)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn parse(contents: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("maze.tile_size", self.maze.tile_size),
            ("view.wall_strip_width", self.view.wall_strip_width),
            ("view.minimap_scale", self.view.minimap_scale),
            ("view.max_frame_time", self.view.max_frame_time),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }

        if !(self.view.fov_degrees > 0.0 && self.view.fov_degrees < 180.0) {
            return Err(format!(
                "view.fov_degrees must be between 0 and 180, got {}",
                self.view.fov_degrees
            ));
        }

        Ok(())
    }
}
