use crate::canvas::Canvas;
use crate::config::Config;
use crate::controls::{apply_input, Control, InputSource};
use crate::grid::Grid;
use crate::minimap::Minimap;
use crate::player::Player;
use crate::projector::Projector;
use crate::snapshot::PlayerSnapshot;

/// Everything one frame needs: the maze, the player and both renderers
pub struct Game {
    config: Config,
    grid: Grid,
    player: Player,
    projector: Projector,
    minimap: Minimap,
}

impl Game {
    /// Spawn the player and cast an initial fan so the first frame can render
    pub fn new(config: Config, grid: Grid) -> Self {
        let mut player = Player::spawn(&config, &grid);
        player.cast_rays(&grid);
        let projector = Projector::new(&config, &grid);
        let minimap = Minimap::new(&config);

        Game {
            config,
            grid,
            player,
            projector,
            minimap,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Poll input, move, recast. Returns false once exit is requested.
    ///
    /// `delta_time` is capped at `view.max_frame_time`.
    pub fn tick(&mut self, input: &impl InputSource, delta_time: f32) -> bool {
        if input.is_down(Control::Exit) {
            return false;
        }

        apply_input(&mut self.player, input);

        let delta_time = delta_time.min(self.config.view.max_frame_time).max(0.0);
        self.player.update(&self.grid, delta_time);
        self.player.cast_rays(&self.grid);
        true
    }

    /// First-person view, then the minimap on top
    pub fn render(&self, canvas: &mut impl Canvas) {
        self.projector.draw(&self.player, canvas);
        self.minimap.draw(&self.grid, &self.player, canvas);
    }

    /// Write the player's pose to `visual.snapshot_path`
    pub fn save_snapshot(&self) -> Result<(), String> {
        PlayerSnapshot::capture(&self.player).save_to_file(&self.config.visual.snapshot_path)
    }

    /// Read the pose back from `visual.snapshot_path` and recast
    pub fn load_snapshot(&mut self) -> Result<(), String> {
        let snapshot = PlayerSnapshot::load_from_file(&self.config.visual.snapshot_path)?;
        snapshot.restore(&mut self.player, &self.grid)?;
        self.player.cast_rays(&self.grid);
        Ok(())
    }
}
