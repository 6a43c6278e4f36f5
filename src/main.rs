mod host;

use arboard::Clipboard;
use macroquad::logging::{error, info, warn};
use macroquad::prelude::BLACK;
use macroquad::time::get_frame_time;
use macroquad::window::{clear_background, next_frame, request_new_screen_size};

use host::{MacroquadCanvas, MacroquadInput};
use raycaster::{Config, Control, Game, Grid, InputSource};

/// Maze from `maze.layout_path`, or the built-in one
fn load_grid(config: &Config) -> Result<Grid, String> {
    let tile_size = config.maze.tile_size;
    match &config.maze.layout_path {
        Some(path) => Grid::load_from_file(path, tile_size).or_else(|e| {
            warn!("{}", e);
            warn!("Using built-in maze");
            Grid::example(tile_size)
        }),
        None => Grid::example(tile_size),
    }
}

fn copy_layout_to_clipboard(grid: &Grid) {
    let layout = grid.to_layout_string();
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(layout) {
                warn!("Failed to copy to clipboard: {}", e);
            } else {
                info!("Maze layout copied to clipboard");
                // Keep clipboard alive for a moment so clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            warn!("Failed to access clipboard: {}", e);
        }
    }
}

#[macroquad::main("Raycaster")]
async fn main() {
    let config = Config::load();

    let grid = match load_grid(&config) {
        Ok(grid) => grid,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    info!(
        "Maze {}x{} cells, tile size {}",
        grid.cols(),
        grid.rows(),
        grid.tile_size()
    );
    if !grid.is_enclosed() {
        warn!("Maze border has open cells; rays may leave the grid without a hit");
    }

    request_new_screen_size(grid.width(), grid.height());

    let mut game = Game::new(config, grid);
    let input = MacroquadInput;
    let mut canvas = MacroquadCanvas;

    loop {
        if !game.tick(&input, get_frame_time()) {
            break;
        }

        if input.is_pressed(Control::CopyLayout) {
            copy_layout_to_clipboard(game.grid());
        }

        if input.is_pressed(Control::SaveSnapshot) {
            match game.save_snapshot() {
                Ok(()) => {
                    info!("Saved player to {}", game.config().visual.snapshot_path);
                }
                Err(e) => {
                    warn!("{}", e);
                }
            }
        }

        if input.is_pressed(Control::LoadSnapshot) {
            match game.load_snapshot() {
                Ok(()) => {
                    info!("Restored player from {}", game.config().visual.snapshot_path);
                }
                Err(e) => {
                    warn!("{}", e);
                }
            }
        }

        clear_background(BLACK);
        game.render(&mut canvas);

        next_frame().await
    }
}
