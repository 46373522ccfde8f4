mod config;
mod game_state;
pub mod persistence;

pub use config::{Config, DEFAULT_PATTERN_FILE};
pub use game_state::GameState;
