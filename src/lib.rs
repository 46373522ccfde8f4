// Domain layer - the simulation engine
pub mod domain;

// Application layer - run state, pacing, config and persistence
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Bounds, Cell, Coord, LifeEngine, LifeError, Pattern, presets};
pub use application::{Config, GameState};
pub use ui::Button;
