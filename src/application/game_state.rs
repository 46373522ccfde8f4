use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

use crate::application::{Config, persistence};
use crate::domain::{Algorithm, LifeEngine, LifeError, Pattern};

/// GameState orchestrates the simulation.
/// It owns the pause flag and pacing; the engine steps whenever asked.
pub struct GameState {
    pub engine: LifeEngine,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub density: f64,
    pub pattern_path: PathBuf,
    pub last_evolution_time_ms: f32,
    /// Result of the last save / load, shown in the panel
    pub status_message: Option<String>,
    /// Whether the current mouse drag paints live (`true`) or dead cells
    pub paint_mode: Option<bool>,
}

impl GameState {
    /// Create a paused game state from the startup configuration
    pub fn new(config: &Config) -> Result<Self, LifeError> {
        let engine = match config.seed {
            Some(seed) => LifeEngine::with_seed(config.width, config.height, seed)?,
            None => LifeEngine::new(config.width, config.height)?,
        };
        info!("created {}x{} grid", config.width, config.height);
        Ok(Self {
            engine,
            algorithm: Algorithm::default(),
            is_running: false,
            update_timer: 0.0,
            updates_per_second: config.fps as f32,
            density: config.density,
            pattern_path: config.pattern_path.clone(),
            last_evolution_time_ms: 0.0,
            status_message: None,
            paint_mode: None,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Switch between serial and parallel stepping
    pub fn toggle_algorithm(mut self) -> Self {
        self.algorithm = self.algorithm.next();
        info!("step algorithm: {}", self.algorithm.name());
        self
    }

    /// Advance exactly one generation; only while paused
    pub fn step_once(mut self) -> Self {
        if !self.is_running {
            self.evolve();
        }
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self
    }

    /// Random fill at the configured density
    pub fn randomize(mut self) -> Self {
        if let Err(err) = self.engine.randomize(self.density, None) {
            warn!("random fill rejected: {}", err);
            self.status_message = Some(err.to_string());
        }
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Write the current pattern to the pattern file
    pub fn save(mut self) -> Self {
        let message = match persistence::save_pattern(&self.engine, &self.pattern_path) {
            Ok(()) => format!("Saved {}", self.pattern_path.display()),
            Err(err) => {
                warn!("save failed: {}", err);
                format!("Save failed: {}", err)
            }
        };
        self.status_message = Some(message);
        self
    }

    /// Replace the grid with the pattern file's contents
    pub fn load(mut self) -> Self {
        let message = match persistence::load_pattern(&mut self.engine, &self.pattern_path) {
            Ok(()) => format!("Loaded {}", self.pattern_path.display()),
            Err(LifeError::NotFound(path)) => format!("{} not found", path.display()),
            Err(err) => {
                warn!("load failed: {}", err);
                format!("Load failed: {}", err)
            }
        };
        self.status_message = Some(message);
        self
    }

    /// Start a drag at a grid cell: toggle it and remember what the drag paints
    pub fn begin_paint(&mut self, x: i32, y: i32) {
        let paint_live = !self.engine.is_alive(x, y);
        match self.engine.toggle_cell(x, y) {
            Ok(()) => self.paint_mode = Some(paint_live),
            Err(err) => warn!("paint ignored: {}", err),
        }
    }

    /// Continue a drag: set the cell to the drag's paint mode
    pub fn continue_paint(&mut self, x: i32, y: i32) {
        let Some(alive) = self.paint_mode else {
            return;
        };
        if let Err(err) = self.engine.set_cell(x, y, alive) {
            warn!("paint ignored: {}", err);
        }
    }

    pub fn end_paint(&mut self) {
        self.paint_mode = None;
    }

    /// Stamp a preset centered on a grid cell; returns the cells placed
    pub fn place_pattern(&mut self, pattern: &Pattern, x: i32, y: i32) -> usize {
        let (left, top) = pattern.centered_at(x, y);
        let placed = pattern.place_on(&mut self.engine, left, top);
        info!("placed {} at ({}, {}): {} cells", pattern.name, x, y, placed);
        self.status_message = Some(format!("{}: {}", pattern.name, pattern.description));
        placed
    }

    /// Update simulation by one frame.
    /// Steps at most once per `1 / updates_per_second` of accumulated time.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.evolve();
            self.update_timer = 0.0;
        }

        self
    }

    fn evolve(&mut self) {
        let start = Instant::now();
        self.engine.step_with(self.algorithm);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state(width: i32, height: i32) -> GameState {
        let config = Config {
            width,
            height,
            seed: Some(5),
            ..Config::default()
        };
        GameState::new(&config).unwrap()
    }

    #[test]
    fn test_starts_paused_and_empty() {
        let state = state(10, 10);
        assert!(!state.is_running);
        assert_eq!(state.engine.population(), 0);
        assert_eq!(state.updates_per_second, 10.0);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn test_tick_does_nothing_while_paused() {
        let mut state = state(5, 5);
        state.begin_paint(1, 1);
        let state = state.tick(10.0);
        assert_eq!(state.engine.generation(), 0);
    }

    #[test]
    fn test_tick_paces_steps() {
        let state = state(5, 5).with_running(true);

        // 10 updates/s: 0.05s is not enough, 0.1s total is
        let state = state.tick(0.05);
        assert_eq!(state.engine.generation(), 0);
        let state = state.tick(0.05);
        assert_eq!(state.engine.generation(), 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_step_once_only_when_paused() {
        let state = state(5, 5).step_once();
        assert_eq!(state.engine.generation(), 1);

        let state = state.toggle_running().step_once();
        assert_eq!(state.engine.generation(), 1);
    }

    #[test]
    fn test_algorithms_agree_through_state() {
        let serial = state(30, 30).randomize();
        let mut parallel = state(30, 30).randomize().toggle_algorithm();
        assert_eq!(parallel.algorithm, Algorithm::SparseParallel);
        parallel.engine = serial.engine.clone();

        let serial = serial.step_once().step_once();
        let parallel = parallel.step_once().step_once();
        assert_eq!(serial.engine.live_cells(), parallel.engine.live_cells());
    }

    #[test]
    fn test_clear_and_randomize_reset_generation() {
        let state = state(20, 20).randomize().step_once().step_once();
        assert_eq!(state.engine.generation(), 2);

        let state = state.randomize();
        assert_eq!(state.engine.generation(), 0);
        assert!(state.engine.population() > 0);

        let state = state.step_once().clear();
        assert_eq!(state.engine.generation(), 0);
        assert_eq!(state.engine.population(), 0);
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let state = state(5, 5).adjust_speed(100.0);
        assert_eq!(state.updates_per_second, 60.0);
        let state = state.adjust_speed(-100.0);
        assert_eq!(state.updates_per_second, 1.0);
    }

    #[test]
    fn test_drag_paints_with_first_cell_mode() {
        let mut state = state(5, 5);
        state.engine.set_cell(2, 0, true).unwrap();

        // First click on a dead cell: the drag paints live cells
        state.begin_paint(0, 0);
        state.continue_paint(1, 0);
        state.continue_paint(2, 0);
        state.continue_paint(9, 9);
        state.end_paint();
        assert_eq!(state.engine.sorted_cells(), vec![(0, 0), (1, 0), (2, 0)]);

        // First click on a live cell: the drag erases
        state.begin_paint(1, 0);
        state.continue_paint(2, 0);
        state.end_paint();
        state.continue_paint(3, 3);
        assert_eq!(state.engine.sorted_cells(), vec![(0, 0)]);
        assert_eq!(state.engine.generation(), 0);
    }

    #[test]
    fn test_place_pattern_centers_on_cell() {
        let mut state = state(10, 10);
        let placed = state.place_pattern(&crate::domain::presets::block(), 5, 5);
        assert_eq!(placed, 4);
        assert_eq!(state.engine.sorted_cells(), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
        assert_eq!(state.status_message.as_deref(), Some("Block: Still life"));
    }

    #[test]
    fn test_paint_outside_grid_leaves_cells_alone() {
        let mut state = state(5, 5);
        state.begin_paint(5, 0);
        assert_eq!(state.paint_mode, None);

        state.begin_paint(0, 0);
        state.continue_paint(-1, 0);
        state.continue_paint(0, 5);
        state.end_paint();
        assert_eq!(state.engine.sorted_cells(), vec![(0, 0)]);
    }

    #[test]
    fn test_save_and_load_through_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("patterns.txt");
        let mut state = state(8, 8);
        state.pattern_path = path.clone();
        state.begin_paint(3, 4);
        state.end_paint();

        let state = state.save();
        assert!(state.status_message.as_deref().unwrap_or("").starts_with("Saved"));

        let state = state.clear().load();
        assert_eq!(state.engine.sorted_cells(), vec![(3, 4)]);
    }

    #[test]
    fn test_load_missing_file_reports_and_clears() {
        let dir = TempDir::new().unwrap();
        let mut state = state(8, 8);
        state.pattern_path = dir.path().join("missing.txt");
        state.begin_paint(1, 1);

        let state = state.load();
        assert_eq!(state.engine.population(), 0);
        assert!(state.status_message.as_deref().unwrap_or("").ends_with("not found"));
    }
}
