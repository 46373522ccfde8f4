//! Sparse Game of Life engine on a closed, bounded grid.
//!
//! Only live coordinates are stored. Each generation evaluates the
//! candidate set (live cells plus their in-bounds neighbors); every
//! other cell has no live neighbors and is guaranteed to stay dead.

use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::{Algorithm, Bounds, Cell, Coord, LifeError};

/// Simulation engine: live-cell set, grid bounds and generation counter.
#[derive(Clone)]
pub struct LifeEngine {
    bounds: Bounds,
    live: HashSet<Coord>,
    generation: u64,
    rng: StdRng,
}

impl LifeEngine {
    /// Create an empty engine with an OS-seeded random source
    pub fn new(width: i32, height: i32) -> Result<Self, LifeError> {
        Ok(Self::with_rng(Bounds::new(width, height)?, StdRng::from_os_rng()))
    }

    /// Create an empty engine whose random source is deterministic
    pub fn with_seed(width: i32, height: i32, seed: u64) -> Result<Self, LifeError> {
        Ok(Self::with_rng(Bounds::new(width, height)?, StdRng::seed_from_u64(seed)))
    }

    fn with_rng(bounds: Bounds, rng: StdRng) -> Self {
        Self {
            bounds,
            live: HashSet::new(),
            generation: 0,
            rng,
        }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub const fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub const fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the live cells
    pub fn live_cells(&self) -> &HashSet<Coord> {
        &self.live
    }

    /// Owned copy of the live cells
    pub fn snapshot(&self) -> HashSet<Coord> {
        self.live.clone()
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.live.contains(&(x, y))
    }

    /// Live cells in ascending (x, y) order
    pub fn sorted_cells(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.live.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Empty the grid and reset the generation counter
    pub fn clear(&mut self) {
        self.live.clear();
        self.generation = 0;
    }

    /// Replace the grid with random cells, each alive with probability `density`.
    ///
    /// `Some(seed)` re-seeds the engine's random source first so the result is
    /// reproducible. Resets the generation counter.
    pub fn randomize(&mut self, density: f64, seed: Option<u64>) -> Result<(), LifeError> {
        check_density(density)?;
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        let live = scatter(self.bounds, density, &mut self.rng);
        self.reseed(live, density);
        Ok(())
    }

    /// Same as [`randomize`](Self::randomize) with a caller-supplied random source
    pub fn randomize_with<R: Rng>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<(), LifeError> {
        check_density(density)?;
        let live = scatter(self.bounds, density, rng);
        self.reseed(live, density);
        Ok(())
    }

    fn reseed(&mut self, live: HashSet<Coord>, density: f64) {
        info!(
            "randomized {}x{} grid at density {:.2}: {} live cells",
            self.width(),
            self.height(),
            density,
            live.len()
        );
        self.live = live;
        self.generation = 0;
    }

    /// Flip the state of one cell. Does not touch the generation counter.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<(), LifeError> {
        self.bounds.check(x, y)?;
        if !self.live.remove(&(x, y)) {
            self.live.insert((x, y));
        }
        Ok(())
    }

    /// Force one cell alive or dead
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) -> Result<(), LifeError> {
        self.bounds.check(x, y)?;
        if alive {
            self.live.insert((x, y));
        } else {
            self.live.remove(&(x, y));
        }
        Ok(())
    }

    /// Live cells in the Moore neighborhood; off-grid positions count as dead
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        self.bounds
            .neighbors(x, y)
            .filter(|cell| self.live.contains(cell))
            .count() as u8
    }

    /// Every cell that may be alive next generation
    pub fn candidates(&self) -> HashSet<Coord> {
        let mut candidates = HashSet::with_capacity(self.live.len() * 9);
        for &(x, y) in &self.live {
            candidates.extend(self.bounds.region(x, y));
        }
        candidates
    }

    fn survives(&self, (x, y): Coord) -> bool {
        Cell::from_alive(self.is_alive(x, y))
            .evolve(self.count_live_neighbors(x, y))
            .is_alive()
    }

    /// Advance one generation on the calling thread
    pub fn step(&mut self) {
        let next: HashSet<Coord> = self
            .candidates()
            .into_iter()
            .filter(|&cell| self.survives(cell))
            .collect();
        self.advance(next);
    }

    /// Advance one generation, evaluating candidates with rayon
    pub fn step_parallel(&mut self) {
        let next: HashSet<Coord> = self
            .candidates()
            .into_par_iter()
            .filter(|&cell| self.survives(cell))
            .collect();
        self.advance(next);
    }

    /// Advance one generation with the chosen strategy
    pub fn step_with(&mut self, algorithm: Algorithm) {
        match algorithm {
            Algorithm::Sparse => self.step(),
            Algorithm::SparseParallel => self.step_parallel(),
        }
    }

    fn advance(&mut self, next: HashSet<Coord>) {
        self.live = next;
        self.generation += 1;
        debug!("generation {}: {} live cells", self.generation, self.live.len());
    }

    /// Pattern lines, one `"x,y"` per live cell in ascending (x, y) order.
    ///
    /// The iterator owns a sorted snapshot; clone it to replay the sequence.
    pub fn serialize(&self) -> impl Iterator<Item = String> + Clone + use<> {
        self.sorted_cells()
            .into_iter()
            .map(|(x, y)| format!("{x},{y}"))
    }

    /// Replace the grid with cells read from pattern lines.
    ///
    /// The grid is cleared first. Blank lines are skipped and coordinates
    /// outside the grid are dropped. A malformed line aborts the whole load
    /// and leaves the grid empty.
    pub fn deserialize<I, S>(&mut self, lines: I) -> Result<(), LifeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();

        let mut cells = Vec::new();
        let mut dropped = 0usize;
        for (index, raw) in lines.into_iter().enumerate() {
            let line = raw.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            let Some((x, y)) = parse_line(line) else {
                return Err(LifeError::Parse {
                    line_number: index + 1,
                    line: raw.as_ref().to_string(),
                });
            };
            match (i32::try_from(x), i32::try_from(y)) {
                (Ok(x), Ok(y)) if self.bounds.contains(x, y) => cells.push((x, y)),
                _ => dropped += 1,
            }
        }

        self.live.extend(cells);
        info!(
            "loaded {} live cells ({} outside the grid dropped)",
            self.live.len(),
            dropped
        );
        Ok(())
    }
}

/// `"x,y"` with optional whitespace around either number
fn parse_line(line: &str) -> Option<(i64, i64)> {
    let (x, y) = line.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn check_density(density: f64) -> Result<(), LifeError> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(LifeError::InvalidDensity(density))
    }
}

fn scatter<R: Rng>(bounds: Bounds, density: f64, rng: &mut R) -> HashSet<Coord> {
    bounds
        .iter()
        .filter(|_| rng.random::<f64>() < density)
        .collect()
}
