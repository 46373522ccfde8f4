use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the engine and its persistence adapter.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Width or height was not a positive integer.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Randomize density outside [0, 1] (or NaN).
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    /// Cell coordinate outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },

    /// Malformed pattern line. `line_number` is 1-based.
    #[error("malformed pattern line {line_number}: {line:?}")]
    Parse { line_number: usize, line: String },

    /// Pattern source does not exist.
    #[error("pattern file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
