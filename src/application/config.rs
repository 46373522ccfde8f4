use std::path::PathBuf;

use clap::Parser;

/// Default pattern file, read and written by the S / L keys
pub const DEFAULT_PATTERN_FILE: &str = "patterns.txt";

/// Startup configuration, taken from command-line flags
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "sparse_life", version, about = "Conway's Game of Life on a bounded grid")]
pub struct Config {
    /// Grid width in cells
    #[arg(
        short,
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub width: i32,
    /// Grid height in cells
    #[arg(
        short = 'H',
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub height: i32,
    /// Target generations per second while running
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fps: u32,
    /// Cell size in pixels
    #[arg(
        long = "cell-size",
        alias = "cell_size",
        value_name = "PIXELS",
        default_value_t = 20,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub cell_size: u32,
    /// Probability that a cell starts alive in a random fill, within [0, 1]
    #[arg(short, long, default_value_t = 0.2, value_parser = parse_density)]
    pub density: f64,
    /// Seed for the random fill; omit for a different grid every run
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Pattern file used by save and load
    #[arg(
        short,
        long = "pattern",
        value_name = "PATH",
        default_value = DEFAULT_PATTERN_FILE
    )]
    pub pattern_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["sparse_life"])
    }
}

fn parse_density(value: &str) -> Result<f64, String> {
    let density: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{value:?} is not a number"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density must be within [0, 1], got {density}"))
    }
}
