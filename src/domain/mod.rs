mod algorithm;
mod bounds;
mod cell;
mod engine;
mod error;
mod patterns;

pub use algorithm::Algorithm;
pub use bounds::{Bounds, Coord};
pub use cell::Cell;
pub use engine::LifeEngine;
pub use error::LifeError;
pub use patterns::{Pattern, presets};
