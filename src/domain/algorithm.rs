//! Algorithm enum for selecting how a generation is evaluated.
//!
//! Both strategies walk the same sparse candidate set and produce
//! identical results; they differ only in how the work is scheduled.

/// Available step strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Candidate set evaluated on the calling thread
    #[default]
    Sparse,
    /// Candidate set evaluated with rayon
    SparseParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }
    
    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
        }
    }
    
    /// The other strategy, for a UI toggle
    pub fn next(self) -> Self {
        match self {
            Algorithm::Sparse => Algorithm::SparseParallel,
            Algorithm::SparseParallel => Algorithm::Sparse,
        }
    }
}
