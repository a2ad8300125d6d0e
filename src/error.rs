//! Structured errors for the board-construction and solving boundaries.

use thiserror::Error;

/// Everything that can go wrong while building a [`crate::board::Board`] or
/// running a solver over one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The grid shape doesn't match its dimension, or `N` can't be
    /// decomposed into an integer `R * C` box size.
    #[error("invalid board dimension: {0}")]
    InvalidDimension(String),

    /// A cell value fell outside `[0, N]`.
    #[error("cell value {value} out of range for N = {n}")]
    OutOfRange { value: u32, n: usize },

    /// The givens already violate row/column/box uniqueness before any
    /// search has started.
    #[error("contradictory givens: {0}")]
    ContradictoryInput(String),

    /// The solver's working set (DLX arena, backtracking masks) couldn't be
    /// allocated.
    #[error("resource exhausted while allocating solver state: {0}")]
    ResourceExhausted(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
