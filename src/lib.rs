//! The constraint-satisfaction core of an N x N Sudoku solver: the `Board`
//! abstraction, two interchangeable solving backends (backtracking with
//! bitmask domains, and Dancing Links over an exact-cover matrix), and a
//! benchmark harness for comparing them.
//!
//! This crate deliberately knows nothing about where a board comes from or
//! where a solution goes — no CLI, no file formats, no network I/O. A host
//! application builds a `Board`, picks an `Algorithm`, and reads back a
//! `SolveResult`.

pub mod bench;
pub mod board;
pub mod error;
pub mod solver;

pub use board::{Board, BoardDimension, BoardMetadata};
pub use error::{Result, SolverError};
pub use solver::{Algorithm, SolveResult, Solver, ALL_ALGORITHMS};
