//! The solver contract every backend implements, plus the algorithm
//! selector external callers use to pick one.

pub mod backtracking;
pub mod dlx;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::board::Board;

pub use backtracking::BacktrackingSolver;
pub use dlx::DlxSolver;

/// The result of a single `solve` call. Produced once, never mutated after
/// return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub solved: bool,
    pub solution: Vec<Vec<u8>>,
    pub algorithm: String,
    pub time_ms: f64,
    pub iterations: u64,
    pub backtracks: u64,
    pub error_message: Option<String>,
}

impl SolveResult {
    fn failure(algorithm: &str, board: &Board, message: impl Into<String>) -> Self {
        Self {
            solved: false,
            solution: board.grid().to_vec(),
            algorithm: algorithm.to_string(),
            time_ms: 0.0,
            iterations: 0,
            backtracks: 0,
            error_message: Some(message.into()),
        }
    }
}

/// Per-call iteration/backtrack counters, shared by both backends so
/// `timed` can stamp a `SolveResult` uniformly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchCounters {
    pub iterations: u64,
    pub backtracks: u64,
}

/// Times a closure and folds its counters + output into a `SolveResult`.
///
/// The closure reports failure as `Err(message)` rather than `None` so the
/// distinct `SolverError` kinds (contradictory givens, resource exhaustion,
/// ...) reach `SolveResult::error_message` instead of being collapsed into
/// one generic string.
fn timed(
    algorithm: &str,
    board: &Board,
    f: impl FnOnce() -> (Result<Vec<Vec<u8>>, String>, SearchCounters),
) -> SolveResult {
    let start = Instant::now();
    let (solution, counters) = f();
    let time_ms = start.elapsed().as_secs_f64() * 1000.0;

    match solution {
        Ok(solution) => SolveResult {
            solved: true,
            solution,
            algorithm: algorithm.to_string(),
            time_ms,
            iterations: counters.iterations,
            backtracks: counters.backtracks,
            error_message: None,
        },
        Err(message) => SolveResult {
            time_ms,
            iterations: counters.iterations,
            backtracks: counters.backtracks,
            ..SolveResult::failure(algorithm, board, message)
        },
    }
}

/// The contract both backends implement. Every operation is pure with
/// respect to the caller's `Board` — no mutation is ever visible outside.
pub trait Solver {
    /// Finds one solution, searching until the first complete grid is found
    /// or the search space is exhausted.
    fn solve(&self, board: &Board) -> SolveResult;

    /// Enumerates solutions in the solver's natural search order. `max ==
    /// 0` means unbounded; otherwise stops after `max` solutions have been
    /// recorded. The result is realized (not lazy).
    fn find_all_solutions(&self, board: &Board, max: usize) -> Vec<Board>;

    /// True iff exactly one solution exists.
    fn has_unique_solution(&self, board: &Board) -> bool {
        self.find_all_solutions(board, 2).len() == 1
    }

    fn name(&self) -> &'static str;
}

/// The solver-factory boundary of the core: callers pick an algorithm by
/// name and get back a `Solver` handle without ever branching on the
/// concrete type themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Backtracking,
    DancingLinks,
}

impl Algorithm {
    pub fn build(self) -> Box<dyn Solver> {
        match self {
            Algorithm::Backtracking => Box::new(BacktrackingSolver),
            Algorithm::DancingLinks => Box::new(DlxSolver),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Backtracking => "backtracking",
            Algorithm::DancingLinks => "dancing-links",
        }
    }
}

pub const ALL_ALGORITHMS: [Algorithm; 2] = [Algorithm::Backtracking, Algorithm::DancingLinks];
