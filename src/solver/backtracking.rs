//! Recursive depth-first backtracking with per-row/column/box bitmask
//! domains and Minimum-Remaining-Value (MRV) cell selection.

use log::{debug, trace};

use crate::board::Board;
use crate::solver::{timed, SearchCounters, SolveResult, Solver};

/// Stateless marker type: every call builds its own masks and grid copy, so
/// there is nothing to reset between runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

/// The ephemeral search state for one `solve`/`find_all_solutions` call.
/// Never observed outside the call that owns it.
struct Search {
    n: usize,
    grid: Vec<Vec<u8>>,
    row_mask: Vec<u64>,
    col_mask: Vec<u64>,
    box_mask: Vec<u64>,
    counters: SearchCounters,
}

impl Search {
    /// Builds masks from the board's givens. Returns `None` if a clue
    /// already conflicts with another clue.
    fn new(board: &Board) -> Option<Self> {
        let n = board.dimension().n();
        let dim = board.dimension();
        let grid = board.grid().to_vec();

        let mut row_mask = vec![0u64; n];
        let mut col_mask = vec![0u64; n];
        let mut box_mask = vec![0u64; n];

        for r in 0..n {
            for c in 0..n {
                let v = grid[r][c];

                if v == 0 {
                    continue;
                }

                let bit = 1u64 << (v - 1);
                let b = dim.box_index(r, c);

                if row_mask[r] & bit != 0 || col_mask[c] & bit != 0 || box_mask[b] & bit != 0 {
                    return None;
                }

                row_mask[r] |= bit;
                col_mask[c] |= bit;
                box_mask[b] |= bit;
            }
        }

        Some(Self {
            n,
            grid,
            row_mask,
            col_mask,
            box_mask,
            counters: SearchCounters::default(),
        })
    }

    fn candidates(&self, dim_box: usize, r: usize, c: usize) -> u64 {
        let used = self.row_mask[r] | self.col_mask[c] | self.box_mask[dim_box];
        let all = if self.n == 64 {
            u64::MAX
        } else {
            (1u64 << self.n) - 1
        };

        !used & all
    }

    /// Scans every empty cell and returns the one with the fewest
    /// candidates, ties broken by row-major order. `None` means the grid is
    /// complete.
    fn select_cell(&self, dim: crate::board::BoardDimension) -> Option<(usize, usize, u64)> {
        let mut best: Option<(usize, usize, u64)> = None;

        for r in 0..self.n {
            for c in 0..self.n {
                if self.grid[r][c] != 0 {
                    continue;
                }

                let b = dim.box_index(r, c);
                let cand = self.candidates(b, r, c);
                let count = cand.count_ones();

                match &best {
                    Some((_, _, best_cand)) if best_cand.count_ones() <= count => {}
                    _ => best = Some((r, c, cand)),
                }

                if count == 0 {
                    return Some((r, c, 0));
                }
            }
        }

        best
    }

    fn place(&mut self, dim_box: usize, r: usize, c: usize, v: u8) {
        let bit = 1u64 << (v - 1);
        self.grid[r][c] = v;
        self.row_mask[r] |= bit;
        self.col_mask[c] |= bit;
        self.box_mask[dim_box] |= bit;
    }

    fn unplace(&mut self, dim_box: usize, r: usize, c: usize, v: u8) {
        let bit = 1u64 << (v - 1);
        self.grid[r][c] = 0;
        self.row_mask[r] &= !bit;
        self.col_mask[c] &= !bit;
        self.box_mask[dim_box] &= !bit;
    }

    /// Finds the first complete grid. Returns `true` on success, leaving
    /// `self.grid` holding the solution.
    fn solve_one(&mut self, dim: crate::board::BoardDimension) -> bool {
        self.counters.iterations += 1;

        let (r, c, cand) = match self.select_cell(dim) {
            Some(cell) => cell,
            None => return true,
        };

        if cand == 0 {
            self.counters.backtracks += 1;
            return false;
        }

        let b = dim.box_index(r, c);
        let mut remaining = cand;

        while remaining != 0 {
            let bit = remaining & remaining.wrapping_neg();
            let v = (bit.trailing_zeros() + 1) as u8;
            remaining &= remaining - 1;

            self.place(b, r, c, v);

            if self.solve_one(dim) {
                return true;
            }

            self.unplace(b, r, c, v);
            self.counters.backtracks += 1;
        }

        false
    }

    /// Enumerates every complete grid, stopping early once `max` (when
    /// nonzero) have been collected.
    fn solve_all(&mut self, dim: crate::board::BoardDimension, max: usize, out: &mut Vec<Vec<Vec<u8>>>) {
        self.counters.iterations += 1;

        if max != 0 && out.len() >= max {
            return;
        }

        let (r, c, cand) = match self.select_cell(dim) {
            Some(cell) => cell,
            None => {
                out.push(self.grid.clone());
                return;
            }
        };

        if cand == 0 {
            self.counters.backtracks += 1;
            return;
        }

        let b = dim.box_index(r, c);
        let mut remaining = cand;

        while remaining != 0 {
            if max != 0 && out.len() >= max {
                break;
            }

            let bit = remaining & remaining.wrapping_neg();
            let v = (bit.trailing_zeros() + 1) as u8;
            remaining &= remaining - 1;

            self.place(b, r, c, v);
            self.solve_all(dim, max, out);
            self.unplace(b, r, c, v);

            if max == 0 || out.len() < max {
                self.counters.backtracks += 1;
            }
        }
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, board: &Board) -> SolveResult {
        let dim = board.dimension();

        timed("backtracking", board, || {
            let mut search = match Search::new(board) {
                Some(s) => s,
                None => {
                    debug!("backtracking: contradictory givens, aborting before search");
                    return (
                        Err("contradictory givens: a clue conflicts with another clue".to_string()),
                        SearchCounters::default(),
                    );
                }
            };

            let found = search.solve_one(dim);
            trace!(
                "backtracking: {} iterations, {} backtracks",
                search.counters.iterations,
                search.counters.backtracks
            );

            let result = if found {
                Ok(search.grid.clone())
            } else {
                Err("no solution exists for the given board".to_string())
            };

            (result, search.counters)
        })
    }

    fn find_all_solutions(&self, board: &Board, max: usize) -> Vec<Board> {
        let dim = board.dimension();

        let mut search = match Search::new(board) {
            Some(s) => s,
            None => return Vec::new(),
        };

        let mut out = Vec::new();
        search.solve_all(dim, max, &mut out);

        out.into_iter()
            .filter_map(|grid| Board::new(grid, Some(dim)).ok())
            .collect()
    }

    fn name(&self) -> &'static str {
        "backtracking"
    }
}
