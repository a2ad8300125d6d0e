//! The `Board` abstraction: an N x N grid of Sudoku cells plus its dimension
//! descriptor, and the structural/validity queries the solvers and the
//! benchmark harness share.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// Canonical `(R, C)` box shapes for the grid sizes the crate is exercised
/// against. Anything else falls back to the closest-to-square factor pair.
const CANONICAL_SHAPES: [(usize, (usize, usize)); 3] = [(9, (3, 3)), (16, (4, 4)), (25, (5, 5))];

/// The triple `(N, R, C)` with `N = R * C`, fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDimension {
    n: usize,
    r: usize,
    c: usize,
}

impl BoardDimension {
    /// Builds a dimension triple, rejecting anything where `r * c != n` or
    /// `n == 0`.
    pub fn new(n: usize, r: usize, c: usize) -> Result<Self> {
        if n == 0 || r == 0 || c == 0 || r * c != n {
            return Err(SolverError::InvalidDimension(format!(
                "N = {n} is not R * C for R = {r}, C = {c}"
            )));
        }

        Ok(Self { n, r, c })
    }

    /// Infers `(R, C)` from `N` alone: a canonical shape for 9/16/25, or the
    /// integer factor pair closest to `sqrt(n)` otherwise.
    pub fn infer(n: usize) -> Result<Self> {
        if let Some(&(_, (r, c))) = CANONICAL_SHAPES.iter().find(|&&(size, _)| size == n) {
            return Self::new(n, r, c);
        }

        let sqrt = (n as f64).sqrt() as usize;

        for r in (1..=sqrt.max(1)).rev() {
            if n % r == 0 {
                return Self::new(n, r, n / r);
            }
        }

        Err(SolverError::InvalidDimension(format!(
            "N = {n} has no integer box factorization"
        )))
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn r(&self) -> usize {
        self.r
    }

    #[inline]
    pub fn c(&self) -> usize {
        self.c
    }

    /// The box index `0..n` that cell `(row, col)` belongs to.
    #[inline]
    pub fn box_index(&self, row: usize, col: usize) -> usize {
        (row / self.r) * (self.n / self.c) + col / self.c
    }
}

/// Opaque, solver-ignored metadata an external loader may attach to a
/// board (a puzzle name, a difficulty label, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMetadata {
    pub name: Option<String>,
    pub difficulty: Option<String>,
}

/// An N x N grid of cells, each `0` (empty) or a digit in `[1, N]`.
///
/// Immutable after construction except through explicit copy-and-modify;
/// the solvers never mutate a caller's `Board` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: BoardDimension,
    grid: Vec<Vec<u8>>,
    #[serde(default)]
    metadata: BoardMetadata,
}

impl Board {
    /// Constructs a board from a dense grid, inferring the dimension from
    /// `grid.len()` when `dimension` is absent.
    pub fn new(grid: Vec<Vec<u8>>, dimension: Option<BoardDimension>) -> Result<Self> {
        let n = grid.len();
        let dimension = match dimension {
            Some(d) => d,
            None => BoardDimension::infer(n)?,
        };

        if dimension.n() != n {
            return Err(SolverError::InvalidDimension(format!(
                "grid has {n} rows but dimension declares N = {}",
                dimension.n()
            )));
        }

        for row in &grid {
            if row.len() != n {
                return Err(SolverError::InvalidDimension(format!(
                    "expected a square {n}x{n} grid, found a row of length {}",
                    row.len()
                )));
            }

            for &value in row {
                if value as usize > n {
                    return Err(SolverError::OutOfRange {
                        value: value as u32,
                        n,
                    });
                }
            }
        }

        Ok(Self {
            dimension,
            grid,
            metadata: BoardMetadata::default(),
        })
    }

    /// Attaches opaque metadata the core neither validates nor interprets.
    pub fn with_metadata(mut self, metadata: BoardMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[inline]
    pub fn dimension(&self) -> BoardDimension {
        self.dimension
    }

    #[inline]
    pub fn metadata(&self) -> &BoardMetadata {
        &self.metadata
    }

    #[inline]
    pub fn grid(&self) -> &[Vec<u8>] {
        &self.grid
    }

    pub fn into_grid(self) -> Vec<Vec<u8>> {
        self.grid
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Range-checked cell write; fails with `OutOfRange` if `value` isn't in
    /// `[0, N]` or `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        let n = self.dimension.n();

        if row >= n || col >= n {
            return Err(SolverError::OutOfRange {
                value: value as u32,
                n,
            });
        }

        if value as usize > n {
            return Err(SolverError::OutOfRange {
                value: value as u32,
                n,
            });
        }

        self.grid[row][col] = value;

        Ok(())
    }

    /// False iff any row, column, or box holds the same nonzero value
    /// twice.
    pub fn is_valid(&self) -> bool {
        let n = self.dimension.n();

        let row_ok = (0..n).all(|r| has_unique_nonzero(self.grid[r].iter().copied()));
        let col_ok = (0..n).all(|c| has_unique_nonzero((0..n).map(|r| self.grid[r][c])));
        let box_ok = (0..n).all(|b| has_unique_nonzero(self.box_cells(b)));

        row_ok && col_ok && box_ok
    }

    /// `is_valid()` and no cell equals `0`.
    pub fn is_solved(&self) -> bool {
        self.is_valid() && self.count_empty() == 0
    }

    pub fn count_empty(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn fill_ratio(&self) -> f64 {
        let n = self.dimension.n();
        let total = n * n;

        if total == 0 {
            return 0.0;
        }

        (total - self.count_empty()) as f64 / total as f64
    }

    fn box_cells(&self, b: usize) -> impl Iterator<Item = u8> + '_ {
        let n = self.dimension.n();
        let boxes_per_row = n / self.dimension.c();
        let box_row = b / boxes_per_row;
        let box_col = b % boxes_per_row;
        let r = self.dimension.r();
        let c = self.dimension.c();

        (0..r).flat_map(move |dr| {
            let row = box_row * r + dr;
            (0..c).map(move |dc| self.grid[row][box_col * c + dc])
        })
    }
}

fn has_unique_nonzero(values: impl IntoIterator<Item = u8>) -> bool {
    let mut seen = 0u64;

    for v in values {
        if v == 0 {
            continue;
        }

        let bit = 1u64 << (v - 1);

        if seen & bit != 0 {
            return false;
        }

        seen |= bit;
    }

    true
}
