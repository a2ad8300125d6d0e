//! Exact-cover formulation of Sudoku and Algorithm X over a toroidal
//! doubly-linked matrix (Dancing Links).
//!
//! Largely follows the cover/uncover/search shape of a classic DLX
//! implementation, generalized from a fixed 9x9 universe to an arbitrary
//! `N = R * C` board: `4 * N^2` columns (cell, row-digit, column-digit,
//! box-digit constraints) and up to `N^3` candidate-placement rows.

use log::{debug, trace};

use crate::board::{Board, BoardDimension};
use crate::error::SolverError;
use crate::solver::{timed, SearchCounters, SolveResult, Solver};

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// A single node of the matrix: four ring links plus, for a header node,
/// the live-item count (`size`); body nodes instead carry the id of the
/// candidate row they belong to.
#[derive(Debug, Clone, Copy)]
struct Node {
    links: [usize; 4],
    /// `size` for header nodes (index < num_cols); unused for body nodes.
    size: usize,
    /// The header node's own index this node belongs to (a header's column
    /// is itself). Lets any node find its column in O(1).
    column: usize,
    /// Index into `rows` for body nodes; `usize::MAX` for header nodes.
    row_id: usize,
}

impl Node {
    fn header(idx: usize) -> Self {
        Self {
            links: [0; 4],
            size: 0,
            column: idx,
            row_id: usize::MAX,
        }
    }

    fn body(column: usize, row_id: usize) -> Self {
        Self {
            links: [0; 4],
            size: 0,
            column,
            row_id,
        }
    }

    #[inline]
    fn link(&self, dir: Direction) -> usize {
        self.links[dir as usize]
    }

    #[inline]
    fn set_link(&mut self, dir: Direction, idx: usize) {
        self.links[dir as usize] = idx;
    }
}

/// A candidate placement `(row, col, value)`. `value` is 1-based.
type Candidate = (usize, usize, u8);

/// The toroidal matrix for one solve invocation. Arena-owned: every node
/// address is a plain `Vec` index, stable for the matrix's lifetime and
/// released when the matrix is dropped.
struct Matrix {
    nodes: Vec<Node>,
    root: usize,
    n: usize,
    num_cols: usize,
    rows: Vec<Candidate>,
    /// Givens, pre-committed before the search begins; `reconstruct` seeds
    /// the grid with these since they never appear in `partial`.
    givens: Vec<Candidate>,
    counters: SearchCounters,
}

impl Matrix {
    fn build(board: &Board) -> Result<Self, SolverError> {
        let dim = board.dimension();
        let n = dim.n();
        let num_cols = 4 * n * n;

        let estimated_rows = n * n * n;
        let estimated_nodes = num_cols + 1 + estimated_rows * 4;

        let mut nodes = Vec::new();
        nodes
            .try_reserve(estimated_nodes)
            .map_err(|e| SolverError::ResourceExhausted(e.to_string()))?;

        let root = num_cols;
        nodes.extend((0..num_cols).map(Node::header));
        nodes.push(Node::header(root));

        // Link the header ring (root + every column, in canonical order).
        for i in 0..=num_cols {
            let next = if i == num_cols { 0 } else { i + 1 };
            let prev = if i == 0 { num_cols } else { i - 1 };
            nodes[i].set_link(Direction::Right, next);
            nodes[i].set_link(Direction::Left, prev);
            nodes[i].set_link(Direction::Up, i);
            nodes[i].set_link(Direction::Down, i);
        }

        let mut matrix = Self {
            nodes,
            root,
            n,
            num_cols,
            rows: Vec::new(),
            givens: Vec::new(),
            counters: SearchCounters::default(),
        };

        matrix.populate_rows(board, dim)?;
        matrix.cover_givens(board, dim)?;

        Ok(matrix)
    }

    fn cell_col(n: usize, r: usize, c: usize) -> usize {
        r * n + c
    }

    fn row_digit_col(n: usize, r: usize, v: u8) -> usize {
        n * n + r * n + (v as usize - 1)
    }

    fn col_digit_col(n: usize, c: usize, v: u8) -> usize {
        2 * n * n + c * n + (v as usize - 1)
    }

    fn box_digit_col(n: usize, b: usize, v: u8) -> usize {
        3 * n * n + b * n + (v as usize - 1)
    }

    fn constraint_cols(n: usize, dim: BoardDimension, r: usize, c: usize, v: u8) -> [usize; 4] {
        let b = dim.box_index(r, c);

        [
            Self::cell_col(n, r, c),
            Self::row_digit_col(n, r, v),
            Self::col_digit_col(n, c, v),
            Self::box_digit_col(n, b, v),
        ]
    }

    /// Creates one row per candidate placement whose cell is either empty
    /// or already holds that value.
    fn populate_rows(&mut self, board: &Board, dim: BoardDimension) -> Result<(), SolverError> {
        let n = dim.n();

        for r in 0..n {
            for c in 0..n {
                let given = board.get(r, c).unwrap_or(0);

                for v in 1..=n as u8 {
                    if given != 0 && given != v {
                        continue;
                    }

                    let cols = Self::constraint_cols(n, dim, r, c, v);
                    self.append_row(cols)?;
                    self.rows.push((r, c, v));
                }
            }
        }

        Ok(())
    }

    fn append_row(&mut self, cols: [usize; 4]) -> Result<(), SolverError> {
        let row_id = self.rows.len();
        let start = self.nodes.len();

        self.nodes
            .try_reserve(4)
            .map_err(|e| SolverError::ResourceExhausted(e.to_string()))?;

        for &col in &cols {
            let idx = self.nodes.len();
            self.nodes.push(Node::body(col, row_id));
            self.append_to_column(col, idx);
        }

        for i in 0..4 {
            let idx = start + i;
            let next = start + (i + 1) % 4;
            let prev = start + (i + 3) % 4;
            self.nodes[idx].set_link(Direction::Right, next);
            self.nodes[idx].set_link(Direction::Left, prev);
        }

        Ok(())
    }

    fn append_to_column(&mut self, col: usize, idx: usize) {
        let old_bottom = self.nodes[col].link(Direction::Up);

        self.nodes[col].set_link(Direction::Up, idx);
        self.nodes[col].size += 1;

        self.nodes[old_bottom].set_link(Direction::Down, idx);
        self.nodes[idx].set_link(Direction::Up, old_bottom);
        self.nodes[idx].set_link(Direction::Down, col);
    }

    /// Pre-covers the column set of every given clue before the search
    /// begins. Fails if two givens would cover the same column twice
    /// (a direct rule violation between two clues).
    fn cover_givens(&mut self, board: &Board, dim: BoardDimension) -> Result<(), SolverError> {
        let n = dim.n();
        let mut already_covered = vec![false; self.num_cols];

        for r in 0..n {
            for c in 0..n {
                let v = board.get(r, c).unwrap_or(0);

                if v == 0 {
                    continue;
                }

                let cols = Self::constraint_cols(n, dim, r, c, v);

                for &col in &cols {
                    if already_covered[col] {
                        return Err(SolverError::ContradictoryInput(format!(
                            "givens conflict at ({r}, {c}) = {v}"
                        )));
                    }
                }

                for &col in &cols {
                    self.cover(col);
                    already_covered[col] = true;
                }

                self.givens.push((r, c, v));
            }
        }

        Ok(())
    }

    fn walk(&self, start: usize, dir: Direction) -> impl Iterator<Item = usize> + '_ {
        let mut idx = start;
        std::iter::from_fn(move || {
            let next = self.nodes[idx].link(dir);
            if next == start {
                None
            } else {
                idx = next;
                Some(idx)
            }
        })
    }

    fn remove(&mut self, idx: usize, dir: Direction) {
        let opp = dir.opposite();
        let next = self.nodes[idx].link(dir);
        let prev = self.nodes[idx].link(opp);

        self.nodes[prev].set_link(dir, next);
        self.nodes[next].set_link(opp, prev);
    }

    fn restore(&mut self, idx: usize, dir: Direction) {
        let opp = dir.opposite();
        let next = self.nodes[idx].link(dir);
        let prev = self.nodes[idx].link(opp);

        self.nodes[prev].set_link(dir, idx);
        self.nodes[next].set_link(opp, idx);
    }

    fn cover(&mut self, col: usize) {
        self.remove(col, Direction::Right);

        for row_node in self.walk(col, Direction::Down).collect::<Vec<_>>() {
            for node in self.walk(row_node, Direction::Right).collect::<Vec<_>>() {
                self.remove(node, Direction::Down);
                self.nodes[self.column_of(node)].size -= 1;
            }
        }
    }

    fn uncover(&mut self, col: usize) {
        for row_node in self.walk(col, Direction::Up).collect::<Vec<_>>() {
            for node in self.walk(row_node, Direction::Left).collect::<Vec<_>>() {
                self.nodes[self.column_of(node)].size += 1;
                self.restore(node, Direction::Down);
            }
        }

        self.restore(col, Direction::Right);
    }

    #[inline]
    fn column_of(&self, node: usize) -> usize {
        self.nodes[node].column
    }

    /// Selects the live column with the fewest items (S-heuristic), ties
    /// broken by first-encountered order from the root.
    fn choose_column(&self) -> Option<usize> {
        let mut best: Option<usize> = None;

        for col in self.walk(self.root, Direction::Right) {
            let size = self.nodes[col].size;

            match best {
                Some(b) if self.nodes[b].size <= size => {}
                _ => best = Some(col),
            }

            if size == 0 {
                return Some(col);
            }
        }

        best
    }

    fn is_solved(&self) -> bool {
        self.nodes[self.root].link(Direction::Right) == self.root
    }

    fn reconstruct(&self, partial: &[usize]) -> Vec<Vec<u8>> {
        let n = self.n;
        let mut grid = vec![vec![0u8; n]; n];

        for &(r, c, v) in &self.givens {
            grid[r][c] = v;
        }

        for &node in partial {
            let row_id = self.nodes[node].row_id;
            let (r, c, v) = self.rows[row_id];
            grid[r][c] = v;
        }

        grid
    }

    /// Algorithm X. `partial` holds the node indices chosen so far (one per
    /// committed row). Returns `true` when the search should stop
    /// (single-mode success, or the `max` cap was reached in all-mode).
    fn search(
        &mut self,
        partial: &mut Vec<usize>,
        max: usize,
        solutions: &mut Vec<Vec<Vec<u8>>>,
    ) -> bool {
        self.counters.iterations += 1;

        if self.is_solved() {
            solutions.push(self.reconstruct(partial));
            return max != 0 && solutions.len() >= max;
        }

        let col = match self.choose_column() {
            Some(c) => c,
            None => return false,
        };

        if self.nodes[col].size == 0 {
            return false;
        }

        self.cover(col);

        let mut stop = false;
        let rows: Vec<usize> = self.walk(col, Direction::Down).collect();

        for row_node in rows {
            partial.push(row_node);

            for node in self.walk(row_node, Direction::Right).collect::<Vec<_>>() {
                self.cover(self.column_of(node));
            }

            let terminate = self.search(partial, max, solutions);

            for node in self.walk(row_node, Direction::Left).collect::<Vec<_>>() {
                self.uncover(self.column_of(node));
            }

            partial.pop();

            if terminate {
                stop = true;
                break;
            }

            self.counters.backtracks += 1;
        }

        self.uncover(col);

        stop
    }
}

/// Stateless marker type: every call builds its own arena.
#[derive(Debug, Default, Clone, Copy)]
pub struct DlxSolver;

impl Solver for DlxSolver {
    fn solve(&self, board: &Board) -> SolveResult {
        timed("dancing-links", board, || {
            let mut matrix = match Matrix::build(board) {
                Ok(m) => m,
                Err(e) => {
                    debug!("dlx: matrix build failed: {e}");
                    return (Err(e.to_string()), SearchCounters::default());
                }
            };

            let mut partial = Vec::new();
            let mut solutions = Vec::new();
            matrix.search(&mut partial, 1, &mut solutions);

            trace!(
                "dlx: {} iterations, {} backtracks",
                matrix.counters.iterations,
                matrix.counters.backtracks
            );

            let result = solutions
                .into_iter()
                .next()
                .ok_or_else(|| "no solution exists for the given board".to_string());

            (result, matrix.counters)
        })
    }

    fn find_all_solutions(&self, board: &Board, max: usize) -> Vec<Board> {
        let dim = board.dimension();

        let mut matrix = match Matrix::build(board) {
            Ok(m) => m,
            Err(_) => return Vec::new(),
        };

        let mut partial = Vec::new();
        let mut solutions = Vec::new();
        matrix.search(&mut partial, max, &mut solutions);

        solutions
            .into_iter()
            .filter_map(|grid| Board::new(grid, Some(dim)).ok())
            .collect()
    }

    fn name(&self) -> &'static str {
        "dancing-links"
    }
}
