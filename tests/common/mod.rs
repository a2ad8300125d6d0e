//! Shared fixtures and helpers for the integration test suite.

use sudoku_engine::{Board, BoardDimension};

/// Converts a fixed-size literal grid into the `Vec<Vec<u8>>` shape
/// `Board::new` expects, inferring the dimension from `N`.
pub fn board_of<const N: usize>(grid: &[[u8; N]; N]) -> Board {
    let rows: Vec<Vec<u8>> = grid.iter().map(|row| row.to_vec()).collect();
    Board::new(rows, None).expect("fixture grid is a well-formed NxN board")
}

/// Same as `board_of`, but with an explicit `BoardDimension` rather than
/// inferring one from `N`.
pub fn board_with<const N: usize>(grid: &[[u8; N]; N], dim: BoardDimension) -> Board {
    let rows: Vec<Vec<u8>> = grid.iter().map(|row| row.to_vec()).collect();
    Board::new(rows, Some(dim)).expect("fixture grid matches the given dimension")
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Call at the top of any test that wants log output under `--nocapture`.
pub fn setup() {
    init_logging();
}

// S1: a 9x9 puzzle with 24 givens and a unique solution.
pub const S1_SOLUTION: [[u8; 9]; 9] = [
    [4, 6, 9, 7, 8, 3, 1, 5, 2],
    [1, 5, 2, 9, 6, 4, 3, 8, 7],
    [3, 8, 7, 2, 5, 1, 4, 6, 9],
    [6, 9, 1, 4, 7, 8, 5, 2, 3],
    [5, 2, 3, 1, 9, 6, 8, 7, 4],
    [8, 7, 4, 3, 2, 5, 6, 9, 1],
    [2, 3, 8, 5, 1, 9, 7, 4, 6],
    [7, 4, 6, 8, 3, 2, 9, 1, 5],
    [9, 1, 5, 6, 4, 7, 2, 3, 8],
];
pub const S1_PUZZLE: [[u8; 9]; 9] = [
    [4, 0, 9, 0, 8, 0, 0, 0, 2],
    [0, 0, 0, 0, 0, 0, 3, 0, 0],
    [0, 0, 7, 0, 0, 0, 4, 6, 0],
    [0, 9, 1, 4, 0, 0, 5, 0, 0],
    [0, 0, 0, 0, 0, 6, 0, 0, 0],
    [0, 0, 4, 0, 2, 0, 0, 9, 0],
    [2, 0, 8, 5, 0, 0, 7, 4, 0],
    [0, 0, 0, 8, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 7, 0, 0, 0],
];

// S4: a second 9x9 puzzle, 24 givens, unique solution, different grid entirely.
pub const S4_SOLUTION: [[u8; 9]; 9] = [
    [7, 5, 1, 9, 8, 3, 2, 6, 4],
    [9, 3, 8, 4, 2, 6, 1, 5, 7],
    [4, 6, 2, 7, 1, 5, 8, 3, 9],
    [5, 1, 4, 3, 7, 8, 9, 2, 6],
    [3, 8, 7, 6, 9, 2, 4, 1, 5],
    [6, 2, 9, 5, 4, 1, 7, 8, 3],
    [2, 9, 3, 1, 6, 4, 5, 7, 8],
    [8, 7, 5, 2, 3, 9, 6, 4, 1],
    [1, 4, 6, 8, 5, 7, 3, 9, 2],
];
pub const S4_PUZZLE: [[u8; 9]; 9] = [
    [7, 0, 1, 0, 0, 0, 0, 0, 0],
    [0, 3, 8, 4, 0, 0, 0, 0, 7],
    [4, 0, 0, 0, 1, 5, 8, 0, 0],
    [0, 0, 0, 0, 0, 8, 0, 0, 6],
    [0, 0, 0, 0, 0, 0, 4, 0, 0],
    [0, 2, 9, 5, 0, 0, 0, 0, 0],
    [0, 9, 0, 0, 6, 0, 0, 7, 0],
    [0, 0, 0, 2, 0, 0, 0, 0, 0],
    [0, 4, 0, 8, 0, 0, 3, 0, 2],
];

// S5: a 16x16 puzzle, 115 givens. Uniqueness is not asserted for this size.
pub const S5_SOLUTION: [[u8; 16]; 16] = [
    [8, 1, 9, 7, 11, 15, 6, 10, 3, 4, 16, 12, 5, 13, 14, 2],
    [2, 13, 5, 14, 3, 12, 16, 4, 11, 10, 6, 15, 9, 1, 7, 8],
    [4, 12, 3, 16, 9, 1, 7, 8, 5, 2, 14, 13, 11, 15, 6, 10],
    [10, 15, 11, 6, 5, 13, 14, 2, 9, 8, 7, 1, 3, 12, 16, 4],
    [5, 14, 12, 2, 1, 16, 4, 3, 13, 11, 10, 6, 15, 7, 8, 9],
    [3, 16, 1, 4, 15, 7, 8, 9, 12, 5, 2, 14, 13, 6, 10, 11],
    [9, 7, 15, 8, 13, 6, 10, 11, 1, 3, 4, 16, 12, 14, 2, 5],
    [11, 6, 13, 10, 12, 14, 2, 5, 15, 9, 8, 7, 1, 16, 4, 3],
    [16, 5, 4, 12, 8, 3, 1, 7, 2, 14, 13, 11, 10, 9, 15, 6],
    [7, 3, 8, 1, 10, 9, 15, 6, 4, 16, 12, 5, 2, 11, 13, 14],
    [14, 11, 2, 13, 4, 5, 12, 16, 10, 6, 15, 9, 8, 3, 1, 7],
    [6, 9, 10, 15, 2, 11, 13, 14, 8, 7, 1, 3, 4, 5, 12, 16],
    [12, 2, 16, 5, 7, 4, 3, 1, 14, 13, 11, 10, 6, 8, 9, 15],
    [1, 4, 7, 3, 6, 8, 9, 15, 16, 12, 5, 2, 14, 10, 11, 13],
    [13, 10, 14, 11, 16, 2, 5, 12, 6, 15, 9, 8, 7, 4, 3, 1],
    [15, 8, 6, 9, 14, 10, 11, 13, 7, 1, 3, 4, 16, 2, 5, 12],
];
pub const S5_PUZZLE: [[u8; 16]; 16] = [
    [8, 0, 0, 0, 0, 15, 0, 0, 0, 4, 16, 12, 0, 13, 0, 0],
    [2, 0, 5, 0, 3, 12, 0, 4, 0, 0, 0, 0, 0, 0, 0, 8],
    [0, 0, 0, 16, 0, 1, 7, 0, 5, 2, 0, 13, 0, 15, 0, 0],
    [10, 15, 11, 0, 0, 13, 14, 0, 9, 8, 7, 0, 3, 0, 16, 0],
    [5, 0, 12, 2, 1, 0, 4, 0, 0, 0, 0, 0, 15, 0, 0, 0],
    [0, 0, 0, 4, 15, 0, 0, 0, 12, 0, 0, 14, 13, 0, 0, 0],
    [9, 7, 0, 8, 13, 0, 10, 0, 0, 3, 0, 16, 0, 0, 2, 0],
    [11, 6, 0, 10, 12, 0, 2, 0, 15, 0, 0, 0, 0, 16, 0, 3],
    [16, 0, 4, 12, 0, 0, 0, 0, 0, 0, 13, 0, 10, 9, 15, 0],
    [7, 3, 8, 1, 0, 0, 15, 6, 4, 0, 0, 0, 0, 0, 13, 14],
    [14, 11, 2, 0, 4, 5, 12, 0, 0, 0, 0, 0, 0, 3, 1, 0],
    [6, 0, 0, 15, 0, 0, 0, 0, 8, 7, 0, 3, 4, 0, 0, 16],
    [0, 0, 16, 0, 0, 4, 0, 1, 0, 0, 11, 0, 6, 0, 9, 15],
    [1, 0, 0, 0, 6, 0, 9, 0, 0, 12, 5, 2, 0, 0, 11, 0],
    [0, 0, 14, 0, 0, 0, 0, 0, 6, 0, 9, 8, 0, 0, 0, 0],
    [0, 8, 0, 9, 0, 0, 11, 13, 7, 1, 3, 4, 0, 2, 0, 12],
];

// S6: a 25x25 puzzle, 218 givens. Uniqueness is not asserted for this size.
pub const S6_SOLUTION: [[u8; 25]; 25] = [
    [6, 12, 3, 9, 20, 8, 11, 4, 23, 7, 22, 25, 10, 5, 16, 2, 17, 21, 13, 19, 24, 1, 18, 14, 15],
    [2, 17, 21, 19, 13, 6, 20, 9, 3, 12, 8, 4, 11, 23, 7, 15, 14, 1, 24, 18, 10, 5, 25, 16, 22],
    [8, 7, 23, 4, 11, 22, 10, 25, 5, 16, 15, 18, 24, 1, 14, 6, 12, 3, 20, 9, 13, 21, 19, 17, 2],
    [15, 14, 1, 18, 24, 2, 13, 19, 21, 17, 6, 9, 20, 3, 12, 22, 16, 5, 10, 25, 11, 23, 4, 7, 8],
    [22, 16, 5, 25, 10, 15, 24, 18, 1, 14, 2, 19, 13, 21, 17, 8, 7, 23, 11, 4, 20, 3, 9, 12, 6],
    [24, 25, 14, 15, 5, 13, 1, 2, 17, 18, 20, 6, 21, 12, 19, 10, 4, 16, 23, 22, 3, 7, 8, 9, 11],
    [20, 19, 12, 6, 21, 11, 3, 8, 7, 9, 10, 22, 23, 16, 4, 13, 18, 17, 1, 2, 5, 14, 15, 25, 24],
    [13, 18, 17, 2, 1, 20, 21, 6, 12, 19, 11, 8, 3, 7, 9, 24, 25, 14, 5, 15, 23, 16, 22, 4, 10],
    [10, 4, 16, 22, 23, 24, 5, 15, 14, 25, 13, 2, 1, 17, 18, 11, 9, 7, 3, 8, 21, 12, 6, 19, 20],
    [11, 9, 7, 8, 3, 10, 23, 22, 16, 4, 24, 15, 5, 14, 25, 20, 19, 12, 21, 6, 1, 17, 2, 18, 13],
    [3, 6, 9, 11, 12, 23, 7, 10, 4, 8, 5, 24, 16, 25, 22, 21, 2, 19, 17, 20, 14, 18, 13, 15, 1],
    [23, 8, 4, 10, 7, 5, 16, 24, 25, 22, 1, 13, 14, 18, 15, 3, 6, 9, 12, 11, 17, 19, 20, 2, 21],
    [21, 2, 19, 20, 17, 3, 12, 11, 9, 6, 23, 10, 7, 4, 8, 1, 15, 18, 14, 13, 16, 25, 24, 22, 5],
    [1, 15, 18, 13, 14, 21, 17, 20, 19, 2, 3, 11, 12, 9, 6, 5, 22, 25, 16, 24, 7, 4, 10, 8, 23],
    [5, 22, 25, 24, 16, 1, 14, 13, 18, 15, 21, 20, 17, 19, 2, 23, 8, 4, 7, 10, 12, 9, 11, 6, 3],
    [14, 24, 15, 1, 25, 17, 18, 21, 2, 13, 12, 3, 19, 6, 20, 16, 10, 22, 4, 5, 9, 8, 23, 11, 7],
    [17, 13, 2, 21, 18, 12, 19, 3, 6, 20, 7, 23, 9, 8, 11, 14, 24, 15, 25, 1, 4, 22, 5, 10, 16],
    [12, 20, 6, 3, 19, 7, 9, 23, 8, 11, 16, 5, 4, 22, 10, 17, 13, 2, 18, 21, 25, 15, 1, 24, 14],
    [7, 11, 8, 23, 9, 16, 4, 5, 22, 10, 14, 1, 25, 15, 24, 12, 20, 6, 19, 3, 18, 2, 21, 13, 17],
    [16, 10, 22, 5, 4, 14, 25, 1, 15, 24, 17, 21, 18, 2, 13, 7, 11, 8, 9, 23, 19, 6, 3, 20, 12],
    [18, 1, 13, 17, 15, 19, 2, 12, 20, 21, 9, 7, 6, 11, 3, 25, 5, 24, 22, 14, 8, 10, 16, 23, 4],
    [9, 3, 11, 7, 6, 4, 8, 16, 10, 23, 25, 14, 22, 24, 5, 19, 21, 20, 2, 12, 15, 13, 17, 1, 18],
    [19, 21, 20, 12, 2, 9, 6, 7, 11, 3, 4, 16, 8, 10, 23, 18, 1, 13, 15, 17, 22, 24, 14, 5, 25],
    [25, 5, 24, 14, 22, 18, 15, 17, 13, 1, 19, 12, 2, 20, 21, 4, 23, 10, 8, 16, 6, 11, 7, 3, 9],
    [4, 23, 10, 16, 8, 25, 22, 14, 24, 5, 18, 17, 15, 13, 1, 9, 3, 11, 6, 7, 2, 20, 12, 21, 19],
];
pub const S6_PUZZLE: [[u8; 25]; 25] = [
    [6, 0, 0, 9, 0, 8, 0, 0, 0, 7, 0, 0, 0, 0, 0, 0, 17, 0, 0, 19, 24, 0, 0, 14, 0],
    [0, 0, 0, 19, 0, 6, 20, 0, 0, 0, 0, 0, 11, 0, 0, 15, 14, 0, 0, 18, 0, 0, 25, 0, 22],
    [8, 0, 0, 0, 0, 0, 0, 25, 0, 0, 15, 0, 0, 0, 14, 0, 12, 0, 0, 0, 13, 21, 19, 17, 2],
    [0, 14, 1, 18, 24, 2, 0, 0, 0, 0, 0, 9, 0, 3, 12, 22, 0, 0, 0, 0, 11, 23, 0, 7, 0],
    [22, 0, 0, 25, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 17, 0, 0, 23, 11, 0, 0, 3, 0, 0, 0],
    [0, 0, 0, 0, 0, 13, 0, 2, 0, 0, 20, 0, 21, 0, 0, 10, 0, 0, 0, 0, 3, 7, 8, 9, 0],
    [0, 19, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 13, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 0, 0, 21, 6, 12, 0, 11, 0, 0, 7, 0, 0, 25, 14, 0, 0, 0, 0, 0, 4, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 13, 0, 0, 0, 0, 11, 0, 7, 3, 0, 21, 0, 0, 19, 0],
    [0, 0, 0, 0, 0, 0, 0, 22, 0, 0, 0, 0, 0, 0, 25, 0, 19, 12, 0, 0, 1, 0, 0, 0, 13],
    [3, 0, 0, 0, 12, 0, 0, 0, 4, 8, 0, 0, 16, 25, 22, 0, 0, 19, 0, 0, 0, 0, 13, 0, 0],
    [23, 8, 4, 10, 0, 0, 16, 0, 25, 22, 1, 13, 0, 0, 0, 0, 6, 0, 0, 11, 0, 0, 0, 2, 0],
    [21, 2, 19, 20, 0, 3, 0, 0, 0, 0, 23, 10, 0, 4, 0, 1, 15, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 15, 0, 0, 0, 21, 0, 20, 19, 0, 0, 0, 12, 0, 0, 0, 0, 25, 0, 24, 0, 0, 0, 8, 0],
    [0, 0, 0, 0, 0, 0, 0, 13, 0, 0, 21, 0, 17, 0, 0, 23, 0, 0, 0, 0, 0, 9, 11, 0, 0],
    [0, 0, 0, 0, 25, 0, 18, 0, 2, 0, 12, 3, 0, 0, 20, 0, 0, 22, 0, 0, 0, 8, 23, 0, 7],
    [17, 0, 0, 0, 0, 12, 19, 0, 6, 20, 7, 0, 9, 8, 0, 14, 24, 0, 0, 1, 0, 0, 0, 0, 16],
    [0, 0, 6, 3, 19, 7, 0, 0, 0, 11, 16, 0, 0, 0, 0, 17, 13, 2, 0, 0, 0, 0, 0, 0, 14],
    [0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0, 25, 0, 0, 0, 20, 0, 0, 0, 0, 2, 21, 13, 17],
    [0, 0, 22, 5, 4, 14, 0, 0, 0, 24, 17, 0, 0, 2, 0, 7, 0, 8, 9, 0, 19, 0, 3, 0, 12],
    [0, 0, 0, 0, 15, 0, 0, 12, 0, 0, 0, 0, 6, 0, 3, 0, 0, 0, 0, 0, 8, 0, 16, 0, 0],
    [0, 0, 0, 0, 6, 0, 0, 16, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 13, 0, 0, 18],
    [0, 21, 20, 0, 0, 0, 0, 0, 11, 3, 0, 0, 0, 10, 0, 18, 0, 0, 15, 0, 22, 24, 0, 5, 25],
    [0, 5, 24, 0, 0, 18, 0, 17, 0, 0, 0, 12, 2, 0, 21, 0, 0, 10, 8, 0, 0, 11, 7, 0, 9],
    [0, 0, 0, 16, 0, 25, 22, 0, 0, 5, 0, 17, 15, 13, 0, 0, 0, 0, 0, 7, 2, 0, 0, 0, 0],
];
