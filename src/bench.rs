//! Micro-benchmark harness: runs a solver repeatedly against a fixed board,
//! collects timing statistics, and orchestrates multi-worker parallel runs
//! that share no mutable state.

use std::thread;
use std::time::Instant;

use log::info;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::solver::{Algorithm, Solver};

/// Run count, warmup count, worker count, and verbosity for one benchmark
/// invocation. This is the harness's entire configuration surface — there
/// is no env var or file format backing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub runs: usize,
    pub warmup: usize,
    pub workers: usize,
    pub verbose: bool,
}

impl BenchmarkConfig {
    pub fn new(runs: usize, warmup: usize, workers: usize, verbose: bool) -> Self {
        Self {
            runs: runs.max(1),
            warmup,
            workers: workers.max(1),
            verbose,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            warmup: 1,
            workers: 1,
            verbose: false,
        }
    }
}

/// Timing statistics for one run of `runs` timed solves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchStats {
    pub times_ms: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
    pub throughput: f64,
}

impl BenchStats {
    fn from_times(mut times_ms: Vec<f64>) -> Self {
        assert!(!times_ms.is_empty(), "cannot summarize zero timed runs");

        times_ms.sort_by(|a, b| a.partial_cmp(b).expect("solve time was NaN"));

        let min = times_ms[0];
        let max = times_ms[times_ms.len() - 1];
        let mean = times_ms.iter().sum::<f64>() / times_ms.len() as f64;
        let median = median_of(&times_ms);
        let stddev = sample_stddev(&times_ms, mean);
        let throughput = if mean > 0.0 { 1000.0 / mean } else { f64::INFINITY };

        Self {
            times_ms,
            min,
            max,
            mean,
            median,
            stddev,
            throughput,
        }
    }
}

fn median_of(sorted: &[f64]) -> f64 {
    let n = sorted.len();

    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

fn sample_stddev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;

    variance.sqrt()
}

/// Per-worker statistics plus the wall-clock view of the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiWorkerStats {
    pub per_worker: Vec<BenchStats>,
    pub wall_time_ms: f64,
    pub total_throughput: f64,
}

/// Runs `config.warmup` untimed solves followed by `config.runs` timed
/// solves of `algorithm` against `board`, on the current thread.
pub fn run_single(algorithm: Algorithm, board: &Board, config: BenchmarkConfig) -> BenchStats {
    let solver = algorithm.build();

    for _ in 0..config.warmup {
        let _ = solver.solve(board);
    }

    let mut times_ms = Vec::with_capacity(config.runs);

    for i in 0..config.runs {
        let start = Instant::now();
        let result = solver.solve(board);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        times_ms.push(elapsed);

        if config.verbose {
            info!(
                "{} run {}/{}: solved={} in {:.3} ms",
                algorithm.name(),
                i + 1,
                config.runs,
                result.solved,
                elapsed
            );
        }
    }

    BenchStats::from_times(times_ms)
}

/// Spawns `config.workers` OS threads, each building its own solver
/// instance and independently running `config.warmup` + `config.runs`
/// solves against a board shared immutably (`Board` is cheap to clone; each
/// worker gets its own copy, so no mutable state crosses a thread
/// boundary). Wall-clock time spans from the first worker's start to the
/// last worker's finish.
pub fn run_multi(algorithm: Algorithm, board: &Board, config: BenchmarkConfig) -> MultiWorkerStats {
    let wall_start = Instant::now();

    let per_worker = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.workers)
            .map(|_| {
                let board = board.clone();
                scope.spawn(move || run_single(algorithm, &board, config))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("benchmark worker thread panicked"))
            .collect::<Vec<_>>()
    });

    let wall_time_ms = wall_start.elapsed().as_secs_f64() * 1000.0;
    let total_solves = (config.workers * config.runs) as f64;
    let total_throughput = if wall_time_ms > 0.0 {
        total_solves / (wall_time_ms / 1000.0)
    } else {
        f64::INFINITY
    };

    MultiWorkerStats {
        per_worker,
        wall_time_ms,
        total_throughput,
    }
}

/// Runs every algorithm in `algorithms` against the same board/config and
/// returns the per-algorithm stats alongside a rendered side-by-side table.
pub fn compare(
    algorithms: &[Algorithm],
    board: &Board,
    config: BenchmarkConfig,
) -> (Vec<(Algorithm, BenchStats)>, String) {
    let results: Vec<(Algorithm, BenchStats)> = algorithms
        .iter()
        .map(|&algo| (algo, run_single(algo, board, config)))
        .collect();

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Algorithm"),
        Cell::new("Min (ms)"),
        Cell::new("Max (ms)"),
        Cell::new("Mean (ms)"),
        Cell::new("Median (ms)"),
        Cell::new("Stddev (ms)"),
        Cell::new("Throughput (solves/s)"),
    ]));

    for (algo, stats) in &results {
        table.add_row(Row::new(vec![
            Cell::new(algo.name()),
            Cell::new(&format!("{:.3}", stats.min)),
            Cell::new(&format!("{:.3}", stats.max)),
            Cell::new(&format!("{:.3}", stats.mean)),
            Cell::new(&format!("{:.3}", stats.median)),
            Cell::new(&format!("{:.3}", stats.stddev)),
            Cell::new(&format!("{:.2}", stats.throughput)),
        ]));
    }

    (results, table.to_string())
}
