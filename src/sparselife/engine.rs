use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::candidates::CandidateQueue;
use super::coord::{Coord, neighbors};
use super::grid::{CellGrid, RowOrder};
use super::rules::Rule;

const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;
const PARALLEL_CHUNK_MIN: usize = 512;
const DEDUP_ENV: &str = "SPARSELIFE_DEDUP_CANDIDATES";

static PHYSICAL_CORES: OnceLock<usize> = OnceLock::new();

#[inline]
fn parse_flag(v: &str) -> Option<bool> {
    let v = v.trim();
    if v == "1" || v.eq_ignore_ascii_case("true") {
        Some(true)
    } else if v == "0" || v.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[inline]
fn dedup_from_env() -> bool {
    std::env::var(DEDUP_ENV)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(false)
}

#[inline]
fn physical_core_count() -> usize {
    *PHYSICAL_CORES.get_or_init(|| num_cpus::get_physical().max(1))
}

/// Rule evaluation is memory bound; past eight cores half of them is enough.
#[inline]
fn auto_thread_count_for_physical(physical: usize) -> usize {
    let physical = physical.max(1);
    if physical <= 8 {
        physical
    } else {
        physical.div_ceil(2).max(6)
    }
}

#[inline]
fn previously_alive_neighbors(previous: &CellGrid, x: i64, y: i64) -> u8 {
    neighbors(x, y)
        .iter()
        .filter(|&&(nx, ny)| previous.contains(nx, ny))
        .count() as u8
}

#[inline]
fn survives(previous: &CellGrid, rule: Rule, x: i64, y: i64) -> bool {
    rule.next_alive(
        previous.contains(x, y),
        previously_alive_neighbors(previous, x, y),
    )
}

/// Configuration for a `SparseLife` engine.
///
/// The default is a single-threaded engine running B3/S23 with a plain
/// (non-deduplicated) candidate queue. `SPARSELIFE_DEDUP_CANDIDATES=1` flips
/// the dedup default on.
#[derive(Clone, Debug)]
pub struct SparseLifeConfig {
    /// Threads for the rule-evaluation pool.
    /// `None` or `Some(1)` evaluates on the calling thread only; use
    /// `auto_threads` to size the pool from the machine.
    pub thread_count: Option<usize>,
    /// Minimum candidate count before evaluation fans out to the pool.
    pub parallel_threshold: usize,
    /// Drop repeated coordinates from the candidate queue.
    pub dedup_candidates: bool,
    pub rule: Rule,
}

impl Default for SparseLifeConfig {
    fn default() -> Self {
        Self {
            thread_count: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            dedup_candidates: dedup_from_env(),
            rule: Rule::conway(),
        }
    }
}

impl SparseLifeConfig {
    /// Set an explicit thread count for the evaluation pool.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }

    /// Size the evaluation pool from the number of physical cores.
    pub fn auto_threads(mut self) -> Self {
        self.thread_count = Some(auto_thread_count_for_physical(physical_core_count()));
        self
    }

    pub fn parallel_threshold(mut self, candidates: usize) -> Self {
        self.parallel_threshold = candidates;
        self
    }

    pub fn dedup_candidates(mut self, dedup: bool) -> Self {
        self.dedup_candidates = dedup;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }
}

/// Sparse Game of Life population on the wraparound `i64` plane.
///
/// Two `CellGrid` buffers alternate between "current" (being built) and
/// "previous" (read-only source for the last transition); `phase` is the
/// index of the current one. Only cells in the candidate queue are looked at
/// when advancing, so a step costs O(candidates * 8) regardless of where on
/// the plane the population sits.
pub struct SparseLife {
    grids: [CellGrid; 2],
    phase: usize,
    candidates: CandidateQueue,
    rule: Rule,
    generation: u64,
    pool: Option<rayon::ThreadPool>,
    parallel_threshold: usize,
}

impl Default for SparseLife {
    fn default() -> Self {
        Self::new()
    }
}

impl SparseLife {
    pub fn new() -> Self {
        Self::with_config(SparseLifeConfig::default())
    }

    pub fn with_config(config: SparseLifeConfig) -> Self {
        let threads = config.thread_count.unwrap_or(1).max(1);
        let pool = if threads > 1 {
            match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => Some(pool),
                Err(err) => {
                    warn!("falling back to serial evaluation: {err}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            grids: [CellGrid::new(), CellGrid::new()],
            phase: 0,
            candidates: CandidateQueue::new(config.dedup_candidates),
            rule: config.rule,
            generation: 0,
            pool,
            parallel_threshold: config.parallel_threshold,
        }
    }

    #[inline]
    fn current(&self) -> &CellGrid {
        &self.grids[self.phase]
    }

    #[inline]
    fn previous(&self) -> &CellGrid {
        &self.grids[self.phase ^ 1]
    }

    /// Mark `(x, y)` alive in the current generation.
    ///
    /// A cell that is already alive is left untouched. Otherwise the cell and
    /// all eight neighbours are queued as candidates for the next step.
    pub fn add_alive_cell(&mut self, x: i64, y: i64) {
        if !self.grids[self.phase].insert(x, y) {
            return;
        }
        self.candidates.push_with_neighbors(x, y);
    }

    pub fn add_alive_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Coord>,
    {
        for (x, y) in cells {
            self.add_alive_cell(x, y);
        }
    }

    /// Whether `(x, y)` was alive in the generation the last step read from.
    #[inline]
    pub fn was_alive_in_previous_generation(&self, x: i64, y: i64) -> bool {
        self.previous().contains(x, y)
    }

    /// Live neighbours of `(x, y)` in the previous generation.
    pub fn previously_alive_neighbor_count(&self, x: i64, y: i64) -> u8 {
        previously_alive_neighbors(self.previous(), x, y)
    }

    #[inline]
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.current().contains(x, y)
    }

    /// Advance one generation.
    pub fn iterate(&mut self) {
        self.phase ^= 1;
        self.grids[self.phase].clear();

        let candidates = self.candidates.take();
        let previous = &self.grids[self.phase ^ 1];
        let rule = self.rule;

        let next_alive: Vec<Coord> = match &self.pool {
            Some(pool) if candidates.len() >= self.parallel_threshold => pool.install(|| {
                candidates
                    .par_iter()
                    .with_min_len(PARALLEL_CHUNK_MIN)
                    .copied()
                    .filter(|&(x, y)| survives(previous, rule, x, y))
                    .collect()
            }),
            _ => candidates
                .iter()
                .copied()
                .filter(|&(x, y)| survives(previous, rule, x, y))
                .collect(),
        };

        for (x, y) in next_alive {
            self.add_alive_cell(x, y);
        }

        self.generation += 1;
        debug!(
            generation = self.generation,
            evaluated = candidates.len(),
            population = self.population(),
            next_candidates = self.candidates.len(),
            "advanced generation"
        );
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.iterate();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> u64 {
        self.current().population()
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Threads available to rule evaluation (1 when running serially).
    pub fn thread_count(&self) -> usize {
        self.pool
            .as_ref()
            .map_or(1, rayon::ThreadPool::current_num_threads)
    }

    /// Coordinates queued for evaluation by the next `iterate`.
    pub fn candidates(&self) -> &[Coord] {
        self.candidates.as_slice()
    }

    /// `(min_x, min_y, max_x, max_y)` of the live cells, or `None` when empty.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let mut min_x = i64::MAX;
        let mut min_y = i64::MAX;
        let mut max_x = i64::MIN;
        let mut max_y = i64::MIN;
        let mut seen = false;

        self.for_each_live(|x, y| {
            seen = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        });

        seen.then_some((min_x, min_y, max_x, max_y))
    }

    /// Visit every live cell once: rows ascending, columns in insertion order.
    pub fn for_each_live<F: FnMut(i64, i64)>(&self, mut f: F) {
        for (x, y) in self.current().iter() {
            f(x, y);
        }
    }

    pub fn live_cells(&self) -> Vec<Coord> {
        self.current().iter().collect()
    }

    /// Live columns of row `y`, ascending.
    pub fn row_columns_sorted(&self, y: i64) -> Vec<i64> {
        self.current().row_sorted(y)
    }

    /// Rows inside `range` holding at least one live cell, walked in `order`.
    pub fn rows_in(&self, range: RangeInclusive<i64>, order: RowOrder) -> Vec<i64> {
        self.current().rows_in(range, order)
    }
}
