//! Change-candidate queue.
//!
//! Holds every coordinate that may flip state next generation: each newly
//! alive cell and its eight neighbours. By default the queue is append-only
//! and keeps duplicates; with dedup enabled a per-generation `HashSet` filters
//! repeats without changing the order of first appearance.

use std::collections::HashSet;

use super::coord::{Coord, neighbors};

pub struct CandidateQueue {
    queue: Vec<Coord>,
    seen: Option<HashSet<Coord>>,
}

impl CandidateQueue {
    pub fn new(dedup: bool) -> Self {
        Self {
            queue: Vec::new(),
            seen: dedup.then(HashSet::new),
        }
    }

    #[inline]
    pub fn push(&mut self, x: i64, y: i64) {
        if let Some(seen) = self.seen.as_mut() {
            if !seen.insert((x, y)) {
                return;
            }
        }
        self.queue.push((x, y));
    }

    /// Queue `(x, y)` followed by its eight neighbours.
    pub fn push_with_neighbors(&mut self, x: i64, y: i64) {
        self.push(x, y);
        for (nx, ny) in neighbors(x, y) {
            self.push(nx, ny);
        }
    }

    /// Move the queued coordinates out, leaving the queue empty.
    ///
    /// The emptied queue is pre-sized to the outgoing one: consecutive
    /// generations of a settled population queue roughly the same number of
    /// cells. The dedup set keeps its capacity across `clear`.
    pub fn take(&mut self) -> Vec<Coord> {
        if let Some(seen) = self.seen.as_mut() {
            seen.clear();
        }
        let capacity = self.queue.len();
        std::mem::replace(&mut self.queue, Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.queue
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
