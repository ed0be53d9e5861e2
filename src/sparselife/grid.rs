//! Row-keyed sparse store for one generation of live cells.
//!
//! Rows live in a `BTreeMap` so viewport rendering can walk them in either
//! direction over a bounded range. Columns inside a row keep insertion order;
//! sorting happens on demand for the renderer.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::coord::Coord;

/// Direction for walking occupied rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    Ascending,
    Descending,
}

#[derive(Clone, Debug, Default)]
pub struct CellGrid {
    rows: BTreeMap<i64, Vec<i64>>,
    population: u64,
}

impl CellGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `(x, y)`. Returns `false` if it was already present.
    pub fn insert(&mut self, x: i64, y: i64) -> bool {
        let row = self.rows.entry(y).or_default();
        if row.contains(&x) {
            return false;
        }
        row.push(x);
        self.population += 1;
        true
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.rows.get(&y).is_some_and(|row| row.contains(&x))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.population = 0;
    }

    #[inline]
    pub fn population(&self) -> u64 {
        self.population
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.population == 0
    }

    /// Columns of row `y` in insertion order. Empty when the row has no cells.
    pub fn row(&self, y: i64) -> &[i64] {
        self.rows.get(&y).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Columns of row `y`, ascending.
    pub fn row_sorted(&self, y: i64) -> Vec<i64> {
        let mut cols = self.row(y).to_vec();
        cols.sort_unstable();
        cols
    }

    /// Occupied rows inside `range`, walked in `order`.
    pub fn rows_in(&self, range: RangeInclusive<i64>, order: RowOrder) -> Vec<i64> {
        if range.start() > range.end() {
            return Vec::new();
        }
        let keys = self.rows.range(range).map(|(&y, _)| y);
        match order {
            RowOrder::Ascending => keys.collect(),
            RowOrder::Descending => keys.rev().collect(),
        }
    }

    /// Every live cell, rows ascending and columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows
            .iter()
            .flat_map(|(&y, cols)| cols.iter().map(move |&x| (x, y)))
    }
}
