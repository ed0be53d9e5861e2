//! Sparse population engine internals and public API.

mod candidates;
pub mod coord;
mod engine;
mod grid;
mod rules;

pub use coord::{COORD_MAX, COORD_MIN, Coord, neighbors};
pub use engine::SparseLife;
pub use engine::SparseLifeConfig;
pub use grid::RowOrder;
pub use rules::Rule;
