//! Sparse, candidate-driven Conway's Game of Life (B3/S23) on a wraparound
//! `i64` plane.

pub mod error;
pub mod io;
pub mod sparselife;
pub use error::{RuleParseError, SeedError};
pub use sparselife::{RowOrder, Rule, SparseLife, SparseLifeConfig};
