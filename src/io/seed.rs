//! Seed input: one `"<x> <y>"` pair per line, ended by an empty line.

use std::io::BufRead;
use std::num::IntErrorKind;

use tracing::trace;

use crate::error::{Axis, Result, SeedError};
use crate::sparselife::{Coord, SparseLife};

fn parse_axis(token: &str, axis: Axis) -> Result<i64> {
    token.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SeedError::OutOfRange {
            axis,
            token: token.to_string(),
        },
        _ => SeedError::InvalidToken {
            token: token.to_string(),
        },
    })
}

/// Parse a single `"<x> <y>"` record. Exactly one space separates the tokens.
pub fn parse_seed_line(line: &str) -> Result<Coord> {
    let malformed = || SeedError::Malformed {
        line: line.to_string(),
    };
    let (x_token, y_token) = line.split_once(' ').ok_or_else(malformed)?;
    if y_token.contains(' ') {
        return Err(malformed());
    }
    Ok((parse_axis(x_token, Axis::X)?, parse_axis(y_token, Axis::Y)?))
}

/// Feed seed records from `reader` into `engine` until an empty line or EOF.
///
/// A single trailing `\r` is dropped from each line, so CRLF input works.
///
/// Stops at the first bad record. Cells added before it stay in the engine;
/// callers are expected to abandon the run. Returns the number of records
/// applied.
pub fn read_seed<R: BufRead>(reader: R, engine: &mut SparseLife) -> Result<usize> {
    let mut applied = 0usize;
    for line in reader.lines() {
        let line = line?;
        let record = line.strip_suffix('\r').unwrap_or(&line);
        if record.is_empty() {
            break;
        }
        let (x, y) = parse_seed_line(record)?;
        trace!(x, y, "seed cell");
        engine.add_alive_cell(x, y);
        applied += 1;
    }
    Ok(applied)
}
