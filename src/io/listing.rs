//! Live-cell listings: a human-readable line and the Life 1.06 interchange
//! format.

use crate::error::{Result, SeedError};
use crate::io::seed::parse_seed_line;
use crate::sparselife::{Coord, SparseLife};

pub const LIFE_106_HEADER: &str = "#Life 1.06";
pub const ALL_DEAD: &str = "All cells are dead.";

/// `(x, y) ` for every live cell on one line, or the all-dead sentinel.
pub fn format_alive_cells(engine: &SparseLife) -> String {
    let mut out = String::new();
    engine.for_each_live(|x, y| {
        out.push_str(&format!("({x}, {y}) "));
    });
    out.push('\n');
    if engine.is_empty() {
        out.push_str(ALL_DEAD);
        out.push('\n');
    }
    out
}

/// Life 1.06: the header line followed by one `x y` line per live cell.
pub fn format_life106(engine: &SparseLife) -> String {
    let mut out = String::with_capacity(LIFE_106_HEADER.len() + 1);
    out.push_str(LIFE_106_HEADER);
    out.push('\n');
    engine.for_each_live(|x, y| {
        out.push_str(&format!("{x} {y}\n"));
    });
    out
}

/// Read a Life 1.06 listing back into coordinates.
///
/// The first non-blank line must be the header. Later `#` lines are comments.
pub fn parse_life106(text: &str) -> Result<Vec<Coord>> {
    let mut lines = text.lines().map(str::trim_end).filter(|l| !l.is_empty());
    match lines.next() {
        Some(header) if header == LIFE_106_HEADER => {}
        other => {
            return Err(SeedError::MissingHeader {
                found: other.unwrap_or_default().to_string(),
            });
        }
    }
    lines
        .filter(|l| !l.starts_with('#'))
        .map(parse_seed_line)
        .collect()
}
