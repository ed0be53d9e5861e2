//! Coordinates on the wraparound `i64` plane.
//!
//! The plane is a torus of side 2^64: stepping past `i64::MAX` lands on
//! `i64::MIN` and vice versa. Every other value moves by a plain ±1.

pub type Coord = (i64, i64);

pub const COORD_MIN: i64 = i64::MIN;
pub const COORD_MAX: i64 = i64::MAX;

/// Next value along an axis, wrapping `COORD_MAX` to `COORD_MIN`.
#[inline(always)]
pub fn next_on_axis(v: i64) -> i64 {
    v.wrapping_add(1)
}

/// Previous value along an axis, wrapping `COORD_MIN` to `COORD_MAX`.
#[inline(always)]
pub fn prev_on_axis(v: i64) -> i64 {
    v.wrapping_sub(1)
}

/// The eight cells at Chebyshev distance 1 from `(x, y)`.
///
/// Order is west column (north, same, south), then the centre column
/// (north, south), then the east column (north, same, south). Candidate
/// queues are built in this order.
#[inline]
pub fn neighbors(x: i64, y: i64) -> [Coord; 8] {
    let px = prev_on_axis(x);
    let nx = next_on_axis(x);
    let py = prev_on_axis(y);
    let ny = next_on_axis(y);
    [
        (px, ny),
        (px, y),
        (px, py),
        (x, ny),
        (x, py),
        (nx, ny),
        (nx, y),
        (nx, py),
    ]
}
