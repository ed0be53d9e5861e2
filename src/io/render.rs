//! ASCII viewport around the origin.
//!
//! Each column takes two characters, the cell marker sitting in the second.
//! Row 0 is drawn with dashes and column 0 with `|`; the positive end of both
//! axes is labelled with the half-width. Runs of empty rows are emitted
//! without consulting the engine.

use crate::sparselife::{RowOrder, SparseLife};

pub const DEFAULT_HALF_WIDTH: i64 = 25;
/// Widest window a `Viewport` will draw; wider requests are clamped.
pub const MAX_HALF_WIDTH: i64 = 1_000;
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    half_width: i64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_WIDTH)
    }
}

impl Viewport {
    /// Half-widths outside `1..=MAX_HALF_WIDTH` are clamped into it.
    pub fn new(half_width: i64) -> Self {
        Self {
            half_width: half_width.clamp(1, MAX_HALF_WIDTH),
        }
    }

    pub fn half_width(&self) -> i64 {
        self.half_width
    }

    #[inline]
    fn margin(&self) -> String {
        "  ".repeat(self.half_width as usize)
    }

    /// Draw the window `[-half_width, half_width]` on both axes.
    pub fn render(&self, engine: &SparseLife) -> String {
        let hw = self.half_width;
        let mut out = String::new();
        out.push_str(&format!("{} {hw}\n", self.margin()));

        let mut last_y = hw.saturating_add(1);
        for y in engine.rows_in(-hw..=hw, RowOrder::Descending) {
            self.empty_rows(&mut out, last_y, y);
            self.row(&mut out, y, &engine.row_columns_sorted(y));
            last_y = y;
        }
        self.empty_rows(&mut out, last_y, hw.saturating_add(1).saturating_neg());
        out
    }

    /// Rows strictly between `last_y` and `next_y`, inserting the x-axis when
    /// the gap spans row 0.
    fn empty_rows(&self, out: &mut String, last_y: i64, next_y: i64) {
        if last_y > 0 && next_y < 0 {
            self.empty_rows(out, last_y, 0);
            self.x_axis(out);
            self.empty_rows(out, 0, next_y);
            return;
        }
        let margin = self.margin();
        for _ in 1..(last_y - next_y) {
            out.push_str(&margin);
            out.push_str(" |\n");
        }
    }

    fn x_axis(&self, out: &mut String) {
        let hw = self.half_width;
        out.push_str(&"--".repeat((2 * hw + 1) as usize));
        out.push_str(&format!(" {hw}\n"));
    }

    /// One occupied row. On row 0 every blank is a dash, including the one in
    /// front of the y-axis `|` when the axis falls between two cells, so an
    /// axis crossing there reads `-|` rather than ` |`.
    fn row(&self, out: &mut String, y: i64, columns: &[i64]) {
        let hw = self.half_width;
        let blank = if y == 0 { '-' } else { ' ' };
        let pad = |out: &mut String| {
            out.push(blank);
            out.push(blank);
        };

        let mut last_x = hw.saturating_add(1).saturating_neg();
        for &x in columns.iter().filter(|&&x| (-hw..=hw).contains(&x)) {
            if x > 0 && last_x < 0 {
                while last_x < -1 {
                    pad(out);
                    last_x += 1;
                }
                out.push(blank);
                out.push('|');
                last_x += 1;
            }
            while last_x < x - 1 {
                pad(out);
                last_x += 1;
            }
            out.push(blank);
            out.push('*');
            last_x += 1;
        }

        while last_x < -1 {
            pad(out);
            last_x += 1;
        }
        if last_x == -1 {
            out.push(blank);
            out.push('|');
            last_x += 1;
        }
        if y == 0 {
            while last_x < hw {
                pad(out);
                last_x += 1;
            }
            out.push_str(&format!(" {hw}"));
        }
        out.push('\n');
    }
}
