//! Run-length encoded patterns.
//!
//! Only the pattern body is understood: `<n>o` is a run of live cells, `<n>b`
//! a run of dead cells, and `$` ends the row. Headers, comments, the `!`
//! terminator and anything else unrecognized are skipped, so feeding a whole
//! `.rle` file works as long as its header line contains no `b`, `o` or `$`.
//!
//! Run lengths saturate instead of overflowing, and live cells that would land
//! past `x = i32::MAX` are dropped. Huge live runs are still materialized cell
//! by cell, so untrusted input should be size-checked by the caller.

use std::convert::Infallible;
use std::str::FromStr;

use crate::grid::{Cell, CellSet};

/// Decode `pattern` into live cells, with the first row at `y = 0` and the
/// first column at `x = 0`.
pub fn parse(pattern: &str) -> CellSet {
    let mut cells = CellSet::new();
    let (mut x, mut y) = (0i32, 0i32);
    let mut count: u32 = 0;

    for c in pattern.chars() {
        match c {
            '0'..='9' => {
                let digit = c as u32 - '0' as u32;
                count = count.saturating_mul(10).saturating_add(digit);
            }
            '$' => {
                // A count before `$` is dropped
                y = y.saturating_add(1);
                x = 0;
                count = 0;
            }
            'b' => {
                x = x.saturating_add(run_length(count));
                count = 0;
            }
            'o' => {
                let last = x.saturating_add(run_length(count) - 1);
                cells.extend((x..=last).map(|cx| Cell::new(cx, y)));
                x = last.saturating_add(1);
                count = 0;
            }
            _ => {}
        }
    }

    cells
}

fn run_length(count: u32) -> i32 {
    match count {
        0 => 1,
        n => i32::try_from(n).unwrap_or(i32::MAX),
    }
}

impl FromStr for CellSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}
