pub mod unit;

use anyhow::{anyhow, Context};
use std::{fmt, iter::Peekable};

/// √3, spelled out so every grid agrees on the exact same bits.
pub const SQRT_3: f64 = 1.7320508075688772;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, and outputs the value of the expression after logging the
/// elapsed time at the given level (debug by default).
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}

/// Calculate the number of hexes in a hex disc based on its radius. Radius 0
/// means 1 hex, 1 is 7 hexes, 2 is 19, etc.
pub fn disc_len(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Divide by 3 and round to the nearest integer. `n / 3` is never exactly
/// halfway between two integers, so there are no ties to break.
pub fn round_third(n: i32) -> i32 {
    (n + 1).div_euclid(3)
}

/// Rotate a vector of cube-style coordinates (three axes, 120° apart) by
/// `n * 60°` counter-clockwise. This is the linear part shared by every
/// three-axis grid; grids whose coordinates don't sum to zero fix up the
/// offset afterwards.
pub(crate) fn rotate_axes([a, b, c]: [i32; 3], n: i32) -> [i32; 3] {
    match n.rem_euclid(6) {
        0 => [a, b, c],
        1 => [-b, -c, -a],
        2 => [c, a, b],
        3 => [-a, -b, -c],
        4 => [b, c, a],
        _ => [-c, -a, -b],
    }
}

/// Parse a comma-separated list of integer coordinates, optionally wrapped in
/// parens. Accepts both `1,0,-1` and `(1, 0, -1)`, so anything printed via
/// `Display` on a cell can be parsed back.
pub(crate) fn parse_coords<const N: usize>(
    s: &str,
) -> anyhow::Result<[i32; N]> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);
    let values = inner
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .with_context(|| format!("invalid coordinate {:?}", part))
        })
        .collect::<anyhow::Result<Vec<i32>>>()?;
    let len = values.len();
    values.try_into().map_err(|_| {
        anyhow!("expected {} coordinates, got {} in {:?}", N, len, s)
    })
}

/// Iterator adapter that drops consecutive duplicate items. Used when mapping
/// a fine-grained traversal onto a coarser grid, where several steps in a row
/// can land in the same coarse cell.
pub struct DedupConsecutive<I: Iterator> {
    inner: Peekable<I>,
}

// Peekable buffers an item, so these need bounds on the item type that a
// derive wouldn't add
impl<I> Clone for DedupConsecutive<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I> fmt::Debug for DedupConsecutive<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DedupConsecutive")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<I> DedupConsecutive<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
        }
    }
}

impl<I> Iterator for DedupConsecutive<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        while self.inner.next_if_eq(&item).is_some() {}
        Some(item)
    }
}
