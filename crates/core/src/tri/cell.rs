use crate::{
    util::{self, rotate_axes},
    GridCell,
};
use anyhow::ensure;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};
use strum::{Display as StrumDisplay, EnumIter};

/// A triangle in an up/down triangle grid. Each triangle is identified by
/// three coordinates, a, b and c. b selects the row, while a and c select
/// the two diagonals. `a + b + c` is always either 1 or 2:
///
/// - 2 means the triangle points up
/// - 1 means the triangle points down
///
/// The origin is a vertex, with six triangles around it:
/// `(1, 0, 0)`, `(1, 1, 0)`, `(0, 1, 0)`, `(0, 1, 1)`, `(0, 0, 1)`,
/// `(1, 0, 1)`.
///
/// Neighbours of an up triangle are found by subtracting 1 from one
/// coordinate, and neighbours of a down triangle by adding 1.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.a", "self.b", "self.c")]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct TriCell {
    a: i32,
    b: i32,
    c: i32,
}

/// Which way a triangle points
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TriOrientation {
    Up,
    Down,
}

impl TriCell {
    /// Construct a triangle, checking that the coordinates sum to 1 or 2
    pub fn new(a: i32, b: i32, c: i32) -> anyhow::Result<Self> {
        let sum = i64::from(a) + i64::from(b) + i64::from(c);
        ensure!(
            sum == 1 || sum == 2,
            "triangle coordinates must sum to 1 or 2, \
            but ({}, {}, {}) sums to {}",
            a,
            b,
            c,
            sum
        );
        Ok(Self { a, b, c })
    }

    /// Construct a triangle without checking the coordinate sum. The caller
    /// must guarantee `a + b + c` is 1 or 2.
    pub(crate) const fn new_unchecked(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    /// Move an arbitrary coordinate triple onto a triangle by sliding it
    /// along `(1, 1, 1)`, which doesn't change the point it represents.
    /// Returns `None` for triples that represent a lattice vertex (sum
    /// divisible by 3), since those aren't the center of any triangle.
    pub(crate) fn normalize([a, b, c]: [i32; 3]) -> Option<Self> {
        let sum = a + b + c;
        if sum.rem_euclid(3) == 0 {
            return None;
        }
        let k = (sum - 1).div_euclid(3);
        Some(Self::new_unchecked(a - k, b - k, c - k))
    }

    pub fn a(&self) -> i32 {
        self.a
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    pub fn c(&self) -> i32 {
        self.c
    }

    pub fn coords(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }

    /// Is this an upward-pointing triangle?
    pub fn points_up(&self) -> bool {
        self.a + self.b + self.c == 2
    }

    pub fn orientation(&self) -> TriOrientation {
        if self.points_up() {
            TriOrientation::Up
        } else {
            TriOrientation::Down
        }
    }

    /// Rotate `n * 60°` counter-clockwise about the center of another
    /// triangle. Only 120° turns map the triangle lattice onto itself around
    /// a triangle's center, so this returns `None` whenever the rotated
    /// shape doesn't land exactly on a triangle (including every odd `n`).
    pub fn rotate_about(self, about: Self, n: i32) -> Option<Self> {
        let [da, db, dc] = rotate_axes(
            [self.a - about.a, self.b - about.b, self.c - about.c],
            n,
        );
        let rotated =
            Self::normalize([about.a + da, about.b + db, about.c + dc])?;

        // A 60° turn flips a triangle over, so the cell we landed in has to
        // point the other way for the shapes to line up
        let flipped = n.rem_euclid(2) == 1;
        if rotated.points_up() == (self.points_up() != flipped) {
            Some(rotated)
        } else {
            None
        }
    }
}

impl GridCell for TriCell {
    const ROTATIONS: i32 = 6;

    fn neighbours(self) -> impl Iterator<Item = Self> {
        let step = if self.points_up() { -1 } else { 1 };
        let Self { a, b, c } = self;
        [
            Self::new_unchecked(a + step, b, c),
            Self::new_unchecked(a, b + step, c),
            Self::new_unchecked(a, b, c + step),
        ]
        .into_iter()
    }

    fn distance_to(self, other: Self) -> u32 {
        (self.a - other.a).unsigned_abs()
            + (self.b - other.b).unsigned_abs()
            + (self.c - other.c).unsigned_abs()
    }

    fn disc(self, radius: u32) -> impl Iterator<Item = Self> {
        let r = radius as i32;
        let Self { a, b, c } = self;
        (-r..=r).flat_map(move |da| {
            (-r..=r).flat_map(move |db| {
                // For each (da, db) there are at most two values of dc that
                // land on a triangle
                let dc = 1 - (a + b + c + da + db);
                [dc, dc + 1]
                    .into_iter()
                    .filter(move |dc| da.abs() + db.abs() + dc.abs() <= r)
                    .map(move |dc| Self::new_unchecked(a + da, b + db, c + dc))
            })
        })
    }

    fn rotate(self, n: i32) -> Self {
        let Self { a, b, c } = self;
        match n.rem_euclid(6) {
            0 => Self::new_unchecked(a, b, c),
            1 => Self::new_unchecked(1 - b, 1 - c, 1 - a),
            2 => Self::new_unchecked(c, a, b),
            3 => Self::new_unchecked(1 - a, 1 - b, 1 - c),
            4 => Self::new_unchecked(b, c, a),
            _ => Self::new_unchecked(1 - c, 1 - a, 1 - b),
        }
    }

    fn reflect(self) -> Self {
        Self::new_unchecked(1 - self.c, 1 - self.b, 1 - self.a)
    }

    fn reflect_y_axis(self) -> Self {
        Self::new_unchecked(self.c, self.b, self.a)
    }
}

impl TryFrom<[i32; 3]> for TriCell {
    type Error = anyhow::Error;

    fn try_from([a, b, c]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(a, b, c)
    }
}

impl From<TriCell> for [i32; 3] {
    fn from(cell: TriCell) -> Self {
        cell.coords()
    }
}

impl FromStr for TriCell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [a, b, c] = util::parse_coords(s)?;
        Self::new(a, b, c)
    }
}
