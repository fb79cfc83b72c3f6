use crate::{
    util::{self, rotate_axes},
    GridCell, TriCell,
};
use anyhow::ensure;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};
use strum::{Display as StrumDisplay, EnumIter};

/// A cell in a trihexagonal grid (aka a Kagome lattice): regular hexagons
/// with a triangle in each gap between them.
///
/// ```text
/// __ ____ __ ____ __ ____
/// \  /    \  /    \  /    \
///  \/      \/      \/      \
///   \      /\      /\      /\
///    \____/__\____/__\____/__\
/// ```
///
/// Each cell is identified by three coordinates a, b and c, with b selecting
/// the row and a/c the two diagonals, just like [TriCell]. `a + b + c` is
/// always -1, 0 or 1:
///
/// - 0 means the cell is a hexagon
/// - 1 means it's an upward-pointing triangle
/// - -1 means it's a downward-pointing triangle
///
/// Every cell is made of triangles from a triangle grid with the same edge
/// length: 6 for a hexagon, 1 for a triangle. In that triangle grid, the
/// center of a cell sits at `(2a, 2b, 2c)`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.a", "self.b", "self.c")]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct TrihexCell {
    a: i32,
    b: i32,
    c: i32,
}

/// The shape of a trihex cell
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
pub enum TrihexCellType {
    Hex,
    TriUp,
    TriDown,
}

impl TrihexCell {
    pub const ORIGIN: Self = Self::new_unchecked(0, 0, 0);

    /// Construct a cell, checking that the coordinates sum to -1, 0 or 1
    pub fn new(a: i32, b: i32, c: i32) -> anyhow::Result<Self> {
        let sum = i64::from(a) + i64::from(b) + i64::from(c);
        ensure!(
            (-1..=1).contains(&sum),
            "trihex coordinates must sum to -1, 0 or 1, \
            but ({}, {}, {}) sums to {}",
            a,
            b,
            c,
            sum
        );
        Ok(Self { a, b, c })
    }

    pub(crate) const fn new_unchecked(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    /// Slide arbitrary coordinates along `(1, 1, 1)` until they sum to -1,
    /// 0 or 1. For the doubled triangle coordinates that trihex centers live
    /// on, this doesn't change the point being represented.
    fn normalize([a, b, c]: [i32; 3]) -> Self {
        let k = (a + b + c + 1).div_euclid(3);
        Self::new_unchecked(a - k, b - k, c - k)
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

    pub fn cell_type(&self) -> TrihexCellType {
        match self.a + self.b + self.c {
            0 => TrihexCellType::Hex,
            1 => TrihexCellType::TriUp,
            _ => TrihexCellType::TriDown,
        }
    }

    /// The triangles that make up this cell, on a triangle grid with the
    /// same edge length. A hexagon has 6, listed counter-clockwise like
    /// [HexCell::tris](crate::HexCell::tris); a triangle has just 1.
    pub fn tris(self) -> Vec<TriCell> {
        let [a, b, c] = self.coords().map(|n| n * 2);
        match self.cell_type() {
            TrihexCellType::Hex => vec![
                TriCell::new_unchecked(a + 1, b, c),
                TriCell::new_unchecked(a + 1, b + 1, c),
                TriCell::new_unchecked(a, b + 1, c),
                TriCell::new_unchecked(a, b + 1, c + 1),
                TriCell::new_unchecked(a, b, c + 1),
                TriCell::new_unchecked(a + 1, b, c + 1),
            ],
            TrihexCellType::TriUp => vec![TriCell::new_unchecked(a, b, c)],
            // (2a, 2b, 2c) sums to -2 here, shift it into range
            TrihexCellType::TriDown => {
                vec![TriCell::new_unchecked(a + 1, b + 1, c + 1)]
            }
        }
    }

    /// Rotate `n * 60°` counter-clockwise about the center of another cell.
    /// Hexagon centers have 6-fold symmetry so any `n` works for them, but
    /// triangle centers only have 3-fold symmetry. Returns `None` if the
    /// rotated shape doesn't land exactly on a cell.
    pub fn rotate_about(self, about: Self, n: i32) -> Option<Self> {
        let [da, db, dc] = rotate_axes(
            [self.a - about.a, self.b - about.b, self.c - about.c],
            n,
        );
        let rotated =
            Self::normalize([about.a + da, about.b + db, about.c + dc]);
        // Hexagons stay hexagons, while triangles flip on every 60° step
        let expected = if n.rem_euclid(2) == 0 {
            self.cell_type()
        } else {
            self.rotate(1).cell_type()
        };
        if rotated.cell_type() == expected {
            Some(rotated)
        } else {
            None
        }
    }
}

impl GridCell for TrihexCell {
    const ROTATIONS: i32 = 6;

    fn neighbours(self) -> impl Iterator<Item = Self> {
        let Self { a, b, c } = self;
        // Hexagons border 3 down triangles then 3 up triangles. Each
        // triangle only borders the hexagons on one side of that list.
        let (skip, take) = match self.cell_type() {
            TrihexCellType::Hex => (0, 6),
            TrihexCellType::TriUp => (0, 3),
            TrihexCellType::TriDown => (3, 3),
        };
        [
            Self::new_unchecked(a - 1, b, c),
            Self::new_unchecked(a, b - 1, c),
            Self::new_unchecked(a, b, c - 1),
            Self::new_unchecked(a + 1, b, c),
            Self::new_unchecked(a, b + 1, c),
            Self::new_unchecked(a, b, c + 1),
        ]
        .into_iter()
        .skip(skip)
        .take(take)
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
                // One candidate for each of the three cell types
                [-1, 0, 1]
                    .into_iter()
                    .map(move |sum| sum - (a + b + c + da + db))
                    .filter(move |dc| da.abs() + db.abs() + dc.abs() <= r)
                    .map(move |dc| Self::new_unchecked(a + da, b + db, c + dc))
            })
        })
    }

    fn rotate(self, n: i32) -> Self {
        let [a, b, c] = rotate_axes(self.coords(), n);
        Self::new_unchecked(a, b, c)
    }

    fn reflect(self) -> Self {
        Self::new_unchecked(-self.c, -self.b, -self.a)
    }

    fn reflect_y_axis(self) -> Self {
        Self::new_unchecked(self.c, self.b, self.a)
    }
}

/// Find the trihex cell containing a triangle, where the triangle grid has
/// the same edge length as the trihex grid
impl From<TriCell> for TrihexCell {
    fn from(tri: TriCell) -> Self {
        let [a, b, c] = tri.coords().map(|n| n.div_euclid(2));
        Self::new_unchecked(a, b, c)
    }
}

impl TryFrom<[i32; 3]> for TrihexCell {
    type Error = anyhow::Error;

    fn try_from([a, b, c]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(a, b, c)
    }
}

impl From<TrihexCell> for [i32; 3] {
    fn from(cell: TrihexCell) -> Self {
        cell.coords()
    }
}

impl FromStr for TrihexCell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [a, b, c] = util::parse_coords(s)?;
        Self::new(a, b, c)
    }
}
