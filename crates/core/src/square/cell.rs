use crate::{util, GridCell};
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A square in a regular square grid. Square `(x, y)` covers the area from
/// `(x, y)` to `(x + 1, y + 1)`, in units of the edge length.
///
/// Any pair of integers is a valid square, so unlike the other cell types
/// there's nothing to validate.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct SquareCell {
    pub x: i32,
    pub y: i32,
}

impl SquareCell {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn coords(&self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Rotate `n * 90°` counter-clockwise about another square
    pub fn rotate_about(self, about: Self, n: i32) -> Self {
        about + (self - about).rotate(n)
    }
}

impl GridCell for SquareCell {
    const ROTATIONS: i32 = 4;

    /// Right, up, left, down
    fn neighbours(self) -> impl Iterator<Item = Self> {
        let Self { x, y } = self;
        [
            Self::new(x + 1, y),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
            Self::new(x, y - 1),
        ]
        .into_iter()
    }

    fn distance_to(self, other: Self) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// A diamond of squares. Enumerated column by column (by x), bottom to
    /// top within each column.
    fn disc(self, radius: u32) -> impl Iterator<Item = Self> {
        let r = radius as i32;
        (-r..=r).flat_map(move |dx| {
            let h = r - dx.abs();
            (-h..=h).map(move |dy| Self::new(self.x + dx, self.y + dy))
        })
    }

    fn rotate(self, n: i32) -> Self {
        let Self { x, y } = self;
        match n.rem_euclid(4) {
            0 => Self::new(x, y),
            1 => Self::new(-y, x),
            2 => Self::new(-x, -y),
            _ => Self::new(y, -x),
        }
    }

    fn reflect(self) -> Self {
        Self::new(self.x, -self.y)
    }

    fn reflect_y_axis(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

impl From<[i32; 2]> for SquareCell {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<SquareCell> for [i32; 2] {
    fn from(cell: SquareCell) -> Self {
        cell.coords()
    }
}

impl FromStr for SquareCell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(util::parse_coords::<2>(s)?.into())
    }
}
