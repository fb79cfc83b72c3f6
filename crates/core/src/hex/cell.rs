use crate::{
    util::{self, round_third},
    GridCell, TriCell,
};
use anyhow::ensure;
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{cmp, convert::TryFrom, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// A hex in a flat-topped hex grid. Each hex has an x, y, and z component.
/// See this page for info on how the cube coordinate system works:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
///
/// ```text
///            ___
///           /   \
///       ___/     \___
///      /   \     /   \
///     /     \___/     \
///     \     /   \     /
///      \___/     \___/
///          \     /
///           \___/
/// ```
///
/// This struct actually only needs to store x and y, since x+y+z=0 for all
/// hexes, so z can be derived as necessary.
///
/// Cube coordinates form a vector space, so hexes can be added and
/// subtracted to translate one by the offset of another.
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
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct HexCell {
    x: i32,
    y: i32,
}

impl HexCell {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a hex from all three coordinates, checking that they sum
    /// to 0
    pub fn new(x: i32, y: i32, z: i32) -> anyhow::Result<Self> {
        let sum = i64::from(x) + i64::from(y) + i64::from(z);
        ensure!(
            sum == 0,
            "hex coordinates must sum to 0, but ({}, {}, {}) sums to {}",
            x,
            y,
            z,
            sum
        );
        Ok(Self::new_xy(x, y))
    }

    /// Construct a new hex with the given x and y. Since x+y+z=0 for all
    /// hexes, we can derive z from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new hex with the given x and z. Since x+y+z=0 for all
    /// hexes, we can derive y from x & z.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a new hex with the given y and z. Since x+y+z=0 for all
    /// hexes, we can derive x from y & z.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }

    pub fn coords(&self) -> [i32; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// The adjacent hex in a particular direction
    pub fn step(self, direction: HexDirection) -> Self {
        self + direction.offset()
    }

    /// The 6 triangles that make up this hex, as triangles on a grid with
    /// the same edge length. They're listed counter-clockwise, starting
    /// with the lower triangle to the right of the center.
    pub fn tris(self) -> [TriCell; 6] {
        let a = self.x() - self.y();
        let b = self.y() - self.z();
        let c = self.z() - self.x();
        [
            TriCell::new_unchecked(a + 1, b, c),
            TriCell::new_unchecked(a + 1, b + 1, c),
            TriCell::new_unchecked(a, b + 1, c),
            TriCell::new_unchecked(a, b + 1, c + 1),
            TriCell::new_unchecked(a, b, c + 1),
            TriCell::new_unchecked(a + 1, b, c + 1),
        ]
    }

    /// Rotate `n * 60°` counter-clockwise about the center of another hex
    pub fn rotate_about(self, about: Self, n: i32) -> Self {
        about + (self - about).rotate(n)
    }
}

impl GridCell for HexCell {
    const ROTATIONS: i32 = 6;

    fn neighbours(self) -> impl Iterator<Item = Self> {
        HexDirection::iter().map(move |dir| self.step(dir))
    }

    fn distance_to(self, other: Self) -> u32 {
        // Every step changes two coordinates by one each
        ((self.x() - other.x()).unsigned_abs()
            + (self.y() - other.y()).unsigned_abs()
            + (self.z() - other.z()).unsigned_abs())
            / 2
    }

    fn disc(self, radius: u32) -> impl Iterator<Item = Self> {
        // If we just do [-r,r] for y as well, then we end up with a diamond
        // pattern instead of a super hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let r = radius as i32;
        (-r..=r).flat_map(move |dx| {
            let dy_min = cmp::max(-r, -dx - r);
            let dy_max = cmp::min(r, -dx + r);
            (dy_min..=dy_max)
                .map(move |dy| Self::new_xy(self.x + dx, self.y + dy))
        })
    }

    fn rotate(self, n: i32) -> Self {
        let [x, y, _] = util::rotate_axes(self.coords(), n);
        Self::new_xy(x, y)
    }

    fn reflect(self) -> Self {
        Self::new_xy(self.x(), self.z())
    }

    fn reflect_y_axis(self) -> Self {
        Self::new_xy(-self.x(), -self.z())
    }
}

/// Find the hex containing a triangle, where the triangle grid has the same
/// edge length as the hex grid. Rotates the coordinate system by 30° and
/// discretizes.
impl From<TriCell> for HexCell {
    fn from(tri: TriCell) -> Self {
        let [a, b, c] = tri.coords();
        Self::new_xy(round_third(a - c), round_third(b - a))
    }
}

impl TryFrom<[i32; 3]> for HexCell {
    type Error = anyhow::Error;

    fn try_from([x, y, z]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

impl From<HexCell> for [i32; 3] {
    fn from(cell: HexCell) -> Self {
        cell.coords()
    }
}

impl FromStr for HexCell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = util::parse_coords(s)?;
        Self::new(x, y, z)
    }
}

/// The six directions from the center of a hex to the middle of one of its
/// edges. Iterates counter-clockwise starting from up-right, which is also
/// the order [GridCell::neighbours] yields hexes in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum HexDirection {
    UpRight,
    Up,
    UpLeft,
    DownLeft,
    Down,
    DownRight,
}

impl HexDirection {
    /// Get the offset that moves a hex one step in this direction
    pub fn offset(self) -> HexCell {
        match self {
            Self::UpRight => HexCell::new_xy(1, 0),
            Self::Up => HexCell::new_xy(0, 1),
            Self::UpLeft => HexCell::new_xy(-1, 1),
            Self::DownLeft => HexCell::new_xy(-1, 0),
            Self::Down => HexCell::new_xy(0, -1),
            Self::DownRight => HexCell::new_xy(1, -1),
        }
    }

    /// The direction pointing the opposite way
    pub fn opposite(self) -> Self {
        match self {
            Self::UpRight => Self::DownLeft,
            Self::Up => Self::Down,
            Self::UpLeft => Self::DownRight,
            Self::DownLeft => Self::UpRight,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
        }
    }
}
