//! Flat-topped hex grids. Every hex is made up of 6 triangles from a
//! triangle grid with the same edge length, so picking and rasterization are
//! done on the triangle grid and then mapped onto hexes.
//!
//! This module also holds the hex-specific regions ([HexRect], [HexDisc])
//! and the hierarchical [HexTiling].

mod cell;
mod region;
mod tiling;

pub use self::{
    cell::{HexCell, HexDirection},
    region::{HexDisc, HexRect},
    tiling::HexTiling,
};

use crate::{
    util::{DedupConsecutive, SQRT_3},
    Grid, GridCell, GridConfig, Point2, TriGrid,
};
use log::debug;
use nalgebra::{Matrix2x3, Vector3};

/// A flat-topped hex grid at a particular scale
#[derive(Clone, Debug, PartialEq)]
pub struct HexGrid {
    tri: TriGrid,
    /// Cube coordinates → cartesian. Each unit of x, y, z moves in the
    /// direction of one of the corners of the hex.
    to_cartesian: Matrix2x3<f64>,
}

impl HexGrid {
    /// Create a grid with the given edge length. Fails if the edge length
    /// isn't a positive, finite number.
    pub fn new(edge_length: f64) -> anyhow::Result<Self> {
        Ok(Self::with_tri_grid(TriGrid::new(edge_length)?))
    }

    /// Create a grid from a config. Returns an error if the config is
    /// invalid.
    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        let grid = Self::with_tri_grid(TriGrid::from_config(config)?);
        debug!("Created hex grid with edge length {}", grid.edge_length());
        Ok(grid)
    }

    fn with_tri_grid(tri: TriGrid) -> Self {
        #[rustfmt::skip]
        let to_cartesian = Matrix2x3::new(
            1.0, -0.5,         -0.5,
            0.0, SQRT_3 / 2.0, -SQRT_3 / 2.0,
        );
        Self { tri, to_cartesian }
    }

    /// The triangle grid that this grid's hexes are made of
    pub fn tri_grid(&self) -> &TriGrid {
        &self.tri
    }

    /// Cartesian position of an arbitrary cube coordinate. For coordinates
    /// that sum to ±1 (not a valid hex), this gives a vertex of the grid.
    fn lattice_point(&self, x: i32, y: i32, z: i32) -> Point2 {
        let unit = self.to_cartesian
            * Vector3::new(f64::from(x), f64::from(y), f64::from(z));
        Point2::from(unit * self.edge_length())
    }

    /// A shortest path from one hex to another, staying as close as possible
    /// to the straight line between their centers. Unlike [Grid::line], this
    /// never includes hexes that the line only grazes, so it always yields
    /// exactly `distance + 1` hexes.
    pub fn path(
        &self,
        from: HexCell,
        to: HexCell,
    ) -> impl Iterator<Item = HexCell> + '_ {
        let n = from.distance_to(to);
        let start = self.center(from);
        let end = self.center(to);
        (0..=n).map(move |i| {
            let t = if n == 0 {
                0.0
            } else {
                f64::from(i) / f64::from(n)
            };
            self.pick(start.lerp(end, t))
        })
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::with_tri_grid(TriGrid::default())
    }
}

impl Grid for HexGrid {
    type Cell = HexCell;

    fn edge_length(&self) -> f64 {
        self.tri.edge_length()
    }

    fn center(&self, cell: HexCell) -> Point2 {
        self.lattice_point(cell.x(), cell.y(), cell.z())
    }

    /// Corners are listed counter-clockwise, starting with the upper right
    /// corner
    fn corners(&self, cell: HexCell) -> Vec<Point2> {
        let [x, y, z] = cell.coords();
        vec![
            self.lattice_point(x, y, z - 1),
            self.lattice_point(x, y + 1, z),
            self.lattice_point(x - 1, y, z),
            self.lattice_point(x, y, z + 1),
            self.lattice_point(x, y - 1, z),
            self.lattice_point(x + 1, y, z),
        ]
    }

    fn pick(&self, point: Point2) -> HexCell {
        HexCell::from(self.tri.pick(point))
    }

    fn line_intersect(
        &self,
        from: Point2,
        to: Point2,
    ) -> impl Iterator<Item = HexCell> {
        // Each hex is several triangles, so the raycast can visit a few in a
        // row that all belong to the same hex
        DedupConsecutive::new(
            self.tri.line_intersect(from, to).map(HexCell::from),
        )
    }

    /// # Panics
    ///
    /// Panics if `width` or `height` is negative.
    fn rect_intersect(
        &self,
        origin: Point2,
        width: f64,
        height: f64,
    ) -> impl Iterator<Item = HexCell> {
        let mut first_row = None;
        let mut prev = None;
        self.tri
            .rect_intersect(origin, width, height)
            .filter_map(move |tri| {
                let first = *first_row.get_or_insert(tri.b());
                let hex = HexCell::from(tri);
                // Only count a hex from the triangles in its bottom half,
                // except on the first row. Otherwise hexes that straddle two
                // rows would show up twice.
                let in_bottom_half = hex.y() - hex.z() == tri.b();
                if (tri.b() == first || in_bottom_half)
                    && prev != Some(hex)
                {
                    prev = Some(hex);
                    Some(hex)
                } else {
                    None
                }
            })
    }
}
