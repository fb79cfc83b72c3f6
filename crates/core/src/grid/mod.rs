//! The shared shape of every grid. Each grid family (triangle, hex, trihex,
//! square) has its own cell type and its own grid type:
//!
//! - The **cell** ([GridCell]) is a plain integer coordinate value. Anything
//!   that can be computed from the integers alone lives here: neighbours,
//!   distance, discs and the symmetry transforms.
//! - The **grid** ([Grid]) binds an edge length (plus whatever basis
//!   matrices it precomputes from it) and handles everything that touches
//!   the continuous plane: centers, corners, picking, and rasterization of
//!   lines and rectangles.
//!
//! All enumerations are lazy. They can be abandoned early, and calling the
//! same function again starts a fresh traversal.

use crate::Point2;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A single cell in a grid, identified by integer coordinates. Cells are
/// immutable values; every operation returns a new cell.
pub trait GridCell: Copy + Debug + Display + Eq + Hash {
    /// Number of rotation steps that make a full turn. 6 for the three-axis
    /// grids (60° steps), 4 for squares (90° steps).
    const ROTATIONS: i32;

    /// All cells that share an edge with this one
    fn neighbours(self) -> impl Iterator<Item = Self>;

    /// Number of steps between two cells, where each step crosses one edge
    fn distance_to(self, other: Self) -> u32;

    /// All cells at most `radius` steps from this one. Always includes this
    /// cell.
    fn disc(self, radius: u32) -> impl Iterator<Item = Self>;

    /// Rotate `n` steps counter-clockwise about the origin. Negative `n`
    /// rotates clockwise.
    fn rotate(self, n: i32) -> Self;

    /// Reflect across the horizontal (x) axis
    fn reflect(self) -> Self;

    /// Reflect across the vertical (y) axis
    fn reflect_y_axis(self) -> Self;

    /// Reflect across the x-axis after it's been rotated counter-clockwise by
    /// `n` half-steps (30° for three-axis grids, 45° for squares).
    fn reflect_by(self, n: i32) -> Self {
        self.reflect().rotate(n)
    }
}

/// A grid bound to a particular scale. Converts between cells and cartesian
/// points, and rasterizes continuous shapes into cells.
pub trait Grid {
    type Cell: GridCell;

    /// Length of one cell edge, in cartesian units
    fn edge_length(&self) -> f64;

    /// Center of a cell
    fn center(&self, cell: Self::Cell) -> Point2;

    /// Corners of a cell, in a consistent winding order so they can be drawn
    /// directly as a polygon
    fn corners(&self, cell: Self::Cell) -> Vec<Point2>;

    /// Get the cell that contains a point. Points on a boundary between
    /// cells are assigned consistently, so every point has exactly one cell.
    fn pick(&self, point: Point2) -> Self::Cell;

    /// All cells crossed by the segment from `from` to `to`, in order. The
    /// first cell contains `from` and each consecutive pair shares an edge.
    fn line_intersect(
        &self,
        from: Point2,
        to: Point2,
    ) -> impl Iterator<Item = Self::Cell>;

    /// Cells along the straight line between the centers of two cells,
    /// starting at `from` and ending at `to`
    fn line(
        &self,
        from: Self::Cell,
        to: Self::Cell,
    ) -> impl Iterator<Item = Self::Cell> {
        self.line_intersect(self.center(from), self.center(to))
    }

    /// All cells that overlap the axis-aligned rectangle with bottom-left
    /// corner at `origin`. The rectangle is inclusive of its boundary and
    /// cells are exclusive of theirs, so a cell that only touches the
    /// rectangle along an edge or at a corner isn't included.
    fn rect_intersect(
        &self,
        origin: Point2,
        width: f64,
        height: f64,
    ) -> impl Iterator<Item = Self::Cell>;
}
