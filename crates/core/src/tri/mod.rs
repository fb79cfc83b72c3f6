//! Up/down triangle grids. This is the foundation for the hex and trihex
//! grids, which are both defined in terms of groups of triangles.
//!
//! ```text
//!        ____________
//!       /\    /\    /
//!      /  \  /  \  /
//!     /____\/____\/
//!    /\    /\    /
//!   /  \  /  \  /
//!  /____\/____\/
//! ```

mod cell;
mod raster;

pub use self::{
    cell::{TriCell, TriOrientation},
    raster::{TriRaycast, TriRowWalk},
};

use crate::{util::SQRT_3, Grid, GridConfig, Point2};
use anyhow::{ensure, Context};
use log::debug;
use nalgebra::{Matrix2x3, Matrix3x2, Vector3};
use validator::Validate;

/// A triangle grid at a particular scale. Holds the edge length, plus the
/// matrices that map between triangle coordinates and the cartesian plane.
///
/// The two maps are (pseudo-)inverses of each other. `(1, 1, 1)` is in the
/// kernel of the lattice→cartesian map, which is why coordinates that sum
/// to 0 (mod 3) give lattice vertices rather than triangle centers.
#[derive(Clone, Debug, PartialEq)]
pub struct TriGrid {
    edge_length: f64,
    /// Unit lattice coordinates → cartesian. Each unit of a, b, c moves in
    /// the direction of one edge of a down triangle.
    to_cartesian: Matrix2x3<f64>,
    /// Unit cartesian → continuous lattice coordinates, i.e. the dot product
    /// of a point with each of the three axes
    to_lattice: Matrix3x2<f64>,
}

impl TriGrid {
    /// Create a grid with the given edge length. Fails if the edge length
    /// isn't a positive, finite number.
    pub fn new(edge_length: f64) -> anyhow::Result<Self> {
        ensure!(
            edge_length.is_finite() && edge_length > 0.0,
            "edge length must be positive and finite, got {}",
            edge_length
        );
        Ok(Self::with_edge_length(edge_length))
    }

    fn with_edge_length(edge_length: f64) -> Self {
        #[rustfmt::skip]
        let to_cartesian = Matrix2x3::new(
            0.5,           0.0,          -0.5,
            -SQRT_3 / 6.0, SQRT_3 / 3.0, -SQRT_3 / 6.0,
        );
        #[rustfmt::skip]
        let to_lattice = Matrix3x2::new(
            1.0,  -SQRT_3 / 3.0,
            0.0,  SQRT_3 * 2.0 / 3.0,
            -1.0, -SQRT_3 / 3.0,
        );
        Self {
            edge_length,
            to_cartesian,
            to_lattice,
        }
    }

    /// Create a grid from a config. Returns an error if the config is
    /// invalid.
    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        let grid = Self::new(config.edge_length)?;
        debug!("Created triangle grid with edge length {}", grid.edge_length);
        Ok(grid)
    }

    /// Cartesian position of an arbitrary lattice coordinate. For a valid
    /// triangle this is its center; for coordinates summing to 0 (mod 3) it
    /// is a vertex of the grid.
    pub fn lattice_point(&self, a: i32, b: i32, c: i32) -> Point2 {
        let unit = self.to_cartesian
            * Vector3::new(f64::from(a), f64::from(b), f64::from(c));
        Point2::from(unit * self.edge_length)
    }

    /// Project a cartesian point onto the three (unit) triangle axes
    pub(crate) fn project(&self, point: Point2) -> Vector3<f64> {
        self.to_lattice * (point / self.edge_length).to_vector()
    }

    /// Corners of a triangle. Up triangles list the corner on the a axis,
    /// then c, then b; down triangles mirror that.
    fn corner_coords(cell: TriCell) -> [[i32; 3]; 3] {
        let [a, b, c] = cell.coords();
        let d = if cell.points_up() { 1 } else { -1 };
        [[a + d, b, c], [a, b, c + d], [a, b + d, c]]
    }

    /// Find the triangle containing a point, given the point's projection
    /// onto the three axes.
    fn cell_at(f: Vector3<f64>) -> TriCell {
        // floor(..)+1 on b rather than ceil breaks the tie at vertices, so
        // that a vertex belongs to exactly one triangle
        let a = f.x.ceil() as i32;
        let b = f.y.floor() as i32 + 1;
        let c = f.z.ceil() as i32;
        match a + b + c {
            1 | 2 => TriCell::new_unchecked(a, b, c),
            // Only possible within rounding error of a vertex, where the
            // three projections disagree on which side of their line the
            // point falls. Snap to the vertex and apply the same tie-break.
            _ => TriCell::new_unchecked(
                f.x.round() as i32,
                f.y.round() as i32 + 1,
                f.z.round() as i32,
            ),
        }
    }
}

impl Default for TriGrid {
    fn default() -> Self {
        Self::with_edge_length(1.0)
    }
}

impl Grid for TriGrid {
    type Cell = TriCell;

    fn edge_length(&self) -> f64 {
        self.edge_length
    }

    fn center(&self, cell: TriCell) -> Point2 {
        self.lattice_point(cell.a(), cell.b(), cell.c())
    }

    fn corners(&self, cell: TriCell) -> Vec<Point2> {
        Self::corner_coords(cell)
            .iter()
            .map(|&[a, b, c]| self.lattice_point(a, b, c))
            .collect()
    }

    fn pick(&self, point: Point2) -> TriCell {
        Self::cell_at(self.project(point))
    }

    fn line_intersect(
        &self,
        from: Point2,
        to: Point2,
    ) -> impl Iterator<Item = TriCell> {
        let f = self.project(from);
        let delta = self.project(to) - f;
        TriRaycast::new(Self::cell_at(f), f, delta)
    }

    /// # Panics
    ///
    /// Panics if `width` or `height` is negative.
    fn rect_intersect(
        &self,
        origin: Point2,
        width: f64,
        height: f64,
    ) -> impl Iterator<Item = TriCell> {
        assert!(width >= 0.0, "rectangle should have non-negative width");
        assert!(height >= 0.0, "rectangle should have non-negative height");
        let x = origin.x / self.edge_length;
        let y = origin.y / self.edge_length;
        let width = width / self.edge_length;
        let height = height / self.edge_length;
        TriRowWalk::new(
            x,
            width,
            SQRT_3 * 2.0 / 3.0 * y,
            SQRT_3 * 2.0 / 3.0 * (y + height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridCell;
    use assert_approx_eq::assert_approx_eq;

    fn tri(a: i32, b: i32, c: i32) -> TriCell {
        TriCell::new(a, b, c).unwrap()
    }

    fn assert_point(actual: Point2, x: f64, y: f64) {
        assert_approx_eq!(actual.x, x);
        assert_approx_eq!(actual.y, y);
    }

    #[test]
    fn test_new() {
        assert!(TriGrid::new(0.0).is_err());
        assert!(TriGrid::new(-1.0).is_err());
        assert!(TriGrid::new(f64::NAN).is_err());
        assert_eq!(TriGrid::new(2.0).unwrap().edge_length(), 2.0);
    }

    #[test]
    fn test_center() {
        let grid = TriGrid::default();
        assert_point(grid.center(tri(0, 1, 0)), 0.0, SQRT_3 / 3.0);
        assert_point(grid.center(tri(1, 1, 0)), 0.5, SQRT_3 / 6.0);
        // Coordinates summing to 0 give vertices
        assert_point(grid.lattice_point(0, 0, 0), 0.0, 0.0);
        assert_point(grid.lattice_point(1, 0, -1), 1.0, 0.0);

        let big = TriGrid::new(3.0).unwrap();
        assert_point(big.center(tri(1, 1, 0)), 1.5, SQRT_3 / 2.0);
    }

    #[test]
    fn test_corners() {
        let grid = TriGrid::default();
        let up = grid.corners(tri(1, 1, 0));
        assert_eq!(up.len(), 3);
        assert_point(up[0], 1.0, 0.0);
        assert_point(up[1], 0.0, 0.0);
        assert_point(up[2], 0.5, SQRT_3 / 2.0);

        // Corners are equidistant from the center
        for cell in [tri(1, 1, 0), tri(0, 1, 0), tri(-3, 2, 2)] {
            let center = grid.center(cell);
            for corner in grid.corners(cell) {
                assert_approx_eq!(center.distance_to(corner), SQRT_3 / 3.0);
            }
        }
    }

    #[test]
    fn test_pick() {
        let grid = TriGrid::default();
        // The origin is a vertex, the tie-break puts it in (0, 1, 0)
        assert_eq!(grid.pick(Point2::ORIGIN), tri(0, 1, 0));
        assert_eq!(grid.pick(Point2::new(0.5, 0.2)), tri(1, 1, 0));
        assert_eq!(grid.pick(Point2::new(0.0, -0.2)), tri(1, 0, 1));

        let grid = TriGrid::new(0.7).unwrap();
        for cell in tri(0, 1, 0).disc(6) {
            assert_eq!(grid.pick(grid.center(cell)), cell);
        }
    }

    #[test]
    fn test_pick_every_point_is_in_a_triangle() {
        let grid = TriGrid::default();
        for i in -20..=20 {
            for j in -20..=20 {
                // Lots of these are exactly on a vertex or an edge
                let point = Point2::new(
                    f64::from(i) * 0.25,
                    f64::from(j) * SQRT_3 / 4.0,
                );
                let cell = grid.pick(point);
                assert!(TriCell::new(cell.a(), cell.b(), cell.c()).is_ok());
            }
        }
    }

    #[test]
    fn test_line_intersect() {
        let grid = TriGrid::default();
        let line: Vec<_> = grid
            .line_intersect(Point2::new(0.1, 0.2), Point2::new(2.3, -0.4))
            .collect();
        assert_eq!(
            line,
            vec![
                tri(0, 1, 0),
                tri(1, 1, 0),
                tri(1, 0, 0),
                tri(2, 0, 0),
                tri(2, 0, -1),
                tri(3, 0, -1),
                tri(3, 0, -2),
            ]
        );
    }

    #[test]
    fn test_line_intersect_zero_length() {
        let grid = TriGrid::default();
        let point = Point2::new(0.3, 0.1);
        let line: Vec<_> = grid.line_intersect(point, point).collect();
        assert_eq!(line, vec![grid.pick(point)]);
    }

    #[test]
    fn test_line() {
        let grid = TriGrid::default();
        assert_eq!(
            grid.line(tri(0, 1, 0), tri(1, 1, 0)).collect::<Vec<_>>(),
            vec![tri(0, 1, 0), tri(1, 1, 0)]
        );
        assert_eq!(
            grid.line(tri(1, 0, 1), tri(2, 0, 0)).collect::<Vec<_>>(),
            vec![tri(1, 0, 1), tri(1, 0, 0), tri(2, 0, 0)]
        );
        assert_eq!(
            grid.line(tri(0, 1, 0), tri(2, -1, 1)).collect::<Vec<_>>(),
            vec![
                tri(0, 1, 0),
                tri(1, 1, 0),
                tri(1, 0, 0),
                tri(1, 0, 1),
                tri(1, -1, 1),
                tri(2, -1, 1),
            ]
        );
    }

    #[test]
    fn test_line_is_connected() {
        let grid = TriGrid::new(1.5).unwrap();
        let line: Vec<_> = grid
            .line_intersect(Point2::new(-3.1, 2.2), Point2::new(4.7, -1.9))
            .collect();
        assert_eq!(line[0], grid.pick(Point2::new(-3.1, 2.2)));
        assert_eq!(*line.last().unwrap(), grid.pick(Point2::new(4.7, -1.9)));
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1, "{:?}", pair);
        }
    }

    #[test]
    fn test_rect_intersect() {
        let grid = TriGrid::default();
        let origin = grid.center(tri(0, 1, 0));
        let rect = |w, h| grid.rect_intersect(origin, w, h).collect::<Vec<_>>();

        assert_eq!(rect(0.0, 0.0), vec![tri(0, 1, 0)]);
        assert_eq!(rect(0.0, 0.3), vec![tri(0, 1, 0), tri(0, 2, 0)]);
        assert_eq!(
            rect(0.6, 0.3),
            vec![
                tri(0, 1, 0),
                tri(1, 1, 0),
                tri(1, 1, -1),
                tri(0, 2, 0),
                tri(0, 2, -1),
                tri(1, 2, -1),
            ]
        );
    }

    #[test]
    fn test_rect_intersect_on_row_boundary() {
        // A degenerate rectangle lying on a row line touches no triangle's
        // interior
        let grid = TriGrid::default();
        let on_line = grid.rect_intersect(Point2::new(0.2, 0.0), 0.0, 0.0);
        assert_eq!(on_line.count(), 0);
        // Widening it to cover the rows either side picks them both up
        let cells: Vec<_> = grid
            .rect_intersect(Point2::new(0.2, -0.1), 0.0, 0.2)
            .collect();
        assert_eq!(cells, vec![tri(1, 0, 0), tri(1, 1, 0)]);
    }

    #[test]
    #[should_panic(expected = "non-negative width")]
    fn test_rect_intersect_negative() {
        TriGrid::default()
            .rect_intersect(Point2::ORIGIN, -1.0, 1.0)
            .count();
    }
}
