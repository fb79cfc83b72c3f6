//! Trihexagonal grids, i.e. hexagons with triangles in between them. Like
//! [hex grids](crate::HexGrid), these are built on top of a triangle grid
//! with the same edge length, and all the continuous math is delegated to
//! it.

mod cell;

pub use self::cell::{TrihexCell, TrihexCellType};

use crate::{util::DedupConsecutive, Grid, GridConfig, Point2, TriGrid};
use log::debug;

/// A trihex grid at a particular scale. Hexagons and triangles share the
/// same edge length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrihexGrid {
    tri: TriGrid,
}

impl TrihexGrid {
    /// Create a grid with the given edge length. Fails if the edge length
    /// isn't a positive, finite number.
    pub fn new(edge_length: f64) -> anyhow::Result<Self> {
        Ok(Self {
            tri: TriGrid::new(edge_length)?,
        })
    }

    /// Create a grid from a config. Returns an error if the config is
    /// invalid.
    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        let grid = Self {
            tri: TriGrid::from_config(config)?,
        };
        debug!(
            "Created trihex grid with edge length {}",
            grid.edge_length()
        );
        Ok(grid)
    }

    /// The triangle grid that this grid's cells are made of
    pub fn tri_grid(&self) -> &TriGrid {
        &self.tri
    }

    /// Get a point on the underlying triangle lattice, relative to the
    /// doubled coordinates of a cell
    fn offset_point(&self, cell: TrihexCell, offset: [i32; 3]) -> Point2 {
        let [a, b, c] = cell.coords();
        self.tri.lattice_point(
            2 * a + offset[0],
            2 * b + offset[1],
            2 * c + offset[2],
        )
    }
}

impl Grid for TrihexGrid {
    type Cell = TrihexCell;

    fn edge_length(&self) -> f64 {
        self.tri.edge_length()
    }

    fn center(&self, cell: TrihexCell) -> Point2 {
        self.offset_point(cell, [0, 0, 0])
    }

    /// Hexagon corners are listed clockwise starting from the lower right.
    /// Triangle corners follow the same order as [TriGrid::corners].
    fn corners(&self, cell: TrihexCell) -> Vec<Point2> {
        let offsets: &[[i32; 3]] = match cell.cell_type() {
            TrihexCellType::Hex => &[
                [1, -1, 0],
                [0, -1, 1],
                [-1, 0, 1],
                [-1, 1, 0],
                [0, 1, -1],
                [1, 0, -1],
            ],
            TrihexCellType::TriUp => &[[1, 0, 0], [0, 0, 1], [0, 1, 0]],
            TrihexCellType::TriDown => {
                &[[-1, 0, 0], [0, 0, -1], [0, -1, 0]]
            }
        };
        offsets
            .iter()
            .map(|&offset| self.offset_point(cell, offset))
            .collect()
    }

    fn pick(&self, point: Point2) -> TrihexCell {
        TrihexCell::from(self.tri.pick(point))
    }

    fn line_intersect(
        &self,
        from: Point2,
        to: Point2,
    ) -> impl Iterator<Item = TrihexCell> {
        DedupConsecutive::new(
            self.tri.line_intersect(from, to).map(TrihexCell::from),
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
    ) -> impl Iterator<Item = TrihexCell> {
        let mut first_row = None;
        let mut prev = None;
        self.tri
            .rect_intersect(origin, width, height)
            .filter_map(move |tri| {
                let first = *first_row.get_or_insert(tri.b());
                let cell = TrihexCell::from(tri);
                // Hexagons cover two rows of triangles, so only count them
                // from their bottom row (or whichever row comes first)
                let counted = tri.b() == first
                    || cell.cell_type() != TrihexCellType::Hex
                    || tri.b() == 2 * cell.b();
                if counted && prev != Some(cell) {
                    prev = Some(cell);
                    Some(cell)
                } else {
                    None
                }
            })
    }
}
