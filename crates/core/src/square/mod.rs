//! Plain square grids. These don't share anything with the triangle lattice,
//! every operation works directly on x and y.

mod cell;
mod raster;
mod region;
mod tiling;

pub use self::{
    cell::SquareCell, raster::SquareRaycast, region::SquareRect,
    tiling::SquareTiling,
};

use crate::{Grid, GridConfig, Point2};
use anyhow::{ensure, Context};
use log::debug;
use validator::Validate;

/// A square grid at a particular scale
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SquareGrid {
    edge_length: f64,
}

impl SquareGrid {
    /// Create a grid with the given edge length. Fails if the edge length
    /// isn't a positive, finite number.
    pub fn new(edge_length: f64) -> anyhow::Result<Self> {
        ensure!(
            edge_length.is_finite() && edge_length > 0.0,
            "edge length must be positive and finite, got {}",
            edge_length
        );
        Ok(Self { edge_length })
    }

    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        let grid = Self::new(config.edge_length)?;
        debug!("Created square grid with edge length {}", grid.edge_length);
        Ok(grid)
    }

    fn to_unit(&self, point: Point2) -> [f64; 2] {
        [point.x / self.edge_length, point.y / self.edge_length]
    }
}

impl Default for SquareGrid {
    fn default() -> Self {
        Self { edge_length: 1.0 }
    }
}

impl Grid for SquareGrid {
    type Cell = SquareCell;

    fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// Square `(x, y)` spans `x·e..(x+1)·e` horizontally, so its center is
    /// offset by half an edge from `(x, y)·e`
    fn center(&self, cell: SquareCell) -> Point2 {
        Point2::new(
            (f64::from(cell.x) + 0.5) * self.edge_length,
            (f64::from(cell.y) + 0.5) * self.edge_length,
        )
    }

    /// Counter-clockwise from the bottom left
    fn corners(&self, cell: SquareCell) -> Vec<Point2> {
        let x = f64::from(cell.x);
        let y = f64::from(cell.y);
        [(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0)]
            .iter()
            .map(|&(x, y)| Point2::new(x, y) * self.edge_length)
            .collect()
    }

    fn pick(&self, point: Point2) -> SquareCell {
        let [x, y] = self.to_unit(point);
        SquareCell::new(x.floor() as i32, y.floor() as i32)
    }

    fn line_intersect(
        &self,
        from: Point2,
        to: Point2,
    ) -> impl Iterator<Item = SquareCell> {
        SquareRaycast::new(self.to_unit(from), self.to_unit(to))
    }

    /// Squares are enumerated column by column, bottom to top within each
    /// column.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is negative.
    fn rect_intersect(
        &self,
        origin: Point2,
        width: f64,
        height: f64,
    ) -> impl Iterator<Item = SquareCell> {
        assert!(width >= 0.0, "rectangle should have non-negative width");
        assert!(height >= 0.0, "rectangle should have non-negative height");
        let [x, y] = self.to_unit(origin);
        let min_x = x.floor() as i32;
        let min_y = y.floor() as i32;
        // A rect edge lying exactly on a grid line doesn't reach into the
        // square on the other side
        let max_x = min_x.max((x + width / self.edge_length).ceil() as i32 - 1);
        let max_y =
            min_y.max((y + height / self.edge_length).ceil() as i32 - 1);
        (min_x..=max_x).flat_map(move |x| {
            (min_y..=max_y).map(move |y| SquareCell::new(x, y))
        })
    }
}
