//! Cellgrid is a set of coordinate systems for tiling the plane with square,
//! triangle, hexagon and trihexagon cells. Each grid family has a cell type
//! (plain integer coordinates, see [GridCell]) and a grid type that binds an
//! edge length (see [Grid]). Together they convert between cells and the
//! cartesian plane, enumerate neighbours and discs, apply rotations and
//! reflections, and rasterize lines and rectangles into cells.
//!
//! ```
//! use cellgrid::{Grid, GridCell, HexCell, HexGrid, Point2};
//!
//! let grid = HexGrid::new(2.0)?;
//! let cell = grid.pick(Point2::new(3.1, 0.5));
//! assert_eq!(cell, HexCell::new(1, 0, -1)?);
//! assert_eq!(cell.neighbours().count(), 6);
//! assert_eq!(grid.line(HexCell::ORIGIN, cell).count(), 2);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Finite groups of cells can be mapped onto `0..n` for array-backed storage
//! with a [CellRegion], and [HexTiling] and [SquareTiling] split the infinite
//! plane into such groups. See [GridConfig] for everything that can be
//! configured.

mod config;
mod grid;
mod hex;
mod region;
mod square;
mod tri;
mod trihex;
pub mod util;

pub use crate::{
    config::{GridConfig, HexTilingConfig, SquareTilingConfig},
    grid::{Grid, GridCell},
    hex::{HexCell, HexDirection, HexDisc, HexGrid, HexRect, HexTiling},
    region::{CellRegion, IndexedCells},
    square::{SquareCell, SquareGrid, SquareRaycast, SquareRect, SquareTiling},
    tri::{TriCell, TriGrid, TriOrientation, TriRaycast, TriRowWalk},
    trihex::{TrihexCell, TrihexCellType, TrihexGrid},
    util::unit::Point2,
};
