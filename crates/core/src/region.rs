//! Dense indexing of finite sets of cells. A region is a finite group of
//! cells with a bijection onto `0..len()`, so that per-cell data can be kept
//! in a flat `Vec` rather than a hash map.

use crate::GridCell;
use anyhow::anyhow;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::iter::FromIterator;

/// A finite set of cells with a stable order. For every region,
/// `deindex(index(c)) == c` for each cell `c` in the region, and
/// `index(deindex(i)) == i` for each `i` in `0..len()`.
pub trait CellRegion {
    type Cell: GridCell;

    /// Number of cells in the region
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of a cell within the region, or `None` if the cell is not
    /// in the region
    fn index(&self, cell: Self::Cell) -> Option<usize>;

    /// The cell at a position. Fails if `index >= len()`.
    fn deindex(&self, index: usize) -> anyhow::Result<Self::Cell>;

    /// All cells in the region, in index order
    fn cells(&self) -> impl Iterator<Item = Self::Cell> + '_;

    fn contains(&self, cell: Self::Cell) -> bool {
        self.index(cell).is_some()
    }
}

/// A region backed by an explicit list of cells. This works for any finite
/// enumeration (a triangle disc, a rasterized rectangle, etc.), at the cost
/// of storing every cell. Shapes with a closed-form index (e.g.
/// [HexRect](crate::HexRect)) should use their own region type instead.
///
/// Cells keep the order they were first inserted in. Duplicates are dropped.
#[derive(Clone, Debug)]
pub struct IndexedCells<C: GridCell> {
    cells: IndexSet<C, FnvBuildHasher>,
}

impl<C: GridCell> IndexedCells<C> {
    pub fn new() -> Self {
        Self {
            cells: IndexSet::default(),
        }
    }

    /// Add a cell to the end of the region. Returns the cell's index, and
    /// whether the cell was newly added (`false` if it was already present).
    pub fn insert(&mut self, cell: C) -> (usize, bool) {
        self.cells.insert_full(cell)
    }
}

impl<C: GridCell> Default for IndexedCells<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GridCell> FromIterator<C> for IndexedCells<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<C: GridCell> CellRegion for IndexedCells<C> {
    type Cell = C;

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, cell: C) -> Option<usize> {
        self.cells.get_full(&cell).map(|(index, _)| index)
    }

    fn deindex(&self, index: usize) -> anyhow::Result<C> {
        self.cells.get_index(index).copied().ok_or_else(|| {
            anyhow!(
                "index {} is outside region of {} cells",
                index,
                self.cells.len()
            )
        })
    }

    fn cells(&self) -> impl Iterator<Item = C> + '_ {
        self.cells.iter().copied()
    }
}
