use crate::{CellRegion, SquareCell};
use anyhow::bail;
use serde::{Deserialize, Serialize};

/// A rectangle of squares with its bottom-left square at `origin`. Squares
/// are indexed row by row, bottom to top, left to right within each row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareRect {
    origin: SquareCell,
    width: u32,
    height: u32,
}

impl SquareRect {
    pub fn new(origin: SquareCell, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn origin(&self) -> SquareCell {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Same as [CellRegion::cells], but doesn't borrow the rect
    pub fn into_cells(self) -> impl Iterator<Item = SquareCell> {
        let Self {
            origin,
            width,
            height,
        } = self;
        (0..height as i32).flat_map(move |dy| {
            (0..width as i32)
                .map(move |dx| SquareCell::new(origin.x + dx, origin.y + dy))
        })
    }
}

impl CellRegion for SquareRect {
    type Cell = SquareCell;

    fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn index(&self, cell: SquareCell) -> Option<usize> {
        let dx = i64::from(cell.x) - i64::from(self.origin.x);
        let dy = i64::from(cell.y) - i64::from(self.origin.y);
        if (0..i64::from(self.width)).contains(&dx)
            && (0..i64::from(self.height)).contains(&dy)
        {
            Some((dx + dy * i64::from(self.width)) as usize)
        } else {
            None
        }
    }

    fn deindex(&self, index: usize) -> anyhow::Result<SquareCell> {
        if index >= self.len() {
            bail!(
                "index {} is outside square rect of {} squares",
                index,
                self.len()
            );
        }
        let width = self.width as usize;
        Ok(SquareCell::new(
            self.origin.x + (index % width) as i32,
            self.origin.y + (index / width) as i32,
        ))
    }

    fn cells(&self) -> impl Iterator<Item = SquareCell> + '_ {
        self.into_cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        let rect = SquareRect::new(SquareCell::new(-1, 2), 3, 2);
        assert_eq!(rect.len(), 6);
        assert_eq!(rect.index(SquareCell::new(-1, 2)), Some(0));
        assert_eq!(rect.index(SquareCell::new(1, 2)), Some(2));
        assert_eq!(rect.index(SquareCell::new(0, 3)), Some(4));
        assert_eq!(rect.index(SquareCell::new(2, 2)), None);
        assert_eq!(rect.index(SquareCell::new(0, 1)), None);
        assert_eq!(rect.deindex(5).unwrap(), SquareCell::new(1, 3));
        assert!(rect.deindex(6).is_err());
    }

    #[test]
    fn test_cells_match_index() {
        let rect = SquareRect::new(SquareCell::new(4, -3), 5, 3);
        for (i, cell) in rect.cells().enumerate() {
            assert_eq!(rect.index(cell), Some(i));
            assert_eq!(rect.deindex(i).unwrap(), cell);
        }
        assert_eq!(rect.cells().count(), rect.len());
    }

    #[test]
    fn test_empty() {
        let rect = SquareRect::new(SquareCell::ORIGIN, 0, 4);
        assert!(rect.is_empty());
        assert_eq!(rect.cells().count(), 0);
        assert!(rect.deindex(0).is_err());
    }
}
