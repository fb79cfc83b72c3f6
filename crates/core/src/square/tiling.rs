use crate::{CellRegion, GridConfig, SquareCell, SquareRect};
use anyhow::{ensure, Context};
use log::debug;
use validator::Validate;

/// Groups squares into fixed-size rectangular parents. Parent `(px, py)`
/// holds the `width × height` block of squares starting at
/// `(px * width, py * height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareTiling {
    width: u32,
    height: u32,
}

impl SquareTiling {
    /// Fails if either dimension is 0 or too big to be a square coordinate
    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        ensure!(
            width >= 1 && height >= 1,
            "square tiling must be at least 1x1, got {}x{}",
            width,
            height
        );
        ensure!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "square tiling can be at most {0}x{0}, got {1}x{2}",
            i32::MAX,
            width,
            height
        );
        Ok(Self { width, height })
    }

    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        let tiling = Self::new(
            config.square_tiling.width,
            config.square_tiling.height,
        )?;
        debug!(
            "Created square tiling with {}x{} parents",
            tiling.width, tiling.height
        );
        Ok(tiling)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn parent(&self, cell: SquareCell) -> SquareCell {
        SquareCell::new(
            cell.x.div_euclid(self.width as i32),
            cell.y.div_euclid(self.height as i32),
        )
    }

    /// The block of squares that belong to a parent
    pub fn parent_rect(&self, parent: SquareCell) -> SquareRect {
        let origin = SquareCell::new(
            parent.x * self.width as i32,
            parent.y * self.height as i32,
        );
        SquareRect::new(origin, self.width, self.height)
    }

    pub fn children(
        &self,
        parent: SquareCell,
    ) -> impl Iterator<Item = SquareCell> {
        self.parent_rect(parent).into_cells()
    }

    /// Get the parent of a square, along with the square's position in
    /// [Self::parent_rect]
    pub fn child_index(&self, cell: SquareCell) -> (SquareCell, usize) {
        let parent = self.parent(cell);
        let x = cell.x.rem_euclid(self.width as i32) as usize;
        let y = cell.y.rem_euclid(self.height as i32) as usize;
        (parent, x + y * self.width as usize)
    }

    /// Inverse of [Self::child_index]. Fails if the index is out of range
    /// for a parent.
    pub fn child_at(
        &self,
        parent: SquareCell,
        index: usize,
    ) -> anyhow::Result<SquareCell> {
        self.parent_rect(parent).deindex(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert!(SquareTiling::new(0, 2).is_err());
        assert!(SquareTiling::new(2, 0).is_err());
        assert!(SquareTiling::new(1, 1).is_ok());
        assert!(SquareTiling::new(i32::MAX as u32, 1).is_ok());
        assert!(SquareTiling::new(i32::MAX as u32 + 1, 1).is_err());
        assert!(SquareTiling::new(1, u32::MAX).is_err());
    }

    #[test]
    fn test_huge_parent() {
        let tiling = SquareTiling::new(i32::MAX as u32, 1).unwrap();
        let cell = SquareCell::new(-1, 0);
        assert_eq!(tiling.parent(cell), SquareCell::new(-1, 0));
        assert_eq!(tiling.child_index(cell).1, i32::MAX as usize - 1);
    }

    #[test]
    fn test_parent() {
        let tiling = SquareTiling::new(3, 2).unwrap();
        assert_eq!(tiling.parent(SquareCell::new(0, 0)), SquareCell::ORIGIN);
        assert_eq!(tiling.parent(SquareCell::new(2, 1)), SquareCell::ORIGIN);
        assert_eq!(
            tiling.parent(SquareCell::new(3, 2)),
            SquareCell::new(1, 1)
        );
        assert_eq!(
            tiling.parent(SquareCell::new(-1, -1)),
            SquareCell::new(-1, -1)
        );
        assert_eq!(
            tiling.parent(SquareCell::new(-4, 5)),
            SquareCell::new(-2, 2)
        );
    }

    #[test]
    fn test_children() {
        let tiling = SquareTiling::new(3, 2).unwrap();
        let parent = SquareCell::new(-1, 2);
        let children: Vec<_> = tiling.children(parent).collect();
        assert_eq!(children.len(), 6);
        assert_eq!(children[0], SquareCell::new(-3, 4));
        assert_eq!(children[5], SquareCell::new(-1, 5));
        for (i, &child) in children.iter().enumerate() {
            assert_eq!(tiling.parent(child), parent);
            assert_eq!(tiling.child_index(child), (parent, i));
            assert_eq!(tiling.child_at(parent, i).unwrap(), child);
        }
        assert!(tiling.child_at(parent, 6).is_err());
    }
}
