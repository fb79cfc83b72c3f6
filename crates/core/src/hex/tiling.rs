use crate::{util, CellRegion, GridCell, GridConfig, HexCell, HexDisc};
use anyhow::{ensure, Context};
use log::debug;
use validator::Validate;

/// Groups hexes into larger disc-shaped parents. Every parent is a disc of
/// a fixed radius around a center child, and the parents themselves tile
/// the plane in a roughly hexagonal (pointy-topped) layout, so parent
/// coordinates are hex coordinates too.
///
/// Based on https://observablehq.com/@sanderevers/hexagon-tiling-of-an-hexagonal-grid
///
/// This is useful for chunked storage: each parent's children can be kept
/// in a flat array of [Self::area] items, indexed with [HexDisc].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HexTiling {
    radius: u32,
    /// Number of hexes in each parent, `3r² + 3r + 1`
    area: i64,
    /// `3r + 2`. Moving one parent along an axis moves the center child
    /// this far along one axis (and one step along another).
    shift: i64,
}

impl HexTiling {
    /// Create a tiling where each parent has the given radius. Fails if the
    /// radius is 0.
    pub fn new(radius: u32) -> anyhow::Result<Self> {
        ensure!(radius >= 1, "hex tiling radius must be at least 1");
        let r = i64::from(radius);
        Ok(Self {
            radius,
            area: 3 * r * r + 3 * r + 1,
            shift: 3 * r + 2,
        })
    }

    /// Create a tiling from a config. Returns an error if the config is
    /// invalid.
    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        let tiling = Self::new(config.hex_tiling.radius.into())?;
        debug!(
            "Created hex tiling with radius {} ({} hexes per parent)",
            tiling.radius, tiling.area
        );
        Ok(tiling)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of children in each parent
    pub fn area(&self) -> usize {
        util::disc_len(self.radius)
    }

    /// Get the parent that contains a hex
    pub fn parent(&self, cell: HexCell) -> HexCell {
        let [x, y, z] = cell.coords().map(i64::from);
        let a = (z + y * self.shift).div_euclid(self.area);
        let b = (x + z * self.shift).div_euclid(self.area);
        let c = (y + x * self.shift).div_euclid(self.area);
        // These are always exact, the divisions just pick the right one of
        // the three candidates
        let px = (1 + c - b).div_euclid(3);
        let py = (1 + a - c).div_euclid(3);
        HexCell::new_xy(px as i32, py as i32)
    }

    /// Get the hex in the center of a parent. This is the inverse of
    /// [Self::parent] for center children.
    pub fn center_child(&self, parent: HexCell) -> HexCell {
        let [x, y, z] = parent.coords().map(i64::from);
        let a = y - z;
        let b = z - x;
        let c = x - y;
        let cx = (self.shift * c + b).div_euclid(3);
        let cy = (self.shift * a + c).div_euclid(3);
        HexCell::new_xy(cx as i32, cy as i32)
    }

    /// All the hexes that belong to a parent
    pub fn children(&self, parent: HexCell) -> impl Iterator<Item = HexCell> {
        self.center_child(parent).disc(self.radius)
    }

    /// The children of a parent, as a region that can be indexed
    pub fn children_region(&self, parent: HexCell) -> HexDisc {
        HexDisc::new(self.center_child(parent), self.radius)
    }

    /// Get the parent of a hex, along with the hex's position among the
    /// parent's children (the same index [Self::children_region] gives)
    pub fn child_index(&self, cell: HexCell) -> (HexCell, usize) {
        let parent = self.parent(cell);
        let index = self.children_region(parent).index_unchecked(cell);
        (parent, index)
    }

    /// Inverse of [Self::child_index]. Fails if the index is out of range
    /// for a parent.
    pub fn child_at(
        &self,
        parent: HexCell,
        index: usize,
    ) -> anyhow::Result<HexCell> {
        self.children_region(parent).deindex(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn hex(x: i32, y: i32, z: i32) -> HexCell {
        HexCell::new(x, y, z).unwrap()
    }

    #[test]
    fn test_new() {
        assert!(HexTiling::new(0).is_err());
        let tiling = HexTiling::new(2).unwrap();
        assert_eq!(tiling.area(), 19);
        assert_eq!(tiling.shift, 8);
    }

    #[test]
    fn test_parent() {
        let tiling = HexTiling::new(2).unwrap();
        let cases = [
            (hex(0, 0, 0), hex(0, 0, 0)),
            (hex(5, -2, -3), hex(1, -1, 0)),
            (hex(3, -5, 2), hex(0, -1, 1)),
            (hex(-2, -3, 5), hex(-1, 0, 1)),
            (hex(10, -4, -6), hex(2, -2, 0)),
        ];
        for &(center, parent) in &cases {
            assert_eq!(tiling.parent(center), parent);
            assert_eq!(tiling.center_child(parent), center);
            for neighbour in center.neighbours() {
                assert_eq!(tiling.parent(neighbour), parent);
            }
        }
    }

    #[test]
    fn test_children_partition() {
        for radius in 1..4 {
            let tiling = HexTiling::new(radius).unwrap();
            let mut seen = HashSet::new();
            for parent in HexCell::ORIGIN.disc(3) {
                let children: Vec<_> = tiling.children(parent).collect();
                assert_eq!(children.len(), tiling.area());
                for child in children {
                    assert_eq!(tiling.parent(child), parent);
                    // No two parents share a child
                    assert!(seen.insert(child), "{} claimed twice", child);
                }
            }
        }
    }

    #[test]
    fn test_child_index() {
        let tiling = HexTiling::new(3).unwrap();
        for cell in hex(7, -20, 13).disc(10) {
            let (parent, index) = tiling.child_index(cell);
            assert!(index < tiling.area());
            assert_eq!(tiling.child_at(parent, index).unwrap(), cell);
        }
        assert!(tiling.child_at(HexCell::ORIGIN, tiling.area()).is_err());
    }

    #[test]
    fn test_neighbouring_parents() {
        // A hex and its neighbours are always in the same parent or in
        // parents that are next to each other
        let tiling = HexTiling::new(2).unwrap();
        for cell in HexCell::ORIGIN.disc(12) {
            let parent = tiling.parent(cell);
            for neighbour in cell.neighbours() {
                let other = tiling.parent(neighbour);
                assert!(parent.distance_to(other) <= 1);
            }
        }
    }
}
