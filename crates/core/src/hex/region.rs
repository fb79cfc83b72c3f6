use crate::{util, CellRegion, GridCell, HexCell};
use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

/// A roughly rectangular block of hexes, built from vertical columns. The
/// `origin` hex is in the bottom left, and the block extends `width` columns
/// to the right and `height` hexes upwards.
///
/// Since columns of flat-topped hexes are offset by half a hex from their
/// neighbours, every other (odd) column is "bumped": `inc_bottom` adds a
/// hex to the bottom of each odd column and `inc_top` adds one to the top.
/// With neither, odd columns are one hex shorter than even ones; with both,
/// one hex taller.
///
/// Hexes are indexed column by column, bottom to top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexRect {
    origin: HexCell,
    width: u32,
    height: u32,
    inc_bottom: bool,
    inc_top: bool,
}

impl HexRect {
    /// Create a new rectangle. Fails if `height` is 0, since odd columns
    /// could then have a negative number of hexes.
    pub fn new(
        origin: HexCell,
        width: u32,
        height: u32,
        inc_bottom: bool,
        inc_top: bool,
    ) -> anyhow::Result<Self> {
        ensure!(height >= 1, "hex rect must be at least 1 hex tall");
        Ok(Self {
            origin,
            width,
            height,
            inc_bottom,
            inc_top,
        })
    }

    pub fn origin(&self) -> HexCell {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// How much taller each odd column is than each even one (-1, 0 or 1)
    fn odd_height(&self) -> i64 {
        i64::from(self.inc_bottom) + i64::from(self.inc_top) - 1
    }

    /// Number of hexes in a column
    fn column_height(&self, dx: i64) -> i64 {
        i64::from(self.height) + dx.rem_euclid(2) * self.odd_height()
    }

    /// The y offset of the bottom hex of a column, relative to the origin.
    /// Every two columns to the right, the bottom of the rect moves down one
    /// in y.
    fn column_base(&self, dx: i64) -> i64 {
        -dx.div_euclid(2) - dx.rem_euclid(2) * i64::from(self.inc_bottom)
    }

    /// Convert a hex to integer offset coordinates `(column, row)` within
    /// this rectangle. The result can be outside the rectangle (including
    /// negative) if the hex is.
    pub fn to_offset(&self, cell: HexCell) -> (i64, i64) {
        let dx = i64::from(cell.x()) - i64::from(self.origin.x());
        let dy = i64::from(cell.y())
            - i64::from(self.origin.y())
            - self.column_base(dx);
        (dx, dy)
    }

    /// Inverse of [Self::to_offset]
    pub fn from_offset(&self, dx: i64, dy: i64) -> HexCell {
        let y = i64::from(self.origin.y()) + self.column_base(dx) + dy;
        let x = i64::from(self.origin.x()) + dx;
        HexCell::new_xy(x as i32, y as i32)
    }
}

impl CellRegion for HexRect {
    type Cell = HexCell;

    fn len(&self) -> usize {
        let width = i64::from(self.width);
        (i64::from(self.height) * width + self.odd_height() * (width / 2))
            as usize
    }

    fn index(&self, cell: HexCell) -> Option<usize> {
        let (dx, dy) = self.to_offset(cell);
        if dx < 0 || dx >= i64::from(self.width) {
            return None;
        }
        if dy < 0 || dy >= self.column_height(dx) {
            return None;
        }
        // Number of hexes in columns to the left of this one
        let left =
            i64::from(self.height) * dx + self.odd_height() * (dx / 2);
        Some((left + dy) as usize)
    }

    fn deindex(&self, index: usize) -> anyhow::Result<HexCell> {
        if index >= self.len() {
            bail!(
                "index {} is outside hex rect of {} hexes",
                index,
                self.len()
            );
        }
        let height = i64::from(self.height);
        let mut i = index as i64;
        // Skip over whole pairs of columns, then possibly one more column
        let two_col = 2 * height + self.odd_height();
        let mut dx = 2 * (i / two_col);
        i -= (dx / 2) * two_col;
        if i >= height {
            dx += 1;
            i -= height;
        }
        Ok(self.from_offset(dx, i))
    }

    fn cells(&self) -> impl Iterator<Item = HexCell> + '_ {
        (0..i64::from(self.width)).flat_map(move |dx| {
            (0..self.column_height(dx)).map(move |dy| self.from_offset(dx, dy))
        })
    }
}

/// A disc of hexes around a center hex, i.e. a super hexagon. For radius
/// `r`, the furthest hexes are all `r` steps from the center.
///
/// Hexes are indexed in the same order that [GridCell::disc] yields them:
/// column by column (by x), bottom to top within each column. The index of
/// a hex can be calculated directly, without walking the disc.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexDisc {
    center: HexCell,
    radius: u32,
}

impl HexDisc {
    pub fn new(center: HexCell, radius: u32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> HexCell {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of hexes in the columns to the left of column `dx` (relative
    /// to the center). Columns get taller by one per step towards the
    /// center, from `r + 1` at the edges up to `2r + 1` in the middle.
    fn cells_before(&self, dx: i64) -> i64 {
        let r = i64::from(self.radius);
        if dx <= 0 {
            let k = dx + r;
            k * (r + 1) + k * (k - 1) / 2
        } else {
            self.cells_before(0) + dx * (2 * r + 1) - dx * (dx - 1) / 2
        }
    }

    /// Index of a hex that's known to be in the disc
    pub(crate) fn index_unchecked(&self, cell: HexCell) -> usize {
        let r = i64::from(self.radius);
        let dx = i64::from(cell.x()) - i64::from(self.center.x());
        let dy = i64::from(cell.y()) - i64::from(self.center.y());
        let dy_min = (-r).max(-dx - r);
        (self.cells_before(dx) + dy - dy_min) as usize
    }
}

impl CellRegion for HexDisc {
    type Cell = HexCell;

    fn len(&self) -> usize {
        util::disc_len(self.radius)
    }

    fn index(&self, cell: HexCell) -> Option<usize> {
        if self.center.distance_to(cell) > self.radius {
            return None;
        }
        Some(self.index_unchecked(cell))
    }

    fn deindex(&self, index: usize) -> anyhow::Result<HexCell> {
        let r = i64::from(self.radius);
        let mut i = index as i64;
        for dx in -r..=r {
            let column_height = 2 * r + 1 - dx.abs();
            if i < column_height {
                let dy = (-r).max(-dx - r) + i;
                return Ok(HexCell::new_xy(
                    self.center.x() + dx as i32,
                    self.center.y() + dy as i32,
                ));
            }
            i -= column_height;
        }
        bail!(
            "index {} is outside hex disc of {} hexes",
            index,
            self.len()
        )
    }

    fn cells(&self) -> impl Iterator<Item = HexCell> + '_ {
        self.center.disc(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(x: i32, y: i32, z: i32) -> HexCell {
        HexCell::new(x, y, z).unwrap()
    }

    /// Check that index/deindex agree with the enumeration order
    fn assert_bijection(region: &impl CellRegion<Cell = HexCell>) {
        let cells: Vec<_> = region.cells().collect();
        assert_eq!(cells.len(), region.len());
        for (i, &cell) in cells.iter().enumerate() {
            assert_eq!(region.index(cell), Some(i), "index of {}", cell);
            assert_eq!(region.deindex(i).unwrap(), cell, "deindex of {}", i);
        }
        assert!(region.deindex(region.len()).is_err());
    }

    #[test]
    fn test_hex_rect() {
        let rect = HexRect::new(HexCell::ORIGIN, 3, 3, false, false).unwrap();
        let cells: Vec<_> = rect.cells().collect();
        assert_eq!(
            cells,
            vec![
                hex(0, 0, 0),
                hex(0, 1, -1),
                hex(0, 2, -2),
                hex(1, 0, -1),
                hex(1, 1, -2),
                hex(2, -1, -1),
                hex(2, 0, -2),
                hex(2, 1, -3),
            ]
        );
        assert_bijection(&rect);
    }

    #[test]
    fn test_hex_rect_bumped() {
        let rect = HexRect::new(HexCell::ORIGIN, 3, 3, true, true).unwrap();
        let cells: Vec<_> = rect.cells().collect();
        assert_eq!(
            cells,
            vec![
                hex(0, 0, 0),
                hex(0, 1, -1),
                hex(0, 2, -2),
                hex(1, -1, 0),
                hex(1, 0, -1),
                hex(1, 1, -2),
                hex(1, 2, -3),
                hex(2, -1, -1),
                hex(2, 0, -2),
                hex(2, 1, -3),
            ]
        );
        assert_bijection(&rect);
    }

    #[test]
    fn test_hex_rect_shapes() {
        for &(inc_bottom, inc_top) in
            &[(false, false), (true, false), (false, true), (true, true)]
        {
            for width in 0..6 {
                for height in 1..4 {
                    let rect = HexRect::new(
                        hex(-2, 5, -3),
                        width,
                        height,
                        inc_bottom,
                        inc_top,
                    )
                    .unwrap();
                    assert_bijection(&rect);
                }
            }
        }
        assert!(HexRect::new(HexCell::ORIGIN, 3, 0, false, false).is_err());
    }

    #[test]
    fn test_hex_rect_outside() {
        let rect = HexRect::new(hex(1, 1, -2), 4, 2, false, true).unwrap();
        assert_eq!(rect.index(hex(0, 1, -1)), None);
        assert_eq!(rect.index(hex(5, 0, -5)), None);
        assert_eq!(rect.index(hex(1, 0, -1)), None);
        assert_eq!(rect.index(hex(1, 3, -4)), None);
        assert!(rect.contains(hex(1, 2, -3)));
    }

    #[test]
    fn test_hex_rect_offset() {
        let rect = HexRect::new(hex(1, 1, -2), 4, 2, true, false).unwrap();
        assert_eq!(rect.to_offset(hex(1, 1, -2)), (0, 0));
        for cell in rect.cells() {
            let (dx, dy) = rect.to_offset(cell);
            assert_eq!(rect.from_offset(dx, dy), cell);
        }
        assert_eq!(rect.to_offset(hex(0, 1, -1)).0, -1);
    }

    #[test]
    fn test_hex_disc() {
        for radius in 0..5 {
            let disc = HexDisc::new(hex(3, -1, -2), radius);
            assert_eq!(disc.len(), util::disc_len(radius));
            assert_bijection(&disc);
        }
        let disc = HexDisc::new(HexCell::ORIGIN, 2);
        assert_eq!(disc.index(hex(3, 0, -3)), None);
        assert_eq!(disc.index(hex(-2, 0, 2)), Some(0));
        assert_eq!(disc.index(hex(2, 0, -2)), Some(18));
    }
}
