use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration shared by every grid. A grid is fully defined by its edge
/// length; the tiling sections only matter to the hierarchical tilings. Two
/// grids built from the same config will always agree on every conversion.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Length of one edge of a cell, in cartesian units. Applies uniformly to
    /// every cell↔point conversion. Hex and trihex grids share it with the
    /// triangle grid underneath them.
    #[validate(range(min = 0.000001))]
    pub edge_length: f64,

    /// Config for grouping hexes into disc-shaped parent tiles
    #[validate]
    pub hex_tiling: HexTilingConfig,

    /// Config for grouping squares into rectangular parent tiles
    #[validate]
    pub square_tiling: SquareTilingConfig,
}

/// Configuration for [HexTiling](crate::HexTiling). Every parent tile is a
/// disc of hexes of this radius.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexTilingConfig {
    /// Radius of each parent disc. 1 means 7 children per parent, 2 means 19,
    /// and so on. A radius of 0 would make every hex its own parent, which is
    /// pointless so we don't allow it.
    #[validate(range(min = 1, max = 10000))]
    pub radius: u16,
}

/// Configuration for [SquareTiling](crate::SquareTiling). Every parent tile
/// is a `width × height` rectangle of squares.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SquareTilingConfig {
    #[validate(range(min = 1, max = 10000))]
    pub width: u32,
    #[validate(range(min = 1, max = 10000))]
    pub height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            edge_length: 1.0,
            hex_tiling: HexTilingConfig::default(),
            square_tiling: SquareTilingConfig::default(),
        }
    }
}

impl Default for HexTilingConfig {
    fn default() -> Self {
        Self { radius: 2 }
    }
}

impl Default for SquareTilingConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 2,
        }
    }
}
