use cellgrid::{
    GridConfig, HexGrid, HexTiling, HexTilingConfig, SquareGrid,
    SquareTiling, SquareTilingConfig, TriGrid, TrihexGrid,
};
use validator::ValidationErrors;

fn invalid_config() -> GridConfig {
    GridConfig {
        edge_length: -1.0, // invalid
        hex_tiling: HexTilingConfig {
            radius: 0, // invalid
        },
        square_tiling: SquareTilingConfig {
            width: 0,  // invalid
            height: 1, // valid
        },
    }
}

/// Get the names of the top-level fields that failed validation
fn error_fields(err: anyhow::Error) -> Vec<&'static str> {
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    error_fields
}

#[test]
fn test_grid_config_validation() {
    let config = invalid_config();
    let expected = vec!["edge_length", "hex_tiling", "square_tiling"];

    // Every constructor runs the same validation
    assert_eq!(
        error_fields(TriGrid::from_config(&config).unwrap_err()),
        expected
    );
    assert_eq!(
        error_fields(HexGrid::from_config(&config).unwrap_err()),
        expected
    );
    assert_eq!(
        error_fields(TrihexGrid::from_config(&config).unwrap_err()),
        expected
    );
    assert_eq!(
        error_fields(SquareGrid::from_config(&config).unwrap_err()),
        expected
    );
    assert_eq!(
        error_fields(HexTiling::from_config(&config).unwrap_err()),
        expected
    );
    assert_eq!(
        error_fields(SquareTiling::from_config(&config).unwrap_err()),
        expected
    );
}

#[test]
fn test_grid_config_too_big() {
    let config = GridConfig {
        hex_tiling: HexTilingConfig { radius: 10001 }, // invalid (too big)
        ..GridConfig::default()
    };
    assert_eq!(
        error_fields(HexTiling::from_config(&config).unwrap_err()),
        vec!["hex_tiling"]
    );
}

#[test]
fn test_square_tiling_too_big() {
    let config = GridConfig {
        square_tiling: SquareTilingConfig {
            width: 2,
            height: u32::MAX, // invalid (too big)
        },
        ..GridConfig::default()
    };
    assert_eq!(
        error_fields(SquareTiling::from_config(&config).unwrap_err()),
        vec!["square_tiling"]
    );
}

#[test]
fn test_grid_config_valid() {
    let config = GridConfig {
        edge_length: 0.25,
        ..GridConfig::default()
    };
    let grid = HexGrid::from_config(&config).unwrap();
    assert_eq!(cellgrid::Grid::edge_length(&grid), 0.25);
    let tiling = HexTiling::from_config(&config).unwrap();
    assert_eq!(tiling.radius(), 2);
    let tiling = SquareTiling::from_config(&config).unwrap();
    assert_eq!((tiling.width(), tiling.height()), (3, 2));
}
