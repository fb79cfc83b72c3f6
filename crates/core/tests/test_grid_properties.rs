//! Properties that every grid family has to satisfy, checked against a
//! handful of cells from each one

use cellgrid::{
    CellRegion, Grid, GridCell, HexCell, HexDisc, HexGrid, HexRect,
    IndexedCells, SquareCell, SquareGrid, SquareRect, TriCell, TriGrid,
    TrihexCell, TrihexGrid,
};
use std::collections::HashSet;

fn check_neighbours<C: GridCell>(cells: &[C]) {
    for &cell in cells {
        let neighbours: Vec<C> = cell.neighbours().collect();
        let unique: HashSet<C> = neighbours.iter().copied().collect();
        assert_eq!(unique.len(), neighbours.len(), "{}", cell);
        for neighbour in neighbours {
            assert_eq!(cell.distance_to(neighbour), 1);
            assert!(
                neighbour.neighbours().any(|n| n == cell),
                "{} is next to {} but not the other way around",
                cell,
                neighbour
            );
        }
    }
}

fn check_distance<C: GridCell>(cells: &[C]) {
    for &a in cells {
        assert_eq!(a.distance_to(a), 0);
        for &b in cells {
            assert_eq!(a.distance_to(b), b.distance_to(a));
            for &c in cells.iter().step_by(3) {
                let detour = a.distance_to(b) + b.distance_to(c);
                assert!(a.distance_to(c) <= detour);
            }
        }
    }
}

fn check_disc<C: GridCell>(cells: &[C]) {
    for &center in cells.iter().step_by(4) {
        for radius in 0..3 {
            let disc: Vec<C> = center.disc(radius).collect();
            let unique: HashSet<C> = disc.iter().copied().collect();
            assert_eq!(unique.len(), disc.len());
            assert!(unique.contains(&center));
            assert!(disc.iter().all(|c| center.distance_to(*c) <= radius));
            // Growing the radius by one adds exactly the neighbours of the
            // old disc
            let grown: HashSet<C> = center.disc(radius + 1).collect();
            let expected: HashSet<C> = disc
                .iter()
                .flat_map(|c| c.neighbours().chain(Some(*c)))
                .collect();
            assert_eq!(grown, expected);
        }
    }
}

fn check_symmetry<C: GridCell>(cells: &[C]) {
    for &cell in cells {
        assert_eq!(cell.rotate(C::ROTATIONS), cell);
        assert_eq!(cell.rotate(0), cell);
        assert_eq!(cell.reflect().reflect(), cell);
        assert_eq!(cell.reflect_y_axis().reflect_y_axis(), cell);
        for n in 0..C::ROTATIONS {
            assert_eq!(cell.rotate(n).rotate(-n), cell);
            assert_eq!(cell.reflect_by(n).reflect_by(n), cell);
            for &other in cells.iter().step_by(5) {
                assert_eq!(
                    cell.rotate(n).distance_to(other.rotate(n)),
                    cell.distance_to(other)
                );
            }
        }
    }
}

fn check_grid<G: Grid>(grid: &G, cells: &[G::Cell]) {
    for &cell in cells {
        assert_eq!(grid.pick(grid.center(cell)), cell);
        // Every corner is the same distance from the center
        let center = grid.center(cell);
        let corners = grid.corners(cell);
        let radius = center.distance_to(corners[0]);
        for corner in corners {
            assert!((center.distance_to(corner) - radius).abs() < 1e-9);
        }
    }

    for &from in cells.iter().step_by(3) {
        for &to in cells {
            let line: Vec<G::Cell> = grid.line(from, to).collect();
            assert_eq!(line[0], from);
            assert_eq!(line[line.len() - 1], to, "line {} -> {}", from, to);
            for pair in line.windows(2) {
                assert_eq!(
                    pair[0].distance_to(pair[1]),
                    1,
                    "line {} -> {} skips from {} to {}",
                    from,
                    to,
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

fn check_region<R: CellRegion>(region: &R) {
    let cells: Vec<R::Cell> = region.cells().collect();
    assert_eq!(cells.len(), region.len());
    for (i, &cell) in cells.iter().enumerate() {
        assert_eq!(region.index(cell), Some(i));
        assert_eq!(region.deindex(i).unwrap(), cell);
    }
    assert!(region.deindex(region.len()).is_err());
}

fn check_all<G: Grid>(grid: &G, cells: &[G::Cell]) {
    check_neighbours(cells);
    check_distance(cells);
    check_disc(cells);
    check_symmetry(cells);
    check_grid(grid, cells);
}

#[test]
fn test_tri_grid() {
    let cells: Vec<_> = TriCell::new(0, 1, 0).unwrap().disc(2).collect();
    check_all(&TriGrid::default(), &cells);
    check_all(&TriGrid::new(0.7).unwrap(), &cells);
    check_region(&cells.iter().copied().collect::<IndexedCells<_>>());
}

#[test]
fn test_hex_grid() {
    let cells: Vec<_> = HexCell::ORIGIN.disc(3).collect();
    check_all(&HexGrid::default(), &cells);
    check_all(&HexGrid::new(0.7).unwrap(), &cells);
    check_region(&HexDisc::new(HexCell::new(1, -1, 0).unwrap(), 3));
    check_region(
        &HexRect::new(HexCell::new(-2, 1, 1).unwrap(), 5, 4, true, false)
            .unwrap(),
    );
}

#[test]
fn test_trihex_grid() {
    let cells: Vec<_> = TrihexCell::ORIGIN.disc(2).collect();
    check_all(&TrihexGrid::default(), &cells);
    check_all(&TrihexGrid::new(0.7).unwrap(), &cells);
    check_region(&cells.iter().copied().collect::<IndexedCells<_>>());
}

#[test]
fn test_square_grid() {
    let cells: Vec<_> = SquareCell::new(1, -2).disc(3).collect();
    check_all(&SquareGrid::default(), &cells);
    check_all(&SquareGrid::new(0.7).unwrap(), &cells);
    check_region(&SquareRect::new(SquareCell::new(-3, 2), 4, 3));
}
