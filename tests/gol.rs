use itertools::iproduct;
use lifegrid::{Coord, Matrix, SquareGrid};

fn grid_from(width: usize, height: usize, cells: &[(usize, usize)]) -> SquareGrid {
    SquareGrid::new_coords(width, height, cells.iter().copied().map(Coord::from))
}

fn shape_grid<F>(width: usize, height: usize, f: F) -> SquareGrid
where
    F: Fn(usize, usize) -> bool,
{
    SquareGrid::new_coords(
        width,
        height,
        iproduct!(0..width, 0..height)
            .filter(|&(x, y)| f(x, y))
            .map(Coord::from),
    )
}

#[test]
fn blinker_oscillates() {
    let horizontal = shape_grid(5, 5, |x, y| y == 2 && x >= 1 && x <= 3);
    let vertical = shape_grid(5, 5, |x, y| x == 2 && y >= 1 && y <= 3);

    let gen1 = horizontal.step();
    assert_eq!(gen1, vertical);
    let gen2 = gen1.step();
    assert_eq!(gen2, horizontal);
}

#[test]
fn plus_pattern_collapses_to_nothing() {
    // Arms survive, the overpopulated center dies, all four corners are born.
    let plus = grid_from(3, 3, &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
    let ring = shape_grid(3, 3, |x, y| !(x == 1 && y == 1));
    assert_eq!(plus.step(), ring);

    // The ring thins to its corners, which then all starve.
    let corners = shape_grid(3, 3, |x, y| x != 1 && y != 1);
    assert_eq!(ring.step(), corners);
    let dead = corners.step();
    assert!(dead.is_empty());
    assert_eq!(dead.step(), dead);
}

#[test]
fn glider_travels_diagonally() {
    let seed: Vec<(usize, usize)> = vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut grid = grid_from(10, 10, &seed);

    for _ in 0..4 {
        grid = grid.step();
        assert_eq!(grid.active_cells().len(), 5);
    }

    let moved: Vec<(usize, usize)> = seed.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(grid, grid_from(10, 10, &moved));
}

#[test]
fn lone_cell_starves() {
    let grid = grid_from(5, 5, &[(2, 2)]);
    assert!(grid.step().is_empty());
}

#[test]
fn block_is_a_fixed_point() {
    // Each block cell has exactly 3 neighbors and survives; nothing is born.
    let block = grid_from(6, 6, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    assert_eq!(block.step(), block);
}

#[test]
fn three_neighbors_give_birth() {
    let elbow = grid_from(6, 6, &[(1, 1), (2, 1), (1, 2)]);
    let block = grid_from(6, 6, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    assert_eq!(elbow.step(), block);
}

#[test]
fn four_neighbors_kill() {
    let crowded = grid_from(5, 5, &[(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)]);
    assert!(!crowded.step().is_alive(Coord::new(1, 1)));
}

#[test]
fn empty_grids_are_fixed_points() {
    for &(width, height) in &[(1, 1), (3, 8), (10, 10)] {
        let empty = SquareGrid::new(width, height);
        let next = empty.step();
        assert!(next.is_empty());
        assert_eq!(next.width(), width);
        assert_eq!(next.height(), height);
        assert_eq!(next, empty);
    }
}

#[test]
fn stepping_is_deterministic() {
    let a = shape_grid(8, 8, |x, y| (x + y) % 3 == 0);
    let b = shape_grid(8, 8, |x, y| (x + y) % 3 == 0);
    assert_eq!(a, b);
    assert_eq!(a.step(), b.step());
    assert_eq!(a.step().step(), b.step().step());
}
