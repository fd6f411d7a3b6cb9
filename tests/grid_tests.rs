//! Well storage tests through the public crate surface.

use cubewell::core::{Grid, Tetromino};
use cubewell::types::{Rgb, ShapeKind, Vec3};

const GRAY: Rgb = Rgb::new(160, 160, 160);

fn well() -> Grid {
    Grid::new(5, 16, 5)
}

/// Covers one five-wide row at (y, z) with two overlapping bars.
fn place_bar_row(grid: &mut Grid, y: i32, z: i32) {
    for x0 in [0, 1] {
        let mut bar = Tetromino::new(ShapeKind::I, GRAY);
        bar.translate(Vec3::new(x0 as f32, y as f32, z as f32));
        grid.place(&bar);
    }
}

fn fill_layer(grid: &mut Grid, y: i32) {
    for z in 0..grid.depth() {
        place_bar_row(grid, y, z);
    }
}

#[test]
fn test_grid_starts_empty() {
    let grid = well();
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.height(), 16);
    assert_eq!(grid.depth(), 5);
    assert_eq!(grid.occupied_cells(), 0);

    for y in 0..16 {
        assert_eq!(grid.layer_count(y), 0);
    }
    assert!(!grid.is_occupied(2, 0, 2));
}

#[test]
fn test_queries_outside_the_well_are_harmless() {
    let grid = well();

    assert!(!grid.is_occupied(-1, 0, 0));
    assert!(!grid.is_occupied(0, -1, 0));
    assert!(!grid.is_occupied(0, 0, -1));
    assert!(!grid.is_occupied(5, 0, 0));
    assert!(!grid.is_occupied(0, 16, 0));
    assert!(!grid.is_occupied(0, 0, 5));

    assert_eq!(grid.color_at(-1, 0, 0), None);
    assert_eq!(grid.color_at(5, 15, 4), None);
    assert_eq!(grid.layer_count(-1), 0);
    assert_eq!(grid.layer_count(16), 0);
}

#[test]
fn test_place_writes_all_four_blocks() {
    let mut grid = well();
    let mut piece = Tetromino::new(ShapeKind::O, Rgb::new(220, 180, 40));
    piece.translate(Vec3::new(1.0, 0.0, 1.0));
    grid.place(&piece);

    for (x, y, z) in [(1, 0, 1), (2, 0, 1), (1, 1, 1), (2, 1, 1)] {
        assert!(grid.is_occupied(x, y, z), "({x}, {y}, {z}) should be set");
        assert_eq!(grid.color_at(x, y, z), Some(Rgb::new(220, 180, 40)));
    }
    assert_eq!(grid.occupied_cells(), 4);
    assert_eq!(grid.layer_count(0), 2);
    assert_eq!(grid.layer_count(1), 2);
}

#[test]
fn test_collides_with_walls_floor_and_stack() {
    let mut grid = well();

    let mut over_left = Tetromino::new(ShapeKind::I, GRAY);
    over_left.translate(Vec3::new(-1.0, 0.0, 0.0));
    assert!(grid.collides(&over_left));

    let mut below_floor = Tetromino::new(ShapeKind::I, GRAY);
    below_floor.translate(Vec3::new(0.0, -1.0, 0.0));
    assert!(grid.collides(&below_floor));

    let settled = Tetromino::new(ShapeKind::O, GRAY);
    grid.place(&settled);
    assert!(grid.collides(&Tetromino::new(ShapeKind::O, GRAY)));

    let mut beside = Tetromino::new(ShapeKind::O, GRAY);
    beside.translate(Vec3::new(2.0, 0.0, 0.0));
    assert!(!grid.collides(&beside));
}

#[test]
fn test_full_layer_drops_the_stack() {
    let mut grid = well();
    fill_layer(&mut grid, 0);
    assert_eq!(grid.layer_count(0), 25);

    let mut marker = Tetromino::new(ShapeKind::O, GRAY);
    marker.translate(Vec3::new(0.0, 1.0, 0.0));
    grid.place(&marker);

    assert_eq!(grid.clear_full_layers(), 1);

    assert_eq!(grid.occupied_cells(), 4);
    for (x, y, z) in [(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)] {
        assert!(grid.is_occupied(x, y, z), "marker should land at ({x}, {y}, {z})");
    }
    assert_eq!(grid.layer_count(0), 2);
    assert_eq!(grid.layer_count(1), 2);
}

#[test]
fn test_adjacent_full_layers_clear_together() {
    let mut grid = well();
    fill_layer(&mut grid, 0);
    fill_layer(&mut grid, 1);

    let mut marker = Tetromino::new(ShapeKind::O, GRAY);
    marker.translate(Vec3::new(0.0, 2.0, 0.0));
    grid.place(&marker);

    assert_eq!(grid.clear_full_layers(), 2);
    assert_eq!(grid.occupied_cells(), 4);
    assert!(grid.is_occupied(0, 0, 0));
    assert!(grid.is_occupied(0, 1, 0));
    assert!(!grid.is_occupied(0, 2, 0));
}

#[test]
fn test_separated_full_layers_compact_the_middle() {
    let mut grid = well();
    fill_layer(&mut grid, 0);
    fill_layer(&mut grid, 2);

    // A lone bar in the gap layer between the two full ones.
    let mut bar = Tetromino::new(ShapeKind::I, GRAY);
    bar.translate(Vec3::new(0.0, 1.0, 0.0));
    grid.place(&bar);

    assert_eq!(grid.clear_full_layers(), 2);
    assert_eq!(grid.occupied_cells(), 4);
    for x in 0..4 {
        assert!(grid.is_occupied(x, 0, 0), "bar block {x} should settle at the bottom");
    }
    assert_eq!(grid.layer_count(1), 0);
    assert_eq!(grid.layer_count(2), 0);
}

#[test]
fn test_clear_resets_everything() {
    let mut grid = well();
    fill_layer(&mut grid, 0);
    let mut marker = Tetromino::new(ShapeKind::T, GRAY);
    marker.translate(Vec3::new(0.0, 3.0, 2.0));
    grid.place(&marker);

    grid.clear();

    assert_eq!(grid.occupied_cells(), 0);
    for y in 0..grid.height() {
        assert_eq!(grid.layer_count(y), 0);
    }
}
