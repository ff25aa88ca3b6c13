//! Grid tests - sparse container behavior through the public API

use crunch::core::Grid2D;

#[test]
fn test_new_grid_dimensions() {
    let grid: Grid2D<u32> = Grid2D::new(9, 9);
    assert_eq!(grid.columns(), 9);
    assert_eq!(grid.rows(), 9);
}

#[test]
fn test_every_cell_starts_empty() {
    let grid: Grid2D<u32> = Grid2D::new(4, 6);
    for row in 0..6 {
        for column in 0..4 {
            assert_eq!(grid.get(column, row), None);
            assert!(!grid.is_occupied(column, row));
        }
    }
}

#[test]
fn test_set_returns_previous_value() {
    let mut grid = Grid2D::new(3, 3);
    assert_eq!(grid.set(2, 2, Some("a")), None);
    assert_eq!(grid.set(2, 2, Some("b")), Some("a"));
    assert_eq!(grid.get(2, 2), Some(&"b"));
}

#[test]
fn test_take_empties_the_cell() {
    let mut grid = Grid2D::new(3, 3);
    grid.set(0, 1, Some(5u8));
    assert_eq!(grid.take(0, 1), Some(5));
    assert_eq!(grid.take(0, 1), None);
}

#[test]
fn test_get_copied_for_copy_types() {
    let mut grid = Grid2D::new(2, 2);
    grid.set(1, 0, Some(42u32));
    assert_eq!(grid.get_copied(1, 0), Some(42));
    assert_eq!(grid.get_copied(0, 0), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_out_of_bounds_access_fails_fast() {
    let grid: Grid2D<u8> = Grid2D::new(9, 9);
    let _ = grid.get(9, 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_out_of_bounds_set_fails_fast() {
    let mut grid: Grid2D<u8> = Grid2D::new(9, 9);
    grid.set(0, 9, Some(1));
}
