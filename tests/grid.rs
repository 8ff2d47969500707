use introquest::geometry::Position;
use introquest::grid::*;

#[test]
fn village_is_sixteen_by_twelve() {
    let g = ObstacleGrid::village();
    assert_eq!(g.width(), MAP_WIDTH);
    assert_eq!(g.height(), MAP_HEIGHT);
    assert_eq!((g.width(), g.height()), (16, 12));
}

#[test]
fn village_border_is_solid() {
    let g = ObstacleGrid::village();
    for x in 0..16 {
        assert!(g.is_blocked(Position::new(x, 0)));
        assert!(g.is_blocked(Position::new(x, 11)));
    }
    for y in 0..12 {
        assert!(g.is_blocked(Position::new(0, y)));
        assert!(g.is_blocked(Position::new(15, y)));
    }
}

#[test]
fn village_interior_obstacles() {
    let g = ObstacleGrid::village();
    for pos in [(3, 2), (4, 3), (10, 2), (12, 3), (13, 8), (6, 9), (9, 9)] {
        assert!(g.is_blocked(Position::new(pos.0, pos.1)), "{pos:?} should be blocked");
    }
    for pos in [(1, 1), (5, 5), (8, 5), (8, 4), (12, 7), (3, 9)] {
        assert!(g.is_passable(Position::new(pos.0, pos.1)), "{pos:?} should be open");
    }
}

#[test]
fn out_of_bounds_counts_as_blocked() {
    let g = ObstacleGrid::village();
    for pos in [(-1, 0), (0, -1), (16, 5), (5, 12)] {
        let p = Position::new(pos.0, pos.1);
        assert!(!g.in_bounds(p));
        assert!(g.is_blocked(p));
        assert!(!g.is_passable(p));
    }
}

#[test]
fn from_rows_pads_short_rows_with_open_cells() {
    let g = ObstacleGrid::from_rows(&[vec![1u8, 0, 1], vec![1u8]]);
    assert_eq!((g.width(), g.height()), (3, 2));
    assert!(g.is_blocked(Position::new(0, 1)));
    assert!(g.is_passable(Position::new(1, 1)));
    assert!(g.is_passable(Position::new(2, 1)));
}
