//! Integration tests for the winning-line geometry calculator.

use strikeline::game::{Position, Triple};
use strikeline::geometry::{
    GeometryError, LayoutProvider, Orientation, Point, Rect, STROKE_THICKNESS, compute_line,
    compute_line_from,
};

/// Three 80-unit cells per axis with 10-unit gaps, board at the origin.
fn grid(origin: Point) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        Rect::new(
            origin.x + pos.column() as f64 * 90.0,
            origin.y + pos.row() as f64 * 90.0,
            80.0,
            80.0,
        )
    })
}

#[test]
fn test_row_length_covers_cells_and_gaps() {
    for (i, triple) in Triple::ALL[0..3].iter().enumerate() {
        let line = compute_line(*triple, &grid(Point::new(0.0, 0.0)), Point::new(0.0, 0.0))
            .expect("Canonical triple");
        assert_eq!(line.orientation, Orientation::Horizontal);
        assert_eq!(line.length, 260.0, "row {}", i);
        assert_eq!(line.thickness, STROKE_THICKNESS);
        assert!(line.rotation_degrees.is_none());
    }
}

#[test]
fn test_column_length_covers_cells_and_gaps() {
    for triple in &Triple::ALL[3..6] {
        let line = compute_line(*triple, &grid(Point::new(0.0, 0.0)), Point::new(0.0, 0.0))
            .expect("Canonical triple");
        assert_eq!(line.orientation, Orientation::Vertical);
        assert_eq!(line.length, 260.0);
    }
}

#[test]
fn test_main_diagonal_rotation_and_length() {
    // Cell 0 centered at (50, 50), cell 8 centered at (350, 350).
    let grid = Position::ALL.map(|pos| {
        Rect::new(
            10.0 + pos.column() as f64 * 150.0,
            10.0 + pos.row() as f64 * 150.0,
            80.0,
            80.0,
        )
    });

    let line =
        compute_line(Triple::ALL[6], &grid, Point::new(0.0, 0.0)).expect("Canonical triple");
    assert_eq!(line.orientation, Orientation::Diagonal);
    assert_eq!(line.origin, Point::new(50.0, 50.0));
    assert_eq!(line.rotation_degrees, Some(45.0));
    assert!((line.length - 424.26).abs() < 0.01);
}

#[test]
fn test_anti_diagonal_origin_is_top_right_cell() {
    let line = compute_line(
        Triple::ALL[7],
        &grid(Point::new(0.0, 0.0)),
        Point::new(0.0, 0.0),
    )
    .expect("Canonical triple");

    assert_eq!(line.orientation, Orientation::AntiDiagonal);
    assert_eq!(line.origin, Point::new(220.0, 40.0));
    assert_eq!(line.rotation_degrees, Some(135.0));
}

#[test]
fn test_output_is_board_relative() {
    // Same board drawn at two screen offsets yields identical lines.
    let at_origin = compute_line(
        Triple::ALL[6],
        &grid(Point::new(0.0, 0.0)),
        Point::new(0.0, 0.0),
    )
    .unwrap();
    let scrolled = compute_line(
        Triple::ALL[6],
        &grid(Point::new(120.0, 480.0)),
        Point::new(120.0, 480.0),
    )
    .unwrap();

    assert_eq!(at_origin, scrolled);
}

#[test]
fn test_unknown_triple_fails_instead_of_degenerate_line() {
    let bogus = Triple::new([Position::TopLeft, Position::Center, Position::TopRight]);
    let err = compute_line(bogus, &grid(Point::new(0.0, 0.0)), Point::new(0.0, 0.0)).unwrap_err();
    assert_eq!(err, GeometryError::UnknownTriple(bogus));
}

#[test]
fn test_endpoints_match_cell_centers_for_diagonals() {
    let cells = grid(Point::new(0.0, 0.0));
    let line = compute_line(Triple::ALL[6], &cells, Point::new(0.0, 0.0)).unwrap();
    let (start, end) = line.endpoints();

    assert_eq!(start, cells[0].center());
    assert!((end.x - cells[8].center().x).abs() < 1e-9);
    assert!((end.y - cells[8].center().y).abs() < 1e-9);
}

#[test]
fn test_layout_provider_injection() {
    struct FixedLayout {
        origin: Point,
        cells: [Rect; 9],
    }

    impl LayoutProvider for FixedLayout {
        fn board_origin(&self) -> Point {
            self.origin
        }
        fn cell_rect(&self, pos: Position) -> Rect {
            self.cells[pos.to_index()]
        }
    }

    let provider = FixedLayout {
        origin: Point::new(0.0, 0.0),
        cells: grid(Point::new(0.0, 0.0)),
    };

    let line = compute_line_from(&provider, Triple::ALL[0]).expect("Canonical triple");
    assert_eq!(line.length, 260.0);
}
