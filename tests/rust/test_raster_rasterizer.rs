use super::*;

#[test]
fn test_minmax() {
    assert_eq!(minmax(3, 1), (1, 3));
    assert_eq!(minmax(1, 3), (1, 3));
    assert_eq!(minmax(2, 2), (2, 2));
}

#[test]
fn test_horizontal_line() {
    let pts = rasterize(&Line::new(2, 5, 6, 5)).unwrap();
    assert_eq!(pts.len(), 5);
    assert!(pts.iter().all(|p| p.y == 5));
    let xs: Vec<i64> = pts.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_vertical_line() {
    let pts = rasterize(&Line::new(1, 0, 1, 3)).unwrap();
    assert_eq!(
        pts,
        vec![
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(1, 3),
        ]
    );
}

#[test]
fn test_point_count_matches_span() {
    for len in 0..20 {
        let h = rasterize(&Line::new(0, 7, len, 7)).unwrap();
        assert_eq!(h.len() as i64, len + 1);
        let v = rasterize(&Line::new(7, 0, 7, len)).unwrap();
        assert_eq!(v.len() as i64, len + 1);
    }
}

#[test]
fn test_swapped_endpoints_same_output() {
    let lines = [
        Line::new(0, 0, 5, 0),
        Line::new(3, 9, 3, 2),
        Line::new(-4, 1, 4, 1),
    ];
    for line in lines {
        let reversed = Line::new(line.x2, line.y2, line.x1, line.y1);
        assert_eq!(rasterize(&line).unwrap(), rasterize(&reversed).unwrap());
    }
}

#[test]
fn test_degenerate_line_single_point() {
    let pts = rasterize(&Line::new(4, 4, 4, 4)).unwrap();
    assert_eq!(pts, vec![Point::new(4, 4)]);
}

#[test]
fn test_negative_coordinates_rasterize() {
    let pts = rasterize(&Line::new(-2, -1, 0, -1)).unwrap();
    assert_eq!(
        pts,
        vec![Point::new(-2, -1), Point::new(-1, -1), Point::new(0, -1)]
    );
}

#[test]
fn test_diagonal_fails() {
    let line = Line::new(0, 0, 3, 3);
    assert_eq!(
        rasterize(&line),
        Err(RasterError::UnsupportedGeometry { line })
    );
}

#[test]
fn test_rasterize_is_deterministic() {
    let line = Line::new(9, 1, 0, 1);
    assert_eq!(rasterize(&line).unwrap(), rasterize(&line).unwrap());
}
