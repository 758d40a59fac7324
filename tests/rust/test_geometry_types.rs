use super::*;

#[test]
fn test_point_new() {
    let p = Point::new(3, 4);
    assert_eq!(p.x, 3);
    assert_eq!(p.y, 4);
    assert_eq!(p.to_string(), "(3, 4)");
}

#[test]
fn test_line_orientation() {
    assert!(Line::new(0, 2, 5, 2).is_horizontal());
    assert!(!Line::new(0, 2, 5, 2).is_vertical());
    assert!(Line::new(1, 0, 1, 9).is_vertical());
    assert!(Line::new(4, 4, 4, 4).is_degenerate());
    assert!(!Line::new(0, 0, 3, 3).is_axis_aligned());
}

#[test]
fn test_rectangle_lines() {
    let rc = VectorImage::rectangle(6, 4);
    assert_eq!(
        rc.lines(),
        &[
            Line::new(0, 0, 5, 0),
            Line::new(0, 0, 0, 3),
            Line::new(5, 0, 5, 3),
            Line::new(0, 3, 5, 3),
        ]
    );
    assert_eq!(rc.len(), 4);
}

#[test]
fn test_empty_image() {
    let img = VectorImage::default();
    assert!(img.is_empty());
    assert_eq!(img.len(), 0);
}

#[test]
fn test_key_equal_for_equal_lines() {
    let a = Line::new(1, 2, 3, 2);
    let b = Line::new(1, 2, 3, 2);
    assert_eq!(a.key(), b.key());
}

#[test]
fn test_key_is_order_sensitive() {
    // No endpoint normalization: swapped endpoints are a different key.
    let a = Line::new(0, 0, 3, 0);
    let b = Line::new(3, 0, 0, 0);
    assert_ne!(a.key(), b.key());
}

#[test]
fn test_key_distinguishes_field_positions() {
    assert_ne!(Line::new(1, 0, 0, 0).key(), Line::new(0, 1, 0, 0).key());
}

#[test]
fn test_key_display_is_hex() {
    let key = Line::new(0, 0, 0, 1).key();
    let s = key.to_string();
    assert_eq!(s.len(), 64);
    assert!(s.ends_with("01"));
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_key_negative_values() {
    let key = Line::new(-1, 0, 0, 0).key();
    assert_eq!(&key.as_bytes()[..8], &[0xff; 8]);
}
