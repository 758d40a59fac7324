use super::*;
use crate::parsers::parse;

#[test]
fn test_parse_empty() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("\n   \n# only a comment\n").unwrap().is_empty());
}

#[test]
fn test_parse_space_separated() {
    let img = parse("0 0 5 0\n1 1 1 4\n").unwrap();
    assert_eq!(img.lines(), &[Line::new(0, 0, 5, 0), Line::new(1, 1, 1, 4)]);
}

#[test]
fn test_parse_comma_separated() {
    let img = parse("2,1, 2,3").unwrap();
    assert_eq!(img.lines(), &[Line::new(2, 1, 2, 3)]);
}

#[test]
fn test_parse_negative_values() {
    let img = parse("-3 0 3 0").unwrap();
    assert_eq!(img.lines(), &[Line::new(-3, 0, 3, 0)]);
}

#[test]
fn test_parse_trailing_comment() {
    let img = parse("  0 0 0 2   # left edge").unwrap();
    assert_eq!(img.lines(), &[Line::new(0, 0, 0, 2)]);
}

#[test]
fn test_parse_diagonal_is_accepted() {
    // Diagonals are rejected later, by the rasterizer.
    let img = parse("0 0 3 3").unwrap();
    assert_eq!(img.lines(), &[Line::new(0, 0, 3, 3)]);
}

#[test]
fn test_parse_rect() {
    assert_eq!(parse("rect 6 4").unwrap(), VectorImage::rectangle(6, 4));
    assert_eq!(parse("RECT 6x4").unwrap(), VectorImage::rectangle(6, 4));
    assert_eq!(parse("rectangle 6,4").unwrap(), VectorImage::rectangle(6, 4));
}

#[test]
fn test_parse_rect_zero_rejected() {
    let err = parse("rect 0 4").unwrap_err();
    assert!(matches!(err, RasterError::Parse { line: 1, .. }));
}

#[test]
fn test_parse_mixed_keeps_order() {
    let img = parse("9 9 9 9\nrect 2 2\n").unwrap();
    assert_eq!(img.len(), 5);
    assert_eq!(img.lines()[0], Line::new(9, 9, 9, 9));
    assert_eq!(img.lines()[1], Line::new(0, 0, 1, 0));
}

#[test]
fn test_parse_error_reports_line_number() {
    let err = parse("0 0 1 0\n\nhello\n").unwrap_err();
    match err {
        RasterError::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("hello"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_wrong_arity() {
    assert!(matches!(
        parse("1 2 3"),
        Err(RasterError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_parse_overflow() {
    let err = parse("0 0 99999999999999999999 0").unwrap_err();
    assert!(matches!(err, RasterError::Parse { line: 1, .. }));
}

#[test]
fn test_text_parser_direct() {
    let img = TextParser.parse("0 0 0 0").unwrap();
    assert_eq!(img.lines(), &[Line::new(0, 0, 0, 0)]);
}
