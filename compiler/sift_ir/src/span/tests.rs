use super::*;

#[test]
fn test_span_basic() {
    assert_eq!(Span::new(10, 20).to_range(), 10..20);
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_debug_format() {
    assert_eq!(format!("{:?}", Span::new(3, 7)), "3..7");
}
