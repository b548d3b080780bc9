use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!((span.start, span.end), (10, 20));
    assert_eq!(Span::point(4), Span::new(4, 4));
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));

    // Order does not matter
    let merged = Span::new(15, 30).merge(Span::new(10, 20));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_from_range_saturates() {
    let span = Span::from_range(3..7);
    assert_eq!(span, Span::new(3, 7));

    let huge = usize::try_from(u64::from(u32::MAX) + 1).unwrap_or(usize::MAX);
    let span = Span::from_range(0..huge);
    assert_eq!(span.end, u32::MAX);
}

#[test]
fn test_span_slice() {
    let source = "let x = 5;";
    assert_eq!(Span::new(4, 5).slice(source), "x");
    assert_eq!(Span::new(8, 100).slice(source), "");
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(1, 4).to_string(), "1..4");
    assert_eq!(format!("{:?}", Span::new(0, 2)), "0..2");
}
