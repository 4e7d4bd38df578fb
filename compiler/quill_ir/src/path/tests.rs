use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_root_and_child() {
    let root = NodePath::root();
    assert!(root.is_root());
    let child = root.child(2).child(0);
    assert_eq!(child.indices(), &[2, 0]);
    assert_eq!(child.depth(), 2);
    assert_eq!(child.parent(), Some(root.child(2)));
    assert_eq!(root.parent(), None);
}

#[test]
fn test_display() {
    assert_eq!(NodePath::root().to_string(), "/");
    assert_eq!(NodePath::from_indices(&[1, 0, 3]).to_string(), "/1/0/3");
}

#[test]
fn test_span_map_nearest_walks_up() {
    let mut spans = SpanMap::new();
    spans.insert(NodePath::root(), Span::new(0, 10));
    spans.insert(NodePath::from_indices(&[1]), Span::new(4, 7));

    assert_eq!(spans.get(&NodePath::from_indices(&[1])), Some(Span::new(4, 7)));
    assert_eq!(
        spans.nearest(&NodePath::from_indices(&[1, 0])),
        Some(Span::new(4, 7))
    );
    assert_eq!(
        spans.nearest(&NodePath::from_indices(&[0])),
        Some(Span::new(0, 10))
    );
    assert_eq!(SpanMap::new().nearest(&NodePath::root()), None);
}

#[test]
fn test_nested_under() {
    let mut spans = SpanMap::new();
    spans.insert(NodePath::root(), Span::new(0, 3));
    spans.insert(NodePath::from_indices(&[0]), Span::new(1, 2));

    let nested = spans.nested_under(&NodePath::from_indices(&[4]));
    assert_eq!(nested.len(), 2);
    assert_eq!(nested.get(&NodePath::from_indices(&[4])), Some(Span::new(0, 3)));
    assert_eq!(
        nested.get(&NodePath::from_indices(&[4, 0])),
        Some(Span::new(1, 2))
    );

    let mut merged = SpanMap::new();
    merged.extend(nested);
    assert_eq!(merged.len(), 2);
}
