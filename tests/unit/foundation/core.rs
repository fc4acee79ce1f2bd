use super::*;

#[test]
fn size_display_and_emptiness() {
    assert_eq!(Size::new(100, 50).to_string(), "100x50");
    assert!(Size::new(0, 10).is_empty());
    assert!(!Size::new(1, 1).is_empty());
    assert_eq!(Size::new(3, 4).area(), 12);
}

#[test]
fn rect_new_clamps_negative_extents() {
    let r = Rect::new(5, 5, -3, 2);
    assert_eq!(r.width, 0);
    assert!(r.is_empty());
}

#[test]
fn rect_contains_boundaries() {
    let r = Rect::new(2, 3, 4, 2);
    assert!(r.contains(2, 3));
    assert!(r.contains(5, 4));
    assert!(!r.contains(6, 4));
    assert!(!r.contains(5, 5));
    assert!(r.contains_rect(Rect::new(3, 3, 3, 2)));
    assert!(!r.contains_rect(Rect::new(3, 3, 4, 2)));
}

#[test]
fn rect_intersect_clips_and_rejects_disjoint() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(-5, 8, 8, 8);
    assert_eq!(a.intersect(b), Some(Rect::new(0, 8, 3, 2)));
    assert_eq!(a.intersect(Rect::new(10, 0, 5, 5)), None);
}

#[test]
fn rect_from_size_is_anchored_at_origin() {
    assert_eq!(Rect::from(Size::new(7, 9)), Rect::new(0, 0, 7, 9));
}
