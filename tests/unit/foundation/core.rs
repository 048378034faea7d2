use super::*;

#[test]
fn viewport_rejects_non_finite_and_empty() {
    assert!(Viewport::new(f64::NAN, 800.0, 600.0).is_err());
    assert!(Viewport::new(0.0, f64::INFINITY, 600.0).is_err());
    assert!(Viewport::new(0.0, 800.0, 0.0).is_err());
    assert!(Viewport::new(10.0, 800.0, 600.0).is_ok());
}

#[test]
fn viewport_rect_tracks_scroll() {
    let vp = Viewport::new(250.0, 1280.0, 720.0).unwrap();
    let r = vp.rect();
    assert_eq!(r.y0, 250.0);
    assert_eq!(r.y1, 970.0);
    assert_eq!(r.width(), 1280.0);
}

#[test]
fn inverted_rect_is_rejected() {
    assert!(ensure_finite_rect("t", Rect::new(0.0, 10.0, 5.0, 0.0)).is_err());
    assert!(ensure_finite_rect("t", Rect::new(0.0, 0.0, 5.0, 10.0)).is_ok());
    assert!(ensure_finite_rect("t", Rect::new(0.0, 0.0, f64::NAN, 10.0)).is_err());
}

#[test]
fn negative_scroll_is_clamped_to_top() {
    let vp = Viewport::new(-25.0, 800.0, 600.0).unwrap();
    assert_eq!(vp.scroll_y, 0.0);
    assert_eq!(vp.rect().y0, 0.0);
}
