use super::*;

fn fixture() -> PageLayout {
    PageLayout::from_json(include_str!("../../data/layout.json")).unwrap()
}

#[test]
fn fixture_validates() {
    let layout = fixture();
    layout.validate().unwrap();
    assert_eq!(layout.pinned.start, 900.0);
    assert_eq!(layout.reveal[1].delay_ms, 80);
    assert_eq!(layout.counters[1].suffix, "%");
}

#[test]
fn optional_lists_default_to_empty() {
    let layout = PageLayout::from_json(r#"{"pinned": {"start": 0, "height": 10}}"#).unwrap();
    assert!(layout.sections.is_empty());
    assert!(layout.reveal.is_empty());
    layout.validate().unwrap();
}

#[test]
fn rejects_duplicate_reveal_ids() {
    let mut layout = fixture();
    let dup = layout.reveal[0].clone();
    layout.reveal.push(dup);
    let err = layout.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate reveal target id"));
}

#[test]
fn rejects_inverted_counter_rect() {
    let mut layout = fixture();
    layout.counters[0].rect = Rect::new(0.0, 100.0, 10.0, 50.0);
    assert!(matches!(layout.validate(), Err(LandkitError::Layout(_))));
}

#[test]
fn rejects_negative_pinned_height() {
    let mut layout = fixture();
    layout.pinned.height = -5.0;
    assert!(matches!(layout.validate(), Err(LandkitError::Layout(_))));
}
