use super::*;
use crate::interact::theme::MemoryThemeStore;

fn layout() -> PageLayout {
    PageLayout::from_json(include_str!("../../data/layout.json")).unwrap()
}

fn controller_at(scroll_y: f64, width: f64) -> PageController {
    PageController::new(
        layout(),
        ControllerConfig::default(),
        Viewport::new(scroll_y, width, 1000.0).unwrap(),
        Box::new(MemoryThemeStore::default()),
        None,
    )
    .unwrap()
}

#[test]
fn initial_state_at_top() {
    let c = controller_at(0.0, 1280.0);
    let s = c.snapshot();
    assert_eq!(s.hero.progress, 0.0);
    assert!(!s.header_scrolled);
    assert!(!s.menu_open);
    assert_eq!(s.theme, Theme::Light);
    assert!(s.revealed.is_empty());
    assert_eq!(s.counters["stat-1"], "0%");
}

#[test]
fn scroll_drives_hero_progress() {
    // pinned region: start 900, height 2000, viewport 1000 -> 1000px of travel
    let mut c = controller_at(0.0, 1280.0);
    c.on_scroll(1400.0).unwrap();
    assert_eq!(c.progress(), 0.5);
    let s = c.snapshot();
    assert_eq!(s.hero.phase_two_opacity, 0.5);
    assert!(s.hero.past_start);
    assert!(s.header_scrolled);

    c.on_scroll(5000.0).unwrap();
    assert_eq!(c.progress(), 1.0);
    c.on_scroll(0.0).unwrap();
    assert_eq!(c.progress(), 0.0);
}

#[test]
fn resize_recomputes_progress() {
    let mut c = controller_at(1400.0, 1280.0);
    assert_eq!(c.progress(), 0.5);
    // taller viewport shortens the travel to 500px
    c.on_resize(1280.0, 1500.0).unwrap();
    assert_eq!(c.progress(), 1.0);
}

#[test]
fn non_finite_input_leaves_state_untouched() {
    let mut c = controller_at(1400.0, 1280.0);
    let before = c.snapshot();
    assert!(c.on_scroll(f64::NAN).is_err());
    assert!(c.on_resize(f64::INFINITY, 900.0).is_err());
    assert!(c.on_resize(1280.0, 0.0).is_err());
    assert!(c.tick(f64::NAN).is_err());
    assert_eq!(c.snapshot(), before);
}

#[test]
fn negative_initial_offset_is_clamped_to_top() {
    let c = PageController::new(
        layout(),
        ControllerConfig::default(),
        Viewport {
            scroll_y: -30.0,
            width: 1280.0,
            height: 1000.0,
        },
        Box::new(MemoryThemeStore::default()),
        None,
    )
    .unwrap();
    assert_eq!(c.viewport().scroll_y, 0.0);
    assert_eq!(c.progress(), 0.0);
}

#[test]
fn negative_scroll_is_clamped_to_top() {
    let mut c = controller_at(500.0, 1280.0);
    c.on_scroll(-30.0).unwrap();
    assert_eq!(c.viewport().scroll_y, 0.0);
}

#[test]
fn reveal_targets_fire_once_with_delays() {
    let mut c = controller_at(0.0, 1280.0);
    c.on_scroll(2600.0).unwrap();
    let s = c.snapshot();
    let ids: Vec<&str> = s.revealed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["hierarchy-0", "hierarchy-1"]);
    assert_eq!(s.revealed[1].delay_ms, 80);

    c.on_scroll(0.0).unwrap();
    c.on_scroll(2600.0).unwrap();
    assert_eq!(c.snapshot().revealed.len(), 2);
}

#[test]
fn counters_start_on_the_tick_after_they_are_seen() {
    let mut c = controller_at(0.0, 1280.0);
    c.tick(10_000.0).unwrap();
    // stats sit at 2950..3050; viewport bottom at 3000 shows half
    c.on_scroll(2000.0).unwrap();
    assert!(c.is_animating());
    assert_eq!(c.snapshot().counters["stat-1"], "0%");

    c.tick(10_016.0).unwrap();
    assert_eq!(c.snapshot().counters["stat-1"], "0%");

    c.tick(10_716.0).unwrap();
    assert_eq!(c.snapshot().counters["stat-1"], "88%");

    c.tick(11_416.0).unwrap();
    let s = c.snapshot();
    assert_eq!(s.counters["stat-1"], "100%");
    assert_eq!(s.counters["stat-0"], "3x");
    assert!(!s.animating);
}

#[test]
fn idle_clock_does_not_skip_the_count_up() {
    let mut c = controller_at(0.0, 1280.0);
    c.tick(1_000.0).unwrap();
    assert!(!c.is_animating());

    // host stops ticking while idle; a minute later the stats scroll into view
    c.on_scroll(2000.0).unwrap();
    assert!(c.is_animating());
    c.tick(60_016.0).unwrap();
    let s = c.snapshot();
    assert_eq!(s.counters["stat-1"], "0%");
    assert!(s.animating);

    c.tick(60_716.0).unwrap();
    assert_eq!(c.snapshot().counters["stat-1"], "88%");
}

#[test]
fn clock_is_monotonic() {
    let mut c = controller_at(2000.0, 1280.0);
    c.tick(0.0).unwrap();
    c.tick(700.0).unwrap();
    c.tick(100.0).unwrap();
    assert_eq!(c.snapshot().counters["stat-1"], "88%");
}

#[test]
fn menu_lifecycle() {
    let mut c = controller_at(0.0, 390.0);
    assert!(c.on_hamburger());
    c.on_nav_link();
    assert!(!c.snapshot().menu_open);

    assert!(c.on_hamburger());
    c.on_resize(1024.0, 1000.0).unwrap();
    assert!(!c.snapshot().menu_open);
}

#[test]
fn anchors_resolve_against_layout_sections() {
    let c = controller_at(0.0, 1280.0);
    assert_eq!(c.on_anchor_click("#products"), Some(4110.0));
    assert_eq!(c.on_anchor_click("#"), None);
    assert_eq!(c.on_anchor_click("#nowhere"), None);
}

#[test]
fn theme_toggle_uses_store() {
    let mut c = PageController::new(
        layout(),
        ControllerConfig::default(),
        Viewport::new(0.0, 1280.0, 1000.0).unwrap(),
        Box::new(MemoryThemeStore::new(Some(Theme::Dark))),
        Some(Theme::Light),
    )
    .unwrap();
    assert_eq!(c.theme(), Theme::Dark);
    assert_eq!(c.toggle_theme().unwrap(), Theme::Light);
    assert_eq!(c.snapshot().theme, Theme::Light);
}

#[test]
fn invalid_layout_is_rejected() {
    let mut bad = layout();
    bad.pinned.start = f64::NAN;
    let res = PageController::new(
        bad,
        ControllerConfig::default(),
        Viewport::new(0.0, 1280.0, 1000.0).unwrap(),
        Box::new(MemoryThemeStore::default()),
        None,
    );
    assert!(res.is_err());
}
