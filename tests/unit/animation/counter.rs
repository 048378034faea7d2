use super::*;

fn counter(target: u64, suffix: &str) -> CounterAnimation {
    CounterAnimation::new(target, suffix, DEFAULT_COUNTER_DURATION_MS).unwrap()
}

#[test]
fn idle_counter_shows_zero_with_suffix() {
    let c = counter(100, "%");
    assert!(!c.is_started());
    assert_eq!(c.text_at(5_000.0), "0%");
    assert!(!c.is_finished(5_000.0));
}

#[test]
fn counts_up_and_lands_on_target() {
    let mut c = counter(100, "%");
    c.start(1_000.0);
    assert_eq!(c.value_at(1_000.0), 0);
    // half time under out-cubic is 87.5% of the target
    assert_eq!(c.value_at(1_700.0), 88);
    assert_eq!(c.text_at(2_400.0), "100%");
    assert!(c.is_finished(2_400.0));
    assert_eq!(c.value_at(99_999.0), 100);
}

#[test]
fn restart_keeps_first_start() {
    let mut c = counter(3, "x");
    c.start(0.0);
    c.start(1_000.0);
    assert!(c.is_finished(1_400.0));
}

#[test]
fn clock_before_start_clamps_to_zero() {
    let mut c = counter(50, "");
    c.start(500.0);
    assert_eq!(c.value_at(100.0), 0);
}

#[test]
fn values_never_decrease() {
    let mut c = counter(1_000, "");
    c.start(0.0);
    let mut prev = 0;
    for step in 0..=140 {
        let v = c.value_at(f64::from(step) * 10.0);
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(prev, 1_000);
}

#[test]
fn rejects_bad_duration() {
    assert!(CounterAnimation::new(1, "", 0.0).is_err());
    assert!(CounterAnimation::new(1, "", f64::NAN).is_err());
}
