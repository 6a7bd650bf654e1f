#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Attribute parsing
// =============================================================

#[test]
fn leading_int_stops_at_first_non_digit() {
    assert_eq!(parse_leading_int("1500"), Some(1500));
    assert_eq!(parse_leading_int("  42px"), Some(42));
    assert_eq!(parse_leading_int("12.9"), Some(12));
    assert_eq!(parse_leading_int("-7"), Some(-7));
    assert_eq!(parse_leading_int("+3"), Some(3));
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("-"), None);
}

#[test]
fn duration_falls_back_for_zero_and_garbage() {
    assert_eq!(duration_or(Some("800"), 2000.0), 800.0);
    assert_eq!(duration_or(Some("0"), 2000.0), 2000.0);
    assert_eq!(duration_or(Some("-5"), 2000.0), 2000.0);
    assert_eq!(duration_or(Some("soon"), 2000.0), 2000.0);
    assert_eq!(duration_or(None, 1500.0), 1500.0);
}

#[test]
fn counter_spec_requires_numeric_target() {
    assert_eq!(CounterSpec::from_attrs(None, None, 2000.0), None);
    assert_eq!(CounterSpec::from_attrs(Some("many"), None, 2000.0), None);
    let spec = CounterSpec::from_attrs(Some("250"), Some("400"), 2000.0).expect("numeric target parses");
    assert_eq!(spec.target, 250);
    assert_eq!(spec.duration_ms, 400.0);
}

#[test]
fn reveal_delay_formats_milliseconds() {
    assert_eq!(reveal_delay(Some("200")).as_deref(), Some("200ms"));
    assert_eq!(reveal_delay(Some("-50")).as_deref(), Some("0ms"));
    assert_eq!(reveal_delay(Some("late")), None);
    assert_eq!(reveal_delay(None), None);
}

// =============================================================
// Counter easing
// =============================================================

#[test]
fn ease_out_quart_endpoints() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert_eq!(ease_out_quart(0.5), 1.0 - 0.0625);
}

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
    assert_eq!(format_count(-12_345), "-12,345");
}

#[test]
fn counter_progress_clamps_before_start_and_after_end() {
    let anim = CounterAnimation::new(CounterSpec { target: 100, duration_ms: 1000.0 }, 500.0);
    assert_eq!(anim.progress(0.0), 0.0);
    assert_eq!(anim.progress(1000.0), 0.5);
    assert_eq!(anim.progress(9000.0), 1.0);
}

#[test]
fn counter_midpoint_follows_quartic_curve() {
    let anim = CounterAnimation::new(CounterSpec { target: 1000, duration_ms: 1000.0 }, 0.0);
    let frame = anim.sample(500.0);
    assert!(!frame.done);
    assert_eq!(frame.value, 937);
}

#[test]
fn counter_frames_end_exactly_on_target_for_any_frame_rate() {
    let targets = [1, 7, 99, 100, 1234, 98_765, -40];
    let durations = [1.0, 16.0, 300.0, 2000.0, 4999.0];
    let frame_intervals = [1.0, 7.3, 16.67, 33.3, 250.0];
    for &target in &targets {
        for &duration_ms in &durations {
            for &step in &frame_intervals {
                let anim = CounterAnimation::new(CounterSpec { target, duration_ms }, 10.0);
                let (lo, hi) = (target.min(0), target.max(0));
                let mut now = 10.0;
                let mut last = anim.sample(now);
                let mut frames = 0;
                while !last.done {
                    assert!(last.value >= lo && last.value <= hi, "overshoot: {last:?} for target {target}");
                    now += step;
                    last = anim.sample(now);
                    frames += 1;
                    assert!(frames < 100_000, "counter never terminated");
                }
                assert_eq!(last.value, target);
            }
        }
    }
}

#[test]
fn counter_values_never_move_backwards() {
    let anim = CounterAnimation::new(CounterSpec { target: 5000, duration_ms: 2000.0 }, 0.0);
    let mut previous = 0;
    let mut now = 0.0;
    while now <= 2100.0 {
        let frame = anim.sample(now);
        assert!(frame.value >= previous);
        previous = frame.value;
        now += 16.67;
    }
    assert_eq!(previous, 5000);
}

#[test]
fn zero_duration_counter_finishes_immediately() {
    let anim = CounterAnimation::new(CounterSpec { target: 12, duration_ms: 0.0 }, 100.0);
    assert_eq!(anim.sample(100.0), CounterFrame { value: 12, done: true });
}

// =============================================================
// Progress bars
// =============================================================

fn bar(percent: &str) -> ProgressBar {
    ProgressBar::new(ProgressSpec::from_attrs(Some(percent), None, 1500.0).expect("numeric percent"))
}

#[test]
fn progress_spec_clamps_percent() {
    assert_eq!(ProgressSpec::from_attrs(Some("140"), None, 1500.0).map(|s| s.percent), Some(100));
    assert_eq!(ProgressSpec::from_attrs(Some("-3"), None, 1500.0).map(|s| s.percent), Some(0));
    assert_eq!(ProgressSpec::from_attrs(Some("n/a"), None, 1500.0), None);
}

#[test]
fn prime_writes_zero_width_and_transition() {
    let mut bar = bar("85");
    let writes = bar.prime();
    assert_eq!(
        writes,
        vec![
            StyleWrite { property: "width", value: "0%".to_owned() },
            StyleWrite { property: "transition", value: "width 1500ms ease-out".to_owned() },
        ]
    );
    assert_eq!(bar.phase(), ProgressPhase::Primed);
}

#[test]
fn target_width_unreachable_before_prime() {
    let mut bar = bar("85");
    assert_eq!(bar.release(), None);
    assert_eq!(bar.phase(), ProgressPhase::Idle);
}

#[test]
fn release_after_prime_writes_target_once() {
    let mut bar = bar("85");
    bar.prime();
    assert_eq!(bar.release(), Some(StyleWrite { property: "width", value: "85%".to_owned() }));
    assert_eq!(bar.release(), None);
    assert!(bar.prime().is_empty());
    assert_eq!(bar.phase(), ProgressPhase::Running);
}

// =============================================================
// Guard
// =============================================================

#[test]
fn guard_claims_each_effect_once_per_element() {
    let mut guard = AnimationGuard::new();
    let a = guard.issue_key();
    let b = guard.issue_key();
    assert_ne!(a, b);
    assert!(guard.claim(a, Effect::Counter));
    assert!(!guard.claim(a, Effect::Counter));
    assert!(guard.claim(a, Effect::Reveal));
    assert!(guard.claim(b, Effect::Counter));
    assert!(!guard.claim(b, Effect::Counter));
    assert!(guard.claim(b, Effect::Progress));
}
