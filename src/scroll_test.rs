#![allow(clippy::float_cmp)]

use super::*;

fn coordinator() -> ScrollCoordinator {
    ScrollCoordinator::new(ScrollConfig::default())
}

// =============================================================
// Frame coalescing
// =============================================================

#[test]
fn burst_of_scroll_events_yields_one_pass_with_final_offset() {
    let mut coord = coordinator();
    let requested = (0..25).filter(|_| coord.on_scroll()).count();
    assert_eq!(requested, 1);

    let snapshot = coord.on_frame(420.0).expect("pending frame runs a pass");
    assert_eq!(snapshot.scroll_y, 420.0);
    assert_eq!(coord.on_frame(500.0), None);
}

#[test]
fn scroll_after_pass_schedules_another_frame() {
    let mut coord = coordinator();
    assert!(coord.on_scroll());
    coord.on_frame(100.0);
    assert!(coord.on_scroll());
    let snapshot = coord.on_frame(20.0).expect("second frame runs");
    assert_eq!(snapshot.navbar, NavbarState::Top);
    assert_eq!(snapshot.scroll_y, 20.0);
}

#[test]
fn force_runs_without_pending_frame_and_clears_it() {
    let mut coord = coordinator();
    assert!(coord.on_scroll());
    let snapshot = coord.force(350.0);
    assert!(snapshot.back_to_top_visible);
    assert_eq!(coord.on_frame(350.0), None);
    assert!(coord.on_scroll());
}

#[test]
fn restored_offset_applies_without_any_scroll_event() {
    let mut coord = coordinator();
    let snapshot = coord.force(1200.0);
    assert!(snapshot.back_to_top_visible);
    assert_eq!(snapshot.navbar, NavbarState::Scrolled);
    assert_eq!(parallax_transform(coord.parallax_offset(0, snapshot.scroll_y)), "translate3d(0, -600px, 0)");
    assert!(coord.on_scroll());
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn navbar_switches_at_fifty_without_hysteresis() {
    let mut coord = coordinator();
    assert_eq!(coord.force(0.0).navbar, NavbarState::Top);
    assert_eq!(coord.force(60.0).navbar, NavbarState::Scrolled);
    assert_eq!(coord.force(40.0).navbar, NavbarState::Top);
    assert_eq!(coord.force(50.0).navbar, NavbarState::Top);
    assert_eq!(coord.force(50.5).navbar, NavbarState::Scrolled);
}

#[test]
fn back_to_top_threshold_is_strict() {
    let coord = coordinator();
    assert!(!coord.compute(300.0).back_to_top_visible);
    assert!(coord.compute(301.0).back_to_top_visible);
}

#[test]
fn navbar_styles() {
    assert_eq!(NavbarState::Scrolled.background(), "rgba(12, 12, 12, 0.95)");
    assert_eq!(NavbarState::Scrolled.box_shadow(), "0 10px 30px rgba(0, 0, 0, 0.3)");
    assert_eq!(NavbarState::Top.background(), "rgba(12, 12, 12, 0.9)");
    assert_eq!(NavbarState::Top.box_shadow(), "none");
}

#[test]
fn custom_thresholds_apply() {
    let coord = ScrollCoordinator::new(ScrollConfig { navbar_scrolled_px: 100.0, ..ScrollConfig::default() });
    assert_eq!(coord.compute(60.0).navbar, NavbarState::Top);
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_speed_grows_per_element() {
    let coord = coordinator();
    assert_eq!(coord.parallax_offset(0, 100.0), -50.0);
    assert!((coord.parallax_offset(1, 100.0) + 60.0).abs() < 1e-9);
    assert!((coord.parallax_offset(3, 200.0) + 160.0).abs() < 1e-9);
}

#[test]
fn parallax_at_top_renders_plain_zero() {
    let coord = coordinator();
    assert_eq!(parallax_transform(coord.parallax_offset(2, 0.0)), "translate3d(0, 0px, 0)");
    assert_eq!(parallax_transform(-50.0), "translate3d(0, -50px, 0)");
}

// =============================================================
// Scroll-spy and anchors
// =============================================================

#[test]
fn spy_reports_only_changes() {
    let mut spy = ScrollSpy::new();
    assert_eq!(spy.active(), None);
    assert!(spy.on_section_visible("about"));
    assert!(!spy.on_section_visible("about"));
    assert!(spy.on_section_visible("projects"));
    assert!(!spy.on_section_visible(""));
    assert_eq!(spy.active(), Some("projects"));
}

#[test]
fn sections_observed_after_a_splice_can_take_over() {
    let mut spy = ScrollSpy::new();
    assert!(spy.on_section_visible("about"));
    assert!(spy.on_section_visible("projects-grid"));
    assert_eq!(spy.active(), Some("projects-grid"));
    assert!(spy.on_section_visible("about"));
}

#[test]
fn section_link_selector_quotes_href() {
    assert_eq!(section_link_selector("contact"), ".nav-link[href=\"#contact\"]");
}

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/about"), None);
}

#[test]
fn scroll_target_leaves_room_for_navbar() {
    assert_eq!(scroll_target_top(900.0, 72.0), 828.0);
}
