use super::*;

#[test]
fn unknown_kind_is_info() {
    assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
    assert_eq!(NotificationKind::parse("warning"), NotificationKind::Warning);
    assert_eq!(NotificationKind::parse("loud"), NotificationKind::Info);
}

#[test]
fn errors_stay_longer() {
    assert_eq!(Timeline::for_kind(NotificationKind::Info), Timeline { enter_at: 100, exit_at: 3000, remove_at: 3300 });
    assert_eq!(Timeline::for_kind(NotificationKind::Error), Timeline { enter_at: 100, exit_at: 4000, remove_at: 4300 });
}

#[test]
fn icons_and_gradients_per_kind() {
    assert_eq!(NotificationKind::Success.icon(), "fa-check-circle");
    assert_eq!(NotificationKind::Error.icon(), "fa-exclamation-circle");
    assert_eq!(NotificationKind::Warning.icon(), "fa-exclamation-triangle");
    assert_eq!(NotificationKind::Info.icon(), "fa-info-circle");
    assert_eq!(NotificationKind::Error.background(), "linear-gradient(45deg, #ff4081, #ff6b6b)");
}

#[test]
fn initial_style_starts_off_screen() {
    let style = NotificationKind::Success.initial_style();
    assert!(style.contains("transform: translateX(100%)"));
    assert!(style.contains("linear-gradient(45deg, #64ffda, #536dfe)"));
    assert_eq!(NotificationKind::Success.class_name(), "notification notification-success");
}
