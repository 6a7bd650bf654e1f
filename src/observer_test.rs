use super::*;

#[test]
fn leaving_the_viewport_never_fires() {
    for mode in [ObserveMode::OneShot, ObserveMode::Repeat] {
        assert_eq!(mode.deliver(false), Delivery { fire: false, release: false });
    }
}

#[test]
fn one_shot_fires_and_releases() {
    assert_eq!(ObserveMode::OneShot.deliver(true), Delivery { fire: true, release: true });
}

#[test]
fn repeat_fires_and_stays_subscribed() {
    assert_eq!(ObserveMode::Repeat.deliver(true), Delivery { fire: true, release: false });
}

#[test]
fn fallback_reports_visible_once_for_every_mode() {
    for mode in [ObserveMode::OneShot, ObserveMode::Repeat] {
        assert_eq!(mode.fallback(), Delivery { fire: true, release: true });
    }
}

#[test]
fn one_shot_sequence_fires_exactly_once() {
    // Replay entries for a single element the way the browser would report them.
    let mut subscribed = true;
    let mut fired = 0;
    for intersecting in [false, true, false, true, true] {
        if !subscribed {
            continue;
        }
        let delivery = ObserveMode::OneShot.deliver(intersecting);
        if delivery.release {
            subscribed = false;
        }
        if delivery.fire {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert!(!subscribed);
}
