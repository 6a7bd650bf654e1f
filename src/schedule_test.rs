use super::*;

#[test]
fn first_request_schedules_and_rest_piggyback() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    assert!(gate.begin_pass());
}

#[test]
fn pass_clears_pending_so_next_trigger_schedules_again() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    assert!(gate.begin_pass());
    assert!(!gate.begin_pass());
    assert!(gate.request());
}

#[test]
fn stray_frame_is_not_a_pass() {
    let mut gate = FrameGate::new();
    assert!(!gate.begin_pass());
}

#[test]
fn cancel_allows_rescheduling() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    gate.cancel();
    assert!(!gate.begin_pass());
    assert!(gate.request());
}

#[test]
fn newer_ticket_invalidates_older() {
    let mut debouncer = Debouncer::new();
    let first = debouncer.schedule();
    let second = debouncer.schedule();
    assert!(!debouncer.is_current(first));
    assert!(debouncer.is_current(second));
}

#[test]
fn single_ticket_stays_current() {
    let mut debouncer = Debouncer::new();
    let ticket = debouncer.schedule();
    assert!(debouncer.is_current(ticket));
}
