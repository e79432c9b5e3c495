use glam::Vec3;
use showcase_core::*;

#[test]
fn last_write_wins() {
    let bus = SignalBus::new();
    bus.publish(Signal::focus(FocusKind::Character, None));
    bus.publish(Signal::RequestIdle);
    bus.publish(Signal::focus(FocusKind::Projects, Some(Vec3::ONE)));
    assert!(bus.is_pending());
    assert_eq!(
        bus.take(),
        Some(Signal::RequestFocus(FocusRequest {
            kind: FocusKind::Projects,
            target: Some(Vec3::ONE),
        }))
    );
    assert_eq!(bus.take(), None);
    assert!(!bus.is_pending());
}

#[test]
fn nothing_is_replayed() {
    let bus = SignalBus::new();
    let mut controller = FocusStateController::new();
    bus.publish(Signal::focus(FocusKind::Showreel, None));
    controller.poll(&bus);
    let id = controller.session_id();
    controller.release_focus();
    controller.poll(&bus);
    assert_eq!(controller.state(), FocusState::Idle);
    assert_eq!(controller.session_id(), id);
}
