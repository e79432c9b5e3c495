use glam::Vec3;
use showcase_core::pointer::PointerState;
use showcase_core::rig::RigInput;
use showcase_core::*;
use std::f32::consts::PI;

fn close(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

fn idle_input(force_base: bool) -> RigInput {
    RigInput {
        session_id: 0,
        focus: None,
        progress: 0.0,
        pointer: PointerState::default(),
        viewport_width: 6.0,
        force_base,
    }
}

#[test]
fn snapshot_and_orbit_land_behind_the_target() {
    let snap = SessionStartSnapshot::capture(Vec3::new(0.0, 0.0, 5.5), Vec3::ZERO);
    assert!(snap.start_angle.abs() < 1e-6);
    assert!((snap.start_radius - 5.5).abs() < 1e-6);
    assert_eq!(snap.start_height, 0.0);

    let params = RigParams {
        radius: 2.46,
        height: -0.49,
        spin: PI,
        speed: 0.6,
    };
    let raw = snap.orbit_position(Vec3::ZERO, &params, 1.0);
    assert!(close(raw, Vec3::new(0.0, -0.49, -2.46), 1e-4), "{raw:?}");

    let start = snap.orbit_position(Vec3::ZERO, &params, 0.0);
    assert!(close(start, Vec3::new(0.0, 0.0, 5.5), 1e-5));
}

#[test]
fn orbit_height_is_absolute_not_relative_to_target() {
    let snap = SessionStartSnapshot::capture(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 1.0, 0.0));
    let params = RigParams {
        radius: 1.0,
        height: 1.0,
        spin: 0.0,
        speed: 0.9,
    };
    let raw = snap.orbit_position(Vec3::new(0.0, 1.0, 0.0), &params, 0.5);
    assert!((raw.y - 1.5).abs() < 1e-6);
}

#[test]
fn focused_rig_converges_on_the_raw_orbit() {
    let mut rig = CameraRig::default();
    let target = CHARACTER_FOCUS_POINT;
    let params = RigParams {
        radius: 2.46,
        height: -0.49,
        spin: 173f32.to_radians(),
        speed: 0.6,
    };
    let input = RigInput {
        session_id: 1,
        focus: Some((target, params)),
        progress: 1.0,
        pointer: PointerState::default(),
        viewport_width: 6.0,
        force_base: false,
    };
    let mut pose = rig.pose();
    for _ in 0..600 {
        pose = rig.advance(1.0 / 60.0, &input);
    }
    let raw = rig.last_raw_position().unwrap();
    assert!(close(pose.position, raw, 1e-2), "{:?} vs {raw:?}", pose.position);
    assert_eq!(pose.look_at, target);
}

#[test]
fn new_session_recaptures_the_snapshot() {
    let mut rig = CameraRig::default();
    let params = RigParams {
        radius: 1.0,
        height: 0.0,
        spin: 0.0,
        speed: 0.9,
    };
    let mut input = RigInput {
        session_id: 1,
        focus: Some((DEFAULT_SHOWREEL_TARGET, params)),
        progress: 0.0,
        pointer: PointerState::default(),
        viewport_width: 6.0,
        force_base: false,
    };
    rig.advance(0.016, &input);
    let first = rig.snapshot().unwrap();
    for _ in 0..60 {
        rig.advance(0.016, &input);
    }
    assert_eq!(rig.snapshot(), Some(first));

    input.session_id = 2;
    input.focus = Some((DEFAULT_PROJECTS_TARGET, params));
    rig.advance(0.016, &input);
    assert_ne!(rig.snapshot(), Some(first));

    rig.advance(0.016, &idle_input(false));
    assert_eq!(rig.snapshot(), None);
}

#[test]
fn force_base_snaps_to_the_default_pose() {
    let mut rig = CameraRig::new(CameraPose {
        position: Vec3::new(3.0, 3.0, 3.0),
        look_at: Vec3::ONE,
    });
    let pose = rig.advance(0.016, &idle_input(true));
    assert_eq!(pose, CameraPose::BASE);
}

#[test]
fn idle_rig_eases_toward_pointer_parallax() {
    let mut rig = CameraRig::default();
    let mut input = idle_input(false);
    input.pointer = PointerState {
        x: 0.5,
        y: -1.0,
        ..Default::default()
    };
    let expected = Vec3::new(-1.0 + 0.5 * 6.0 / 3.0, 0.0, 5.5);
    let first = rig.advance(1.0 / 60.0, &input);
    assert!(!close(first.position, expected, 1e-3));
    let mut pose = first;
    for _ in 0..600 {
        pose = rig.advance(1.0 / 60.0, &input);
    }
    assert!(close(pose.position, expected, 1e-2), "{:?}", pose.position);
    assert_eq!(pose.look_at, Vec3::ZERO);
}

#[test]
fn non_finite_focus_target_falls_back() {
    let mut rig = CameraRig::default();
    let input = RigInput {
        session_id: 1,
        focus: Some((
            Vec3::new(f32::NAN, 0.0, 0.0),
            RigParams {
                radius: 1.0,
                height: 0.0,
                spin: 0.0,
                speed: 1.0,
            },
        )),
        progress: 0.5,
        pointer: PointerState::default(),
        viewport_width: 6.0,
        force_base: false,
    };
    let pose = rig.advance(0.016, &input);
    assert!(pose.position.is_finite());
    assert!(pose.look_at.is_finite());
}
