use showcase_core::pointer::{select_sample, GyroReading, PointerSourceKind};
use showcase_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn orientation_maps_to_unit_range() {
    let g = GyroReading::from_orientation(Some(80.0), Some(22.0));
    assert!(approx(g.x, 0.4));
    assert!(approx(g.y, -0.2));
    assert!(g.active);

    let g = GyroReading::from_orientation(Some(400.0), Some(-200.0));
    assert_eq!((g.x, g.y), (-1.0, 1.0));

    let g = GyroReading::from_orientation(None, None);
    assert_eq!((g.x, g.y), (0.0, 0.0));
}

#[test]
fn narrow_viewport_with_gyro_prefers_gyro() {
    let mut src = PointerSource::new();
    src.set_pointer(0.1, 0.1);
    src.set_orientation(Some(80.0), Some(22.0));
    match src.sample(500.0) {
        PointerSample::Gyro { x, y } => {
            assert!(approx(x, 0.4));
            assert!(approx(y, -0.2));
        }
        other => panic!("expected gyro, got {other:?}"),
    }
    assert_eq!(src.sample(500.0).state().source, PointerSourceKind::Gyro);
}

#[test]
fn wide_viewport_or_no_gyro_uses_pointer() {
    let mut src = PointerSource::new();
    src.set_pointer(0.1, -0.3);
    assert_eq!(src.sample(500.0), PointerSample::Pointer { x: 0.1, y: -0.3 });

    src.set_orientation(Some(80.0), Some(22.0));
    assert_eq!(src.sample(768.0), PointerSample::Pointer { x: 0.1, y: -0.3 });
    assert_eq!(src.sample(1280.0).state().source, PointerSourceKind::Pointer);
}

#[test]
fn inactive_gyro_is_ignored() {
    let gyro = GyroReading {
        x: 0.9,
        y: 0.9,
        active: false,
    };
    assert_eq!(
        select_sample((0.2, 0.2), Some(gyro), 320.0),
        PointerSample::Pointer { x: 0.2, y: 0.2 }
    );
}

#[test]
fn pointer_input_is_clamped_and_filtered() {
    let mut src = PointerSource::new();
    src.set_pointer(3.0, -3.0);
    assert_eq!(src.pointer_ndc(), (1.0, -1.0));
    src.set_pointer(f32::NAN, 0.0);
    assert_eq!(src.pointer_ndc(), (1.0, -1.0));
}

#[test]
fn permission_is_requested_once() {
    let mut src = PointerSource::new();
    assert_eq!(src.permission(), SensorPermission::NotRequested);
    assert!(src.begin_permission_request());
    assert_eq!(src.permission(), SensorPermission::Pending);
    assert!(!src.begin_permission_request());

    src.resolve_permission(Ok(()));
    assert_eq!(src.permission(), SensorPermission::Granted);
    assert!(!src.begin_permission_request());
}

#[test]
fn denied_or_unsupported_stays_on_pointer() {
    let mut src = PointerSource::new();
    src.set_pointer(0.5, 0.5);
    src.set_orientation(Some(80.0), Some(22.0));
    src.begin_permission_request();
    src.resolve_permission(Err(SceneError::PermissionDenied));
    assert_eq!(src.permission(), SensorPermission::Denied);
    assert!(src.gyro().is_none());

    src.set_orientation(Some(80.0), Some(22.0));
    assert!(src.gyro().is_none());
    assert_eq!(src.sample(320.0), PointerSample::Pointer { x: 0.5, y: 0.5 });

    let mut src = PointerSource::new();
    src.begin_permission_request();
    src.resolve_permission(Err(SceneError::UnsupportedSensorApi));
    assert_eq!(src.permission(), SensorPermission::Unsupported);
}
