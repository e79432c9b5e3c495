use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use showcase_core::gaze::{clamp_around_offset, look_rotation, GazeSettings};
use showcase_core::skeleton::Skeleton;
use showcase_core::*;

fn rig() -> (Skeleton, ClipPlayer) {
    let assets = ProceduralAssets;
    (assets.skeleton(), ClipPlayer::new(assets.clips(), None))
}

#[test]
fn clamp_stays_within_offset_window_for_any_angle() {
    for offset in [-0.5f32, 0.0, 0.53, 1.2] {
        for max in [0.35f32, 0.6] {
            let mut raw = -10.0f32;
            while raw <= 10.0 {
                let v = clamp_around_offset(raw, max, offset);
                assert!(v >= offset - max - 1e-6 && v <= offset + max + 1e-6);
                raw += 0.05;
            }
        }
    }
}

#[test]
fn clamp_shifts_then_reclamps() {
    assert!((clamp_around_offset(0.0, 0.6, -0.5) + 0.5).abs() < 1e-6);
    assert!((clamp_around_offset(1.0, 0.6, -0.5) - 0.1).abs() < 1e-6);
    assert!((clamp_around_offset(-1.0, 0.6, -0.5) + 1.1).abs() < 1e-6);
    assert!((clamp_around_offset(0.2, 0.35, 0.53) - 0.73).abs() < 1e-6);
}

#[test]
fn look_rotation_points_z_along_direction() {
    let dir = Vec3::new(1.0, 0.5, 2.0).normalize();
    let q = look_rotation(dir, Vec3::Y).unwrap();
    assert!((q * Vec3::Z - dir).length() < 1e-5);

    let straight_up = look_rotation(Vec3::Y, Vec3::Y).unwrap();
    assert!((straight_up * Vec3::Z - Vec3::Y).length() < 1e-3);
    assert!(look_rotation(Vec3::ZERO, Vec3::Y).is_none());

    // a pure turn decomposes into yaw only
    let q = look_rotation(Vec3::new(1.0, 0.0, 1.0), Vec3::Y).unwrap();
    let (yaw, pitch, _) = q.to_euler(EulerRot::YXZ);
    assert!((yaw - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    assert!(pitch.abs() < 1e-5);
}

#[test]
fn activation_swaps_to_cached_head_free_clip_and_back() {
    let (skeleton, mut clips) = rig();
    let cfg = SceneConfig::default();
    let mut gaze = HeadGazeConstraint::new(&skeleton, GazeSettings::from_config(&cfg));
    assert!(gaze.head_bone().is_some());

    gaze.set_active(true, &mut clips);
    assert_eq!(clips.mode(), ClipMode::HeadFree);
    assert!(clips.has_cached_head_free());
    let name = clips.current_clip().unwrap().name.clone();
    assert!(name.ends_with("_no_head"));

    gaze.set_active(false, &mut clips);
    assert_eq!(clips.mode(), ClipMode::Original);
    assert!(gaze.last_state().is_none());

    gaze.set_active(true, &mut clips);
    assert_eq!(clips.current_clip().unwrap().name, name);
}

#[test]
fn missing_clip_keeps_original_while_gaze_runs() {
    let (skeleton, _) = rig();
    let mut clips = ClipPlayer::new(Vec::new(), None);
    let mut gaze = HeadGazeConstraint::new(&skeleton, GazeSettings::from_config(&SceneConfig::default()));
    gaze.set_active(true, &mut clips);
    assert!(gaze.is_active());
    assert_eq!(clips.mode(), ClipMode::Original);
}

#[test]
fn active_solve_blends_toward_clamped_angles() {
    let (mut skeleton, mut clips) = rig();
    let cfg = SceneConfig::default();
    let settings = GazeSettings::from_config(&cfg);
    let mut gaze = HeadGazeConstraint::new(&skeleton, settings);
    let camera = Camera::default();

    assert_eq!(gaze.advance(&mut skeleton, &camera, Vec2::ZERO), Ok(None));

    gaze.set_active(true, &mut clips);
    let head = gaze.head_bone().unwrap();
    let before = skeleton.bone(head).unwrap().rotation;
    let state = gaze
        .advance(&mut skeleton, &camera, Vec2::ZERO)
        .unwrap()
        .unwrap();

    let yaw_lo = settings.yaw_offset - settings.yaw_max;
    let yaw_hi = settings.yaw_offset + settings.yaw_max;
    assert!(state.clamped_yaw >= yaw_lo - 1e-6 && state.clamped_yaw <= yaw_hi + 1e-6);
    let pitch_lo = settings.pitch_offset - settings.pitch_max;
    let pitch_hi = settings.pitch_offset + settings.pitch_max;
    assert!(state.clamped_pitch >= pitch_lo - 1e-6 && state.clamped_pitch <= pitch_hi + 1e-6);

    let after = skeleton.bone(head).unwrap().rotation;
    assert_eq!(after, state.current_orientation);
    assert!(before.angle_between(after) > 0.0);

    // repeated frames converge on the clamped orientation
    for _ in 0..200 {
        gaze.advance(&mut skeleton, &camera, Vec2::ZERO).unwrap();
    }
    let settled = skeleton.bone(head).unwrap().rotation;
    let (yaw, pitch, _) = settled.to_euler(EulerRot::YXZ);
    assert!(yaw >= yaw_lo - 1e-3 && yaw <= yaw_hi + 1e-3);
    assert!(pitch >= pitch_lo - 1e-3 && pitch <= pitch_hi + 1e-3);
}

#[test]
fn skeleton_without_head_is_inert() {
    let mut skeleton = Skeleton::new(Mat4::IDENTITY);
    skeleton.add_bone("Hips", None, Vec3::Y, Quat::IDENTITY);
    let mut clips = ClipPlayer::new(Vec::new(), None);
    let mut gaze = HeadGazeConstraint::new(&skeleton, GazeSettings::from_config(&SceneConfig::default()));
    assert_eq!(gaze.head_bone(), None);
    gaze.set_active(true, &mut clips);
    assert_eq!(
        gaze.advance(&mut skeleton, &Camera::default(), Vec2::ZERO),
        Err(SceneError::MissingBone)
    );
}

#[test]
fn ray_behind_the_camera_skips_the_frame() {
    let (mut skeleton, mut clips) = rig();
    let mut gaze = HeadGazeConstraint::new(&skeleton, GazeSettings::from_config(&SceneConfig::default()));
    gaze.set_active(true, &mut clips);
    let head = gaze.head_bone().unwrap();
    // camera in front of the head but looking away from it
    let mut camera = Camera::default();
    let head_pos = skeleton.world_position(head);
    camera.eye = head_pos + Vec3::new(0.0, 0.0, 3.0);
    camera.target = camera.eye + Vec3::new(0.0, 0.0, 1.0);
    let before = skeleton.bone(head).unwrap().rotation;
    assert_eq!(
        gaze.advance(&mut skeleton, &camera, Vec2::ZERO),
        Err(SceneError::RayPlaneMiss)
    );
    assert_eq!(skeleton.bone(head).unwrap().rotation, before);
}
