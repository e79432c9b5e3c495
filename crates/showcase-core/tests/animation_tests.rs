use glam::{Mat4, Quat, Vec3};
use showcase_core::skeleton::{mentions_head, Skeleton};
use showcase_core::*;

fn track(bone: &str) -> RotationTrack {
    RotationTrack {
        bone: bone.to_string(),
        times: vec![0.0, 1.0],
        values: vec![Quat::IDENTITY, Quat::from_rotation_y(1.0)],
    }
}

fn clip() -> AnimationClip {
    AnimationClip {
        name: "Wave".to_string(),
        duration: 2.0,
        tracks: vec![track("Spine"), track("mixamorig:Neck"), track("Head_end"), track("Tete")],
    }
}

#[test]
fn head_keywords_match_case_insensitively() {
    assert!(mentions_head("mixamorigHead"));
    assert!(mentions_head("NECK_01"));
    assert!(mentions_head("Tete"));
    assert!(!mentions_head("Spine2"));
}

#[test]
fn head_free_clip_drops_head_and_neck_tracks() {
    let filtered = clip().without_head_tracks();
    assert_eq!(filtered.name, "Wave_no_head");
    assert_eq!(filtered.duration, 2.0);
    let bones: Vec<&str> = filtered.tracks.iter().map(|t| t.bone.as_str()).collect();
    assert_eq!(bones, vec!["Spine"]);

    let unnamed = AnimationClip {
        name: String::new(),
        duration: 1.0,
        tracks: vec![],
    };
    assert_eq!(unnamed.without_head_tracks().name, "clip_no_head");
}

#[test]
fn track_sampling_interpolates_and_holds_ends() {
    let t = track("Spine");
    let mid = t.sample(0.5).unwrap();
    assert!(mid.angle_between(Quat::from_rotation_y(0.5)) < 1e-4);
    assert_eq!(t.sample(-1.0), Some(Quat::IDENTITY));
    assert_eq!(t.sample(5.0), Some(Quat::from_rotation_y(1.0)));

    let empty = RotationTrack {
        bone: "x".into(),
        times: vec![],
        values: vec![],
    };
    assert_eq!(empty.sample(0.0), None);
}

#[test]
fn player_prefers_named_clip_and_caches_filtered_variant() {
    let other = AnimationClip {
        name: "Idle".to_string(),
        duration: 1.0,
        tracks: vec![track("Spine")],
    };
    let mut player = ClipPlayer::new(vec![other, clip()], Some("Wave"));
    assert_eq!(player.current_clip().unwrap().name, "Wave");
    assert!(!player.has_cached_head_free());

    player.play_head_free().unwrap();
    assert_eq!(player.mode(), ClipMode::HeadFree);
    assert!(player.has_cached_head_free());
    assert_eq!(player.current_clip().unwrap().name, "Wave_no_head");

    player.play_original();
    assert_eq!(player.current_clip().unwrap().name, "Wave");
    player.play_head_free().unwrap();
    assert_eq!(player.current_clip().unwrap().name, "Wave_no_head");

    let fallback = ClipPlayer::new(vec![clip()], Some("Missing"));
    assert_eq!(fallback.current_clip().unwrap().name, "Wave");
}

#[test]
fn head_free_without_base_clip_errors() {
    let mut player = ClipPlayer::new(Vec::new(), None);
    assert!(matches!(
        player.play_head_free(),
        Err(SceneError::MissingAnimationClip(_))
    ));
    assert_eq!(player.mode(), ClipMode::Original);
}

#[test]
fn playback_loops_and_writes_bone_rotations() {
    let mut skeleton = Skeleton::new(Mat4::IDENTITY);
    let spine = skeleton.add_bone("Spine", None, Vec3::Y, Quat::IDENTITY);
    let neck = skeleton.add_bone("mixamorig:Neck", Some(spine), Vec3::Y, Quat::IDENTITY);

    let mut player = ClipPlayer::new(vec![clip()], None);
    player.advance(2.5);
    assert!((player.time() - 0.5).abs() < 1e-5);
    player.apply(&mut skeleton);
    let r = skeleton.bone(spine).unwrap().rotation;
    assert!(r.angle_between(Quat::from_rotation_y(0.5)) < 1e-4);

    // head-free playback leaves the neck alone
    skeleton.bone_mut(neck).unwrap().rotation = Quat::IDENTITY;
    player.play_head_free().unwrap();
    player.advance(0.5);
    player.apply(&mut skeleton);
    assert_eq!(skeleton.bone(neck).unwrap().rotation, Quat::IDENTITY);
}

#[test]
fn world_positions_follow_the_hierarchy() {
    let mut skeleton = Skeleton::new(Mat4::from_translation(Vec3::new(0.0, -1.0, 2.0)));
    let hips = skeleton.add_bone("Hips", None, Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
    let head = skeleton.add_bone("Head", Some(hips), Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);
    assert!((skeleton.world_position(head) - Vec3::new(0.0, 0.5, 2.0)).length() < 1e-6);
    assert_eq!(skeleton.find_head_bone(), Some(head));
    assert_eq!(skeleton.find("Hips"), Some(hips));

    let parent = skeleton.parent_world_matrix(head);
    assert!((parent.transform_point3(Vec3::ZERO) - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
}
