//! Scene content supplied by the front-end: the character rig, its motion
//! clips, its materials and a 0..=100 loading progress.

use crate::animation::{AnimationClip, RotationTrack};
use crate::constants::{CHARACTER_POSITION, CHARACTER_YAW};
use crate::skeleton::Skeleton;
use crate::tint::{BasicMaterial, Emissive, Material, StandardMaterial};
use glam::{Mat4, Quat, Vec3};

pub const IDLE_CLIP: &str = "Idle";

pub trait AssetProvider {
    fn skeleton(&self) -> Skeleton;
    fn clips(&self) -> Vec<AnimationClip>;
    fn materials(&self) -> Vec<Box<dyn Material>>;
    /// Loading progress in percent.
    fn progress(&self) -> f32;
}

/// Built-in stand-in character: hips, spine, neck and head with a slow idle sway.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProceduralAssets;

impl AssetProvider for ProceduralAssets {
    fn skeleton(&self) -> Skeleton {
        let root = Mat4::from_translation(CHARACTER_POSITION) * Mat4::from_rotation_y(CHARACTER_YAW);
        let mut skeleton = Skeleton::new(root);
        let hips = skeleton.add_bone("Hips", None, Vec3::new(0.0, 0.55, 0.0), Quat::IDENTITY);
        let spine = skeleton.add_bone("Spine", Some(hips), Vec3::new(0.0, 0.25, 0.0), Quat::IDENTITY);
        let neck = skeleton.add_bone("Neck", Some(spine), Vec3::new(0.0, 0.25, 0.0), Quat::IDENTITY);
        skeleton.add_bone("Head", Some(neck), Vec3::new(0.0, 0.08, 0.0), Quat::IDENTITY);
        skeleton
    }

    fn clips(&self) -> Vec<AnimationClip> {
        let times = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let sway = |axis: Vec3, amp: f32| -> Vec<Quat> {
            [0.0, amp, 0.0, -amp, 0.0]
                .iter()
                .map(|a| Quat::from_axis_angle(axis, *a))
                .collect()
        };
        vec![AnimationClip {
            name: IDLE_CLIP.to_string(),
            duration: 4.0,
            tracks: vec![
                RotationTrack {
                    bone: "Spine".to_string(),
                    times: times.clone(),
                    values: sway(Vec3::Z, 0.05),
                },
                RotationTrack {
                    bone: "Neck".to_string(),
                    times: times.clone(),
                    values: sway(Vec3::X, 0.03),
                },
                RotationTrack {
                    bone: "Head".to_string(),
                    times,
                    values: sway(Vec3::Y, 0.12),
                },
            ],
        }]
    }

    fn materials(&self) -> Vec<Box<dyn Material>> {
        vec![
            Box::new(StandardMaterial {
                name: "Body".to_string(),
                base_color: Vec3::new(0.82, 0.78, 0.74),
                emissive: Emissive::NONE,
            }),
            Box::new(StandardMaterial {
                name: "Jacket".to_string(),
                base_color: Vec3::new(0.16, 0.2, 0.28),
                emissive: Emissive {
                    color: Vec3::new(0.05, 0.05, 0.08),
                    intensity: 0.2,
                },
            }),
            Box::new(BasicMaterial {
                name: "Outline".to_string(),
                color: Vec3::ZERO,
            }),
        ]
    }

    fn progress(&self) -> f32 {
        100.0
    }
}
