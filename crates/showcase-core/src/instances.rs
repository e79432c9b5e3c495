//! GPU-facing records shared by the web and native renderers: one
//! camera-facing quad per dust mote, character bone, focus marker and the
//! spotlight pool on the floor.

use crate::camera::Camera;
use crate::constants::{DEFAULT_PROJECTS_TARGET, DEFAULT_SHOWREEL_TARGET};
use crate::focus::FocusState;
use crate::stage::{FrameOutput, Stage};
use crate::tint::Emissive;
use glam::{Vec3, Vec4};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Camera right axis in world space (w unused).
    pub cam_right: [f32; 4],
    /// Camera up axis in world space (w unused).
    pub cam_up: [f32; 4],
}

impl Uniforms {
    pub fn from_camera(camera: &Camera) -> Self {
        let view = camera.view_matrix();
        // rows of the view rotation are the camera basis in world space
        let right = view.row(0).truncate();
        let up = view.row(1).truncate();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    /// Extra halo strength, 0 for none.
    pub glow: f32,
}

/// Byte offsets of the fields above, for vertex attribute layouts.
pub const INSTANCE_ATTR_OFFSETS: [u64; 4] = [0, 12, 16, 32];

pub const DUST_SCALE: f32 = 0.035;
pub const BONE_SCALE: f32 = 0.16;
pub const HEAD_SCALE: f32 = 0.3;
pub const MARKER_SCALE: f32 = 0.7;

const DUST_COLOR: Vec4 = Vec4::new(0.85, 0.88, 1.0, 0.45);
const SHOWREEL_COLOR: Vec4 = Vec4::new(0.95, 0.42, 0.3, 0.8);
const PROJECTS_COLOR: Vec4 = Vec4::new(0.36, 0.55, 0.98, 0.8);
const SPOT_COLOR: Vec3 = Vec3::new(1.0, 0.93, 0.8);

/// Base color plus the emissive term, as seen on screen.
fn shaded(base: Vec3, emissive: Emissive) -> Vec3 {
    (base + emissive.color * emissive.intensity).min(Vec3::ONE)
}

pub fn build_instances(stage: &Stage, frame: &FrameOutput) -> Vec<InstanceData> {
    let dust = stage.dust().positions();
    let bones = stage.skeleton().bones();
    let mut out = Vec::with_capacity(dust.len() + bones.len() + 3);

    // spotlight pool first so everything else blends over it
    let level = frame.spotlight.level;
    if level > 0.0 {
        out.push(InstanceData {
            pos: frame.spotlight.target.to_array(),
            scale: 2.0 * frame.spotlight.pool_radius,
            color: SPOT_COLOR.extend(0.55 * level).to_array(),
            // wider penumbra, wider halo
            glow: level * frame.spotlight.penumbra,
        });
    }

    let (showreel, projects) = match frame.focus {
        FocusState::ShowreelFocus { target } => (target, DEFAULT_PROJECTS_TARGET),
        FocusState::ProjectsFocus { target } => (DEFAULT_SHOWREEL_TARGET, target),
        _ => (DEFAULT_SHOWREEL_TARGET, DEFAULT_PROJECTS_TARGET),
    };
    let marker_glow = |active: bool| if active { frame.progress } else { 0.0 };
    out.push(InstanceData {
        pos: showreel.to_array(),
        scale: MARKER_SCALE,
        color: SHOWREEL_COLOR.to_array(),
        glow: marker_glow(matches!(frame.focus, FocusState::ShowreelFocus { .. })),
    });
    out.push(InstanceData {
        pos: projects.to_array(),
        scale: MARKER_SCALE,
        color: PROJECTS_COLOR.to_array(),
        glow: marker_glow(matches!(frame.focus, FocusState::ProjectsFocus { .. })),
    });

    let (base, emissive) = stage
        .materials()
        .iter()
        .find_map(|m| m.as_tintable().map(|t| (m.base_color(), t.emissive())))
        .unwrap_or((Vec3::splat(0.8), Emissive::NONE));
    let body = shaded(base, emissive).extend(1.0).to_array();
    let head = stage.gaze().head_bone();
    for (i, _) in bones.iter().enumerate() {
        let is_head = Some(i) == head;
        out.push(InstanceData {
            pos: stage.skeleton().world_position(i).to_array(),
            scale: if is_head { HEAD_SCALE } else { BONE_SCALE },
            color: body,
            glow: if frame.hover_lit { 0.6 } else { 0.0 },
        });
    }

    out.extend(dust.iter().map(|p| InstanceData {
        pos: p.to_array(),
        scale: DUST_SCALE,
        color: DUST_COLOR.to_array(),
        glow: 0.0,
    }));
    out
}
