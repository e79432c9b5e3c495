//! Head gaze constraint: turns the head bone toward the point under the
//! pointer, within yaw/pitch limits centred on a rest offset.

use crate::animation::ClipPlayer;
use crate::camera::{ray_plane, Camera};
use crate::config::SceneConfig;
use crate::constants::{HEAD_BLEND_PER_FRAME, HEAD_PITCH_MAX, HEAD_YAW_MAX};
use crate::error::SceneError;
use crate::skeleton::Skeleton;
use glam::{EulerRot, Mat3, Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GazeSettings {
    pub yaw_offset: f32,
    pub pitch_offset: f32,
    /// Flip the yaw sign to match the rig's local axes.
    pub invert_x: bool,
    /// Flip the pitch sign to match the rig's local axes.
    pub invert_y: bool,
    pub yaw_max: f32,
    pub pitch_max: f32,
    /// Fraction of the remaining rotation applied per frame.
    pub blend: f32,
}

impl GazeSettings {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            yaw_offset: config.head_yaw_offset,
            pitch_offset: config.head_pitch_offset,
            invert_x: config.head_invert_x,
            invert_y: config.head_invert_y,
            yaw_max: HEAD_YAW_MAX,
            pitch_max: HEAD_PITCH_MAX,
            blend: HEAD_BLEND_PER_FRAME,
        }
    }
}

/// Per-frame solve results; `current_orientation` is the bone rotation after blending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadConstraintState {
    pub head_world_position: Vec3,
    pub target_world_point: Vec3,
    pub clamped_yaw: f32,
    pub clamped_pitch: f32,
    pub current_orientation: Quat,
}

/// Clamp to `[-max, max]`, shift by `offset`, then clamp again to
/// `[offset - max, offset + max]`.
#[inline]
pub fn clamp_around_offset(raw: f32, max: f32, offset: f32) -> f32 {
    let centred = raw.clamp(-max, max);
    (centred + offset).clamp(offset - max, offset + max)
}

/// Rotation whose +Z axis points along `dir`, keeping `up` as close to +Y as possible.
pub fn look_rotation(dir: Vec3, up: Vec3) -> Option<Quat> {
    let mut z = dir.try_normalize()?;
    let mut x = up.cross(z);
    if x.length_squared() < 1e-12 {
        // dir is parallel to up: nudge it off-axis
        z.z += 1e-4;
        z = z.normalize();
        x = up.cross(z);
    }
    let x = x.try_normalize()?;
    let y = z.cross(x);
    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize())
}

pub struct HeadGazeConstraint {
    head: Option<usize>,
    settings: GazeSettings,
    active: bool,
    last: Option<HeadConstraintState>,
}

impl HeadGazeConstraint {
    pub fn new(skeleton: &Skeleton, settings: GazeSettings) -> Self {
        let head = skeleton.find_head_bone();
        match head.and_then(|i| skeleton.bone(i)) {
            Some(bone) => log::info!("[gaze] head bone `{}`", bone.name),
            None => log::warn!("[gaze] {}; gaze constraint disabled", SceneError::MissingBone),
        }
        Self {
            head,
            settings,
            active: false,
            last: None,
        }
    }

    pub fn head_bone(&self) -> Option<usize> {
        self.head
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_state(&self) -> Option<HeadConstraintState> {
        self.last
    }

    /// Toggle the constraint, swapping the body clip on each edge: the
    /// head-free clip while active, the original clip otherwise.
    pub fn set_active(&mut self, active: bool, clips: &mut ClipPlayer) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            if let Err(e) = clips.play_head_free() {
                log::warn!("[gaze] {e}; keeping original clip");
                clips.play_original();
            }
        } else {
            clips.play_original();
            self.last = None;
        }
    }

    /// Solve one frame. `Ok(None)` while inactive; on [`SceneError::RayPlaneMiss`]
    /// the bone keeps its previous orientation.
    pub fn advance(
        &mut self,
        skeleton: &mut Skeleton,
        camera: &Camera,
        pointer_ndc: Vec2,
    ) -> Result<Option<HeadConstraintState>, SceneError> {
        if !self.active {
            return Ok(None);
        }
        let head = self.head.ok_or(SceneError::MissingBone)?;
        let head_world = skeleton.world_position(head);

        let normal = camera.forward();
        let (ray_origin, ray_dir) = camera.ray_from_ndc(pointer_ndc);
        let target_world =
            ray_plane(ray_origin, ray_dir, head_world, normal).ok_or(SceneError::RayPlaneMiss)?;

        let parent_inv = skeleton.parent_world_matrix(head).inverse();
        let local_target = parent_inv.transform_point3(target_world);

        let bone = skeleton.bone_mut(head).ok_or(SceneError::MissingBone)?;
        let Some(look) = look_rotation(local_target - bone.translation, Vec3::Y) else {
            return Err(SceneError::RayPlaneMiss);
        };
        let (mut yaw, mut pitch, roll) = look.to_euler(EulerRot::YXZ);
        if self.settings.invert_x {
            yaw = -yaw;
        }
        if self.settings.invert_y {
            pitch = -pitch;
        }
        let s = &self.settings;
        let clamped_yaw = clamp_around_offset(yaw, s.yaw_max, s.yaw_offset);
        let clamped_pitch = clamp_around_offset(pitch, s.pitch_max, s.pitch_offset);
        let desired = Quat::from_euler(EulerRot::YXZ, clamped_yaw, clamped_pitch, roll);
        bone.rotation = bone.rotation.slerp(desired, s.blend).normalize();

        let state = HeadConstraintState {
            head_world_position: head_world,
            target_world_point: target_world,
            clamped_yaw,
            clamped_pitch,
            current_orientation: bone.rotation,
        };
        self.last = Some(state);
        Ok(Some(state))
    }
}
