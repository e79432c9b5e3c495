//! Camera rig: orbit transitions toward a focus target and the idle
//! pointer parallax, both through the same critically damped smoothing.

use crate::camera::CameraPose;
use crate::constants::{
    CAMERA_SMOOTH_TIME_SEC, DEFAULT_LOOK_AT, FALLBACK_LOOK_AT, IDLE_BASE_X, IDLE_WIDTH_DIVISOR,
    IDLE_Z,
};
use crate::damping::{lerp, DampedVec3};
use crate::focus::RigParams;
use crate::pointer::PointerState;
use glam::Vec3;

/// Camera placement relative to the target when a session begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStartSnapshot {
    /// Radians, `atan2(dx, dz)` of the camera-to-target offset.
    pub start_angle: f32,
    pub start_radius: f32,
    pub start_height: f32,
}

impl SessionStartSnapshot {
    pub fn capture(camera: Vec3, target: Vec3) -> Self {
        let dx = camera.x - target.x;
        let dz = camera.z - target.z;
        Self {
            start_angle: dx.atan2(dz),
            start_radius: dx.hypot(dz),
            start_height: camera.y,
        }
    }

    /// Undamped orbit position at `progress` in [0, 1].
    pub fn orbit_position(&self, target: Vec3, params: &RigParams, progress: f32) -> Vec3 {
        let t = progress.clamp(0.0, 1.0);
        let angle = self.start_angle + params.spin * t;
        let radius = lerp(self.start_radius, params.radius, t);
        let height = lerp(self.start_height, params.height, t);
        Vec3::new(
            target.x + angle.sin() * radius,
            height,
            target.z + angle.cos() * radius,
        )
    }
}

/// What the rig reads each frame; resolved by the focus controller first.
#[derive(Clone, Copy, Debug)]
pub struct RigInput {
    pub session_id: u64,
    /// `Some` while a focus session is active.
    pub focus: Option<(Vec3, RigParams)>,
    pub progress: f32,
    pub pointer: PointerState,
    /// World-space width of the view at the look-at point.
    pub viewport_width: f32,
    pub force_base: bool,
}

#[derive(Debug)]
pub struct CameraRig {
    pose: CameraPose,
    damper: DampedVec3,
    session: Option<(u64, SessionStartSnapshot)>,
    smooth_time: f32,
    last_raw: Option<Vec3>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraPose::BASE)
    }
}

impl CameraRig {
    pub fn new(initial: CameraPose) -> Self {
        Self {
            pose: initial,
            damper: DampedVec3::default(),
            session: None,
            smooth_time: CAMERA_SMOOTH_TIME_SEC,
            last_raw: None,
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn snapshot(&self) -> Option<SessionStartSnapshot> {
        self.session.map(|(_, s)| s)
    }

    /// Undamped position computed on the last focused frame.
    pub fn last_raw_position(&self) -> Option<Vec3> {
        self.last_raw
    }

    pub fn advance(&mut self, dt: f32, input: &RigInput) -> CameraPose {
        match input.focus {
            Some((target, params)) => self.advance_focused(dt, input, target, params),
            None => self.advance_idle(dt, input),
        }
        if !self.pose.position.is_finite() || !self.pose.look_at.is_finite() {
            log::warn!("[rig] non-finite pose, snapping to base");
            self.pose = CameraPose::BASE;
            self.damper.reset();
        }
        self.pose
    }

    fn advance_focused(&mut self, dt: f32, input: &RigInput, target: Vec3, params: RigParams) {
        let target = if target.is_finite() {
            target
        } else {
            FALLBACK_LOOK_AT
        };
        let snapshot = match self.session {
            Some((id, snapshot)) if id == input.session_id => snapshot,
            _ => {
                let snapshot = SessionStartSnapshot::capture(self.pose.position, target);
                log::debug!(
                    "[rig] session {} start angle={:.3} radius={:.3} height={:.3}",
                    input.session_id,
                    snapshot.start_angle,
                    snapshot.start_radius,
                    snapshot.start_height
                );
                self.session = Some((input.session_id, snapshot));
                snapshot
            }
        };
        let raw = snapshot.orbit_position(target, &params, input.progress);
        self.last_raw = Some(raw);
        self.pose.position = self
            .damper
            .step(self.pose.position, raw, self.smooth_time, dt);
        self.pose.look_at = target;
    }

    fn advance_idle(&mut self, dt: f32, input: &RigInput) {
        self.session = None;
        self.last_raw = None;
        if input.force_base {
            self.pose = CameraPose::BASE;
            self.damper.reset();
            return;
        }
        let (px, py) = (input.pointer.x, input.pointer.y);
        let width = if input.viewport_width.is_finite() {
            input.viewport_width
        } else {
            0.0
        };
        let parallax = Vec3::new(
            IDLE_BASE_X + px * width / IDLE_WIDTH_DIVISOR,
            (1.0 + py) / 2.0,
            IDLE_Z,
        );
        self.pose.position = self
            .damper
            .step(self.pose.position, parallax, self.smooth_time, dt);
        self.pose.look_at = DEFAULT_LOOK_AT;
    }
}
