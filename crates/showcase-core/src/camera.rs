//! Perspective camera description and screen-space ray helpers.
//!
//! These types avoid platform APIs and are shared by the web and native
//! frontends to build camera matrices and cast pointer rays.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_CAMERA_POSITION, DEFAULT_LOOK_AT,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Where the camera sits and what it looks at this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const BASE: CameraPose = CameraPose {
        position: DEFAULT_CAMERA_POSITION,
        look_at: DEFAULT_LOOK_AT,
    };
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::BASE
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: DEFAULT_CAMERA_POSITION,
            target: DEFAULT_LOOK_AT,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width.max(1.0) / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Width in world units of the view frustum slice through `point`.
    pub fn viewport_width_at(&self, point: Vec3) -> f32 {
        let distance = (point - self.eye).length();
        2.0 * (self.fovy_radians * 0.5).tan() * distance * self.aspect
    }

    /// World-space ray through normalized device coordinates (`x`, `y` in [-1, 1], +y up).
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let dir = (far - self.eye).try_normalize().unwrap_or_else(|| self.forward());
        (self.eye, dir)
    }
}

/// Ray/plane intersection, plane given by a point and unit normal.
///
/// `None` when the ray runs parallel to the plane or the hit lies behind
/// the origin.
pub fn ray_plane(ray_origin: Vec3, ray_dir: Vec3, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
    let denom = plane_normal.dot(ray_dir);
    if denom.abs() <= 1e-6 {
        return None;
    }
    let t = plane_normal.dot(plane_point - ray_origin) / denom;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
