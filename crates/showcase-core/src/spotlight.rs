//! Spotlight that fades up over the character once the focus transition
//! has landed.

use crate::config::SceneConfig;
use crate::damping::low_pass_step;
use glam::Vec3;

const MAX_CONE_ANGLE: f32 = 1.45;

#[derive(Clone, Debug)]
pub struct ZoomSpotlight {
    intensity: f32,
    fade_rate: f32,
    angle: f32,
    penumbra: f32,
    height: f32,
    offset_x: f32,
    offset_z: f32,
    target: Vec3,
    position: Vec3,
    current: f32,
}

impl ZoomSpotlight {
    pub fn new(config: &SceneConfig, target: Vec3) -> Self {
        let mut light = Self {
            intensity: config.spot_intensity.max(0.0),
            fade_rate: config.spot_fade_speed.max(0.0),
            angle: config.spot_angle,
            penumbra: config.spot_penumbra,
            height: config.spot_height,
            offset_x: config.spot_offset_x,
            offset_z: config.spot_offset_z,
            target,
            position: Vec3::ZERO,
            current: 0.0,
        };
        light.set_target(target);
        light
    }

    /// Re-aim the light; its position follows the target plus the configured offsets.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.position = target + Vec3::new(self.offset_x, self.height, self.offset_z);
    }

    /// Intensity the light is fading toward this frame.
    pub fn desired(&self, enabled: bool, progress: f32) -> f32 {
        if enabled && progress >= 1.0 {
            self.intensity
        } else {
            0.0
        }
    }

    pub fn advance(&mut self, dt: f32, enabled: bool, progress: f32) -> f32 {
        let desired = self.desired(enabled, progress);
        self.current = low_pass_step(self.current, desired, dt, self.fade_rate).max(0.0);
        self.current
    }

    pub fn current_intensity(&self) -> f32 {
        self.current
    }

    /// Current intensity as a fraction of the configured maximum.
    pub fn level(&self) -> f32 {
        if self.intensity > 0.0 {
            (self.current / self.intensity).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Cone half-angle, limited short of a right angle.
    pub fn angle(&self) -> f32 {
        self.angle.clamp(0.0, MAX_CONE_ANGLE)
    }

    /// Fraction of the cone that is soft edge, in [0, 1].
    pub fn penumbra(&self) -> f32 {
        self.penumbra.clamp(0.0, 1.0)
    }

    /// Radius of the lit disc where the cone meets its target.
    pub fn pool_radius(&self) -> f32 {
        self.position.distance(self.target) * self.angle().tan()
    }
}
