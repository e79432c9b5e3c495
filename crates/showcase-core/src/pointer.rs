//! Steering input: mouse pointer or device tilt.

use crate::constants::{
    GYRO_BETA_RANGE_DEG, GYRO_BETA_REST_DEG, GYRO_GAMMA_RANGE_DEG, MOBILE_WIDTH_THRESHOLD,
};
use crate::error::SceneError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerSourceKind {
    #[default]
    Pointer,
    Gyro,
}

/// One steering sample, tagged with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    Pointer { x: f32, y: f32 },
    Gyro { x: f32, y: f32 },
}

impl PointerSample {
    pub fn state(self) -> PointerState {
        match self {
            PointerSample::Pointer { x, y } => PointerState {
                x,
                y,
                source: PointerSourceKind::Pointer,
            },
            PointerSample::Gyro { x, y } => PointerState {
                x,
                y,
                source: PointerSourceKind::Gyro,
            },
        }
    }
}

/// Normalized steering coordinates, each in [-1, 1].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub source: PointerSourceKind,
}

/// Latest device-orientation reading, already normalized.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GyroReading {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl GyroReading {
    /// Map orientation angles (degrees) to [-1, 1]: `gamma / 55`, `(beta - 90) / 50`.
    /// Missing angles read as the device held upright.
    pub fn from_orientation(beta: Option<f64>, gamma: Option<f64>) -> Self {
        let beta = beta.filter(|b| b.is_finite()).unwrap_or(GYRO_BETA_REST_DEG as f64) as f32;
        let gamma = gamma.filter(|g| g.is_finite()).unwrap_or(0.0) as f32;
        Self {
            x: (gamma / GYRO_GAMMA_RANGE_DEG).clamp(-1.0, 1.0),
            y: ((beta - GYRO_BETA_REST_DEG) / GYRO_BETA_RANGE_DEG).clamp(-1.0, 1.0),
            active: true,
        }
    }
}

/// Pick gyro input on narrow viewports that report orientation, pointer otherwise.
pub fn select_sample(pointer: (f32, f32), gyro: Option<GyroReading>, viewport_width: f32) -> PointerSample {
    match gyro {
        Some(g) if g.active && viewport_width < MOBILE_WIDTH_THRESHOLD => PointerSample::Gyro {
            x: g.x.clamp(-1.0, 1.0),
            y: g.y.clamp(-1.0, 1.0),
        },
        _ => PointerSample::Pointer {
            x: pointer.0.clamp(-1.0, 1.0),
            y: pointer.1.clamp(-1.0, 1.0),
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SensorPermission {
    #[default]
    NotRequested,
    Pending,
    Granted,
    Denied,
    Unsupported,
}

/// Holds the most recent pointer and gyro inputs plus the orientation
/// permission handshake.
#[derive(Clone, Debug, Default)]
pub struct PointerSource {
    pointer: (f32, f32),
    gyro: Option<GyroReading>,
    permission: SensorPermission,
}

impl PointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer position in normalized device coordinates.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
        }
    }

    pub fn pointer_ndc(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn set_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) {
        if matches!(
            self.permission,
            SensorPermission::Denied | SensorPermission::Unsupported
        ) {
            return;
        }
        self.gyro = Some(GyroReading::from_orientation(beta, gamma));
    }

    pub fn gyro(&self) -> Option<GyroReading> {
        self.gyro
    }

    pub fn permission(&self) -> SensorPermission {
        self.permission
    }

    /// Called on the first touch. Returns `true` exactly once, when the
    /// platform permission prompt should be shown.
    pub fn begin_permission_request(&mut self) -> bool {
        if self.permission == SensorPermission::NotRequested {
            self.permission = SensorPermission::Pending;
            true
        } else {
            false
        }
    }

    /// Record how the permission prompt (or the lack of one) resolved.
    pub fn resolve_permission(&mut self, outcome: Result<(), SceneError>) {
        self.permission = match outcome {
            Ok(()) => SensorPermission::Granted,
            Err(SceneError::UnsupportedSensorApi) => SensorPermission::Unsupported,
            Err(e) => {
                log::debug!("[pointer] {e}; staying on pointer input");
                SensorPermission::Denied
            }
        };
        if matches!(
            self.permission,
            SensorPermission::Denied | SensorPermission::Unsupported
        ) {
            self.gyro = None;
        }
    }

    pub fn sample(&self, viewport_width: f32) -> PointerSample {
        select_sample(self.pointer, self.gyro, viewport_width)
    }
}
