//! Focus state machine: which view the camera is heading for and how far
//! along the transition is.

use crate::bus::{FocusRequest, Signal, SignalBus};
use crate::config::SceneConfig;
use crate::constants::{
    CHARACTER_FOCUS_POINT, DEFAULT_PROJECTS_TARGET, DEFAULT_SHOWREEL_TARGET, PROJECTS_RIG_RADIUS,
    SCREEN_RIG_SPEED, SHOWREEL_RIG_RADIUS,
};
use crate::error::SceneError;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusKind {
    Character,
    Showreel,
    Projects,
}

impl FocusKind {
    /// Target used when a request carries no usable coordinates.
    pub fn default_target(self) -> Vec3 {
        match self {
            FocusKind::Character => CHARACTER_FOCUS_POINT,
            FocusKind::Showreel => DEFAULT_SHOWREEL_TARGET,
            FocusKind::Projects => DEFAULT_PROJECTS_TARGET,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    CharacterFocus,
    ShowreelFocus { target: Vec3 },
    ProjectsFocus { target: Vec3 },
}

impl FocusState {
    pub fn kind(&self) -> Option<FocusKind> {
        match self {
            FocusState::Idle => None,
            FocusState::CharacterFocus => Some(FocusKind::Character),
            FocusState::ShowreelFocus { .. } => Some(FocusKind::Showreel),
            FocusState::ProjectsFocus { .. } => Some(FocusKind::Projects),
        }
    }

    pub fn is_focused(&self) -> bool {
        !matches!(self, FocusState::Idle)
    }

    /// Point the camera orbits and looks at, if focused.
    pub fn target(&self) -> Option<Vec3> {
        match self {
            FocusState::Idle => None,
            FocusState::CharacterFocus => Some(CHARACTER_FOCUS_POINT),
            FocusState::ShowreelFocus { target } | FocusState::ProjectsFocus { target } => {
                Some(*target)
            }
        }
    }

    /// Orbit parameters for this focus kind.
    pub fn rig_params(&self, config: &SceneConfig) -> Option<RigParams> {
        match self {
            FocusState::Idle => None,
            FocusState::CharacterFocus => Some(RigParams {
                radius: config.cam_radius,
                height: config.cam_height,
                spin: config.cam_spin(),
                speed: config.cam_speed,
            }),
            FocusState::ShowreelFocus { target } => Some(RigParams {
                radius: SHOWREEL_RIG_RADIUS,
                height: target.y,
                spin: 0.0,
                speed: SCREEN_RIG_SPEED,
            }),
            FocusState::ProjectsFocus { target } => Some(RigParams {
                radius: PROJECTS_RIG_RADIUS,
                height: target.y,
                spin: 0.0,
                speed: SCREEN_RIG_SPEED,
            }),
        }
    }
}

/// Orbit the camera settles into at the end of a focus session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigParams {
    pub radius: f32,
    /// Absolute camera height at the end of the transition.
    pub height: f32,
    /// Extra orbit angle swept over the transition, radians.
    pub spin: f32,
    /// Progress per second.
    pub speed: f32,
}

/// Owns the active [`FocusState`] and its transition progress.
///
/// Every session begin mints a new `session_id`; consumers compare ids to
/// detect a fresh session and re-capture their start snapshot.
#[derive(Debug)]
pub struct FocusStateController {
    state: FocusState,
    progress: f32,
    session_id: u64,
    force_base: bool,
    projects_overlay: bool,
    showreel_ready_pending: bool,
    showreel_ready_fired: bool,
}

impl Default for FocusStateController {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusStateController {
    pub fn new() -> Self {
        Self {
            state: FocusState::Idle,
            progress: 0.0,
            session_id: 0,
            force_base: false,
            projects_overlay: false,
            showreel_ready_pending: false,
            showreel_ready_fired: false,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// Apply whatever signal is pending on the bus.
    pub fn poll(&mut self, bus: &SignalBus) {
        if let Some(signal) = bus.take() {
            self.handle(signal);
        }
    }

    pub fn handle(&mut self, signal: Signal) {
        match signal {
            Signal::RequestFocus(FocusRequest { kind, target }) => {
                self.request_focus(kind, target);
            }
            Signal::RequestIdle => self.request_idle(),
            Signal::ReleaseFocus => self.release_focus(),
        }
    }

    /// Start a session for `kind`, unless that exact session is already running.
    pub fn request_focus(&mut self, kind: FocusKind, target: Option<Vec3>) {
        let target = match resolve_target(kind, target) {
            Ok(t) => t,
            Err(e) => {
                log::debug!("[focus] {e}; using default target");
                kind.default_target()
            }
        };
        let next = match kind {
            FocusKind::Character => FocusState::CharacterFocus,
            FocusKind::Showreel => FocusState::ShowreelFocus { target },
            FocusKind::Projects => FocusState::ProjectsFocus { target },
        };
        if next == self.state {
            return;
        }
        self.state = next;
        self.progress = 0.0;
        self.session_id += 1;
        self.force_base = false;
        self.showreel_ready_pending = false;
        self.showreel_ready_fired = false;
        log::debug!("[focus] session {} begins: {:?}", self.session_id, next);
    }

    /// Clear to idle and ask the camera to jump to its base pose.
    pub fn request_idle(&mut self) {
        self.clear();
        self.force_base = true;
        log::debug!("[focus] idle (hard reset)");
    }

    /// Clear to idle and let the camera ease back.
    pub fn release_focus(&mut self) {
        self.clear();
        log::debug!("[focus] idle (release)");
    }

    fn clear(&mut self) {
        self.state = FocusState::Idle;
        self.progress = 0.0;
        self.projects_overlay = false;
        self.showreel_ready_pending = false;
        self.showreel_ready_fired = false;
    }

    /// Advance the running session by `dt` seconds at its rig speed.
    pub fn advance(&mut self, dt: f32, config: &SceneConfig) {
        let Some(params) = self.state.rig_params(config) else {
            self.progress = 0.0;
            return;
        };
        self.progress = step_progress(self.progress, dt, params.speed);
        if self.progress >= 1.0 {
            match self.state {
                FocusState::ProjectsFocus { .. } => self.projects_overlay = true,
                FocusState::ShowreelFocus { .. } if !self.showreel_ready_fired => {
                    self.showreel_ready_fired = true;
                    self.showreel_ready_pending = true;
                }
                _ => {}
            }
        }
    }

    /// Consume the pending hard-reset request.
    pub fn take_force_base(&mut self) -> bool {
        std::mem::take(&mut self.force_base)
    }

    /// True once per showreel session, on the frame its transition completes.
    pub fn take_showreel_ready(&mut self) -> bool {
        std::mem::take(&mut self.showreel_ready_pending)
    }

    pub fn about_visible(&self) -> bool {
        matches!(self.state, FocusState::CharacterFocus) && self.progress >= 1.0
    }

    pub fn projects_overlay_visible(&self) -> bool {
        self.projects_overlay
    }

    /// Gaze follows the pointer only while the character is in focus.
    pub fn gaze_enabled(&self) -> bool {
        matches!(self.state, FocusState::CharacterFocus)
    }
}

/// `min(1, progress + dt * speed)`, ignoring negative or non-finite steps.
pub fn step_progress(progress: f32, dt: f32, speed: f32) -> f32 {
    let step = dt.max(0.0) * speed.max(0.0);
    if !step.is_finite() {
        return progress;
    }
    (progress + step).clamp(0.0, 1.0)
}

fn resolve_target(kind: FocusKind, target: Option<Vec3>) -> Result<Vec3, SceneError> {
    match (kind, target) {
        (FocusKind::Character, _) => Ok(CHARACTER_FOCUS_POINT),
        (_, Some(t)) if t.is_finite() => Ok(t),
        _ => Err(SceneError::MissingTarget(kind)),
    }
}
