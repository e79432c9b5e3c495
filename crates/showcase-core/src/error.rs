//! Recoverable failure paths of the stage.
//!
//! None of these are fatal: every caller resolves them to a documented
//! default within the same frame and logs the fallback.

use crate::focus::FocusKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// A focus request arrived without usable target coordinates.
    #[error("focus target missing or non-finite for {0:?}")]
    MissingTarget(FocusKind),

    /// The head-excluded variant of a motion clip could not be built.
    #[error("cannot build head-excluded clip: {0}")]
    MissingAnimationClip(String),

    /// No bone matched the head/neck keywords.
    #[error("no head bone in skeleton")]
    MissingBone,

    /// The platform exposes no device-orientation API.
    #[error("device orientation is not supported")]
    UnsupportedSensorApi,

    /// The user refused orientation sensor access.
    #[error("device orientation permission denied")]
    PermissionDenied,

    /// The gaze ray is parallel to, or points away from, the head plane.
    #[error("gaze ray does not intersect the head plane")]
    RayPlaneMiss,

    /// A configuration override named an option that does not exist.
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    /// A configuration override value failed to parse.
    #[error("invalid value `{value}` for option `{name}`")]
    InvalidValue { name: String, value: String },
}
