pub mod animation;
pub mod assets;
pub mod bus;
pub mod camera;
pub mod config;
pub mod constants;
pub mod damping;
pub mod dust;
pub mod error;
pub mod focus;
pub mod gaze;
pub mod instances;
pub mod pointer;
pub mod rig;
pub mod skeleton;
pub mod spotlight;
pub mod stage;
pub mod tint;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::{AnimationClip, ClipMode, ClipPlayer, RotationTrack};
pub use assets::{AssetProvider, ProceduralAssets};
pub use bus::{FocusRequest, Signal, SignalBus};
pub use camera::{Camera, CameraPose};
pub use config::SceneConfig;
pub use constants::*;
pub use dust::ParticleDriftSystem;
pub use error::SceneError;
pub use focus::{FocusKind, FocusState, FocusStateController, RigParams};
pub use gaze::{HeadConstraintState, HeadGazeConstraint};
pub use instances::{build_instances, InstanceData, Uniforms};
pub use pointer::{PointerSample, PointerSource, PointerState, SensorPermission};
pub use rig::{CameraRig, SessionStartSnapshot};
pub use spotlight::ZoomSpotlight;
pub use stage::{FrameInput, FrameOutput, OverlayFlags, Stage};
