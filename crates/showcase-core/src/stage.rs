//! Per-frame orchestration of every stage component.
//!
//! Order within a frame: drain the bus into the focus controller, advance
//! progress, move the camera, fade the spotlight, update the hover glow,
//! play the clip then solve the gaze, drift the dust.

use crate::animation::ClipPlayer;
use crate::assets::{AssetProvider, IDLE_CLIP};
use crate::bus::SignalBus;
use crate::camera::{ray_sphere, Camera, CameraPose};
use crate::config::SceneConfig;
use crate::constants::{
    CHARACTER_HIT_OFFSET, CHARACTER_HIT_RADIUS, DEFAULT_LOOK_AT, SPOTLIGHT_AIM,
};
use crate::dust::ParticleDriftSystem;
use crate::error::SceneError;
use crate::focus::{FocusState, FocusStateController};
use crate::gaze::{GazeSettings, HeadGazeConstraint};
use crate::pointer::{PointerSource, PointerState};
use crate::rig::{CameraRig, RigInput};
use crate::skeleton::Skeleton;
use crate::spotlight::ZoomSpotlight;
use crate::tint::{HoverHighlight, Material};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Layout width in CSS pixels (logical pixels on native).
    pub viewport_css_width: f32,
    /// Pointer is over the character.
    pub hovered: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct OverlayFlags {
    pub about_visible: bool,
    pub projects_overlay_visible: bool,
    /// Set on exactly one frame per showreel session.
    pub showreel_ready: bool,
    pub loading_visible: bool,
    pub loading_percent: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightOutput {
    pub intensity: f32,
    /// Intensity as a fraction of its configured maximum.
    pub level: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub angle: f32,
    pub penumbra: f32,
    pub pool_radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub pose: CameraPose,
    pub focus: FocusState,
    pub progress: f32,
    pub pointer: PointerState,
    pub spotlight: SpotlightOutput,
    pub overlays: OverlayFlags,
    pub hover_lit: bool,
}

pub struct Stage {
    config: SceneConfig,
    controller: FocusStateController,
    rig: CameraRig,
    camera: Camera,
    spotlight: ZoomSpotlight,
    skeleton: Skeleton,
    clips: ClipPlayer,
    gaze: HeadGazeConstraint,
    materials: Vec<Box<dyn Material>>,
    highlight: HoverHighlight,
    dust: ParticleDriftSystem,
    pointer: PointerSource,
    loading_percent: f32,
}

impl Stage {
    pub fn new(config: SceneConfig, assets: &dyn AssetProvider) -> Self {
        let skeleton = assets.skeleton();
        let clips = ClipPlayer::new(assets.clips(), Some(IDLE_CLIP));
        let gaze = HeadGazeConstraint::new(&skeleton, GazeSettings::from_config(&config));
        let dust = ParticleDriftSystem::new(
            config.dust_count,
            config.dust_area,
            config.dust_speed,
            config.dust_seed,
        );
        let spotlight = ZoomSpotlight::new(&config, SPOTLIGHT_AIM);
        let rig = CameraRig::default();
        let mut camera = Camera::default();
        camera.set_pose(rig.pose());
        log::info!(
            "[stage] ready: {} bones, {} dust particles",
            skeleton.bones().len(),
            dust.len()
        );
        Self {
            controller: FocusStateController::new(),
            rig,
            camera,
            spotlight,
            skeleton,
            clips,
            gaze,
            materials: assets.materials(),
            highlight: HoverHighlight::new(),
            dust,
            pointer: PointerSource::new(),
            loading_percent: assets.progress().clamp(0.0, 100.0),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn controller(&self) -> &FocusStateController {
        &self.controller
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn spotlight(&self) -> &ZoomSpotlight {
        &self.spotlight
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn clips(&self) -> &ClipPlayer {
        &self.clips
    }

    pub fn gaze(&self) -> &HeadGazeConstraint {
        &self.gaze
    }

    pub fn materials(&self) -> &[Box<dyn Material>] {
        &self.materials
    }

    pub fn dust(&self) -> &ParticleDriftSystem {
        &self.dust
    }

    pub fn pointer(&self) -> &PointerSource {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerSource {
        &mut self.pointer
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    pub fn set_loading_progress(&mut self, percent: f32) {
        if percent.is_finite() {
            self.loading_percent = percent.clamp(0.0, 100.0);
        }
    }

    /// Centre of the character's hover/click sphere.
    pub fn character_hit_center(&self) -> Vec3 {
        self.skeleton.root().transform_point3(Vec3::ZERO) + CHARACTER_HIT_OFFSET
    }

    /// Whether a ray through `ndc` hits the character.
    pub fn pick_character(&self, ndc: Vec2) -> bool {
        let (origin, dir) = self.camera.ray_from_ndc(ndc);
        ray_sphere(origin, dir, self.character_hit_center(), CHARACTER_HIT_RADIUS).is_some()
    }

    pub fn advance(&mut self, dt: f32, bus: &SignalBus, input: FrameInput) -> FrameOutput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.controller.poll(bus);
        self.controller.advance(dt, &self.config);
        let focus = self.controller.state();
        let progress = self.controller.progress();

        let pointer = self.pointer.sample(input.viewport_css_width).state();
        let rig_input = RigInput {
            session_id: self.controller.session_id(),
            focus: focus.target().zip(focus.rig_params(&self.config)),
            progress,
            pointer,
            viewport_width: self.camera.viewport_width_at(DEFAULT_LOOK_AT),
            force_base: self.controller.take_force_base(),
        };
        let pose = self.rig.advance(dt, &rig_input);
        self.camera.set_pose(pose);

        let character_focus = matches!(focus, FocusState::CharacterFocus);
        self.spotlight.advance(dt, character_focus, progress);

        let hover_lit = self
            .highlight
            .update(input.hovered, !character_focus, &mut self.materials);

        self.gaze
            .set_active(self.controller.gaze_enabled(), &mut self.clips);
        self.clips.advance(dt);
        self.clips.apply(&mut self.skeleton);
        let (px, py) = self.pointer.pointer_ndc();
        match self
            .gaze
            .advance(&mut self.skeleton, &self.camera, Vec2::new(px, py))
        {
            Ok(_) => {}
            Err(SceneError::RayPlaneMiss) => log::trace!("[stage] gaze ray missed; holding head"),
            Err(e) => log::trace!("[stage] gaze skipped: {e}"),
        }

        self.dust.advance(dt);

        let overlays = OverlayFlags {
            about_visible: self.controller.about_visible(),
            projects_overlay_visible: self.controller.projects_overlay_visible(),
            showreel_ready: self.controller.take_showreel_ready(),
            loading_visible: self.loading_percent < 100.0,
            loading_percent: self.loading_percent,
        };
        FrameOutput {
            pose,
            focus,
            progress,
            pointer,
            spotlight: SpotlightOutput {
                intensity: self.spotlight.current_intensity(),
                level: self.spotlight.level(),
                position: self.spotlight.position(),
                target: self.spotlight.target(),
                angle: self.spotlight.angle(),
                penumbra: self.spotlight.penumbra(),
                pool_radius: self.spotlight.pool_radius(),
            },
            overlays,
            hover_lit,
        }
    }
}
