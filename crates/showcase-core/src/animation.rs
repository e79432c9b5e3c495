//! Looping motion clips and the head-free clip swap used while the gaze
//! constraint owns the head.
//!
//! One clip plays at a time; there is no cross-fading between clips.

use crate::error::SceneError;
use crate::skeleton::{mentions_head, Skeleton};
use glam::Quat;

/// Keyframed rotation channel for one bone.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationTrack {
    pub bone: String,
    pub times: Vec<f32>,
    pub values: Vec<Quat>,
}

impl RotationTrack {
    /// Rotation at `time`, slerping between the surrounding keys and holding
    /// the first/last key outside the keyed range.
    pub fn sample(&self, time: f32) -> Option<Quat> {
        let n = self.times.len().min(self.values.len());
        if n == 0 {
            return None;
        }
        if n == 1 || time <= self.times[0] {
            return Some(self.values[0]);
        }
        if time >= self.times[n - 1] {
            return Some(self.values[n - 1]);
        }
        let next = self.times[..n].partition_point(|t| *t <= time);
        let prev = next - 1;
        let span = (self.times[next] - self.times[prev]).max(f32::EPSILON);
        let t = (time - self.times[prev]) / span;
        Some(self.values[prev].slerp(self.values[next], t))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<RotationTrack>,
}

impl AnimationClip {
    /// Copy of this clip without any head or neck channels, named `<name>_no_head`.
    pub fn without_head_tracks(&self) -> AnimationClip {
        let name = if self.name.is_empty() { "clip" } else { &self.name };
        AnimationClip {
            name: format!("{name}_no_head"),
            duration: self.duration,
            tracks: self
                .tracks
                .iter()
                .filter(|t| !mentions_head(&t.bone))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipMode {
    Original,
    HeadFree,
}

/// Plays the character's base clip on a loop, or its cached head-free variant.
#[derive(Debug)]
pub struct ClipPlayer {
    base: Option<AnimationClip>,
    head_free: Option<AnimationClip>,
    mode: ClipMode,
    time: f32,
}

impl ClipPlayer {
    /// Plays the clip named `preferred`, else the first clip, else nothing.
    pub fn new(clips: Vec<AnimationClip>, preferred: Option<&str>) -> Self {
        let index = preferred
            .and_then(|name| clips.iter().position(|c| c.name == name))
            .unwrap_or(0);
        let base = clips.into_iter().nth(index);
        if let Some(clip) = &base {
            log::info!("[anim] playing `{}` ({:.2}s)", clip.name, clip.duration);
        }
        Self {
            base,
            head_free: None,
            mode: ClipMode::Original,
            time: 0.0,
        }
    }

    pub fn mode(&self) -> ClipMode {
        self.mode
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn current_clip(&self) -> Option<&AnimationClip> {
        match self.mode {
            ClipMode::Original => self.base.as_ref(),
            ClipMode::HeadFree => self.head_free.as_ref(),
        }
    }

    /// Whether the head-free variant has been built yet.
    pub fn has_cached_head_free(&self) -> bool {
        self.head_free.is_some()
    }

    /// Switch to the head-free variant, building it on first use. Playback
    /// restarts from the beginning. Without a base clip the player stays on
    /// the original (empty) clip.
    pub fn play_head_free(&mut self) -> Result<(), SceneError> {
        if self.head_free.is_none() {
            let base = self
                .base
                .as_ref()
                .ok_or_else(|| SceneError::MissingAnimationClip("no base clip".to_string()))?;
            self.head_free = Some(base.without_head_tracks());
        }
        self.mode = ClipMode::HeadFree;
        self.time = 0.0;
        Ok(())
    }

    /// Resume the original clip from its start.
    pub fn play_original(&mut self) {
        self.mode = ClipMode::Original;
        self.time = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        let Some(duration) = self.current_clip().map(|c| c.duration) else {
            return;
        };
        if duration > 0.0 && dt.is_finite() {
            self.time = (self.time + dt.max(0.0)).rem_euclid(duration);
        }
    }

    /// Write the sampled rotations onto the skeleton.
    pub fn apply(&self, skeleton: &mut Skeleton) {
        let Some(clip) = self.current_clip() else {
            return;
        };
        for track in &clip.tracks {
            let (Some(index), Some(q)) = (skeleton.find(&track.bone), track.sample(self.time)) else {
                continue;
            };
            if let Some(bone) = skeleton.bone_mut(index) {
                bone.rotation = q;
            }
        }
    }
}
