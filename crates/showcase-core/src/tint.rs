//! Hover glow on the character's materials.

use crate::constants::{HOVER_EMISSIVE_RGB, HOVER_MIN_INTENSITY};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emissive {
    pub color: Vec3,
    pub intensity: f32,
}

impl Emissive {
    pub const NONE: Emissive = Emissive {
        color: Vec3::ZERO,
        intensity: 0.0,
    };
}

/// Materials whose emissive term can be overridden.
pub trait Tintable {
    fn emissive(&self) -> Emissive;
    fn set_emissive(&mut self, emissive: Emissive);
}

pub trait Material {
    fn name(&self) -> &str;
    fn base_color(&self) -> Vec3;

    fn as_tintable(&self) -> Option<&dyn Tintable> {
        None
    }

    fn as_tintable_mut(&mut self) -> Option<&mut dyn Tintable> {
        None
    }
}

/// Lit material with an emissive channel.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardMaterial {
    pub name: String,
    pub base_color: Vec3,
    pub emissive: Emissive,
}

impl Material for StandardMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn base_color(&self) -> Vec3 {
        self.base_color
    }

    fn as_tintable(&self) -> Option<&dyn Tintable> {
        Some(self)
    }

    fn as_tintable_mut(&mut self) -> Option<&mut dyn Tintable> {
        Some(self)
    }
}

impl Tintable for StandardMaterial {
    fn emissive(&self) -> Emissive {
        self.emissive
    }

    fn set_emissive(&mut self, emissive: Emissive) {
        self.emissive = emissive;
    }
}

/// Unlit flat color; not tintable.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicMaterial {
    pub name: String,
    pub color: Vec3,
}

impl Material for BasicMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn base_color(&self) -> Vec3 {
        self.color
    }
}

pub fn hover_emissive(saved: Emissive) -> Emissive {
    Emissive {
        color: Vec3::from_array(HOVER_EMISSIVE_RGB),
        intensity: saved.intensity.max(HOVER_MIN_INTENSITY),
    }
}

/// Applies the hover glow to every tintable material and puts the
/// original emissive back when the hover ends or is disabled.
#[derive(Debug, Default)]
pub struct HoverHighlight {
    /// Original emissive per material slot, `None` for non-tintable slots.
    saved: SmallVec<[Option<Emissive>; 8]>,
    cached: bool,
    lit: bool,
}

impl HoverHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn saved(&self, slot: usize) -> Option<Emissive> {
        self.saved.get(slot).copied().flatten()
    }

    /// Returns whether the glow is applied after this update.
    pub fn update(
        &mut self,
        hovered: bool,
        enabled: bool,
        materials: &mut [Box<dyn Material>],
    ) -> bool {
        if !self.cached {
            self.saved = materials
                .iter()
                .map(|m| m.as_tintable().map(|t| t.emissive()))
                .collect();
            self.cached = true;
        }
        let want = hovered && enabled;
        if want == self.lit {
            return self.lit;
        }
        for (material, saved) in materials.iter_mut().zip(self.saved.iter()) {
            let (Some(tint), Some(saved)) = (material.as_tintable_mut(), saved) else {
                continue;
            };
            tint.set_emissive(if want { hover_emissive(*saved) } else { *saved });
        }
        self.lit = want;
        log::trace!("[hover] glow {}", if want { "on" } else { "off" });
        self.lit
    }
}
