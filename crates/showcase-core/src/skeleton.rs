//! Minimal bone hierarchy: local transforms with parent links, resolved to
//! world matrices on demand.

use crate::constants::HEAD_BONE_KEYWORDS;
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct Bone {
    pub name: String,
    pub parent: Option<usize>,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Bone {
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[derive(Clone, Debug)]
pub struct Skeleton {
    /// Model-to-world transform of the whole rig.
    root: Mat4,
    bones: Vec<Bone>,
    by_name: FnvHashMap<String, usize>,
}

impl Skeleton {
    pub fn new(root: Mat4) -> Self {
        Self {
            root,
            bones: Vec::new(),
            by_name: FnvHashMap::default(),
        }
    }

    /// Append a bone. Parents must already exist; an unknown parent makes
    /// the bone a root bone.
    pub fn add_bone(
        &mut self,
        name: &str,
        parent: Option<usize>,
        translation: Vec3,
        rotation: Quat,
    ) -> usize {
        let index = self.bones.len();
        let parent = parent.filter(|p| *p < index);
        self.bones.push(Bone {
            name: name.to_string(),
            parent,
            translation,
            rotation,
            scale: Vec3::ONE,
        });
        self.by_name.entry(name.to_string()).or_insert(index);
        index
    }

    pub fn root(&self) -> Mat4 {
        self.root
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone(&self, index: usize) -> Option<&Bone> {
        self.bones.get(index)
    }

    pub fn bone_mut(&mut self, index: usize) -> Option<&mut Bone> {
        self.bones.get_mut(index)
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// First bone, in insertion order, whose name mentions the head or neck.
    pub fn find_head_bone(&self) -> Option<usize> {
        self.bones
            .iter()
            .position(|b| mentions_head(&b.name))
    }

    /// World transform of the bone's parent (the rig root for root bones).
    pub fn parent_world_matrix(&self, index: usize) -> Mat4 {
        match self.bones.get(index).and_then(|b| b.parent) {
            Some(parent) => self.world_matrix(parent),
            None => self.root,
        }
    }

    pub fn world_matrix(&self, index: usize) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            let Some(bone) = self.bones.get(i) else {
                break;
            };
            m = bone.local_matrix() * m;
            cursor = bone.parent;
        }
        self.root * m
    }

    pub fn world_position(&self, index: usize) -> Vec3 {
        self.world_matrix(index).transform_point3(Vec3::ZERO)
    }
}

/// Whether a bone or track name refers to the head/neck chain.
pub fn mentions_head(name: &str) -> bool {
    let lower = name.to_lowercase();
    HEAD_BONE_KEYWORDS.iter().any(|k| lower.contains(k))
}
