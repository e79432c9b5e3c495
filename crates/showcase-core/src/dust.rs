//! Ambient dust: a fixed pool of particles rising through a box and
//! wrapping back to the floor.

use crate::constants::{DUST_FRAME_RATE_BASELINE, DUST_JITTER};
use glam::Vec3;
use rand::prelude::*;

pub struct ParticleDriftSystem {
    positions: Vec<Vec3>,
    area: Vec3,
    speed: f32,
    rng: StdRng,
}

impl ParticleDriftSystem {
    /// `area` is (width, height, depth); particles start spread over
    /// x in [-w/2, w/2), y in [0, h), z in [-d/2, d/2).
    pub fn new(count: usize, area: Vec3, speed: f32, seed: u64) -> Self {
        let area = area.max(Vec3::splat(f32::EPSILON));
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * area.x,
                    rng.gen::<f32>() * area.y,
                    (rng.gen::<f32>() - 0.5) * area.z,
                )
            })
            .collect::<Vec<_>>();
        Self {
            positions,
            area,
            speed,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn area(&self) -> Vec3 {
        self.area
    }

    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let rise = self.speed * dt * DUST_FRAME_RATE_BASELINE;
        let half_w = self.area.x * 0.5;
        for p in &mut self.positions {
            p.y += rise;
            if p.y >= self.area.y || p.y < 0.0 {
                p.y = 0.0;
            }
            p.x += (self.rng.gen::<f32>() - 0.5) * DUST_JITTER;
            p.z += (self.rng.gen::<f32>() - 0.5) * DUST_JITTER;
            if p.x > half_w {
                p.x = -half_w;
            } else if p.x < -half_w {
                p.x = half_w;
            }
        }
    }
}
