//! Named tuning surface of the stage.
//!
//! Defaults match the shipped scene. Front-ends may override individual
//! options by name (query string on web, `name=value` arguments on native)
//! through [`SceneConfig::apply_override`].

use crate::constants::MAX_DUST_COUNT;
use crate::error::SceneError;
use glam::Vec3;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub cam_radius: f32,
    pub cam_height: f32,
    pub cam_spin_deg: f32,
    pub cam_speed: f32,

    pub spot_intensity: f32,
    pub spot_angle: f32,
    pub spot_penumbra: f32,
    pub spot_height: f32,
    pub spot_offset_x: f32,
    pub spot_offset_z: f32,
    pub spot_fade_speed: f32,

    pub head_yaw_offset: f32,
    pub head_pitch_offset: f32,
    pub head_invert_x: bool,
    pub head_invert_y: bool,

    pub dust_count: usize,
    pub dust_area: Vec3,
    pub dust_speed: f32,
    pub dust_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cam_radius: 2.46,
            cam_height: -0.49,
            cam_spin_deg: 173.0,
            cam_speed: 0.6,
            spot_intensity: 7.89,
            spot_angle: 0.63,
            spot_penumbra: 0.83,
            spot_height: 1.37,
            spot_offset_x: -0.05,
            spot_offset_z: -0.26,
            spot_fade_speed: 3.0,
            head_yaw_offset: -0.5,
            head_pitch_offset: 0.53,
            head_invert_x: true,
            head_invert_y: false,
            dust_count: 450,
            dust_area: Vec3::new(16.0, 8.0, 16.0),
            dust_speed: 0.006,
            dust_seed: 7,
        }
    }
}

impl SceneConfig {
    /// Spin of the character orbit in radians.
    pub fn cam_spin(&self) -> f32 {
        self.cam_spin_deg.to_radians()
    }

    /// Set one option by its public name. On error the config is unchanged.
    pub fn apply_override(&mut self, name: &str, value: &str) -> Result<(), SceneError> {
        let value = value.trim();
        match name {
            "camRadius" => self.cam_radius = parse_finite(name, value)?,
            "camHeight" => self.cam_height = parse_finite(name, value)?,
            "camSpinDeg" => self.cam_spin_deg = parse_finite(name, value)?,
            "camSpeed" => self.cam_speed = parse_non_negative(name, value)?,
            "spotIntensity" => self.spot_intensity = parse_non_negative(name, value)?,
            "spotAngle" => self.spot_angle = parse_finite(name, value)?,
            "spotPenumbra" => self.spot_penumbra = parse_finite(name, value)?,
            "spotHeight" => self.spot_height = parse_finite(name, value)?,
            "spotOffsetX" => self.spot_offset_x = parse_finite(name, value)?,
            "spotOffsetZ" => self.spot_offset_z = parse_finite(name, value)?,
            "spotFadeSpeed" => self.spot_fade_speed = parse_non_negative(name, value)?,
            "headYawOffset" => self.head_yaw_offset = parse_finite(name, value)?,
            "headPitchOffset" => self.head_pitch_offset = parse_finite(name, value)?,
            "headInvertX" => self.head_invert_x = parse_bool(name, value)?,
            "headInvertY" => self.head_invert_y = parse_bool(name, value)?,
            "dustCount" => self.dust_count = parse_dust_count(name, value)?,
            "dustArea" => self.dust_area = parse_vec3(name, value)?,
            "dustSpeed" => self.dust_speed = parse_finite(name, value)?,
            "dustSeed" => self.dust_seed = parse(name, value)?,
            _ => return Err(SceneError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Apply every `name=value` pair, logging and skipping the ones that fail.
    pub fn apply_pairs<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (name, value) in pairs {
            match self.apply_override(name, value) {
                Ok(()) => log::info!("[config] {name} = {value}"),
                Err(e) => log::warn!("[config] ignoring override: {e}"),
            }
        }
    }
}

/// Split `a=1&b=2` (with or without a leading `?`) into pairs.
pub fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|kv| !kv.is_empty())
        .filter_map(|kv| kv.split_once('='))
}

fn invalid(name: &str, value: &str) -> SceneError {
    SceneError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, SceneError> {
    value.parse::<T>().map_err(|_| invalid(name, value))
}

fn parse_finite(name: &str, value: &str) -> Result<f32, SceneError> {
    let v: f32 = parse(name, value)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(invalid(name, value))
    }
}

fn parse_non_negative(name: &str, value: &str) -> Result<f32, SceneError> {
    let v = parse_finite(name, value)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(invalid(name, value))
    }
}

fn parse_dust_count(name: &str, value: &str) -> Result<usize, SceneError> {
    let n: usize = parse(name, value)?;
    if n <= MAX_DUST_COUNT {
        Ok(n)
    } else {
        Err(invalid(name, value))
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, SceneError> {
    match value {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(invalid(name, value)),
    }
}

fn parse_vec3(name: &str, value: &str) -> Result<Vec3, SceneError> {
    let parts = value
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid(name, value))?;
    match parts.as_slice() {
        [x, y, z] if *x > 0.0 && *y > 0.0 && *z > 0.0 => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(invalid(name, value)),
    }
}
