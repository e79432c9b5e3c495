use glam::{Vec2, Vec3};

/// Client-space pointer position to normalized device coordinates
/// (+y up) relative to an element's bounding rect. Outside the rect the
/// result is clamped to [-1, 1].
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let u = ((client_x - left) / width).clamp(0.0, 1.0);
    let v = ((client_y - top) / height).clamp(0.0, 1.0);
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

/// `[x, y, z]` taken from an event payload; anything else is treated as missing.
#[inline]
pub fn target_from_values(values: &[f64]) -> Option<Vec3> {
    match values {
        [x, y, z] => {
            let v = Vec3::new(*x as f32, *y as f32, *z as f32);
            v.is_finite().then_some(v)
        }
        _ => None,
    }
}

/// Canvas backing-store size for a CSS size and device pixel ratio, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr.min(max_dpr) } else { 1.0 };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}
