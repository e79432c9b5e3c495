// Host-side tests for the pointer and canvas helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;

#[test]
fn client_to_ndc_maps_rect_corners() {
    let (left, top, w, h) = (10.0, 20.0, 200.0, 100.0);
    assert_eq!(client_to_ndc(10.0, 20.0, left, top, w, h), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(210.0, 120.0, left, top, w, h), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(110.0, 70.0, left, top, w, h), Vec2::ZERO);
}

#[test]
fn client_to_ndc_clamps_outside_rect() {
    let ndc = client_to_ndc(-500.0, 900.0, 0.0, 0.0, 100.0, 100.0);
    assert_eq!(ndc, Vec2::new(-1.0, -1.0));
}

#[test]
fn client_to_ndc_degenerate_rect_is_centre() {
    assert_eq!(client_to_ndc(5.0, 5.0, 0.0, 0.0, 0.0, 100.0), Vec2::ZERO);
}

#[test]
fn target_requires_three_finite_values() {
    assert_eq!(
        target_from_values(&[1.0, 2.0, -3.0]),
        Some(Vec3::new(1.0, 2.0, -3.0))
    );
    assert_eq!(target_from_values(&[1.0, 2.0]), None);
    assert_eq!(target_from_values(&[1.0, 2.0, 3.0, 4.0]), None);
    assert_eq!(target_from_values(&[1.0, f64::NAN, 3.0]), None);
}

#[test]
fn backing_size_caps_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 3.0, 1.5), (1200, 900));
    assert_eq!(backing_size(800.0, 600.0, 1.0, 1.5), (800, 600));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0, 1.5), (1, 1));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN, 1.5), (100, 50));
}
