// Host-side tests for pointer smoothing and camera unprojection.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/particles/mod.rs"]
mod particles;

use glam::{Vec2, Vec3};
use particles::constants::*;
use particles::pointer::{client_to_ndc, ndc_to_card_plane};
use particles::*;

/// Orthographic-style stand-in: NDC maps straight onto a 100-unit plane.
struct FlatViewport;

impl Viewport for FlatViewport {
    fn size(&self) -> (f32, f32) {
        (200.0, 200.0)
    }

    fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, 10.0)
    }

    fn unproject(&self, ndc_x: f32, ndc_y: f32, _depth: f32) -> Vec3 {
        Vec3::new(ndc_x * 5.0, ndc_y * 5.0, 5.0)
    }
}

#[test]
fn client_coordinates_map_to_ndc() {
    assert_eq!(client_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    // Degenerate viewport does not divide by zero
    assert!(client_to_ndc(5.0, 5.0, 0.0, 0.0).is_finite());
}

#[test]
fn tracker_starts_off_screen() {
    let p = PointerTracker::default();
    assert_eq!(p.smoothed(), Vec2::splat(POINTER_OFFSCREEN));
    assert_eq!(p.target(), Vec2::splat(POINTER_OFFSCREEN));
}

#[test]
fn smoothing_closes_five_percent_per_frame() {
    let mut p = PointerTracker::default();
    p.set_target_ndc(Vec2::ZERO);
    p.update(&FlatViewport);
    let expected = POINTER_OFFSCREEN * (1.0 - POINTER_SMOOTHING);
    assert!((p.smoothed().x - expected).abs() < 1e-4);
    assert!((p.smoothed().y - expected).abs() < 1e-4);

    for _ in 0..500 {
        p.update(&FlatViewport);
    }
    assert!(p.smoothed().length() < 1e-3);
}

#[test]
fn rays_land_on_the_card_plane() {
    // Eye at z=10 through (5,5,5) continues to (10,10,0)
    let hit = ndc_to_card_plane(&FlatViewport, Vec2::new(1.0, 1.0));
    assert!(hit.distance(Vec3::new(10.0, 10.0, 0.0)) < 1e-4);

    let mut p = PointerTracker::default();
    p.set_target_client(100.0, 100.0, 200.0, 200.0);
    for _ in 0..600 {
        p.update(&FlatViewport);
    }
    assert!(p.world().length() < 1e-2);
    assert!(p.world().z.abs() < 1e-4);
}

#[test]
fn camera_unprojects_centre_onto_view_axis() {
    let cam = Camera::new(1280.0, 720.0);
    assert_eq!(cam.eye(), Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!((cam.aspect() - 1280.0 / 720.0).abs() < 1e-6);

    let centre = ndc_to_card_plane(&cam, Vec2::ZERO);
    assert!(centre.length() < 1e-2);

    // Right edge of the screen lies at +x on the card plane
    let right = ndc_to_card_plane(&cam, Vec2::new(1.0, 0.0));
    assert!(right.x > 0.0 && right.y.abs() < 1e-2 && right.z.abs() < 1e-3);
    let expected = CAMERA_Z * (CAMERA_FOVY_DEG.to_radians() / 2.0).tan() * cam.aspect();
    assert!((right.x - expected).abs() / expected < 1e-2);
}

#[test]
fn camera_resize_tracks_aspect() {
    let mut cam = Camera::new(100.0, 100.0);
    cam.resize(400.0, 200.0);
    assert_eq!(cam.size(), (400.0, 200.0));
    assert!((cam.aspect() - 2.0).abs() < 1e-6);
    cam.resize(0.0, 0.0);
    assert!(cam.aspect().is_finite());
}
