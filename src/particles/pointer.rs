use super::camera::Viewport;
use super::constants::{POINTER_OFFSCREEN, POINTER_SMOOTHING, POINTER_UNPROJECT_DEPTH};
use glam::{Vec2, Vec3};

/// Smoothed pointer in normalised device coordinates and its world-space
/// projection onto the card plane (z = 0).
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    smoothed: Vec2,
    target: Vec2,
    world: Vec3,
}

impl Default for PointerTracker {
    fn default() -> Self {
        let off = Vec2::splat(POINTER_OFFSCREEN);
        Self {
            smoothed: off,
            target: off,
            world: Vec3::new(off.x, off.y, 0.0),
        }
    }
}

/// Viewport pixel coordinate (origin top-left) to NDC (origin centre, y up).
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((client_x / w) * 2.0 - 1.0, -(client_y / h) * 2.0 + 1.0)
}

/// Cast a ray from the eye through `ndc` and intersect it with z = 0.
/// Falls back to the unprojected point when the ray runs parallel to the plane.
pub fn ndc_to_card_plane<V: Viewport + ?Sized>(viewport: &V, ndc: Vec2) -> Vec3 {
    let eye = viewport.eye();
    let p = viewport.unproject(ndc.x, ndc.y, POINTER_UNPROJECT_DEPTH);
    let dir = (p - eye).normalize_or_zero();
    if dir.z.abs() < 1e-6 {
        return p;
    }
    let distance = -eye.z / dir.z;
    eye + dir * distance
}

impl PointerTracker {
    /// Record the latest raw pointer/touch sample in viewport pixels.
    pub fn set_target_client(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.set_target_ndc(client_to_ndc(client_x, client_y, width, height));
    }

    pub fn set_target_ndc(&mut self, ndc: Vec2) {
        self.target = ndc;
    }

    /// Per-frame smoothing step followed by reprojection into world space.
    pub fn update<V: Viewport + ?Sized>(&mut self, viewport: &V) -> Vec3 {
        self.smoothed = self.smoothed.lerp(self.target, POINTER_SMOOTHING);
        self.world = ndc_to_card_plane(viewport, self.smoothed);
        self.world
    }

    #[allow(dead_code)]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    #[allow(dead_code)]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn world(&self) -> Vec3 {
        self.world
    }
}
