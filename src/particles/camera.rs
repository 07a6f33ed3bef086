//! Perspective camera plus the viewport seam the pointer tracker needs.

use super::constants::{CAMERA_FAR, CAMERA_FOVY_DEG, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec3};

/// What the core needs from the rendering surface: its pixel size, the eye
/// position, and a way to turn normalised device coordinates back into world
/// space.
pub trait Viewport {
    fn size(&self) -> (f32, f32);
    fn eye(&self) -> Vec3;
    /// NDC `x, y` in `[-1, 1]`, `depth` in `[0, 1]` (near to far).
    fn unproject(&self, ndc_x: f32, ndc_y: f32, depth: f32) -> Vec3;
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub width: f32,
    pub height: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            width: width.max(1.0),
            height: height.max(1.0),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect(), self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Viewport for Camera {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn unproject(&self, ndc_x: f32, ndc_y: f32, depth: f32) -> Vec3 {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        inv.project_point3(Vec3::new(ndc_x, ndc_y, depth))
    }
}
