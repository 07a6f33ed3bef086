use super::buffer::ParticleBuffer;
use super::constants::{BEND_BLEND, BEND_RATE_PER_MS};
use glam::Vec3;
use std::f32::consts::PI;

/// Hinge angle after `elapsed_ms` of opening, clamped to `[0, π]`.
#[inline]
pub fn hinge_angle(elapsed_ms: f64) -> f32 {
    ((elapsed_ms.max(0.0) as f32) * BEND_RATE_PER_MS).min(PI)
}

/// Where a left-panel particle resting at `rest` sits once the panel has
/// swung by `angle` around the spine (the y axis at x = 0).
#[inline]
pub fn hinge_point(rest: Vec3, angle: f32) -> (f32, f32) {
    (rest.x * angle.cos(), rest.x * angle.sin())
}

/// One frame of the card-opening bend.
///
/// Particles resting on the left panel (`target.x < 0`) close `BEND_BLEND` of
/// the gap toward their hinged position on x and z. Everything else is left
/// untouched.
pub fn apply_bend(buffer: &mut ParticleBuffer, elapsed_ms: f64) {
    let angle = hinge_angle(elapsed_ms);
    let (positions, targets) = buffer.positions_and_targets_mut();
    for (pos, rest) in positions.iter_mut().zip(targets) {
        if rest.x >= 0.0 {
            continue;
        }
        let (x, z) = hinge_point(*rest, angle);
        pos.x += (x - pos.x) * BEND_BLEND;
        pos.z += (z - pos.z) * BEND_BLEND;
    }
}
