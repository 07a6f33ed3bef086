//! Procedural point layouts: the initial card slab and the rose model.

use super::buffer::ParticleBuffer;
use super::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::ops::Range;

/// Particle budget for a viewport of the given CSS width.
#[inline]
pub fn particle_count_for_width(viewport_width_px: f64) -> usize {
    if viewport_width_px < NARROW_VIEWPORT_PX {
        PARTICLES_NARROW
    } else {
        PARTICLES_WIDE
    }
}

/// Uniform sample in `[-0.5, 0.5) * span`.
#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

/// Particles laid out inside the flattened card box, resting at their targets.
pub fn generate_card<R: Rng + ?Sized>(n: usize, rng: &mut R) -> ParticleBuffer {
    let mut targets = Vec::with_capacity(n);
    let mut colors = Vec::with_capacity(n);
    let mut sizes = Vec::with_capacity(n);
    let mut phases = Vec::with_capacity(n);
    for _ in 0..n {
        targets.push(Vec3::new(
            centered(rng, CARD_WIDTH),
            centered(rng, CARD_HEIGHT),
            centered(rng, CARD_DEPTH),
        ));
        colors.push(GOLD.lerp(ORANGE, rng.gen::<f32>() * CARD_MIX_MAX));
        sizes.push(rng.gen::<f32>() * SIZE_SPAN + SIZE_MIN);
        phases.push(rng.gen::<f32>() * TAU);
    }
    ParticleBuffer::from_rest(targets, colors, sizes, phases)
}

/// Contiguous index ranges for the three rose cohorts of an `n` particle set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoseCohorts {
    pub petals: Range<usize>,
    pub stem: Range<usize>,
    pub leaves: Range<usize>,
}

impl RoseCohorts {
    /// Petals take indices below 0.7n, stem below 0.9n, leaves the rest.
    /// Integer ceilings keep the split exact for every `n`.
    pub fn for_count(n: usize) -> Self {
        let petal_end = (7 * n).div_ceil(10);
        let stem_end = (9 * n).div_ceil(10);
        Self {
            petals: 0..petal_end,
            stem: petal_end..stem_end,
            leaves: stem_end..n,
        }
    }
}

/// Petal radius for azimuth `t` and polar angle `p`.
#[inline]
pub fn petal_radius(t: f32, p: f32) -> f32 {
    PETAL_RADIUS * p.sin().max(0.0).sqrt() * (1.0 + PETAL_UNDULATION * (PETAL_LOBES * t).sin())
}

#[inline]
pub fn petal_point(t: f32, p: f32) -> Vec3 {
    let r = petal_radius(t, p);
    Vec3::new(
        r * p.sin() * t.cos(),
        r * p.sin() * t.sin() + p.cos() * PETAL_LIFT,
        r * p.cos(),
    )
}

#[inline]
fn stem_point<R: Rng + ?Sized>(p: f32, rng: &mut R) -> Vec3 {
    Vec3::new(
        centered(rng, 2.0 * STEM_HALF_WIDTH),
        -p * STEM_LENGTH_PER_RAD + STEM_TOP_Y,
        centered(rng, 2.0 * STEM_HALF_WIDTH),
    )
}

#[inline]
fn leaf_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let side = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
    let s = rng.gen::<f32>() * PI;
    Vec3::new(
        side * s * LEAF_REACH_PER_RAD,
        LEAF_BASE_Y + s.sin() * LEAF_BULGE,
        s.cos() * LEAF_DEPTH,
    )
}

/// Replacement targets for the rose formation.
#[derive(Clone, Debug, Default)]
pub struct RoseTargets {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

/// Rose target positions for `n` particles plus the per-cohort colours
/// (petals deep red, stem and leaves gold).
pub fn generate_rose<R: Rng + ?Sized>(n: usize, rng: &mut R) -> RoseTargets {
    let cohorts = RoseCohorts::for_count(n);
    let mut positions = Vec::with_capacity(n);
    let mut colors = Vec::with_capacity(n);
    for i in 0..n {
        let t = rng.gen::<f32>() * TAU;
        let p = rng.gen::<f32>() * PI;
        if cohorts.petals.contains(&i) {
            positions.push(petal_point(t, p));
            colors.push(ROSE_RED);
        } else if cohorts.stem.contains(&i) {
            positions.push(stem_point(p, rng));
            colors.push(GOLD);
        } else {
            positions.push(leaf_point(rng));
            colors.push(GOLD);
        }
    }
    RoseTargets { positions, colors }
}

/// Independent wide-field targets for the floating cloud.
pub fn scatter_targets<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Vec3> {
    (0..n)
        .map(|_| {
            Vec3::new(
                centered(rng, SCATTER_EXTENT.x),
                centered(rng, SCATTER_EXTENT.y),
                centered(rng, SCATTER_EXTENT.z),
            )
        })
        .collect()
}
