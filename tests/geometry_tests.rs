// Host-side tests for card and rose point layouts.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/particles/mod.rs"]
mod particles;

use glam::Vec3;
use particles::constants::*;
use particles::geometry::{petal_point, petal_radius, scatter_targets};
use particles::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

fn between(v: f32, a: f32, b: f32) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    v >= lo - 1e-5 && v <= hi + 1e-5
}

#[test]
fn particle_budget_follows_viewport_width() {
    assert_eq!(particle_count_for_width(320.0), 4000);
    assert_eq!(particle_count_for_width(767.9), 4000);
    assert_eq!(particle_count_for_width(768.0), 7000);
    assert_eq!(particle_count_for_width(2560.0), 7000);
}

#[test]
fn card_particles_fill_the_card_box_at_rest() {
    let mut rng = StdRng::seed_from_u64(7);
    let buf = generate_card(2000, &mut rng);
    assert_eq!(buf.len(), 2000);
    assert_eq!(buf.positions(), buf.targets());
    for t in buf.targets() {
        assert!(t.x >= -CARD_WIDTH / 2.0 && t.x < CARD_WIDTH / 2.0);
        assert!(t.y >= -CARD_HEIGHT / 2.0 && t.y < CARD_HEIGHT / 2.0);
        assert!(t.z >= -CARD_DEPTH / 2.0 && t.z < CARD_DEPTH / 2.0);
    }
    // Both halves of the card get particles
    assert!(buf.targets().iter().any(|t| t.x < 0.0));
    assert!(buf.targets().iter().any(|t| t.x > 0.0));
}

#[test]
fn card_colours_sizes_and_phases_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let buf = generate_card(1000, &mut rng);
    let limit = GOLD.lerp(ORANGE, CARD_MIX_MAX);
    for c in buf.colors() {
        assert!(between(c.x, GOLD.x, limit.x));
        assert!(between(c.y, GOLD.y, limit.y));
        assert!(between(c.z, GOLD.z, limit.z));
    }
    for s in buf.sizes() {
        assert!(*s >= SIZE_MIN && *s < SIZE_MIN + SIZE_SPAN);
    }
    for p in buf.phases() {
        assert!(*p >= 0.0 && *p < TAU);
    }
}

#[test]
fn empty_card_is_valid() {
    let mut rng = StdRng::seed_from_u64(1);
    let buf = generate_card(0, &mut rng);
    assert!(buf.is_empty());
    assert!(buf.positions_flat().is_empty());
}

#[test]
fn flat_views_interleave_components() {
    let mut rng = StdRng::seed_from_u64(3);
    let buf = generate_card(4, &mut rng);
    let flat = buf.positions_flat();
    assert_eq!(flat.len(), 12);
    assert_eq!(flat[3], buf.positions()[1].x);
    assert_eq!(buf.colors_flat()[5], buf.colors()[1].z);
}

#[test]
fn cohorts_split_seventy_twenty_ten() {
    let c = RoseCohorts::for_count(10);
    assert_eq!(c.petals, 0..7);
    assert_eq!(c.stem, 7..9);
    assert_eq!(c.leaves, 9..10);

    let c = RoseCohorts::for_count(7000);
    assert_eq!(c.petals.len(), 4900);
    assert_eq!(c.stem.len(), 1400);
    assert_eq!(c.leaves.len(), 700);

    // Ceilings: 0.7 * 3 = 2.1 -> 3 petals, nothing left over
    let c = RoseCohorts::for_count(3);
    assert_eq!(c.petals, 0..3);
    assert!(c.stem.is_empty());
    assert!(c.leaves.is_empty());

    let c = RoseCohorts::for_count(0);
    assert!(c.petals.is_empty() && c.stem.is_empty() && c.leaves.is_empty());
}

#[test]
fn petal_formula_matches_closed_form() {
    // p = 0 collapses the radius and leaves only the lift
    assert_eq!(petal_radius(1.3, 0.0), 0.0);
    let top = petal_point(0.4, 0.0);
    assert!(top.distance(Vec3::new(0.0, PETAL_LIFT, 0.0)) < 1e-4);

    // p = pi/2, t = 0: r = 50, point on +x
    let side = petal_point(0.0, PI / 2.0);
    assert!((side.x - PETAL_RADIUS).abs() < 1e-3);
    assert!(side.y.abs() < 1e-3);
    assert!(side.z.abs() < 1e-3);
}

#[test]
fn rose_targets_follow_cohorts() {
    let n = 1000;
    let mut rng = StdRng::seed_from_u64(21);
    let rose = generate_rose(n, &mut rng);
    assert_eq!(rose.positions.len(), n);
    assert_eq!(rose.colors.len(), n);
    let cohorts = RoseCohorts::for_count(n);
    let max_r = PETAL_RADIUS * (1.0 + PETAL_UNDULATION);

    for i in cohorts.petals.clone() {
        assert_eq!(rose.colors[i], ROSE_RED);
        let p = rose.positions[i];
        assert!(p.x.abs() <= max_r + 1e-3);
        assert!(p.z.abs() <= max_r + 1e-3);
        assert!(p.y.abs() <= max_r + PETAL_LIFT + 1e-3);
    }
    for i in cohorts.stem.clone() {
        assert_eq!(rose.colors[i], GOLD);
        let p = rose.positions[i];
        assert!(p.x >= -STEM_HALF_WIDTH && p.x < STEM_HALF_WIDTH);
        assert!(p.z >= -STEM_HALF_WIDTH && p.z < STEM_HALF_WIDTH);
        assert!(p.y <= STEM_TOP_Y + 1e-4);
        assert!(p.y >= STEM_TOP_Y - PI * STEM_LENGTH_PER_RAD - 1e-3);
    }
    for i in cohorts.leaves.clone() {
        assert_eq!(rose.colors[i], GOLD);
        let p = rose.positions[i];
        assert!(p.y >= LEAF_BASE_Y - 1e-4 && p.y <= LEAF_BASE_Y + LEAF_BULGE + 1e-4);
        assert!(p.x.abs() <= PI * LEAF_REACH_PER_RAD + 1e-3);
        assert!(p.z.abs() <= LEAF_DEPTH + 1e-4);
    }
}

#[test]
fn petal_cohort_lies_on_the_radius_formula() {
    // Petals come first and draw (t, p) in order, so a twin generator
    // replays their parameters exactly.
    let n = 300;
    let rose = generate_rose(n, &mut StdRng::seed_from_u64(99));
    let mut twin = StdRng::seed_from_u64(99);
    for i in RoseCohorts::for_count(n).petals {
        let t = twin.gen::<f32>() * TAU;
        let p = twin.gen::<f32>() * PI;
        assert!(rose.positions[i].distance(petal_point(t, p)) < 1e-4, "petal {}", i);
    }
}

#[test]
fn scatter_targets_fill_the_cloud_volume() {
    let mut rng = StdRng::seed_from_u64(5);
    let targets = scatter_targets(500, &mut rng);
    assert_eq!(targets.len(), 500);
    let half = SCATTER_EXTENT / 2.0;
    for t in &targets {
        assert!(t.x >= -half.x && t.x < half.x);
        assert!(t.y >= -half.y && t.y < half.y);
        assert!(t.z >= -half.z && t.z < half.z);
    }
    // Far wider than the card itself
    let max_x = targets.iter().map(|t| t.x.abs()).fold(0.0, f32::max);
    assert!(max_x > CARD_WIDTH);
}
