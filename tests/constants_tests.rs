// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/particles/mod.rs"]
mod particles;

use constants::*;
use particles::constants::*;
use particles::ChoreographyParams;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_budgets_and_card_box_are_sane() {
    assert!(PARTICLES_NARROW < PARTICLES_WIDE);
    assert!(NARROW_VIEWPORT_PX > 0.0);
    assert!(CARD_HEIGHT > CARD_WIDTH && CARD_WIDTH > CARD_DEPTH);
    assert!(CARD_MIX_MAX > 0.0 && CARD_MIX_MAX < 1.0);
    assert!(SIZE_MIN > 0.0 && SIZE_SPAN > 0.0);
    // The cloud is much larger than the card
    assert!(SCATTER_EXTENT.x > CARD_WIDTH * 2.0);
    assert!(SCATTER_EXTENT.y > CARD_HEIGHT * 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bend_reaches_half_turn_before_floating() {
    let full_turn_ms = std::f32::consts::PI / BEND_RATE_PER_MS;
    assert!((full_turn_ms as f64) < FLOAT_DELAY_MS);
    assert!(BEND_BLEND > 0.0 && BEND_BLEND <= 1.0);
}

#[test]
fn default_choreography_matches_constants() {
    let p = ChoreographyParams::default();
    assert_eq!(p.float_delay_ms, FLOAT_DELAY_MS);
    assert_eq!(p.disperse.duration_ms, DISPERSE_DURATION_MS);
    assert_eq!(p.disperse.max_delay_ms, DISPERSE_MAX_DELAY_MS);
    assert_eq!(p.rose_positions.duration_ms, ROSE_DURATION_MS);
    assert_eq!(p.rose_positions.max_delay_ms, ROSE_MAX_DELAY_MS);
    assert_eq!(p.rose_colors.duration_ms, ROSE_COLOR_DURATION_MS);
    assert_eq!(p.rose_colors.max_delay_ms, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_card() {
    let half_fov = (CAMERA_FOVY_DEG.to_radians() / 2.0).tan();
    let visible_half_height = CAMERA_Z * half_fov;
    assert!(visible_half_height > CARD_HEIGHT / 2.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_Z);
    // Watermark sits behind the card but in front of the far plane
    assert!(WATERMARK_DEPTH < 0.0 && CAMERA_Z - WATERMARK_DEPTH < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn watermark_raster_is_large_enough_for_label() {
    assert!(WATERMARK_BASELINE_Y < WATERMARK_RASTER_H as f64);
    assert!(WATERMARK_CELL_PX > 0 && WATERMARK_CELL_PX < WATERMARK_RASTER_H);
    assert!(!WATERMARK_LABEL.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bloom_presets_and_click_sound_are_in_range() {
    for preset in [BLOOM_CARD, BLOOM_ROSE] {
        let [strength, radius, threshold] = preset;
        assert!(strength > 0.0);
        assert!((0.0..=1.0).contains(&radius));
        assert!((0.0..=1.0).contains(&threshold));
    }
    // The rose glows harder and lets more through
    assert!(BLOOM_ROSE[0] > BLOOM_CARD[0]);
    assert!(BLOOM_ROSE[2] < BLOOM_CARD[2]);
    assert!(BLOOM_TRANSITION_MS > 0.0);

    assert!(DROP_FREQ_START_HZ > DROP_FREQ_END_HZ);
    // Exponential ramps need strictly positive endpoints
    assert!(DROP_GAIN_END > 0.0 && DROP_GAIN_START > DROP_GAIN_END);
    assert!(DROP_SWEEP_SEC < DROP_DURATION_SEC);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}
