// Host-side tests for the tween engine and easing curves.
// The main crate is wasm-only, so we mount the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/particles/mod.rs"]
mod particles;

use glam::Vec3;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn buffer_at(points: &[Vec3]) -> ParticleBuffer {
    let n = points.len();
    ParticleBuffer::from_rest(points.to_vec(), vec![Vec3::ONE; n], vec![1.0; n], vec![0.0; n])
}

fn run(engine: &mut MorphEngine, buf: &mut ParticleBuffer, from_ms: f64, to_ms: f64) {
    let mut t = from_ms;
    while t <= to_ms {
        engine.advance(t, buf);
        t += 16.0;
    }
    engine.advance(to_ms, buf);
}

#[test]
fn easing_curves_hit_both_ends_and_rise() {
    for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2Out, Ease::Power3InOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = ease.apply(i as f32 / 20.0);
            assert!(v >= prev, "{:?} not monotonic", ease);
            prev = v;
        }
        // Clamped outside [0, 1]
        assert_eq!(ease.apply(-1.0), 0.0);
        assert!((ease.apply(2.0) - 1.0).abs() < 1e-6);
    }
    assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!(Ease::Power2Out.apply(0.5) > Ease::Power1Out.apply(0.5));
    assert!(Ease::Power1Out.apply(0.5) > Ease::Linear.apply(0.5));
}

#[test]
fn tween_lands_exactly_on_target() {
    let mut buf = buffer_at(&[Vec3::ZERO, Vec3::X]);
    let mut engine = MorphEngine::new(buf.len());
    let mut rng = StdRng::seed_from_u64(1);
    let targets = [Vec3::new(10.0, -3.0, 7.0), Vec3::new(-4.0, 0.5, 0.25)];
    let opts = MorphOptions::new(1000.0, Ease::Power2Out);
    engine.morph_to(Channel::Position, &targets, 0.0, opts, &mut rng);
    assert_eq!(engine.in_flight(Channel::Position), 2);

    run(&mut engine, &mut buf, 0.0, 500.0);
    let mid = buf.positions()[0];
    assert!(mid.x > 0.0 && mid.x < 10.0);

    run(&mut engine, &mut buf, 500.0, 1000.0);
    assert_eq!(buf.positions(), &targets[..]);
    assert!(engine.is_idle());
}

#[test]
fn later_morph_replaces_in_flight_tween() {
    let mut buf = buffer_at(&[Vec3::ZERO]);
    let mut engine = MorphEngine::new(1);
    let mut rng = StdRng::seed_from_u64(2);
    let opts = MorphOptions::new(1000.0, Ease::Linear);
    engine.morph_to(Channel::Position, &[Vec3::new(100.0, 0.0, 0.0)], 0.0, opts, &mut rng);
    run(&mut engine, &mut buf, 0.0, 400.0);
    let at_switch = buf.positions()[0];
    assert!((at_switch.x - 40.0).abs() < 1e-3);

    engine.morph_to(Channel::Position, &[Vec3::new(0.0, 50.0, 0.0)], 400.0, opts, &mut rng);
    assert_eq!(engine.in_flight(Channel::Position), 1);
    run(&mut engine, &mut buf, 400.0, 1400.0);
    assert_eq!(buf.positions()[0], Vec3::new(0.0, 50.0, 0.0));
    assert!(engine.is_idle());
}

#[test]
fn delayed_tween_starts_from_value_at_delay_end() {
    let mut buf = buffer_at(&[Vec3::ZERO]);
    let mut engine = MorphEngine::new(1);
    let mut rng = StdRng::seed_from_u64(3);
    let opts = MorphOptions::new(100.0, Ease::Linear);
    // Scheduled to begin later than the current frame
    engine.morph_to(Channel::Position, &[Vec3::new(20.0, 0.0, 0.0)], 1000.0, opts, &mut rng);

    engine.advance(500.0, &mut buf);
    assert_eq!(buf.positions()[0], Vec3::ZERO);

    // Something else moves the particle before the tween begins
    buf.set(Channel::Position, 0, Vec3::new(10.0, 0.0, 0.0));
    engine.advance(1050.0, &mut buf);
    assert!((buf.positions()[0].x - 15.0).abs() < 1e-3);
}

#[test]
fn engine_clock_never_runs_backwards() {
    let mut buf = buffer_at(&[Vec3::ZERO]);
    let mut engine = MorphEngine::new(1);
    let mut rng = StdRng::seed_from_u64(4);
    let opts = MorphOptions::new(1000.0, Ease::Linear);
    engine.morph_to(Channel::Position, &[Vec3::new(10.0, 0.0, 0.0)], 0.0, opts, &mut rng);
    engine.advance(0.0, &mut buf);
    engine.advance(600.0, &mut buf);
    let x = buf.positions()[0].x;
    engine.advance(100.0, &mut buf);
    assert_eq!(buf.positions()[0].x, x);
}

#[test]
fn zero_duration_snaps_on_first_frame() {
    let mut buf = buffer_at(&[Vec3::ZERO, Vec3::ONE]);
    let mut engine = MorphEngine::new(2);
    let mut rng = StdRng::seed_from_u64(5);
    let targets = [Vec3::splat(3.0), Vec3::splat(-3.0)];
    engine.morph_to(
        Channel::Color,
        &targets,
        10.0,
        MorphOptions::new(0.0, Ease::Power1Out),
        &mut rng,
    );
    engine.advance(10.0, &mut buf);
    assert_eq!(buf.colors(), &targets[..]);
    assert!(engine.is_idle());
}

#[test]
fn delays_stay_within_bound_and_settle_in_time() {
    let n = 200;
    let mut buf = buffer_at(&vec![Vec3::ZERO; n]);
    let mut engine = MorphEngine::new(n);
    let mut rng = StdRng::seed_from_u64(6);
    let opts = MorphOptions::new(300.0, Ease::Power2Out).with_delay(400.0, DelayMode::PerParticle);
    let targets = vec![Vec3::Y; n];
    engine.morph_to(Channel::Position, &targets, 0.0, opts, &mut rng);

    // Some particles are still waiting shortly after scheduling
    engine.advance(16.0, &mut buf);
    assert!(buf.positions().iter().any(|p| *p == Vec3::ZERO));

    run(&mut engine, &mut buf, 16.0, opts.settle_ms());
    assert!(engine.is_idle());
    assert!(buf.positions().iter().all(|p| *p == Vec3::Y));
}

#[test]
fn cohort_delay_is_shared_within_each_run() {
    let n = 12;
    let mut buf = buffer_at(&vec![Vec3::ZERO; n]);
    let mut engine = MorphEngine::new(n);
    let mut rng = StdRng::seed_from_u64(7);
    let opts = MorphOptions::new(200.0, Ease::Linear).with_delay(1000.0, DelayMode::PerCohort(4));
    engine.morph_to(Channel::Position, &vec![Vec3::X; n], 0.0, opts, &mut rng);

    let mut t = 0.0;
    while t <= opts.settle_ms() {
        engine.advance(t, &mut buf);
        for cohort in buf.positions().chunks(4) {
            assert!(cohort.iter().all(|p| *p == cohort[0]));
        }
        t += 16.0;
    }
}

#[test]
fn extra_targets_are_ignored() {
    let mut buf = buffer_at(&[Vec3::ZERO]);
    let mut engine = MorphEngine::new(1);
    let mut rng = StdRng::seed_from_u64(8);
    engine.morph_to(
        Channel::Position,
        &[Vec3::X, Vec3::Y, Vec3::Z],
        0.0,
        MorphOptions::new(0.0, Ease::Linear),
        &mut rng,
    );
    engine.advance(0.0, &mut buf);
    assert_eq!(buf.positions(), &[Vec3::X][..]);
}

#[test]
fn writes_raise_dirty_flags() {
    let mut buf = buffer_at(&[Vec3::ZERO]);
    assert!(buf.take_dirty());
    assert!(!buf.take_dirty());

    let mut engine = MorphEngine::new(1);
    let mut rng = StdRng::seed_from_u64(9);
    engine.morph_to(Channel::Color, &[Vec3::X], 0.0, MorphOptions::new(100.0, Ease::Linear), &mut rng);
    engine.advance(50.0, &mut buf);
    assert!(buf.is_dirty(Channel::Color));
    assert!(!buf.is_dirty(Channel::Position));
}
