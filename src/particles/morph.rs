//! Per-particle value tweens resolved once per frame.
//!
//! Every particle owns one tween slot per mutable channel. Scheduling a morph
//! overwrites the slots it targets, so a newer call on an in-flight index
//! replaces the older tween. A tween captures its start value when its delay
//! elapses, then eases toward the end value and frees its slot on arrival.

use super::buffer::{Channel, ParticleBuffer};
use super::easing::Ease;
use glam::Vec3;
use rand::Rng;

/// How start delays are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayMode {
    /// A fresh delay for every particle.
    PerParticle,
    /// One delay shared by each run of this many consecutive indices.
    PerCohort(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphOptions {
    pub duration_ms: f64,
    pub ease: Ease,
    /// Upper bound of the random start delay; 0 starts everything at once.
    pub max_delay_ms: f64,
    pub delay_mode: DelayMode,
}

impl MorphOptions {
    pub fn new(duration_ms: f64, ease: Ease) -> Self {
        Self {
            duration_ms,
            ease,
            max_delay_ms: 0.0,
            delay_mode: DelayMode::PerParticle,
        }
    }

    pub fn with_delay(mut self, max_delay_ms: f64, delay_mode: DelayMode) -> Self {
        self.max_delay_ms = max_delay_ms.max(0.0);
        self.delay_mode = delay_mode;
        self
    }

    /// Time after scheduling by which every tween is guaranteed done.
    pub fn settle_ms(&self) -> f64 {
        self.duration_ms.max(0.0) + self.max_delay_ms
    }
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: Option<Vec3>,
    to: Vec3,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl Tween {
    #[inline]
    fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Debug, Default)]
pub struct MorphEngine {
    positions: Vec<Option<Tween>>,
    colors: Vec<Option<Tween>>,
    clock_ms: f64,
}

impl MorphEngine {
    pub fn new(particle_count: usize) -> Self {
        Self {
            positions: vec![None; particle_count],
            colors: vec![None; particle_count],
            clock_ms: f64::NEG_INFINITY,
        }
    }

    fn slots(&self, channel: Channel) -> &[Option<Tween>] {
        match channel {
            Channel::Position => &self.positions,
            Channel::Color => &self.colors,
        }
    }

    fn slots_mut(&mut self, channel: Channel) -> &mut [Option<Tween>] {
        match channel {
            Channel::Position => &mut self.positions,
            Channel::Color => &mut self.colors,
        }
    }

    /// Schedule a tween for every index covered by `targets`, starting at
    /// `now_ms` plus each particle's random delay. Extra targets beyond the
    /// particle count are ignored.
    pub fn morph_to<R: Rng + ?Sized>(
        &mut self,
        channel: Channel,
        targets: &[Vec3],
        now_ms: f64,
        options: MorphOptions,
        rng: &mut R,
    ) {
        let max_delay = options.max_delay_ms.max(0.0);
        let draw = |rng: &mut R| {
            if max_delay > 0.0 {
                rng.gen::<f64>() * max_delay
            } else {
                0.0
            }
        };
        let mut cohort_delay = 0.0;
        let slots = self.slots_mut(channel);
        let count = targets.len().min(slots.len());
        for (i, (slot, to)) in slots.iter_mut().zip(targets).enumerate() {
            let delay = match options.delay_mode {
                DelayMode::PerParticle => draw(rng),
                DelayMode::PerCohort(size) => {
                    if i % size.max(1) == 0 {
                        cohort_delay = draw(rng);
                    }
                    cohort_delay
                }
            };
            *slot = Some(Tween {
                from: None,
                to: *to,
                start_ms: now_ms + delay,
                duration_ms: options.duration_ms,
                ease: options.ease,
            });
        }
        log::debug!(
            "[morph] {:?} x{} over {:.0}ms (+<= {:.0}ms delay, {:?})",
            channel,
            count,
            options.duration_ms,
            max_delay,
            options.ease
        );
    }

    /// Step every in-flight tween to `now_ms`, writing values into `buffer`.
    /// Time never runs backwards for the engine: an earlier `now_ms` than a
    /// previous call is treated as the previous time.
    pub fn advance(&mut self, now_ms: f64, buffer: &mut ParticleBuffer) {
        self.clock_ms = self.clock_ms.max(now_ms);
        let now = self.clock_ms;
        for channel in [Channel::Position, Channel::Color] {
            let n = buffer.len().min(self.slots(channel).len());
            for i in 0..n {
                let Some(tween) = self.slots_mut(channel)[i].as_mut() else {
                    continue;
                };
                if now < tween.start_ms {
                    continue;
                }
                let from = *tween.from.get_or_insert(buffer.channel(channel)[i]);
                let p = tween.progress(now);
                let value = from.lerp(tween.to, tween.ease.apply(p));
                let done = p >= 1.0;
                buffer.set(channel, i, if done { tween.to } else { value });
                if done {
                    self.slots_mut(channel)[i] = None;
                }
            }
        }
    }

    /// Number of tweens scheduled or running on `channel`.
    pub fn in_flight(&self, channel: Channel) -> usize {
        self.slots(channel).iter().filter(|s| s.is_some()).count()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight(Channel::Position) == 0 && self.in_flight(Channel::Color) == 0
    }
}
