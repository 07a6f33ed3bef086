//! The card choreography: CARD → OPENING → FLOATING → ROSE.
//!
//! [`CardScene`] owns the particle buffer and every writer of it (bend,
//! morph engine) plus the pointer tracker, and is driven by one `update` call
//! per frame. Time is always passed in by the caller in milliseconds, so the
//! scene never reads a clock of its own.

use super::bend::apply_bend;
use super::buffer::{Channel, ParticleBuffer};
use super::camera::Camera;
use super::constants::*;
use super::easing::Ease;
use super::geometry::{generate_card, generate_rose, scatter_targets};
use super::morph::{DelayMode, MorphEngine, MorphOptions};
use super::pointer::PointerTracker;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardState {
    #[default]
    Card,
    Opening,
    Floating,
    Rose,
}

/// Events that may move the choreography forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// "Open card" request from the UI.
    Open,
    /// The opening delay ran out.
    OpeningElapsed,
    /// The mini-game was completed.
    GameComplete,
}

impl CardState {
    /// Transition table. `None` means the trigger is not defined for this
    /// state and must be ignored.
    pub fn next(self, trigger: Trigger) -> Option<CardState> {
        match (self, trigger) {
            (CardState::Card, Trigger::Open) => Some(CardState::Opening),
            (CardState::Opening, Trigger::OpeningElapsed) => Some(CardState::Floating),
            (CardState::Floating, Trigger::GameComplete) => Some(CardState::Rose),
            _ => None,
        }
    }
}

/// Timing and easing for each transition.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoreographyParams {
    /// Delay between entering OPENING and the automatic switch to FLOATING.
    pub float_delay_ms: f64,
    pub disperse: MorphOptions,
    pub rose_positions: MorphOptions,
    pub rose_colors: MorphOptions,
}

impl Default for ChoreographyParams {
    fn default() -> Self {
        Self {
            float_delay_ms: FLOAT_DELAY_MS,
            disperse: MorphOptions::new(DISPERSE_DURATION_MS, Ease::Power2Out)
                .with_delay(DISPERSE_MAX_DELAY_MS, DelayMode::PerParticle),
            rose_positions: MorphOptions::new(ROSE_DURATION_MS, Ease::Power3InOut)
                .with_delay(ROSE_MAX_DELAY_MS, DelayMode::PerParticle),
            rose_colors: MorphOptions::new(ROSE_COLOR_DURATION_MS, Ease::Power1Out),
        }
    }
}

/// Values the renderer feeds into the point shader each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    /// Seconds since the scene was created.
    pub time_sec: f32,
    /// Smoothed pointer projected onto the card plane.
    pub mouse_world: Vec3,
}

pub struct CardScene<R = StdRng> {
    state: CardState,
    buffer: ParticleBuffer,
    morph: MorphEngine,
    pointer: PointerTracker,
    camera: Camera,
    params: ChoreographyParams,
    rng: R,
    epoch_ms: f64,
    opened_at_ms: Option<f64>,
    float_due_ms: Option<f64>,
    uniforms: FrameUniforms,
}

impl<R: Rng> CardScene<R> {
    /// Generate `particle_count` card particles and start in CARD at `now_ms`.
    pub fn new(
        particle_count: usize,
        camera: Camera,
        params: ChoreographyParams,
        mut rng: R,
        now_ms: f64,
    ) -> Self {
        let buffer = generate_card(particle_count, &mut rng);
        log::info!("[scene] {} card particles", buffer.len());
        let pointer = PointerTracker::default();
        Self {
            state: CardState::Card,
            morph: MorphEngine::new(buffer.len()),
            buffer,
            uniforms: FrameUniforms {
                time_sec: 0.0,
                mouse_world: pointer.world(),
            },
            pointer,
            camera,
            params,
            rng,
            epoch_ms: now_ms,
            opened_at_ms: None,
            float_due_ms: None,
        }
    }

    /// Fire `trigger`; returns whether the state changed. Undefined
    /// transitions are silently ignored.
    pub fn fire(&mut self, trigger: Trigger, now_ms: f64) -> bool {
        let Some(next) = self.state.next(trigger) else {
            log::debug!("[scene] ignoring {:?} in {:?}", trigger, self.state);
            return false;
        };
        log::info!("[scene] {:?} -> {:?} at {:.0}ms", self.state, next, now_ms - self.epoch_ms);
        self.state = next;
        self.enter(next, now_ms);
        true
    }

    /// CARD → OPENING.
    pub fn open_card(&mut self, now_ms: f64) -> bool {
        self.fire(Trigger::Open, now_ms)
    }

    /// FLOATING → ROSE.
    pub fn morph_to_rose(&mut self, now_ms: f64) -> bool {
        self.fire(Trigger::GameComplete, now_ms)
    }

    fn enter(&mut self, state: CardState, now_ms: f64) {
        match state {
            CardState::Card => {}
            CardState::Opening => {
                self.opened_at_ms = Some(now_ms);
                self.float_due_ms = Some(now_ms + self.params.float_delay_ms);
            }
            CardState::Floating => {
                self.float_due_ms = None;
                let targets = scatter_targets(self.buffer.len(), &mut self.rng);
                self.morph.morph_to(
                    Channel::Position,
                    &targets,
                    now_ms,
                    self.params.disperse,
                    &mut self.rng,
                );
            }
            CardState::Rose => {
                let rose = generate_rose(self.buffer.len(), &mut self.rng);
                self.morph.morph_to(
                    Channel::Position,
                    &rose.positions,
                    now_ms,
                    self.params.rose_positions,
                    &mut self.rng,
                );
                self.morph.morph_to(
                    Channel::Color,
                    &rose.colors,
                    now_ms,
                    self.params.rose_colors,
                    &mut self.rng,
                );
            }
        }
    }

    /// Advance one frame: time-triggered transitions, then the bend, then
    /// tweens, then the pointer/uniform feed.
    pub fn update(&mut self, now_ms: f64) -> FrameUniforms {
        if let Some(due) = self.float_due_ms {
            if now_ms >= due {
                self.fire(Trigger::OpeningElapsed, now_ms);
            }
        }

        if self.state == CardState::Opening {
            if let Some(opened) = self.opened_at_ms {
                apply_bend(&mut self.buffer, now_ms - opened);
            }
        }

        self.morph.advance(now_ms, &mut self.buffer);

        self.uniforms = FrameUniforms {
            time_sec: ((now_ms - self.epoch_ms) * 0.001) as f32,
            mouse_world: self.pointer.update(&self.camera),
        };
        self.uniforms
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    /// Mutable access for the renderer to clear dirty flags after upload.
    pub fn buffer_mut(&mut self) -> &mut ParticleBuffer {
        &mut self.buffer
    }

    pub fn morph(&self) -> &MorphEngine {
        &self.morph
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn params(&self) -> &ChoreographyParams {
        &self.params
    }

    /// Uniforms computed by the most recent `update`.
    pub fn uniforms(&self) -> FrameUniforms {
        self.uniforms
    }
}
