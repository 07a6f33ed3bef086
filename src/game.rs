//! Three-click heart mini-game and its timed UI cues.
//!
//! Pure state: the browser layer feeds it clicks and the current time and
//! applies the cues it hands back. Delays are stored as due times and
//! drained by `poll` from the frame loop.

use rand::Rng;
use smallvec::SmallVec;

pub const CLICKS_TO_WIN: u32 = 3;
pub const LOBBY_HIDE_DELAY_MS: f64 = 1000.0;
pub const HEART_SHOW_DELAY_MS: f64 = 4000.0;
pub const DIM_DELAY_MS: f64 = 100.0;
pub const MESSAGE_DELAY_MS: f64 = 3500.0;
pub const HEART_MARGIN_PX: f32 = 100.0;

/// Something the page should do at a given moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiCue {
    HideLobby,
    /// Show the heart at viewport pixel position (x, y).
    ShowHeart { x: f32, y: f32 },
    DimBackground,
    ShowMessage,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Click arrived while the game is not running.
    Ignored,
    /// Move the heart for the next round.
    Respawn { x: f32, y: f32 },
    /// Final click; the rose should bloom.
    Completed,
}

#[derive(Clone, Copy, Debug)]
enum Pending {
    HideLobby,
    ActivateHeart,
    DimBackground,
    ShowMessage,
}

#[derive(Clone, Debug, Default)]
pub struct HeartGame {
    started: bool,
    active: bool,
    clicks: u32,
    viewport: (f32, f32),
    schedule: Vec<(f64, Pending)>,
}

/// Random heart position keeping `HEART_MARGIN_PX` clear of every edge
/// where the viewport allows it.
pub fn heart_position<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> (f32, f32) {
    let span_x = (width - 2.0 * HEART_MARGIN_PX).max(0.0);
    let span_y = (height - 2.0 * HEART_MARGIN_PX).max(0.0);
    (
        HEART_MARGIN_PX.min(width * 0.5) + rng.gen::<f32>() * span_x,
        HEART_MARGIN_PX.min(height * 0.5) + rng.gen::<f32>() * span_y,
    )
}

impl HeartGame {
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            viewport: (viewport_w, viewport_h),
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    /// Begin the experience. Only the first call schedules anything.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.schedule.push((now_ms + LOBBY_HIDE_DELAY_MS, Pending::HideLobby));
        self.schedule.push((now_ms + HEART_SHOW_DELAY_MS, Pending::ActivateHeart));
        true
    }

    pub fn click<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> ClickOutcome {
        if !self.is_active() {
            return ClickOutcome::Ignored;
        }
        self.clicks += 1;
        log::info!("[game] click {}/{}", self.clicks(), CLICKS_TO_WIN);
        if !self.is_complete() {
            let (x, y) = heart_position(rng, self.viewport.0, self.viewport.1);
            return ClickOutcome::Respawn { x, y };
        }
        self.active = false;
        self.schedule.push((now_ms + DIM_DELAY_MS, Pending::DimBackground));
        self.schedule.push((now_ms + MESSAGE_DELAY_MS, Pending::ShowMessage));
        ClickOutcome::Completed
    }

    /// Remove and return every cue due at `now_ms`, earliest first.
    pub fn poll<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> SmallVec<[UiCue; 4]> {
        let mut due: SmallVec<[(f64, Pending); 4]> = SmallVec::new();
        self.schedule.retain(|entry| {
            if entry.0 <= now_ms {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter()
            .map(|(_, pending)| match pending {
                Pending::HideLobby => UiCue::HideLobby,
                Pending::ActivateHeart => {
                    self.active = true;
                    let (x, y) = heart_position(rng, self.viewport.0, self.viewport.1);
                    UiCue::ShowHeart { x, y }
                }
                Pending::DimBackground => UiCue::DimBackground,
                Pending::ShowMessage => UiCue::ShowMessage,
            })
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn is_complete(&self) -> bool {
        self.clicks >= CLICKS_TO_WIN
    }
}
