//! Page wiring, post-processing and audio tuning constants for the browser
//! front-end.
//!
//! The animation core keeps its own numbers in `particles::constants`; these
//! cover everything around it.

// Element ids looked up in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const START_BUTTON_ID: &str = "start-btn";
pub const LOBBY_ID: &str = "lobby-card";
pub const HEART_ID: &str = "game-heart";
pub const MESSAGE_ID: &str = "message-overlay";
pub const MUSIC_ID: &str = "bgMusic";

// Lobby / dim layer CSS transitions
pub const DIM_OPACITY: &str = "0.8";
pub const DIM_TRANSITION: &str = "opacity 3s ease";

// Bloom presets (strength, radius, threshold)
pub const BLOOM_CARD: [f32; 3] = [1.5, 0.4, 0.85];
pub const BLOOM_ROSE: [f32; 3] = [2.5, 0.6, 0.1];
pub const BLOOM_TRANSITION_MS: f64 = 2000.0;
pub const TONE_EXPOSURE: f32 = 1.0;

// Scene clear colour (HDR target before bloom)
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.0];

// Watermark dots
pub const WATERMARK_POINT_SIZE: f32 = 1.5;
pub const WATERMARK_OPACITY: f32 = 0.1;
pub const WATERMARK_RGB: [f32; 3] = [1.0, 145.0 / 255.0, 30.0 / 255.0]; // #ff911e

// Maximum device pixel ratio honoured for the backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Water-drop click sound
pub const DROP_FREQ_START_HZ: f32 = 800.0;
pub const DROP_FREQ_END_HZ: f32 = 100.0;
pub const DROP_SWEEP_SEC: f64 = 0.1;
pub const DROP_GAIN_START: f32 = 0.3;
pub const DROP_GAIN_END: f32 = 0.01;
pub const DROP_DURATION_SEC: f64 = 0.5;
