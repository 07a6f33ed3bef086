use glam::Vec3;

// Shared layout, colour and timing constants for the particle card.

// Particle budget
pub const NARROW_VIEWPORT_PX: f64 = 768.0; // viewports narrower than this get the small budget
pub const PARTICLES_NARROW: usize = 4000;
pub const PARTICLES_WIDE: usize = 7000;

// Card slab (world units)
pub const CARD_WIDTH: f32 = 60.0;
pub const CARD_HEIGHT: f32 = 80.0;
pub const CARD_DEPTH: f32 = 5.0;
pub const CARD_MIX_MAX: f32 = 0.3; // max blend from gold toward orange

// Per-particle attributes
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_SPAN: f32 = 2.0;

// Palette (0..1 channels of the authored hex colours)
pub const GOLD: Vec3 = Vec3::new(212.0 / 255.0, 175.0 / 255.0, 55.0 / 255.0); // #d4af37
pub const ORANGE: Vec3 = Vec3::new(1.0, 145.0 / 255.0, 30.0 / 255.0); // #ff911e
pub const ROSE_RED: Vec3 = Vec3::new(139.0 / 255.0, 0.0, 0.0); // #8b0000

// Rose model
pub const PETAL_RADIUS: f32 = 50.0;
pub const PETAL_LOBES: f32 = 8.0;
pub const PETAL_UNDULATION: f32 = 0.2;
pub const PETAL_LIFT: f32 = 30.0;
pub const STEM_HALF_WIDTH: f32 = 1.0;
pub const STEM_LENGTH_PER_RAD: f32 = 25.0;
pub const STEM_TOP_Y: f32 = -20.0;
pub const LEAF_REACH_PER_RAD: f32 = 10.0;
pub const LEAF_BASE_Y: f32 = -40.0;
pub const LEAF_BULGE: f32 = 10.0;
pub const LEAF_DEPTH: f32 = 5.0;

// Floating cloud extents (full widths)
pub const SCATTER_EXTENT: Vec3 = Vec3::new(200.0, 200.0, 100.0);

// Hinge bend
pub const BEND_RATE_PER_MS: f32 = 0.0015; // radians per millisecond
pub const BEND_BLEND: f32 = 0.1; // fraction of the gap closed per frame

// Choreography timing (milliseconds)
pub const FLOAT_DELAY_MS: f64 = 2500.0;
pub const DISPERSE_DURATION_MS: f64 = 2500.0;
pub const DISPERSE_MAX_DELAY_MS: f64 = 400.0;
pub const ROSE_DURATION_MS: f64 = 3000.0;
pub const ROSE_MAX_DELAY_MS: f64 = 500.0;
pub const ROSE_COLOR_DURATION_MS: f64 = 2000.0;

// Pointer
pub const POINTER_OFFSCREEN: f32 = -100.0; // initial NDC, far outside the viewport
pub const POINTER_SMOOTHING: f32 = 0.05;
pub const POINTER_UNPROJECT_DEPTH: f32 = 0.5;

// Camera
pub const CAMERA_Z: f32 = 120.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Watermark
pub const WATERMARK_LABEL: &str = "BANKWEST";
pub const WATERMARK_FONT: &str = "900 120px Cinzel";
pub const WATERMARK_RASTER_W: u32 = 1000;
pub const WATERMARK_RASTER_H: u32 = 200;
pub const WATERMARK_BASELINE_Y: f64 = 130.0;
pub const WATERMARK_CELL_PX: u32 = 8;
pub const WATERMARK_THRESHOLD: u8 = 128;
pub const WATERMARK_SCALE: f32 = 0.3;
pub const WATERMARK_DEPTH: f32 = -150.0;
