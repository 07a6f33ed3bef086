pub mod bend;
pub mod buffer;
pub mod camera;
pub mod constants;
pub mod easing;
pub mod geometry;
pub mod machine;
pub mod morph;
pub mod pointer;
pub mod watermark;

pub use buffer::{Channel, ParticleBuffer};
pub use camera::{Camera, Viewport};
pub use easing::Ease;
pub use geometry::{generate_card, generate_rose, particle_count_for_width, RoseCohorts, RoseTargets};
pub use machine::{CardScene, CardState, ChoreographyParams, FrameUniforms, Trigger};
pub use morph::{DelayMode, MorphEngine, MorphOptions};
pub use pointer::PointerTracker;
pub use watermark::{rasterize_text, Raster, TextRaster, WatermarkPoints};

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
