pub mod constants;
pub mod form;
pub mod hover;
pub mod i18n;
pub mod lifecycle;
pub mod motion;
pub mod particles;
pub mod reveal;
pub mod style;
pub mod theme;

pub use constants::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
