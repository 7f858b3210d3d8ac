//! Dominant-color extraction and animated CSS gradient waves.
//!
//! Feed [`WaveEngine`] an image source (file path, http(s) url or base64
//! data url) and get back a [`WaveSet`]: the dominant palette, a ready CSS
//! gradient, and mood/intensity/harmony descriptors. Palettes are memoized
//! per source; extraction failures degrade to a non-flowing fallback set
//! instead of erroring. [`ColorExtractor`] is the lower-level throwing path.

pub mod cache;
pub mod color;
pub mod config;
pub mod error;
pub mod extract;
pub mod source;
pub mod wave;

pub use cache::PaletteCache;
pub use color::Rgb;
pub use config::{FlowSpeed, GradientKind, WaveConfig};
pub use error::WaveError;
pub use extract::extractor::{ColorExtractor, ImageBackend, PixelDecoder};
pub use extract::filter::FALLBACK_WAVE_COLORS;
pub use extract::sampler::PixelFrame;
pub use wave::engine::{WaveEngine, WaveSet};
pub use wave::mood::{Intensity, Mood};
pub use wave::style::{apply_waves, InlineStyle, StyleTarget, FLOW_KEYFRAMES};
