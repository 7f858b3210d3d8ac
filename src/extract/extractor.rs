use image::imageops;

use crate::color::Rgb;
use crate::config::WaveConfig;
use crate::error::WaveError;

use super::filter::filter_colors;
use super::histogram::{count_bins, top_bins};
use super::sampler::{sample_pixels, PixelFrame};

/// Turns encoded image bytes into a fixed-size RGBA frame. Injectable so
/// the pipeline runs in tests without touching a real codec.
pub trait PixelDecoder {
    fn decode(&self, bytes: &[u8], canvas_size: u32) -> Result<PixelFrame, WaveError>;
}

/// Default decoder on the `image` crate. Stretches onto a square canvas;
/// sampling cares about color mass, not geometry.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageBackend;

impl PixelDecoder for ImageBackend {
    fn decode(&self, bytes: &[u8], canvas_size: u32) -> Result<PixelFrame, WaveError> {
        let img = image::load_from_memory(bytes)?;
        let side = canvas_size.max(8);
        let rgba = imageops::resize(&img.to_rgba8(), side, side, imageops::FilterType::Triangle);
        Ok(PixelFrame::new(side, side, rgba.into_raw()))
    }
}

pub struct ColorExtractor {
    config: WaveConfig,
    decoder: Box<dyn PixelDecoder>,
}

impl ColorExtractor {
    pub fn new(config: WaveConfig) -> Self {
        Self::with_decoder(config, Box::new(ImageBackend))
    }

    pub fn with_decoder(config: WaveConfig, decoder: Box<dyn PixelDecoder>) -> Self {
        Self {
            config: config.normalized(),
            decoder,
        }
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Full pipeline over encoded bytes: decode, sample, bin, rank, filter.
    /// Returns exactly `count` colors (padded when the image is too uniform).
    pub fn extract(&self, bytes: &[u8], count: usize) -> Result<Vec<Rgb>, WaveError> {
        let count = count.max(1);
        let frame = self.decoder.decode(bytes, self.config.canvas_size)?;
        let pixels = sample_pixels(&frame, self.config.sample_stride);
        let bins = count_bins(&pixels, self.config.precision);
        let candidates = top_bins(&bins, self.config.max_colors);
        log::debug!(
            "sampled {} pixels into {} bins, {} candidates",
            pixels.len(),
            bins.len(),
            candidates.len()
        );
        Ok(filter_colors(&candidates, count, self.config.min_distance))
    }
}
