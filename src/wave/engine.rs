use serde::Serialize;

use crate::cache::PaletteCache;
use crate::color::Rgb;
use crate::config::WaveConfig;
use crate::error::WaveError;
use crate::extract::extractor::{ColorExtractor, PixelDecoder};
use crate::source::load_source;
use crate::wave::gradient::gradient_css;
use crate::wave::mood::{classify_intensity, classify_mood, harmony, Intensity, Mood};
use crate::wave::style::{apply_waves, StyleTarget};

/// Everything a host needs to paint one wave background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveSet {
    /// Palette as hex strings, same order as `rgb`.
    pub colors: Vec<String>,
    /// Ready-to-use CSS gradient over the palette.
    pub css: String,
    pub rgb: Vec<Rgb>,
    pub intensity: Intensity,
    pub harmony: f32,
    pub mood: Mood,
    /// False when extraction failed and the palette is the fallback pair.
    pub is_flowing: bool,
    pub error: Option<String>,
}

/// Front door: resolves sources, extracts palettes, memoizes them and
/// composes the CSS. Extraction failures come back as a non-flowing
/// fallback `WaveSet`, never as an error.
pub struct WaveEngine {
    extractor: ColorExtractor,
    cache: PaletteCache,
}

impl WaveEngine {
    pub fn new(config: WaveConfig) -> Self {
        Self {
            extractor: ColorExtractor::new(config),
            cache: PaletteCache::new(),
        }
    }

    pub fn with_decoder(config: WaveConfig, decoder: Box<dyn PixelDecoder>) -> Self {
        Self {
            extractor: ColorExtractor::with_decoder(config, decoder),
            cache: PaletteCache::new(),
        }
    }

    pub fn config(&self) -> &WaveConfig {
        self.extractor.config()
    }

    /// Throwing path: resolve the source and run the extraction pipeline.
    pub fn extract_colors(&self, source: &str, count: usize) -> Result<Vec<Rgb>, WaveError> {
        let bytes = load_source(source)?;
        self.extractor.extract(&bytes, count)
    }

    pub fn create_waves(&mut self, source: &str) -> WaveSet {
        if let Some(hexes) = self.cache.get(source) {
            let rgb: Vec<Rgb> = hexes.iter().filter_map(|h| Rgb::parse_hex(h).ok()).collect();
            log::debug!("palette cache hit for {source}");
            return self.flowing_set(rgb);
        }

        match self.extract_colors(source, self.config().color_count) {
            Ok(rgb) => {
                let hexes: Vec<String> = rgb.iter().map(|c| c.hex()).collect();
                self.cache.put(source.to_string(), hexes);
                self.flowing_set(rgb)
            }
            Err(e) => {
                log::warn!("wave extraction failed for {source}: {e}");
                self.fallback_set(e.to_string())
            }
        }
    }

    /// `create_waves` plus styling. The target gets the gradient either
    /// way; a fallback set still paints.
    pub fn create_waves_on(&mut self, source: &str, target: &mut dyn StyleTarget) -> WaveSet {
        let waves = self.create_waves(source);
        self.apply(&waves, target);
        waves
    }

    pub fn apply(&self, waves: &WaveSet, target: &mut dyn StyleTarget) {
        apply_waves(waves, self.config(), target);
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, source: &str) -> bool {
        self.cache.contains(source)
    }

    pub fn cached_sources(&self) -> Vec<String> {
        self.cache.sources()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn flowing_set(&self, rgb: Vec<Rgb>) -> WaveSet {
        self.build_set(rgb, true, None)
    }

    fn fallback_set(&self, error: String) -> WaveSet {
        let rgb = self.config().fallback_pair().to_vec();
        self.build_set(rgb, false, Some(error))
    }

    fn build_set(&self, rgb: Vec<Rgb>, is_flowing: bool, error: Option<String>) -> WaveSet {
        let config = self.config();
        let css = gradient_css(&rgb, config.gradient, &config.direction);
        WaveSet {
            colors: rgb.iter().map(|c| c.hex()).collect(),
            css,
            intensity: classify_intensity(&rgb),
            harmony: harmony(&rgb),
            mood: classify_mood(&rgb),
            is_flowing,
            error,
            rgb,
        }
    }
}

impl Default for WaveEngine {
    fn default() -> Self {
        Self::new(WaveConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::sampler::PixelFrame;
    use crate::wave::style::InlineStyle;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingDecoder {
        frame: PixelFrame,
        calls: Rc<Cell<usize>>,
    }

    impl PixelDecoder for CountingDecoder {
        fn decode(&self, _bytes: &[u8], _canvas_size: u32) -> Result<PixelFrame, WaveError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.frame.clone())
        }
    }

    struct BrokenDecoder;

    impl PixelDecoder for BrokenDecoder {
        fn decode(&self, _bytes: &[u8], _canvas_size: u32) -> Result<PixelFrame, WaveError> {
            Err(WaveError::UnsupportedSource("no decoder in this build".to_string()))
        }
    }

    fn two_tone_frame() -> PixelFrame {
        let mut data = Vec::new();
        for _ in 0..32 {
            data.extend_from_slice(&[150, 40, 40, 255]);
        }
        for _ in 0..32 {
            data.extend_from_slice(&[40, 60, 150, 255]);
        }
        PixelFrame::new(64, 1, data)
    }

    // The fake decoders never look at the bytes; any loadable source works.
    const DATA_SOURCE: &str = "data:image/png;base64,aW1hZ2U=";

    fn counting_engine() -> (WaveEngine, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let decoder = CountingDecoder {
            frame: two_tone_frame(),
            calls: Rc::clone(&calls),
        };
        let config = WaveConfig {
            sample_stride: 4,
            ..Default::default()
        };
        (WaveEngine::with_decoder(config, Box::new(decoder)), calls)
    }

    #[test]
    fn test_create_waves_flowing() {
        let (mut engine, _calls) = counting_engine();
        let waves = engine.create_waves(DATA_SOURCE);

        assert!(waves.is_flowing);
        assert_eq!(waves.error, None);
        assert_eq!(waves.colors.len(), 2);
        assert_eq!(waves.rgb.len(), 2);
        assert!(waves.rgb.contains(&Rgb::new(150, 25, 25)));
        assert!(waves.rgb.contains(&Rgb::new(25, 50, 150)));
        assert!(waves.css.starts_with("linear-gradient(to bottom right, "));
        assert_eq!(waves.colors[0], waves.rgb[0].hex());
        assert_eq!(waves.mood, Mood::Vibrant);
        assert_eq!(waves.intensity, Intensity::Gentle);
        assert!(engine.is_cached(DATA_SOURCE));
        assert_eq!(engine.cache_size(), 1);
    }

    #[test]
    fn test_cache_hit_skips_decode() {
        let (mut engine, calls) = counting_engine();
        let first = engine.create_waves(DATA_SOURCE);
        let second = engine.create_waves(DATA_SOURCE);
        assert_eq!(calls.get(), 1);
        assert_eq!(first.colors, second.colors);
        assert_eq!(first.css, second.css);
        assert!(second.is_flowing);

        engine.clear_cache();
        assert_eq!(engine.cache_size(), 0);
        engine.create_waves(DATA_SOURCE);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_load_failure_falls_back() {
        let (mut engine, calls) = counting_engine();
        let waves = engine.create_waves("/no/such/wave/source.png");

        assert!(!waves.is_flowing);
        assert!(waves.error.is_some());
        assert_eq!(calls.get(), 0);
        assert_eq!(waves.colors, vec!["#6b46c1".to_string(), "#ec4899".to_string()]);
        assert!(waves.css.starts_with("linear-gradient("));
        assert_eq!(engine.cache_size(), 0);
    }

    #[test]
    fn test_decode_failure_not_cached() {
        let mut engine = WaveEngine::with_decoder(WaveConfig::default(), Box::new(BrokenDecoder));
        let waves = engine.create_waves(DATA_SOURCE);
        assert!(!waves.is_flowing);
        assert!(waves.error.as_deref().unwrap().contains("unsupported image source"));
        assert!(!engine.is_cached(DATA_SOURCE));
    }

    #[test]
    fn test_custom_fallback_pair() {
        let config = WaveConfig {
            fallback_colors: Some([Rgb::new(0x10, 0x10, 0x10), Rgb::new(0xdd, 0xee, 0xff)]),
            ..Default::default()
        };
        let mut engine = WaveEngine::with_decoder(config, Box::new(BrokenDecoder));
        let waves = engine.create_waves(DATA_SOURCE);
        assert_eq!(waves.colors, vec!["#101010".to_string(), "#ddeeff".to_string()]);
    }

    #[test]
    fn test_apply_sets_flow_properties() {
        let (mut engine, _calls) = counting_engine();
        let mut style = InlineStyle::new();
        let waves = engine.create_waves_on(DATA_SOURCE, &mut style);

        assert_eq!(style.get("background"), Some(waves.css.as_str()));
        assert_eq!(style.get("background-size"), Some("400% 400%"));
        assert_eq!(style.get("transition"), Some("all 1.5s ease-out"));
        assert_eq!(style.get("animation"), Some("wave-flow 8s ease infinite"));
    }

    #[test]
    fn test_fallback_still_styles_target() {
        let mut engine = WaveEngine::with_decoder(WaveConfig::default(), Box::new(BrokenDecoder));
        let mut style = InlineStyle::new();
        let waves = engine.create_waves_on(DATA_SOURCE, &mut style);

        assert!(!waves.is_flowing);
        assert_eq!(style.get("background"), Some(waves.css.as_str()));
        assert_eq!(style.get("background-size"), Some("400% 400%"));
    }

    #[test]
    fn test_extract_colors_propagates_errors() {
        let (engine, _calls) = counting_engine();
        let err = engine.extract_colors("/no/such/wave/source.png", 2).unwrap_err();
        assert!(matches!(err, WaveError::Io(_)));
    }

    #[test]
    fn test_cached_sources_listed() {
        let (mut engine, _calls) = counting_engine();
        engine.create_waves(DATA_SOURCE);
        assert_eq!(engine.cached_sources(), vec![DATA_SOURCE.to_string()]);
    }
}
