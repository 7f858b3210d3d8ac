use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::WaveError;
use crate::wave::mood::Intensity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub fn from_str_or_linear(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "radial" => Self::Radial,
            "conic" => Self::Conic,
            _ => Self::Linear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl FlowSpeed {
    pub fn from_str_or_medium(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "slow" => Self::Slow,
            "fast" => Self::Fast,
            _ => Self::Medium,
        }
    }

    pub fn transition(self) -> &'static str {
        match self {
            FlowSpeed::Slow => "all 3s ease-out",
            FlowSpeed::Medium => "all 1.5s ease-out",
            FlowSpeed::Fast => "all 0.75s ease-out",
        }
    }

    pub fn animation_secs(self) -> u32 {
        match self {
            FlowSpeed::Slow => 12,
            FlowSpeed::Medium => 8,
            FlowSpeed::Fast => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Side length of the square canvas images are stretched onto.
    pub canvas_size: u32,
    /// Byte step through the RGBA buffer while sampling (32 = every 8th pixel).
    pub sample_stride: usize,
    /// Quantization step per channel when binning sampled colors.
    pub precision: u8,
    /// How many top bins become filter candidates.
    pub max_colors: usize,
    /// How many wave colors a palette ends up with.
    pub color_count: usize,
    /// Minimum channel-wise distance between accepted colors.
    pub min_distance: u32,
    pub direction: String,
    pub gradient: GradientKind,
    pub flow_speed: FlowSpeed,
    /// Overrides the transition derived from `flow_speed` when set.
    pub transition: Option<String>,
    pub intensity: Intensity,
    /// Overrides the fallback pair derived from `intensity` when set.
    pub fallback_colors: Option<[Rgb; 2]>,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            canvas_size: 150,
            sample_stride: 32,
            precision: 25,
            max_colors: 8,
            color_count: 2,
            min_distance: 80,
            direction: "to bottom right".to_string(),
            gradient: GradientKind::default(),
            flow_speed: FlowSpeed::default(),
            transition: None,
            intensity: Intensity::default(),
            fallback_colors: None,
        }
    }
}

impl WaveConfig {
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, WaveError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), WaveError> {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let raw = toml::to_string_pretty(self).unwrap_or_default();
        fs::write(path, raw)?;
        Ok(())
    }

    /// Copy with out-of-range knobs pulled back to workable values.
    pub fn normalized(&self) -> Self {
        let mut c = self.clone();
        c.color_count = c.color_count.max(1);
        c.max_colors = c.max_colors.max(c.color_count);
        c.canvas_size = c.canvas_size.max(8);
        c.sample_stride = c.sample_stride.max(4);
        c.precision = c.precision.clamp(1, 128);
        c
    }

    pub fn transition_css(&self) -> String {
        self.transition
            .clone()
            .unwrap_or_else(|| self.flow_speed.transition().to_string())
    }

    pub fn animation_css(&self) -> String {
        format!("wave-flow {}s ease infinite", self.flow_speed.animation_secs())
    }

    pub fn fallback_pair(&self) -> [Rgb; 2] {
        self.fallback_colors
            .unwrap_or_else(|| intensity_fallbacks(self.intensity))
    }
}

fn intensity_fallbacks(intensity: Intensity) -> [Rgb; 2] {
    match intensity {
        Intensity::Gentle => [Rgb::new(0xa7, 0x8b, 0xfa), Rgb::new(0xf9, 0xa8, 0xd4)],
        Intensity::Medium => [Rgb::new(0x6b, 0x46, 0xc1), Rgb::new(0xec, 0x48, 0x99)],
        Intensity::Energetic => [Rgb::new(0x7c, 0x3a, 0xed), Rgb::new(0xf4, 0x3f, 0x5e)],
    }
}
