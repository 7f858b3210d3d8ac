use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energetic,
    Calm,
    Vibrant,
    Bright,
    Dark,
    Balanced,
    Neutral,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
            Mood::Vibrant => "vibrant",
            Mood::Bright => "bright",
            Mood::Dark => "dark",
            Mood::Balanced => "balanced",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall animation character of a palette. Also a config knob for picking
/// fallback colors when extraction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Gentle,
    #[default]
    Medium,
    Energetic,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Gentle => "gentle",
            Intensity::Medium => "medium",
            Intensity::Energetic => "energetic",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First matching rule wins; the order matters.
pub fn classify_mood(colors: &[Rgb]) -> Mood {
    if colors.is_empty() {
        return Mood::Neutral;
    }
    let n = colors.len() as f32;
    let brightness = colors.iter().map(|c| c.luminance()).sum::<f32>() / n;
    let saturation = colors.iter().map(|c| c.saturation()).sum::<f32>() / n;

    if brightness > 180.0 && saturation > 0.5 {
        Mood::Energetic
    } else if brightness < 80.0 && saturation < 0.3 {
        Mood::Calm
    } else if saturation > 0.7 {
        Mood::Vibrant
    } else if brightness > 150.0 {
        Mood::Bright
    } else if brightness < 100.0 {
        Mood::Dark
    } else {
        Mood::Balanced
    }
}

pub fn classify_intensity(colors: &[Rgb]) -> Intensity {
    if colors.is_empty() {
        return Intensity::Medium;
    }
    let avg = colors.iter().map(|c| c.luminance()).sum::<f32>() / colors.len() as f32;
    if avg > 180.0 {
        Intensity::Energetic
    } else if avg < 100.0 {
        Intensity::Gentle
    } else {
        Intensity::Medium
    }
}

/// Mean pairwise closeness to an "ideal" channel distance of 150. Peaks at
/// 1.0 when every pair sits exactly there, falls off linearly to 0.0.
pub fn harmony(colors: &[Rgb]) -> f32 {
    if colors.len() < 2 {
        return 1.0;
    }
    let mut total = 0.0f32;
    let mut pairs = 0u32;
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            let d = colors[i].manhattan(colors[j]) as f32;
            total += (1.0 - (d - 150.0).abs() / 150.0).max(0.0);
            pairs += 1;
        }
    }
    total / pairs as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_is_neutral() {
        assert_eq!(classify_mood(&[]), Mood::Neutral);
    }

    #[test]
    fn test_bright_desaturated() {
        // Two whites: brightness 255, saturation 0.
        let mood = classify_mood(&[Rgb::new(255, 255, 255), Rgb::new(255, 255, 255)]);
        assert_eq!(mood, Mood::Bright);
    }

    #[test]
    fn test_energetic_needs_brightness_and_saturation() {
        // Bright yellows: luminance ~226, saturation 1.0.
        let mood = classify_mood(&[Rgb::new(255, 255, 0), Rgb::new(255, 230, 40)]);
        assert_eq!(mood, Mood::Energetic);
    }

    #[test]
    fn test_calm_dark_and_grey() {
        let mood = classify_mood(&[Rgb::new(50, 55, 60), Rgb::new(40, 40, 45)]);
        assert_eq!(mood, Mood::Calm);
    }

    #[test]
    fn test_vibrant_saturated_midtones() {
        // Saturation 1.0 but too dim for energetic.
        let mood = classify_mood(&[Rgb::new(200, 0, 0), Rgb::new(0, 0, 200)]);
        assert_eq!(mood, Mood::Vibrant);
    }

    #[test]
    fn test_dark_but_colorful() {
        // Brightness ~62, saturation ~0.55: dark without being calm.
        let mood = classify_mood(&[Rgb::new(90, 50, 110), Rgb::new(60, 45, 100)]);
        assert_eq!(mood, Mood::Dark);
    }

    #[test]
    fn test_balanced_fallthrough() {
        let mood = classify_mood(&[Rgb::new(140, 120, 110)]);
        assert_eq!(mood, Mood::Balanced);
    }

    #[test]
    fn test_intensity_bands() {
        assert_eq!(classify_intensity(&[]), Intensity::Medium);
        assert_eq!(classify_intensity(&[Rgb::new(250, 250, 250)]), Intensity::Energetic);
        assert_eq!(classify_intensity(&[Rgb::new(30, 30, 30)]), Intensity::Gentle);
        assert_eq!(classify_intensity(&[Rgb::new(130, 130, 130)]), Intensity::Medium);
    }

    #[test]
    fn test_harmony_short_palettes() {
        assert_eq!(harmony(&[]), 1.0);
        assert_eq!(harmony(&[Rgb::new(1, 2, 3)]), 1.0);
    }

    #[test]
    fn test_harmony_peaks_at_ideal_distance() {
        // Distance exactly 150.
        let h = harmony(&[Rgb::new(0, 0, 0), Rgb::new(50, 50, 50)]);
        assert!((h - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_harmony_clamps_to_zero() {
        // Distance 765, way past the falloff.
        let h = harmony(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_harmony_stays_in_unit_range() {
        let palette = [
            Rgb::new(10, 200, 30),
            Rgb::new(250, 12, 100),
            Rgb::new(107, 70, 193),
            Rgb::new(40, 40, 40),
        ];
        let h = harmony(&palette);
        assert!((0.0..=1.0).contains(&h));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Mood::Vibrant.to_string(), "vibrant");
        assert_eq!(Intensity::Gentle.to_string(), "gentle");
    }
}
