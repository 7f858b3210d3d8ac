use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WaveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceptual brightness in 0.0..=255.0 (ITU-R BT.601 weights).
    pub fn luminance(self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Rough saturation `(max - min) / max`, 0.0 for black.
    pub fn saturation(self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        if max == 0 {
            return 0.0;
        }
        let min = self.r.min(self.g).min(self.b);
        (max - min) as f32 / max as f32
    }

    /// Channel-wise absolute distance, 0..=765.
    pub fn manhattan(self, other: Rgb) -> u32 {
        let dr = (self.r as i32 - other.r as i32).unsigned_abs();
        let dg = (self.g as i32 - other.g as i32).unsigned_abs();
        let db = (self.b as i32 - other.b as i32).unsigned_abs();
        dr + dg + db
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Accepts `#rrggbb`, `rrggbb` and the `#rgb` shorthand.
    pub fn parse_hex(s: &str) -> Result<Self, WaveError> {
        let raw = s.trim().trim_start_matches('#');
        let invalid = || WaveError::InvalidHex(s.to_string());

        // Byte-indexed below; multibyte input must bail, not panic.
        if !raw.is_ascii() {
            return Err(invalid());
        }

        let expanded;
        let digits = match raw.len() {
            6 => raw,
            3 => {
                let mut wide = String::with_capacity(6);
                for c in raw.chars() {
                    wide.push(c);
                    wide.push(c);
                }
                expanded = wide;
                expanded.as_str()
            }
            _ => return Err(invalid()),
        };

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Config files and cached palettes carry colors as hex strings.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::parse_hex(&s).map_err(de::Error::custom)
    }
}
