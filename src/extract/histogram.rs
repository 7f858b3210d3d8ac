use std::collections::HashMap;

use crate::color::Rgb;

/// Quantizes each channel down to a multiple of `precision` and packs the
/// result into one `0x00RRGGBB` key.
pub fn pack_bin(color: Rgb, precision: u8) -> u32 {
    let p = precision.max(1);
    let q = |v: u8| (v / p * p) as u32;
    (q(color.r) << 16) | (q(color.g) << 8) | q(color.b)
}

pub fn unpack_bin(key: u32) -> Rgb {
    Rgb::new(
        ((key >> 16) & 0xff) as u8,
        ((key >> 8) & 0xff) as u8,
        (key & 0xff) as u8,
    )
}

pub fn count_bins(pixels: &[Rgb], precision: u8) -> HashMap<u32, u32> {
    let mut bins = HashMap::new();
    for &px in pixels {
        *bins.entry(pack_bin(px, precision)).or_insert(0u32) += 1;
    }
    bins
}

/// Most frequent bins first. Equal counts resolve by ascending key so the
/// ranking does not depend on hash iteration order.
pub fn top_bins(bins: &HashMap<u32, u32>, max_colors: usize) -> Vec<Rgb> {
    let mut entries: Vec<(u32, u32)> = bins.iter().map(|(&k, &c)| (k, c)).collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(max_colors)
        .map(|(key, _)| unpack_bin(key))
        .collect()
}
