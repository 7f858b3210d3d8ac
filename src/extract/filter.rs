use crate::color::Rgb;

// Candidates outside this brightness band read as background or glare.
const LUMA_MIN: f32 = 40.0;
const LUMA_MAX: f32 = 200.0;

/// Pad colors, cycled purple then pink whenever a palette comes up short.
pub const FALLBACK_WAVE_COLORS: [Rgb; 2] = [Rgb::new(0x6b, 0x46, 0xc1), Rgb::new(0xec, 0x48, 0x99)];

/// Picks `count` colors from the ranked candidates: mid-luminance only,
/// each at least `min_distance` from every color already accepted.
/// Always returns exactly `count` colors, padding when the image does not
/// yield enough.
pub fn filter_colors(candidates: &[Rgb], count: usize, min_distance: u32) -> Vec<Rgb> {
    let mut accepted: Vec<Rgb> = Vec::with_capacity(count);
    for &candidate in candidates {
        if accepted.len() >= count {
            break;
        }
        let luma = candidate.luminance();
        if luma < LUMA_MIN || luma > LUMA_MAX {
            continue;
        }
        if accepted.iter().any(|&a| candidate.manhattan(a) < min_distance) {
            continue;
        }
        accepted.push(candidate);
    }

    pad_colors(&mut accepted, count);
    accepted.truncate(count);
    accepted
}

/// Appends fallback colors until `colors` holds at least `min_len` entries.
pub fn pad_colors(colors: &mut Vec<Rgb>, min_len: usize) {
    let mut pad = 0usize;
    while colors.len() < min_len {
        colors.push(FALLBACK_WAVE_COLORS[pad % FALLBACK_WAVE_COLORS.len()]);
        pad += 1;
    }
}
