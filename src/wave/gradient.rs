use crate::color::Rgb;
use crate::config::GradientKind;
use crate::extract::filter::pad_colors;

/// Formats a CSS gradient over the given stops. Short palettes are padded
/// up to two stops; longer ones pass through untouched.
pub fn gradient_css(colors: &[Rgb], kind: GradientKind, direction: &str) -> String {
    let mut colors = colors.to_vec();
    pad_colors(&mut colors, 2);

    let stops = colors
        .iter()
        .map(|c| c.hex())
        .collect::<Vec<_>>()
        .join(", ");

    match kind {
        GradientKind::Linear => format!("linear-gradient({direction}, {stops})"),
        GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        GradientKind::Conic => format!("conic-gradient(from 0deg, {stops})"),
    }
}
