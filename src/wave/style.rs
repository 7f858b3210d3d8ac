use std::fmt;

use crate::config::WaveConfig;
use crate::wave::engine::WaveSet;

/// Shared keyframes block; the animation every styled target references.
pub const FLOW_KEYFRAMES: &str = "@keyframes wave-flow {\n  0% { background-position: 0% 50%; }\n  50% { background-position: 100% 50%; }\n  100% { background-position: 0% 50%; }\n}";

/// Anything that accepts CSS property writes: a DOM element handle, an
/// inline-style buffer, a template renderer.
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Ordered property collector; renders as the body of a `style=` attribute.
/// Setting a property twice updates it in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    props: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl StyleTarget for InlineStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.props.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            self.props.push((name.to_string(), value.to_string()));
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.props.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

/// Paints one target with the wave gradient and its flow timing.
pub fn apply_waves(waves: &WaveSet, config: &WaveConfig, target: &mut dyn StyleTarget) {
    target.set_property("background", &waves.css);
    target.set_property("background-size", "400% 400%");
    target.set_property("transition", &config.transition_css());
    target.set_property("animation", &config.animation_css());
}

/// Custom properties a host stylesheet can pick up: one `--wave-color-N`
/// per palette color (1-based), plus gradient, mood and intensity.
pub fn root_properties(waves: &WaveSet) -> Vec<(String, String)> {
    let mut props = Vec::with_capacity(waves.colors.len() + 3);
    for (i, color) in waves.colors.iter().enumerate() {
        props.push((format!("--wave-color-{}", i + 1), color.clone()));
    }
    props.push(("--wave-gradient".to_string(), waves.css.clone()));
    props.push(("--wave-mood".to_string(), waves.mood.to_string()));
    props.push(("--wave-intensity".to_string(), waves.intensity.to_string()));
    props
}

pub fn inject_root_properties(waves: &WaveSet, target: &mut dyn StyleTarget) {
    for (name, value) in root_properties(waves) {
        target.set_property(&name, &value);
    }
}
