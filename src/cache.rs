use std::collections::HashMap;

/// Palette memo keyed by the source string. Entries never expire;
/// a repeated put overwrites.
#[derive(Debug, Default)]
pub struct PaletteCache {
    map: HashMap<String, Vec<String>>,
}

impl PaletteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: &str) -> Option<&[String]> {
        self.map.get(source).map(|v| v.as_slice())
    }

    pub fn contains(&self, source: &str) -> bool {
        self.map.contains_key(source)
    }

    pub fn put(&mut self, source: String, colors: Vec<String>) {
        self.map.insert(source, colors);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Cached source strings, sorted so listings are stable.
    pub fn sources(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.map.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
