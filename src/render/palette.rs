use indexmap::IndexMap;

use crate::render::Color;

/// Ten-color qualitative palette (`category10`).
pub const CATEGORY10: [Color; 10] = [
    Color::rgb8(0x1f, 0x77, 0xb4),
    Color::rgb8(0xff, 0x7f, 0x0e),
    Color::rgb8(0x2c, 0xa0, 0x2c),
    Color::rgb8(0xd6, 0x27, 0x28),
    Color::rgb8(0x94, 0x67, 0xbd),
    Color::rgb8(0x8c, 0x56, 0x4b),
    Color::rgb8(0xe3, 0x77, 0xc2),
    Color::rgb8(0x7f, 0x7f, 0x7f),
    Color::rgb8(0xbc, 0xbd, 0x22),
    Color::rgb8(0x17, 0xbe, 0xcf),
];

/// Maps categories to palette colors in order of first use, cycling when
/// there are more categories than colors.
#[derive(Debug, Clone)]
pub struct OrdinalColorScale {
    palette: Vec<Color>,
    assigned: IndexMap<String, Color>,
}

impl Default for OrdinalColorScale {
    fn default() -> Self {
        Self::new(CATEGORY10.to_vec())
    }
}

impl OrdinalColorScale {
    /// An empty palette falls back to black for every category.
    #[must_use]
    pub fn new(palette: Vec<Color>) -> Self {
        Self {
            palette,
            assigned: IndexMap::new(),
        }
    }

    /// Builds a scale with `domain` pre-assigned in iteration order.
    #[must_use]
    pub fn with_domain<I, S>(palette: Vec<Color>, domain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scale = Self::new(palette);
        for key in domain {
            scale.color_for(key);
        }
        scale
    }

    /// Returns the color of `key`, assigning the next palette entry on first use.
    pub fn color_for(&mut self, key: impl Into<String>) -> Color {
        let next_index = self.assigned.len();
        let palette = &self.palette;
        *self.assigned.entry(key.into()).or_insert_with(|| {
            if palette.is_empty() {
                Color::BLACK
            } else {
                palette[next_index % palette.len()]
            }
        })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Color> {
        self.assigned.get(key).copied()
    }

    /// Categories in assignment order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.assigned.keys().map(String::as_str)
    }
}
