//! Color palettes resource.
//!
//! The accent palette comes from the greeting (rockets are painted with it).
//! The vibrant palette extends the accent palette with a fixed set of bright
//! colors and is used for burst fragments and butterflies. Duplicates are
//! dropped, keeping the first occurrence, so an accent color that also
//! appears in the fixed set is not picked twice as often.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

use crate::resources::canvas::Color;

/// Default accent colors: pink, gold, mint.
pub const DEFAULT_ACCENT: [Color; 3] = [
    Color::rgb(0xFF, 0x7A, 0xB6),
    Color::rgb(0xFF, 0xD3, 0x6E),
    Color::rgb(0x7A, 0xE7, 0xC7),
];

const VIBRANT_EXTRAS: [Color; 7] = [
    Color::rgb(0xFF, 0x3B, 0x3B),
    Color::rgb(0xFF, 0xD9, 0x3B),
    Color::rgb(0x3B, 0x82, 0xF6),
    Color::rgb(0x22, 0xD3, 0xEE),
    Color::rgb(0xA7, 0x8B, 0xFA),
    Color::rgb(0x34, 0xD3, 0x99),
    Color::rgb(0xFB, 0x71, 0x85),
];

/// Gold used for half of the burst sparks.
pub const SPARK_GOLD: Color = Color::rgb(0xFF, 0xD9, 0x3B);
pub const BIRD_GREY: Color = Color::rgb(0xE5, 0xE7, 0xEB);
pub const FIREFLY_YELLOW: Color = Color::rgb(0xFD, 0xE6, 0x8A);
pub const BUTTERFLY_BODY: Color = Color::rgb(0x11, 0x18, 0x27);

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Palette {
    accent: Vec<Color>,
    vibrant: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(&DEFAULT_ACCENT)
    }
}

impl Palette {
    /// Build both palettes from the accent colors.
    ///
    /// An empty accent list falls back to [`DEFAULT_ACCENT`].
    pub fn new(accent: &[Color]) -> Self {
        let accent: Vec<Color> = if accent.is_empty() {
            DEFAULT_ACCENT.to_vec()
        } else {
            accent.to_vec()
        };

        let mut seen = FxHashSet::default();
        let vibrant = accent
            .iter()
            .chain(VIBRANT_EXTRAS.iter())
            .copied()
            .filter(|c| seen.insert(*c))
            .collect();

        Self { accent, vibrant }
    }

    pub fn accent(&self) -> &[Color] {
        &self.accent
    }

    pub fn vibrant(&self) -> &[Color] {
        &self.vibrant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vibrant_has_ten_colors() {
        let p = Palette::default();
        assert_eq!(p.accent().len(), 3);
        assert_eq!(p.vibrant().len(), 10);
        assert_eq!(&p.vibrant()[..3], p.accent());
    }

    #[test]
    fn test_vibrant_drops_duplicates_keeping_first() {
        let red = Color::rgb(0xFF, 0x3B, 0x3B);
        let p = Palette::new(&[red, Color::WHITE, red]);
        assert_eq!(p.vibrant()[0], red);
        assert_eq!(p.vibrant()[1], Color::WHITE);
        assert_eq!(p.vibrant().iter().filter(|c| **c == red).count(), 1);
        assert_eq!(p.vibrant().len(), 8);
    }

    #[test]
    fn test_empty_accent_uses_default() {
        assert_eq!(Palette::new(&[]), Palette::default());
    }
}
