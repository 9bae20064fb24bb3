use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

use crate::charts::gender::GenderBucket;
use crate::stats::score::Category;

// ---------------------------------------------------------------------------
// Type colours
// ---------------------------------------------------------------------------

/// Colour for any type missing from [`TYPE_COLORS`].
pub const FALLBACK: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);

const TYPE_COLORS: [(&str, Color32); 18] = [
    ("Normal", Color32::from_rgb(0xA8, 0xA8, 0x78)),
    ("Fire", Color32::from_rgb(0xF0, 0x80, 0x30)),
    ("Water", Color32::from_rgb(0x68, 0x90, 0xF0)),
    ("Electric", Color32::from_rgb(0xF8, 0xD0, 0x30)),
    ("Grass", Color32::from_rgb(0x78, 0xC8, 0x50)),
    ("Ice", Color32::from_rgb(0x98, 0xD8, 0xD8)),
    ("Fighting", Color32::from_rgb(0xC0, 0x30, 0x28)),
    ("Poison", Color32::from_rgb(0xA0, 0x40, 0xA0)),
    ("Ground", Color32::from_rgb(0xE0, 0xC0, 0x68)),
    ("Flying", Color32::from_rgb(0xA8, 0x90, 0xF0)),
    ("Psychic", Color32::from_rgb(0xF8, 0x58, 0x88)),
    ("Bug", Color32::from_rgb(0xA8, 0xB8, 0x20)),
    ("Rock", Color32::from_rgb(0xB8, 0xA0, 0x38)),
    ("Ghost", Color32::from_rgb(0x70, 0x58, 0x98)),
    ("Dragon", Color32::from_rgb(0x70, 0x38, 0xF8)),
    ("Dark", Color32::from_rgb(0x70, 0x58, 0x48)),
    ("Steel", Color32::from_rgb(0xB8, 0xB8, 0xD0)),
    ("Fairy", Color32::from_rgb(0xEE, 0x99, 0xAC)),
];

/// Look up the colour for a type name. Never fails.
pub fn type_color(ty: &str) -> Color32 {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == ty)
        .map(|(_, c)| *c)
        .unwrap_or(FALLBACK)
}

/// Single colour for a dual-typed bar: the primary/secondary midpoint,
/// mixed in linear light.
pub fn dual_type_color(primary: &str, secondary: Option<&str>) -> Color32 {
    match secondary {
        Some(s) => blend(type_color(primary), type_color(s), 0.5),
        None => type_color(primary),
    }
}

pub fn blend(a: Color32, b: Color32, factor: f32) -> Color32 {
    let to_linear = |c: Color32| -> LinSrgb {
        Srgb::new(c.r(), c.g(), c.b())
            .into_format::<f32>()
            .into_linear()
    };
    let mixed = to_linear(a).mix(to_linear(b), factor.clamp(0.0, 1.0));
    let rgb: Srgb<u8> = Srgb::<f32>::from_linear(mixed).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Fixed chart palettes
// ---------------------------------------------------------------------------

pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Normal => Color32::from_rgb(0x78, 0xC8, 0x50),
        Category::SubLegendary => Color32::from_rgb(0xA8, 0xB8, 0x20),
        Category::Legendary => Color32::from_rgb(0xF0, 0x80, 0x30),
        Category::Mythical => Color32::from_rgb(0xF8, 0x58, 0x88),
    }
}

pub fn gender_color(bucket: GenderBucket) -> Color32 {
    match bucket {
        GenderBucket::MaleOnly => Color32::from_rgb(0x68, 0x90, 0xF0),
        GenderBucket::MostlyMale => Color32::from_rgb(0x98, 0xD8, 0xD8),
        GenderBucket::Balanced => Color32::from_rgb(0xA8, 0xA8, 0x78),
        GenderBucket::MostlyFemale => Color32::from_rgb(0xF8, 0x58, 0x88),
        GenderBucket::FemaleOnly => Color32::from_rgb(0xEE, 0x99, 0xAC),
        GenderBucket::Genderless => Color32::from_rgb(0xB8, 0xB8, 0xD0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_and_unknown_types() {
        assert_eq!(type_color("Fire"), Color32::from_rgb(0xF0, 0x80, 0x30));
        assert_eq!(type_color("Shadow"), FALLBACK);
        assert_eq!(type_color(""), FALLBACK);
    }

    #[test]
    fn single_type_is_not_blended() {
        assert_eq!(dual_type_color("Water", None), type_color("Water"));
    }

    #[test]
    fn blend_stays_between_endpoints() {
        let c = blend(Color32::from_rgb(255, 0, 0), Color32::from_rgb(0, 0, 255), 0.5);
        assert!(c.r() > 0 && c.r() < 255);
        assert!(c.b() > 0 && c.b() < 255);
        assert_eq!(c.g(), 0);

        assert_eq!(blend(Color32::BLACK, Color32::WHITE, 0.0), Color32::BLACK);
        assert_eq!(blend(Color32::BLACK, Color32::WHITE, 1.0), Color32::WHITE);
    }
}
