// src/rendering/palette.rs

use crate::model::Category;

pub type Rgb = (f64, f64, f64);

/// 0xRRGGBB to cairo components.
pub const fn rgb(hex: u32) -> Rgb {
    (
        ((hex >> 16) & 0xff) as f64 / 255.0,
        ((hex >> 8) & 0xff) as f64 / 255.0,
        (hex & 0xff) as f64 / 255.0,
    )
}

pub const BORDER: Rgb = rgb(0xe5e7eb);
pub const TEXT: Rgb = rgb(0x111827);
pub const PLACEHOLDER_FILL: Rgb = rgb(0xf3f4f6);
pub const PLACEHOLDER_TEXT: Rgb = rgb(0x6b7280);

/// (resting, hovered) fill for a category.
pub fn category_fill(category: Category) -> (Rgb, Rgb) {
    match category {
        Category::AlkaliMetal => (rgb(0xfee2e2), rgb(0xfecaca)),
        Category::AlkalineEarthMetal => (rgb(0xffedd5), rgb(0xfed7aa)),
        Category::TransitionMetal => (rgb(0xfef9c3), rgb(0xfef08a)),
        Category::PostTransitionMetal => (rgb(0xdcfce7), rgb(0xbbf7d0)),
        Category::Metalloid => (rgb(0xccfbf1), rgb(0x99f6e4)),
        Category::Nonmetal => (rgb(0xdbeafe), rgb(0xbfdbfe)),
        Category::Halogen => (rgb(0xe0e7ff), rgb(0xc7d2fe)),
        Category::NobleGas => (rgb(0xf3e8ff), rgb(0xe9d5ff)),
        Category::Lanthanide => (rgb(0xfce7f3), rgb(0xfbcfe8)),
        Category::Actinide => (rgb(0xffe4e6), rgb(0xfecdd3)),
    }
}
