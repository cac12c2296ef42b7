//! Text extent estimation
//!
//! The layout has no font rasterizer, so glyph advances are approximated per
//! character class. Estimates should err on the wide side.

use super::types::BoundingBox;

/// Fraction of the font size taken above the baseline
const ASCENT: f64 = 0.8;
/// Fraction of the font size taken below the baseline
const DESCENT: f64 = 0.2;

/// Estimated advance of a character, as a fraction of the font size
fn advance(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '!' | '|' | '.' | ',' | ':' | ';' | '\'' | '`' | 'I' => 0.3,
        ' ' | 'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' => 0.4,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.95,
        c if c.is_ascii_uppercase() => 0.72,
        c if c.is_ascii_digit() => 0.6,
        c if c.is_ascii() => 0.58,
        // CJK and other wide scripts
        c if (c as u32) >= 0x2E80 => 1.0,
        _ => 0.65,
    }
}

/// Estimated width of `text` at `size` pixels
pub fn text_width(text: &str, size: f64) -> f64 {
    text.chars().map(advance).sum::<f64>() * size
}

/// Box of `text` drawn with a middle anchor at the origin, baseline at y = 0
pub fn text_bounds(text: &str, size: f64) -> BoundingBox {
    let width = text_width(text, size);
    BoundingBox::new(-width / 2.0, -ASCENT * size, width, (ASCENT + DESCENT) * size)
}

/// Box of `text` rotated by `degrees` around its anchor
pub fn rotated_text_bounds(text: &str, size: f64, degrees: f64) -> BoundingBox {
    text_bounds(text, size).rotated(degrees)
}
