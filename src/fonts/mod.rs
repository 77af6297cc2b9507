//! Font management for PDF generation.
//!
//! Maps logical style requests (weight, slant) to Base-14 Helvetica
//! variants and provides the AFM metrics the layout engine measures
//! text with. The registry is process-wide read-only state, built once
//! and shared across concurrent generation calls without locking.

pub mod encoding;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Smallest font size the engine will render.
pub const MIN_FONT_SIZE: f32 = 6.0;

/// Largest font size the engine will render.
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Body text size used when the caller specifies none.
pub const DEFAULT_FONT_SIZE: f32 = 11.0;

/// Clamp a requested font size into the supported range.
///
/// Out-of-range values (negative sizes and infinities included) clamp
/// to the nearest bound; NaN falls back to the default body size. Never
/// an error path.
pub fn clamp_font_size(size: f32) -> f32 {
    if size.is_nan() {
        return DEFAULT_FONT_SIZE;
    }
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Font weight classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

impl FontWeight {
    /// Parse a weight string leniently; unknown values normalize to Normal.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" => FontWeight::Bold,
            _ => FontWeight::Normal,
        }
    }

    /// Check whether this weight is bold.
    pub fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }
}

/// Font slant classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    /// Upright
    #[default]
    Normal,
    /// Italic/oblique
    Italic,
}

impl FontSlant {
    /// Parse a slant string leniently; unknown values normalize to Normal.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "italic" | "oblique" => FontSlant::Italic,
            _ => FontSlant::Normal,
        }
    }

    /// Check whether this slant is italic.
    pub fn is_italic(&self) -> bool {
        matches!(self, FontSlant::Italic)
    }
}

/// A resolved font: Base-14 name, resource id and metrics.
#[derive(Debug)]
pub struct FontDescriptor {
    /// PostScript base font name (e.g., "Helvetica-Bold")
    pub base_font: &'static str,
    /// Resource name used in page dictionaries (e.g., "F2")
    pub resource: &'static str,
    /// Font weight
    pub weight: FontWeight,
    /// Font slant
    pub slant: FontSlant,
    /// Ascender above the baseline (1/1000 em)
    pub ascender: f32,
    /// Descender below the baseline (1/1000 em, negative)
    pub descender: f32,
    /// Character widths (1/1000 em)
    widths: &'static HashMap<char, f32>,
}

impl FontDescriptor {
    /// Width of a single character in font units (1/1000 em).
    ///
    /// Characters without a metric entry use an average width so that
    /// fallback-glyph substitutions still advance the cursor sensibly.
    pub fn char_width(&self, ch: char) -> f32 {
        *self.widths.get(&ch).unwrap_or(&556.0)
    }

    /// Width of a string in points at the given size.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: f32 = text.chars().map(|c| self.char_width(c)).sum();
        units * font_size / 1000.0
    }

    /// Line height at the given size (standard 120% leading).
    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * 1.2
    }
}

/// Resolve a logical style request to a font.
pub fn resolve_font(weight: FontWeight, slant: FontSlant) -> &'static FontDescriptor {
    let registry = &*REGISTRY;
    match (weight, slant) {
        (FontWeight::Normal, FontSlant::Normal) => &registry.regular,
        (FontWeight::Bold, FontSlant::Normal) => &registry.bold,
        (FontWeight::Normal, FontSlant::Italic) => &registry.oblique,
        (FontWeight::Bold, FontSlant::Italic) => &registry.bold_oblique,
    }
}

/// All four Helvetica variants, in stable resource order (F1..F4).
pub fn all_fonts() -> [&'static FontDescriptor; 4] {
    let registry = &*REGISTRY;
    [
        &registry.regular,
        &registry.bold,
        &registry.oblique,
        &registry.bold_oblique,
    ]
}

struct FontRegistry {
    regular: FontDescriptor,
    bold: FontDescriptor,
    oblique: FontDescriptor,
    bold_oblique: FontDescriptor,
}

lazy_static! {
    static ref WIDTHS_REGULAR: HashMap<char, f32> = helvetica_widths(false);
    static ref WIDTHS_BOLD: HashMap<char, f32> = helvetica_widths(true);
    static ref REGISTRY: FontRegistry = FontRegistry {
        regular: FontDescriptor {
            base_font: "Helvetica",
            resource: "F1",
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
            ascender: 718.0,
            descender: -207.0,
            widths: &WIDTHS_REGULAR,
        },
        bold: FontDescriptor {
            base_font: "Helvetica-Bold",
            resource: "F2",
            weight: FontWeight::Bold,
            slant: FontSlant::Normal,
            ascender: 718.0,
            descender: -207.0,
            widths: &WIDTHS_BOLD,
        },
        oblique: FontDescriptor {
            base_font: "Helvetica-Oblique",
            resource: "F3",
            weight: FontWeight::Normal,
            slant: FontSlant::Italic,
            ascender: 718.0,
            descender: -207.0,
            widths: &WIDTHS_REGULAR,
        },
        bold_oblique: FontDescriptor {
            base_font: "Helvetica-BoldOblique",
            resource: "F4",
            weight: FontWeight::Bold,
            slant: FontSlant::Italic,
            ascender: 718.0,
            descender: -207.0,
            widths: &WIDTHS_BOLD,
        },
    };
}

/// Helvetica character widths in units of 1/1000 em.
///
/// Standard PostScript AFM metrics. Oblique variants share the upright
/// widths, so two tables cover all four fonts. The Turkish letters carry
/// the metrics of their Latin base glyphs.
fn helvetica_widths(bold: bool) -> HashMap<char, f32> {
    let mut widths = HashMap::new();

    // Whitespace and punctuation
    widths.insert(' ', 278.0);
    widths.insert('.', 278.0);
    widths.insert(',', 278.0);
    widths.insert('-', 333.0);
    widths.insert(':', if bold { 333.0 } else { 278.0 });
    widths.insert(';', if bold { 333.0 } else { 278.0 });
    widths.insert('!', 333.0);
    widths.insert('?', if bold { 611.0 } else { 500.0 });
    widths.insert('\'', if bold { 278.0 } else { 222.0 });
    widths.insert('"', if bold { 474.0 } else { 355.0 });
    widths.insert('(', 333.0);
    widths.insert(')', 333.0);
    widths.insert('[', 333.0);
    widths.insert(']', 333.0);
    widths.insert('{', if bold { 389.0 } else { 334.0 });
    widths.insert('}', if bold { 389.0 } else { 334.0 });
    widths.insert('/', 278.0);
    widths.insert('\\', 278.0);
    widths.insert('@', if bold { 975.0 } else { 1015.0 });
    widths.insert('#', 556.0);
    widths.insert('$', 556.0);
    widths.insert('%', 889.0);
    widths.insert('^', if bold { 584.0 } else { 469.0 });
    widths.insert('&', if bold { 722.0 } else { 667.0 });
    widths.insert('*', 389.0);
    widths.insert('+', 584.0);
    widths.insert('=', 584.0);
    widths.insert('<', 584.0);
    widths.insert('>', 584.0);
    widths.insert('|', 260.0);
    widths.insert('`', 333.0);
    widths.insert('~', 584.0);
    widths.insert('_', 556.0);

    // Digits
    for digit in '0'..='9' {
        widths.insert(digit, 556.0);
    }

    // Uppercase
    let uppercase: [(char, f32); 26] = if bold {
        [
            ('A', 722.0),
            ('B', 722.0),
            ('C', 722.0),
            ('D', 722.0),
            ('E', 667.0),
            ('F', 611.0),
            ('G', 778.0),
            ('H', 722.0),
            ('I', 278.0),
            ('J', 556.0),
            ('K', 722.0),
            ('L', 611.0),
            ('M', 833.0),
            ('N', 722.0),
            ('O', 778.0),
            ('P', 667.0),
            ('Q', 778.0),
            ('R', 722.0),
            ('S', 667.0),
            ('T', 611.0),
            ('U', 722.0),
            ('V', 667.0),
            ('W', 944.0),
            ('X', 667.0),
            ('Y', 667.0),
            ('Z', 611.0),
        ]
    } else {
        [
            ('A', 667.0),
            ('B', 667.0),
            ('C', 722.0),
            ('D', 722.0),
            ('E', 667.0),
            ('F', 611.0),
            ('G', 778.0),
            ('H', 722.0),
            ('I', 278.0),
            ('J', 500.0),
            ('K', 667.0),
            ('L', 556.0),
            ('M', 833.0),
            ('N', 722.0),
            ('O', 778.0),
            ('P', 667.0),
            ('Q', 778.0),
            ('R', 722.0),
            ('S', 667.0),
            ('T', 611.0),
            ('U', 722.0),
            ('V', 667.0),
            ('W', 944.0),
            ('X', 667.0),
            ('Y', 667.0),
            ('Z', 611.0),
        ]
    };
    widths.extend(uppercase);

    // Lowercase
    let lowercase: [(char, f32); 26] = if bold {
        [
            ('a', 556.0),
            ('b', 611.0),
            ('c', 556.0),
            ('d', 611.0),
            ('e', 556.0),
            ('f', 333.0),
            ('g', 611.0),
            ('h', 611.0),
            ('i', 278.0),
            ('j', 278.0),
            ('k', 556.0),
            ('l', 278.0),
            ('m', 889.0),
            ('n', 611.0),
            ('o', 611.0),
            ('p', 611.0),
            ('q', 611.0),
            ('r', 389.0),
            ('s', 556.0),
            ('t', 333.0),
            ('u', 611.0),
            ('v', 556.0),
            ('w', 778.0),
            ('x', 556.0),
            ('y', 556.0),
            ('z', 500.0),
        ]
    } else {
        [
            ('a', 556.0),
            ('b', 556.0),
            ('c', 500.0),
            ('d', 556.0),
            ('e', 556.0),
            ('f', 278.0),
            ('g', 556.0),
            ('h', 556.0),
            ('i', 222.0),
            ('j', 222.0),
            ('k', 500.0),
            ('l', 222.0),
            ('m', 833.0),
            ('n', 556.0),
            ('o', 556.0),
            ('p', 556.0),
            ('q', 556.0),
            ('r', 333.0),
            ('s', 500.0),
            ('t', 278.0),
            ('u', 556.0),
            ('v', 500.0),
            ('w', 722.0),
            ('x', 500.0),
            ('y', 500.0),
            ('z', 500.0),
        ]
    };
    widths.extend(lowercase);

    // Turkish extended letters, mapped to their base-glyph metrics
    let (c_w, g_w, i_low, i_up, o_w, s_w, u_w) = if bold {
        (556.0, 611.0, 278.0, 278.0, 611.0, 556.0, 611.0)
    } else {
        (500.0, 556.0, 222.0, 278.0, 556.0, 500.0, 556.0)
    };
    widths.insert('ç', c_w);
    widths.insert('ğ', g_w);
    widths.insert('ı', i_low);
    widths.insert('ö', o_w);
    widths.insert('ş', s_w);
    widths.insert('ü', u_w);
    widths.insert('İ', i_up);
    widths.insert('Ç', 722.0);
    widths.insert('Ğ', 778.0);
    widths.insert('Ö', 778.0);
    widths.insert('Ş', 667.0);
    widths.insert('Ü', 722.0);

    widths
}
