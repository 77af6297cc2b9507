//! Turkish-safe text encoding for PDF content streams.
//!
//! Text shown with the `Tj` operator is a byte string interpreted under
//! the font's declared encoding. The engine encodes to Windows-1254
//! (the Turkish code page): a single-byte encoding whose only deviations
//! from WinAnsi are six positions carrying Ğ, İ, Ş, ğ, ı, ş. The font
//! dictionaries declare those six positions through a `/Differences`
//! array over `/WinAnsiEncoding`, so a compliant reader decodes the
//! emitted bytes back to the original text.
//!
//! The invariant here is the one naive generators break: every input
//! code point becomes exactly one byte (the fallback byte for anything
//! unmappable), never a truncated or adjacent-byte corruption of a
//! multi-byte sequence.

use unicode_normalization::UnicodeNormalization;

/// Byte substituted for code points outside the supported repertoire.
///
/// Renders as a visible '?' rather than corrupting neighbouring bytes.
pub const FALLBACK_BYTE: u8 = b'?';

/// Map a Unicode code point to its Windows-1254 byte value.
///
/// Returns `None` for code points outside the code page (including the
/// six Latin-1 positions CP1254 reassigns to Turkish letters).
pub fn unicode_to_cp1254(codepoint: u32) -> Option<u8> {
    // ASCII maps directly
    if codepoint < 0x80 {
        return Some(codepoint as u8);
    }

    // 0xA0-0xFF matches Latin-1 except the six positions reassigned
    // to Turkish letters (0xD0, 0xDD, 0xDE, 0xF0, 0xFD, 0xFE)
    if (0xA0..=0xFF).contains(&codepoint) {
        return match codepoint {
            0xD0 | 0xDD | 0xDE | 0xF0 | 0xFD | 0xFE => None,
            _ => Some(codepoint as u8),
        };
    }

    match codepoint {
        // Turkish letters at the reassigned positions
        0x011E => Some(0xD0), // Ğ
        0x0130 => Some(0xDD), // İ
        0x015E => Some(0xDE), // Ş
        0x011F => Some(0xF0), // ğ
        0x0131 => Some(0xFD), // ı
        0x015F => Some(0xFE), // ş

        // 0x80-0x9F specials shared with WinAnsi
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation mark
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation mark
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}

/// Map a Windows-1254 byte back to its Unicode character.
///
/// Bytes the code page leaves undefined decode to U+FFFD; the encoder
/// never emits them.
pub fn cp1254_to_unicode(byte: u8) -> char {
    if byte < 0x80 {
        return byte as char;
    }

    match byte {
        0xD0 => 'Ğ',
        0xDD => 'İ',
        0xDE => 'Ş',
        0xF0 => 'ğ',
        0xFD => 'ı',
        0xFE => 'ş',
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9F => '\u{0178}',
        0x81 | 0x8D | 0x8E | 0x8F | 0x90 | 0x9D | 0x9E => '\u{FFFD}',
        b => {
            // 0xA0-0xFF minus the Turkish positions matches Latin-1
            char::from_u32(b as u32).unwrap_or('\u{FFFD}')
        },
    }
}

/// Check if a character can be encoded without fallback substitution.
pub fn is_cp1254_char(ch: char) -> bool {
    unicode_to_cp1254(ch as u32).is_some()
}

/// Encode text to Windows-1254 bytes for a text-showing operator.
///
/// Input is NFC-normalized first so decomposed sequences (e.g. `g` +
/// COMBINING BREVE) encode as the composed Turkish letter. Every code
/// point produces exactly one output byte.
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.nfc() {
        match unicode_to_cp1254(ch as u32) {
            Some(b) => out.push(b),
            None => {
                log::debug!("substituting fallback glyph for U+{:04X}", ch as u32);
                out.push(FALLBACK_BYTE);
            },
        }
    }
    out
}

/// Decode Windows-1254 bytes back to a string.
///
/// Inverse of [`encode_text`] over the supported repertoire; used to
/// verify the round-trip guarantee.
pub fn decode_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| cp1254_to_unicode(b)).collect()
}

/// Escape a byte for a PDF literal string.
fn escape_byte_for_literal(b: u8) -> String {
    match b {
        b'(' => "\\(".to_string(),
        b')' => "\\)".to_string(),
        b'\\' => "\\\\".to_string(),
        0x0A => "\\n".to_string(),
        0x0D => "\\r".to_string(),
        0x09 => "\\t".to_string(),
        0x08 => "\\b".to_string(),
        0x0C => "\\f".to_string(),
        b if (0x20..0x7F).contains(&b) => (b as char).to_string(),
        b => format!("\\{:03o}", b),
    }
}

/// Encode bytes as a PDF literal string with proper escaping.
///
/// High bytes (the Turkish letters among them) become octal escapes, so
/// the content stream stays 7-bit clean while the byte values survive.
pub fn encode_bytes_as_literal(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len() * 2 + 2);
    result.push('(');
    for &b in bytes {
        result.push_str(&escape_byte_for_literal(b));
    }
    result.push(')');
    result
}

/// The `/Differences` entries the font dictionaries declare: the six
/// byte positions where Windows-1254 diverges from WinAnsi, with their
/// standard glyph names.
pub fn encoding_differences() -> [(u8, &'static str); 6] {
    [
        (0xD0, "Gbreve"),
        (0xDD, "Idotaccent"),
        (0xDE, "Scedilla"),
        (0xF0, "gbreve"),
        (0xFD, "dotlessi"),
        (0xFE, "scedilla"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_maps_directly() {
        assert_eq!(unicode_to_cp1254('A' as u32), Some(0x41));
        assert_eq!(unicode_to_cp1254(' ' as u32), Some(0x20));
    }

    #[test]
    fn test_turkish_letters_map() {
        assert_eq!(unicode_to_cp1254('Ğ' as u32), Some(0xD0));
        assert_eq!(unicode_to_cp1254('İ' as u32), Some(0xDD));
        assert_eq!(unicode_to_cp1254('Ş' as u32), Some(0xDE));
        assert_eq!(unicode_to_cp1254('ğ' as u32), Some(0xF0));
        assert_eq!(unicode_to_cp1254('ı' as u32), Some(0xFD));
        assert_eq!(unicode_to_cp1254('ş' as u32), Some(0xFE));
        // The Latin-1 letters those positions displaced are unmappable
        assert_eq!(unicode_to_cp1254('Ð' as u32), None);
        assert_eq!(unicode_to_cp1254('þ' as u32), None);
    }

    #[test]
    fn test_latin1_accents_shared_with_turkish() {
        for ch in ['ç', 'ö', 'ü', 'Ç', 'Ö', 'Ü'] {
            let byte = unicode_to_cp1254(ch as u32).unwrap();
            assert_eq!(byte as u32, ch as u32);
        }
    }

    #[test]
    fn test_round_trip_turkish_pangram() {
        let text = "Pijamalı hasta yağız şoföre çabucak güvendi";
        let bytes = encode_text(text);
        assert_eq!(bytes.len(), text.chars().count());
        assert_eq!(decode_bytes(&bytes), text);
    }

    #[test]
    fn test_round_trip_all_turkish_letters() {
        let text = "çğıöşüÇĞİÖŞÜ";
        assert_eq!(decode_bytes(&encode_text(text)), text);
    }

    #[test]
    fn test_decomposed_input_composes() {
        // "g" + COMBINING BREVE must encode as the single ğ byte
        let decomposed = "g\u{0306}";
        let bytes = encode_text(decomposed);
        assert_eq!(bytes, vec![0xF0]);
        assert_eq!(decode_bytes(&bytes), "ğ");
    }

    #[test]
    fn test_unmappable_becomes_fallback() {
        let bytes = encode_text("a中b");
        assert_eq!(bytes, vec![b'a', FALLBACK_BYTE, b'b']);
    }

    #[test]
    fn test_fallback_never_drops_code_points() {
        let text = "中文 ve Türkçe 😀";
        let bytes = encode_text(text);
        assert_eq!(bytes.len(), text.nfc().count());
    }

    #[test]
    fn test_is_cp1254_char() {
        assert!(is_cp1254_char('ş'));
        assert!(is_cp1254_char('€'));
        assert!(!is_cp1254_char('中'));
        assert!(!is_cp1254_char('ž'));
    }

    #[test]
    fn test_literal_escaping() {
        assert_eq!(encode_bytes_as_literal(b"ABC"), "(ABC)");
        assert_eq!(encode_bytes_as_literal(&[0x28, 0x29]), "(\\(\\))");
        // ş encodes to 0xFE, which must appear as an octal escape
        assert_eq!(encode_bytes_as_literal(&encode_text("ş")), "(\\376)");
    }

    #[test]
    fn test_differences_cover_exactly_the_divergent_positions() {
        let diffs = encoding_differences();
        assert_eq!(diffs.len(), 6);
        for (byte, _) in diffs {
            let ch = cp1254_to_unicode(byte);
            assert!("ĞİŞğış".contains(ch));
        }
    }
}
