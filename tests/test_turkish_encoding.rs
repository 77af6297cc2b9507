//! Turkish text encoding guarantees.
//!
//! The core invariant: any string over the supported Turkish repertoire
//! survives encoding into the document's text-showing operators and
//! decodes back to the original under the declared encoding.

use pdf_typeset::fonts::encoding::{decode_bytes, encode_text, is_cp1254_char, FALLBACK_BYTE};
use pdf_typeset::{generate_from_text, GenerationOptions};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Unescape a PDF literal string body back into bytes.
fn unescape_literal(body: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c as u8);
            continue;
        }
        match chars.next() {
            Some('n') => out.push(0x0A),
            Some('r') => out.push(0x0D),
            Some('t') => out.push(0x09),
            Some('b') => out.push(0x08),
            Some('f') => out.push(0x0C),
            Some(d) if d.is_digit(8) => {
                let mut value = d.to_digit(8).unwrap();
                for _ in 0..2 {
                    if let Some(&n) = chars.peek() {
                        if n.is_digit(8) {
                            value = value * 8 + n.to_digit(8).unwrap();
                            chars.next();
                            continue;
                        }
                    }
                    break;
                }
                out.push(value as u8);
            },
            Some(other) => out.push(other as u8),
            None => {},
        }
    }
    out
}

/// Extract every Tj literal payload from an uncompressed PDF and decode
/// it under the declared encoding.
fn extract_shown_text(pdf: &[u8]) -> String {
    let content = String::from_utf8_lossy(pdf).to_string();
    let mut shown = String::new();
    for line in content.lines() {
        if let Some(stripped) = line.strip_suffix(") Tj") {
            if let Some(body) = stripped.strip_prefix('(') {
                shown.push_str(&decode_bytes(&unescape_literal(body)));
                shown.push(' ');
            }
        }
    }
    shown
}

// ============================================================================
// Round-trip through the full pipeline
// ============================================================================

#[test]
fn turkish_sentence_survives_into_the_document() {
    let text = "Pijamalı hasta yağız şoföre çabucak güvendi";
    let pdf = generate_from_text(text, &GenerationOptions::default()).unwrap();
    let shown = extract_shown_text(&pdf);
    assert!(
        shown.contains(text),
        "decoded text-showing bytes must reproduce the input, got: {}",
        shown
    );
}

#[test]
fn every_turkish_letter_survives() {
    let text = "çğıöşü ÇĞİÖŞÜ";
    let pdf = generate_from_text(text, &GenerationOptions::default()).unwrap();
    let shown = extract_shown_text(&pdf);
    assert!(shown.contains(text));
}

#[test]
fn decomposed_input_renders_composed() {
    // "s" + COMBINING CEDILLA followed by "g" + COMBINING BREVE
    let decomposed = "s\u{0327}u g\u{0306}u\u{0308}l";
    let pdf = generate_from_text(decomposed, &GenerationOptions::default()).unwrap();
    let shown = extract_shown_text(&pdf);
    assert!(shown.contains("şu ğül"));
}

#[test]
fn unmappable_characters_become_visible_fallback() {
    let pdf = generate_from_text("Türkçe 漢字 metin", &GenerationOptions::default()).unwrap();
    let shown = extract_shown_text(&pdf);
    assert!(shown.contains("Türkçe ?? metin"));
}

// ============================================================================
// Property tests over the supported repertoire
// ============================================================================

const TURKISH_LETTERS: &[char] = &[
    'ç', 'ğ', 'ı', 'ö', 'ş', 'ü', 'Ç', 'Ğ', 'İ', 'Ö', 'Ş', 'Ü',
];

fn turkish_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TURKISH_LETTERS.to_vec()), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn encode_decode_round_trips_turkish_strings(s in turkish_string()) {
        let bytes = encode_text(&s);
        prop_assert_eq!(bytes.len(), s.chars().count());
        prop_assert_eq!(decode_bytes(&bytes), s);
    }

    #[test]
    fn generation_succeeds_for_any_turkish_string(s in turkish_string()) {
        let pdf = generate_from_text(&s, &GenerationOptions::default()).unwrap();
        prop_assert_eq!(&pdf[..4], b"%PDF");
        prop_assert!(pdf.len() > 4);
    }

    #[test]
    fn encoding_never_drops_code_points(s in "\\PC*") {
        // Arbitrary (printable) unicode: every NFC code point becomes
        // exactly one byte, mappable or not
        use unicode_normalization::UnicodeNormalization;
        let bytes = encode_text(&s);
        prop_assert_eq!(bytes.len(), s.nfc().count());
    }
}

#[test]
fn fallback_byte_is_a_visible_glyph() {
    assert_eq!(FALLBACK_BYTE, b'?');
    assert!(is_cp1254_char('?'));
}
