//! PDF content stream builder.
//!
//! Builds the text-operator stream for one page per ISO 32000-1:2008
//! Section 9: text objects (BT/ET), font selection (Tf), text matrix
//! positioning (Tm), word spacing (Tw) and text showing (Tj). Show
//! payloads are pre-encoded Windows-1254 bytes, escaped into 7-bit
//! clean literal strings.

use crate::error::{Error, Result};
use crate::fonts::encoding::encode_bytes_as_literal;
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm); the engine uses it for absolute positioning
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Set word spacing (Tw); applies to byte 0x20 in shown strings
    SetWordSpacing(f32),
    /// Show text (Tj) - pre-encoded bytes
    ShowText(Vec<u8>),
}

/// Builder for a page's content stream.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Whether we're inside a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Begin a text object (no-op when already inside one).
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object (no-op when not inside one).
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
        }
        self
    }

    /// Select a font resource and size.
    pub fn set_font(&mut self, resource: &str, size: f32) -> &mut Self {
        self.op(ContentStreamOp::SetFont(resource.to_string(), size))
    }

    /// Set the text matrix to a translation (absolute positioning).
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y))
    }

    /// Set word spacing for subsequent shown text.
    pub fn word_spacing(&mut self, spacing: f32) -> &mut Self {
        self.op(ContentStreamOp::SetWordSpacing(spacing))
    }

    /// Show pre-encoded text bytes.
    pub fn show_bytes(&mut self, bytes: Vec<u8>) -> &mut Self {
        self.op(ContentStreamOp::ShowText(bytes))
    }

    /// Whether any operations were recorded.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Serialize the operations into content stream bytes.
    ///
    /// Fails with a serialization fault when text objects are
    /// unbalanced; that indicates an engine defect, not bad input.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut depth: i32 = 0;
        for op in &self.operations {
            match op {
                ContentStreamOp::BeginText => depth += 1,
                ContentStreamOp::EndText => depth -= 1,
                _ => {},
            }
            if !(0..=1).contains(&depth) {
                return Err(Error::Serialization(
                    "unbalanced text object in content stream".to_string(),
                ));
            }
        }
        if depth != 0 {
            return Err(Error::Serialization(
                "text object left open in content stream".to_string(),
            ));
        }

        let mut out = Vec::new();
        for op in &self.operations {
            self.write_op(&mut out, op)?;
        }
        Ok(out)
    }

    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> Result<()> {
        match op {
            ContentStreamOp::BeginText => writeln!(w, "BT")?,
            ContentStreamOp::EndText => writeln!(w, "ET")?,
            ContentStreamOp::SetFont(resource, size) => {
                writeln!(w, "/{} {} Tf", resource, fmt_num(*size))?
            },
            ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => writeln!(
                w,
                "{} {} {} {} {} {} Tm",
                fmt_num(*a),
                fmt_num(*b),
                fmt_num(*c),
                fmt_num(*d),
                fmt_num(*e),
                fmt_num(*f)
            )?,
            ContentStreamOp::SetWordSpacing(spacing) => writeln!(w, "{} Tw", fmt_num(*spacing))?,
            ContentStreamOp::ShowText(bytes) => {
                writeln!(w, "{} Tj", encode_bytes_as_literal(bytes))?
            },
        }
        Ok(())
    }
}

/// Format a number for a content stream operand.
///
/// Fixed three-decimal precision with trailing zeros trimmed keeps the
/// output deterministic and compact.
fn fmt_num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.3}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text_stream() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .begin_text()
            .set_font("F1", 11.0)
            .move_to(50.0, 780.0)
            .show_bytes(b"Merhaba".to_vec())
            .end_text();

        let bytes = builder.build().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("BT"));
        assert!(text.contains("/F1 11 Tf"));
        assert!(text.contains("1 0 0 1 50 780 Tm"));
        assert!(text.contains("(Merhaba) Tj"));
        assert!(text.contains("ET"));
    }

    #[test]
    fn test_begin_text_is_idempotent() {
        let mut builder = ContentStreamBuilder::new();
        builder.begin_text().begin_text().end_text().end_text();
        let text = String::from_utf8_lossy(&builder.build().unwrap()).to_string();
        assert_eq!(text.matches("BT").count(), 1);
        assert_eq!(text.matches("ET").count(), 1);
    }

    #[test]
    fn test_word_spacing_operator() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .begin_text()
            .word_spacing(3.25)
            .show_bytes(b"a b".to_vec())
            .end_text();
        let text = String::from_utf8_lossy(&builder.build().unwrap()).to_string();
        assert!(text.contains("3.25 Tw"));
    }

    #[test]
    fn test_high_bytes_become_octal_escapes() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .begin_text()
            .show_bytes(vec![0xFD, 0xFE])
            .end_text();
        let text = String::from_utf8_lossy(&builder.build().unwrap()).to_string();
        assert!(text.contains("(\\375\\376) Tj"));
    }

    #[test]
    fn test_unbalanced_text_object_is_a_fault() {
        let mut builder = ContentStreamBuilder::new();
        builder.op(ContentStreamOp::EndText);
        assert!(matches!(builder.build(), Err(Error::Serialization(_))));

        let mut builder = ContentStreamBuilder::new();
        builder.op(ContentStreamOp::BeginText);
        assert!(matches!(builder.build(), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_empty_stream_builds_empty() {
        let builder = ContentStreamBuilder::new();
        assert!(builder.build().unwrap().is_empty());
        assert!(builder.is_empty());
    }
}
