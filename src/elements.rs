//! Input content model.
//!
//! These are the types the surrounding web layer hands the engine:
//! styled text blocks plus document metadata, deserialized from JSON
//! with camelCase field names. Deserialization is deliberately lenient:
//! malformed style values normalize to defaults rather than rejecting
//! the call.

use crate::fonts::{FontSlant, FontWeight};
use serde::{Deserialize, Deserializer, Serialize};

/// One unit of styled text: a paragraph or a heading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// The block's text; empty text renders as a blank line
    #[serde(default)]
    pub text: String,
    /// Whether this block is a heading
    #[serde(default)]
    pub is_heading: bool,
    /// Heading level 1-3; only meaningful when `is_heading`, defaults to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
    /// Optional style overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleSpec>,
}

impl TextBlock {
    /// Create a plain paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a heading block at the given level (clamped to 1-3).
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_heading: true,
            heading_level: Some(level.clamp(1, 3)),
            style: None,
        }
    }

    /// Attach a style to this block.
    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = Some(style);
        self
    }

    /// The effective heading level: 1-3 for headings, `None` otherwise.
    ///
    /// Out-of-range levels normalize to the nearest bound.
    pub fn effective_heading_level(&self) -> Option<u8> {
        if !self.is_heading {
            return None;
        }
        Some(self.heading_level.unwrap_or(1).clamp(1, 3))
    }
}

/// Style overrides for a block.
///
/// Every field is optional; resolution against the defaults happens in
/// the layout engine's style-resolution step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    /// Font size in points; clamped into the supported range at resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// "normal" or "bold"; unknown values normalize to normal
    #[serde(
        default,
        deserialize_with = "lenient_weight",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_weight: Option<FontWeight>,
    /// "normal" or "italic"; unknown values normalize to normal
    #[serde(
        default,
        deserialize_with = "lenient_slant",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_style: Option<FontSlant>,
    /// "left", "center", "right" or "justify"; unknown values normalize to left
    #[serde(
        default,
        deserialize_with = "lenient_align",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_align: Option<TextAlign>,
}

impl StyleSpec {
    /// Style with only a font size set.
    pub fn sized(font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    /// Set the alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Set the weight.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Set the slant.
    pub fn slant(mut self, slant: FontSlant) -> Self {
        self.font_style = Some(slant);
        self
    }
}

/// Horizontal alignment of a block's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left (default)
    #[default]
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
    /// Stretched inter-word spacing; the paragraph's last line stays left
    Justify,
}

impl TextAlign {
    /// Parse an alignment string leniently; unknown values normalize to Left.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => TextAlign::Center,
            "right" => TextAlign::Right,
            "justify" => TextAlign::Justify,
            _ => TextAlign::Left,
        }
    }
}

/// Document metadata; never affects layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Document title for the Info dictionary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document author for the Info dictionary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl GenerationOptions {
    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

fn lenient_weight<'de, D>(d: D) -> Result<Option<FontWeight>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(d)?;
    Ok(s.map(|s| FontWeight::parse(&s)))
}

fn lenient_slant<'de, D>(d: D) -> Result<Option<FontSlant>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(d)?;
    Ok(s.map(|s| FontSlant::parse(&s)))
}

fn lenient_align<'de, D>(d: D) -> Result<Option<TextAlign>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(d)?;
    Ok(s.map(|s| TextAlign::parse(&s)))
}
