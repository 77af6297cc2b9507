//! High-level generation API.
//!
//! Wires the pipeline together: placeholder resolution, layout, and
//! serialization. The engine holds only immutable configuration, so a
//! single instance (or the free functions over the default geometry)
//! can serve any number of concurrent calls.

use crate::elements::{GenerationOptions, TextBlock};
use crate::error::{Error, Result};
use crate::fonts::encoding;
use crate::geometry::PageGeometry;
use crate::layout::{self, LaidOutPage};
use crate::placeholder;
use crate::writer::{PdfWriter, PdfWriterConfig};

/// Document generation engine.
///
/// Stateless apart from its page geometry; every call is a pure
/// function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct TypesetEngine {
    geometry: PageGeometry,
}

impl TypesetEngine {
    /// Engine over the default A4 geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over a custom page geometry.
    pub fn with_geometry(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    /// Generate a PDF from styled blocks.
    ///
    /// Fails with [`Error::InvalidInput`] when `blocks` is empty; every
    /// other input is normalized rather than rejected.
    pub fn generate_from_blocks(
        &self,
        blocks: &[TextBlock],
        options: &GenerationOptions,
    ) -> Result<Vec<u8>> {
        if blocks.is_empty() {
            return Err(Error::InvalidInput(
                "document must contain at least one block".to_string(),
            ));
        }

        let resolved: Vec<TextBlock> = blocks
            .iter()
            .map(|block| TextBlock {
                text: placeholder::resolve_placeholders(&block.text),
                ..block.clone()
            })
            .collect();

        let pages = layout::layout(&resolved, &self.geometry)?;
        log::debug!(
            "laid out {} block(s) onto {} page(s)",
            blocks.len(),
            pages.len()
        );
        self.serialize(&pages, options)
    }

    /// Generate a PDF from plain text.
    ///
    /// Each input line becomes a paragraph block; the empty string is a
    /// valid document with a single blank page.
    pub fn generate_from_text(&self, text: &str, options: &GenerationOptions) -> Result<Vec<u8>> {
        let blocks: Vec<TextBlock> = text.split('\n').map(TextBlock::paragraph).collect();
        self.generate_from_blocks(&blocks, options)
    }

    /// Serialize laid-out pages into the final byte buffer.
    fn serialize(&self, pages: &[LaidOutPage], options: &GenerationOptions) -> Result<Vec<u8>> {
        let mut config = PdfWriterConfig::default();
        config.title = options.title.clone();
        config.author = options.author.clone();

        let mut writer = PdfWriter::with_config(config);
        for page in pages {
            let builder = writer.add_page(self.geometry.width, self.geometry.height);
            if page.lines.is_empty() {
                continue;
            }
            builder.begin_text();
            for line in &page.lines {
                builder
                    .set_font(line.font.resource, line.size)
                    .word_spacing(line.word_spacing)
                    .move_to(line.x, line.y)
                    .show_bytes(encoding::encode_text(&line.text));
            }
            builder.end_text();
        }
        writer.finish()
    }
}

/// Generate a PDF from styled blocks using the default A4 geometry.
pub fn generate_from_blocks(blocks: &[TextBlock], options: &GenerationOptions) -> Result<Vec<u8>> {
    TypesetEngine::new().generate_from_blocks(blocks, options)
}

/// Generate a PDF from plain text using the default A4 geometry.
pub fn generate_from_text(text: &str, options: &GenerationOptions) -> Result<Vec<u8>> {
    TypesetEngine::new().generate_from_text(text, options)
}
