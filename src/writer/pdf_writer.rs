//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure: header,
//! body, xref table, and trailer. Object emission order, sorted
//! dictionary keys and the absence of generated timestamps make the
//! output a pure function of its input.

use super::content_stream::ContentStreamBuilder;
use super::object_serializer::ObjectSerializer;
use crate::error::{Error, Result};
use crate::fonts::{self, encoding};
use crate::object::Object;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.4")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to compress content streams with FlateDecode
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.4".to_string(),
            title: None,
            author: None,
            creator: Some("pdf_typeset".to_string()),
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Enable or disable FlateDecode compression of content streams.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Internal page data.
struct PageData {
    width: f32,
    height: f32,
    content: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Builds a complete document from page content streams plus the shared
/// font and encoding objects.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
    next_obj_id: u32,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            next_obj_id: 1,
        }
    }

    /// Allocate a new object ID.
    fn alloc_obj_id(&mut self) -> u32 {
        let id = self.next_obj_id;
        self.next_obj_id += 1;
        id
    }

    /// Add a page with the given dimensions; returns its content builder.
    pub fn add_page(&mut self, width: f32, height: f32) -> &mut ContentStreamBuilder {
        self.pages.push(PageData {
            width,
            height,
            content: ContentStreamBuilder::new(),
        });
        &mut self
            .pages
            .last_mut()
            .expect("page just pushed")
            .content
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The encoding object the font dictionaries share: WinAnsi base
    /// with the six Turkish positions re-declared.
    fn encoding_object() -> Object {
        let mut differences: Vec<Object> = Vec::new();
        for (byte, glyph_name) in encoding::encoding_differences() {
            differences.push(Object::Integer(byte as i64));
            differences.push(ObjectSerializer::name(glyph_name));
        }
        ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Encoding")),
            ("BaseEncoding", ObjectSerializer::name("WinAnsiEncoding")),
            ("Differences", Object::Array(differences)),
        ])
    }

    /// Encode a metadata string: plain bytes for ASCII, UTF-16BE with a
    /// BOM otherwise (so Turkish titles survive in any reader).
    fn info_string(s: &str) -> Object {
        if s.is_ascii() {
            ObjectSerializer::string(s)
        } else {
            let mut bytes = vec![0xFE, 0xFF];
            for unit in s.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
            Object::String(bytes)
        }
    }

    /// Build the complete PDF document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::new();

        // Fixed allocation order keeps output deterministic
        let catalog_id = self.alloc_obj_id();
        let pages_id = self.alloc_obj_id();
        let encoding_id = self.alloc_obj_id();

        let descriptors = fonts::all_fonts();
        let mut font_ids: Vec<(u32, &'static str, &'static str)> = Vec::new();
        for font in descriptors {
            let id = self.alloc_obj_id();
            font_ids.push((id, font.resource, font.base_font));
        }

        let page_count = self.pages.len();
        let mut page_ids: Vec<(u32, u32)> = Vec::with_capacity(page_count);
        for _ in 0..page_count {
            let page_id = self.alloc_obj_id();
            let content_id = self.alloc_obj_id();
            page_ids.push((page_id, content_id));
        }
        let info_id = self.alloc_obj_id();

        // Shared font resources dictionary
        let font_resources: HashMap<String, Object> = font_ids
            .iter()
            .map(|(id, resource, _)| (resource.to_string(), ObjectSerializer::reference(*id, 0)))
            .collect();

        let mut objects: Vec<(u32, Object)> = Vec::new();

        // Catalog and page tree
        objects.push((
            catalog_id,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", ObjectSerializer::reference(pages_id, 0)),
            ]),
        ));
        let page_refs: Vec<Object> = page_ids
            .iter()
            .map(|(page_id, _)| ObjectSerializer::reference(*page_id, 0))
            .collect();
        objects.push((
            pages_id,
            ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                ("Kids", Object::Array(page_refs)),
                ("Count", ObjectSerializer::integer(page_count as i64)),
            ]),
        ));

        // Shared encoding and font objects
        objects.push((encoding_id, Self::encoding_object()));
        for (id, _, base_font) in &font_ids {
            objects.push((
                *id,
                ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Font")),
                    ("Subtype", ObjectSerializer::name("Type1")),
                    ("BaseFont", ObjectSerializer::name(base_font)),
                    ("Encoding", ObjectSerializer::reference(encoding_id, 0)),
                ]),
            ));
        }

        // Page and content stream objects
        for (i, page) in self.pages.iter().enumerate() {
            let (page_id, content_id) = page_ids[i];
            let raw_content = page.content.build()?;

            let (content_bytes, is_compressed) = if self.config.compress {
                match compress_data(&raw_content) {
                    Ok(compressed) => (compressed, true),
                    Err(_) => (raw_content, false),
                }
            } else {
                (raw_content, false)
            };

            let mut content_dict = HashMap::new();
            content_dict
                .insert("Length".to_string(), Object::Integer(content_bytes.len() as i64));
            if is_compressed {
                content_dict.insert("Filter".to_string(), Object::Name("FlateDecode".to_string()));
            }

            objects.push((
                page_id,
                ObjectSerializer::dict(vec![
                    ("Type", ObjectSerializer::name("Page")),
                    ("Parent", ObjectSerializer::reference(pages_id, 0)),
                    (
                        "MediaBox",
                        ObjectSerializer::rect(0.0, 0.0, page.width as f64, page.height as f64),
                    ),
                    ("Contents", ObjectSerializer::reference(content_id, 0)),
                    (
                        "Resources",
                        ObjectSerializer::dict(vec![(
                            "Font",
                            Object::Dictionary(font_resources.clone()),
                        )]),
                    ),
                ]),
            ));
            objects.push((
                content_id,
                Object::Stream {
                    dict: content_dict,
                    data: bytes::Bytes::from(content_bytes),
                },
            ));
        }

        // Info dictionary
        let mut info_entries = Vec::new();
        if let Some(title) = &self.config.title {
            info_entries.push(("Title", Self::info_string(title)));
        }
        if let Some(author) = &self.config.author {
            info_entries.push(("Author", Self::info_string(author)));
        }
        if let Some(creator) = &self.config.creator {
            info_entries.push(("Creator", Self::info_string(creator)));
        }
        objects.push((info_id, ObjectSerializer::dict(info_entries)));

        self.verify_references(&objects)?;

        // Emit
        let mut output = Vec::new();
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker so transfer tools treat the file as binary
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let mut xref_offsets: Vec<(u32, usize)> = Vec::with_capacity(objects.len());
        for (id, obj) in &objects {
            xref_offsets.push((*id, output.len()));
            output.extend_from_slice(&serializer.serialize_indirect(*id, 0, obj));
        }

        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", self.next_obj_id)?;
        writeln!(output, "0000000000 65535 f ")?;

        xref_offsets.sort_by_key(|(id, _)| *id);
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(self.next_obj_id as i64)),
            ("Root", ObjectSerializer::reference(catalog_id, 0)),
            ("Info", ObjectSerializer::reference(info_id, 0)),
        ]);

        writeln!(output, "trailer")?;
        output.extend_from_slice(&serializer.serialize(&trailer));
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        Ok(output)
    }

    /// Check that every indirect reference points at an emitted object.
    ///
    /// A dangling reference is an engine defect and fails the call.
    fn verify_references(&self, objects: &[(u32, Object)]) -> Result<()> {
        let ids: HashSet<u32> = objects.iter().map(|(id, _)| *id).collect();
        for (_, obj) in objects {
            Self::walk_references(obj, &ids)?;
        }
        Ok(())
    }

    fn walk_references(obj: &Object, ids: &HashSet<u32>) -> Result<()> {
        match obj {
            Object::Reference(r) => {
                if !ids.contains(&r.id) {
                    return Err(Error::Serialization(format!(
                        "dangling object reference {}",
                        r
                    )));
                }
            },
            Object::Array(items) => {
                for item in items {
                    Self::walk_references(item, ids)?;
                }
            },
            Object::Dictionary(dict) | Object::Stream { dict, .. } => {
                for value in dict.values() {
                    Self::walk_references(value, ids)?;
                }
            },
            _ => {},
        }
        Ok(())
    }

    /// Save the PDF to a file.
    pub fn save(self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
