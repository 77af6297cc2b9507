//! PDF document serialization.
//!
//! Emits the binary document structure: header and signature, indirect
//! objects (catalog, page tree, fonts, content streams), cross-reference
//! table and trailer. Output is deterministic: identical input always
//! yields byte-identical output.

pub mod content_stream;
pub mod object_serializer;
pub mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{PdfWriter, PdfWriterConfig};
