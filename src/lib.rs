//! # pdf_typeset
//!
//! Document rendering engine: converts styled text blocks (paragraphs,
//! headings, alignment, emphasis) into structurally valid PDF bytes,
//! with first-class support for Turkish text.
//!
//! ## Pipeline
//!
//! - **Placeholder resolution**: date tokens expanded before layout
//! - **Layout**: word wrap, alignment (left/center/right/justify),
//!   heading scaling, font-size clamping, vertical pagination
//! - **Font/encoding**: Base-14 Helvetica metrics plus a Windows-1254
//!   text encoding that round-trips every supported Turkish letter
//! - **Serialization**: deterministic header/objects/xref/trailer
//!   emission per ISO 32000-1
//!
//! The engine is purely functional per call: no state survives between
//! invocations, so concurrent calls never interfere.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_typeset::{generate_from_blocks, GenerationOptions, TextBlock};
//!
//! let blocks = vec![
//!     TextBlock::heading(1, "Sözleşme"),
//!     TextBlock::paragraph("İşbu sözleşme {{tarih}} tarihinde düzenlenmiştir."),
//! ];
//! let pdf = generate_from_blocks(&blocks, &GenerationOptions::default())?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), pdf_typeset::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Core object model and geometry
pub mod geometry;
pub mod object;

// Input content model
pub mod elements;

// Placeholder resolution
pub mod placeholder;

// Fonts and text encoding
pub mod fonts;

// Layout engine
pub mod layout;

// PDF serialization
pub mod writer;

// High-level API
pub mod api;

// Re-exports
pub use api::{generate_from_blocks, generate_from_text, TypesetEngine};
pub use elements::{GenerationOptions, StyleSpec, TextAlign, TextBlock};
pub use error::{Error, Result};
pub use fonts::{FontSlant, FontWeight, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use geometry::PageGeometry;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
