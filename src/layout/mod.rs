//! Layout engine: styled text blocks to positioned lines.
//!
//! Converts an ordered block sequence into pages of [`ResolvedLine`]s:
//! style resolution, word wrap against the content width, horizontal
//! alignment (including justification), and vertical pagination. All
//! state lives inside a single `layout` call; nothing is shared across
//! calls.

use crate::elements::{StyleSpec, TextAlign, TextBlock};
use crate::error::{Error, Result};
use crate::fonts::{self, FontDescriptor, FontSlant, FontWeight};
use crate::geometry::PageGeometry;

/// Heading font sizes for levels 1-3, level 1 largest.
pub const HEADING_SIZES: [f32; 3] = [18.0, 15.0, 13.0];

/// A fully resolved style: every field concrete, size already clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    /// Font size in points, inside the supported range
    pub font_size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Font slant
    pub slant: FontSlant,
    /// Horizontal alignment
    pub align: TextAlign,
}

impl ResolvedStyle {
    /// Default body style: 11pt regular, left aligned.
    pub fn body() -> Self {
        Self {
            font_size: fonts::DEFAULT_FONT_SIZE,
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
            align: TextAlign::Left,
        }
    }

    /// Default style for a heading level: scaled size, bold.
    pub fn heading(level: u8) -> Self {
        let level = level.clamp(1, 3);
        Self {
            font_size: HEADING_SIZES[(level - 1) as usize],
            weight: FontWeight::Bold,
            ..Self::body()
        }
    }
}

/// Merge an override onto a base style into a fully resolved record.
///
/// Every optional field falls back to the base; the resolved size is
/// clamped into the supported range. This is the single place style
/// defaults and clamping live.
pub fn resolve_style(base: &ResolvedStyle, overrides: Option<&StyleSpec>) -> ResolvedStyle {
    let spec = match overrides {
        Some(spec) => spec,
        None => return *base,
    };
    ResolvedStyle {
        font_size: fonts::clamp_font_size(spec.font_size.unwrap_or(base.font_size)),
        weight: spec.font_weight.unwrap_or(base.weight),
        slant: spec.font_style.unwrap_or(base.slant),
        align: spec.text_align.unwrap_or(base.align),
    }
}

/// Resolve a block's effective style.
///
/// Headings start from the level's default (scaled size, bold); an
/// explicit caller `font_size` wins over the heading size.
pub fn resolve_block_style(block: &TextBlock) -> ResolvedStyle {
    let base = match block.effective_heading_level() {
        Some(level) => ResolvedStyle::heading(level),
        None => ResolvedStyle::body(),
    };
    resolve_style(&base, block.style.as_ref())
}

/// One visually laid-out line on a page.
#[derive(Debug, Clone)]
pub struct ResolvedLine {
    /// The line's text (words joined by single spaces)
    pub text: String,
    /// x of the line start, in page coordinates
    pub x: f32,
    /// Baseline y, in page coordinates (origin bottom-left)
    pub y: f32,
    /// Resolved font
    pub font: &'static FontDescriptor,
    /// Font size in points
    pub size: f32,
    /// Extra spacing per inter-word gap (Tw), nonzero only for justified lines
    pub word_spacing: f32,
}

/// One page of positioned lines.
#[derive(Debug, Clone, Default)]
pub struct LaidOutPage {
    /// Lines in top-to-bottom order
    pub lines: Vec<ResolvedLine>,
}

/// Vertical flow state: accumulates lines and opens pages on overflow.
struct PageFlow<'g> {
    geometry: &'g PageGeometry,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    used: f32,
}

impl<'g> PageFlow<'g> {
    fn new(geometry: &'g PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: LaidOutPage::default(),
            used: 0.0,
        }
    }

    /// Reserve one line of the given height, breaking the page if the
    /// content area is exhausted. Returns the line's baseline y.
    fn advance(&mut self, line_height: f32, size: f32) -> f32 {
        if self.used + line_height > self.geometry.content_height() && self.used > 0.0 {
            let finished = std::mem::take(&mut self.current);
            self.pages.push(finished);
            self.used = 0.0;
        }
        self.used += line_height;
        // Baseline sits one em below the running top edge
        self.geometry.content_top() - self.used + (line_height - size)
    }

    fn push(&mut self, line: ResolvedLine) {
        self.current.lines.push(line);
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Lay out blocks into pages of positioned lines.
///
/// Rejects an empty block sequence; all other inputs are normalized.
pub fn layout(blocks: &[TextBlock], geometry: &PageGeometry) -> Result<Vec<LaidOutPage>> {
    if blocks.is_empty() {
        return Err(Error::InvalidInput(
            "document must contain at least one block".to_string(),
        ));
    }

    let mut flow = PageFlow::new(geometry);

    for block in blocks {
        let style = resolve_block_style(block);
        let font = fonts::resolve_font(style.weight, style.slant);
        let size = style.font_size;
        let line_height = font.line_height(size);

        let words: Vec<&str> = block.text.split_whitespace().collect();
        if words.is_empty() {
            // Blank block: advance the cursor by one line height so
            // paragraph spacing survives
            flow.advance(line_height, size);
            continue;
        }

        let wrapped = wrap_words(&words, font, size, geometry.content_width());
        let line_count = wrapped.len();

        for (i, words_in_line) in wrapped.into_iter().enumerate() {
            let is_last = i + 1 == line_count;
            let text = words_in_line.join(" ");
            let natural_width = font.text_width(&text, size);

            if natural_width > geometry.content_width() {
                log::warn!(
                    "word wider than content area ({:.1}pt > {:.1}pt), letting line overflow",
                    natural_width,
                    geometry.content_width()
                );
            }

            let (x, word_spacing) = place_line(
                style.align,
                natural_width,
                words_in_line.len(),
                is_last,
                geometry,
            );

            let y = flow.advance(line_height, size);
            flow.push(ResolvedLine {
                text,
                x,
                y,
                font,
                size,
                word_spacing,
            });
        }
    }

    Ok(flow.finish())
}

/// Greedy word wrap at whitespace boundaries.
///
/// A single word wider than the content width gets a line of its own
/// and is never split.
fn wrap_words<'a>(
    words: &[&'a str],
    font: &FontDescriptor,
    size: f32,
    content_width: f32,
) -> Vec<Vec<&'a str>> {
    let space_width = font.char_width(' ') * size / 1000.0;
    let mut lines: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0.0;

    for word in words {
        let word_width = font.text_width(word, size);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + space_width + word_width
        };

        if needed <= content_width || current.is_empty() {
            current.push(word);
            current_width = needed;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Compute a line's x origin and inter-word spacing for its alignment.
///
/// Standard justification tie-break: the paragraph's last line (and any
/// single-word line) stays left-aligned.
fn place_line(
    align: TextAlign,
    natural_width: f32,
    word_count: usize,
    is_last: bool,
    geometry: &PageGeometry,
) -> (f32, f32) {
    let left = geometry.content_left();
    let slack = (geometry.content_width() - natural_width).max(0.0);

    match align {
        TextAlign::Left => (left, 0.0),
        TextAlign::Right => (left + slack, 0.0),
        TextAlign::Center => (left + slack / 2.0, 0.0),
        TextAlign::Justify => {
            if is_last || word_count < 2 {
                (left, 0.0)
            } else {
                (left, slack / (word_count - 1) as f32)
            }
        },
    }
}
