//! Layout behavior through the public surface.
//!
//! Blocks come in as JSON the way the web layer sends them, get laid
//! out, and the resulting line positions are checked directly.

use pdf_typeset::elements::{StyleSpec, TextAlign, TextBlock};
use pdf_typeset::fonts::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use pdf_typeset::layout::{self, resolve_block_style, HEADING_SIZES};
use pdf_typeset::{FontWeight, PageGeometry};
use proptest::prelude::*;

fn geom() -> PageGeometry {
    PageGeometry::a4()
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn justified_lines_fill_the_content_width() {
    let g = geom();
    let text = "sözleşme maddeleri taraflarca okunup kabul edilmiştir ".repeat(12);
    let block =
        TextBlock::paragraph(text).with_style(StyleSpec::default().align(TextAlign::Justify));
    let pages = layout::layout(&[block], &g).unwrap();
    let lines = &pages[0].lines;
    assert!(lines.len() >= 3);

    for line in &lines[..lines.len() - 1] {
        assert!(line.word_spacing > 0.0);
        let gaps = line.text.matches(' ').count() as f32;
        let filled = line.font.text_width(&line.text, line.size) + line.word_spacing * gaps;
        assert!((filled - g.content_width()).abs() < 0.05);
    }

    let last = lines.last().unwrap();
    assert_eq!(last.word_spacing, 0.0);
    assert!((last.x - g.content_left()).abs() < 0.01);
}

#[test]
fn single_word_justified_line_stays_left() {
    let g = geom();
    let block =
        TextBlock::paragraph("kelime").with_style(StyleSpec::default().align(TextAlign::Justify));
    let pages = layout::layout(&[block], &g).unwrap();
    let line = &pages[0].lines[0];
    assert_eq!(line.word_spacing, 0.0);
    assert!((line.x - g.content_left()).abs() < 0.01);
}

#[test]
fn alignment_changes_x_not_text() {
    let g = geom();
    let text = "hizalama denemesi";
    let mut xs = Vec::new();
    for align in [TextAlign::Left, TextAlign::Center, TextAlign::Right] {
        let block = TextBlock::paragraph(text).with_style(StyleSpec::default().align(align));
        let pages = layout::layout(&[block], &g).unwrap();
        let line = &pages[0].lines[0];
        assert_eq!(line.text, text);
        xs.push(line.x);
    }
    assert!(xs[0] < xs[1] && xs[1] < xs[2]);
}

// ============================================================================
// Headings
// ============================================================================

#[test]
fn heading_levels_scale_down() {
    let sizes: Vec<f32> = (1..=3)
        .map(|level| resolve_block_style(&TextBlock::heading(level, "b")).font_size)
        .collect();
    assert_eq!(sizes, HEADING_SIZES.to_vec());
    assert!(sizes[0] > sizes[1] && sizes[1] > sizes[2]);
}

#[test]
fn headings_default_bold_and_explicit_size_wins() {
    let styled = TextBlock::heading(1, "b").with_style(StyleSpec::sized(12.0));
    let style = resolve_block_style(&styled);
    assert_eq!(style.font_size, 12.0);
    assert_eq!(style.weight, FontWeight::Bold);
}

#[test]
fn heading_weight_override_applies() {
    let block =
        TextBlock::heading(2, "b").with_style(StyleSpec::default().weight(FontWeight::Normal));
    let style = resolve_block_style(&block);
    assert_eq!(style.weight, FontWeight::Normal);
    assert_eq!(style.font_size, HEADING_SIZES[1]);
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn every_line_stays_inside_the_content_area() {
    let g = geom();
    let blocks: Vec<TextBlock> = (0..150)
        .map(|i| TextBlock::paragraph(format!("madde {} uyarınca taraflar yükümlüdür", i)))
        .collect();
    let pages = layout::layout(&blocks, &g).unwrap();
    assert!(pages.len() > 1);
    for page in &pages {
        assert!(!page.lines.is_empty());
        for line in &page.lines {
            assert!(line.y >= g.content_bottom() - 0.01);
            assert!(line.y <= g.content_top());
            assert!(line.x >= g.content_left() - 0.01);
        }
    }
}

#[test]
fn block_order_is_preserved_across_pages() {
    let blocks: Vec<TextBlock> = (0..120)
        .map(|i| TextBlock::paragraph(format!("sıra{}", i)))
        .collect();
    let pages = layout::layout(&blocks, &geom()).unwrap();
    let all: Vec<&str> = pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|l| l.text.as_str()))
        .collect();
    let expected: Vec<String> = (0..120).map(|i| format!("sıra{}", i)).collect();
    assert_eq!(all, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

// ============================================================================
// Lenient JSON input
// ============================================================================

#[test]
fn malformed_json_styles_normalize_to_defaults() {
    let json = r#"[
        {"text": "a", "style": {"fontWeight": "extra-bold", "textAlign": "top"}},
        {"text": "b", "isHeading": true, "headingLevel": 7}
    ]"#;
    let blocks: Vec<TextBlock> = serde_json::from_str(json).unwrap();

    let first = resolve_block_style(&blocks[0]);
    assert_eq!(first.weight, FontWeight::Normal);
    assert_eq!(first.align, TextAlign::Left);

    let second = resolve_block_style(&blocks[1]);
    assert_eq!(second.font_size, HEADING_SIZES[2]);
}

#[test]
fn infinite_sizes_clamp_to_the_nearest_bound() {
    let huge = TextBlock::paragraph("x").with_style(StyleSpec::sized(f32::INFINITY));
    assert_eq!(resolve_block_style(&huge).font_size, MAX_FONT_SIZE);
    let tiny = TextBlock::paragraph("x").with_style(StyleSpec::sized(f32::NEG_INFINITY));
    assert_eq!(resolve_block_style(&tiny).font_size, MIN_FONT_SIZE);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn resolved_size_always_inside_supported_range(size in prop::num::f32::ANY) {
        let block = TextBlock::paragraph("x").with_style(StyleSpec::sized(size));
        let resolved = resolve_block_style(&block).font_size;
        if size.is_nan() {
            prop_assert_eq!(resolved, DEFAULT_FONT_SIZE);
        } else {
            prop_assert_eq!(resolved, size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE));
        }
    }

    #[test]
    fn wrapped_lines_never_exceed_content_width(words in prop::collection::vec("[a-zğüşıöç]{1,12}", 1..80)) {
        let g = geom();
        let text = words.join(" ");
        let pages = layout::layout(&[TextBlock::paragraph(text)], &g).unwrap();
        for page in &pages {
            for line in &page.lines {
                let width = line.font.text_width(&line.text, line.size);
                prop_assert!(width <= g.content_width() + 0.01);
            }
        }
    }
}
