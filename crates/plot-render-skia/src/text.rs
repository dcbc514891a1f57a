// File: crates/plot-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; measures and paints single-line labels.

use plot_core::{TextSize, TextStyle};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextDecoration};
use skia_safe as skia;

/// Base pixel size of text drawn with size multiplier 1.0.
pub const BASE_FONT_SIZE: f32 = 12.0;

const FONT_FAMILIES: &[&str] = &["Arial", "Segoe UI", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, style: TextStyle) -> skia::textlayout::TextStyle {
        let mut ts = skia::textlayout::TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(FONT_FAMILIES);
        let font_style = match (style.bold, style.italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        };
        ts.set_font_style(font_style);

        let mut decoration = TextDecoration::NO_DECORATION;
        if style.underline {
            decoration |= TextDecoration::UNDERLINE;
        }
        if style.strikeout {
            decoration |= TextDecoration::LINE_THROUGH;
        }
        ts.set_decoration_type(decoration);
        ts.set_decoration_color(color);
        ts
    }

    /// Single-line paragraph laid out without wrapping.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, style: TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32, style: TextStyle) -> TextSize {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), style);
        TextSize { width: p.longest_line(), height: p.height() }
    }
}
