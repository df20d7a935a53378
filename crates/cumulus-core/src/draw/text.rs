//! Text labels for nodes, clusters, edges, and the diagram title.
//!
//! Label sizing uses real font metrics via `cosmic-text` shaping, so layout
//! spacing reacts to actual label widths (including multi-line labels, which
//! the declaration API allows via embedded `\n`). Rendering emits an SVG
//! `<text>` element with one `<tspan>` per line and an optional background
//! pill used for edge labels so connectors do not strike through the text.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::debug;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Insets, Point, Size},
};

/// Visual style shared by a family of text labels.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `13` |
/// | Background color | `None` |
/// | Text color | `None` (SVG default) |
/// | Padding | zero |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    background_color: Option<Color>,
    color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Renders a rounded background rectangle behind the text when set.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Padding between the text and its background edges; counted into the
    /// measured size even without a background.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 13,
            background_color: None,
            color: None,
            padding: Insets::default(),
        }
    }
}

/// A measurable, renderable piece of text: content plus a [`TextDefinition`].
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        let padding = self.definition.padding();
        self.calculate_size_without_padding().add_padding(padding)
    }

    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MEASURER
            .get_or_init(TextMeasurer::new)
            .measure(self.content, self.definition)
    }
}

impl<'a> Drawable for Text<'a> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let text_size = self.calculate_size();
        let padding = self.definition.padding();

        let lines: Vec<&str> = self.content.lines().collect();

        let size_without_padding = self.calculate_size_without_padding();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            size_without_padding.height() / lines.len() as f32
        };

        let total_height = size_without_padding.height();
        let y_offset = -(total_height + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        if let Some(bg_color) = self.definition.background_color() {
            let bg_bounds = position.to_bounds(text_size).add_padding(padding);
            let bg_size = bg_bounds.to_size();
            let bg_min_point = bg_bounds.min_point();

            let bg = svg_element::Rectangle::new()
                .set("x", bg_min_point.x())
                .set("y", bg_min_point.y())
                .set("width", bg_size.width())
                .set("height", bg_size.height())
                .set("fill", bg_color.to_string())
                .set("fill-opacity", bg_color.alpha())
                .set("rx", 3.0);

            output.add_to_layer(RenderLayer::Background, Box::new(bg));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Shared font system for text measurement.
///
/// `FontSystem` construction scans system fonts, so one instance is kept for
/// the whole process.
struct TextMeasurer {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextMeasurer {
    fn new() -> Self {
        debug!("Initializing FontSystem for label measurement");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Measures `text` in pixels using shaped font metrics.
    fn measure(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Points to pixels at standard DPI.
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        } else {
            // No shaping result (e.g. no fonts installed); estimate.
            max_width = text.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MEASURER: OnceLock<TextMeasurer> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 13);
        assert_eq!(def.font_family(), "sans-serif");
        assert!(def.background_color().is_none());
        assert!(def.color().is_none());
        assert_approx_eq!(f32, def.padding().horizontal_sum(), 0.0);
    }

    #[test]
    fn test_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(18);
        def.set_font_family("monospace");
        def.set_color(Some(Color::new("navy").unwrap()));
        def.set_background_color(Some(Color::new("white").unwrap()));
        def.set_padding(Insets::uniform(4.0));

        assert_eq!(def.font_size(), 18);
        assert_eq!(def.font_family(), "monospace");
        assert!(def.color().is_some());
        assert!(def.background_color().is_some());
        assert_approx_eq!(f32, def.padding().top(), 4.0);
    }

    #[test]
    fn test_empty_text_has_zero_size() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "");
        assert_eq!(text.calculate_size(), Size::default());
    }

    #[test]
    fn test_single_line_size_is_positive() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "API Gateway");
        let size = text.calculate_size();
        assert!(size.width() > 0.0);
        assert!(size.height() > 0.0);
    }

    #[test]
    fn test_multiline_is_taller() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "Poller");
        let multi = Text::new(&def, "Poller\n(1min schedule)");

        assert!(multi.calculate_size().height() > single.calculate_size().height());
    }

    #[test]
    fn test_size_includes_padding() {
        let mut padded_def = TextDefinition::new();
        padded_def.set_padding(Insets::uniform(10.0));
        let plain_def = TextDefinition::new();

        let padded = Text::new(&padded_def, "Queue").calculate_size();
        let plain = Text::new(&plain_def, "Queue").calculate_size();

        assert_approx_eq!(f32, padded.width() - plain.width(), 20.0);
        assert_approx_eq!(f32, padded.height() - plain.height(), 20.0);
    }

    #[test]
    fn test_larger_font_is_larger() {
        let mut small_def = TextDefinition::new();
        small_def.set_font_size(10);
        let mut large_def = TextDefinition::new();
        large_def.set_font_size(22);

        let small = Text::new(&small_def, "Label").calculate_size();
        let large = Text::new(&large_def, "Label").calculate_size();

        assert!(large.height() > small.height());
    }

    #[test]
    fn test_render_to_layers_has_text_layer() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "Students");
        let output = text.render_to_layers(Point::new(10.0, 10.0));
        assert!(!output.is_empty());
    }

    #[test]
    fn test_render_with_background_adds_layer() {
        let mut def = TextDefinition::new();
        def.set_background_color(Some(Color::new("white").unwrap()));
        let text = Text::new(&def, "send");
        let rendered = text.render_to_layers(Point::default()).render();
        assert!(
            rendered.len() >= 2,
            "expected background and text layer groups, got {}",
            rendered.len()
        );
    }

    #[test]
    fn test_content_accessor() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "read/write STATE");
        assert_eq!(text.content(), "read/write STATE");
    }
}
