//! Queue glyph — a slatted message box.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::GlyphDefinition;
use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Insets, Point, Size},
};

const GLYPH_WIDTH: f32 = 60.0;
const GLYPH_HEIGHT: f32 = 40.0;
const SLAT_COUNT: usize = 3;

/// Wide box with vertical slats suggesting queued messages. Content-free.
#[derive(Debug, Clone)]
pub struct QueueDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl QueueDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }
}

impl Default for QueueDefinition {
    fn default() -> Self {
        Self {
            fill_color: Some(Color::new("mistyrose").expect("'mistyrose' is a valid CSS color")),
            stroke: Rc::new(StrokeDefinition::new(
                Color::new("indianred").expect("'indianred' is a valid CSS color"),
                1.5,
            )),
            text: Rc::new(TextDefinition::default()),
        }
    }
}

impl GlyphDefinition for QueueDefinition {
    fn calculate_inner_size(&self, _content_size: Size, _padding: Insets) -> Size {
        Size::new(GLYPH_WIDTH, GLYPH_HEIGHT)
    }

    fn clone_box(&self) -> Box<dyn GlyphDefinition> {
        Box::new(self.clone())
    }

    fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    fn text(&self) -> &Rc<TextDefinition> {
        &self.text
    }

    fn set_fill_color(&mut self, color: Option<Color>) -> Result<(), &'static str> {
        self.fill_color = color;
        Ok(())
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let bounds = position.to_bounds(size);

        let mut group = svg_element::Group::new();

        let mut body = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", 4.0)
            .set("fill", "white");
        if let Some(fill_color) = self.fill_color() {
            body = body
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }
        let body = crate::apply_stroke!(body, &self.stroke);
        group = group.add(body);

        // Slats over the left portion; the empty right side reads as the
        // head of the queue.
        let slat_spacing = size.width() / (SLAT_COUNT as f32 + 2.0);
        let slat_top = bounds.min_y() + size.height() * 0.2;
        let slat_bottom = bounds.max_y() - size.height() * 0.2;

        for i in 1..=SLAT_COUNT {
            let x = bounds.min_x() + slat_spacing * i as f32;
            let slat = svg_element::Line::new()
                .set("x1", x)
                .set("y1", slat_top)
                .set("x2", x)
                .set("y2", slat_bottom);
            let slat = crate::apply_stroke!(slat, &self.stroke);
            group = group.add(slat);
        }

        group.into()
    }
}
