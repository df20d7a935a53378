//! Service glyph — a rounded application box.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::GlyphDefinition;
use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Insets, Point, Size},
};

const GLYPH_SIZE: f32 = 56.0;

/// Rounded box with a title bar line, the generic application service glyph.
/// Content-free.
#[derive(Debug, Clone)]
pub struct ServiceDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl ServiceDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }
}

impl Default for ServiceDefinition {
    fn default() -> Self {
        Self {
            fill_color: Some(Color::new("aliceblue").expect("'aliceblue' is a valid CSS color")),
            stroke: Rc::new(StrokeDefinition::new(
                Color::new("steelblue").expect("'steelblue' is a valid CSS color"),
                1.5,
            )),
            text: Rc::new(TextDefinition::default()),
        }
    }
}

impl GlyphDefinition for ServiceDefinition {
    fn calculate_inner_size(&self, _content_size: Size, _padding: Insets) -> Size {
        Size::new(GLYPH_SIZE, GLYPH_SIZE * 0.8)
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
            .set("rx", 6.0)
            .set("fill", "white");
        if let Some(fill_color) = self.fill_color() {
            body = body
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }
        let body = crate::apply_stroke!(body, &self.stroke);
        group = group.add(body);

        // Title bar separator.
        let bar_y = bounds.min_y() + size.height() * 0.3;
        let bar = svg_element::Line::new()
            .set("x1", bounds.min_x())
            .set("y1", bar_y)
            .set("x2", bounds.max_x())
            .set("y2", bar_y);
        let bar = crate::apply_stroke!(bar, &self.stroke);
        group = group.add(bar);

        group.into()
    }
}
