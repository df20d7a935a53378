//! Database glyph — a storage cylinder.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::GlyphDefinition;
use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Insets, Point, Size},
};

const GLYPH_SIZE: f32 = 52.0;

/// Cylinder glyph for databases and tables. Content-free.
#[derive(Debug, Clone)]
pub struct DatabaseDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl DatabaseDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }
}

impl Default for DatabaseDefinition {
    fn default() -> Self {
        Self {
            fill_color: Some(
                Color::new("lightsteelblue").expect("'lightsteelblue' is a valid CSS color"),
            ),
            stroke: Rc::new(StrokeDefinition::new(
                Color::new("steelblue").expect("'steelblue' is a valid CSS color"),
                1.5,
            )),
            text: Rc::new(TextDefinition::default()),
        }
    }
}

impl GlyphDefinition for DatabaseDefinition {
    fn calculate_inner_size(&self, _content_size: Size, _padding: Insets) -> Size {
        Size::new(GLYPH_SIZE, GLYPH_SIZE * 1.1)
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
        let rx = size.width() / 2.0;
        // Vertical radius of the cylinder caps.
        let ry = size.height() * 0.14;

        let top_y = bounds.min_y() + ry;
        let bottom_y = bounds.max_y() - ry;

        let mut group = svg_element::Group::new();

        // Body: straight sides closed by the bottom cap arc.
        let body_path = format!(
            "M {} {} L {} {} A {} {} 0 0 0 {} {} L {} {} A {} {} 0 0 0 {} {} Z",
            bounds.min_x(),
            top_y,
            bounds.min_x(),
            bottom_y,
            rx,
            ry,
            bounds.max_x(),
            bottom_y,
            bounds.max_x(),
            top_y,
            rx,
            ry,
            bounds.min_x(),
            top_y,
        );

        let mut body = svg_element::Path::new()
            .set("d", body_path)
            .set("fill", "white");
        if let Some(fill_color) = self.fill_color() {
            body = body
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }
        let body = crate::apply_stroke!(body, &self.stroke);
        group = group.add(body);

        // Top cap drawn on top of the body.
        let mut cap = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", top_y)
            .set("rx", rx)
            .set("ry", ry)
            .set("fill", "white");
        if let Some(fill_color) = self.fill_color() {
            cap = cap
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }
        let cap = crate::apply_stroke!(cap, &self.stroke);
        group = group.add(cap);

        group.into()
    }
}
