//! Function glyph — a hexagon for event-triggered compute.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::GlyphDefinition;
use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Insets, Point, Size},
};

const GLYPH_SIZE: f32 = 56.0;

/// Hexagon glyph for short-lived functions and workers. Content-free.
#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl FunctionDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }
}

impl Default for FunctionDefinition {
    fn default() -> Self {
        Self {
            fill_color: Some(
                Color::new("lemonchiffon").expect("'lemonchiffon' is a valid CSS color"),
            ),
            stroke: Rc::new(StrokeDefinition::new(
                Color::new("darkgoldenrod").expect("'darkgoldenrod' is a valid CSS color"),
                1.5,
            )),
            text: Rc::new(TextDefinition::default()),
        }
    }
}

impl GlyphDefinition for FunctionDefinition {
    fn calculate_inner_size(&self, _content_size: Size, _padding: Insets) -> Size {
        Size::new(GLYPH_SIZE, GLYPH_SIZE * 0.88)
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
        let half_w = size.width() / 2.0;
        let half_h = size.height() / 2.0;
        // Flat-top hexagon: the top and bottom edges span half the width.
        let inset = half_w / 2.0;

        let points = format!(
            "{},{} {},{} {},{} {},{} {},{} {},{}",
            position.x() - inset,
            position.y() - half_h,
            position.x() + inset,
            position.y() - half_h,
            position.x() + half_w,
            position.y(),
            position.x() + inset,
            position.y() + half_h,
            position.x() - inset,
            position.y() + half_h,
            position.x() - half_w,
            position.y(),
        );

        let mut hexagon = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", "white");
        if let Some(fill_color) = self.fill_color() {
            hexagon = hexagon
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }
        let hexagon = crate::apply_stroke!(hexagon, &self.stroke);

        hexagon.into()
    }
}
