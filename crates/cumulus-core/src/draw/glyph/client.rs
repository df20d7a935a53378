//! Client glyph — a person figure for end users and external clients.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::GlyphDefinition;
use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Insets, Point, Size},
};

const GLYPH_SIZE: f32 = 52.0;

/// Person glyph: a head circle above a shoulders arc. Content-free.
#[derive(Debug, Clone)]
pub struct ClientDefinition {
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl ClientDefinition {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ClientDefinition {
    fn default() -> Self {
        Self {
            stroke: Rc::new(StrokeDefinition::new(
                Color::new("darkslategray").expect("'darkslategray' is a valid CSS color"),
                1.5,
            )),
            text: Rc::new(TextDefinition::default()),
        }
    }
}

impl GlyphDefinition for ClientDefinition {
    fn calculate_inner_size(&self, _content_size: Size, _padding: Insets) -> Size {
        Size::new(GLYPH_SIZE, GLYPH_SIZE)
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

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let head_radius = size.height() * 0.18;
        let head_center_y = position.y() - size.height() * 0.22;

        let mut group = svg_element::Group::new();

        let head = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", head_center_y)
            .set("r", head_radius)
            .set("fill", "white");
        let head = crate::apply_stroke!(head, &self.stroke);
        group = group.add(head);

        // Shoulders: a wide arc closing onto the baseline.
        let shoulder_half_width = size.width() * 0.32;
        let baseline_y = position.y() + size.height() * 0.38;
        let torso_top_y = head_center_y + head_radius + size.height() * 0.06;

        let body_path = format!(
            "M {} {} C {} {}, {} {}, {} {} L {} {} Z",
            position.x() - shoulder_half_width,
            baseline_y,
            position.x() - shoulder_half_width,
            torso_top_y,
            position.x() + shoulder_half_width,
            torso_top_y,
            position.x() + shoulder_half_width,
            baseline_y,
            position.x() - shoulder_half_width,
            baseline_y,
        );

        let body = svg_element::Path::new()
            .set("d", body_path)
            .set("fill", "white");
        let body = crate::apply_stroke!(body, &self.stroke);
        group = group.add(body);

        group.into()
    }
}
