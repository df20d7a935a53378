//! Cluster container glyph — a labeled bounding box around members.

use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::GlyphDefinition;
use crate::{
    color::Color,
    draw::{LabelPlacement, StrokeDefinition, TextDefinition},
    geometry::{Insets, Point, Size},
};

/// Rectangle that grows around its member nodes and nested containers.
/// The cluster label renders inside, at the top.
#[derive(Debug, Clone)]
pub struct ContainerDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl ContainerDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }
}

impl Default for ContainerDefinition {
    fn default() -> Self {
        let mut text = TextDefinition::default();
        text.set_font_size(14);
        text.set_color(Some(
            Color::new("dimgray").expect("'dimgray' is a valid CSS color"),
        ));

        Self {
            fill_color: Some(
                // Translucent so nested containers shade progressively.
                Color::new("gainsboro")
                    .expect("'gainsboro' is a valid CSS color")
                    .with_alpha(0.3),
            ),
            stroke: Rc::new(StrokeDefinition::new(
                Color::new("silver").expect("'silver' is a valid CSS color"),
                1.0,
            )),
            text: Rc::new(text),
        }
    }
}

impl GlyphDefinition for ContainerDefinition {
    fn supports_content(&self) -> bool {
        true
    }

    fn calculate_inner_size(&self, content_size: Size, padding: Insets) -> Size {
        let min_size = Size::new(40.0, 30.0);
        content_size.add_padding(padding).max(min_size)
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

    fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::InContainer
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let bounds = position.to_bounds(size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", 4.0)
            .set("fill", "none");

        if let Some(fill_color) = self.fill_color() {
            rect = rect
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }

        let rect = crate::apply_stroke!(rect, &self.stroke);
        rect.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_supports_content() {
        let definition = ContainerDefinition::new();
        assert!(definition.supports_content());
        assert_eq!(definition.label_placement(), LabelPlacement::InContainer);
    }

    #[test]
    fn test_inner_size_grows_with_content() {
        let definition = ContainerDefinition::new();
        let padding = Insets::uniform(20.0);

        let small = definition.calculate_inner_size(Size::new(10.0, 10.0), padding);
        let large = definition.calculate_inner_size(Size::new(300.0, 150.0), padding);

        assert!(large.width() > small.width());
        assert!(large.height() > small.height());
        assert_eq!(large, Size::new(340.0, 190.0));
    }

    #[test]
    fn test_inner_size_has_floor() {
        let definition = ContainerDefinition::new();
        let size = definition.calculate_inner_size(Size::default(), Insets::default());
        assert_eq!(size, Size::new(40.0, 30.0));
    }

    #[test]
    fn test_set_fill_color_is_supported() {
        let mut definition = ContainerDefinition::new();
        assert!(definition.set_fill_color(None).is_ok());
        assert!(definition.fill_color().is_none());
    }
}
