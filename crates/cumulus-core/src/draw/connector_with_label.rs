//! Connector-with-label composite drawable.

use crate::{
    draw::{Connector, ConnectorDrawer, Drawable, LayeredOutput, RenderLayer, Text},
    geometry::Point,
};

/// A connector with an optional label at the midpoint of the line.
#[derive(Debug, Clone)]
pub struct ConnectorWithLabel<'a> {
    connector: Connector,
    label: Option<Text<'a>>,
}

impl<'a> ConnectorWithLabel<'a> {
    pub fn new(connector: Connector, label: Option<Text<'a>>) -> Self {
        Self { connector, label }
    }

    fn label_position(&self, source: Point, destination: Point) -> Point {
        source.midpoint(destination)
    }

    /// Renders the connector line, its arrowhead reference, and the label.
    pub fn render_to_layers(
        &self,
        drawer: &mut ConnectorDrawer,
        source: Point,
        destination: Point,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let rendered = drawer.draw_connector(&self.connector, source, destination);
        output.add_to_layer(RenderLayer::Connector, rendered);

        if let Some(label) = &self.label {
            let position = self.label_position(source, destination);
            output.merge(label.render_to_layers(position));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{
        color::Color,
        draw::{ConnectorDefinition, StrokeDefinition, TextDefinition},
    };

    fn test_connector() -> Connector {
        let stroke = Rc::new(StrokeDefinition::new(Color::default(), 1.5));
        Connector::new(Rc::new(ConnectorDefinition::new(stroke)))
    }

    #[test]
    fn test_label_at_midpoint() {
        let text_def = TextDefinition::default();
        let with_label =
            ConnectorWithLabel::new(test_connector(), Some(Text::new(&text_def, "poll")));

        let position = with_label.label_position(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        assert_eq!(position, Point::new(50.0, 25.0));
    }

    #[test]
    fn test_render_with_label_has_connector_and_text_layers() {
        let mut drawer = ConnectorDrawer::default();
        let text_def = TextDefinition::default();
        let with_label =
            ConnectorWithLabel::new(test_connector(), Some(Text::new(&text_def, "send")));

        let output =
            with_label.render_to_layers(&mut drawer, Point::new(0.0, 0.0), Point::new(80.0, 0.0));
        let groups = output.render();
        assert!(groups.len() >= 2, "expected connector and text groups");
    }

    #[test]
    fn test_render_without_label_still_draws_connector() {
        let mut drawer = ConnectorDrawer::default();
        let plain = ConnectorWithLabel::new(test_connector(), None);

        let output =
            plain.render_to_layers(&mut drawer, Point::new(0.0, 0.0), Point::new(80.0, 0.0));
        assert!(!output.is_empty());
    }
}
