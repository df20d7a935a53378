//! Edge connector drawables and SVG arrowhead marker generation.
//!
//! Every edge in a Cumulus graph is directed, so every connector carries an
//! arrowhead at its destination end. Markers are shared per stroke color and
//! emitted once into the document's `<defs>`.

use std::{collections::BTreeMap, rc::Rc};

use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::Point,
};

/// Visual properties of a connector: stroke (color, width, dash pattern) and
/// the text style of its label.
#[derive(Debug, Clone)]
pub struct ConnectorDefinition {
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl ConnectorDefinition {
    /// Creates a definition with the given stroke and a default label style.
    pub fn new(stroke: Rc<StrokeDefinition>) -> Self {
        Self {
            stroke,
            text: Rc::new(TextDefinition::default()),
        }
    }

    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    pub fn text(&self) -> &Rc<TextDefinition> {
        &self.text
    }

    pub fn set_text(&mut self, text: Rc<TextDefinition>) {
        self.text = text;
    }

    pub fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }
}

impl Default for ConnectorDefinition {
    fn default() -> Self {
        Self {
            stroke: Rc::new(StrokeDefinition::default()),
            text: Rc::new(TextDefinition::default()),
        }
    }
}

/// A drawable directed connector.
#[derive(Debug, Clone)]
pub struct Connector {
    definition: Rc<ConnectorDefinition>,
}

/// Collects connector colors while drawing, so the needed arrowhead markers
/// can be emitted once as SVG `<defs>`.
///
/// Keyed with a `BTreeMap` so marker definitions serialize in a stable
/// order; repeated renders of the same graph must be byte-identical.
#[derive(Debug, Default)]
pub struct ConnectorDrawer {
    heads: BTreeMap<String, Color>,
}

impl ConnectorDrawer {
    /// Draws a connector and records its arrowhead color.
    pub fn draw_connector(
        &mut self,
        connector: &Connector,
        source: Point,
        destination: Point,
    ) -> Box<dyn svg::Node> {
        let color = connector.definition.stroke().color();
        self.heads.insert(Connector::marker_id(color), color);
        connector.render_to_svg(source, destination)
    }

    /// Emits marker definitions for every color drawn so far.
    pub fn draw_marker_definitions(&self) -> Box<dyn svg::Node> {
        let mut defs = svg_element::Definitions::new();
        for color in self.heads.values() {
            defs = defs.add(Connector::create_arrowhead(*color));
        }
        defs.into()
    }
}

impl Connector {
    pub fn new(definition: Rc<ConnectorDefinition>) -> Self {
        Self { definition }
    }

    fn render_to_svg(&self, source: Point, destination: Point) -> Box<dyn svg::Node> {
        let path_data = Self::path_data(source, destination);
        let color = self.definition.stroke().color();

        let path = svg_element::Path::new()
            .set("d", path_data)
            .set("fill", "none");

        let path = crate::apply_stroke!(path, self.definition.stroke());
        let path = path.set("marker-end", format!("url(#{})", Self::marker_id(color)));

        Box::new(path)
    }

    fn marker_id(color: Color) -> String {
        format!("arrowhead-{}", color.to_id_safe_string())
    }

    /// Straight line path between the two trimmed endpoints.
    pub fn path_data(start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    fn create_arrowhead(color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", Self::marker_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            )
    }
}
