//! SVG document assembly for a laid-out scene.

use std::rc::Rc;

use log::debug;
use svg::{Document, node::element as svg_element};

use cumulus_core::{
    color::Color,
    draw::{
        Connector, ConnectorDrawer, ConnectorWithLabel, Drawable, LayeredOutput, Text,
        TextDefinition,
    },
    geometry::{Point, Size},
};

use crate::{export::Error, graph::Graph, layout::Scene};

const MARGIN: f32 = 24.0;
const TITLE_GAP: f32 = 16.0;

/// Renders a [`Scene`] into an SVG [`Document`].
pub struct SvgRenderer {
    background: Option<Color>,
    title_definition: TextDefinition,
}

impl SvgRenderer {
    /// Creates a renderer; `background` overrides the default white fill.
    pub fn new(background: Option<Color>) -> Self {
        let mut title_definition = TextDefinition::default();
        title_definition.set_font_size(18);
        title_definition.set_color(Some(
            Color::new("darkslategray").expect("'darkslategray' is a valid CSS color"),
        ));

        Self {
            background,
            title_definition,
        }
    }

    /// Assembles the complete document: background, title heading, cluster
    /// containers (outermost first), node glyphs, and globally routed edges
    /// trimmed to glyph boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if an edge references a node missing from
    /// the scene.
    pub fn render_document(&self, graph: &Graph, scene: &Scene) -> Result<Document, Error> {
        let content_bounds = scene.bounds();
        let content_size = content_bounds.to_size();

        let title = (!graph.title().is_empty())
            .then(|| Text::new(&self.title_definition, graph.title()));
        let title_size = title
            .as_ref()
            .map(|t| t.size())
            .unwrap_or_else(Size::default);
        let title_block = if title.is_some() {
            title_size.height() + TITLE_GAP
        } else {
            0.0
        };

        let doc_width = content_size.width().max(title_size.width()) + 2.0 * MARGIN;
        let doc_height = content_size.height() + title_block + 2.0 * MARGIN;

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {doc_width} {doc_height}"))
            .set("width", doc_width)
            .set("height", doc_height);

        // Background fill, white unless configured otherwise.
        let background = self
            .background
            .unwrap_or_else(|| Color::new("white").expect("'white' is a valid CSS color"));
        let background_rect = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", doc_width)
            .set("height", doc_height)
            .set("fill", background.to_string())
            .set("fill-opacity", background.alpha());
        doc = doc.add(background_rect);

        // Scene content: containers below glyphs below connectors below text.
        let mut output = LayeredOutput::new();

        for container in scene.containers() {
            output.merge(container.drawable().render_to_layers());
        }

        for (_, node) in scene.nodes() {
            output.merge(node.render_to_layers());
        }

        let mut drawer = ConnectorDrawer::default();
        for edge in graph.edges() {
            let source = scene.node(edge.source()).ok_or_else(|| {
                Error::Encode(format!("edge source `{}` was never placed", edge.source()))
            })?;
            let target = scene.node(edge.target()).ok_or_else(|| {
                Error::Encode(format!("edge target `{}` was never placed", edge.target()))
            })?;

            // Trim the connector to the glyph boundaries on both ends.
            let source_point = source
                .inner()
                .find_intersection(source.position(), target.position());
            let target_point = target
                .inner()
                .find_intersection(target.position(), source.position());

            let connector = Connector::new(Rc::clone(edge.connector_definition()));
            let with_label = ConnectorWithLabel::new(connector, edge.text());
            output.merge(with_label.render_to_layers(&mut drawer, source_point, target_point));
        }

        // Arrowhead marker definitions shared by all connectors.
        doc = doc.add(drawer.draw_marker_definitions());

        // Center the content horizontally and leave room for the title.
        let margin_x = (doc_width - content_size.width()) / 2.0;
        let mut main_group = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                margin_x - content_bounds.min_x(),
                MARGIN + title_block - content_bounds.min_y()
            ),
        );
        for node in output.render() {
            main_group = main_group.add(node);
        }
        doc = doc.add(main_group);

        if let Some(title) = title {
            let title_position =
                Point::new(doc_width / 2.0, MARGIN + title_size.height() / 2.0);
            for node in title.render_to_layers(title_position).render() {
                doc = doc.add(node);
            }
        }

        debug!(width = doc_width, height = doc_height; "SVG document assembled");
        Ok(doc)
    }
}
