//! Layered z-ordering for SVG output.
//!
//! Drawables emit into a [`LayeredOutput`] instead of writing directly into
//! the document, so cluster containers always sit beneath node glyphs, and
//! connectors beneath their labels, no matter in which order the scene is
//! walked.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
///
/// The `Ord` derive follows declaration order; the first variant renders
/// first (bottom-most).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Diagram background and label background pills.
    Background,
    /// Cluster container boxes, outermost first.
    Container,
    /// Node glyphs.
    Content,
    /// Edge connectors.
    Connector,
    /// Text labels.
    Text,
}

impl RenderLayer {
    /// Human-readable layer name, emitted as a `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Container => "container",
            Self::Content => "content",
            Self::Connector => "connector",
            Self::Text => "text",
        }
    }
}

/// SVG nodes collected per rendering layer.
///
/// # Example
///
/// ```
/// # use cumulus_core::draw::{RenderLayer, LayeredOutput};
/// # use svg::node::element::Rectangle;
/// let mut output = LayeredOutput::new();
/// output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
/// output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
///
/// let groups = output.render();
/// assert_eq!(groups.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the given layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes of `other`, preserving their layers.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes one `<g data-layer="...">` element.
    /// Sorting is stable, so nodes within a layer keep insertion order —
    /// this is what makes repeated renders byte-identical.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);
        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_new_is_empty() {
        assert!(LayeredOutput::new().is_empty());
    }

    #[test]
    fn test_add_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        assert!(!output.is_empty());
    }

    #[test]
    fn test_merge_distinct_layers() {
        let mut a = LayeredOutput::new();
        a.add_to_layer(RenderLayer::Container, Box::new(Rectangle::new()));

        let mut b = LayeredOutput::new();
        b.add_to_layer(RenderLayer::Connector, Box::new(Rectangle::new()));

        a.merge(b);
        assert_eq!(a.render().len(), 2);
    }

    #[test]
    fn test_merge_same_layer_collapses_to_one_group() {
        let mut a = LayeredOutput::new();
        a.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let mut b = LayeredOutput::new();
        b.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        a.merge(b);
        assert_eq!(a.render().len(), 1);
    }

    #[test]
    fn test_render_orders_layers_bottom_up() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let groups = output.render();
        assert_eq!(groups.len(), 3);

        let serialized: Vec<String> = groups.iter().map(|node| node.to_string()).collect();
        assert!(serialized[0].contains("data-layer=\"background\""));
        assert!(serialized[1].contains("data-layer=\"content\""));
        assert!(serialized[2].contains("data-layer=\"text\""));
    }

    #[test]
    fn test_container_renders_below_content() {
        assert!(RenderLayer::Container < RenderLayer::Content);
        assert!(RenderLayer::Content < RenderLayer::Connector);
        assert!(RenderLayer::Connector < RenderLayer::Text);
    }
}
