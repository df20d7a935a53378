//! The frozen semantic model: nodes, clusters, edges, and the graph.
//!
//! A [`Graph`] is produced once by [`GraphBuilder`](crate::builder::GraphBuilder)
//! and is read-only from then on — the layout and export stages only borrow
//! it. All collections preserve declaration order so that rendering the same
//! declaration twice yields identical output.

use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use indexmap::IndexMap;

use cumulus_core::{
    color::Color,
    draw::{
        Category, ConnectorDefinition, GlyphDefinition, StrokeDefinition, StrokeStyle, Text,
        TextDefinition, glyph::ContainerDefinition,
    },
    geometry::Insets,
    identifier::Id,
};

use crate::{layout::Direction, render::OutputFormat};

/// Index of a cluster within the graph's cluster list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterId(pub(crate) usize);

/// Opaque handle to a declared node, usable as an edge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) id: Id,
}

impl NodeRef {
    /// The node's identity (cluster path + label).
    pub fn id(&self) -> Id {
        self.id
    }
}

/// Opaque handle to an opened cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterRef {
    pub(crate) id: ClusterId,
}

/// A single diagram node: one drawn system component.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    category: Category,
    cluster: Option<ClusterId>,
    glyph_definition: Rc<Box<dyn GlyphDefinition>>,
}

impl Node {
    pub(crate) fn new(id: Id, label: String, category: Category, cluster: Option<ClusterId>) -> Self {
        let glyph_definition = category.definition();
        Self {
            id,
            label,
            category,
            cluster,
            glyph_definition,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// The display label (without the cluster path qualification).
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The directly containing cluster, or `None` at the root.
    pub fn cluster(&self) -> Option<ClusterId> {
        self.cluster
    }

    /// The glyph this node is drawn with, resolved from its category.
    pub fn glyph_definition(&self) -> &Rc<Box<dyn GlyphDefinition>> {
        &self.glyph_definition
    }
}

/// A named, nestable grouping of nodes and sub-clusters.
#[derive(Debug, Clone)]
pub struct Cluster {
    label: String,
    parent: Option<ClusterId>,
    nodes: Vec<Id>,
    children: Vec<ClusterId>,
    sealed: bool,
    container_definition: Rc<Box<dyn GlyphDefinition>>,
}

impl Cluster {
    pub(crate) fn new(label: String, parent: Option<ClusterId>) -> Self {
        let container_definition: Rc<Box<dyn GlyphDefinition>> =
            Rc::new(Box::new(ContainerDefinition::new()));
        Self {
            label,
            parent,
            nodes: Vec::new(),
            children: Vec::new(),
            sealed: false,
            container_definition,
        }
    }

    /// The container box this cluster is drawn as.
    pub fn container_definition(&self) -> &Rc<Box<dyn GlyphDefinition>> {
        &self.container_definition
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent(&self) -> Option<ClusterId> {
        self.parent
    }

    /// Direct member nodes, in declaration order.
    pub fn nodes(&self) -> &[Id] {
        &self.nodes
    }

    /// Direct child clusters, in declaration order.
    pub fn children(&self) -> &[ClusterId] {
        &self.children
    }

    /// Whether the cluster has been closed.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub(crate) fn add_node(&mut self, id: Id) {
        self.nodes.push(id);
    }

    pub(crate) fn add_child(&mut self, child: ClusterId) {
        self.children.push(child);
    }

    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }
}

/// Visual attributes of a declared edge.
///
/// # Examples
///
/// ```
/// use cumulus::EdgeStyle;
/// use cumulus_core::{color::Color, draw::StrokeStyle};
///
/// let style = EdgeStyle::new()
///     .with_color(Color::new("purple").unwrap())
///     .with_line_style(StrokeStyle::Dashed)
///     .with_label("failures")
///     .bold();
/// assert!(style.is_bold());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeStyle {
    color: Option<Color>,
    line_style: StrokeStyle,
    label: Option<String>,
    bold: bool,
}

impl EdgeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroke color; defaults to black when unset.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Line pattern: solid (default), dashed, or dotted.
    pub fn with_line_style(mut self, style: StrokeStyle) -> Self {
        self.line_style = style;
        self
    }

    /// Label text placed at the midpoint of the connector.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Draws the connector with a heavier stroke.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn line_style(&self) -> StrokeStyle {
        self.line_style
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Builds the connector definition this style renders as.
    ///
    /// Bold maps to stroke weight; the label inherits the edge color over a
    /// white pill so connectors do not strike through their own text.
    pub(crate) fn to_connector_definition(&self) -> ConnectorDefinition {
        let color = self.color.unwrap_or_default();
        let width = if self.bold { 2.6 } else { 1.3 };

        let mut stroke = StrokeDefinition::new(color, width);
        stroke.set_style(self.line_style);

        let mut text = TextDefinition::default();
        text.set_font_size(11);
        text.set_color(Some(color));
        text.set_background_color(Some(
            Color::new("white")
                .expect("'white' is a valid CSS color")
                .with_alpha(0.85),
        ));
        text.set_padding(Insets::uniform(1.0));

        let mut definition = ConnectorDefinition::new(Rc::new(stroke));
        definition.set_text(Rc::new(text));
        definition
    }
}

/// A concrete directed edge after Cartesian expansion.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Id,
    target: Id,
    style: EdgeStyle,
    connector_definition: Rc<ConnectorDefinition>,
}

impl Edge {
    pub(crate) fn new(source: Id, target: Id, style: EdgeStyle) -> Self {
        let connector_definition = Rc::new(style.to_connector_definition());
        Self {
            source,
            target,
            style,
            connector_definition,
        }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    /// The connector definition used to draw this edge.
    pub fn connector_definition(&self) -> &Rc<ConnectorDefinition> {
        &self.connector_definition
    }

    /// The label drawable for this edge, if it has a label.
    pub fn text(&self) -> Option<Text<'_>> {
        let label = self.style.label()?;
        Some(Text::new(self.connector_definition.text(), label))
    }
}

/// The complete declared diagram, frozen and ready to render.
#[derive(Debug)]
pub struct Graph {
    title: String,
    direction: Direction,
    format: OutputFormat,
    output_path: PathBuf,
    nodes: IndexMap<Id, Node>,
    clusters: Vec<Cluster>,
    edges: Vec<Edge>,
}

impl Graph {
    pub(crate) fn new(title: String) -> Self {
        Self {
            title,
            direction: Direction::default(),
            format: OutputFormat::default(),
            output_path: PathBuf::from("diagram.png"),
            nodes: IndexMap::new(),
            clusters: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All nodes, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn cluster(&self, id: ClusterId) -> &Cluster {
        &self.clusters[id.0]
    }

    /// All clusters with their ids, in declaration order.
    pub fn clusters(&self) -> impl Iterator<Item = (ClusterId, &Cluster)> {
        self.clusters
            .iter()
            .enumerate()
            .map(|(index, cluster)| (ClusterId(index), cluster))
    }

    pub fn clusters_count(&self) -> usize {
        self.clusters.len()
    }

    /// Top-level clusters (direct children of the implicit root).
    pub fn root_clusters(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.clusters
            .iter()
            .enumerate()
            .filter(|(_, cluster)| cluster.parent().is_none())
            .map(|(index, _)| ClusterId(index))
    }

    /// Top-level nodes (not contained in any cluster), in declaration order.
    pub fn root_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|node| node.cluster().is_none())
    }

    /// The concrete edge list, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The chain of clusters containing `node`, outermost first.
    pub fn cluster_path(&self, node: &Node) -> Vec<ClusterId> {
        let mut path = Vec::new();
        let mut current = node.cluster();
        while let Some(id) = current {
            path.push(id);
            current = self.cluster(id).parent();
        }
        path.reverse();
        path
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub(crate) fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub(crate) fn set_output_path(&mut self, path: PathBuf) {
        self.output_path = path;
    }

    pub(crate) fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.id(), node);
    }

    pub(crate) fn push_cluster(&mut self, cluster: Cluster) -> ClusterId {
        self.clusters.push(cluster);
        ClusterId(self.clusters.len() - 1)
    }

    pub(crate) fn cluster_mut(&mut self, id: ClusterId) -> &mut Cluster {
        &mut self.clusters[id.0]
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_style_builder() {
        let style = EdgeStyle::new()
            .with_color(Color::new("firebrick").unwrap())
            .with_line_style(StrokeStyle::Dotted)
            .with_label("bounce/complaint")
            .bold();

        assert_eq!(style.color().unwrap().to_string(), "firebrick");
        assert_eq!(style.line_style(), StrokeStyle::Dotted);
        assert_eq!(style.label(), Some("bounce/complaint"));
        assert!(style.is_bold());
    }

    #[test]
    fn test_edge_style_defaults() {
        let style = EdgeStyle::default();
        assert!(style.color().is_none());
        assert_eq!(style.line_style(), StrokeStyle::Solid);
        assert!(style.label().is_none());
        assert!(!style.is_bold());
    }

    #[test]
    fn test_cluster_path_walks_outermost_first() {
        let mut graph = Graph::new("test".to_string());

        let outer = graph.push_cluster(Cluster::new("Outer".to_string(), None));
        let inner = graph.push_cluster(Cluster::new("Inner".to_string(), Some(outer)));
        graph.cluster_mut(outer).add_child(inner);

        let id = Id::new("Outer::Inner::leaf");
        let node = Node::new(id, "leaf".to_string(), Category::Service, Some(inner));
        graph.insert_node(node);

        let path = graph.cluster_path(graph.node(id).unwrap());
        assert_eq!(path, vec![outer, inner]);
    }

    #[test]
    fn test_root_accessors() {
        let mut graph = Graph::new("test".to_string());

        let top = graph.push_cluster(Cluster::new("Top".to_string(), None));
        let nested = graph.push_cluster(Cluster::new("Nested".to_string(), Some(top)));
        graph.cluster_mut(top).add_child(nested);

        let free_id = Id::new("free");
        graph.insert_node(Node::new(free_id, "free".to_string(), Category::Client, None));

        let root_clusters: Vec<_> = graph.root_clusters().collect();
        assert_eq!(root_clusters, vec![top]);

        let root_nodes: Vec<_> = graph.root_nodes().map(Node::id).collect();
        assert_eq!(root_nodes, vec![free_id]);
    }
}
