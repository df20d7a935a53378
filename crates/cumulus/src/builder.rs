//! The scoped declaration API that assembles a [`Graph`].
//!
//! The builder owns the one piece of real bookkeeping in the pipeline: the
//! cluster scope stack. Nodes and clusters declared while a cluster is open
//! are attributed to it; clusters must close in strict LIFO order. Node
//! identities are derived from the cluster path plus the display label, so
//! identical labels in different clusters never collide.
//!
//! # Examples
//!
//! ```
//! use cumulus::{EdgeStyle, GraphBuilder};
//! use cumulus_core::draw::Category;
//!
//! let mut builder = GraphBuilder::new("Tiny System");
//!
//! let users = builder.node("Users", Category::Client)?;
//! let mut api = None;
//! builder.cluster("Backend", |b| {
//!     api = Some(b.node("API", Category::Service)?);
//!     Ok(())
//! })?;
//!
//! builder.edge(users, api.unwrap(), EdgeStyle::new())?;
//! let graph = builder.finish()?;
//! assert_eq!(graph.edges().len(), 1);
//! # Ok::<(), cumulus::CumulusError>(())
//! ```

use std::path::PathBuf;

use log::{debug, trace};

use cumulus_core::{draw::Category, identifier::Id};

use crate::{
    error::CumulusError,
    graph::{Cluster, ClusterId, ClusterRef, Edge, EdgeStyle, Graph, Node, NodeRef},
    layout::Direction,
    render::OutputFormat,
};

/// One or many edge endpoints.
///
/// A declared edge statement pairs every source with every destination
/// (Cartesian expansion), so both sides accept a single node or a set.
#[derive(Debug, Clone)]
pub enum Endpoint {
    One(NodeRef),
    Many(Vec<NodeRef>),
}

impl Endpoint {
    fn refs(&self) -> &[NodeRef] {
        match self {
            Self::One(node) => std::slice::from_ref(node),
            Self::Many(nodes) => nodes,
        }
    }
}

impl From<NodeRef> for Endpoint {
    fn from(node: NodeRef) -> Self {
        Self::One(node)
    }
}

impl From<Vec<NodeRef>> for Endpoint {
    fn from(nodes: Vec<NodeRef>) -> Self {
        Self::Many(nodes)
    }
}

impl From<&[NodeRef]> for Endpoint {
    fn from(nodes: &[NodeRef]) -> Self {
        Self::Many(nodes.to_vec())
    }
}

impl<const N: usize> From<[NodeRef; N]> for Endpoint {
    fn from(nodes: [NodeRef; N]) -> Self {
        Self::Many(nodes.to_vec())
    }
}

/// Builder assembling the process-wide [`Graph`].
#[derive(Debug)]
pub struct GraphBuilder {
    graph: Graph,
    scope_stack: Vec<ClusterId>,
}

impl GraphBuilder {
    /// Starts a new declaration with the given diagram title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            graph: Graph::new(title.into()),
            scope_stack: Vec::new(),
        }
    }

    /// Sets the overall flow direction (builder style).
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.graph.set_direction(direction);
        self
    }

    /// Sets the output image format (builder style).
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.graph.set_format(format);
        self
    }

    /// Sets the output file path (builder style).
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.graph.set_output_path(path.into());
        self
    }

    /// Declares a node in the innermost open cluster (or at the root).
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::DuplicateIdentity`] if a node with the same
    /// cluster path and label already exists.
    pub fn node(&mut self, label: &str, category: Category) -> Result<NodeRef, CumulusError> {
        let id = self.qualified_id(label);
        if self.graph.contains_node(id) {
            return Err(CumulusError::DuplicateIdentity {
                identity: id.to_string(),
            });
        }

        let cluster = self.scope_stack.last().copied();
        trace!(identity = id.to_string(), category = category.to_string(); "Declaring node");

        self.graph
            .insert_node(Node::new(id, label.to_string(), category, cluster));
        if let Some(cluster_id) = cluster {
            self.graph.cluster_mut(cluster_id).add_node(id);
        }

        Ok(NodeRef { id })
    }

    /// Opens a cluster nested under the current scope and makes it current.
    pub fn open_cluster(&mut self, label: &str) -> ClusterRef {
        let parent = self.scope_stack.last().copied();
        let id = self
            .graph
            .push_cluster(Cluster::new(label.to_string(), parent));
        if let Some(parent_id) = parent {
            self.graph.cluster_mut(parent_id).add_child(id);
        }

        debug!(label, depth = self.scope_stack.len() + 1; "Opened cluster");
        self.scope_stack.push(id);
        ClusterRef { id }
    }

    /// Seals a cluster and restores its parent as the current scope.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::ScopeMismatch`] if `cluster` is not the
    /// innermost open cluster, or was already closed.
    pub fn close_cluster(&mut self, cluster: ClusterRef) -> Result<(), CumulusError> {
        let label = self.graph.cluster(cluster.id).label().to_string();

        if self.graph.cluster(cluster.id).is_sealed() {
            return Err(CumulusError::ScopeMismatch {
                reason: format!("cluster `{label}` was already closed"),
            });
        }

        match self.scope_stack.last() {
            Some(&top) if top == cluster.id => {
                self.graph.cluster_mut(cluster.id).seal();
                self.scope_stack.pop();
                debug!(label, depth = self.scope_stack.len(); "Closed cluster");
                Ok(())
            }
            Some(&top) => Err(CumulusError::ScopeMismatch {
                reason: format!(
                    "cannot close `{label}` while `{}` is still open",
                    self.graph.cluster(top).label()
                ),
            }),
            None => Err(CumulusError::ScopeMismatch {
                reason: format!("cannot close `{label}`: no cluster is open"),
            }),
        }
    }

    /// Opens a cluster, runs `f` inside its scope, and closes it again.
    pub fn cluster<F>(&mut self, label: &str, f: F) -> Result<ClusterRef, CumulusError>
    where
        F: FnOnce(&mut Self) -> Result<(), CumulusError>,
    {
        let cluster = self.open_cluster(label);
        f(self)?;
        self.close_cluster(cluster)?;
        Ok(cluster)
    }

    /// Declares edges from every source to every destination, appended in
    /// declaration order with the same style attributes.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::UnknownNode`] if any endpoint does not exist
    /// in the graph.
    pub fn edge(
        &mut self,
        sources: impl Into<Endpoint>,
        destinations: impl Into<Endpoint>,
        style: EdgeStyle,
    ) -> Result<(), CumulusError> {
        let sources = sources.into();
        let destinations = destinations.into();

        for endpoint in sources.refs().iter().chain(destinations.refs()) {
            if !self.graph.contains_node(endpoint.id) {
                return Err(CumulusError::UnknownNode {
                    identity: endpoint.id.to_string(),
                });
            }
        }

        for source in sources.refs() {
            for destination in destinations.refs() {
                self.graph
                    .push_edge(Edge::new(source.id, destination.id, style.clone()));
            }
        }

        Ok(())
    }

    /// Freezes the declaration and hands the graph to the render stage.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::ScopeMismatch`] if any cluster is still open.
    pub fn finish(self) -> Result<Graph, CumulusError> {
        if let Some(&open) = self.scope_stack.last() {
            return Err(CumulusError::ScopeMismatch {
                reason: format!(
                    "cluster `{}` is still open at the end of the declaration",
                    self.graph.cluster(open).label()
                ),
            });
        }

        debug!(
            nodes = self.graph.nodes_count(),
            clusters = self.graph.clusters_count(),
            edges = self.graph.edges().len();
            "Graph declaration complete"
        );
        Ok(self.graph)
    }

    /// The identity for `label` in the current scope: the labels of all open
    /// clusters joined with the node label.
    fn qualified_id(&self, label: &str) -> Id {
        let mut id: Option<Id> = None;
        for &cluster_id in &self.scope_stack {
            let part = Id::new(self.graph.cluster(cluster_id).label());
            id = Some(match id {
                Some(parent) => parent.qualify(part),
                None => part,
            });
        }
        match id {
            Some(parent) => parent.qualify(Id::new(label)),
            None => Id::new(label),
        }
    }
}
