//! The absolute scene: every drawable at its final position.
//!
//! The per-scope layouts are composed into a single coordinate space here,
//! so the exporter can draw cluster containers bottom-up, node glyphs, and
//! globally routed edges without knowing anything about scopes.

use indexmap::IndexMap;

use cumulus_core::{
    draw::{GlyphWithLabel, PositionedDrawable},
    geometry::Bounds,
    identifier::Id,
};

use crate::graph::ClusterId;

/// A cluster container placed in absolute coordinates.
#[derive(Debug)]
pub struct PlacedContainer<'a> {
    cluster: ClusterId,
    depth: usize,
    drawable: PositionedDrawable<GlyphWithLabel<'a>>,
}

impl<'a> PlacedContainer<'a> {
    pub(crate) fn new(
        cluster: ClusterId,
        depth: usize,
        drawable: PositionedDrawable<GlyphWithLabel<'a>>,
    ) -> Self {
        Self {
            cluster,
            depth,
            drawable,
        }
    }

    pub fn cluster(&self) -> ClusterId {
        self.cluster
    }

    /// Nesting depth: 0 for top-level clusters.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn drawable(&self) -> &PositionedDrawable<GlyphWithLabel<'a>> {
        &self.drawable
    }
}

/// All positioned drawables of a laid-out diagram.
#[derive(Debug, Default)]
pub struct Scene<'a> {
    nodes: IndexMap<Id, PositionedDrawable<GlyphWithLabel<'a>>>,
    containers: Vec<PlacedContainer<'a>>,
    bounds: Bounds,
}

impl<'a> Scene<'a> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            containers: Vec::new(),
            bounds: Bounds::default(),
        }
    }

    /// The placed drawable for a node identity.
    pub fn node(&self, id: Id) -> Option<&PositionedDrawable<GlyphWithLabel<'a>>> {
        self.nodes.get(&id)
    }

    /// All placed nodes, in placement order.
    pub fn nodes(&self) -> impl Iterator<Item = (Id, &PositionedDrawable<GlyphWithLabel<'a>>)> {
        self.nodes.iter().map(|(&id, drawable)| (id, drawable))
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Containers in paint order: outermost first, so nested boxes draw on
    /// top of their parents.
    pub fn containers(&self) -> &[PlacedContainer<'a>] {
        &self.containers
    }

    /// Bounding box of all content.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn insert_node(&mut self, id: Id, drawable: PositionedDrawable<GlyphWithLabel<'a>>) {
        self.grow_bounds(drawable.bounds());
        self.nodes.insert(id, drawable);
    }

    pub(crate) fn push_container(&mut self, container: PlacedContainer<'a>) {
        self.grow_bounds(container.drawable().bounds());
        self.containers.push(container);
    }

    fn grow_bounds(&mut self, bounds: Bounds) {
        if self.nodes.is_empty() && self.containers.is_empty() {
            self.bounds = bounds;
        } else {
            self.bounds = self.bounds.merge(&bounds);
        }
    }
}
