//! The layered layout engine.
//!
//! Each containment scope is laid out with the Sugiyama method
//! (`rust-sugiyama`), innermost scopes first so container sizes are known
//! before their parents place them. Scopes may be disconnected; every weakly
//! connected component is laid out separately and packed along the cross
//! axis, with members untouched by any edge appended as single-member
//! components. Raw layer coordinates are normalized so flow always runs
//! source to target, then mapped through the requested flow direction.
//!
//! Nothing here is randomized or iteration-order dependent: member order is
//! declaration order, and the layered algorithm itself is deterministic, so
//! laying out the same graph twice yields the same scene.

use std::{collections::HashMap, rc::Rc};

use log::{debug, trace};
use rust_sugiyama::configure::Config;

use cumulus_core::{
    draw::{Drawable, Glyph, GlyphWithLabel, PositionedDrawable, Text},
    geometry::{Bounds, Insets, Point, Size},
};

use crate::{
    config::LayoutConfig,
    error::CumulusError,
    graph::{ClusterId, Graph},
    layout::scene::{PlacedContainer, Scene},
    structure::{ClusterScopes, Member, Scope, ScopeEdge},
};

/// One laid-out scope: composites with scope-local positions.
struct ScopeLayout<'a> {
    items: Vec<(Member, GlyphWithLabel<'a>, Point)>,
    bounds: Bounds,
}

/// Layered layout engine with spacing configuration.
pub struct Engine {
    horizontal_spacing: f32,
    vertical_spacing: f32,
    container_padding: Insets,
}

impl Engine {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            horizontal_spacing: config.horizontal_spacing,
            vertical_spacing: config.vertical_spacing,
            container_padding: Insets::uniform(config.container_padding),
        }
    }

    /// Computes the absolute scene for a frozen graph.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::Render`] if the layered algorithm fails or a
    /// member cannot be placed.
    pub fn calculate<'a>(&self, graph: &'a Graph) -> Result<Scene<'a>, CumulusError> {
        let scopes = ClusterScopes::from_graph(graph);

        let mut layouts: HashMap<Option<ClusterId>, ScopeLayout<'a>> = HashMap::new();
        let mut content_sizes: HashMap<ClusterId, Size> = HashMap::new();

        for scope in scopes.scopes() {
            let layout = self.layout_scope(graph, scope, &content_sizes)?;
            if let Some(container) = scope.container() {
                content_sizes.insert(container, layout.bounds.to_size());
            }
            layouts.insert(scope.container(), layout);
        }

        let mut scene = Scene::new();
        let root = layouts
            .remove(&None)
            .expect("the root scope always exists");
        let root_offset = Point::new(-root.bounds.min_x(), -root.bounds.min_y());
        self.compose(graph, root, root_offset, 0, &mut layouts, &mut scene)?;

        debug!(
            nodes = scene.nodes_count(),
            containers = scene.containers().len();
            "Scene composed"
        );
        Ok(scene)
    }

    /// Recursively places a scope's members at absolute positions, walking
    /// into member clusters with the offset of their content area.
    fn compose<'a>(
        &self,
        graph: &'a Graph,
        layout: ScopeLayout<'a>,
        offset: Point,
        depth: usize,
        layouts: &mut HashMap<Option<ClusterId>, ScopeLayout<'a>>,
        scene: &mut Scene<'a>,
    ) -> Result<(), CumulusError> {
        for (member, composite, local_position) in layout.items {
            let absolute = offset.add_point(local_position);
            let positioned = PositionedDrawable::new(composite).with_position(absolute);

            match member {
                Member::Node(id) => {
                    trace!(node = id.to_string(), x = absolute.x(), y = absolute.y(); "Placed node");
                    scene.insert_node(id, positioned);
                }
                Member::Cluster(cluster_id) => {
                    let label = graph.cluster(cluster_id).label();
                    let content_bounds = positioned.content_bounds().ok_or_else(|| {
                        CumulusError::Render(format!(
                            "container `{label}` has no content area to place members into"
                        ))
                    })?;

                    let child = layouts.remove(&Some(cluster_id)).ok_or_else(|| {
                        CumulusError::Render(format!("no layout computed for cluster `{label}`"))
                    })?;

                    let child_offset = content_bounds
                        .min_point()
                        .sub_point(child.bounds.min_point());

                    scene.push_container(PlacedContainer::new(cluster_id, depth, positioned));
                    self.compose(graph, child, child_offset, depth + 1, layouts, scene)?;
                }
            }
        }

        Ok(())
    }

    /// Builds the member composites for one scope and positions them.
    fn layout_scope<'a>(
        &self,
        graph: &'a Graph,
        scope: &Scope,
        content_sizes: &HashMap<ClusterId, Size>,
    ) -> Result<ScopeLayout<'a>, CumulusError> {
        let mut composites: Vec<GlyphWithLabel<'a>> = Vec::with_capacity(scope.members().len());

        for member in scope.members() {
            let composite = match member {
                Member::Node(id) => {
                    let node = graph.node(*id).ok_or_else(|| {
                        CumulusError::Render(format!("node `{id}` vanished from the graph"))
                    })?;
                    let glyph = Glyph::new(Rc::clone(node.glyph_definition()));
                    let label = Text::new(node.glyph_definition().text(), node.label());
                    GlyphWithLabel::new(glyph, Some(label))
                }
                Member::Cluster(cluster_id) => {
                    let cluster = graph.cluster(*cluster_id);
                    let mut glyph = Glyph::new(Rc::clone(cluster.container_definition()));
                    glyph.set_padding(self.container_padding);
                    let label = Text::new(cluster.container_definition().text(), cluster.label());
                    let mut composite = GlyphWithLabel::new(glyph, Some(label));

                    let content_size = *content_sizes.get(cluster_id).ok_or_else(|| {
                        CumulusError::Render(format!(
                            "no inner layout for cluster `{}`",
                            cluster.label()
                        ))
                    })?;
                    composite.set_inner_content_size(content_size).map_err(|err| {
                        CumulusError::Render(format!(
                            "cannot size container `{}`: {err}",
                            cluster.label()
                        ))
                    })?;
                    composite
                }
            };
            composites.push(composite);
        }

        let sizes: Vec<Size> = composites.iter().map(|c| c.size()).collect();
        let positions = self.positions(graph, scope, &sizes)?;

        let mut bounds: Option<Bounds> = None;
        let mut items = Vec::with_capacity(composites.len());
        for ((member, composite), position) in
            scope.members().iter().zip(composites).zip(positions)
        {
            let item_bounds = position.to_bounds(composite.size());
            bounds = Some(match bounds {
                Some(acc) => acc.merge(&item_bounds),
                None => item_bounds,
            });
            items.push((*member, composite, position));
        }

        Ok(ScopeLayout {
            items,
            bounds: bounds.unwrap_or_default(),
        })
    }

    /// Positions for each scope member, indexed like `scope.members()`.
    fn positions(
        &self,
        graph: &Graph,
        scope: &Scope,
        sizes: &[Size],
    ) -> Result<Vec<Point>, CumulusError> {
        let member_count = sizes.len();
        if member_count == 0 {
            return Ok(Vec::new());
        }

        let direction = graph.direction();
        let layout_edges = acyclic_edges(member_count, scope.edges());

        let mut connected = vec![false; member_count];
        for &(source, target) in &layout_edges {
            connected[source as usize] = true;
            connected[target as usize] = true;
        }

        let mut components: Vec<Vec<(usize, Point)>> = Vec::new();

        if !layout_edges.is_empty() {
            debug!(
                members = member_count,
                edges = layout_edges.len();
                "Applying layered layout to scope"
            );

            let max_width = sizes
                .iter()
                .map(|s| s.width())
                .fold(0.0f32, f32::max)
                .max(100.0);
            let max_height = sizes
                .iter()
                .map(|s| s.height())
                .fold(0.0f32, f32::max)
                .max(100.0);
            let avg_size = sizes
                .iter()
                .map(|s| (s.width() + s.height()) / 2.0)
                .sum::<f32>()
                / member_count as f32;

            // Scale raw layer coordinates so spacing adapts to the actual
            // member sizes at this scope.
            let effective_h_spacing = self.horizontal_spacing + max_width * 0.5;
            let effective_v_spacing = self.vertical_spacing + max_height * 0.5;

            let edges_for_layout = layout_edges.clone();
            let vertex_spacing = (avg_size / 50.0).clamp(2.0, 5.0) as f64;

            let results = std::panic::catch_unwind(move || {
                let config = Config {
                    minimum_length: 1,
                    vertex_spacing,
                    ..Default::default()
                };
                rust_sugiyama::from_edges(&edges_for_layout, &config)
            })
            .map_err(|err| {
                let message = if let Some(panic_msg) = err.downcast_ref::<String>() {
                    format!("layered layout engine panicked: {panic_msg}")
                } else {
                    "layered layout engine panicked with unknown error".to_string()
                };
                CumulusError::Render(message)
            })?;

            if results.is_empty() {
                return Err(CumulusError::Render(
                    "layered layout returned no results for a non-empty scope".to_string(),
                ));
            }

            // Collect raw positions per member across all weakly connected
            // components.
            let mut raw: Vec<Option<Point>> = vec![None; member_count];
            let mut component_of: Vec<Option<usize>> = vec![None; member_count];
            for (component_index, (coords, _, _)) in results.iter().enumerate() {
                for &(id, (x, y)) in coords {
                    let index = id as usize;
                    if index >= member_count || !connected[index] {
                        continue;
                    }
                    raw[index] = Some(Point::new(
                        x as f32 * effective_h_spacing,
                        y as f32 * effective_v_spacing,
                    ));
                    component_of[index] = Some(component_index);
                }
            }

            // Normalize the flow sign: targets must sit at larger layer
            // coordinates than sources before the direction transform.
            let mut flow = 0.0f32;
            for &(source, target) in &layout_edges {
                if let (Some(s), Some(t)) = (raw[source as usize], raw[target as usize]) {
                    flow += t.y() - s.y();
                }
            }
            let flip = flow < 0.0;

            let mut grouped: Vec<Vec<(usize, Point)>> = vec![Vec::new(); results.len()];
            for index in 0..member_count {
                if let (Some(mut point), Some(component_index)) = (raw[index], component_of[index])
                {
                    if flip {
                        point = point.with_y(-point.y());
                    }
                    grouped[component_index].push((index, direction.transform(point)));
                }
            }
            components.extend(grouped.into_iter().filter(|c| !c.is_empty()));
        }

        // Members untouched by any edge become single-member components.
        for index in 0..member_count {
            if !connected[index] {
                components.push(vec![(index, Point::default())]);
            }
        }

        // Pack components side by side along the cross axis, aligned at the
        // start of the flow axis.
        let horizontal = direction.is_horizontal();
        let gap = if horizontal {
            self.vertical_spacing
        } else {
            self.horizontal_spacing
        };

        let mut assigned: Vec<Option<Point>> = vec![None; member_count];
        let mut cross_cursor = 0.0f32;
        for component in components {
            let mut bounds: Option<Bounds> = None;
            for &(index, position) in &component {
                let member_bounds = position.to_bounds(sizes[index]);
                bounds = Some(match bounds {
                    Some(acc) => acc.merge(&member_bounds),
                    None => member_bounds,
                });
            }
            let bounds = bounds.expect("components are never empty");

            let shift = if horizontal {
                Point::new(-bounds.min_x(), cross_cursor - bounds.min_y())
            } else {
                Point::new(cross_cursor - bounds.min_x(), -bounds.min_y())
            };

            for (index, position) in component {
                assigned[index] = Some(position.add_point(shift));
            }

            let extent = if horizontal {
                bounds.height()
            } else {
                bounds.width()
            };
            cross_cursor += extent + gap;
        }

        let mut positions = Vec::with_capacity(member_count);
        for (index, slot) in assigned.into_iter().enumerate() {
            positions.push(slot.ok_or_else(|| {
                CumulusError::Render(format!(
                    "no position computed for {}",
                    member_label(graph, scope.members()[index])
                ))
            })?);
        }
        Ok(positions)
    }
}

fn member_label(graph: &Graph, member: Member) -> String {
    match member {
        Member::Node(id) => format!("node `{id}`"),
        Member::Cluster(cluster_id) => {
            format!("cluster `{}`", graph.cluster(cluster_id).label())
        }
    }
}

/// Keeps edges in declaration order, dropping any edge that would close a
/// cycle. The layered algorithm needs an acyclic input; the dropped edges
/// are still drawn, they just stop constraining layer assignment.
fn acyclic_edges(member_count: usize, edges: &[ScopeEdge]) -> Vec<(u32, u32)> {
    let mut kept = Vec::with_capacity(edges.len());
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); member_count];

    for edge in edges {
        if reaches(&adjacency, edge.target, edge.source) {
            continue;
        }
        kept.push((edge.source as u32, edge.target as u32));
        adjacency[edge.source].push(edge.target);
    }

    kept
}

/// Whether `to` is reachable from `from` over the kept adjacency.
fn reaches(adjacency: &[Vec<usize>], from: usize, to: usize) -> bool {
    if from == to {
        return true;
    }

    let mut visited = vec![false; adjacency.len()];
    let mut stack = vec![from];
    visited[from] = true;

    while let Some(current) = stack.pop() {
        for &next in &adjacency[current] {
            if next == to {
                return true;
            }
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }

    false
}
