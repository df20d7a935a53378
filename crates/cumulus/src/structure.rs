//! Containment scopes derived from the frozen graph.
//!
//! Layout works scope by scope: each cluster (and the implicit root) is laid
//! out as its own small graph whose members are the cluster's direct nodes
//! and child clusters. Scopes are ordered innermost-first so a container's
//! size is known before its parent is laid out.
//!
//! Edges are global and may cross cluster boundaries. Within a scope, each
//! edge is projected onto the scope's members through endpoint
//! *representatives*: the member that transitively contains the endpoint.
//! An edge from a root-level node into a deeply nested node therefore pulls
//! the top-level cluster toward that node at the root scope, and the nested
//! target at the inner scopes.

use std::collections::HashSet;

use log::trace;

use cumulus_core::identifier::Id;

use crate::graph::{ClusterId, Graph, Node};

/// A direct member of a containment scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    Node(Id),
    Cluster(ClusterId),
}

/// A projected edge between two members of the same scope.
///
/// Indices refer to the scope's member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeEdge {
    pub source: usize,
    pub target: usize,
}

/// One containment level: the direct members of a cluster (or the root) and
/// the edges projected onto them.
#[derive(Debug)]
pub struct Scope {
    container: Option<ClusterId>,
    members: Vec<Member>,
    edges: Vec<ScopeEdge>,
}

impl Scope {
    /// The containing cluster, or `None` for the root scope.
    pub fn container(&self) -> Option<ClusterId> {
        self.container
    }

    /// Members in declaration order (nodes first, then child clusters).
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Projected edges in declaration order, deduplicated.
    pub fn edges(&self) -> &[ScopeEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn member_index(&self, member: Member) -> Option<usize> {
        self.members.iter().position(|&m| m == member)
    }
}

/// All containment scopes of a graph, innermost-first with the root last.
#[derive(Debug)]
pub struct ClusterScopes {
    scopes: Vec<Scope>,
}

impl ClusterScopes {
    /// Derives the scope list from a frozen graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut scopes = Vec::new();
        let roots: Vec<ClusterId> = graph.root_clusters().collect();
        for cluster_id in roots {
            Self::visit(graph, cluster_id, &mut scopes);
        }
        scopes.push(Self::build_scope(graph, None));

        trace!(scopes = scopes.len(); "Derived containment scopes");
        Self { scopes }
    }

    fn visit(graph: &Graph, cluster_id: ClusterId, scopes: &mut Vec<Scope>) {
        for &child in graph.cluster(cluster_id).children() {
            Self::visit(graph, child, scopes);
        }
        scopes.push(Self::build_scope(graph, Some(cluster_id)));
    }

    fn build_scope(graph: &Graph, container: Option<ClusterId>) -> Scope {
        let mut members = Vec::new();
        match container {
            Some(cluster_id) => {
                let cluster = graph.cluster(cluster_id);
                members.extend(cluster.nodes().iter().map(|&id| Member::Node(id)));
                members.extend(cluster.children().iter().map(|&id| Member::Cluster(id)));
            }
            None => {
                members.extend(graph.root_nodes().map(|node| Member::Node(node.id())));
                members.extend(graph.root_clusters().map(Member::Cluster));
            }
        }

        let mut scope = Scope {
            container,
            members,
            edges: Vec::new(),
        };

        let mut seen = HashSet::new();
        for edge in graph.edges() {
            let source = representative(graph, edge.source(), container);
            let target = representative(graph, edge.target(), container);
            let (Some(source), Some(target)) = (source, target) else {
                continue;
            };
            if source == target {
                // Both endpoints collapse onto the same member (or a true
                // self-loop); nothing to constrain at this level.
                continue;
            }
            if !seen.insert((source, target)) {
                continue;
            }
            let (Some(source_index), Some(target_index)) =
                (scope.member_index(source), scope.member_index(target))
            else {
                continue;
            };
            scope.edges.push(ScopeEdge {
                source: source_index,
                target: target_index,
            });
        }

        scope
    }

    /// Scopes, innermost-first; the root scope is last.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// The scope belonging to `container`.
    pub fn scope_of(&self, container: Option<ClusterId>) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.container() == container)
    }
}

/// The member of `container`'s scope that transitively contains `id`.
///
/// Returns `None` when the node does not live under `container` at all.
fn representative(graph: &Graph, id: Id, container: Option<ClusterId>) -> Option<Member> {
    let node: &Node = graph.node(id)?;
    if node.cluster() == container {
        return Some(Member::Node(id));
    }

    let path = graph.cluster_path(node);
    match container {
        None => path.first().copied().map(Member::Cluster),
        Some(cluster_id) => {
            let position = path.iter().position(|&p| p == cluster_id)?;
            path.get(position + 1).copied().map(Member::Cluster)
        }
    }
}

#[cfg(test)]
mod tests {
    use cumulus_core::draw::Category;

    use super::*;
    use crate::{builder::GraphBuilder, graph::EdgeStyle};

    /// users -> [Frontend: web -> cdn]; Frontend also holds [Assets: bucket];
    /// users -> bucket crosses two boundaries.
    fn sample_graph() -> Graph {
        let mut b = GraphBuilder::new("structure test");
        let users = b.node("users", Category::Client).unwrap();

        let frontend = b.open_cluster("Frontend");
        let web = b.node("web", Category::Service).unwrap();
        let cdn = b.node("cdn", Category::Gateway).unwrap();
        let assets = b.open_cluster("Assets");
        let bucket = b.node("bucket", Category::Database).unwrap();
        b.close_cluster(assets).unwrap();
        b.close_cluster(frontend).unwrap();

        b.edge(users, web, EdgeStyle::new()).unwrap();
        b.edge(web, cdn, EdgeStyle::new()).unwrap();
        b.edge(users, bucket, EdgeStyle::new()).unwrap();
        b.edge(web, bucket, EdgeStyle::new()).unwrap();

        b.finish().unwrap()
    }

    #[test]
    fn test_scopes_are_post_order_with_root_last() {
        let graph = sample_graph();
        let scopes = ClusterScopes::from_graph(&graph);

        let labels: Vec<Option<String>> = scopes
            .scopes()
            .iter()
            .map(|s| s.container().map(|c| graph.cluster(c).label().to_string()))
            .collect();

        assert_eq!(
            labels,
            vec![
                Some("Assets".to_string()),
                Some("Frontend".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_scope_members() {
        let graph = sample_graph();
        let scopes = ClusterScopes::from_graph(&graph);

        let root = scopes.scope_of(None).unwrap();
        assert_eq!(root.members().len(), 2); // users + Frontend

        let frontend_id = graph
            .clusters()
            .find(|(_, c)| c.label() == "Frontend")
            .map(|(id, _)| id)
            .unwrap();
        let frontend = scopes.scope_of(Some(frontend_id)).unwrap();
        assert_eq!(frontend.members().len(), 3); // web, cdn, Assets
    }

    #[test]
    fn test_cross_cluster_edge_projects_to_representatives() {
        let graph = sample_graph();
        let scopes = ClusterScopes::from_graph(&graph);

        // Root scope: users -> web and users -> bucket both project onto
        // (users, Frontend) and deduplicate to a single scope edge.
        let root = scopes.scope_of(None).unwrap();
        assert_eq!(root.edges().len(), 1);

        let edge = root.edges()[0];
        assert!(matches!(root.members()[edge.source], Member::Node(_)));
        assert!(matches!(root.members()[edge.target], Member::Cluster(_)));
    }

    #[test]
    fn test_inner_scope_sees_projected_edges() {
        let graph = sample_graph();
        let scopes = ClusterScopes::from_graph(&graph);

        let frontend_id = graph
            .clusters()
            .find(|(_, c)| c.label() == "Frontend")
            .map(|(id, _)| id)
            .unwrap();
        let frontend = scopes.scope_of(Some(frontend_id)).unwrap();

        // web -> cdn stays node-to-node; web -> bucket projects onto
        // (web, Assets). users -> bucket has no source representative here.
        assert_eq!(frontend.edges().len(), 2);
    }

    #[test]
    fn test_intra_child_edges_collapse() {
        let mut b = GraphBuilder::new("collapse");
        let mut pair = Vec::new();
        b.cluster("Inner", |b| {
            pair.push(b.node("a", Category::Service)?);
            pair.push(b.node("b", Category::Service)?);
            Ok(())
        })
        .unwrap();
        b.edge(pair[0], pair[1], EdgeStyle::new()).unwrap();
        let graph = b.finish().unwrap();

        let scopes = ClusterScopes::from_graph(&graph);
        let root = scopes.scope_of(None).unwrap();

        // Both endpoints live in `Inner`; at the root the edge collapses.
        assert!(root.edges().is_empty());
    }

    #[test]
    fn test_empty_graph_has_single_empty_root_scope() {
        let graph = GraphBuilder::new("empty").finish().unwrap();
        let scopes = ClusterScopes::from_graph(&graph);

        assert_eq!(scopes.scopes().len(), 1);
        assert!(scopes.scopes()[0].is_empty());
    }
}
