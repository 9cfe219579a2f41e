use crate::{Error, Result, VertexMap};
use algograph::graph::*;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::Debug,
    hash::Hash,
};

/// Identifier of a page in a [`LinkGraph`].
///
/// Anything comparable and hashable qualifies, e.g. `String` or `&str`.
pub trait Node: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Node for T {}

/// An immutable directed link graph.
///
/// Nodes are kept in a canonical order (ascending by `N`), which every
/// estimator uses whenever it needs a stable iteration order.
pub struct LinkGraph<N: Node> {
    graph: directed::TreeBackedGraph,
    order: Vec<VertexId>,
    ids: HashMap<N, VertexId, ahash::RandomState>,
    nodes: HashMap<VertexId, N, ahash::RandomState>,
}

impl<N: Node> LinkGraph<N> {
    /// Builds a graph from `node -> outlinks` pairs.
    ///
    /// Repeated keys have their outlinks merged. Self links and links to
    /// targets which are not keys themselves are dropped.
    pub fn new<I, L>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, L)>,
        L: IntoIterator<Item = N>,
    {
        let links = {
            let mut merged: BTreeMap<N, BTreeSet<N>> = BTreeMap::new();
            for (u, vs) in links {
                merged.entry(u).or_default().extend(vs);
            }
            merged
        };
        if links.is_empty() {
            return Err(Error::InvalidGraph("no nodes".to_string()));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let mut order = Vec::with_capacity(links.len());
        let mut ids = HashMap::with_hasher(ahash::RandomState::new());
        let mut nodes = HashMap::with_hasher(ahash::RandomState::new());
        for u in links.keys() {
            let v = graph.add_vertex();
            order.push(v);
            ids.insert(u.clone(), v);
            nodes.insert(v, u.clone());
        }
        for (u, vs) in links.iter() {
            let source = ids[u];
            for v in vs.iter() {
                if v == u {
                    continue;
                }
                if let Some(sink) = ids.get(v) {
                    graph.add_edge(source, *sink);
                }
            }
        }
        log::debug!(
            "link graph: {} nodes, {} links",
            graph.vertex_size(),
            graph.edge_size()
        );
        Ok(Self {
            graph,
            order,
            ids,
            nodes,
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: construction rejects empty node sets.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_size()
    }

    /// All nodes, in canonical order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.order.iter().map(|v| self.node(*v))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.ids.contains_key(node)
    }

    /// Pages linked to by `node`, or `None` if `node` is not in the graph.
    pub fn outlinks<'a>(&'a self, node: &N) -> Option<impl Iterator<Item = &'a N> + 'a> {
        let u = self.vertex(node)?;
        Some(self.sinks(u).map(|v| self.node(v)))
    }

    pub fn out_degree(&self, node: &N) -> Option<usize> {
        self.vertex(node).map(|u| self.degree(u))
    }

    /// Nodes without outlinks.
    pub fn dangling(&self) -> impl Iterator<Item = &N> + '_ {
        self.order
            .iter()
            .filter(|u| self.degree(**u) == 0)
            .map(|u| self.node(*u))
    }

    pub(crate) fn vertices(&self) -> &[VertexId] {
        &self.order
    }

    pub(crate) fn vertex(&self, node: &N) -> Option<VertexId> {
        self.ids.get(node).copied()
    }

    pub(crate) fn vertex_or_err(&self, node: &N) -> Result<VertexId> {
        self.vertex(node)
            .ok_or_else(|| Error::UnknownNode(format!("{node:?}")))
    }

    pub(crate) fn node(&self, v: VertexId) -> &N {
        &self.nodes[&v]
    }

    pub(crate) fn sinks(&self, u: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(&u).map(|e| e.sink)
    }

    pub(crate) fn degree(&self, u: VertexId) -> usize {
        self.graph.out_edges(&u).count()
    }

    /// Outlinks of every node, keyed by vertex.
    pub(crate) fn adjacency(&self) -> VertexMap<Vec<VertexId>> {
        self.order
            .iter()
            .map(|u| (*u, self.sinks(*u).collect()))
            .collect()
    }
}

impl<N: Node> Debug for LinkGraph<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut m = f.debug_map();
        for u in self.order.iter() {
            let mut vs: Vec<_> = self.sinks(*u).map(|v| self.node(v)).collect();
            vs.sort();
            m.entry(self.node(*u), &vs);
        }
        m.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_outlinks<'a>(g: &'a LinkGraph<&'static str>, n: &'static str) -> Vec<&'a str> {
        let mut vs: Vec<_> = g.outlinks(&n).unwrap().copied().collect();
        vs.sort();
        vs
    }

    #[test]
    fn empty() {
        let links: Vec<(&str, Vec<&str>)> = vec![];
        assert!(matches!(LinkGraph::new(links), Err(Error::InvalidGraph(_))));
    }

    #[test]
    fn self_links_removed() {
        let g = LinkGraph::new([("a", vec!["a", "b"]), ("b", vec!["b"])]).unwrap();
        assert_eq!(sorted_outlinks(&g, "a"), vec!["b"]);
        assert_eq!(g.out_degree(&"b"), Some(0));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn foreign_targets_dropped() {
        let g = LinkGraph::new([("a", vec!["b", "x", "y"]), ("b", vec!["a", "z"])]).unwrap();
        assert_eq!(g.len(), 2);
        assert!(!g.contains(&"x"));
        assert_eq!(sorted_outlinks(&g, "a"), vec!["b"]);
        assert_eq!(sorted_outlinks(&g, "b"), vec!["a"]);
    }

    #[test]
    fn repeated_keys_merge() {
        let g = LinkGraph::new([
            ("a", vec!["b"]),
            ("b", vec![]),
            ("c", vec![]),
            ("a", vec!["c", "b"]),
        ])
        .unwrap();
        assert_eq!(sorted_outlinks(&g, "a"), vec!["b", "c"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn canonical_order() {
        let g = LinkGraph::new([("c", vec![]), ("a", vec!["c"]), ("b", vec!["a"])]).unwrap();
        let nodes: Vec<_> = g.nodes().copied().collect();
        assert_eq!(nodes, vec!["a", "b", "c"]);
        let dangling: Vec<_> = g.dangling().copied().collect();
        assert_eq!(dangling, vec!["c"]);
    }

    #[test]
    fn unknown_node() {
        let g = LinkGraph::new([("a", vec![])]).unwrap();
        assert!(g.outlinks(&"b").is_none());
        assert!(g.out_degree(&"b").is_none());
        assert!(matches!(g.vertex_or_err(&"b"), Err(Error::UnknownNode(_))));
    }

    #[test]
    fn debug() {
        let g = LinkGraph::new([("b", vec!["a"]), ("a", vec!["b"])]).unwrap();
        assert_eq!(format!("{g:?}"), r#"{"a": ["b"], "b": ["a"]}"#);
    }
}
