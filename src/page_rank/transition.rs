use crate::*;
use algograph::graph::VertexId;

/// Where a random surfer goes next.
///
/// With probability `damping` the surfer follows one of the current page's
/// outlinks, otherwise it jumps to any page uniformly. A page without
/// outlinks is treated as linking to every page, itself included, so the
/// damped mass is never lost.
pub struct TransitionModel<'a, N: Node> {
    graph: &'a LinkGraph<N>,
    damping: f64,
    index: VertexMap<usize>,
    transitions: VertexMap<Vec<VertexId>>,
}

impl<'a, N: Node> TransitionModel<'a, N> {
    pub fn new(graph: &'a LinkGraph<N>, damping: f64) -> Result<Self> {
        error::check_damping(damping)?;
        let index = graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();
        Ok(Self {
            graph,
            damping,
            index,
            transitions: graph.adjacency(),
        })
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// The next-page distribution from `node`.
    pub fn distribution(&self, node: &N) -> Result<Distribution<N>> {
        let u = self.graph.vertex_or_err(node)?;
        let mut buf = Vec::with_capacity(self.graph.len());
        self.fill(u, &mut buf);
        Ok(buf
            .into_iter()
            .map(|(v, p)| (self.graph.node(v).clone(), p))
            .collect())
    }

    /// Writes the distribution from `u` into `out` as `(vertex, probability)`
    /// pairs in canonical node order.
    pub(crate) fn fill(&self, u: VertexId, out: &mut Vec<(VertexId, f64)>) {
        let n = self.graph.len() as f64;
        let links = &self.transitions[&u];
        out.clear();
        if links.is_empty() {
            out.extend(self.graph.vertices().iter().map(|v| (*v, 1.0 / n)));
            return;
        }
        let jump = (1.0 - self.damping) / n;
        out.extend(self.graph.vertices().iter().map(|v| (*v, jump)));
        let follow = self.damping / (links.len() as f64);
        for v in links.iter() {
            out[self.index[v]].1 += follow;
        }
    }
}

/// The next-page distribution from `node` under `damping`.
pub fn transition<N: Node>(
    graph: &LinkGraph<N>,
    node: &N,
    damping: f64,
) -> Result<Distribution<N>> {
    TransitionModel::new(graph, damping)?.distribution(node)
}
