use super::*;
use crate::*;
use algograph::graph::VertexId;

/// PageRank by power iteration over
/// `PR(p) = (1 - d) / N + d * Σ_{q -> p} PR(q) / outdegree(q)`,
/// where the rank of a dangling page is spread over all `N` pages.
pub struct IteratedPageRank<'a, N>
where
    N: Node,
{
    graph: &'a LinkGraph<N>,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
    transitions: Vec<(VertexId, Vec<VertexId>)>,
    dangling: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 0.001,
            max_iterations: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result<N: Node> {
    pub page_rank: Distribution<N>,
    /// Change of every page in the last pass.
    pub delta: Distribution<N>,
    pub iterations: usize,
    pub max_delta: f64,
}

impl<'a, N: Node> IteratedPageRank<'a, N> {
    pub fn new(g: &'a LinkGraph<N>, config: &Config) -> crate::Result<Self> {
        error::check_damping(config.damping)?;
        error::check_tolerance(config.tolerance)?;
        error::check_positive("max_iterations", config.max_iterations)?;
        let mut transitions = vec![];
        let mut dangling = vec![];
        let mut adjacency = g.adjacency();
        for u in g.vertices().iter() {
            let vs = adjacency.remove(u).unwrap_or_default();
            if vs.is_empty() {
                dangling.push(*u);
            } else {
                transitions.push((*u, vs));
            }
        }
        Ok(Self {
            graph: g,
            damping: config.damping,
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
            transitions,
            dangling,
        })
    }

    /// One synchronous pass: every value of `r` is computed from `p` alone.
    fn step(&self, p: &VertexMap<f64>, r: &mut VertexMap<f64>) {
        let damping = self.damping;
        let n = self.graph.len() as f64;
        let dangling: f64 = self.dangling.iter().map(|u| p[u]).sum();
        let base = (1.0 - damping) / n + damping * dangling / n;
        r.clear();
        for v in self.graph.vertices().iter() {
            r.insert(*v, base);
        }
        for (u, vs) in self.transitions.iter() {
            let share = damping * p[u] / (vs.len() as f64);
            for v in vs.iter() {
                *r.get_mut(v).unwrap() += share;
            }
        }
    }
}

impl<N: Node> PageRank<N> for IteratedPageRank<'_, N> {
    type Result = self::Result<N>;

    /// `start` is the initial rank vector.
    fn calc(&mut self, start: &Distribution<N>) -> crate::Result<Self::Result> {
        log::info!(
            "iterating over {} pages, {} dangling (damping={}, tolerance={})",
            self.graph.len(),
            self.dangling.len(),
            self.damping,
            self.tolerance
        );
        let mut p = start_vector(self.graph, start)?;
        let mut r = VertexMap::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
        let mut max_delta = f64::INFINITY;
        for iteration in 1..=self.max_iterations {
            self.step(&p, &mut r);
            max_delta = common::max_delta(&r, &p);
            log::debug!("iteration {iteration}: max delta = {max_delta}");

            if max_delta < self.tolerance {
                log::info!("converged after {iteration} iterations");
                let delta = self
                    .graph
                    .vertices()
                    .iter()
                    .map(|v| (self.graph.node(*v).clone(), r[v] - p[v]))
                    .collect();
                normalize(&mut r);
                let page_rank = r
                    .into_iter()
                    .map(|(v, x)| (self.graph.node(v).clone(), x))
                    .collect();
                return Ok(Self::Result {
                    page_rank,
                    delta,
                    iterations: iteration,
                    max_delta,
                });
            }

            std::mem::swap(&mut p, &mut r);
        }
        log::warn!(
            "no convergence after {} iterations (max delta {max_delta})",
            self.max_iterations
        );
        Err(Error::NonConvergence {
            iterations: self.max_iterations,
            max_delta,
        })
    }
}

impl<N: Node> PageRankResult<N> for self::Result<N> {
    fn page_rank(&self) -> &Distribution<N> {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph<N>) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a, N: Node> {
    graph: &'a LinkGraph<N>,
    result: &'a self::Result<N>,
}

impl<N: Node> std::fmt::Debug for ResultDebug<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.nodes() {
            let p = self.result.page_rank.get(v).unwrap();
            let d = self.result.delta.get(v).unwrap();
            writeln!(f, "{v:?}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
