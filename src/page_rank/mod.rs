//! The two PageRank estimators and the random-surfer model they share.

mod traits;
pub use self::traits::*;
pub mod iterated;
pub mod sampled;
pub mod transition;
pub use self::transition::{transition, TransitionModel};

use crate::*;
use rand::Rng;

/// `1 / N` for every page.
pub fn uniform_start<N: Node>(graph: &LinkGraph<N>) -> Distribution<N> {
    let n = graph.len() as f64;
    graph.nodes().map(|v| (v.clone(), 1.0 / n)).collect()
}

/// Checks a caller-supplied initial distribution and keys it by vertex.
/// Pages missing from `start` get zero.
pub(crate) fn start_vector<N: Node>(
    graph: &LinkGraph<N>,
    start: &Distribution<N>,
) -> Result<VertexMap<f64>> {
    let mut p: VertexMap<f64> = graph.vertices().iter().map(|v| (*v, 0.0)).collect();
    let mut p_sum = 0.0;
    for (u, w) in start.iter() {
        let v = graph.vertex_or_err(u)?;
        if !w.is_finite() || *w < 0.0 {
            return Err(Error::InvalidArgument(format!("start[{u:?}]={w}")));
        }
        p.insert(v, *w);
        p_sum += w;
    }
    if (p_sum - 1.0).abs() >= 1e-7 {
        return Err(Error::InvalidArgument(format!(
            "start distribution sums to {p_sum}"
        )));
    }
    Ok(p)
}

/// PageRank by random walk of `samples` steps, starting from a uniformly
/// chosen page.
pub fn estimate_by_sampling<N: Node, R: Rng>(
    graph: &LinkGraph<N>,
    damping: f64,
    samples: usize,
    rng: R,
) -> Result<Distribution<N>> {
    let config = sampled::Config { damping, samples };
    let res = sampled::SampledPageRank::new(graph, &config, rng)?.calc(&uniform_start(graph))?;
    Ok(res.page_rank)
}

/// PageRank by power iteration from the uniform distribution.
pub fn estimate_by_iteration<N: Node>(
    graph: &LinkGraph<N>,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<Distribution<N>> {
    let config = iterated::Config {
        damping,
        tolerance,
        max_iterations,
    };
    let res = iterated::IteratedPageRank::new(graph, &config)?.calc(&uniform_start(graph))?;
    Ok(res.page_rank)
}
