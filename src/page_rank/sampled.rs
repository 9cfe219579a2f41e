use super::*;
use crate::*;
use algograph::graph::VertexId;
use rand::Rng;
use std::collections::HashMap;

/// Monte Carlo PageRank: the visit frequencies of a single long random walk.
pub struct SampledPageRank<'a, N, R>
where
    N: Node,
    R: Rng,
{
    graph: &'a LinkGraph<N>,
    model: TransitionModel<'a, N>,
    samples: usize,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result<N: Node> {
    pub page_rank: Distribution<N>,
    pub visits: HashMap<N, usize, ahash::RandomState>,
}

impl<'a, N: Node, R: Rng> SampledPageRank<'a, N, R> {
    pub fn new(g: &'a LinkGraph<N>, config: &Config, rng: R) -> crate::Result<Self> {
        error::check_positive("samples", config.samples)?;
        let model = TransitionModel::new(g, config.damping)?;
        Ok(Self {
            graph: g,
            model,
            samples: config.samples,
            rng,
        })
    }
}

impl<N: Node, R: Rng> PageRank<N> for SampledPageRank<'_, N, R> {
    type Result = self::Result<N>;

    /// `start` is the distribution the first page of the walk is drawn from.
    fn calc(&mut self, start: &Distribution<N>) -> crate::Result<Self::Result> {
        let start: Vec<_> = {
            let p = start_vector(self.graph, start)?;
            self.graph
                .vertices()
                .iter()
                .map(|v| (*v, *p.get(v).unwrap_or(&0.0)))
                .collect()
        };
        log::info!(
            "sampling {} steps over {} pages (damping={})",
            self.samples,
            self.graph.len(),
            self.model.damping()
        );

        let mut visits: VertexMap<usize> = self.graph.vertices().iter().map(|v| (*v, 0)).collect();
        let mut cur = pick(&start, self.rng.random());
        let mut dist = Vec::with_capacity(self.graph.len());
        for _ in 0..self.samples {
            *visits.get_mut(&cur).unwrap() += 1;
            self.model.fill(cur, &mut dist);
            cur = pick(&dist, self.rng.random());
        }

        let samples = self.samples as f64;
        let page_rank = visits
            .iter()
            .map(|(v, k)| (self.graph.node(*v).clone(), *k as f64 / samples))
            .collect();
        let visits = visits
            .into_iter()
            .map(|(v, k)| (self.graph.node(v).clone(), k))
            .collect();
        Ok(Self::Result { page_rank, visits })
    }
}

/// Inverse-CDF draw: the first entry whose cumulative mass exceeds `x`,
/// with `x` in `[0, 1)`.
fn pick(dist: &[(VertexId, f64)], x: f64) -> VertexId {
    let mut acc = 0.0;
    for (v, p) in dist.iter() {
        acc += p;
        if x < acc {
            return *v;
        }
    }
    // `acc` fell short of `x` by rounding; settle on the last reachable entry.
    dist.iter()
        .rev()
        .find(|(_, p)| *p > 0.0)
        .or(dist.last())
        .map(|(v, _)| *v)
        .expect("distribution over a non-empty graph")
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
            let k = self.result.visits.get(v).unwrap();
            writeln!(f, "{v:?}: {p:?}, {k}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RandomGraph;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::SmallRng, SeedableRng};

    fn run<N: Node>(g: &LinkGraph<N>, damping: f64, samples: usize, seed: u64) -> Result<N> {
        let rng = SmallRng::seed_from_u64(seed);
        let mut spr = SampledPageRank::new(g, &Config { damping, samples }, rng).unwrap();
        spr.calc(&uniform_start(g)).unwrap()
    }

    #[test]
    fn single_node() {
        let g = LinkGraph::new([("a", vec![])]).unwrap();
        let res = run(&g, 0.85, 100, 3407);
        assert_eq!(res.page_rank["a"], 1.0);
        assert_eq!(res.visits["a"], 100);
    }

    #[test]
    fn two_cycle() {
        let g = LinkGraph::new([("a", vec!["b"]), ("b", vec!["a"])]).unwrap();
        let res = run(&g, 0.85, 200000, 3407);
        assert!((res.page_rank["a"] - 0.5).abs() < 0.01, "{:?}", res.debug(&g));
        assert!((res.page_rank["b"] - 0.5).abs() < 0.01, "{:?}", res.debug(&g));
    }

    #[test]
    fn visits_partition_samples() {
        let g = LinkGraph::new([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
            ("d", vec!["c"]),
        ])
        .unwrap();
        let res = run(&g, 0.85, 12345, 7);
        assert_eq!(res.visits.values().sum::<usize>(), 12345);
        assert!((norm_1(&res.page_rank) - 1.0).abs() < 1e-12);
        assert_eq!(res.page_rank.len(), 4);
    }

    #[test]
    fn reproducible() {
        let g = LinkGraph::new([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec![])]).unwrap();
        let x = run(&g, 0.85, 1000, 42);
        let y = run(&g, 0.85, 1000, 42);
        assert_eq!(x.visits, y.visits);
    }

    #[test]
    fn start_distribution() {
        let g = LinkGraph::new([("a", vec![]), ("b", vec![])]).unwrap();
        let start: Distribution<_> = [("b", 1.0)].into_iter().collect();
        let rng = SmallRng::seed_from_u64(1);
        let mut spr = SampledPageRank::new(&g, &Config { damping: 0.85, samples: 1 }, rng).unwrap();
        let res = spr.calc(&start).unwrap();
        assert_eq!(res.visits["b"], 1);
        assert_eq!(res.visits["a"], 0);
    }

    #[test]
    fn rejects_bad_config() {
        let g = LinkGraph::new([("a", vec![])]).unwrap();
        let rng = SmallRng::seed_from_u64(1);
        let cfg = Config {
            damping: 0.85,
            samples: 0,
        };
        assert!(matches!(
            SampledPageRank::new(&g, &cfg, rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn pick_inverse_cdf() {
        let g = LinkGraph::new([("a", vec![]), ("b", vec![]), ("c", vec![])]).unwrap();
        let vs = g.vertices();
        let dist = vec![(vs[0], 0.2), (vs[1], 0.0), (vs[2], 0.8)];
        assert_eq!(pick(&dist, 0.0), vs[0]);
        assert_eq!(pick(&dist, 0.19), vs[0]);
        assert_eq!(pick(&dist, 0.2), vs[2]);
        assert_eq!(pick(&dist, 0.999999), vs[2]);
        let short = vec![(vs[0], 0.5), (vs[1], 0.5 - 1e-12), (vs[2], 0.0)];
        assert_eq!(pick(&short, 1.0 - 1e-15), vs[1]);
    }

    #[quickcheck]
    fn sums_to_one(g: RandomGraph, seed: u64) -> bool {
        let res = run(&g.graph, 0.85, 500, seed);
        res.visits.values().sum::<usize>() == 500 && (norm_1(&res.page_rank) - 1.0).abs() < 1e-12
    }
}
