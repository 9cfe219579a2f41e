use crate::{Distribution, LinkGraph, Node};

pub trait PageRank<N: Node> {
    type Result: PageRankResult<N>;

    /// Runs the estimator from the initial distribution `start`.
    fn calc(&mut self, start: &Distribution<N>) -> crate::Result<Self::Result>;
}

pub trait PageRankResult<N: Node> {
    fn page_rank(&self) -> &Distribution<N>;
    fn debug<'a>(&'a self, graph: &'a LinkGraph<N>) -> impl std::fmt::Debug + 'a;
}
