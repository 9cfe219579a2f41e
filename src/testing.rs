use crate::LinkGraph;
use quickcheck::{Arbitrary, Gen};

/// A random link graph of 1 to 10 pages, possibly with dangling pages and
/// self links.
pub struct RandomGraph {
    pub links: Vec<(u32, Vec<u32>)>,
    pub graph: LinkGraph<u32>,
}

impl RandomGraph {
    fn from_links(links: Vec<(u32, Vec<u32>)>) -> Self {
        let graph = LinkGraph::new(links.clone()).unwrap();
        Self { links, graph }
    }
}

impl Clone for RandomGraph {
    fn clone(&self) -> Self {
        Self::from_links(self.links.clone())
    }
}

impl std::fmt::Debug for RandomGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.graph)
    }
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 10;

        let n = usize::arbitrary(g) % N + 1;
        let mut links: Vec<(u32, Vec<u32>)> = (0..n as u32).map(|u| (u, vec![])).collect();
        for _ in 0..(n * 2) {
            let u = usize::arbitrary(g) % n;
            let v = usize::arbitrary(g) % n;
            links[u].1.push(v as u32);
        }
        Self::from_links(links)
    }
}
