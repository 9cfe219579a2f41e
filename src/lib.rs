mod error;
pub use self::error::{Error, Result};
mod common;
pub use self::common::*;
mod graph;
pub use self::graph::{LinkGraph, Node};
pub mod corpus;
pub mod page_rank;
pub use self::page_rank::{
    estimate_by_iteration, estimate_by_sampling, transition, PageRank, PageRankResult,
};

#[cfg(test)]
mod testing;
