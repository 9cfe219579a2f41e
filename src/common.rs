use algograph::graph::VertexId;
use std::{collections::HashMap, fmt::Display, hash::Hash};

/// A probability mass per node.
pub type Distribution<N> = HashMap<N, f64, ahash::RandomState>;

pub(crate) type VertexMap<T> = HashMap<VertexId, T, ahash::RandomState>;

pub fn norm_1<K: Hash + Eq>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// Largest absolute difference between `a` and `b` over the keys of `a`.
/// Keys missing from `b` count as zero.
pub fn max_delta<K: Hash + Eq>(
    a: &HashMap<K, f64, ahash::RandomState>,
    b: &HashMap<K, f64, ahash::RandomState>,
) -> f64 {
    a.iter()
        .map(|(k, x)| (x - b.get(k).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}

/// Scales `v` in place so that its values sum to one.
///
/// A zero vector is left untouched.
pub fn normalize<K: Hash + Eq>(v: &mut HashMap<K, f64, ahash::RandomState>) {
    let sum = norm_1(v);
    if sum > 0.0 {
        v.values_mut().for_each(|x| *x /= sum);
    }
}

/// One `  page: rank` line per page, sorted by page, ranks rounded to four
/// decimals.
pub fn format_ranks<N: Ord + Display>(ranks: &HashMap<N, f64, ahash::RandomState>) -> String {
    let mut pages: Vec<_> = ranks.iter().collect();
    pages.sort_by(|a, b| a.0.cmp(b.0));
    pages
        .into_iter()
        .map(|(page, rank)| format!("  {page}: {rank:.4}\n"))
        .collect()
}
