use anyhow::{Context, Result};
use clap::Parser;
use link_rank::{
    corpus, format_ranks,
    page_rank::{iterated, sampled, uniform_start},
    PageRank,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::path::PathBuf;

/// Ranks the pages of a directory of HTML files, once by random-walk
/// sampling and once by power iteration.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory holding the `.html` pages.
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page.
    #[arg(short, long, default_value_t = 0.85)]
    damping: f64,

    /// Length of the random walk.
    #[arg(short = 'n', long, default_value_t = 10000)]
    samples: usize,

    /// Largest per-page change at which iteration stops.
    #[arg(short, long, default_value_t = 0.001)]
    tolerance: f64,

    #[arg(long, default_value_t = 100)]
    max_iterations: usize,

    /// Seed of the random walk; taken from the OS when missing.
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "info" } else { "warn" }),
    )
    .init();

    let graph = corpus::crawl(&cli.corpus)
        .with_context(|| format!("Could not crawl {}", cli.corpus.display()))?;

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let ranks = sampled::SampledPageRank::new(&graph, &config, rng)?
        .calc(&uniform_start(&graph))?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print!("{}", format_ranks(&ranks.page_rank));

    let config = iterated::Config {
        damping: cli.damping,
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
    };
    let ranks = iterated::IteratedPageRank::new(&graph, &config)?
        .calc(&uniform_start(&graph))?;
    println!("PageRank Results from Iteration");
    print!("{}", format_ranks(&ranks.page_rank));
    Ok(())
}
