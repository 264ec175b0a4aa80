//! social-graph CLI: generate (or load) a network, print it, save it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use social_graph::{
    FriendsView, GraphBuilder, NetworkConfig, RandomPersonFactory, SnapshotCodec, SocialGraph,
    StatsReport,
};

#[derive(Debug, Parser)]
#[command(name = "social-graph", about = "Generate, analyse and snapshot a social network")]
struct Args {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of people to generate.
    #[arg(long)]
    population: Option<usize>,

    /// Seed for a reproducible network.
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads for construction.
    #[arg(long)]
    threads: Option<usize>,

    /// Where to write the snapshot.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Load this snapshot instead of generating a network.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Print statistics only, no profiles.
    #[arg(long, short)]
    quiet: bool,

    /// Debug-level logging for this crate.
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info,social_graph=debug" } else { "warn,social_graph=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn resolve_config(args: &Args) -> social_graph::Result<NetworkConfig> {
    let mut config = match &args.config {
        Some(path) => NetworkConfig::from_json_file(path)?,
        None => NetworkConfig::default(),
    };
    if let Some(population) = args.population {
        config.population = population;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    if let Some(output) = &args.output {
        config.snapshot_path = output.clone();
    }
    config.validate()?;
    Ok(config)
}

fn print_network(graph: &SocialGraph, quiet: bool) {
    let stats = graph.recompute_statistics();
    println!("=== SOCIAL NETWORK ===\n");
    println!("{}", StatsReport { population: graph.len(), stats: &stats });

    if quiet {
        return;
    }
    println!("=== PROFILES ===");
    for person in graph.people() {
        println!("\n{}", person.profile());
        println!("{}", FriendsView(person));
        println!("{}", "=".repeat(50));
    }
}

fn run(args: Args) -> social_graph::Result<()> {
    let config = resolve_config(&args)?;

    let graph = match &args.load {
        Some(path) => SnapshotCodec::load_from_file(path)?,
        None => {
            let seed = config.seed.unwrap_or_else(rand::random);
            let build = social_graph::BuildConfig { seed: Some(seed), ..config.build_config() };
            GraphBuilder::new(build, RandomPersonFactory::new(seed)).build()?
        }
    };

    print_network(&graph, args.quiet);

    SnapshotCodec::save_to_file(&graph, &config.snapshot_path)?;
    println!("\nNetwork saved to {}", config.snapshot_path.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
