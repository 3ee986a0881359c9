mod config;
mod generate;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use social_graph_core::{
    connected_components, degree_of_separation, friend_suggestions, influential_users,
    network_stats, SocialGraph, STATS_TOP_N,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DemoConfig;
use report::DemoReport;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "social-graph-bench", about = "Social graph demo and benchmarks")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a random network and print every analysis once.
    Demo {
        /// JSON file with DemoConfig fields. Flags below take precedence.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        users: Option<usize>,
        #[arg(long)]
        connections: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// User to compute friend suggestions for.
        #[arg(long)]
        user: Option<usize>,
        #[arg(long)]
        pairs: Option<usize>,
        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Time each query on synthetic topologies.
    Bench {
        #[arg(long, default_value = "all", value_parser = ["all", "random", "chain", "star", "smallworld", "scalefree"])]
        mode: String,
        #[arg(long, default_value_t = 100_000)]
        users: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo {
            config,
            users,
            connections,
            seed,
            user,
            pairs,
            json,
        } => {
            let mut cfg = match config {
                Some(path) => DemoConfig::load(&path)?,
                None => DemoConfig::default(),
            };
            if let Some(v) = users {
                cfg.users = v;
            }
            if let Some(v) = connections {
                cfg.connection_attempts = v;
            }
            if seed.is_some() {
                cfg.seed = seed;
            }
            if let Some(v) = user {
                cfg.suggestion_user = v;
            }
            if let Some(v) = pairs {
                cfg.separation_pairs = v;
            }
            run_demo(&cfg, json)
        }
        Commands::Bench { mode, users, seed } => run_benchmarks(&mode, users, seed),
    }
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

fn run_demo(config: &DemoConfig, json: bool) -> Result<()> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut graph = SocialGraph::new(config.users)?;
    let added =
        generate::generate_random_connections(&mut graph, config.connection_attempts, &mut rng)?;
    info!(
        seed,
        users = config.users,
        attempts = config.connection_attempts,
        added,
        "random network generated"
    );

    let report = DemoReport::build(&graph, config, seed, &mut rng)?;
    if json {
        let out = serde_json::to_string_pretty(&report).context("serializing demo report")?;
        println!("{out}");
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

type Generator = fn(usize, &mut ChaCha8Rng) -> Result<SocialGraph>;

fn run_benchmarks(mode: &str, users: usize, seed: u64) -> Result<()> {
    if users < 2 {
        bail!("benchmarks need at least 2 users, got {users}");
    }

    let all: [(&str, &str, Generator); 5] = [
        ("random", "Random (uniform pairs)", generate::gen_random),
        ("chain", "Chain (single path)", generate::gen_chain),
        ("star", "Star (single hub)", generate::gen_star),
        ("smallworld", "Small-world (Watts-Strogatz)", generate::gen_small_world),
        ("scalefree", "Scale-free (preferential attachment)", generate::gen_scale_free),
    ];
    let generators: Vec<(&str, Generator)> = all
        .into_iter()
        .filter(|(key, _, _)| mode == "all" || mode == *key)
        .map(|(_, name, generator)| (name, generator))
        .collect();

    println!("social-graph-bench");
    println!("==================");
    println!();

    for (name, generator) in generators {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        run_benchmark(name, generator, users, &mut rng)?;
    }
    Ok(())
}

fn run_benchmark(
    name: &str,
    generator: Generator,
    users: usize,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(users, rng)?;
    println!(
        "Generated in {:.2}s: {} users, {} connections, ~{:.1}MB",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.connection_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let far_user = graph.node_count() - 1;

    let t = Instant::now();
    let hops = degree_of_separation(&graph, 0, far_user)?;
    report_timing(
        &format!(
            "separation 0 → {far_user} ({})",
            hops.map_or_else(|| "no path".to_string(), |h| format!("{h} hops"))
        ),
        t,
    );

    let t = Instant::now();
    let components = connected_components(&graph);
    report_timing(&format!("components ({})", components.len()), t);

    let t = Instant::now();
    let stats = network_stats(&graph, STATS_TOP_N);
    report_timing(
        &format!("degree ranking (avg {:.2})", stats.average_connections),
        t,
    );

    let t = Instant::now();
    let influential = influential_users(&graph);
    let hub = influential.first().copied().unwrap_or(0);
    report_timing("influential users", t);

    let t = Instant::now();
    let suggestions = friend_suggestions(&graph, hub)?;
    report_timing(
        &format!("suggestions for user {hub} ({})", suggestions.len()),
        t,
    );

    println!();
    Ok(())
}

fn report_timing(label: &str, started: Instant) {
    println!(
        "{:<44} {:>10.2}ms",
        label,
        started.elapsed().as_secs_f64() * 1000.0
    );
}
