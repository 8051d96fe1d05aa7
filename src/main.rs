use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

use wordlife_common::SimulationConfig;
use wordlife_engine::batch::{highest_score, run_batch, sample_words, sampling_rng};
use wordlife_engine::output::write_reports;
use wordlife_engine::Simulator;

/// Command-line arguments for the engine
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Score words by seeding Conway's Game of Life with their bits",
    long_about = None
)]
struct Args {
    /// Words to simulate. When none are given, words are drawn from the configured pool.
    words: Vec<String>,

    /// Optional path to a config.toml file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of random words to draw from the pool (ignored when words are given)
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for random word sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Include the per-generation population trace in each report
    #[arg(long)]
    history: bool,

    /// Save results under this base filename
    #[arg(short, long)]
    output: Option<String>,

    /// Output format: json, bincode, messagepack or csv
    #[arg(short, long)]
    format: Option<String>,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();
    let args = Args::parse();

    // --- Load Configuration ---
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if args.history {
        config.simulation.record_history = true;
    }
    if let Some(seed) = args.seed {
        config.batch.sample_seed = Some(seed);
    }
    if let Some(base) = &args.output {
        config.output.base_filename = base.clone();
        config.output.save_results = true;
    }
    if let Some(format) = &args.format {
        config.output.format = Some(format.clone());
    }

    let simulator = Simulator::new(config.get_sim_params())?;
    debug!("Simulation Parameters: {:#?}", simulator.params());

    // --- Pick Words ---
    let words = if args.words.is_empty() {
        let count = args.random.unwrap_or(config.batch.random_count);
        let mut rng = sampling_rng(config.batch.sample_seed);
        let sampled = sample_words(&config.batch.words, count, &mut rng)?;
        info!("Generated words: {}.", sampled.join(", "));
        sampled
    } else {
        args.words.clone()
    };

    // --- Run ---
    info!("Simulating {} words using {} Rayon threads.", words.len(), rayon::current_num_threads());
    let start_time = Instant::now();
    let reports = run_batch(&simulator, &words);
    info!("Simulation finished in {:.3} ms.", start_time.elapsed().as_secs_f64() * 1000.0);

    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    if let Some(best) = highest_score(&reports) {
        info!(
            "Highest score: '{}' with {} points in {} generations.",
            best.word, best.score, best.generations
        );
    }

    // --- Save Results ---
    if config.output.save_results {
        let format = config.output.format.as_deref().unwrap_or("json");
        write_reports(&reports, &config.output.base_filename, format)?;
    } else {
        info!("Skipping saving results as per config (save_results is false).");
    }

    Ok(())
}
