use crate::simulation::Simulator;
use anyhow::Result;
use log::info;
use rand::prelude::*;
use rayon::prelude::*;
use wordlife_common::RunReport;

/// Simulates every word in parallel. Reports come back in input order.
pub fn run_batch(simulator: &Simulator, words: &[String]) -> Vec<RunReport> {
    words
        .par_iter()
        .map(|word| simulator.run_report(word))
        .collect()
}

/// Draws `count` distinct words from `pool`.
pub fn sample_words(pool: &[String], count: usize, rng: &mut StdRng) -> Result<Vec<String>> {
    if count > pool.len() {
        anyhow::bail!(
            "Cannot sample {} distinct words from a pool of {}.",
            count, pool.len()
        );
    }
    let mut words = pool.to_vec();
    words.shuffle(rng);
    words.truncate(count);
    Ok(words)
}

/// Seeds the sampling RNG, drawing a fresh seed when none is configured.
pub fn sampling_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!("Sampling words with seed {}.", seed);
    StdRng::seed_from_u64(seed)
}

/// The report with the highest score. Ties go to the earliest report.
pub fn highest_score(reports: &[RunReport]) -> Option<&RunReport> {
    reports.iter().fold(None, |best: Option<&RunReport>, report| match best {
        Some(b) if b.score >= report.score => Some(b),
        _ => Some(report),
    })
}
