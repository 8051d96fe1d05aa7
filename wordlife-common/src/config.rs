use serde::{Deserialize, Serialize};
use anyhow::Result;
use crate::sim_params::{SimParams, MAX_GENERATIONS};
use std::path::Path;

// Configuration for the generation loop
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RunConfig {
    #[serde(default = "default_max_generations")]
    pub max_generations: u32,
    #[serde(default)]
    pub record_history: bool,
}

// Configuration for multi-word runs, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Candidate pool that random words are drawn from.
    #[serde(default = "default_words")]
    pub words: Vec<String>,
    #[serde(default = "default_random_count")]
    pub random_count: usize,
    /// Fixed seed for word sampling. Drawn from the OS when absent.
    #[serde(default)]
    pub sample_seed: Option<u64>,
}

// Configuration for output settings, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_base_filename")]
    pub base_filename: String,
    #[serde(default)]
    pub save_results: bool,
    #[serde(default)]
    pub format: Option<String>, // "json" (default), "bincode", "messagepack" or "csv"
}

// Main configuration structure, loaded from config.toml.
// Every section may be omitted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SimulationConfig {
    #[serde(default)]
    pub simulation: RunConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            max_generations: default_max_generations(),
            record_history: false,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            words: default_words(),
            random_count: default_random_count(),
            sample_seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            base_filename: default_base_filename(),
            save_results: false,
            format: None,
        }
    }
}

impl SimulationConfig {
    /// Loads the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref)
            .map_err(|e| {
                anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e)
            })?;
        let config = Self::from_toml_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Invalid config in '{}': {}", path_ref.display(), e))?;

        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_generations == 0 {
            anyhow::bail!("max_generations must be greater than 0.");
        }
        if self.simulation.max_generations > MAX_GENERATIONS {
            anyhow::bail!(
                "max_generations ({}) may not exceed the hard cap of {}.",
                self.simulation.max_generations, MAX_GENERATIONS
            );
        }
        if self.batch.random_count == 0 {
            anyhow::bail!("random_count must be greater than 0.");
        }
        if self.batch.words.is_empty() {
            anyhow::bail!("batch word pool must not be empty.");
        }
        Ok(())
    }

    /// Converts the configuration into the parameters used at runtime.
    pub fn get_sim_params(&self) -> SimParams {
        SimParams {
            max_generations: self.simulation.max_generations,
            record_history: self.simulation.record_history,
        }
    }
}

fn default_max_generations() -> u32 {
    MAX_GENERATIONS
}

fn default_random_count() -> usize {
    3
}

fn default_base_filename() -> String {
    "wordlife".to_string()
}

// NATO phonetic alphabet
fn default_words() -> Vec<String> {
    [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot",
        "golf", "hotel", "india", "juliet", "kilo", "lima",
        "mike", "november", "oscar", "papa", "quebec", "romeo",
        "sierra", "tango", "uniform", "victor", "whiskey", "xray",
        "yankee", "zulu",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}
