use anyhow::{Context, Result};
use log::{error, info};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use wordlife_common::RunReport;

/// Writes run reports to `<base_filename>_results.<ext>` in the requested format
/// ("json", "bincode", "messagepack" or "csv"). Unknown formats fall back to JSON.
/// Returns the path written.
pub fn write_reports(reports: &[RunReport], base_filename: &str, format: &str) -> Result<PathBuf> {
    match format {
        "json" => write_json(reports, base_filename),
        "bincode" => {
            // Binary format (compact, Rust-only)
            let filename = PathBuf::from(format!("{}_results.bin", base_filename));
            let file = File::create(&filename)
                .with_context(|| format!("Error creating results file '{}'", filename.display()))?;
            bincode::serialize_into(file, reports)
                .context("Error serializing results to bincode")?;
            info!("{} results saved to {} (binary format)", reports.len(), filename.display());
            Ok(filename)
        }
        "messagepack" => {
            // MessagePack format (compact and cross-platform)
            let filename = PathBuf::from(format!("{}_results.msgpack", base_filename));
            let mut file = File::create(&filename)
                .with_context(|| format!("Error creating results file '{}'", filename.display()))?;
            rmp_serde::encode::write(&mut file, reports)
                .context("Error serializing results to MessagePack")?;
            info!("{} results saved to {} (MessagePack format)", reports.len(), filename.display());
            Ok(filename)
        }
        "csv" => {
            let filename = PathBuf::from(format!("{}_results.csv", base_filename));
            let mut writer = csv::Writer::from_path(&filename)
                .with_context(|| format!("Error creating CSV file '{}'", filename.display()))?;
            writer.write_record(["word", "generations", "score", "termination"])?;
            for report in reports {
                writer.write_record([
                    report.word.clone(),
                    report.generations.to_string(),
                    report.score.to_string(),
                    report.termination.to_string(),
                ])?;
            }
            writer.flush()?;
            info!("{} results saved to {}", reports.len(), filename.display());
            Ok(filename)
        }
        _ => {
            error!("Unknown output format: {}. Using JSON instead.", format);
            write_json(reports, base_filename)
        }
    }
}

fn write_json(reports: &[RunReport], base_filename: &str) -> Result<PathBuf> {
    let filename = PathBuf::from(format!("{}_results.json", base_filename));
    let json_string = serde_json::to_string(reports).context("Error serializing results to JSON")?;
    let mut file = File::create(&filename)
        .with_context(|| format!("Error creating results file '{}'", filename.display()))?;
    file.write_all(json_string.as_bytes())
        .with_context(|| format!("Error writing results JSON to file '{}'", filename.display()))?;
    info!("{} results saved to {}", reports.len(), filename.display());
    Ok(filename)
}
