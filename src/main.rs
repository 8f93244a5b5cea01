use anyhow::{Context, Result};
use clap::Parser;
use riskmap::checklist::{
    compute_completion_stats, compute_maturity_stats, format_completion_summary,
};
use riskmap::cli::{Cli, Commands, OutputFormat};
use riskmap::core::{AssessmentItem, RiskRecord};
use riskmap::metrics::{compute_risk_metrics, compute_risk_metrics_at, format_metrics_summary};
use serde::de::DeserializeOwned;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics {
            path,
            format,
            as_of,
        } => {
            let risks: Vec<RiskRecord> = load_json(&path)?;
            let metrics = match as_of {
                Some(anchor) => compute_risk_metrics_at(&risks, anchor),
                None => compute_risk_metrics(&risks),
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
                OutputFormat::Terminal => print!("{}", format_metrics_summary(&metrics)),
            }
        }
        Commands::Checklist {
            path,
            format,
            maturity,
        } => {
            let items: Vec<AssessmentItem> = load_json(&path)?;
            let stats = compute_completion_stats(&items);
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                    if maturity {
                        let maturity_stats = compute_maturity_stats(&items);
                        println!("{}", serde_json::to_string_pretty(&maturity_stats)?);
                    }
                }
                OutputFormat::Terminal => {
                    print!("{}", format_completion_summary(&stats));
                    if maturity {
                        let maturity_stats = compute_maturity_stats(&items);
                        println!("Maturity:      {} -> {} (gap {})",
                            maturity_stats.average_current,
                            maturity_stats.average_target,
                            maturity_stats.average_gap
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
