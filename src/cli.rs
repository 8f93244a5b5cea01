use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (the dashboard API shape)
    Json,
    /// Human-readable terminal summary
    Terminal,
}

#[derive(Parser, Debug)]
#[command(name = "riskmap")]
#[command(about = "Risk scoring and metrics aggregation for GRC dashboards", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute dashboard metrics from a JSON risk register
    Metrics {
        /// Path to a JSON array of risk records
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Anchor date for the 12-month trend, YYYY-MM-DD (defaults to today)
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,
    },
    /// Compute completion statistics from a JSON assessment checklist
    Checklist {
        /// Path to a JSON array of assessment items
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Also report maturity averages for maturity-style assessments
        #[arg(long)]
        maturity: bool,
    },
}
