use crate::analyzer::cost_optimize::OutputFormat;
use crate::analyzer::cost_optimize::types::{MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cost-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate cloud costs and rank cost-optimization recommendations")]
#[command(
    long_about = "Estimates the monthly cloud cost of a project profile, infers its usage patterns, and produces a ranked list of cost-optimization recommendations from built-in rules and, optionally, a language model."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Produce a ranked optimization report for a project profile
    Optimize {
        /// Project profile (JSON, YAML or TOML)
        #[arg(value_name = "PROFILE")]
        profile: PathBuf,

        /// Number of recommendations to return
        #[arg(
            short = 'n',
            long = "num-recommendations",
            default_value_t = 15,
            value_parser = clap::value_parser!(u8).range(MIN_RECOMMENDATIONS as i64..=MAX_RECOMMENDATIONS as i64)
        )]
        num_recommendations: u8,

        /// Drop High-risk recommendations
        #[arg(long)]
        exclude_high_risk: bool,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Merge recommendations from the configured language model
        #[arg(long)]
        llm: bool,

        /// Include the implementation roadmap, high-impact and per-service views
        #[arg(long)]
        roadmap: bool,
    },

    /// Estimate monthly costs for a project profile
    Estimate {
        /// Project profile (JSON, YAML or TOML)
        #[arg(value_name = "PROFILE")]
        profile: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Analyze the usage patterns of a project profile
    Patterns {
        /// Project profile (JSON, YAML or TOML)
        #[arg(value_name = "PROFILE")]
        profile: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Print an example project profile
    Example {
        /// Profile format
        #[arg(long, value_enum, default_value = "json")]
        format: ProfileFormat,

        /// Write the profile to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the built-in optimization rules
    Rules {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Report format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
    Yaml,
    Summary,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Table => OutputFormat::Table,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Yaml => OutputFormat::Yaml,
            ReportFormat::Summary => OutputFormat::Summary,
        }
    }
}

/// Serialization format for project profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileFormat {
    Json,
    Yaml,
    Toml,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
