use crate::core::rules::{DEFAULT_HIGH_FREQUENCY_THRESHOLD, DEFAULT_WINDOW_SECS};
use crate::core::AuthorizationRules;
use crate::io::InputSource;
use crate::strategy::r#async::DEFAULT_CHANNEL_CAPACITY;
use crate::strategy::PipelineConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Authorize card transactions against a single account
#[derive(Parser, Debug)]
#[command(name = "authorize")]
#[command(about = "Authorize card transactions against a single account", long_about = None)]
pub struct CliArgs {
    /// Input file containing one JSON operation per line
    #[arg(
        value_name = "INPUT",
        help = "Path to the JSON-lines input file (reads stdin when omitted)"
    )]
    pub input_file: Option<PathBuf>,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for line-by-line or 'async' for a pipelined reader"
    )]
    pub strategy: StrategyType,

    /// Trailing window length in seconds
    #[arg(
        long = "window-secs",
        value_name = "SECONDS",
        default_value_t = DEFAULT_WINDOW_SECS,
        help = "Length of the trailing window used by the frequency and duplicate rules"
    )]
    pub window_secs: u32,

    /// Windowed transaction count that triggers the frequency rule
    #[arg(
        long = "max-transactions",
        value_name = "COUNT",
        default_value_t = DEFAULT_HIGH_FREQUENCY_THRESHOLD,
        help = "Approved transactions inside the window at which new ones are rejected"
    )]
    pub max_transactions: usize,

    /// Operations buffered ahead of authorization (async mode only)
    #[arg(
        long = "channel-capacity",
        value_name = "COUNT",
        default_value_t = DEFAULT_CHANNEL_CAPACITY,
        help = "Parsed operations buffered ahead of the decision loop (async only)"
    )]
    pub channel_capacity: usize,

    /// Log filter used when RUST_LOG is unset
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter for stderr diagnostics; RUST_LOG takes precedence"
    )]
    pub log_level: String,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Where operations are read from
    pub fn input_source(&self) -> InputSource {
        InputSource::from(self.input_file.clone())
    }

    /// Build the authorization rules from CLI arguments
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn to_rules(&self) -> AuthorizationRules {
        AuthorizationRules::new(self.window_secs, self.max_transactions)
    }

    /// Create a PipelineConfig from CLI arguments
    ///
    /// # Returns
    ///
    /// `Some` for the async strategy, `None` for sync, which has no pipeline.
    pub fn to_pipeline_config(&self) -> Option<PipelineConfig> {
        match self.strategy {
            StrategyType::Sync => None,
            StrategyType::Async => Some(PipelineConfig::new(self.channel_capacity)),
        }
    }
}
