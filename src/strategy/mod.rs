//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! covering input reading, authorization and output writing. This allows
//! different implementations (single-threaded, pipelined async) to be
//! selected at runtime.

use crate::cli::StrategyType;
use crate::core::AuthorizationRules;
use crate::io::InputSource;
use crate::types::AuthorizerError;
use std::io::Write;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, PipelineConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete authorization pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Process operations from `input` and stream one result line per operation
    ///
    /// Output lines are written and flushed in input order as soon as each
    /// operation is decided.
    ///
    /// # Errors
    ///
    /// Returns an error, after flushing the results of all earlier lines, if:
    /// - The input cannot be opened or read
    /// - A line is not a valid operation record
    /// - Output cannot be written
    ///
    /// Violations are never errors; they are part of the written output.
    fn process(&self, input: &InputSource, output: &mut dyn Write) -> Result<(), AuthorizerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create
/// * `rules` - Window rule parameters for the engine
/// * `config` - Optional pipeline configuration (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    rules: AuthorizationRules,
    config: Option<PipelineConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(rules)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(rules, config))
        }
    }
}
