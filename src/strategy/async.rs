//! Asynchronous pipelined processing strategy
//!
//! This module provides a pipelined implementation of the ProcessingStrategy
//! trait on the tokio multi-threaded runtime.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── PipelineConfig (channel_capacity)
//!     ├── reader task:  AsyncReader → bounded mpsc channel
//!     └── decision loop: channel → AsyncAuthorizationEngine → output
//! ```
//!
//! Reading and parsing run ahead of authorization, bounded by the channel
//! capacity. Decisions are still taken one at a time in input order, each
//! inside the engine's critical section, so the output is identical to the
//! synchronous strategy.

use crate::core::{AsyncAuthorizationEngine, AuthorizationRules};
use crate::io::json_format::write_authorization;
use crate::io::{AsyncReader, InputSource};
use crate::strategy::ProcessingStrategy;
use crate::types::{AuthorizerError, Operation};
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Default number of parsed operations buffered ahead of the decision loop
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Configuration for the async pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Parsed operations buffered between the reader task and the decision loop
    pub channel_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl PipelineConfig {
    /// Create a new PipelineConfig
    ///
    /// A zero capacity is rejected with a warning and replaced by the default.
    pub fn new(channel_capacity: usize) -> Self {
        let channel_capacity = if channel_capacity == 0 {
            warn!(
                channel_capacity,
                default = DEFAULT_CHANNEL_CAPACITY,
                "invalid channel capacity, using default"
            );
            DEFAULT_CHANNEL_CAPACITY
        } else {
            channel_capacity
        };

        Self { channel_capacity }
    }
}

/// Asynchronous pipelined processing strategy
#[derive(Debug, Clone, Default)]
pub struct AsyncProcessingStrategy {
    rules: AuthorizationRules,
    config: PipelineConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(rules: AuthorizationRules, config: PipelineConfig) -> Self {
        Self { rules, config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process operations through the reader task and the decision loop
    ///
    /// The reader task stops after forwarding the first bad line; the
    /// decision loop writes every result received before it and then
    /// returns that error.
    fn process(&self, input: &InputSource, output: &mut dyn Write) -> Result<(), AuthorizerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(AuthorizerError::runtime)?;

        let result = runtime.block_on(async {
            let engine = AsyncAuthorizationEngine::in_memory(self.rules);
            let mut reader = AsyncReader::open(input).await?;
            info!(%input, strategy = "async", "processing started");

            let (sender, mut receiver) =
                mpsc::channel::<Result<Operation, AuthorizerError>>(self.config.channel_capacity);

            let reader_task = tokio::spawn(async move {
                while let Some(result) = reader.next_operation().await {
                    let failed = result.is_err();
                    if sender.send(result).await.is_err() || failed {
                        break;
                    }
                }
            });

            let mut processed = 0u64;
            while let Some(result) = receiver.recv().await {
                let operation =
                    result.inspect_err(|e| error!(error = %e, "aborting on bad input"))?;
                let authorization = engine.process(operation).await;
                write_authorization(&authorization, output)?;
                processed += 1;
            }

            reader_task.await?;
            info!(processed, "processing finished");
            Ok::<(), AuthorizerError>(())
        });

        // A reader blocked on stdin must not hold up exit
        runtime.shutdown_background();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SyncProcessingStrategy;
    use rstest::rstest;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn create_temp_input(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const SESSION: &str = "{\"account\": {\"active-card\": true, \"available-limit\": 100}}\n\
        {\"transaction\": {\"merchant\": \"Burger King\", \"amount\": 20, \"time\": \"2019-02-13T10:00:00.000Z\"}}\n\
        {\"transaction\": {\"merchant\": \"Habbib's\", \"amount\": 90, \"time\": \"2019-02-13T11:00:00.000Z\"}}\n\
        {\"account\": {\"active-card\": false, \"available-limit\": 5}}\n";

    #[rstest]
    #[case::default_capacity(PipelineConfig::default())]
    #[case::tiny_capacity(PipelineConfig::new(1))]
    fn test_async_strategy_matches_sync_output(#[case] config: PipelineConfig) {
        let file = create_temp_input(SESSION);
        let source = InputSource::File(file.path().to_path_buf());

        let mut sync_output = Vec::new();
        SyncProcessingStrategy::default()
            .process(&source, &mut sync_output)
            .unwrap();

        let mut async_output = Vec::new();
        AsyncProcessingStrategy::new(AuthorizationRules::default(), config)
            .process(&source, &mut async_output)
            .unwrap();

        assert_eq!(async_output, sync_output);
        assert_eq!(String::from_utf8(async_output).unwrap().lines().count(), 4);
    }

    #[test]
    fn test_async_strategy_stops_on_malformed_line() {
        let file = create_temp_input(
            "{\"account\": {\"active-card\": true, \"available-limit\": 100}}\n\
             {\"account\": \n\
             {\"transaction\": {\"merchant\": \"a\", \"amount\": 1, \"time\": \"2019-02-13T10:00:00Z\"}}\n",
        );
        let mut output = Vec::new();

        let result = AsyncProcessingStrategy::default()
            .process(&InputSource::File(file.path().to_path_buf()), &mut output);

        assert!(matches!(
            result,
            Err(AuthorizerError::ParseError { line: Some(2), .. })
        ));
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_async_strategy_continues_past_line_without_operation() {
        let file = create_temp_input(
            "{\"account\": {\"active-card\": true, \"available-limit\": 10}}\n\
             {}\n\
             {\"transaction\": {\"merchant\": \"a\", \"amount\": 1, \"time\": \"2019-02-13T10:00:00Z\"}}\n",
        );
        let mut output = Vec::new();

        let result = AsyncProcessingStrategy::default()
            .process(&InputSource::File(file.path().to_path_buf()), &mut output);

        assert!(result.is_ok());
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert_eq!(
            output.lines().last(),
            Some("{\"account\":{\"active-card\":true,\"available-limit\":9},\"violations\":[]}")
        );
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let mut output = Vec::new();
        let result = AsyncProcessingStrategy::default().process(
            &InputSource::File(PathBuf::from("nonexistent.jsonl")),
            &mut output,
        );

        assert!(result.unwrap_err().to_string().contains("Failed to open file"));
        assert!(output.is_empty());
    }

    #[rstest]
    #[case::custom(16, 16)]
    #[case::zero_falls_back(0, DEFAULT_CHANNEL_CAPACITY)]
    fn test_pipeline_config(#[case] capacity: usize, #[case] expected: usize) {
        assert_eq!(PipelineConfig::new(capacity).channel_capacity, expected);
    }

    #[test]
    fn test_async_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AsyncProcessingStrategy>();
    }
}
