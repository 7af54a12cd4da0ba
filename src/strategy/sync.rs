//! Synchronous processing strategy
//!
//! This module provides a single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates processing by coordinating
//! between the SyncReader (input) and the AuthorizationEngine (decisions).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - Line parsing to `SyncReader` (iterator interface)
//! - Decisions to `AuthorizationEngine` (business logic)
//! - Output to `json_format::write_authorization` (format handling)
//!
//! Each operation is fully evaluated and written before the next line is read.

use crate::core::{AuthorizationRules, InMemoryAuthorizationEngine};
use crate::io::json_format::write_authorization;
use crate::io::{InputSource, SyncReader};
use crate::strategy::ProcessingStrategy;
use crate::types::AuthorizerError;
use std::io::Write;
use tracing::{error, info};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use transaction_authorizer::core::AuthorizationRules;
/// use transaction_authorizer::io::InputSource;
/// use transaction_authorizer::strategy::{ProcessingStrategy, SyncProcessingStrategy};
///
/// let strategy = SyncProcessingStrategy::new(AuthorizationRules::default());
/// let mut output = std::io::stdout();
///
/// strategy.process(&InputSource::Stdin, &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    rules: AuthorizationRules,
}

impl SyncProcessingStrategy {
    pub fn new(rules: AuthorizationRules) -> Self {
        Self { rules }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input: &InputSource, output: &mut dyn Write) -> Result<(), AuthorizerError> {
        let mut engine = InMemoryAuthorizationEngine::in_memory(self.rules);
        let reader = SyncReader::open(input)?;
        info!(%input, strategy = "sync", "processing started");

        let mut processed = 0u64;
        for result in reader {
            let operation = result.inspect_err(|e| error!(error = %e, "aborting on bad input"))?;
            let authorization = engine.process(operation);
            write_authorization(&authorization, output)?;
            processed += 1;
        }

        info!(processed, "processing finished");
        Ok(())
    }
}
