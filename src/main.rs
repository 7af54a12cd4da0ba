//! Transaction Authorizer CLI
//!
//! Command-line interface for authorizing card transactions read as JSON lines.
//!
//! # Usage
//!
//! ```bash
//! cargo run < operations.jsonl
//! cargo run -- operations.jsonl
//! cargo run -- --strategy async operations.jsonl
//! cargo run -- --window-secs 60 --max-transactions 5 < operations.jsonl
//! RUST_LOG=debug cargo run -- operations.jsonl 2> authorizer.log
//! ```
//!
//! Each input line is either an account creation or a transaction. The
//! program writes one JSON line per operation to stdout, carrying the account
//! state after the operation and the list of violated rules.
//!
//! # Processing Strategies
//!
//! - **sync**: Read, decide and write one line at a time (default)
//! - **async**: A reader task parses ahead into a bounded channel while
//!   decisions are taken in order
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unreadable input, malformed line, etc.)

use std::process;
use tracing::error;
use transaction_authorizer::cli;
use transaction_authorizer::strategy;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let strategy =
        strategy::create_strategy(args.strategy, args.to_rules(), args.to_pipeline_config());

    // Output goes to stdout, diagnostics to stderr
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_source(), &mut output) {
        error!(error = %e, "processing failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
