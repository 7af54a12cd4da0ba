//! Synchronous JSON-lines reader with iterator interface
//!
//! Provides a streaming iterator over operations read from stdin or a file.
//! Delegates format concerns to the json_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<Operation, AuthorizerError>` for each non-blank line:
//!
//! ```no_run
//! use transaction_authorizer::io::{InputSource, SyncReader};
//!
//! let reader = SyncReader::open(&InputSource::Stdin).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("Operation: {:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the input is returned from `open()`
//! - Read and parse errors are yielded as Err variants, with line numbers
//! - Blank lines are skipped but still counted

use crate::io::input_source::{open_error, InputSource};
use crate::io::json_format::parse_operation;
use crate::types::{AuthorizerError, Operation};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};

/// Synchronous line reader
///
/// Reads one line at a time; memory use does not grow with input size.
#[derive(Debug)]
pub struct SyncReader<R> {
    lines: Lines<R>,
    line_num: u64,
}

impl SyncReader<Box<dyn BufRead>> {
    /// Open a reader over the given source
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened.
    pub fn open(source: &InputSource) -> Result<Self, AuthorizerError> {
        let reader: Box<dyn BufRead> = match source {
            InputSource::Stdin => Box::new(io::stdin().lock()),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| open_error(path, e))?;
                Box::new(BufReader::with_capacity(8 * 1024, file))
            }
        };
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> SyncReader<R> {
    /// Create a reader over any buffered input
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }
}

impl<R: BufRead> Iterator for SyncReader<R> {
    type Item = Result<Operation, AuthorizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(parse_operation(&line, self.line_num));
        }
    }
}
