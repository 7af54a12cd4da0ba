//! Asynchronous JSON-lines reader
//!
//! Async counterpart of [`SyncReader`](crate::io::SyncReader), built on
//! tokio's buffered line reading.
//!
//! # Architecture
//!
//! ```text
//! tokio stdin / File → BufReader → AsyncReader → Operations
//!                                      ↓
//!                               json_format module
//! ```

use crate::io::input_source::{open_error, InputSource};
use crate::io::json_format::parse_operation;
use crate::types::{AuthorizerError, Operation};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Boxed async input, as returned by [`AsyncReader::open`]
pub type BoxedAsyncInput = Box<dyn AsyncBufRead + Unpin + Send>;

/// Asynchronous line reader
pub struct AsyncReader<R> {
    lines: Lines<R>,
    line_num: u64,
}

impl AsyncReader<BoxedAsyncInput> {
    /// Open a reader over the given source
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened.
    pub async fn open(source: &InputSource) -> Result<Self, AuthorizerError> {
        let reader: BoxedAsyncInput = match source {
            InputSource::Stdin => Box::new(BufReader::new(tokio::io::stdin())),
            InputSource::File(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| open_error(path, e))?;
                Box::new(BufReader::new(file))
            }
        };
        Ok(Self::new(reader))
    }
}

impl<R: AsyncBufRead + Unpin> AsyncReader<R> {
    /// Create a reader over any async buffered input
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    /// Read the next operation
    ///
    /// Blank lines are skipped. Returns `None` at end of input.
    pub async fn next_operation(&mut self) -> Option<Result<Operation, AuthorizerError>> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
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
