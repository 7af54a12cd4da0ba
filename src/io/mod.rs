//! I/O module
//!
//! Handles the JSON-lines input and output.
//!
//! # Components
//!
//! - `input_source` - Stdin or file input selection
//! - `json_format` - Wire format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous line reader with iterator interface
//! - `async_reader` - Asynchronous line reader on tokio

pub mod async_reader;
pub mod input_source;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use input_source::InputSource;
pub use json_format::{convert_input_record, parse_operation, write_authorization, InputRecord};
pub use sync_reader::SyncReader;
