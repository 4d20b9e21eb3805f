//! Plain-text utilities: paragraph chunking and the interactive text processor.

mod chunker;
mod history;
mod processor;

pub use chunker::chunk;
pub use history::{History, HistoryEntry};
pub use processor::{validate, Operation, OutputStyle, Processed};
