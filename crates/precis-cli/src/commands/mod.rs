pub mod ask;
pub mod brief;
pub mod config;
pub mod process;
pub mod summarize;
