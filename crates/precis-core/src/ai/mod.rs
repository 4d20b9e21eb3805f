pub mod providers;
mod report;
mod summarizer;

pub use providers::{AiProvider, GenerationParams};
pub use report::{key_points, Report, SummaryReport, MAX_KEY_POINTS, NO_CONTENT_MESSAGE};
pub use summarizer::{build_provider, Summarizer};
