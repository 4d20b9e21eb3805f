use std::fmt;

/// Maximum number of key points extracted from a summary
pub const MAX_KEY_POINTS: usize = 5;

pub const NO_CONTENT_MESSAGE: &str = "No article text received.";

/// Final output of the chunked summarizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The article was empty; nothing was summarized
    NoContent,
    Summary(SummaryReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub summary: String,
    pub key_points: Vec<String>,
    /// Number of chunks the article was split into
    pub chunk_count: usize,
}

impl Report {
    pub fn summary(summary: String, chunk_count: usize) -> Self {
        let key_points = key_points(&summary);
        Report::Summary(SummaryReport {
            summary,
            key_points,
            chunk_count,
        })
    }
}

/// Split on every period and keep the first few non-empty sentences, each
/// re-terminated with a period. Abbreviations and decimals are split too.
pub fn key_points(summary: &str) -> Vec<String> {
    summary
        .replace('\n', " ")
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_KEY_POINTS)
        .map(|s| format!("{}.", s))
        .collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::NoContent => f.write_str(NO_CONTENT_MESSAGE),
            Report::Summary(report) => {
                writeln!(f, "=== SUMMARY ===")?;
                writeln!(f, "{}", report.summary)?;
                writeln!(f)?;
                write!(f, "=== KEY POINTS ===")?;
                for point in &report.key_points {
                    write!(f, "\n- {}", point)?;
                }
                Ok(())
            }
        }
    }
}
