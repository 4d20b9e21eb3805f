use super::{AiProvider, GenerationParams};
use crate::Result;

/// Offline extractive baseline.
///
/// Keeps the leading sentences of the input until at least `min_length` words
/// are collected, never emitting more than `max_length` words. `beams` has no
/// meaning here and is ignored.
#[derive(Debug, Default)]
pub struct LeadProvider;

impl LeadProvider {
    pub fn new() -> Self {
        Self
    }
}

fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        let at_boundary = matches!(c, '.' | '!' | '?')
            && chars.peek().map_or(true, |next| next.is_whitespace());
        if at_boundary {
            out.push(std::mem::take(&mut current));
        }
    }
    out.push(current);

    out.into_iter()
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| !s.is_empty())
        .collect()
}

fn lead(text: &str, min_words: usize, max_words: usize) -> String {
    let mut picked: Vec<String> = Vec::new();
    let mut total = 0;

    for sentence in sentences(text) {
        if !picked.is_empty() && total >= min_words {
            break;
        }

        let words: Vec<&str> = sentence.split_whitespace().collect();
        let room = max_words.saturating_sub(total);
        if words.len() > room {
            if room > 0 {
                picked.push(words[..room].join(" "));
            }
            break;
        }

        total += words.len();
        picked.push(sentence);
    }

    picked.join(" ")
}

#[async_trait::async_trait]
impl AiProvider for LeadProvider {
    fn name(&self) -> &str {
        "lead"
    }

    async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String> {
        Ok(lead(
            text,
            params.min_length as usize,
            params.max_length as usize,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Rust is fast. It is also safe!\nPeople like it? Version 1.70 shipped.";

    #[test]
    fn test_sentence_split() {
        assert_eq!(
            sentences(TEXT),
            vec!["Rust is fast.", "It is also safe!", "People like it?", "Version 1.70 shipped."]
        );
    }

    #[test]
    fn test_stops_once_min_reached() {
        assert_eq!(lead(TEXT, 5, 100), "Rust is fast. It is also safe!");
        assert_eq!(lead(TEXT, 0, 100), "Rust is fast.");
    }

    #[test]
    fn test_never_exceeds_max() {
        assert_eq!(lead(TEXT, 100, 5), "Rust is fast. It is");
        assert_eq!(lead(TEXT, 100, 0), "");
        assert_eq!(lead(TEXT, 100, 1000), "Rust is fast. It is also safe! People like it? Version 1.70 shipped.");
    }

    #[tokio::test]
    async fn test_deterministic_and_rejects_chat() {
        let provider = LeadProvider::new();
        let params = GenerationParams::new(3, 10, 4);
        let first = provider.summarize(TEXT, &params).await.unwrap();
        let second = provider.summarize(TEXT, &params).await.unwrap();
        assert_eq!(first, second);
        assert!(provider.chat("hello").await.is_err());
    }
}
