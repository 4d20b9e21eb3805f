use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// How a processed result should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Info,
    Success,
    Warning,
}

/// A text transformation offered by the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    WordCount,
    CharacterCount,
    ReverseText,
    Uppercase,
    TitleCase,
}

/// Output of an operation together with the steps that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub output: String,
    pub steps: Vec<&'static str>,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::WordCount,
        Operation::CharacterCount,
        Operation::ReverseText,
        Operation::Uppercase,
        Operation::TitleCase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::WordCount => "Word Count",
            Operation::CharacterCount => "Character Count",
            Operation::ReverseText => "Reverse Text",
            Operation::Uppercase => "Uppercase",
            Operation::TitleCase => "Title Case",
        }
    }

    /// Name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Operation::WordCount => "word-count",
            Operation::CharacterCount => "character-count",
            Operation::ReverseText => "reverse",
            Operation::Uppercase => "uppercase",
            Operation::TitleCase => "title-case",
        }
    }

    pub fn style(&self) -> OutputStyle {
        match self {
            Operation::WordCount | Operation::CharacterCount => OutputStyle::Info,
            Operation::ReverseText => OutputStyle::Warning,
            Operation::Uppercase | Operation::TitleCase => OutputStyle::Success,
        }
    }

    pub fn apply(&self, text: &str) -> Processed {
        match self {
            Operation::WordCount => {
                let words = text.split_whitespace().count();
                Processed {
                    output: format!("Word count: {}", words),
                    steps: vec![
                        "Split text on whitespace.",
                        "Filter out empty tokens.",
                        "Count remaining tokens.",
                    ],
                }
            }
            Operation::CharacterCount => {
                let with_spaces = text.chars().count();
                let without_spaces = text.chars().filter(|&c| c != ' ').count();
                Processed {
                    output: format!(
                        "Character count — with spaces: {}, without spaces: {}",
                        with_spaces, without_spaces
                    ),
                    steps: vec![
                        "Count all characters (including spaces).",
                        "Create a copy without spaces and count again.",
                    ],
                }
            }
            Operation::ReverseText => Processed {
                output: text.chars().rev().collect(),
                steps: vec!["Reverse the order of all characters."],
            },
            Operation::Uppercase => Processed {
                output: text.to_uppercase(),
                steps: vec!["Convert all characters to uppercase."],
            },
            Operation::TitleCase => Processed {
                output: title_case(text),
                steps: vec!["Capitalize the first letter of every word, lowercase the rest."],
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Operation::ALL
            .into_iter()
            .find(|op| op.slug() == wanted || op.label().to_lowercase().replace(' ', "-") == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Operation::ALL.iter().map(|op| op.slug()).collect();
                Error::InvalidInput(format!(
                    "Unknown operation '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Uppercase a letter that follows a non-letter and lowercase every other letter.
/// Apostrophes count as word breaks, so "they're" becomes "They'Re".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Check input before processing.
///
/// Blank input and input shorter than `min_length` are rejected. Input longer
/// than `char_limit` is accepted with a warning.
pub fn validate(text: &str, min_length: usize, char_limit: usize) -> Result<Vec<String>> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput("Please enter some text to process.".to_string()));
    }

    let len = text.chars().count();
    if len < min_length {
        return Err(Error::InvalidInput(format!(
            "Input is shorter than the minimum required length ({} characters).",
            min_length
        )));
    }

    let mut warnings = Vec::new();
    if len > char_limit {
        warnings.push(format!(
            "Your input has {} characters, which exceeds the limit of {}.",
            len, char_limit
        ));
    }

    Ok(warnings)
}
