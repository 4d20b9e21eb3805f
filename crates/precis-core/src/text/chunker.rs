/// Split `text` into paragraph-aligned chunks of at most `max_chars` characters.
///
/// Paragraphs are separated by `\n`; blank paragraphs are dropped and the rest
/// are trimmed. A paragraph is never split, so a single paragraph longer than
/// `max_chars` becomes a chunk of its own. Blank input yields no chunks.
pub fn chunk(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let text = text.trim();

    if text.is_empty() {
        return Vec::new();
    }
    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for para in text.split('\n').map(str::trim).filter(|p| !p.is_empty()) {
        let para_len = char_len(para);

        // Each paragraph costs its length plus one separator
        if current_len + para_len + 1 > max_chars {
            if !current.is_empty() {
                chunks.push(current.join("\n"));
            }
            current = vec![para];
            current_len = para_len;
        } else {
            current.push(para);
            current_len += para_len + 1;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(text: &str) -> Vec<&str> {
        text.split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    #[test]
    fn test_short_text_is_single_trimmed_chunk() {
        let chunks = chunk("  hello\n\nworld  \n", 100);
        assert_eq!(chunks, vec!["hello\n\nworld".to_string()]);
    }

    #[test]
    fn test_exact_limit_is_single_chunk() {
        let text = "a".repeat(50);
        assert_eq!(chunk(&text, 50), vec![text]);
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(chunk("", 10).is_empty());
        assert!(chunk(" \n\t\n ", 10).is_empty());
    }

    #[test]
    fn test_paragraphs_accumulate_greedily() {
        // 9 + 9 + 1 = 19 fits in 20; a third paragraph would not
        let text = "aaaaaaaaa\nbbbbbbbbb\nccccccccc";
        let chunks = chunk(text, 20);
        assert_eq!(chunks, vec!["aaaaaaaaa\nbbbbbbbbb", "ccccccccc"]);
    }

    #[test]
    fn test_blank_paragraphs_are_dropped() {
        let text = "first paragraph here\n\n\n   \nsecond paragraph here";
        let chunks = chunk(text, 25);
        assert_eq!(chunks, vec!["first paragraph here", "second paragraph here"]);
    }

    #[test]
    fn test_oversized_paragraph_stands_alone() {
        let long = "x".repeat(40);
        let text = format!("{long}\nshort one\nshort two");
        let chunks = chunk(&text, 25);

        assert_eq!(chunks[0], long);
        assert_eq!(chunks[1], "short one\nshort two");
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_oversized_paragraph_in_the_middle() {
        let long = "y".repeat(30);
        let text = format!("alpha\n{long}\nomega");
        let chunks = chunk(&text, 12);
        assert_eq!(chunks, vec!["alpha".to_string(), long, "omega".to_string()]);
    }

    #[test]
    fn test_chunks_respect_limit_unless_single_paragraph() {
        let text = (0..40)
            .map(|i| "word ".repeat(i % 7 + 1).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        for max in [10, 25, 60, 120] {
            for c in chunk(&text, max) {
                let single = !c.contains('\n');
                assert!(c.chars().count() <= max || single, "chunk over {max}: {c:?}");
            }
        }
    }

    #[test]
    fn test_rejoined_chunks_preserve_paragraph_order() {
        let text = "One.\nTwo is longer.\n\nThree\n  Four has padding  \nFive";
        for max in [6, 15, 30] {
            let chunks = chunk(text, max);
            let rejoined = chunks.join("\n");
            assert_eq!(paragraphs(&rejoined), paragraphs(text));
            // no paragraph straddles a boundary
            for c in &chunks {
                for p in paragraphs(c) {
                    assert!(paragraphs(text).contains(&p));
                }
            }
        }
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 6 chars, 12 bytes each
        let text = "ééééé1\nééééé2";
        assert_eq!(chunk(text, 13).len(), 1);
        assert_eq!(chunk(text, 12).len(), 2);
    }

    #[test]
    fn test_zero_limit_is_treated_as_one() {
        assert_eq!(chunk("a\nb", 0), vec!["a", "b"]);
    }
}
