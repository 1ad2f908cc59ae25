//! Sentence splitting and sentence-boundary chunking.

/// Split text into sentences using punctuation boundaries.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    for i in 0..len {
        current.push(chars[i]);

        if !matches!(chars[i], '.' | '!' | '?') {
            continue;
        }

        // A real boundary needs whitespace or end-of-string next, so
        // decimals and abbreviation runs stay intact.
        let at_end = i + 1 >= len;
        let next_is_space = !at_end && chars[i + 1].is_whitespace();
        if at_end || next_is_space {
            push_trimmed(&mut sentences, &mut current);
        }
    }
    push_trimmed(&mut sentences, &mut current);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if trimmed.len() > 2 {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Greedily pack sentences into chunks of at most `max_chars`.
///
/// A single sentence longer than the bound is hard-split on char
/// boundaries — the bound is a safety limit for the model input and must
/// hold unconditionally.
pub fn chunk_sentences(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        if sentence.len() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            chunks.extend(hard_split(&sentence, max_chars));
            continue;
        }
        // +1 for the joining space.
        if !current.is_empty() && current.len() + 1 + sentence.len() > max_chars {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&sentence);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn hard_split(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut part = String::new();
    for c in sentence.chars() {
        if part.len() + c.len_utf8() > max_chars {
            parts.push(std::mem::take(&mut part));
        }
        part.push(c);
    }
    if !part.is_empty() {
        parts.push(part);
    }
    parts
}
