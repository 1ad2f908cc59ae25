//! Extractive fallback summarization: verbatim sentence selection.

use crate::sentence::split_sentences;

/// Sentences shorter than this carry too little signal to extract.
const MIN_SENTENCE_CHARS: usize = 20;

/// Build an extractive summary from review texts.
///
/// Takes the first `max_sentences` sentences of at least
/// `MIN_SENTENCE_CHARS` characters, in input order, joined with periods.
/// Used for clusters too small for the generative path and as the
/// fallback when generation fails or trips the quality guard.
pub fn extractive_summary(texts: &[&str], max_sentences: usize) -> String {
    let sentences: Vec<String> = texts
        .iter()
        .flat_map(|t| split_sentences(t))
        .filter(|s| s.len() >= MIN_SENTENCE_CHARS)
        .take(max_sentences)
        .map(|s| s.trim_end_matches(['.', '!', '?']).to_string())
        .collect();

    if sentences.is_empty() {
        // Nothing long enough to extract: fall back to the raw text,
        // clipped to one sentence's worth.
        return texts
            .iter()
            .find(|t| !t.trim().is_empty())
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
    }

    let mut summary = sentences.join(". ");
    summary.push('.');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_n_long_sentences() {
        let texts = [
            "The lectures were extremely well organized. Short one. The exams followed the homework closely.",
            "Grading was transparent and consistently fair throughout.",
        ];
        let summary = extractive_summary(&texts, 3);
        assert_eq!(
            summary,
            "The lectures were extremely well organized. \
             The exams followed the homework closely. \
             Grading was transparent and consistently fair throughout."
        );
    }

    #[test]
    fn short_sentences_are_skipped() {
        let texts = ["Too short. Also tiny. This sentence is long enough to extract."];
        let summary = extractive_summary(&texts, 4);
        assert_eq!(summary, "This sentence is long enough to extract.");
    }

    #[test]
    fn degrades_to_raw_text_when_nothing_extracts() {
        let texts = ["short words only"];
        assert_eq!(extractive_summary(&texts, 3), "short words only");
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert_eq!(extractive_summary(&[], 3), "");
    }
}
