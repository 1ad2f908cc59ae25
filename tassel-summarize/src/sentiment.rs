//! Lexicon-based sentiment for clusters of review text.

use tassel_core::models::Sentiment;

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "great", "good", "excellent", "amazing", "awesome", "best", "helpful",
    "clear", "fair", "easy", "caring", "love", "recommend", "interesting",
    "engaging", "fun",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "boring", "unfair",
    "hard", "harsh", "confusing", "rude", "avoid", "waste", "difficult",
    "useless", "hate",
];

/// Classify combined sentiment by counting keyword hits.
///
/// Positive when positive hits exceed 1.5× negative hits, negative in
/// the reverse case, mixed otherwise (including no hits at all).
pub fn cluster_sentiment<'a>(texts: impl IntoIterator<Item = &'a str>) -> Sentiment {
    let combined = texts
        .into_iter()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let positive: usize = POSITIVE_KEYWORDS
        .iter()
        .map(|kw| combined.matches(kw).count())
        .sum();
    let negative: usize = NEGATIVE_KEYWORDS
        .iter()
        .map(|kw| combined.matches(kw).count())
        .sum();

    if positive as f64 > negative as f64 * 1.5 {
        Sentiment::Positive
    } else if negative as f64 > positive as f64 * 1.5 {
        Sentiment::Negative
    } else {
        Sentiment::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_reads_positive() {
        let sentiment = cluster_sentiment([
            "Great professor, super helpful in office hours",
            "Clear lectures and fair exams, would recommend",
        ]);
        assert_eq!(sentiment, Sentiment::Positive);
    }

    #[test]
    fn negative_text_reads_negative() {
        let sentiment = cluster_sentiment([
            "Terrible grading, harsh and unfair",
            "Boring lectures, avoid this one",
        ]);
        assert_eq!(sentiment, Sentiment::Negative);
    }

    #[test]
    fn balanced_text_reads_mixed() {
        let sentiment = cluster_sentiment(["Good lectures but terrible exams"]);
        assert_eq!(sentiment, Sentiment::Mixed);
    }

    #[test]
    fn no_hits_reads_mixed() {
        assert_eq!(cluster_sentiment(["about the course content"]), Sentiment::Mixed);
    }
}
