//! Review text cleaning.

use regex::Regex;

/// Cleans raw review text: URLs out, emoji out, punctuation runs and
/// whitespace collapsed. Regexes compile once at construction.
pub struct TextCleaner {
    url_re: Regex,
    emoji_re: Regex,
    bang_run_re: Regex,
    question_run_re: Regex,
    dot_run_re: Regex,
    whitespace_re: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self {
            url_re: Regex::new(r"(?i)\bhttps?://\S+|\bwww\.\S+").expect("static regex"),
            emoji_re: Regex::new(concat!(
                "[",
                "\u{1F300}-\u{1F5FF}",
                "\u{1F600}-\u{1F64F}",
                "\u{1F680}-\u{1F6FF}",
                "\u{1F900}-\u{1F9FF}",
                "\u{2600}-\u{26FF}",
                "\u{2700}-\u{27BF}",
                "\u{FE0F}",
                "]"
            ))
            .expect("static regex"),
            bang_run_re: Regex::new(r"!{3,}").expect("static regex"),
            question_run_re: Regex::new(r"\?{3,}").expect("static regex"),
            dot_run_re: Regex::new(r"\.{3,}").expect("static regex"),
            whitespace_re: Regex::new(r"\s+").expect("static regex"),
        }
    }

    /// Clean one review text. Returns the cleaned text and its word count.
    pub fn clean(&self, raw: &str) -> (String, usize) {
        let text = self.url_re.replace_all(raw, " ");
        let text = self.emoji_re.replace_all(&text, "");
        let text = self.bang_run_re.replace_all(&text, "!!");
        let text = self.question_run_re.replace_all(&text, "??");
        let text = self.dot_run_re.replace_all(&text, "..");
        let text = self.whitespace_re.replace_all(&text, " ");
        let cleaned = text.trim().to_string();
        let word_count = cleaned.split_whitespace().count();
        (cleaned, word_count)
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_urls() {
        let cleaner = TextCleaner::new();
        let (text, _) = cleaner.clean("check https://example.com/syllabus for details");
        assert_eq!(text, "check for details");
        let (text, _) = cleaner.clean("see www.ratings.example now");
        assert_eq!(text, "see now");
    }

    #[test]
    fn strips_emoji() {
        let cleaner = TextCleaner::new();
        let (text, _) = cleaner.clean("great prof \u{1F600}\u{1F525} would take again \u{2764}\u{FE0F}");
        assert_eq!(text, "great prof would take again");
    }

    #[test]
    fn collapses_punctuation_runs_beyond_two() {
        let cleaner = TextCleaner::new();
        let (text, _) = cleaner.clean("so hard!!!!! why???? wow..");
        assert_eq!(text, "so hard!! why?? wow..");
    }

    #[test]
    fn collapses_whitespace() {
        let cleaner = TextCleaner::new();
        let (text, count) = cleaner.clean("  lots\t of \n space  ");
        assert_eq!(text, "lots of space");
        assert_eq!(count, 3);
    }

    #[test]
    fn empty_input_counts_zero_words() {
        let cleaner = TextCleaner::new();
        let (text, count) = cleaner.clean("");
        assert!(text.is_empty());
        assert_eq!(count, 0);
    }
}
