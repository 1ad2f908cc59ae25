//! Course-code normalization.
//!
//! `normalize` never fails and never returns an empty list: unparsable
//! input degrades to a best-effort pass-through string, and empty input
//! becomes `UNKNOWN`. Re-normalizing a canonical code returns it
//! unchanged — codes arrive from several uncoordinated upstream feeds
//! and pass through here more than once.

use std::collections::HashMap;

use regex::Regex;
use tassel_core::constants::UNKNOWN_COURSE_CODE;
use tracing::debug;

use crate::tables::NormalizationTables;

/// Valid course numbers are three digits in [100, 999].
const COURSE_NUMBER_MIN: u32 = 100;
const COURSE_NUMBER_MAX: u32 = 999;

/// Digit runs at least this long are candidates for compound splitting.
const COMPOUND_DIGIT_LEN: usize = 6;

/// Professor-side context used to infer a department for bare numbers.
#[derive(Debug, Clone, Default)]
pub struct ProfessorContext {
    /// The professor's department, as a code ("CSCE") or display name
    /// ("Computer Science"), when the upstream store knows it.
    pub professor_dept: Option<String>,
    /// Raw course codes from the professor's other reviews.
    pub other_course_codes: Vec<String>,
}

/// Resolves raw course-code strings to one or more canonical codes.
pub struct CourseCodeNormalizer {
    tables: NormalizationTables,
    code_re: Regex,
    dept_prefix_re: Regex,
}

impl CourseCodeNormalizer {
    pub fn new(tables: NormalizationTables) -> Self {
        Self {
            tables,
            code_re: Regex::new(r"^([A-Z]+)([0-9]+)$").expect("static regex"),
            dept_prefix_re: Regex::new(r"^([A-Z]+)").expect("static regex"),
        }
    }

    /// Resolve a raw course-code string to canonical codes.
    ///
    /// Returns `["UNKNOWN"]` only for empty/null input; otherwise at least
    /// one code, de-duplicated in first-seen order. A compound code like
    /// `"CSCE221222"` yields several codes.
    pub fn normalize(
        &self,
        raw_code: Option<&str>,
        ctx: Option<&ProfessorContext>,
    ) -> Vec<String> {
        let raw = match raw_code {
            Some(r) if !r.trim().is_empty() => r,
            _ => return vec![UNKNOWN_COURSE_CODE.to_string()],
        };

        let cleaned = clean_code(raw);
        if cleaned.is_empty() {
            // Punctuation-only input cleans down to nothing.
            return vec![UNKNOWN_COURSE_CODE.to_string()];
        }
        let compact: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();

        // Bare number: try to infer the department from professor context.
        let compact = if compact.chars().all(|c| c.is_ascii_digit()) {
            match ctx.and_then(|c| self.infer_department(c)) {
                Some(dept) => {
                    debug!(raw, dept = %dept, "inferred department for bare course number");
                    format!("{dept}{compact}")
                }
                None => compact,
            }
        } else {
            compact
        };

        let Some(caps) = self.code_re.captures(&compact) else {
            // Unparsable: best-effort pass-through of the cleaned string.
            return vec![cleaned];
        };
        let dept = self.tables.resolve_dept_alias(&caps[1]).to_string();
        let digits = &caps[2];

        let mut out = Vec::new();
        for number in split_course_numbers(digits) {
            let code = format!("{dept}{number}");
            let canonical = self.tables.canonical_cross_listing(&code);
            if !out.iter().any(|c| c == canonical) {
                out.push(canonical.to_string());
            }
        }
        out
    }

    /// Department inference for digit-only codes, in priority order:
    /// an explicit letters-only dept, a department-name lookup, then the
    /// majority department among the professor's other course codes.
    fn infer_department(&self, ctx: &ProfessorContext) -> Option<String> {
        if let Some(dept) = &ctx.professor_dept {
            let trimmed = dept.trim();
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                return Some(trimmed.to_ascii_uppercase());
            }
            if let Some(code) = self.tables.dept_for_name(trimmed) {
                return Some(code.to_string());
            }
        }
        self.majority_department(&ctx.other_course_codes)
    }

    /// Most frequent department among the given raw codes, alias-resolved
    /// so renamed departments count together. Ties break alphabetically.
    fn majority_department(&self, codes: &[String]) -> Option<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for raw in codes {
            let compact: String = clean_code(raw)
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if let Some(caps) = self.dept_prefix_re.captures(&compact) {
                let dept = self.tables.resolve_dept_alias(&caps[1]).to_string();
                *counts.entry(dept).or_default() += 1;
            }
        }
        counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(dept, _)| dept)
    }
}

/// Uppercase, strip punctuation, collapse internal whitespace.
fn clean_code(raw: &str) -> String {
    let upper: String = raw
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    upper.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a digit run into course numbers.
///
/// Runs of 6+ digits split into consecutive 3-digit groups; the split
/// stands only if at least two groups are valid course numbers. Runs of
/// 4–5 digits keep their first 3 digits (the trailing 1–2 digits can
/// never form a valid number). Anything else is taken whole.
fn split_course_numbers(digits: &str) -> Vec<String> {
    if digits.len() >= COMPOUND_DIGIT_LEN {
        let groups: Vec<String> = digits
            .as_bytes()
            .chunks_exact(3)
            .map(|chunk| String::from_utf8_lossy(chunk).to_string())
            .filter(|g| is_valid_course_number(g))
            .collect();
        if groups.len() >= 2 {
            return groups;
        }
        return vec![digits.to_string()];
    }
    if digits.len() >= 4 {
        let (head, tail) = digits.split_at(3);
        if is_valid_course_number(head) && is_valid_course_number(tail) {
            return vec![head.to_string(), tail.to_string()];
        }
        return vec![head.to_string()];
    }
    vec![digits.to_string()]
}

fn is_valid_course_number(group: &str) -> bool {
    group.len() == 3
        && group
            .parse::<u32>()
            .map(|n| (COURSE_NUMBER_MIN..=COURSE_NUMBER_MAX).contains(&n))
            .unwrap_or(false)
}
