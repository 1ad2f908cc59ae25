/// Tassel system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical code assigned to reviews whose course code is empty or null.
pub const UNKNOWN_COURSE_CODE: &str = "UNKNOWN";

/// Ceiling on cluster-summary confidence.
pub const MAX_CLUSTER_CONFIDENCE: f64 = 0.95;

/// Maximum entries in the strengths / complaints lists of a professor summary.
pub const MAX_OPINION_ENTRIES: usize = 5;

/// Characters of a course summary quoted into a strength/complaint entry.
pub const OPINION_SNIPPET_CHARS: usize = 100;
