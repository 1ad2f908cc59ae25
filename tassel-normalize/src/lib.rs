//! # tassel-normalize
//!
//! Resolves raw course-code strings to canonical codes: alias lookup,
//! department inference for bare numbers, compound-number splitting, and
//! cross-listing canonicalization against a catalog-derived (or hardcoded
//! fallback) table. Normalization is idempotent — a canonical code
//! normalizes to itself.

pub mod normalizer;
pub mod tables;

pub use normalizer::{CourseCodeNormalizer, ProfessorContext};
pub use tables::NormalizationTables;
