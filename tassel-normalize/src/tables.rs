//! Normalization knowledge base.
//!
//! Loaded once per pipeline instantiation, read-only thereafter.
//! Department aliases and names are fixed tables; the cross-listing map is
//! built from a catalog source when one is available, with a small
//! hardcoded fallback otherwise.

use std::collections::{BTreeSet, HashMap};

use tassel_core::errors::CatalogError;
use tracing::info;

/// Department renames and common abbreviations, key → canonical.
const DEPT_ALIASES: &[(&str, &str)] = &[
    ("CPSC", "CSCE"),
    ("CS", "CSCE"),
    ("COSC", "CSCE"),
    ("EE", "ECEN"),
    ("ELEN", "ECEN"),
    ("INEN", "ISEN"),
];

/// Department display names → department code, matched after lowercasing
/// and stripping non-letters. Used to resolve a `professor_dept` that is
/// not already a bare code.
const DEPT_NAMES: &[(&str, &str)] = &[
    ("computer science", "CSCE"),
    ("computer science and engineering", "CSCE"),
    ("computer engineering", "CSCE"),
    ("electrical engineering", "ECEN"),
    ("electrical and computer engineering", "ECEN"),
    ("industrial and systems engineering", "ISEN"),
    ("mathematics", "MATH"),
    ("statistics", "STAT"),
    ("physics", "PHYS"),
    ("psychology", "PSYC"),
];

/// Fallback cross-listing table used when no catalog source is loaded.
/// Keys are `DEPT###` strings; values are the canonical representative
/// (alphabetically-first member of the cross-list group).
const CROSS_LISTING_FALLBACK: &[(&str, &str)] = &[
    ("ECEN222", "CSCE222"),
    ("ECEN350", "CSCE350"),
    ("ECEN449", "CSCE462"),
    ("STAT411", "MATH411"),
];

/// Immutable lookup tables shared by every normalization call.
#[derive(Debug, Clone)]
pub struct NormalizationTables {
    dept_aliases: HashMap<String, String>,
    dept_names: HashMap<String, String>,
    /// Catalog-derived `DEPT###` → canonical map. Empty when no catalog
    /// source was provided; lookups then use `fallback_cross_listings`.
    cross_listings: HashMap<String, String>,
    fallback_cross_listings: HashMap<String, String>,
}

impl NormalizationTables {
    /// Tables with no catalog source: alias/name maps plus the hardcoded
    /// cross-listing fallback.
    pub fn builtin() -> Self {
        Self {
            dept_aliases: DEPT_ALIASES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            dept_names: DEPT_NAMES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            cross_listings: HashMap::new(),
            fallback_cross_listings: CROSS_LISTING_FALLBACK
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Build tables from a catalog cross-listing source.
    ///
    /// Each entry lists codes that cross-list each other; overlapping
    /// entries are merged transitively and the alphabetically-first member
    /// of each merged group becomes its canonical representative. Every
    /// member (the representative included) maps to the representative, so
    /// lookups are idempotent by construction.
    pub fn from_catalog(entries: &[(String, Vec<String>)]) -> Result<Self, CatalogError> {
        let mut tables = Self::builtin();

        // Merge entries into transitive groups.
        let mut group_of: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<BTreeSet<String>> = Vec::new();

        for (row, (code, listed)) in entries.iter().enumerate() {
            let mut members = Vec::with_capacity(listed.len() + 1);
            for raw in std::iter::once(code).chain(listed.iter()) {
                let member = clean_catalog_code(raw).ok_or_else(|| {
                    CatalogError::MalformedEntry {
                        row,
                        reason: format!("unparsable code {raw:?}"),
                    }
                })?;
                members.push(member);
            }
            if members.len() < 2 {
                return Err(CatalogError::MalformedEntry {
                    row,
                    reason: "cross-list group has fewer than two codes".to_string(),
                });
            }

            // Find every existing group any member already belongs to.
            let mut target: Option<usize> = None;
            for member in &members {
                if let Some(&idx) = group_of.get(member) {
                    match target {
                        None => target = Some(idx),
                        Some(t) if t != idx => {
                            // Transitive overlap: fold group idx into t.
                            let absorbed = std::mem::take(&mut groups[idx]);
                            for code in &absorbed {
                                group_of.insert(code.clone(), t);
                            }
                            groups[t].extend(absorbed);
                        }
                        Some(_) => {}
                    }
                }
            }
            let target = target.unwrap_or_else(|| {
                groups.push(BTreeSet::new());
                groups.len() - 1
            });
            for member in members {
                group_of.insert(member.clone(), target);
                groups[target].insert(member);
            }
        }

        let mut cross_listings = HashMap::new();
        for group in groups.iter().filter(|g| !g.is_empty()) {
            // BTreeSet iterates in sorted order; first member is canonical.
            let canonical = group
                .iter()
                .next()
                .ok_or_else(|| CatalogError::NoRepresentative {
                    group: format!("{group:?}"),
                })?
                .clone();
            for member in group {
                cross_listings.insert(member.clone(), canonical.clone());
            }
        }

        info!(
            groups = groups.iter().filter(|g| !g.is_empty()).count(),
            codes = cross_listings.len(),
            "loaded catalog cross-listing table"
        );

        tables.cross_listings = cross_listings;
        Ok(tables)
    }

    /// Canonical department for an alias; unknown departments pass through.
    pub fn resolve_dept_alias<'a>(&'a self, dept: &'a str) -> &'a str {
        self.dept_aliases.get(dept).map(String::as_str).unwrap_or(dept)
    }

    /// Department code for a display name, matched case-insensitively.
    pub fn dept_for_name(&self, name: &str) -> Option<&str> {
        let key = normalize_dept_name(name);
        self.dept_names.get(&key).map(String::as_str)
    }

    /// Cross-listing representative for a `DEPT###` code.
    ///
    /// Prefers the catalog-derived table; falls back to the hardcoded
    /// table; a miss in both means the code is its own canonical form.
    pub fn canonical_cross_listing<'a>(&'a self, code: &'a str) -> &'a str {
        if !self.cross_listings.is_empty() {
            if let Some(canonical) = self.cross_listings.get(code) {
                return canonical;
            }
        }
        self.fallback_cross_listings
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }

    /// Whether a catalog source was loaded.
    pub fn has_catalog(&self) -> bool {
        !self.cross_listings.is_empty()
    }
}

impl Default for NormalizationTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Uppercase a catalog code and strip whitespace; None if the result is
/// not a simple `LETTERS+DIGITS` code.
fn clean_catalog_code(raw: &str) -> Option<String> {
    let code: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let letters = code.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    let digits = code.len() - letters;
    let well_formed = letters > 0
        && digits > 0
        && code[letters..].chars().all(|c| c.is_ascii_digit());
    well_formed.then_some(code)
}

/// Lowercase a department display name and collapse it to letters and
/// single spaces, dropping filler like "&" or "dept. of".
fn normalize_dept_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace('&', "and");
    lowered
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty() && *w != "department" && *w != "dept" && *w != "of")
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_alias_lookup() {
        let tables = NormalizationTables::builtin();
        assert_eq!(tables.resolve_dept_alias("CPSC"), "CSCE");
        assert_eq!(tables.resolve_dept_alias("BIOL"), "BIOL");
    }

    #[test]
    fn dept_name_lookup_is_forgiving() {
        let tables = NormalizationTables::builtin();
        assert_eq!(tables.dept_for_name("Computer Science"), Some("CSCE"));
        assert_eq!(
            tables.dept_for_name("Dept. of Electrical & Computer Engineering"),
            Some("ECEN")
        );
        assert_eq!(tables.dept_for_name("Underwater Basketry"), None);
    }

    #[test]
    fn fallback_cross_listing_used_without_catalog() {
        let tables = NormalizationTables::builtin();
        assert_eq!(tables.canonical_cross_listing("ECEN350"), "CSCE350");
        assert_eq!(tables.canonical_cross_listing("CSCE350"), "CSCE350");
    }

    #[test]
    fn catalog_groups_pick_alphabetically_first() {
        let entries = vec![(
            "ECEN350".to_string(),
            vec!["CSCE350".to_string()],
        )];
        let tables = NormalizationTables::from_catalog(&entries).unwrap();
        assert_eq!(tables.canonical_cross_listing("ECEN350"), "CSCE350");
        assert_eq!(tables.canonical_cross_listing("CSCE350"), "CSCE350");
    }

    #[test]
    fn catalog_merges_transitive_groups() {
        let entries = vec![
            ("AERO201".to_string(), vec!["MEEN201".to_string()]),
            ("MEEN201".to_string(), vec!["OCEN201".to_string()]),
        ];
        let tables = NormalizationTables::from_catalog(&entries).unwrap();
        // All three collapse to the alphabetically-first member.
        assert_eq!(tables.canonical_cross_listing("AERO201"), "AERO201");
        assert_eq!(tables.canonical_cross_listing("MEEN201"), "AERO201");
        assert_eq!(tables.canonical_cross_listing("OCEN201"), "AERO201");
    }

    #[test]
    fn catalog_rejects_malformed_codes() {
        let entries = vec![("???".to_string(), vec!["CSCE222".to_string()])];
        let err = NormalizationTables::from_catalog(&entries).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedEntry { row: 0, .. }));
    }

    #[test]
    fn catalog_rejects_singleton_groups() {
        let entries = vec![("CSCE222".to_string(), vec![])];
        assert!(NormalizationTables::from_catalog(&entries).is_err());
    }

    #[test]
    fn catalog_table_shadows_fallback() {
        // ECEN350 is in the fallback table; a catalog that groups it
        // differently wins.
        let entries = vec![(
            "ECEN350".to_string(),
            vec!["AERO350".to_string()],
        )];
        let tables = NormalizationTables::from_catalog(&entries).unwrap();
        assert_eq!(tables.canonical_cross_listing("ECEN350"), "AERO350");
    }
}
