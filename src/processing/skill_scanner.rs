//! Vocabulary keyword scanning over extracted resume text

use crate::error::{CareerCompassError, Result};
use aho_corasick::AhoCorasick;
use log::debug;

/// Scans free text for occurrences of catalog vocabulary terms.
///
/// Matching is case-insensitive substring containment over the whole
/// text. Known limitation: a vocabulary term that is a substring of an
/// unrelated word still matches ("Go" inside "Google"). That is the
/// accepted contract, not a bug; results are suggestions the user
/// confirms before analysis.
pub struct SkillScanner {
    matcher: AhoCorasick,
    vocabulary: Vec<String>,
}

impl SkillScanner {
    /// Build a scanner over the catalog vocabulary. The vocabulary's
    /// (sorted) order is preserved in scan results.
    pub fn new(vocabulary: &[String]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(vocabulary)
            .map_err(|e| {
                CareerCompassError::InvalidInput(format!("failed to build skill scanner: {}", e))
            })?;

        Ok(Self {
            matcher,
            vocabulary: vocabulary.to_vec(),
        })
    }

    /// Return the vocabulary terms found in `text`, in vocabulary order.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let mut seen = vec![false; self.vocabulary.len()];

        // Overlapping search so terms nested in longer terms
        // ("Java" in "JavaScript") are still reported.
        for mat in self.matcher.find_overlapping_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }

        let found: Vec<String> = self
            .vocabulary
            .iter()
            .zip(seen)
            .filter(|(_, hit)| *hit)
            .map(|(term, _)| term.clone())
            .collect();

        debug!(
            "skill scan matched {} of {} vocabulary terms",
            found.len(),
            self.vocabulary.len()
        );
        found
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_matching() {
        let scanner = SkillScanner::new(&vocabulary(&["Python", "SQL"])).unwrap();
        let found = scanner.scan("Seasoned python developer, fluent in sql.");
        assert_eq!(found, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_results_preserve_vocabulary_order() {
        let scanner = SkillScanner::new(&vocabulary(&["CSS", "JavaScript", "React"])).unwrap();
        let found = scanner.scan("React apps styled with CSS, glued with JavaScript.");
        assert_eq!(found, vec!["CSS", "JavaScript", "React"]);
    }

    #[test]
    fn test_nested_terms_are_both_reported() {
        let scanner = SkillScanner::new(&vocabulary(&["Java", "JavaScript"])).unwrap();
        let found = scanner.scan("Wrote JavaScript for five years.");
        assert_eq!(found, vec!["Java", "JavaScript"]);
    }

    #[test]
    fn test_substring_false_positive_is_accepted_behavior() {
        // "Go" matching inside "Google" is the documented limitation of
        // substring containment.
        let scanner = SkillScanner::new(&vocabulary(&["Go", "Python"])).unwrap();
        let found = scanner.scan("I searched Google for tutorials.");
        assert_eq!(found, vec!["Go"]);
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let scanner = SkillScanner::new(&vocabulary(&["Rust"])).unwrap();
        assert!(scanner.scan("Nothing relevant here.").is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let scanner = SkillScanner::new(&[]).unwrap();
        assert!(scanner.scan("Python everywhere.").is_empty());
    }
}
