//! Series title matching and ordering
//!
//! A record belongs to the series iff its title starts with the literal token
//! `AI`, optional whitespace, `#`, and at least one digit, case-insensitively.
//! Number extraction applies the same shape anywhere in the title and falls
//! back to 0 when nothing matches.

use crate::archive::ArchiveEntry;
use crate::types::{PostNumber, PostReference};
use regex::Regex;

/// Anchored at the start of the title; membership test
const FILTER_PATTERN: &str = r"(?i)^AI\s*#\d+";
/// Unanchored; captures the digit run for number extraction
const NUMBER_PATTERN: &str = r"(?i)AI\s*#(\d+)";

/// Matches titles belonging to the numbered series
pub struct SeriesMatcher {
    filter: Regex,
    number: Regex,
}

impl SeriesMatcher {
    /// Compile the title patterns
    ///
    /// # Errors
    /// Returns an error when a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            filter: Regex::new(FILTER_PATTERN)?,
            number: Regex::new(NUMBER_PATTERN)?,
        })
    }

    /// Whether a title belongs to the series (anchored match)
    pub fn is_series_title(&self, title: &str) -> bool {
        self.filter.is_match(title)
    }

    /// Extract the series number from a title
    ///
    /// Returns [`PostNumber::UNKNOWN`] when the title carries no number
    /// anywhere (or the digit run does not fit in a u32).
    pub fn extract_number(&self, title: &str) -> PostNumber {
        self.number
            .captures(title)
            .and_then(|captures| captures.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
            .map(PostNumber::new)
            .unwrap_or(PostNumber::UNKNOWN)
    }

    /// Select series posts from raw archive records, sorted ascending by number
    ///
    /// The sort is stable, so records extracting to the same number (e.g.
    /// several unknowns) keep their listing order.
    pub fn select_series_posts(&self, entries: &[ArchiveEntry]) -> Vec<PostReference> {
        let mut posts: Vec<PostReference> = entries
            .iter()
            .filter(|entry| self.is_series_title(&entry.title))
            .map(|entry| PostReference {
                number: self.extract_number(&entry.title),
                title: entry.title.clone(),
                slug: entry.slug.clone(),
            })
            .collect();
        posts.sort_by_key(|post| post.number);
        posts
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SeriesMatcher {
        SeriesMatcher::new().unwrap()
    }

    fn entry(title: &str, slug: &str) -> ArchiveEntry {
        ArchiveEntry {
            title: title.to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn numbered_title_is_matched_and_extracted() {
        let m = matcher();
        assert!(m.is_series_title("AI #42: Something"));
        assert_eq!(m.extract_number("AI #42: Something"), PostNumber::new(42));
    }

    #[test]
    fn unnumbered_title_is_rejected() {
        let m = matcher();
        assert!(!m.is_series_title("AI News Roundup"));
        assert_eq!(m.extract_number("AI News Roundup"), PostNumber::UNKNOWN);
    }

    #[test]
    fn matching_is_case_insensitive_with_optional_whitespace() {
        let m = matcher();
        assert!(m.is_series_title("ai #7"));
        assert!(m.is_series_title("AI#7"));
        assert!(m.is_series_title("Ai  #7: spaces"));
        assert_eq!(m.extract_number("ai#151: finale"), PostNumber::new(151));
    }

    #[test]
    fn filter_is_anchored_but_extraction_is_not() {
        let m = matcher();
        // "#" does not immediately follow "AI" at the start
        assert!(!m.is_series_title("The AI #9 recap"));
        // ...yet the number is still recoverable from anywhere in the title
        assert_eq!(m.extract_number("The AI #9 recap"), PostNumber::new(9));
    }

    #[test]
    fn oversized_digit_run_falls_back_to_unknown() {
        let m = matcher();
        assert_eq!(
            m.extract_number("AI #99999999999999999999"),
            PostNumber::UNKNOWN
        );
    }

    #[test]
    fn selection_is_a_subset_of_matching_records() {
        let m = matcher();
        let entries = vec![
            entry("AI #3: three", "ai-3"),
            entry("Housing Roundup #2", "housing-2"),
            entry("AI #1: one", "ai-1"),
            entry("On AI Risk", "on-ai-risk"),
        ];
        let posts = m.select_series_posts(&entries);
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| m.is_series_title(&p.title)));
    }

    #[test]
    fn selection_sorts_ascending_by_number() {
        let m = matcher();
        let entries = vec![
            entry("AI #30: c", "ai-30"),
            entry("AI #2: a", "ai-2"),
            entry("AI #10: b", "ai-10"),
        ];
        let numbers: Vec<u32> = m
            .select_series_posts(&entries)
            .iter()
            .map(|p| p.number.get())
            .collect();
        assert_eq!(numbers, vec![2, 10, 30]);
    }

    #[test]
    fn equal_numbers_keep_listing_order() {
        let m = matcher();
        // Both filter-match but extract to the same number; stable sort keeps
        // their relative order
        let entries = vec![
            entry("AI #5: first listed", "first"),
            entry("AI #5: second listed", "second"),
        ];
        let posts = m.select_series_posts(&entries);
        assert_eq!(posts[0].slug, "first");
        assert_eq!(posts[1].slug, "second");
    }
}
