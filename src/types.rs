//! Core types and events for series-tally

use serde::{Deserialize, Serialize};

/// Position of a post in the numbered series
///
/// Extracted from titles of the form `AI #42: ...`. Zero is the "unknown"
/// sentinel for titles where no number could be extracted, not a real series
/// position; colliding zeros are kept, not deduplicated.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PostNumber(pub u32);

impl PostNumber {
    /// Sentinel for titles where no number could be extracted
    pub const UNKNOWN: PostNumber = PostNumber(0);

    /// Create a new PostNumber
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the inner u32 value
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Whether this is the unknown sentinel
    pub fn is_unknown(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for PostNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<PostNumber> for u32 {
    fn from(number: PostNumber) -> Self {
        number.0
    }
}

impl std::fmt::Display for PostNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PostNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A post discovered in the archive or loaded from the fallback catalog
///
/// Immutable after creation; exactly one [`PostResult`] is produced per
/// reference during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostReference {
    /// Series number extracted from the title (0 when unknown)
    pub number: PostNumber,
    /// Post title as listed
    pub title: String,
    /// URL path segment identifying the post on the publication
    pub slug: String,
}

/// Word-count outcome for a single post
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResult {
    /// Series number (0 when unknown)
    #[serde(rename = "identifier")]
    pub number: PostNumber,
    /// Post title
    pub title: String,
    /// URL path segment
    pub slug: String,
    /// Whitespace-token count of the normalized body; 0 signals retrieval
    /// failure rather than a genuinely empty post
    pub word_count: usize,
    /// Canonical page URL
    pub url: String,
}

impl PostResult {
    /// Whether content was retrieved and counted for this post
    pub fn is_success(&self) -> bool {
        self.word_count > 0
    }
}

/// Aggregate statistics for a completed run
///
/// Derived from the per-post results; zero-count results are excluded from
/// the success aggregates and counted in `failed_posts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of posts retrieved and counted successfully
    pub total_posts: usize,
    /// Sum of word counts over successful posts
    pub total_words: u64,
    /// Floor of total_words / total_posts (0 when nothing succeeded)
    pub average_words_per_post: u64,
    /// Number of posts whose retrieval failed
    pub failed_posts: usize,
}

/// Where the post list came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoverySource {
    /// The paginated archive listing endpoint
    Archive,
    /// The hardcoded fallback catalog
    Catalog,
}

/// Progress events emitted during a run
///
/// Consumers subscribe via [`SeriesCounter::subscribe`](crate::SeriesCounter::subscribe);
/// events are broadcast best-effort and dropped when nobody listens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    /// Post discovery finished
    Discovered {
        /// Whether the archive or the fallback catalog produced the list
        source: DiscoverySource,
        /// Number of posts discovered
        posts: usize,
    },

    /// A post is about to be fetched
    PostStarted {
        /// 1-based position in the run
        index: usize,
        /// Total posts in the run
        total: usize,
        /// Series number
        number: PostNumber,
        /// Post title
        title: String,
    },

    /// A post was fetched and counted
    PostCounted {
        /// 1-based position in the run
        index: usize,
        /// Total posts in the run
        total: usize,
        /// Series number
        number: PostNumber,
        /// Word count of the normalized body
        words: usize,
    },

    /// A post could not be retrieved
    PostFailed {
        /// 1-based position in the run
        index: usize,
        /// Total posts in the run
        total: usize,
        /// Series number
        number: PostNumber,
    },

    /// The run completed
    Finished {
        /// Aggregate statistics
        summary: RunSummary,
    },
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_number_display_and_parse() {
        let number = PostNumber::new(42);
        assert_eq!(number.to_string(), "42");
        assert_eq!("42".parse::<PostNumber>().unwrap(), number);
        assert!(!number.is_unknown());
        assert!(PostNumber::UNKNOWN.is_unknown());
    }

    #[test]
    fn post_number_serializes_transparently() {
        let json = serde_json::to_string(&PostNumber::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn post_result_serializes_number_as_identifier() {
        let result = PostResult {
            number: PostNumber::new(3),
            title: "AI #3".to_string(),
            slug: "ai-3".to_string(),
            word_count: 10,
            url: "https://example.com/p/ai-3".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["identifier"], 3);
        assert_eq!(value["word_count"], 10);
        assert!(value.get("number").is_none());
    }

    #[test]
    fn zero_word_count_is_failure() {
        let result = PostResult {
            number: PostNumber::UNKNOWN,
            title: String::new(),
            slug: String::new(),
            word_count: 0,
            url: String::new(),
        };
        assert!(!result.is_success());
    }
}
