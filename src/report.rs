//! Run report assembly and persistence
//!
//! Folds per-post results into the persisted results document: aggregate
//! statistics plus the successful posts sorted by series number. Failed posts
//! (zero word count) are counted but not listed.

use crate::error::Result;
use crate::types::{PostResult, RunSummary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The persisted results document
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// Aggregate statistics
    pub summary: RunSummary,
    /// Successful posts, ascending by series number
    pub posts: Vec<PostResult>,
}

impl RunReport {
    /// Fold per-post results into the final document
    ///
    /// Zero-count results are treated as failures: counted in `failed_posts`
    /// and excluded from `posts` and the word totals. The average is floor
    /// division, 0 when nothing succeeded.
    pub fn new(results: Vec<PostResult>) -> Self {
        let failed_posts = results.iter().filter(|r| !r.is_success()).count();
        let mut posts: Vec<PostResult> =
            results.into_iter().filter(PostResult::is_success).collect();
        posts.sort_by_key(|post| post.number);

        let total_posts = posts.len();
        let total_words: u64 = posts.iter().map(|post| post.word_count as u64).sum();
        let average_words_per_post = if total_posts > 0 {
            total_words / total_posts as u64
        } else {
            0
        };

        Self {
            summary: RunSummary {
                total_posts,
                total_words,
                average_words_per_post,
                failed_posts,
            },
            posts,
        }
    }

    /// The successful post with the highest word count
    pub fn longest(&self) -> Option<&PostResult> {
        self.posts.iter().max_by_key(|post| post.word_count)
    }

    /// The successful post with the lowest word count
    pub fn shortest(&self) -> Option<&PostResult> {
        self.posts.iter().min_by_key(|post| post.word_count)
    }

    /// Render the document as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Persist the document to disk
    pub async fn write_to(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, self.to_json()?).await?;
        tracing::info!(path = %path.display(), "wrote results");
        Ok(())
    }
}

/// Group digits with commas for console display (1234567 → "1,234,567")
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
