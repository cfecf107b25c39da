//! # series-tally
//!
//! Discovers a numbered series of posts on a single Substack publication,
//! retrieves each post's content, and aggregates word-count statistics
//! across the series.
//!
//! ## Design Philosophy
//!
//! series-tally degrades gracefully instead of aborting:
//! - **Archive first** - the paginated listing endpoint is drained with
//!   bounded retry; when it yields nothing, a hardcoded catalog substitutes
//! - **Two-stage content fetch** - the structured per-post endpoint first,
//!   then a scrape of the rendered page
//! - **No fatal path** - per-post failures become zero-count results and the
//!   run continues
//! - **Polite by default** - sequential fetching with fixed delays between
//!   requests
//!
//! ## Quick Start
//!
//! ```no_run
//! use series_tally::{Config, Event, SeriesCounter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let counter = SeriesCounter::new(Config::default())?;
//!
//!     // Subscribe to progress events
//!     let mut events = counter.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             if let Event::PostCounted { number, words, .. } = event {
//!                 println!("AI #{number}: {words} words");
//!             }
//!         }
//!     });
//!
//!     let report = counter.run().await;
//!     println!("total words: {}", report.summary.total_words);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Archive enumeration over the paginated listing endpoint
pub mod archive;
/// Fallback catalog of known series posts
pub mod catalog;
/// HTTP client wrapper with browser-like headers
pub mod client;
/// Configuration types
pub mod config;
/// Per-post content retrieval with fallback
pub mod content;
/// Run orchestration
pub mod counter;
/// Error types
pub mod error;
/// Report assembly and persistence
pub mod report;
/// Retry logic with exponential backoff
pub mod retry;
/// Series title matching and ordering
pub mod series;
/// HTML text normalization and word counting
pub mod text;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use catalog::CatalogEntry;
pub use config::{Config, RetryConfig};
pub use counter::SeriesCounter;
pub use error::{Error, Result};
pub use report::RunReport;
pub use types::{DiscoverySource, Event, PostNumber, PostReference, PostResult, RunSummary};
