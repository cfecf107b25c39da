//! Fallback catalog of known series posts
//!
//! A hand-curated number→slug table used only as a whole-sequence substitute
//! when archive enumeration yields nothing. The table is deliberately sparse;
//! many numbers between 1 and 151 are absent, and gaps are never backfilled
//! individually when enumeration partially succeeds.

use crate::types::{PostNumber, PostReference};
use serde::{Deserialize, Serialize};

/// A known post in the fallback catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Series number
    pub number: u32,
    /// URL path segment on the publication
    pub slug: String,
}

/// Known series posts by number, ascending
const KNOWN_POSTS: &[(u32, &str)] = &[
    (1, "ai-1-sydney-and-bing"),
    (4, "ai-4-introducing-gpt-4"),
    (10, "ai-10-code-interpreter-and-george"),
    (11, "ai-11-in-search-of-a-moat"),
    (13, "ai-13-potential-algorithmic-improvements"),
    (14, "ai-14-a-very-good-sentence"),
    (21, "ai-21"),
    (22, "ai-22-into-the-weeds"),
    (24, "ai-24-week-of-the-podcast"),
    (25, "ai-25-inflection-point"),
    (31, "ai-31-it-can-do-what-now"),
    (40, "ai-40-a-vision-from-vitalik"),
    (50, "ai-50-the-most-dangerous-thing"),
    (58, "ai-58-stargate-agi"),
    (60, "ai-60-oh-the-humanity"),
    (61, "ai-61-meta-trouble"),
    (64, "ai-64-feel-the-mundane-utility"),
    (68, "ai-68-remarkably-reasonable-reactions"),
    (70, "ai-70-a-beautiful-sonnet"),
    (80, "ai-80-never-will-it-ever"),
    (84, "ai-84-better-than-a-podcast"),
    (86, "ai-86-just-think-of-the-potential"),
    (87, "ai-87-staying-in-character"),
    (89, "ai-89-trump-card"),
    (90, "ai-90-the-wall"),
    (97, "ai-97-4"),
    (98, "ai-98-world-ends-with-six-word-story"),
    (100, "ai-100-meet-the-new-boss"),
    (101, "ai-101-the-shallow-end"),
    (102, "ai-102-made-in-america"),
    (103, "ai-103-show-me-the-money"),
    (104, "ai-104-american-state-capacity-on"),
    (105, "ai-105-hey-there-alexa"),
    (106, "ai-106-not-so-fast"),
    (107, "ai-107-the-misplaced-hype-machine"),
    (109, "ai-109-google-fails-marketing-forever"),
    (110, "ai-110-of-course-you-know"),
    (111, "ai-111-giving-us-pause"),
    (112, "ai-112-release-the-everything"),
    (115, "ai-115-the-evil-applications-division"),
    (116, "ai-116-if-anyone-builds-it-everyone"),
    (117, "ai-117-openai-buys-device-maker-io"),
    (118, "ai-118-claude-ascendant"),
    (119, "ai-119-goodbye-aisi"),
    (120, "ai-120-while-o3-turned-pro"),
    (123, "ai-123-moratorium-moratorium"),
    (125, "ai-125-smooth-criminal"),
    (128, "ai-128-four-hours-until-probably"),
    (130, "ai-130-talking-past-the-sale"),
    (132, "ai-132-part-1-improved-ai-detection"),
    (133, "ai-133-america-could-use-more-energy"),
    (134, "ai-134-if-anyone-reads-it"),
    (135, "ai-135-openai-shows-us-the-money"),
    (136, "ai-136-a-song-and-dance"),
    (137, "ai-137-an-openai-app-for-that"),
    (138, "ai-138-part-2-watch-out-for-documents"),
    (139, "ai-139-the-overreach-machines"),
    (141, "ai-141-give-us-the-money"),
    (142, "ai-142-common-ground"),
    (143, "ai-143-everything-everywhere-all"),
    (144, "ai-144-thanks-for-the-models"),
    (145, "ai-145-youve-got-soul"),
    (146, "ai-146-chipping-in"),
    (147, "ai-147-flash-forward"),
    (149, "ai-149-3"),
    (150, "ai-150-while-claude-codes"),
    (151, "ai-151-while-claude-coworks"),
];

/// The built-in fallback catalog
///
/// Also serves as the serde default for
/// [`Config::fallback_catalog`](crate::Config::fallback_catalog).
pub fn default_catalog() -> Vec<CatalogEntry> {
    KNOWN_POSTS
        .iter()
        .map(|&(number, slug)| CatalogEntry {
            number,
            slug: slug.to_string(),
        })
        .collect()
}

/// Synthesize post references for catalog entries
///
/// Catalog entries carry no real title, so one is synthesized from the
/// number in the same shape the archive titles use.
pub fn references(entries: &[CatalogEntry]) -> Vec<PostReference> {
    entries
        .iter()
        .map(|entry| PostReference {
            number: PostNumber::new(entry.number),
            title: format!("AI #{}", entry.number),
            slug: entry.slug.clone(),
        })
        .collect()
}
