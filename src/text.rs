//! HTML to plain text normalization and word counting
//!
//! Strips non-content elements (scripts, styles, page chrome) so boilerplate
//! does not inflate the count, flattens the rest to whitespace-joined text,
//! and counts whitespace-delimited tokens. This is a token count, not a
//! linguistic word count; punctuation-only tokens and hyphenation are not
//! treated specially.

use scraper::{ElementRef, Html};

/// Elements whose subtrees never count toward post text
const STRIPPED_ELEMENTS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Flatten an HTML fragment to normalized plain text
///
/// Text nodes outside the stripped elements are joined with single spaces,
/// whitespace runs are collapsed to one space, and the result is trimmed.
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut pieces: Vec<&str> = Vec::new();
    collect_text(fragment.root_element(), &mut pieces);
    let joined = pieces.join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count whitespace-delimited non-empty tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn collect_text<'a>(element: ElementRef<'a>, pieces: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            pieces.push(&**text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !STRIPPED_ELEMENTS.contains(&child_element.value().name()) {
                collect_text(child_element, pieces);
            }
        }
    }
}
