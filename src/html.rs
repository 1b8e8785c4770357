//! Plain-text extraction from table cell markup.
//!
//! Cells in the rendered admin tables often wrap the amount in badges,
//! links or spans. The numeric parser works on plain text only, so markup is
//! reduced to its visible text first.

use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex must compile"));
static MULTI_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

/// Visible text of a cell's markup
///
/// Tags are dropped and every character reference (named, `&#NNN;` and
/// `&#xHH;`) is decoded, as a browser's `textContent` would. Input with
/// neither `<` nor `&` is plain text already and is only trimmed.
pub fn clean_text_from_html(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }

    if !markup.contains('<') && !markup.contains('&') {
        return markup.trim().to_string();
    }

    // Decode after tag removal so `&lt;b&gt;` stays text
    let without_tags = TAG_RE.replace_all(markup, " ");
    let text = decode_html_entities(&without_tags);

    // \s in the regex crate is Unicode-aware and also folds U+00A0
    MULTI_WS_RE.replace_all(&text, " ").trim().to_string()
}
