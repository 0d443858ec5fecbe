use std::sync::LazyLock;

use regex::Regex;

/// Markdown link whose target points into one of the guide trees.
static GUIDE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]*/(?:style-guide|testing-guide)/[^)]+)\)")
        .expect("guide link regex")
});

/// A document entry taken from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLink {
    pub title: String,
    pub path: String,
}

/// Collects guide links from the index text in source order.
///
/// Lines are scanned independently and contribute at most one link each.
pub fn extract_doc_links(index: &str) -> Vec<DocLink> {
    index
        .lines()
        .filter_map(|line| GUIDE_LINK_RE.captures(line))
        .map(|caps| DocLink {
            title: caps[1].to_string(),
            path: caps[2].to_string(),
        })
        .collect()
}
