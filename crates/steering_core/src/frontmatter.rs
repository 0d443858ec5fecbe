use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::profile::EditorProfile;

const GUIDE_ROOT: &str = "style-guide/";

/// Leading `---` block, matched up to the first closing `---` line.
static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---.*?---\n").expect("frontmatter regex"));

/// `[text](/vue/docs/...)`
static SITE_ROOT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(/vue/docs/([^)]+)\)").expect("site root link regex")
});

/// `[text](https://fewangsit.gitbook.io/vue/docs/...)`
static ABSOLUTE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(https://fewangsit\.gitbook\.io/vue/docs/([^)]+)\)")
        .expect("absolute link regex")
});

/// Builds the `---` delimited header from the profile fields.
pub fn render_frontmatter(profile: &EditorProfile) -> String {
    let mut header = String::from("---\n");
    for (key, value) in profile.fields() {
        header.push_str(key);
        header.push_str(": ");
        header.push_str(value);
        header.push('\n');
    }
    header.push_str("---\n");
    header
}

/// Removes a leading frontmatter block, if any.
pub fn strip_frontmatter(content: &str) -> &str {
    match FRONTMATTER_RE.find(content) {
        Some(found) => &content[found.end()..],
        None => content,
    }
}

/// Rewrites links into the docs tree so they resolve inside the output directory.
///
/// Only `style-guide/` targets become `./`-relative; other guide trees keep
/// their first segment.
pub fn relativize_links(content: &str) -> String {
    let content = SITE_ROOT_LINK_RE.replace_all(content, |caps: &Captures| {
        format!("[{}]({})", &caps[1], under_guide_root(&caps[2]))
    });
    let content = ABSOLUTE_LINK_RE.replace_all(&content, |caps: &Captures| {
        let mut target = caps[2].to_string();
        if !target.ends_with(".md") {
            target.push_str(".md");
        }
        format!("[{}]({})", &caps[1], under_guide_root(&target))
    });
    content.into_owned()
}

/// Replaces the document's frontmatter with the profile header and relativizes links.
///
/// The title is carried alongside the content but not checked against it.
pub fn apply_frontmatter(content: &str, _title: &str, profile: &EditorProfile) -> String {
    let body = relativize_links(strip_frontmatter(content));
    let mut document = render_frontmatter(profile);
    document.push_str(&body);
    document
}

fn under_guide_root(path: &str) -> Cow<'_, str> {
    match path.strip_prefix(GUIDE_ROOT) {
        Some(rest) => Cow::Owned(format!("./{rest}")),
        None => Cow::Borrowed(path),
    }
}
