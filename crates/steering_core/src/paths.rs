use crate::site::SiteLayout;

/// Maps a remote document path to a path relative to the output directory.
///
/// Paths outside the docs root pass through unchanged.
pub fn local_relative_path(remote_path: &str) -> &str {
    remote_path
        .strip_prefix(SiteLayout::GITBOOK.docs_prefix)
        .unwrap_or(remote_path)
}
