//! Steering core: editor profiles and the pure text transforms of the docs pipeline.
mod frontmatter;
mod links;
mod paths;
mod profile;
mod site;

pub use frontmatter::{apply_frontmatter, relativize_links, render_frontmatter, strip_frontmatter};
pub use links::{extract_doc_links, DocLink};
pub use paths::local_relative_path;
pub use profile::{EditorKind, EditorProfile, ProfileRegistry};
pub use site::SiteLayout;
