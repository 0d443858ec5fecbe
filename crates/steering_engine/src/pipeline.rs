use std::path::{Path, PathBuf};

use steering_core::{
    apply_frontmatter, extract_doc_links, local_relative_path, DocLink, EditorProfile, SiteLayout,
};
use steering_logging::{steer_error, steer_info};

use crate::fetch::Fetcher;
use crate::persist::AtomicFileWriter;
use crate::{LinkError, LinkFailure, SyncError, SyncReport};

/// Where to read the index from and where to write documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub base_url: String,
    pub index_url: String,
    /// Profile output directories are resolved against this root.
    pub output_root: PathBuf,
}

impl SyncConfig {
    pub fn new(site: SiteLayout, output_root: impl Into<PathBuf>) -> Self {
        Self {
            base_url: site.base_url.to_string(),
            index_url: site.index_url.to_string(),
            output_root: output_root.into(),
        }
    }

    pub fn document_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    IndexFetching { url: String },
    IndexFetched { link_count: usize, output_dir: PathBuf },
    LinkStarted { title: String, path: String },
    /// `location` is relative to the output root.
    LinkSaved { title: String, location: PathBuf },
    LinkFailed { title: String, message: String },
    Finished,
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: SyncEvent);
}

/// Reports progress on the terminal through the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: SyncEvent) {
        match event {
            SyncEvent::IndexFetching { url } => {
                steer_info!("Fetching documentation index from {}...", url);
            }
            SyncEvent::IndexFetched {
                link_count,
                output_dir,
            } => {
                steer_info!("Found {} documentation pages to fetch", link_count);
                steer_info!("Output directory: {}", output_dir.display());
            }
            SyncEvent::LinkStarted { title, path } => {
                steer_info!("Fetching: {} from {}", title, path);
            }
            SyncEvent::LinkSaved { location, .. } => {
                steer_info!("Saved: {}", location.display());
            }
            SyncEvent::LinkFailed { title, message } => {
                steer_error!("Failed to fetch {}: {}", title, message);
            }
            SyncEvent::Finished => steer_info!("Documentation fetch completed!"),
        }
    }
}

/// Fetch the index and every guide it links, writing each under the profile's directory.
///
/// Only a failed index fetch is an error; documents that fail are reported
/// through `sink` and listed in the returned report.
pub async fn run_sync(
    fetcher: &dyn Fetcher,
    config: &SyncConfig,
    profile: &EditorProfile,
    sink: &dyn ProgressSink,
) -> Result<SyncReport, SyncError> {
    sink.emit(SyncEvent::IndexFetching {
        url: config.index_url.clone(),
    });
    let index = fetcher
        .fetch_text(&config.index_url)
        .await
        .map_err(SyncError::IndexFetch)?;

    let links = extract_doc_links(&index);
    sink.emit(SyncEvent::IndexFetched {
        link_count: links.len(),
        output_dir: profile.output_dir().to_path_buf(),
    });

    let writer = AtomicFileWriter::new(config.output_root.join(profile.output_dir()));
    let mut report = SyncReport::default();

    for link in &links {
        sink.emit(SyncEvent::LinkStarted {
            title: link.title.clone(),
            path: link.path.clone(),
        });
        match sync_link(fetcher, config, profile, &writer, link).await {
            Ok(saved) => {
                sink.emit(SyncEvent::LinkSaved {
                    title: link.title.clone(),
                    location: relative_location(profile.output_dir(), &link.path),
                });
                report.saved.push(saved);
            }
            Err(err) => {
                let message = err.to_string();
                sink.emit(SyncEvent::LinkFailed {
                    title: link.title.clone(),
                    message: message.clone(),
                });
                report.failed.push(LinkFailure {
                    title: link.title.clone(),
                    message,
                });
            }
        }
    }

    sink.emit(SyncEvent::Finished);
    Ok(report)
}

async fn sync_link(
    fetcher: &dyn Fetcher,
    config: &SyncConfig,
    profile: &EditorProfile,
    writer: &AtomicFileWriter,
    link: &DocLink,
) -> Result<PathBuf, LinkError> {
    let content = fetcher.fetch_text(&config.document_url(&link.path)).await?;
    let local = local_relative_path(&link.path);
    let document = apply_frontmatter(&content, &link.title, profile);
    Ok(writer.write(local, &document)?)
}

fn relative_location(output_dir: &Path, remote_path: &str) -> PathBuf {
    output_dir.join(local_relative_path(remote_path).trim_start_matches('/'))
}
