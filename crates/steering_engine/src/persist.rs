use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("refusing to write outside the output directory: {0}")]
    UnsafePath(String),
    #[error("cannot create directory {path:?}: {message}")]
    OutputDir { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Resolve a document path below `dir`.
///
/// A leading `/` is ignored; parent, root or prefix components are refused.
pub fn destination_path(dir: &Path, relative: &str) -> Result<PathBuf, PersistError> {
    let trimmed = Path::new(relative.trim_start_matches('/'));
    let mut has_name = false;
    for component in trimmed.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            _ => return Err(PersistError::UnsafePath(relative.to_string())),
        }
    }
    if !has_name {
        return Err(PersistError::UnsafePath(relative.to_string()));
    }
    Ok(dir.join(trimmed))
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Path) -> Result<(), PersistError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|e| PersistError::OutputDir {
        path: parent.to_path_buf(),
        message: e.to_string(),
    })
}

/// Writes documents below a root directory, one temp file + rename per document.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Write `content` to `{dir}/{relative}`, replacing any previous file.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf, PersistError> {
        let target = destination_path(&self.dir, relative)?;
        ensure_parent_dir(&target)?;
        let parent = target.parent().unwrap_or(&self.dir);

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
