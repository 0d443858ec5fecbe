//! Steering engine: fetching, persistence and the sync pipeline.
mod decode;
mod fetch;
mod persist;
mod pipeline;
mod types;

pub use decode::{decode_text, DecodedText};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{destination_path, ensure_parent_dir, AtomicFileWriter, PersistError};
pub use pipeline::{run_sync, LogProgressSink, ProgressSink, SyncConfig, SyncEvent};
pub use types::{FailureKind, FetchError, LinkError, LinkFailure, SyncError, SyncReport};
