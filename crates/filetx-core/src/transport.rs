//! The `file:` transport: resolve, open, synthesize.

use crate::config::TransportConfig;
use crate::error::{Error, Result};
use crate::opener::{FsOpener, Opener};
use crate::response::{build_response, Request, Response};
use crate::url_model::{self, FileUrl};
use http::Method;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A request-to-response transform, registered per URL scheme.
pub trait RoundTrip: Send + Sync {
    fn round_trip(&self, request: &Request) -> Result<Response>;
}

/// Serves `file:` URLs through an [`Opener`].
///
/// Immutable after construction; share it behind an `Arc` across threads.
#[derive(Clone)]
pub struct FileTransport {
    base_dir: PathBuf,
    opener: Arc<dyn Opener>,
}

impl FileTransport {
    /// Transport that opens files from the local filesystem.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_opener(base_dir, Arc::new(FsOpener))
    }

    pub fn with_opener(base_dir: impl Into<PathBuf>, opener: Arc<dyn Opener>) -> Self {
        Self {
            base_dir: base_dir.into(),
            opener,
        }
    }

    pub fn from_config(cfg: &TransportConfig) -> Self {
        Self::new(cfg.base_dir.clone())
    }

    /// Directory that relative (`file:relative/path`) URLs are joined onto.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves a request URL to the path that would be opened.
    pub fn resolve(&self, url: &str) -> Result<PathBuf> {
        let parsed = FileUrl::parse(url)?;
        url_model::resolve(&self.base_dir, &parsed)
    }
}

impl RoundTrip for FileTransport {
    fn round_trip(&self, request: &Request) -> Result<Response> {
        if request.method != Method::GET {
            tracing::warn!(method = %request.method, url = %request.url, "rejected non-GET file request");
            return Err(Error::MethodNotAllowed(request.method.clone()));
        }

        let path = self.resolve(&request.url)?;
        tracing::debug!(url = %request.url, path = %path.display(), "resolved file URL");

        let resource = self
            .opener
            .open(&path)
            .map_err(|source| Error::Open { path, source })?;

        build_response(request, resource)
    }
}

impl fmt::Debug for FileTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTransport")
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}
