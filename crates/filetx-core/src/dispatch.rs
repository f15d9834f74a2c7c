//! Scheme dispatch: route each request to the transport registered for its
//! URL scheme, the way an HTTP client's protocol table does.

use crate::error::{Error, Result};
use crate::response::{Request, Response};
use crate::transport::{FileTransport, RoundTrip};
use crate::url_model::scheme_of;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct SchemeRouter {
    transports: HashMap<String, Arc<dyn RoundTrip>>,
}

impl SchemeRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with a filesystem-backed [`FileTransport`] on `file`.
    pub fn with_file_transport(base_dir: impl Into<PathBuf>) -> Self {
        let mut router = Self::new();
        router.transports.insert(
            "file".to_string(),
            Arc::new(FileTransport::new(base_dir)),
        );
        router
    }

    /// Registers `transport` for `scheme` (case-insensitive). A scheme can be
    /// registered only once.
    pub fn register(&mut self, scheme: &str, transport: Arc<dyn RoundTrip>) -> Result<()> {
        let scheme = scheme.to_ascii_lowercase();
        if self.transports.contains_key(&scheme) {
            return Err(Error::SchemeAlreadyRegistered(scheme));
        }
        tracing::debug!(scheme = %scheme, "registered transport");
        self.transports.insert(scheme, transport);
        Ok(())
    }

    pub fn is_registered(&self, scheme: &str) -> bool {
        self.transports.contains_key(&scheme.to_ascii_lowercase())
    }
}

impl RoundTrip for SchemeRouter {
    fn round_trip(&self, request: &Request) -> Result<Response> {
        let scheme = scheme_of(&request.url).ok_or_else(|| Error::InvalidUrl {
            url: request.url.clone(),
            reason: "missing scheme",
        })?;
        let transport = self
            .transports
            .get(&scheme)
            .ok_or(Error::UnsupportedScheme(scheme))?;
        transport.round_trip(request)
    }
}
