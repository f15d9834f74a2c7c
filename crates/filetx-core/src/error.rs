//! Error type shared by the resolver, the synthesizer and the transport.

use std::io;
use std::path::PathBuf;

/// Errors returned by a `file:` round trip. No partial response is ever
/// produced alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request method was something other than GET.
    #[error("only GET method is allowed, got {0}")]
    MethodNotAllowed(http::Method),

    /// The request URL could not be split into scheme and path.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: &'static str },

    /// Percent-decoding of the URL path failed.
    #[error("cannot percent-decode {input:?}: {reason}")]
    Decode { input: String, reason: &'static str },

    /// No transport is registered for the request's scheme.
    #[error("unsupported protocol scheme {0:?}")]
    UnsupportedScheme(String),

    /// A transport is already registered for this scheme.
    #[error("protocol {0:?} already registered")]
    SchemeAlreadyRegistered(String),

    /// The opener failed for the resolved path.
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A metadata provider call itself failed.
    #[error("metadata provider failed: {0}")]
    Metadata(#[source] io::Error),

    /// A metadata key was declared but yielded nil or no values.
    #[error("metadata provider returned no values for key {0:?}")]
    EmptyMetadata(String),

    #[error("invalid header name {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid value for header {name}: {value:?}")]
    InvalidHeaderValue { name: String, value: String },

    #[error("Content-Length cannot have multiple values")]
    MultipleContentLength,

    #[error("invalid value for Content-Length: {0}")]
    InvalidContentLength(String),

    /// The resource exposes no size capability and metadata gave no length.
    #[error("{0}: content length unknown")]
    ContentLengthUnknown(String),

    /// A stat or size probe on the resource failed. Displays as the
    /// underlying error.
    #[error(transparent)]
    Size(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
