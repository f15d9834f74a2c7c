//! `file:` URL transport for HTTP clients.
//!
//! Resolves `file:` URLs against a base directory, opens them through a
//! pluggable [`Opener`], and packages the result as a sized `200 OK`
//! response that a scheme-dispatching HTTP client can hand back to callers.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod opener;
pub mod resource;
pub mod response;
pub mod transport;
pub mod url_model;

pub use dispatch::SchemeRouter;
pub use error::{Error, Result};
pub use opener::{FsOpener, MemoryOpener, Opener};
pub use resource::Resource;
pub use response::{build_response, Body, Request, Response};
pub use transport::{FileTransport, RoundTrip};
