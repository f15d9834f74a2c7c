//! Synthesized HTTP responses for opened resources.
//!
//! [`build_response`] turns a request plus an opened [`Resource`] into a
//! fully sized `200 OK` response. The body is the resource itself; this
//! module reads only size and metadata, never body bytes.

mod build;
mod metadata;

pub use build::build_response;

use crate::resource::Resource;
use http::{HeaderMap, Method, StatusCode, Version};
use std::fmt;
use std::io::{self, Read};

pub const STATUS_TEXT: &str = "200 OK";
pub const PROTO: &str = "HTTP/1.0";
pub const PROTO_MAJOR: u8 = 1;
/// Kept at 1 alongside `HTTP/1.0`; hosts may depend on the exact pair.
pub const PROTO_MINOR: u8 = 1;

/// A retrieval request as seen by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Raw request URL, e.g. `file:///etc/hosts` or `file:notes/todo.txt`.
    pub url: String,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }
}

/// Response body: the opened resource, limited to the response's content
/// length. Reads past that length return EOF even if the resource has more.
/// Dropping the body closes the resource.
pub struct Body {
    inner: io::Take<Box<dyn Resource>>,
}

impl Body {
    fn new(resource: Box<dyn Resource>, content_length: u64) -> Self {
        Self {
            inner: resource.take(content_length),
        }
    }

    /// Bytes still readable before the content length is reached.
    pub fn remaining(&self) -> u64 {
        self.inner.limit()
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("remaining", &self.remaining())
            .finish_non_exhaustive()
    }
}

/// A synthesized response. The caller owns `body`.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Always `"200 OK"`.
    pub status_text: &'static str,
    /// Always `"HTTP/1.0"`.
    pub proto: &'static str,
    pub proto_major: u8,
    pub proto_minor: u8,
    /// Always carries `Content-Length`, equal to `content_length`.
    pub headers: HeaderMap,
    pub body: Body,
    pub content_length: u64,
    /// The connection should be closed after this response.
    pub close: bool,
    /// The body is not compressed.
    pub uncompressed: bool,
    /// URL of the request this response answers.
    pub request_url: String,
}

impl Response {
    /// Converts into an `http::Response` for hosts built on the `http` types.
    pub fn into_http(self) -> http::Response<Body> {
        let mut resp = http::Response::new(self.body);
        *resp.status_mut() = self.status;
        *resp.version_mut() = Version::HTTP_10;
        *resp.headers_mut() = self.headers;
        resp
    }
}

#[cfg(test)]
mod tests;
