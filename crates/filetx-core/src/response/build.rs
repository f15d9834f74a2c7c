//! Response synthesis from an opened resource.

use super::metadata::apply_metadata;
use super::{Body, Request, Response, PROTO, PROTO_MAJOR, PROTO_MINOR, STATUS_TEXT};
use crate::error::{Error, Result};
use crate::resource::{probe_content_length, Resource};
use http::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
use http::StatusCode;

/// Builds a `200 OK` response whose body is `resource`.
///
/// The content length comes from a `Content-Length` metadata header when the
/// resource provides one; otherwise from the first available of stat, direct
/// size, or fallible size. A resource with none of these is rejected, so a
/// response is never unsized. On error the resource is dropped (closed).
///
/// Method checks are the caller's job and happen before the resource is
/// opened; see [`FileTransport`](crate::transport::FileTransport).
pub fn build_response(request: &Request, resource: Box<dyn Resource>) -> Result<Response> {
    let mut headers = HeaderMap::new();

    let from_metadata = match resource.metadata_provider() {
        Some(meta) => apply_metadata(meta, &mut headers)?,
        None => None,
    };

    let content_length = match from_metadata {
        Some(n) => n,
        None => {
            let n = probe_content_length(resource.as_ref())
                .unwrap_or_else(|| Err(Error::ContentLengthUnknown(request.url.clone())))?;
            headers.insert(CONTENT_LENGTH, HeaderValue::from(n));
            n
        }
    };

    Ok(Response {
        status: StatusCode::OK,
        status_text: STATUS_TEXT,
        proto: PROTO,
        proto_major: PROTO_MAJOR,
        proto_minor: PROTO_MINOR,
        headers,
        body: Body::new(resource, content_length),
        content_length,
        close: true,
        uncompressed: true,
        request_url: request.url.clone(),
    })
}
