//! Copying a resource's HTTP metadata into response headers.

use crate::error::{Error, Result};
use crate::resource::MetadataProvider;
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH};

/// Copies every metadata key into `headers`, replacing earlier values under
/// the same (case-insensitive) name.
///
/// Returns the authoritative content length if the metadata carried a
/// `Content-Length`.
pub(super) fn apply_metadata(
    meta: &dyn MetadataProvider,
    headers: &mut HeaderMap,
) -> Result<Option<u64>> {
    let keys = meta.metadata_keys().map_err(Error::Metadata)?;
    let mut content_length = None;

    for key in keys {
        let values = match meta.metadata(&key).map_err(Error::Metadata)? {
            Some(values) if !values.is_empty() => values,
            _ => return Err(Error::EmptyMetadata(key)),
        };
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| Error::InvalidHeaderName(key.clone()))?;

        if name == CONTENT_LENGTH {
            if values.len() > 1 {
                return Err(Error::MultipleContentLength);
            }
            content_length = Some(parse_content_length(&values[0])?);
        }

        headers.remove(&name);
        for value in values {
            let header_value =
                HeaderValue::from_str(&value).map_err(|_| Error::InvalidHeaderValue {
                    name: key.clone(),
                    value: value.clone(),
                })?;
            headers.append(name.clone(), header_value);
        }
    }

    Ok(content_length)
}

/// Parses a non-negative decimal that fits in 63 bits. No sign, no spaces.
fn parse_content_length(value: &str) -> Result<u64> {
    let invalid = || Error::InvalidContentLength(value.to_string());
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let n: u64 = value.parse().map_err(|_| invalid())?;
    if n > i64::MAX as u64 {
        return Err(invalid());
    }
    Ok(n)
}
