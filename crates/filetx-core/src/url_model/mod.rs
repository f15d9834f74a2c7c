//! `file:` URL modeling and path resolution.
//!
//! Accepts the RFC 8089 forms (`file:/p`, `file:///p`, `file://host/p`) and
//! the common non-compliant opaque form (`file:relative/path`), and turns
//! them into a filesystem path relative to a configured base directory.

mod decode;
mod path;

pub use decode::{percent_decode, query_unescape};
pub use path::join_raw_path;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// The part of a URL after the scheme (and authority, if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPath {
    /// A path starting with `/`, still percent-encoded.
    Hierarchical(String),
    /// Scheme-specific text not starting with `/`, still percent-encoded.
    Opaque(String),
}

/// A URL split the way a `file:` transport needs it.
///
/// A general-purpose URL parser would rewrite `file:relative/path` into
/// `file:///relative/path` and normalize `..` segments, so the split is done
/// here instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUrl {
    /// Lower-cased scheme, e.g. `file`.
    pub scheme: String,
    /// Authority host, if the URL had `//host`. Ignored for path resolution.
    pub host: Option<String>,
    pub path: UrlPath,
}

impl FileUrl {
    /// Splits `raw` into scheme, optional host and path. Query and fragment
    /// are discarded.
    pub fn parse(raw: &str) -> Result<Self> {
        let (scheme, rest) = raw.split_once(':').ok_or_else(|| Error::InvalidUrl {
            url: raw.to_string(),
            reason: "missing scheme",
        })?;
        if !is_valid_scheme(scheme) {
            return Err(Error::InvalidUrl {
                url: raw.to_string(),
                reason: "invalid scheme",
            });
        }

        let rest = rest.split('#').next().unwrap_or_default();
        let rest = rest.split('?').next().unwrap_or_default();

        let (host, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let (authority, path) = match after.find('/') {
                    Some(i) => after.split_at(i),
                    None => (after, ""),
                };
                let host = (!authority.is_empty()).then(|| authority.to_string());
                (host, UrlPath::Hierarchical(path.to_string()))
            }
            None if rest.starts_with('/') => (None, UrlPath::Hierarchical(rest.to_string())),
            None => (None, UrlPath::Opaque(rest.to_string())),
        };

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            host,
            path,
        })
    }

    /// Returns the decoded path bytes, before any base-directory join.
    ///
    /// Hierarchical paths are percent-decoded. Opaque text is decoded like
    /// query text, so `+` also becomes a space.
    pub fn raw_path(&self) -> Result<Vec<u8>> {
        match &self.path {
            UrlPath::Hierarchical(p) => percent_decode(p),
            UrlPath::Opaque(p) => query_unescape(p),
        }
    }
}

/// Returns the lower-cased scheme of `raw`, if it has a syntactically valid one.
pub fn scheme_of(raw: &str) -> Option<String> {
    let (scheme, _) = raw.split_once(':')?;
    is_valid_scheme(scheme).then(|| scheme.to_ascii_lowercase())
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}

/// Resolves a `file:` URL to a filesystem path.
///
/// Relative (opaque) paths are joined onto `base_dir`; absolute paths ignore
/// it. Empty segments are dropped. `..` segments are kept as-is and the result
/// is not checked to stay inside `base_dir`.
pub fn resolve(base_dir: &Path, url: &FileUrl) -> Result<PathBuf> {
    let raw = url.raw_path()?;
    join_raw_path(base_dir, &raw)
}
