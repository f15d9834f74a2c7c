//! Opened resources and the optional capabilities they may expose.
//!
//! Every resource is a readable byte stream; closing happens on drop. On top
//! of that a resource may report its size (via stat, an infallible size, or
//! a fallible size) and may carry HTTP metadata. Each capability is an
//! accessor returning `None` unless the concrete type opts in.

mod probe;

pub(crate) use probe::probe_content_length;

use std::fs;
use std::io::{self, Cursor, Read};
use std::time::SystemTime;

/// Filesystem-info-like structure returned by a [`StatProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    /// Size in bytes.
    pub len: u64,
    pub is_dir: bool,
    pub modified: Option<SystemTime>,
}

impl From<fs::Metadata> for FileStat {
    fn from(meta: fs::Metadata) -> Self {
        Self {
            len: meta.len(),
            is_dir: meta.is_dir(),
            modified: meta.modified().ok(),
        }
    }
}

/// Reports size through a stat call, which may fail.
pub trait StatProvider {
    fn stat(&self) -> io::Result<FileStat>;
}

/// Reports size directly; cannot fail.
pub trait SizeProvider {
    fn size(&self) -> u64;
}

/// Reports size through a call that may fail.
pub trait FallibleSizeProvider {
    fn try_size(&self) -> io::Result<u64>;
}

/// Supplies HTTP headers that are injected verbatim into the response.
pub trait MetadataProvider {
    /// Header names this provider has values for, in order.
    fn metadata_keys(&self) -> io::Result<Vec<String>>;

    /// Values for `key`. `Ok(None)` means the provider has no list at all,
    /// which the synthesizer treats the same as an empty list.
    fn metadata(&self, key: &str) -> io::Result<Option<Vec<String>>>;
}

/// A readable handle returned by an [`Opener`](crate::opener::Opener).
pub trait Resource: Read + Send {
    fn stat_provider(&self) -> Option<&dyn StatProvider> {
        None
    }

    fn size_provider(&self) -> Option<&dyn SizeProvider> {
        None
    }

    fn fallible_size_provider(&self) -> Option<&dyn FallibleSizeProvider> {
        None
    }

    fn metadata_provider(&self) -> Option<&dyn MetadataProvider> {
        None
    }
}

impl StatProvider for fs::File {
    fn stat(&self) -> io::Result<FileStat> {
        self.metadata().map(FileStat::from)
    }
}

impl Resource for fs::File {
    fn stat_provider(&self) -> Option<&dyn StatProvider> {
        Some(self)
    }
}

/// Total length of the underlying buffer, independent of the read position.
impl<T: AsRef<[u8]>> SizeProvider for Cursor<T> {
    fn size(&self) -> u64 {
        self.get_ref().as_ref().len() as u64
    }
}

impl<T: AsRef<[u8]> + Send> Resource for Cursor<T> {
    fn size_provider(&self) -> Option<&dyn SizeProvider> {
        Some(self)
    }
}
