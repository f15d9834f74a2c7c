//! Openers: the capability that maps a resolved path to an open resource.
//!
//! The transport never touches the filesystem itself; it only calls an
//! [`Opener`]. [`FsOpener`] is the default passed at construction time.

use crate::resource::{MetadataProvider, Resource, SizeProvider};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Opens a named resource. May be called concurrently from many requests.
pub trait Opener: Send + Sync {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Resource>>;
}

/// Opens files on the local filesystem with [`File::open`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl Opener for FsOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Resource>> {
        let file = File::open(path)?;
        Ok(Box::new(file))
    }
}

/// One in-memory entry: content plus optional headers.
#[derive(Debug, Clone)]
struct MemoryEntry {
    content: Arc<[u8]>,
    headers: Vec<(String, Vec<String>)>,
}

/// Serves fixed content from memory, keyed by resolved path.
///
/// Entries without headers report their size directly. Entries with headers
/// additionally expose them as HTTP metadata.
#[derive(Debug, Clone, Default)]
pub struct MemoryOpener {
    entries: HashMap<PathBuf, MemoryEntry>,
}

impl MemoryOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) content at `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> &mut Self {
        let content: Vec<u8> = content.into();
        let entry = MemoryEntry {
            content: content.into(),
            headers: Vec::new(),
        };
        self.entries.insert(path.into(), entry);
        self
    }

    /// Attaches a header to an existing entry. Values accumulate per name.
    /// Does nothing if `path` has no entry.
    pub fn header(
        &mut self,
        path: impl AsRef<Path>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        if let Some(entry) = self.entries.get_mut(path.as_ref()) {
            let name = name.into();
            let value = value.into();
            match entry.headers.iter_mut().find(|(n, _)| *n == name) {
                Some((_, values)) => values.push(value),
                None => entry.headers.push((name, vec![value])),
            }
        }
        self
    }
}

impl Opener for MemoryOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Resource>> {
        let entry = self.entries.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such entry", path.display()),
            )
        })?;
        Ok(Box::new(MemoryResource {
            reader: Cursor::new(Arc::clone(&entry.content)),
            headers: entry.headers.clone(),
        }))
    }
}

struct MemoryResource {
    reader: Cursor<Arc<[u8]>>,
    headers: Vec<(String, Vec<String>)>,
}

impl Read for MemoryResource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl SizeProvider for MemoryResource {
    fn size(&self) -> u64 {
        self.reader.get_ref().len() as u64
    }
}

impl MetadataProvider for MemoryResource {
    fn metadata_keys(&self) -> io::Result<Vec<String>> {
        Ok(self.headers.iter().map(|(name, _)| name.clone()).collect())
    }

    fn metadata(&self, key: &str) -> io::Result<Option<Vec<String>>> {
        Ok(self
            .headers
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, values)| values.clone()))
    }
}

impl Resource for MemoryResource {
    fn size_provider(&self) -> Option<&dyn SizeProvider> {
        Some(self)
    }

    fn metadata_provider(&self) -> Option<&dyn MetadataProvider> {
        (!self.headers.is_empty()).then_some(self as &dyn MetadataProvider)
    }
}
