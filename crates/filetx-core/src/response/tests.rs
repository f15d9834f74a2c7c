use super::*;
use crate::error::Error;
use crate::resource::{
    FallibleSizeProvider, FileStat, MetadataProvider, SizeProvider, StatProvider,
};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::io::Cursor;

const CONTENT: &[u8] = b"hello world\n";

/// In-memory resource whose capabilities are switched on per test.
#[derive(Default)]
struct Fake {
    reader: Cursor<Vec<u8>>,
    stat: bool,
    size: bool,
    fallible: bool,
    /// `None` disables the metadata capability; an inner `None` value is a nil list.
    metadata: Option<Vec<(&'static str, Option<Vec<&'static str>>)>>,
    metadata_fails: bool,
}

impl Fake {
    fn new() -> Self {
        Self {
            reader: Cursor::new(CONTENT.to_vec()),
            ..Self::default()
        }
    }

    fn len(&self) -> u64 {
        self.reader.get_ref().len() as u64
    }

    fn with_metadata(mut self, entries: Vec<(&'static str, Option<Vec<&'static str>>)>) -> Self {
        self.metadata = Some(entries);
        self
    }
}

impl Read for Fake {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl StatProvider for Fake {
    fn stat(&self) -> io::Result<FileStat> {
        Ok(FileStat {
            len: self.len(),
            is_dir: false,
            modified: None,
        })
    }
}

impl SizeProvider for Fake {
    fn size(&self) -> u64 {
        self.len()
    }
}

impl FallibleSizeProvider for Fake {
    fn try_size(&self) -> io::Result<u64> {
        Ok(self.len())
    }
}

impl MetadataProvider for Fake {
    fn metadata_keys(&self) -> io::Result<Vec<String>> {
        if self.metadata_fails {
            return Err(io::Error::other("keys unavailable"));
        }
        Ok(self
            .metadata
            .iter()
            .flatten()
            .map(|(k, _)| k.to_string())
            .collect())
    }

    fn metadata(&self, key: &str) -> io::Result<Option<Vec<String>>> {
        let entry = self
            .metadata
            .iter()
            .flatten()
            .find(|(k, _)| *k == key)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such key"))?;
        Ok(entry
            .1
            .as_ref()
            .map(|vs| vs.iter().map(|v| v.to_string()).collect()))
    }
}

impl Resource for Fake {
    fn stat_provider(&self) -> Option<&dyn StatProvider> {
        self.stat.then_some(self as &dyn StatProvider)
    }

    fn size_provider(&self) -> Option<&dyn SizeProvider> {
        self.size.then_some(self as &dyn SizeProvider)
    }

    fn fallible_size_provider(&self) -> Option<&dyn FallibleSizeProvider> {
        self.fallible.then_some(self as &dyn FallibleSizeProvider)
    }

    fn metadata_provider(&self) -> Option<&dyn MetadataProvider> {
        (self.metadata.is_some() || self.metadata_fails).then_some(self as &dyn MetadataProvider)
    }
}

fn build(fake: Fake) -> Result<Response, Error> {
    build_response(&Request::get("file:///test.txt"), Box::new(fake))
}

fn read_all(body: &mut Body) -> Vec<u8> {
    let mut out = Vec::new();
    body.read_to_end(&mut out).unwrap();
    out
}

#[test]
fn direct_size_sets_header_and_length() {
    let fake = Fake {
        reader: Cursor::new(b"12345".to_vec()),
        size: true,
        ..Fake::default()
    };
    let resp = build(fake).unwrap();
    assert_eq!(resp.content_length, 5);
    assert_eq!(resp.headers.get(CONTENT_LENGTH).unwrap(), "5");
}

#[test]
fn fixed_response_fields() {
    let resp = build(Fake {
        stat: true,
        ..Fake::new()
    })
    .unwrap();
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.status_text, "200 OK");
    assert_eq!(resp.proto, "HTTP/1.0");
    assert_eq!((resp.proto_major, resp.proto_minor), (1, 1));
    assert!(resp.close);
    assert!(resp.uncompressed);
    assert_eq!(resp.request_url, "file:///test.txt");
}

#[test]
fn stat_sized_body_reads_whole_content() {
    let mut resp = build(Fake {
        stat: true,
        ..Fake::new()
    })
    .unwrap();
    assert_eq!(resp.content_length, CONTENT.len() as u64);
    assert_eq!(read_all(&mut resp.body), CONTENT);
}

#[test]
fn fallible_size_alone_is_enough() {
    let resp = build(Fake {
        fallible: true,
        ..Fake::new()
    })
    .unwrap();
    assert_eq!(resp.content_length, 12);
    assert_eq!(resp.headers.get(CONTENT_LENGTH).unwrap(), "12");
}

#[test]
fn no_size_capability_is_content_length_unknown() {
    let err = build(Fake::new()).unwrap_err();
    assert!(matches!(err, Error::ContentLengthUnknown(ref url) if url == "file:///test.txt"));
}

#[test]
fn metadata_without_length_still_needs_a_size() {
    let err = build(Fake::new().with_metadata(vec![("Content-Type", Some(vec!["text/x-test"]))]))
        .unwrap_err();
    assert!(matches!(err, Error::ContentLengthUnknown(_)));
}

#[test]
fn metadata_headers_are_copied() {
    let fake = Fake {
        stat: true,
        ..Fake::new()
    }
    .with_metadata(vec![
        ("content-type", Some(vec!["text/x-test"])),
        ("X-Multi", Some(vec!["a", "b"])),
    ]);
    let resp = build(fake).unwrap();
    assert_eq!(resp.headers.get(CONTENT_TYPE).unwrap(), "text/x-test");
    let multi: Vec<_> = resp.headers.get_all("x-multi").iter().collect();
    assert_eq!(multi, ["a", "b"]);
    assert_eq!(resp.headers.get(CONTENT_LENGTH).unwrap(), "12");
}

#[test]
fn later_key_differing_in_case_replaces_earlier() {
    let fake = Fake {
        size: true,
        ..Fake::new()
    }
    .with_metadata(vec![
        ("x-tag", Some(vec!["first"])),
        ("X-TAG", Some(vec!["second"])),
    ]);
    let resp = build(fake).unwrap();
    let tags: Vec<_> = resp.headers.get_all("X-Tag").iter().collect();
    assert_eq!(tags, ["second"]);
}

#[test]
fn metadata_content_length_is_authoritative_and_truncates() {
    let fake = Fake {
        stat: true,
        ..Fake::new()
    }
    .with_metadata(vec![
        ("Content-Type", Some(vec!["text/x-test"])),
        ("Content-Length", Some(vec!["5"])),
    ]);
    let mut resp = build(fake).unwrap();
    assert_eq!(resp.content_length, 5);
    assert_eq!(resp.headers.get(CONTENT_LENGTH).unwrap(), "5");
    assert_eq!(resp.headers.get_all(CONTENT_LENGTH).iter().count(), 1);
    assert_eq!(read_all(&mut resp.body), b"hello");
}

#[test]
fn metadata_content_length_needs_no_size_capability() {
    let resp = build(Fake::new().with_metadata(vec![("content-length", Some(vec!["3"]))])).unwrap();
    assert_eq!(resp.content_length, 3);
}

#[test]
fn nil_or_empty_values_fail_for_every_capability_mix() {
    for mask in 0u8..8 {
        let (stat, size, fallible) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        for values in [None, Some(vec![])] {
            let fake = Fake {
                stat,
                size,
                fallible,
                ..Fake::new()
            }
            .with_metadata(vec![
                ("Content-Type", Some(vec!["text/x-test"])),
                ("Content-Length", values.clone()),
            ]);
            let err = build(fake).unwrap_err();
            assert!(
                matches!(err, Error::EmptyMetadata(ref k) if k == "Content-Length"),
                "stat={stat} size={size} fallible={fallible} values={values:?}: {err}"
            );
        }
    }
}

#[test]
fn multiple_content_length_values_rejected() {
    let fake = Fake {
        stat: true,
        ..Fake::new()
    }
    .with_metadata(vec![("Content-Length", Some(vec!["5", "5"]))]);
    assert!(matches!(build(fake), Err(Error::MultipleContentLength)));
}

#[test]
fn non_numeric_content_length_rejected() {
    let fake = Fake {
        stat: true,
        ..Fake::new()
    }
    .with_metadata(vec![("Content-Length", Some(vec!["five"]))]);
    assert!(matches!(build(fake), Err(Error::InvalidContentLength(ref v)) if v == "five"));
}

#[test]
fn metadata_provider_failure_surfaces() {
    let fake = Fake {
        stat: true,
        metadata_fails: true,
        ..Fake::new()
    };
    assert!(matches!(build(fake), Err(Error::Metadata(_))));
}

#[test]
fn invalid_header_name_rejected() {
    let fake = Fake {
        stat: true,
        ..Fake::new()
    }
    .with_metadata(vec![("Bad Header", Some(vec!["x"]))]);
    assert!(matches!(build(fake), Err(Error::InvalidHeaderName(_))));
}

#[test]
fn into_http_keeps_status_headers_and_body() {
    let resp = build(Fake {
        size: true,
        ..Fake::new()
    })
    .unwrap();
    let mut http_resp = resp.into_http();
    assert_eq!(http_resp.status(), StatusCode::OK);
    assert_eq!(http_resp.version(), Version::HTTP_10);
    assert_eq!(http_resp.headers().get(CONTENT_LENGTH).unwrap(), "12");
    assert_eq!(read_all(http_resp.body_mut()), CONTENT);
}

#[test]
fn body_remaining_tracks_reads() {
    let mut resp = build(Fake {
        size: true,
        ..Fake::new()
    })
    .unwrap();
    let mut buf = [0u8; 4];
    resp.body.read_exact(&mut buf).unwrap();
    assert_eq!(resp.body.remaining(), 8);
}
