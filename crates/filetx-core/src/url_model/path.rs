//! Joining a decoded URL path onto the base directory.

use crate::error::Result;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Joins a decoded, `/`-separated URL path into a platform path.
///
/// - A path not starting with `/` is relative: `base_dir` and a separator
///   are prepended.
/// - A path starting with `/` is absolute and `base_dir` is ignored.
/// - Empty segments after the first (from `//` or a trailing `/`) are dropped.
///
/// On unix any bytes are accepted. Elsewhere segments must be UTF-8.
pub fn join_raw_path(base_dir: &Path, raw: &[u8]) -> Result<PathBuf> {
    let mut out = OsString::with_capacity(raw.len() + base_dir.as_os_str().len() + 1);

    for (i, segment) in raw.split(|&b| b == b'/').enumerate() {
        if i == 0 {
            if !segment.is_empty() {
                out.push(base_dir.as_os_str());
                out.push(MAIN_SEPARATOR_STR);
            }
        } else {
            if segment.is_empty() {
                continue;
            }
            out.push(MAIN_SEPARATOR_STR);
        }
        out.push(os_segment(segment)?);
    }

    Ok(PathBuf::from(out))
}

#[cfg(unix)]
fn os_segment(segment: &[u8]) -> Result<&OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Ok(OsStr::from_bytes(segment))
}

#[cfg(not(unix))]
fn os_segment(segment: &[u8]) -> Result<&OsStr> {
    std::str::from_utf8(segment)
        .map(OsStr::new)
        .map_err(|_| crate::error::Error::Decode {
            input: String::from_utf8_lossy(segment).into_owned(),
            reason: "decoded bytes are not UTF-8",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Joins parts with the platform separator, for expected values.
    fn native(parts: &[&str]) -> PathBuf {
        PathBuf::from(parts.join(MAIN_SEPARATOR_STR))
    }

    fn join(base: &str, raw: &str) -> PathBuf {
        join_raw_path(Path::new(base), raw.as_bytes()).unwrap()
    }

    #[test]
    fn relative_path_joins_base_dir() {
        assert_eq!(join("base", "a/b/c.txt"), native(&["base", "a", "b", "c.txt"]));
    }

    #[test]
    fn absolute_path_ignores_base_dir() {
        assert_eq!(
            join("base", "/srv/data/x.bin"),
            native(&["", "srv", "data", "x.bin"])
        );
    }

    #[test]
    fn duplicate_and_trailing_slashes_collapse() {
        assert_eq!(
            join("base", "//srv///data//x.bin/"),
            native(&["", "srv", "data", "x.bin"])
        );
        assert_eq!(join("base", "a//b"), native(&["base", "a", "b"]));
    }

    #[test]
    fn dot_dot_segments_are_not_normalized() {
        assert_eq!(
            join("base", "../etc/passwd"),
            native(&["base", "..", "etc", "passwd"])
        );
    }

    #[test]
    fn empty_path_resolves_to_empty() {
        assert_eq!(join("base", ""), PathBuf::new());
    }

    #[test]
    fn bare_root_resolves_to_empty() {
        assert_eq!(join("base", "/"), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_segment_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;
        let path = join_raw_path(Path::new("/base"), b"dir/\xffname").unwrap();
        assert_eq!(path.as_os_str().as_bytes(), b"/base/dir/\xffname");
    }
}
