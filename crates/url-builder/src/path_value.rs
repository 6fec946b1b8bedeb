//! Slash-segmented path algebra used by the path component.
//!
//! Works on decoded text only; percent-encoding is the component's concern.

use std::fmt;

/// A `/`-separated path such as `assets/styles/foo.css` or `/catalog/`.
///
/// The text is stored as given; only [`PathValue::normalize`] rewrites it.
/// A trailing `/` marks a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathValue {
    raw: String,
}

impl PathValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with('/')
    }

    /// Directory part including the trailing slash, e.g. `assets/styles/` for
    /// `assets/styles/foo.css`. Empty when the path has no slash.
    pub fn dirname(&self) -> &str {
        match self.raw.rfind('/') {
            Some(idx) => &self.raw[..=idx],
            None => "",
        }
    }

    /// Last segment; empty for directory paths.
    pub fn filename(&self) -> &str {
        match self.raw.rfind('/') {
            Some(idx) => &self.raw[idx + 1..],
            None => &self.raw,
        }
    }

    /// Text after the last `.` of the filename. Dotfiles such as `.htaccess`
    /// have no extension.
    pub fn extension(&self) -> &str {
        match self.filename().rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext,
            _ => "",
        }
    }

    /// Resolves `.` and `..` segments and collapses repeated slashes.
    ///
    /// `..` never climbs above the root of an absolute path; leading `..`
    /// segments of a relative path are kept.
    pub fn normalize(&self) -> PathValue {
        if self.raw.is_empty() {
            return self.clone();
        }
        let segments: Vec<&str> = self.raw.split('/').collect();
        PathValue::new(normalize_segments(&segments).join("/"))
    }

    /// Makes a relative path absolute against the directory `base_dir`.
    ///
    /// Absolute paths are returned unchanged. The result is not normalized.
    pub fn resolve(&self, base_dir: &str) -> PathValue {
        if self.is_absolute() || base_dir.is_empty() {
            return self.clone();
        }
        let mut out = String::with_capacity(base_dir.len() + self.raw.len() + 1);
        out.push_str(base_dir);
        if !base_dir.ends_with('/') {
            out.push('/');
        }
        out.push_str(&self.raw);
        PathValue::new(out)
    }
}

/// Segment-level form of [`PathValue::normalize`].
///
/// `segments` is a path split on `/`, so a leading empty segment marks an
/// absolute path and a trailing one a directory. Segments may themselves
/// contain `/`; they are never split further.
pub(crate) fn normalize_segments<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return Vec::new();
    };
    let absolute = segments.len() > 1 && first.as_ref().is_empty();
    let directory = matches!(last.as_ref(), "" | "." | "..");

    let mut kept: Vec<&str> = Vec::new();
    for segment in segments {
        match segment.as_ref() {
            "" | "." => {}
            ".." => match kept.last() {
                Some(last) if *last != ".." => {
                    kept.pop();
                }
                _ if !absolute => kept.push(".."),
                _ => {}
            },
            other => kept.push(other),
        }
    }

    let mut out = Vec::with_capacity(kept.len() + 2);
    if absolute {
        out.push(String::new());
    }
    out.extend(kept.iter().map(|segment| segment.to_string()));
    if (directory && !kept.is_empty()) || (absolute && kept.is_empty()) {
        out.push(String::new());
    }
    out
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PathValue {
    fn from(raw: &str) -> Self {
        PathValue::new(raw)
    }
}

impl From<String> for PathValue {
    fn from(raw: String) -> Self {
        PathValue::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirname_keeps_trailing_slash() {
        let cases = [
            ("", ""),
            ("/", "/"),
            ("foo.css", ""),
            ("/foo", "/"),
            ("/bar/", "/bar/"),
            ("assets/styles/foo.css", "assets/styles/"),
            ("../styles/foo.css", "../styles/"),
            ("/catalog/products.html", "/catalog/"),
        ];
        for (raw, expected) in cases {
            assert_eq!(PathValue::new(raw).dirname(), expected, "dirname of {raw:?}");
        }
    }

    #[test]
    fn filename_and_extension() {
        let cases = [
            ("", "", ""),
            ("/", "", ""),
            ("assets/styles/foo.css", "foo.css", "css"),
            ("../styles/foo.css", "foo.css", "css"),
            ("archive.tar.gz", "archive.tar.gz", "gz"),
            ("/.htaccess", ".htaccess", ""),
            ("README", "README", ""),
        ];
        for (raw, filename, extension) in cases {
            let p = PathValue::new(raw);
            assert_eq!(p.filename(), filename, "filename of {raw:?}");
            assert_eq!(p.extension(), extension, "extension of {raw:?}");
        }
    }

    #[test]
    fn normalize_absolute() {
        let cases = [
            ("/", "/"),
            ("/catalog/../assets/style.css", "/assets/style.css"),
            ("/a/b/../../../x", "/x"),
            ("/a/./b//c", "/a/b/c"),
            ("/a/b/..", "/a/"),
            ("/a/..", "/"),
        ];
        for (raw, expected) in cases {
            assert_eq!(PathValue::new(raw).normalize().as_str(), expected, "normalize {raw:?}");
        }
    }

    #[test]
    fn normalize_relative_keeps_leading_parents() {
        let cases = [
            ("", ""),
            ("../a/./b/", "../a/b/"),
            ("../../x", "../../x"),
            ("a/../../x", "../x"),
            ("a/..", ""),
            ("./", ""),
        ];
        for (raw, expected) in cases {
            assert_eq!(PathValue::new(raw).normalize().as_str(), expected, "normalize {raw:?}");
        }
    }

    #[test]
    fn normalize_segments_keeps_embedded_slashes() {
        assert_eq!(normalize_segments(&["", "a/b", ".", "c", ".."]), ["", "a/b", ""]);
        assert_eq!(normalize_segments(&["", ".."]), ["", ""]);
        assert!(normalize_segments::<&str>(&[]).is_empty());
    }

    #[test]
    fn resolve_against_directory() {
        let rel = PathValue::new("../assets/style.css");
        assert_eq!(
            rel.resolve("/catalog/").normalize().as_str(),
            "/assets/style.css"
        );
        assert_eq!(
            PathValue::new("foo/index.html").resolve("/bar").as_str(),
            "/bar/foo/index.html"
        );
        assert_eq!(PathValue::new("/abs").resolve("/bar/").as_str(), "/abs");
        assert_eq!(PathValue::new("x").resolve("").as_str(), "x");
    }
}
