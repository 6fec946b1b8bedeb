use std::borrow::Cow;
use std::fmt;

use super::UrlComponent;
use crate::codec;
use crate::error::InvalidUrl;
use crate::path_value::{normalize_segments, PathValue};

/// The path of a URL, stored decoded.
///
/// Each `/`-separated segment is decoded and encoded on its own, so an
/// encoded `%2F` stays inside its segment across a round-trip while a literal
/// `/` always separates segments. Standing alone the path knows nothing about
/// a host; the host-aware view is [`PathRef`], obtained from
/// [`Url::path`](crate::Url::path).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlPath {
    /// Decoded segments joined with `/`.
    value: PathValue,
    /// Decoded segments; empty for the empty path.
    segments: Vec<String>,
}

impl UrlPath {
    pub fn new(value: impl Into<PathValue>) -> Self {
        let value = value.into();
        let segments = if value.is_empty() {
            Vec::new()
        } else {
            value.as_str().split('/').map(str::to_string).collect()
        };
        Self { value, segments }
    }

    fn from_segments(segments: Vec<String>) -> Self {
        if matches!(segments.as_slice(), [only] if only.is_empty()) {
            return Self::default();
        }
        Self {
            value: PathValue::new(segments.join("/")),
            segments,
        }
    }

    /// The decoded path exactly as stored.
    pub fn get(&self) -> &str {
        self.value.as_str()
    }

    pub fn value(&self) -> &PathValue {
        &self.value
    }

    /// Sets the decoded path from a string, a [`PathValue`], or another path.
    ///
    /// Every `/` in `value` is a segment boundary.
    pub fn set(&mut self, value: impl Into<PathValue>) {
        *self = Self::new(value);
    }

    /// Resolves `.` and `..` segments in place.
    pub fn normalize(&mut self) -> &mut Self {
        *self = Self::from_segments(normalize_segments(&self.segments));
        self
    }

    /// Plain test for a leading empty segment; see [`PathRef::is_absolute`]
    /// for the host-aware rule.
    pub fn is_absolute(&self) -> bool {
        self.segments.len() > 1 && self.segments[0].is_empty()
    }

    pub fn filename(&self) -> &str {
        self.value.filename()
    }

    pub fn dirname(&self) -> &str {
        self.value.dirname()
    }

    pub fn extension(&self) -> &str {
        self.value.extension()
    }

    pub(crate) fn view(&self, has_host: bool) -> PathRef<'_> {
        PathRef {
            path: self,
            has_host,
        }
    }

    /// Directory part as a path of its own, ending in an empty segment.
    pub(crate) fn parent(&self) -> UrlPath {
        match self.segments.split_last() {
            Some((_, init)) if !init.is_empty() => {
                let mut segments = init.to_vec();
                segments.push(String::new());
                Self::from_segments(segments)
            }
            _ => Self::default(),
        }
    }

    /// Makes a relative path absolute against the directory `base_dir` and
    /// normalizes it. Absolute paths are left alone.
    pub(crate) fn resolve(&mut self, base_dir: &UrlPath) {
        if self.is_absolute() {
            return;
        }
        if base_dir.is_empty() {
            self.normalize();
            return;
        }
        let mut segments = base_dir.segments.clone();
        if segments.last().is_some_and(String::is_empty) {
            segments.pop();
        }
        if self.segments.is_empty() {
            segments.push(String::new());
        } else {
            segments.extend(self.segments.iter().cloned());
        }
        *self = Self::from_segments(normalize_segments(&segments));
    }
}

impl UrlComponent for UrlPath {
    fn parse_component(&mut self, raw: &str) -> Result<(), InvalidUrl> {
        if raw.contains(char::is_whitespace) {
            return Err(InvalidUrl::PathWhitespace);
        }
        *self = Self::from_segments(raw.split('/').map(codec::decode).collect());
        Ok(())
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn equals(&self, other: Option<&Self>) -> bool {
        match other {
            Some(other) => self.segments == other.segments,
            None => self.is_empty(),
        }
    }

    fn to_encoded_string(&self) -> String {
        self.segments
            .iter()
            .map(|segment| codec::encode(segment))
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl From<&UrlPath> for PathValue {
    fn from(path: &UrlPath) -> Self {
        path.value.clone()
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.get() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.get() == *other
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded_string())
    }
}

/// Read-only view of a URL's path that knows whether the URL has a host.
///
/// With a host present an empty path counts as absolute and reads as `/`.
#[derive(Debug, Clone, Copy)]
pub struct PathRef<'a> {
    path: &'a UrlPath,
    has_host: bool,
}

impl<'a> PathRef<'a> {
    pub fn component(&self) -> &'a UrlPath {
        self.path
    }

    /// The decoded path; always starts with `/` when the URL has a host.
    pub fn get(&self) -> Cow<'a, str> {
        let raw = self.path.get();
        if !self.has_host || self.path.is_absolute() {
            Cow::Borrowed(raw)
        } else {
            Cow::Owned(format!("/{raw}"))
        }
    }

    /// Owned copy of the path, rooted like [`PathRef::get`].
    pub fn to_rooted(&self) -> UrlPath {
        if !self.has_host || self.path.is_absolute() {
            return self.path.clone();
        }
        let mut segments = Vec::with_capacity(self.path.segments.len() + 1);
        segments.push(String::new());
        if self.path.is_empty() {
            segments.push(String::new());
        } else {
            segments.extend(self.path.segments.iter().cloned());
        }
        UrlPath::from_segments(segments)
    }

    pub fn is_absolute(&self) -> bool {
        if self.path.is_empty() {
            return self.has_host;
        }
        self.path.is_absolute()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn dirname(&self) -> &'a str {
        if self.has_host && self.path.is_empty() {
            return "/";
        }
        self.path.dirname()
    }

    pub fn filename(&self) -> &'a str {
        self.path.filename()
    }

    pub fn extension(&self) -> &'a str {
        self.path.extension()
    }

    pub fn to_encoded_string(&self) -> String {
        self.path.to_encoded_string()
    }
}

impl PartialEq<str> for PathRef<'_> {
    fn eq(&self, other: &str) -> bool {
        self.get() == other
    }
}

impl PartialEq<&str> for PathRef<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.get() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> UrlPath {
        let mut path = UrlPath::default();
        path.parse_component(raw).unwrap();
        path
    }

    #[test]
    fn initial() {
        let path = UrlPath::default();
        assert_eq!(path.get(), "");
        assert!(path.is_empty());
    }

    #[test]
    fn equals() {
        let mut path = UrlPath::default();
        assert!(path.equals(None));
        assert_eq!(path, UrlPath::default());

        path.set("/foo");
        assert!(path == "/foo");

        let mut other = path.clone();
        assert_eq!(path, other);
        other.set("/bar");
        assert_ne!(path, other);
    }

    #[test]
    fn set_encodes_on_output() {
        let mut path = UrlPath::default();
        path.set("/foo-ü-$-?-bar/x");
        assert_eq!(path.to_string(), "/foo-%C3%BC-%24-%3F-bar/x");
    }

    #[test]
    fn parse_decodes_segments() {
        assert_eq!(parsed("/foo-%C3%BC-%24-%3F-bar/x").get(), "/foo-ü-$-?-bar/x");
    }

    #[test]
    fn encoded_slash_stays_inside_segment() {
        let path = parsed("/a%2Fb/c");
        assert_eq!(path.get(), "/a/b/c");
        assert_eq!(path.to_string(), "/a%2Fb/c");
        assert_eq!(path.filename(), "c");
        assert!(path.is_absolute());

        assert_ne!(path, parsed("/a/b/c"));
        assert_eq!(parsed("/a/b/c").to_string(), "/a/b/c");
    }

    #[test]
    fn set_splits_on_every_slash() {
        let mut path = parsed("/a%2Fb/c");
        path.set("/a/b/c");
        assert_eq!(path.to_string(), "/a/b/c");
        assert_eq!(path, parsed("/a/b/c"));
    }

    #[test]
    fn leading_encoded_slash_is_relative() {
        let path = parsed("%2Fa");
        assert!(!path.is_absolute());
        assert_eq!(path.view(true).get(), "//a");
        assert_eq!(path.view(true).to_rooted().to_string(), "/%2Fa");
    }

    #[test]
    fn normalize_keeps_encoded_slash() {
        let mut path = parsed("/x/../a%2Fb/./c");
        path.normalize();
        assert_eq!(path.to_string(), "/a%2Fb/c");
    }

    #[test]
    fn resolve_against_parent() {
        let base = parsed("/dir%2Fname/index.html");
        let parent = base.parent();
        assert_eq!(parent.to_string(), "/dir%2Fname/");

        let mut path = parsed("../x%2Fy.css");
        path.resolve(&parsed("/a/b/"));
        assert_eq!(path.to_string(), "/a/x%2Fy.css");

        let mut empty = UrlPath::default();
        empty.resolve(&parent);
        assert_eq!(empty.to_string(), "/dir%2Fname/");

        assert!(parsed("foo").parent().is_empty());
        assert_eq!(parsed("/").parent().to_string(), "/");
    }

    #[test]
    fn rooted_copy_with_host() {
        assert_eq!(parsed("").view(true).to_rooted().get(), "/");
        assert_eq!(parsed("foo").view(true).to_rooted().get(), "/foo");
        assert_eq!(parsed("foo").view(false).to_rooted().get(), "foo");
    }

    #[test]
    fn rejects_whitespace_and_keeps_value() {
        let mut path = parsed("/keep");
        for raw in [" ", "/ foo", "/a\tb"] {
            assert_eq!(path.parse_component(raw), Err(InvalidUrl::PathWhitespace), "{raw:?}");
        }
        assert_eq!(path.get(), "/keep");
    }

    #[test]
    fn round_trips() {
        for raw in ["/foo-%C3%BC-%24-%3F-bar/x", "", "/", "./", "../../x"] {
            assert_eq!(parsed(raw).to_string(), raw);
        }
    }

    #[test]
    fn filename_extension_dirname() {
        let cases = [
            ("/", "", "", "/"),
            ("", "", "", ""),
            ("assets/styles/foo.css", "foo.css", "css", "assets/styles/"),
            ("../styles/foo.css", "foo.css", "css", "../styles/"),
        ];
        for (raw, filename, extension, dirname) in cases {
            let path = parsed(raw);
            assert_eq!(path.filename(), filename, "{raw:?}");
            assert_eq!(path.extension(), extension, "{raw:?}");
            assert_eq!(path.dirname(), dirname, "{raw:?}");
        }
    }

    #[test]
    fn is_absolute_without_host() {
        for (raw, expected) in [("/", true), ("", false), (".", false), ("foo/bar", false)] {
            let path = parsed(raw);
            assert_eq!(path.is_absolute(), expected, "{raw:?}");
            assert_eq!(path.view(false).is_absolute(), expected, "{raw:?}");
        }
    }

    #[test]
    fn is_absolute_with_host() {
        for (raw, expected) in [("/", true), ("", true), ("foo/bar", false)] {
            assert_eq!(parsed(raw).view(true).is_absolute(), expected, "{raw:?}");
        }
    }

    #[test]
    fn dirname_with_host() {
        for raw in ["/", ""] {
            let path = parsed(raw);
            let view = path.view(true);
            assert_eq!(view.dirname(), "/");
            assert!(view.is_absolute());
        }
    }

    #[test]
    fn get_with_host_is_rooted() {
        assert_eq!(parsed("").view(true).get(), "/");
        assert_eq!(parsed("foo").view(true).get(), "/foo");
        assert_eq!(parsed("/foo").view(true).get(), "/foo");
        assert_eq!(parsed("foo").view(false).get(), "foo");
    }

    #[test]
    fn normalize_in_place() {
        let mut path = parsed("/a/./b/../c");
        path.normalize();
        assert_eq!(path.get(), "/a/c");
    }
}
