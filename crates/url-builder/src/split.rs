//! Generic URI splitter.
//!
//! Cuts a URL string into raw, still-encoded substrings without validating
//! them; the components do that. The splitting rules follow the widely used
//! `parse_url` semantics, quirks included: an authority must carry a host
//! (`http:///` is rejected), `file:///` is accepted as a host-less path,
//! `host:80` without scheme is read as host and port, and only the first
//! `?` starts the query (`/foo??x` has query `?x`).

use crate::config::UrlConfig;
use crate::error::InvalidUrl;

/// Raw substrings of a URL. Absent parts are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParts {
    pub scheme: String,
    pub host: String,
    pub port: String,
    pub user: String,
    pub pass: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

/// Splits `input`, falling back to a `file://` re-split for host-less custom
/// schemes such as `data-uri:///x`.
///
/// Network schemes never take the fallback.
pub fn split_url(input: &str, config: &UrlConfig) -> Result<RawParts, InvalidUrl> {
    if let Some(parts) = split(input) {
        return Ok(parts);
    }
    let (scheme, rest) = input.split_once("://").ok_or(InvalidUrl::Unparsable)?;
    if config.is_network_scheme(scheme) {
        return Err(InvalidUrl::Unparsable);
    }
    tracing::debug!(scheme, "re-splitting host-less URL as file://{}", rest);
    let mut parts = split(&format!("file://{rest}")).ok_or(InvalidUrl::Unparsable)?;
    parts.scheme = scheme.to_string();
    Ok(parts)
}

enum Next {
    Host,
    Path,
}

struct Splitter<'a> {
    input: &'a str,
    bytes: &'a [u8],
    parts: RawParts,
    has_port: bool,
}

/// Primary splitter. Returns `None` when the input cannot be split at all.
pub fn split(input: &str) -> Option<RawParts> {
    let mut splitter = Splitter {
        input,
        bytes: input.as_bytes(),
        parts: RawParts::default(),
        has_port: false,
    };
    splitter.run()?;
    Some(splitter.parts)
}

fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-')
}

impl<'a> Splitter<'a> {
    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn starts_authority(&self, at: usize) -> bool {
        at + 1 < self.len() && self.bytes[at] == b'/' && self.bytes[at + 1] == b'/'
    }

    fn find(&self, from: usize, to: usize, needle: u8) -> Option<usize> {
        self.bytes[from..to]
            .iter()
            .position(|&b| b == needle)
            .map(|i| from + i)
    }

    fn rfind(&self, from: usize, to: usize, needle: u8) -> Option<usize> {
        self.bytes[from..to]
            .iter()
            .rposition(|&b| b == needle)
            .map(|i| from + i)
    }

    fn run(&mut self) -> Option<()> {
        let len = self.len();
        let mut start = 0;

        let next = match self.find(0, len, b':') {
            Some(colon) if colon > 0 => {
                if !self.bytes[..colon].iter().all(|&b| is_scheme_byte(b)) {
                    let stop = self
                        .bytes
                        .iter()
                        .position(|&b| b == b'?' || b == b'#')
                        .unwrap_or(len);
                    if colon + 1 < len && colon < stop {
                        self.port_after_colon(colon, &mut start)?
                    } else if self.starts_authority(0) {
                        start = 2;
                        Next::Host
                    } else {
                        Next::Path
                    }
                } else if colon + 1 == len {
                    self.parts.scheme = self.input[..colon].to_string();
                    return Some(());
                } else if self.bytes[colon + 1] != b'/' {
                    // `host:80` without scheme
                    let digits_end = colon
                        + 1
                        + self.bytes[colon + 1..]
                            .iter()
                            .take_while(|b| b.is_ascii_digit())
                            .count();
                    if (digits_end == len || self.bytes[digits_end] == b'/')
                        && digits_end - colon < 7
                    {
                        self.port_after_colon(colon, &mut start)?
                    } else {
                        self.parts.scheme = self.input[..colon].to_string();
                        start = colon + 1;
                        Next::Path
                    }
                } else {
                    self.parts.scheme = self.input[..colon].to_string();
                    if colon + 2 < len && self.bytes[colon + 2] == b'/' {
                        start = colon + 3;
                        if self.parts.scheme.eq_ignore_ascii_case("file")
                            && colon + 3 < len
                            && self.bytes[colon + 3] == b'/'
                        {
                            // file:///c:/dir keeps the drive letter in the path
                            if colon + 5 < len && self.bytes[colon + 5] == b':' {
                                start = colon + 4;
                            }
                            Next::Path
                        } else {
                            Next::Host
                        }
                    } else {
                        start = colon + 1;
                        Next::Path
                    }
                }
            }
            Some(colon) => self.port_after_colon(colon, &mut start)?,
            None if self.starts_authority(0) => {
                start = 2;
                Next::Host
            }
            None => Next::Path,
        };

        if let Next::Host = next {
            match self.host(start)? {
                Some(path_start) => start = path_start,
                None => return Some(()),
            }
        }
        self.path(start);
        Some(())
    }

    /// Reads up to five digits after `colon` as a port when they end the
    /// input or are followed by `/`.
    fn port_after_colon(&mut self, colon: usize, start: &mut usize) -> Option<Next> {
        let len = self.len();
        let from = colon + 1;
        let digits = self.bytes[from..]
            .iter()
            .take(6)
            .take_while(|b| b.is_ascii_digit())
            .count();
        let to = from + digits;
        if digits > 0 && digits < 6 && (to == len || self.bytes[to] == b'/') {
            let text = &self.input[from..to];
            if port_number(text)? > u16::MAX as i64 {
                return None;
            }
            self.parts.port = text.to_string();
            self.has_port = true;
            if self.starts_authority(*start) {
                *start += 2;
            }
            Some(Next::Host)
        } else if digits == 0 && from == len {
            None
        } else if self.starts_authority(*start) {
            *start += 2;
            Some(Next::Host)
        } else {
            Some(Next::Path)
        }
    }

    /// Splits `[user[:pass]@]host[:port]`. Returns where the path starts, or
    /// `None` inside the outer option when the input ends with the authority.
    fn host(&mut self, mut start: usize) -> Option<Option<usize>> {
        let len = self.len();
        let end = self.bytes[start..]
            .iter()
            .position(|&b| matches!(b, b'/' | b'?' | b'#'))
            .map_or(len, |i| start + i);

        if let Some(at) = self.rfind(start, end, b'@') {
            match self.find(start, at, b':') {
                Some(colon) => {
                    self.parts.user = self.input[start..colon].to_string();
                    self.parts.pass = self.input[colon + 1..at].to_string();
                }
                None => self.parts.user = self.input[start..at].to_string(),
            }
            start = at + 1;
        }

        let bracketed = start < end && self.bytes[start] == b'[' && self.bytes[end - 1] == b']';
        let colon = if bracketed {
            None
        } else {
            self.rfind(start, end, b':')
        };

        let host_end = match colon {
            Some(colon) => {
                if !self.has_port {
                    let text = &self.input[colon + 1..end];
                    if text.len() > 5 {
                        return None;
                    }
                    if !text.is_empty() {
                        if !(0..=u16::MAX as i64).contains(&port_number(text)?) {
                            return None;
                        }
                        self.parts.port = text.to_string();
                        self.has_port = true;
                    }
                }
                colon
            }
            None => end,
        };

        if host_end <= start {
            return None;
        }
        self.parts.host = self.input[start..host_end].to_string();
        if end == len {
            Some(None)
        } else {
            Some(Some(end))
        }
    }

    fn path(&mut self, start: usize) {
        let mut end = self.len();
        if let Some(hash) = self.find(start, end, b'#') {
            self.parts.fragment = self.input[hash + 1..end].to_string();
            end = hash;
        }
        if let Some(question) = self.find(start, end, b'?') {
            self.parts.query = self.input[question + 1..end].to_string();
            end = question;
        }
        if start < end {
            self.parts.path = self.input[start..end].to_string();
        }
    }
}

/// Leading integer of a port text, `strtol`-style: optional sign, then
/// digits; trailing bytes are ignored. `None` when no digit is present.
fn port_number(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let count = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
    if count == 0 {
        return None;
    }
    let value: i64 = digits[..count].parse().ok()?;
    Some(if negative { -value } else { value })
}
