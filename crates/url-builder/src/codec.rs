//! Percent-encoding primitives shared by the components.
//!
//! Encoding escapes every byte outside the RFC 3986 unreserved set
//! (`A-Z a-z 0-9 - . _ ~`) and never emits `+`. Strict decoding only resolves
//! `%XX` escapes; form decoding additionally reads `+` as a space. Malformed
//! escapes are kept literally and invalid UTF-8 is replaced.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const UNRESERVED_COMPLEMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED_COMPLEMENT).to_string()
}

pub fn decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Splits a raw query into `application/x-www-form-urlencoded` decoded
/// `(key, value)` pairs, reading `+` as a space.
///
/// Empty pieces between `&` are skipped; a piece without `=` yields an empty value.
pub fn form_pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    url::form_urlencoded::parse(raw.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned()))
}
