//! The single error type shared by parsing, mutation, and rebasing.

use thiserror::Error;

/// Reason a URL, one of its components, or an argument to a URL operation
/// was rejected.
///
/// A failed constructor parse is stored on the [`Url`](crate::Url) itself,
/// so the type is `Clone + PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrl {
    /// The input string was empty.
    #[error("empty URL")]
    Empty,

    /// The input string consisted of spaces only.
    #[error("URL consists of whitespace only")]
    Whitespace,

    /// Neither the primary splitter nor the host-less fallback accepted the input.
    #[error("unable to parse URL")]
    Unparsable,

    /// Port text was not the canonical decimal rendering of a port number.
    #[error("invalid port {0:?}")]
    InvalidPort(String),

    /// Credentials contained more than one `:` separator.
    #[error("invalid colon count in credentials")]
    CredentialsSeparator,

    #[error("path contains whitespace")]
    PathWhitespace,

    #[error("query must not contain fragment separator #")]
    QueryFragmentSeparator,

    #[error("query must not be whitespace only")]
    QueryWhitespace,

    #[error("empty parameter name in query")]
    EmptyQueryKey,

    /// A query key was set with an empty list of values.
    #[error("missing value for query parameter {0:?}")]
    MissingQueryValue(String),

    /// An argument could not be coerced into what the operation accepts.
    #[error("unexpected type: {0}")]
    UnexpectedType(&'static str),

    #[error("base URL is empty")]
    BaseEmpty,

    #[error("cannot make absolute URL because the base URL {0:?} is not absolute")]
    BaseNotAbsolute(String),

    #[error("base path {0:?} is not absolute")]
    BasePathNotAbsolute(String),

    /// [`Url::get_url`](crate::Url::get_url) on a URL that fails [`Url::is_valid`](crate::Url::is_valid).
    #[error("URL is invalid")]
    NotValid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_text() {
        assert_eq!(
            InvalidUrl::InvalidPort("08".to_string()).to_string(),
            "invalid port \"08\""
        );
        assert_eq!(
            InvalidUrl::BaseNotAbsolute("bar.html".to_string()).to_string(),
            "cannot make absolute URL because the base URL \"bar.html\" is not absolute"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = InvalidUrl::Unparsable.into();
        assert_eq!(format!("{err:#}"), "unable to parse URL");
    }
}
