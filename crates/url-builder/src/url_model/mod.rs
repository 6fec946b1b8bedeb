//! The URL aggregate: parsing, predicates, and serialization.
//!
//! Rebasing lives in `absolute`, the selector-driven operations in
//! `selective`.

mod absolute;
mod selective;


pub use selective::UrlSource;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::component::{
    Credentials, Fragment, Host, PathRef, Port, Query, Scheme, UrlComponent, UrlPath,
};
use crate::config::UrlConfig;
use crate::error::InvalidUrl;
use crate::split::split_url;

/// Outcome of the last parse a [`Url`] went through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Built empty, never parsed.
    #[default]
    Unparsed,
    Parsed,
    /// The constructor's parse failed; the URL reports itself empty.
    Failed(InvalidUrl),
}

/// A URL split into seven independently mutable components.
///
/// ```
/// use url_builder::Url;
///
/// let mut url = Url::new("../assets/style.css");
/// url.make_absolute("http://domain.tld/catalog/products.html").unwrap();
/// assert_eq!(url.to_string(), "http://domain.tld/assets/style.css");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Url {
    scheme: Scheme,
    host: Host,
    port: Port,
    credentials: Credentials,
    path: UrlPath,
    query: Query,
    fragment: Fragment,
    state: ParseState,
}

impl Url {
    /// Parses `raw`, capturing a failure instead of returning it.
    ///
    /// A URL whose parse failed has all components empty, reports
    /// [`is_empty`](Self::is_empty), and exposes the reason through
    /// [`parse_failure`](Self::parse_failure).
    pub fn new(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(input = raw, "captured URL parse failure: {}", e);
                Url {
                    state: ParseState::Failed(e),
                    ..Url::default()
                }
            }
        }
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidUrl> {
        Self::parse_with(raw, UrlConfig::shared())
    }

    pub fn parse_with(raw: &str, config: &UrlConfig) -> Result<Self, InvalidUrl> {
        if raw.is_empty() {
            return Err(InvalidUrl::Empty);
        }
        if raw.trim_matches(' ').is_empty() {
            return Err(InvalidUrl::Whitespace);
        }
        let parts = split_url(raw, config)?;

        let mut url = Url::default();
        url.scheme.parse_component(&parts.scheme)?;
        url.host.parse_component(&parts.host)?;
        url.port.parse_component(&parts.port)?;
        if parts.user.is_empty() && parts.pass.is_empty() {
            url.credentials.clear();
        } else {
            url.credentials
                .parse_component(&format!("{}:{}", parts.user, parts.pass))?;
        }
        url.path.parse_component(&parts.path)?;
        url.query.parse_component(&parts.query)?;
        url.fragment.parse_component(&parts.fragment)?;
        url.state = ParseState::Parsed;
        tracing::trace!(
            scheme = ?url.scheme.get(),
            host = ?url.host.get(),
            port = ?url.port.get(),
            path = url.path.get(),
            query = %url.query,
            fragment = ?url.fragment.get(),
            "parsed URL"
        );
        Ok(url)
    }

    /// Re-parses this value from `raw`. On failure nothing changes.
    pub fn parse_url(&mut self, raw: &str) -> Result<&mut Self, InvalidUrl> {
        *self = Self::parse(raw)?;
        Ok(self)
    }

    pub fn parse_state(&self) -> &ParseState {
        &self.state
    }

    /// The reason the constructor's parse failed, if it did.
    pub fn parse_failure(&self) -> Option<&InvalidUrl> {
        match &self.state {
            ParseState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn scheme_mut(&mut self) -> &mut Scheme {
        &mut self.scheme
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }

    pub fn port(&self) -> &Port {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut Port {
        &mut self.port
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    /// Host-aware view of the path.
    pub fn path(&self) -> PathRef<'_> {
        self.path.view(!self.host.is_empty())
    }

    pub fn path_mut(&mut self) -> &mut UrlPath {
        &mut self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn fragment_mut(&mut self) -> &mut Fragment {
        &mut self.fragment
    }

    /// True after a failed parse or when every component is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.state, ParseState::Failed(_))
            || (self.scheme.is_empty()
                && self.host.is_empty()
                && self.port.is_empty()
                && self.credentials.is_empty()
                && self.path.is_empty()
                && self.query.is_empty()
                && self.fragment.is_empty())
    }

    /// Has a host or a scheme.
    pub fn is_absolute(&self) -> bool {
        !self.is_empty() && (!self.host.is_empty() || !self.scheme.is_empty())
    }

    /// Has no host.
    pub fn is_relative(&self) -> bool {
        !self.is_empty() && self.host.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_with(UrlConfig::shared())
    }

    /// A URL is valid when it is non-empty, has a host wherever port,
    /// credentials, or a host-bound scheme demand one, and has a path
    /// whenever an authority is followed by a query or fragment.
    pub fn is_valid_with(&self, config: &UrlConfig) -> bool {
        if self.is_empty() {
            return false;
        }
        let requires_host = !self.port.is_empty()
            || !self.credentials.is_empty()
            || self.scheme.get().is_some_and(|s| config.requires_host(s));
        if requires_host && self.host.is_empty() {
            return false;
        }
        let requires_path = (!self.query.is_empty() || !self.fragment.is_empty())
            && self.has_authority();
        !(requires_path && self.path.is_empty())
    }

    /// The serialized URL, or [`InvalidUrl::NotValid`].
    pub fn get_url(&self) -> Result<String, InvalidUrl> {
        self.get_url_with(UrlConfig::shared())
    }

    pub fn get_url_with(&self, config: &UrlConfig) -> Result<String, InvalidUrl> {
        if !self.is_valid_with(config) {
            return Err(InvalidUrl::NotValid);
        }
        Ok(self.to_string_with(config))
    }

    fn has_authority(&self) -> bool {
        !self.scheme.is_empty()
            || !self.host.is_empty()
            || !self.port.is_empty()
            || !self.credentials.is_empty()
    }

    /// Reassembles the URL from its components. Never fails, even for
    /// URLs that are not [`valid`](Self::is_valid).
    pub fn to_string_with(&self, config: &UrlConfig) -> String {
        let mut out = String::new();
        let has_tail = !self.query.is_empty() || !self.fragment.is_empty();

        if self.has_authority() {
            if let Some(scheme) = self.scheme.get() {
                out.push_str(scheme);
                out.push(':');
            }
            out.push_str("//");
            if !self.credentials.is_empty() {
                out.push_str(&self.credentials.to_encoded_string());
                out.push('@');
            }
            out.push_str(&self.host.to_encoded_string());
            if let Some(port) = self.port.get() {
                out.push(':');
                out.push_str(&port.to_string());
            }
        }

        if has_tail && self.path.is_empty() {
            out.push('/');
        } else {
            // Host-less custom schemes still need `scheme:///path`.
            let custom_scheme = self
                .scheme
                .get()
                .is_some_and(|s| !config.is_network_scheme(s));
            if custom_scheme && !self.path().is_absolute() {
                out.push('/');
            }
            out.push_str(&self.path.to_encoded_string());
        }

        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query.to_encoded_string());
        }
        if let Some(fragment) = self.fragment.get() {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(UrlConfig::shared()))
    }
}

impl FromStr for Url {
    type Err = InvalidUrl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = InvalidUrl;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.equals_url(other, crate::ComponentSelector::ALL)
    }
}

impl Eq for Url {}

/// Serializes as the URL string. An empty or unparsable `Url` has no
/// string form that deserializes back, so it is an error; use
/// `Option<Url>` for absent values.
impl Serialize for Url {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            let reason = self.parse_failure().cloned().unwrap_or(InvalidUrl::Empty);
            return Err(serde::ser::Error::custom(reason));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Url::parse(&raw).map_err(serde::de::Error::custom)
    }
}
