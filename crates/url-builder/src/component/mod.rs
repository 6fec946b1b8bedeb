//! The seven typed components of a URL.
//!
//! Each component parses its own raw text (without the delimiters the URL
//! owns, such as `?` or `#`), stores a decoded value, and renders itself back
//! in encoded form. Absent and empty values are interchangeable everywhere.

mod credentials;
mod path;
mod port;
mod query;
mod scalar;

pub use credentials::Credentials;
pub use path::{PathRef, UrlPath};
pub use port::Port;
pub use query::{Iter as QueryIter, Query};
pub use scalar::{Fragment, Host, Scheme};

use crate::error::InvalidUrl;

/// Contract shared by every URL component.
pub trait UrlComponent {
    /// Parses the component as it appears in a URL.
    ///
    /// On failure the previous value is left untouched.
    fn parse_component(&mut self, raw: &str) -> Result<(), InvalidUrl>;

    fn clear(&mut self);

    fn is_empty(&self) -> bool;

    /// Compares against another component of the same kind; `None` stands for
    /// an absent component and equals any empty one.
    fn equals(&self, other: Option<&Self>) -> bool;

    /// The component in its own syntax, re-encoded.
    fn to_encoded_string(&self) -> String;
}
