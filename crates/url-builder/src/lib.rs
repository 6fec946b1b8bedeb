//! Structured URL values: parse a URL into typed components, change them
//! one at a time, rebase relative references, and serialize the result.

pub mod codec;
pub mod component;
pub mod config;
pub mod error;
pub mod path_value;
pub mod selector;
pub mod split;
pub mod url_model;

pub use component::{
    Credentials, Fragment, Host, PathRef, Port, Query, QueryIter, Scheme, UrlComponent, UrlPath,
};
pub use config::UrlConfig;
pub use error::InvalidUrl;
pub use path_value::PathValue;
pub use selector::{ComponentSelector, ComponentTag};
pub use url_model::{ParseState, Url, UrlSource};
