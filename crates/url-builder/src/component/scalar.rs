//! Scheme, host, and fragment: optional strings stored and rendered verbatim.

use std::fmt;

use super::UrlComponent;
use crate::error::InvalidUrl;

macro_rules! scalar_component {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            value: Option<String>,
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                let mut component = Self::default();
                component.set(value.into());
                component
            }

            pub fn get(&self) -> Option<&str> {
                self.value.as_deref()
            }

            /// Replaces the value; accepts a string, another component of the
            /// same kind, or `Option<&str>`. Empty strings are stored as absent.
            pub fn set(&mut self, value: impl Into<$name>) {
                self.value = value.into().value.filter(|v| !v.is_empty());
            }
        }

        impl UrlComponent for $name {
            fn parse_component(&mut self, raw: &str) -> Result<(), InvalidUrl> {
                self.set(raw);
                Ok(())
            }

            fn clear(&mut self) {
                self.value = None;
            }

            fn is_empty(&self) -> bool {
                self.value.as_deref().map_or(true, str::is_empty)
            }

            fn equals(&self, other: Option<&Self>) -> bool {
                match other {
                    Some(other) => {
                        (self.is_empty() && other.is_empty()) || self.value == other.value
                    }
                    None => self.is_empty(),
                }
            }

            fn to_encoded_string(&self) -> String {
                self.value.clone().unwrap_or_default()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self {
                    value: Some(value.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self { value: Some(value) }
            }
        }

        impl From<Option<&str>> for $name {
            fn from(value: Option<&str>) -> Self {
                Self {
                    value: value.map(str::to_string),
                }
            }
        }

        impl From<&$name> for $name {
            fn from(other: &$name) -> Self {
                other.clone()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.equals(Some(other))
            }
        }

        impl Eq for $name {}

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.get().unwrap_or("") == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.get().unwrap_or(""))
            }
        }
    };
}

scalar_component! {
    /// URL scheme such as `https` or `file`, without the trailing `:`.
    Scheme
}

scalar_component! {
    /// Host name or address literal, kept exactly as written.
    Host
}

scalar_component! {
    /// Fragment after `#`, kept in its raw (still encoded) form.
    Fragment
}
