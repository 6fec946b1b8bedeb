//! Component selection for the selective `Url` operations.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// One of the seven URL components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTag {
    Scheme,
    Host,
    Port,
    Credentials,
    Path,
    Query,
    Fragment,
}

impl ComponentTag {
    pub const ALL: [ComponentTag; 7] = [
        ComponentTag::Scheme,
        ComponentTag::Host,
        ComponentTag::Port,
        ComponentTag::Credentials,
        ComponentTag::Path,
        ComponentTag::Query,
        ComponentTag::Fragment,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentTag::Scheme => "scheme",
            ComponentTag::Host => "host",
            ComponentTag::Port => "port",
            ComponentTag::Credentials => "credentials",
            ComponentTag::Path => "path",
            ComponentTag::Query => "query",
            ComponentTag::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of [`ComponentTag`]s. Defaults to every component.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentSelector(u8);

impl ComponentSelector {
    pub const NONE: ComponentSelector = ComponentSelector(0);
    pub const ALL: ComponentSelector = ComponentSelector(0b111_1111);
    /// Path, query, and fragment.
    pub const PATH_SIDE: ComponentSelector = ComponentSelector(0b111_0000);
    /// Scheme, host, port, and credentials.
    pub const HOST_SIDE: ComponentSelector = ComponentSelector(0b000_1111);

    pub fn only(tag: ComponentTag) -> Self {
        ComponentSelector(tag.bit())
    }

    pub fn contains(self, tag: ComponentTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn with(self, tag: ComponentTag) -> Self {
        ComponentSelector(self.0 | tag.bit())
    }

    pub fn without(self, tag: ComponentTag) -> Self {
        ComponentSelector(self.0 & !tag.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Selected tags in component order.
    pub fn iter(self) -> impl Iterator<Item = ComponentTag> {
        ComponentTag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl Default for ComponentSelector {
    fn default() -> Self {
        ComponentSelector::ALL
    }
}

impl From<ComponentTag> for ComponentSelector {
    fn from(tag: ComponentTag) -> Self {
        ComponentSelector::only(tag)
    }
}

impl FromIterator<ComponentTag> for ComponentSelector {
    fn from_iter<T: IntoIterator<Item = ComponentTag>>(iter: T) -> Self {
        iter.into_iter().fold(ComponentSelector::NONE, ComponentSelector::with)
    }
}

impl<T: Into<ComponentSelector>> BitOr<T> for ComponentSelector {
    type Output = ComponentSelector;

    fn bitor(self, rhs: T) -> Self::Output {
        ComponentSelector(self.0 | rhs.into().0)
    }
}

impl BitOr for ComponentTag {
    type Output = ComponentSelector;

    fn bitor(self, rhs: ComponentTag) -> Self::Output {
        ComponentSelector::only(self).with(rhs)
    }
}

impl<T: Into<ComponentSelector>> BitAnd<T> for ComponentSelector {
    type Output = ComponentSelector;

    fn bitand(self, rhs: T) -> Self::Output {
        ComponentSelector(self.0 & rhs.into().0)
    }
}

impl fmt::Debug for ComponentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
