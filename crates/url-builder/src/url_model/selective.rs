use std::borrow::Cow;

use super::Url;
use crate::component::UrlComponent;
use crate::error::InvalidUrl;
use crate::path_value::PathValue;
use crate::selector::{ComponentSelector, ComponentTag};

/// Argument accepted wherever a URL operation takes another URL.
///
/// Text is parsed the way [`Url::new`] parses it, so unparsable text acts as
/// an empty URL. A bare path is only accepted by
/// [`Url::replace_path`] and [`Url::make_absolute_path`].
#[derive(Debug, Clone, Copy)]
pub enum UrlSource<'a> {
    Text(&'a str),
    Url(&'a Url),
    Path(&'a PathValue),
}

impl<'a> UrlSource<'a> {
    pub(super) fn to_url(self, operation: &'static str) -> Result<Cow<'a, Url>, InvalidUrl> {
        match self {
            UrlSource::Text(raw) => Ok(Cow::Owned(Url::new(raw))),
            UrlSource::Url(url) => Ok(Cow::Borrowed(url)),
            UrlSource::Path(_) => {
                tracing::debug!(operation, "bare path passed where a URL is required");
                Err(InvalidUrl::UnexpectedType("path value where a URL is required"))
            }
        }
    }

    pub(super) fn to_url_or_path(self) -> Result<Cow<'a, Url>, InvalidUrl> {
        match self {
            UrlSource::Path(path) => {
                let mut url = Url::default();
                url.path.set(path.clone());
                Ok(Cow::Owned(url))
            }
            other => other.to_url("path"),
        }
    }
}

impl<'a> From<&'a str> for UrlSource<'a> {
    fn from(raw: &'a str) -> Self {
        UrlSource::Text(raw)
    }
}

impl<'a> From<&'a String> for UrlSource<'a> {
    fn from(raw: &'a String) -> Self {
        UrlSource::Text(raw)
    }
}

impl<'a> From<&'a Url> for UrlSource<'a> {
    fn from(url: &'a Url) -> Self {
        UrlSource::Url(url)
    }
}

impl<'a> From<&'a PathValue> for UrlSource<'a> {
    fn from(path: &'a PathValue) -> Self {
        UrlSource::Path(path)
    }
}

impl Url {
    /// Empties the selected components.
    pub fn clear(&mut self, selector: impl Into<ComponentSelector>) -> &mut Self {
        for tag in selector.into().iter() {
            match tag {
                ComponentTag::Scheme => self.scheme.clear(),
                ComponentTag::Host => self.host.clear(),
                ComponentTag::Port => self.port.clear(),
                ComponentTag::Credentials => self.credentials.clear(),
                ComponentTag::Path => self.path.clear(),
                ComponentTag::Query => self.query.clear(),
                ComponentTag::Fragment => self.fragment.clear(),
            }
        }
        self
    }

    /// Empties the selected components among path, query, and fragment.
    /// Pass [`ComponentSelector::ALL`] to clear all three.
    pub fn clear_path(&mut self, selector: impl Into<ComponentSelector>) -> &mut Self {
        self.clear(selector.into() & ComponentSelector::PATH_SIDE)
    }

    /// Empties the selected components among scheme, host, port, and
    /// credentials. Pass [`ComponentSelector::ALL`] to clear all four.
    pub fn clear_host(&mut self, selector: impl Into<ComponentSelector>) -> &mut Self {
        self.clear(selector.into() & ComponentSelector::HOST_SIDE)
    }

    /// Overwrites the selected components with those of `source`, even when
    /// they are empty there.
    pub fn replace<'a>(
        &mut self,
        source: impl Into<UrlSource<'a>>,
        selector: impl Into<ComponentSelector>,
    ) -> Result<&mut Self, InvalidUrl> {
        let source = source.into().to_url("replace")?;
        self.copy_from(&source, selector.into(), false)?;
        Ok(self)
    }

    /// [`replace`](Self::replace) restricted to scheme, host, port, and
    /// credentials.
    pub fn replace_host<'a>(
        &mut self,
        source: impl Into<UrlSource<'a>>,
        selector: impl Into<ComponentSelector>,
    ) -> Result<&mut Self, InvalidUrl> {
        let source = source.into().to_url("replace_host")?;
        self.copy_from(&source, selector.into() & ComponentSelector::HOST_SIDE, false)?;
        Ok(self)
    }

    /// [`replace`](Self::replace) restricted to path, query, and fragment.
    /// Also accepts a bare [`PathValue`].
    pub fn replace_path<'a>(
        &mut self,
        source: impl Into<UrlSource<'a>>,
        selector: impl Into<ComponentSelector>,
    ) -> Result<&mut Self, InvalidUrl> {
        let source = source.into().to_url_or_path()?;
        self.copy_from(&source, selector.into() & ComponentSelector::PATH_SIDE, false)?;
        Ok(self)
    }

    /// Like [`replace`](Self::replace), but components that are empty in
    /// `source` keep their current value.
    pub fn merge<'a>(
        &mut self,
        source: impl Into<UrlSource<'a>>,
        selector: impl Into<ComponentSelector>,
    ) -> Result<&mut Self, InvalidUrl> {
        let source = source.into().to_url("merge")?;
        self.copy_from(&source, selector.into(), true)?;
        Ok(self)
    }

    /// Compares the selected components with `other`.
    pub fn equals<'a>(
        &self,
        other: impl Into<UrlSource<'a>>,
        selector: impl Into<ComponentSelector>,
    ) -> Result<bool, InvalidUrl> {
        let other = other.into().to_url("equals")?;
        Ok(self.equals_url(&other, selector))
    }

    pub fn equals_url(&self, other: &Url, selector: impl Into<ComponentSelector>) -> bool {
        selector.into().iter().all(|tag| match tag {
            ComponentTag::Scheme => self.scheme.equals(Some(&other.scheme)),
            ComponentTag::Host => self.host.equals(Some(&other.host)),
            ComponentTag::Port => self.port.equals(Some(&other.port)),
            ComponentTag::Credentials => self.credentials.equals(Some(&other.credentials)),
            ComponentTag::Path => self.path.equals(Some(&other.path)),
            ComponentTag::Query => self.query.equals(Some(&other.query)),
            ComponentTag::Fragment => self.fragment.equals(Some(&other.fragment)),
        })
    }

    /// The query is re-parsed from its serialized form before anything is
    /// written, so a failure leaves `self` untouched.
    fn copy_from(
        &mut self,
        source: &Url,
        selector: ComponentSelector,
        skip_empty: bool,
    ) -> Result<(), InvalidUrl> {
        let query = if selector.contains(ComponentTag::Query)
            && !(skip_empty && source.query.is_empty())
        {
            let mut query = crate::component::Query::new();
            query.parse_component(&source.query.to_encoded_string())?;
            Some(query)
        } else {
            None
        };

        for tag in selector.iter() {
            let source_empty = match tag {
                ComponentTag::Scheme => source.scheme.is_empty(),
                ComponentTag::Host => source.host.is_empty(),
                ComponentTag::Port => source.port.is_empty(),
                ComponentTag::Credentials => source.credentials.is_empty(),
                ComponentTag::Path => source.path.is_empty(),
                ComponentTag::Query => source.query.is_empty(),
                ComponentTag::Fragment => source.fragment.is_empty(),
            };
            if skip_empty && source_empty {
                continue;
            }
            match tag {
                ComponentTag::Scheme => self.scheme.set(&source.scheme),
                ComponentTag::Host => self.host.set(&source.host),
                ComponentTag::Port => self.port.set(source.port.get()),
                ComponentTag::Credentials => self.credentials.set(&source.credentials),
                ComponentTag::Path => self.path = source.path().to_rooted(),
                ComponentTag::Query => {}
                ComponentTag::Fragment => self.fragment.set(&source.fragment),
            }
        }
        if let Some(query) = query {
            self.query = query;
        }
        Ok(())
    }
}
