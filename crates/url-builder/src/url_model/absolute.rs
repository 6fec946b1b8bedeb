use super::{Url, UrlSource};
use crate::component::{UrlComponent, UrlPath};
use crate::error::InvalidUrl;

impl Url {
    /// Makes a relative URL absolute against `base`.
    ///
    /// Scheme, host, port, and credentials are taken from `base`; a relative
    /// path is resolved against the directory of the base path. An absolute
    /// URL only adopts the base scheme when it has none (`//cdn.com/x.js`).
    pub fn make_absolute<'a>(
        &mut self,
        base: impl Into<UrlSource<'a>>,
    ) -> Result<&mut Self, InvalidUrl> {
        let base = base.into().to_url("make_absolute")?;
        if base.is_empty() {
            return Err(InvalidUrl::BaseEmpty);
        }
        if !base.is_absolute() {
            return Err(InvalidUrl::BaseNotAbsolute(base.to_string()));
        }
        if self.is_absolute() {
            if self.scheme.is_empty() {
                self.scheme.set(base.scheme());
            }
            return Ok(self);
        }
        if !self.path().is_absolute() {
            let base_dir = if base.path().is_empty() {
                UrlPath::new("/")
            } else {
                base_directory(&base)
            };
            self.resolve_path(&base_dir);
        }
        self.scheme.set(base.scheme());
        self.credentials.set(base.credentials());
        self.host.set(base.host());
        self.port.set(base.port().get());
        Ok(self)
    }

    /// Resolves a relative path against the directory of `base`'s path,
    /// leaving every other component alone.
    ///
    /// `base` may be a bare [`PathValue`](crate::PathValue); its path must be absolute.
    pub fn make_absolute_path<'a>(
        &mut self,
        base: impl Into<UrlSource<'a>>,
    ) -> Result<&mut Self, InvalidUrl> {
        let base = base.into().to_url_or_path()?;
        if base.is_empty() {
            return Err(InvalidUrl::BaseEmpty);
        }
        if !base.path().is_absolute() {
            return Err(InvalidUrl::BasePathNotAbsolute(base.path().get().into_owned()));
        }
        if self.is_absolute() {
            return Ok(self);
        }
        if !self.path().is_absolute() {
            let base_dir = base_directory(&base);
            self.resolve_path(&base_dir);
        }
        Ok(self)
    }

    fn resolve_path(&mut self, base_dir: &UrlPath) {
        let from = self.path.to_encoded_string();
        self.path.resolve(base_dir);
        tracing::trace!(%from, to = %self.path, "resolved relative path");
    }
}

fn base_directory(base: &Url) -> UrlPath {
    base.path().to_rooted().parent()
}
