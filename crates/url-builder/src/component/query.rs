use std::fmt;

use super::UrlComponent;
use crate::codec;
use crate::error::InvalidUrl;

/// Ordered multi-value query string.
///
/// Keys keep the order of their first appearance and every key holds at
/// least one value; a key written without `=` holds a single empty value.
/// Parsing reads `+` as a space, serialization never emits `+`.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, Vec<String>)>,
}

fn validate_key(key: &str) -> Result<(), InvalidUrl> {
    if key.is_empty() {
        return Err(InvalidUrl::EmptyQueryKey);
    }
    Ok(())
}

fn collect_values<I, V>(key: &str, values: I) -> Result<Vec<String>, InvalidUrl>
where
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(InvalidUrl::MissingQueryValue(key.to_string()));
    }
    Ok(values)
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.params.iter().position(|(k, _)| k == key)
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// All values of `key`, empty if the key is absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.position(key)
            .map(|idx| self.params[idx].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn has(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Number of values stored for `key`.
    pub fn count(&self, key: &str) -> usize {
        self.get_all(key).len()
    }

    /// Sets the values of `key`, replacing any existing ones.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set<I, V>(&mut self, key: &str, values: I) -> Result<&mut Self, InvalidUrl>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        validate_key(key)?;
        let values = collect_values(key, values)?;
        self.insert(key, values);
        Ok(self)
    }

    pub fn set_one(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self, InvalidUrl> {
        self.set(key, [value.into()])
    }

    fn insert(&mut self, key: &str, values: Vec<String>) {
        match self.position(key) {
            Some(idx) => self.params[idx].1 = values,
            None => self.params.push((key.to_string(), values)),
        }
    }

    /// Removes `key`; returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.params.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Sets several keys at once. Nothing is changed unless every pair is
    /// valid.
    pub fn replace<K, I, V>(
        &mut self,
        pairs: impl IntoIterator<Item = (K, I)>,
    ) -> Result<&mut Self, InvalidUrl>
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut staged = Vec::new();
        for (key, values) in pairs {
            let key = key.into();
            validate_key(&key)?;
            let values = collect_values(&key, values)?;
            staged.push((key, values));
        }
        for (key, values) in staged {
            self.insert(&key, values);
        }
        Ok(self)
    }

    /// Keys with all of their values, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.params.iter(),
        }
    }

    /// Keys with only their first value, in insertion order.
    pub fn first_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|(k, v)| v.first().map(|first| (k.as_str(), first.as_str())))
    }
}

impl UrlComponent for Query {
    fn parse_component(&mut self, raw: &str) -> Result<(), InvalidUrl> {
        if raw.contains('#') {
            return Err(InvalidUrl::QueryFragmentSeparator);
        }
        if !raw.is_empty() && raw.trim().is_empty() {
            return Err(InvalidUrl::QueryWhitespace);
        }
        let mut parsed = Query::default();
        for (key, value) in codec::form_pairs(raw) {
            validate_key(&key)?;
            match parsed.position(&key) {
                Some(idx) => parsed.params[idx].1.push(value),
                None => parsed.params.push((key, vec![value])),
            }
        }
        *self = parsed;
        Ok(())
    }

    fn clear(&mut self) {
        self.params.clear();
    }

    fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn equals(&self, other: Option<&Self>) -> bool {
        match other {
            Some(other) => self.to_encoded_string() == other.to_encoded_string(),
            None => self.is_empty(),
        }
    }

    fn to_encoded_string(&self) -> String {
        let mut parts = Vec::new();
        for (key, values) in &self.params {
            let key = codec::encode(key);
            for value in values {
                parts.push(format!("{key}={}", codec::encode(value)));
            }
        }
        parts.join("&")
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other))
    }
}

impl Eq for Query {}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded_string())
    }
}

/// Iterator over `(key, values)` pairs of a [`Query`].
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Vec<String>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
