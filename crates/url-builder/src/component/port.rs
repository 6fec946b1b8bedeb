use std::fmt;

use super::UrlComponent;
use crate::error::InvalidUrl;

/// Port number. Parsing only accepts the canonical decimal rendering, so
/// `08`, `+8`, and ` 8` are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Port {
    value: Option<u16>,
}

impl Port {
    pub fn new(value: u16) -> Self {
        Self { value: Some(value) }
    }

    pub fn get(&self) -> Option<u16> {
        self.value
    }

    pub fn set(&mut self, value: Option<u16>) {
        self.value = value;
    }
}

impl UrlComponent for Port {
    fn parse_component(&mut self, raw: &str) -> Result<(), InvalidUrl> {
        if raw.is_empty() {
            self.value = None;
            return Ok(());
        }
        let port: u16 = raw
            .parse()
            .map_err(|_| InvalidUrl::InvalidPort(raw.to_string()))?;
        if port.to_string() != raw {
            return Err(InvalidUrl::InvalidPort(raw.to_string()));
        }
        self.value = Some(port);
        Ok(())
    }

    fn clear(&mut self) {
        self.value = None;
    }

    fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    fn equals(&self, other: Option<&Self>) -> bool {
        self.value == other.and_then(|o| o.value)
    }

    fn to_encoded_string(&self) -> String {
        self.value.map(|p| p.to_string()).unwrap_or_default()
    }
}

impl PartialEq for Port {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other))
    }
}

impl Eq for Port {}

impl PartialEq<u16> for Port {
    fn eq(&self, other: &u16) -> bool {
        self.value == Some(*other)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals() {
        let mut port = Port::default();
        assert!(port.equals(None));
        assert_eq!(port, Port::default());

        port.set(Some(80));
        assert!(port == 80u16);

        let mut other = port;
        assert_eq!(port, other);
        other.set(Some(443));
        assert_ne!(port, other);
    }

    #[test]
    fn parses_canonical_decimal() {
        let mut port = Port::default();
        port.parse_component("80").unwrap();
        assert_eq!(port.get(), Some(80));
        assert_eq!(port.to_string(), "80");

        port.parse_component("").unwrap();
        assert!(port.is_empty());
    }

    #[test]
    fn rejects_non_canonical_text() {
        let mut port = Port::new(8080);
        for raw in ["08", "+8", "-1", "abc", " 80", "80 ", "65536", "8a"] {
            assert_eq!(
                port.parse_component(raw),
                Err(InvalidUrl::InvalidPort(raw.to_string())),
                "{raw:?}"
            );
            assert_eq!(port.get(), Some(8080), "failed parse must keep {raw:?} out");
        }
    }
}
