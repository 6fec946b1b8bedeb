//! Integration test: URLs inside TOML configuration and config loading.

mod common;

use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::tempdir;
use url_builder::{Url, UrlConfig};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct SiteConfig {
    base_url: Url,
    assets: Vec<Url>,
}

#[test]
fn urls_deserialize_from_toml() {
    common::init_tracing();
    let data = r#"
        base_url = "https://domain.tld/blog/"
        assets = ["css/site.css", "//cdn.com/angular.js"]
    "#;
    let cfg: SiteConfig = toml::from_str(data).unwrap();
    assert_eq!(cfg.base_url.host().get(), Some("domain.tld"));

    let rebased: Vec<String> = cfg
        .assets
        .iter()
        .map(|asset| {
            let mut asset = asset.clone();
            asset.make_absolute(&cfg.base_url).unwrap();
            asset.to_string()
        })
        .collect();
    assert_eq!(
        rebased,
        ["https://domain.tld/blog/css/site.css", "https://cdn.com/angular.js"]
    );
}

#[test]
fn urls_serialize_as_strings() {
    let cfg = SiteConfig {
        base_url: Url::new("https://domain.tld/"),
        assets: vec![Url::new("a%20b.css")],
    };
    let text = toml::to_string(&cfg).unwrap();
    assert!(text.contains(r#"base_url = "https://domain.tld/""#), "{text}");
    let back: SiteConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn empty_url_fails_serialization() {
    let cfg = SiteConfig {
        base_url: Url::default(),
        assets: vec![],
    };
    let err = toml::to_string(&cfg).unwrap_err();
    assert!(err.to_string().contains("empty URL"), "{err}");

    let cfg = SiteConfig {
        base_url: Url::new("http://"),
        assets: vec![],
    };
    let err = toml::to_string(&cfg).unwrap_err();
    assert!(err.to_string().contains("unable to parse URL"), "{err}");
}

#[test]
fn invalid_url_fails_deserialization() {
    let data = r#"
        base_url = "http://"
        assets = []
    "#;
    let err = toml::from_str::<SiteConfig>(data).unwrap_err();
    assert!(err.to_string().contains("unable to parse URL"), "{err}");
}

#[test]
fn config_loads_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("url.toml");
    fs::write(
        &path,
        "network_schemes = [\"http\", \"https\", \"gopher\"]\nhost_required_schemes = [\"https\"]\n",
    )
    .unwrap();

    let cfg = UrlConfig::load(&path).unwrap();
    assert!(cfg.is_network_scheme("gopher"));
    assert!(!cfg.requires_host("http"));

    let mut url = Url::default();
    url.scheme_mut().set("http");
    url.path_mut().set("/x");
    assert!(!url.is_valid());
    assert!(url.is_valid_with(&cfg));
    assert_eq!(url.get_url_with(&cfg).unwrap(), "http:///x");
    assert!(Url::parse_with("gopher:///x", &cfg).is_err());
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = UrlConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"), "{err:#}");
}
