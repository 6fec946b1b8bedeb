//! Integration test: selector-driven clear, replace, merge, and equals.

mod common;

use url_builder::{ComponentSelector, ComponentTag, Url};

fn full() -> Url {
    Url::new(common::FULL_URL)
}

#[test]
fn equals_is_reflexive_and_symmetric() {
    common::init_tracing();
    let urls = [
        full(),
        Url::new("http://domain.tld"),
        Url::new("//domain.tld/foo?bar=x"),
        Url::new("foo.html"),
        Url::default(),
    ];
    let selectors = [
        ComponentSelector::ALL,
        ComponentSelector::HOST_SIDE,
        ComponentSelector::PATH_SIDE,
        ComponentTag::Host | ComponentTag::Scheme,
        ComponentSelector::NONE,
    ];
    for a in &urls {
        assert!(a.equals_url(a, ComponentSelector::ALL));
        for b in &urls {
            for selector in selectors {
                assert_eq!(
                    a.equals_url(b, selector),
                    b.equals_url(a, selector),
                    "{a} / {b} over {selector:?}"
                );
            }
        }
    }
}

#[test]
fn merge_never_overwrites_with_empty() {
    let mut url = full();
    let before = url.clone();
    url.merge("/foo.html", ComponentSelector::ALL).unwrap();
    assert!(url.equals_url(&before, ComponentSelector::HOST_SIDE));
    assert!(url.equals_url(&before, ComponentTag::Query | ComponentTag::Fragment));
    assert_eq!(url.path().get(), "/foo.html");
}

#[test]
fn replace_always_overwrites() {
    let mut url = full();
    url.replace("foo.html", ComponentSelector::ALL).unwrap();
    assert_eq!(url.to_string(), "foo.html");
}

#[test]
fn replace_query_keeps_duplicate_order() {
    let mut url = full();
    let source = Url::new("/x?b=1&a=2&b=3");
    url.replace(&source, ComponentTag::Query).unwrap();
    assert_eq!(url.query().to_string(), "b=1&b=3&a=2");
    assert_eq!(url.query().get_all("b"), ["1", "3"]);
    assert_eq!(url.path().get(), "/foo-ü-$-?-bar/x");
}

#[test]
fn move_to_another_host() {
    let mut url = Url::new("https://old.tld/a/b.html?x=1#top");
    url.replace_host("http://new.tld:8080", ComponentSelector::ALL)
        .unwrap();
    assert_eq!(url.to_string(), "http://new.tld:8080/a/b.html?x=1#top");
}

#[test]
fn strip_everything_after_path() {
    let mut url = Url::new("https://domain.tld/a/b.html?x=1#top");
    url.clear(ComponentTag::Query | ComponentTag::Fragment);
    assert_eq!(url.to_string(), "https://domain.tld/a/b.html");
}

#[test]
fn file_url_from_web_url() {
    let mut url = full();
    url.replace_path("foo.jpeg", ComponentSelector::ALL)
        .unwrap()
        .clear_host(ComponentSelector::ALL)
        .scheme_mut()
        .set("file");
    assert_eq!(url.to_string(), "file:///foo.jpeg");
}
