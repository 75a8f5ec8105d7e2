//! Tests for `cssbundle fingerprint`.

use predicates::prelude::*;

use crate::common::{Site, mixed_site};

fn cache_key(site: &Site) -> String {
    let output = site.cmd().args(["fingerprint", "page.html"]).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .find_map(|line| line.strip_prefix("cache key: "))
        .map(str::to_string)
        .unwrap()
}

#[test]
fn test_fingerprint_prints_tokens_in_order() {
    let site = Site::new();
    mixed_site(&site);

    site.cmd()
        .args(["fingerprint", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens: 100,200,400,300,500"))
        .stdout(predicate::str::contains("cache key: cssbundle."));
}

#[test]
fn test_touching_deep_import_changes_cache_key() {
    let site = Site::new();
    mixed_site(&site);

    let before = cache_key(&site);
    assert_eq!(before, cache_key(&site));

    site.tree.set_mtime("static/base.less", 9_999).unwrap();
    assert_ne!(before, cache_key(&site));
}

#[test]
fn test_inline_text_changes_cache_key() {
    let site = Site::new();
    site.page("<style>p { color: red; }</style>");
    let red = cache_key(&site);

    site.page("<style>p { color: blue; }</style>");
    assert_ne!(red, cache_key(&site));
}

#[test]
fn test_filters_change_cache_key() {
    let plain = Site::new();
    plain.page("<style>p {}</style>");

    let filtered = Site::with_config("[bundle]\nroot = \"static\"\nfilters = [\"cssmin\"]\n");
    filtered.page("<style>p {}</style>");

    assert_ne!(cache_key(&plain), cache_key(&filtered));
}
