//! User-facing error reporting.

use predicates::prelude::*;

use crate::common::Site;

#[test]
fn test_absolute_import_aborts_with_suggestion() {
    let site = Site::new();
    site.stylesheet("site.less", "@import \"/etc/site.less\";\n", 1)
        .page("<link rel=\"stylesheet\" href=\"/static/site.less\">");

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Absolute import '/etc/site.less'"))
        .stderr(predicate::str::contains("relative to the importing file"));
}

#[test]
fn test_external_url_is_uncompressable() {
    let site = Site::new();
    site.page("<link rel=\"stylesheet\" href=\"https://cdn.example.com/x.css\">");

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("isn't accessible via the configured URL"));
}

#[test]
fn test_link_without_href() {
    let site = Site::new();
    site.page("<link rel=\"stylesheet\" media=\"screen\">");

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing its 'href' attribute"));
}

#[test]
fn test_href_cannot_escape_static_root() {
    let site = Site::new();
    site.tree.write("secret.txt", "body { color: red; }").unwrap();
    site.page("<link rel=\"stylesheet\" href=\"/static/../secret.txt\">");

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the static root"))
        .stdout(predicate::str::contains("color: red").not());
}

#[test]
fn test_missing_stylesheet() {
    let site = Site::new();
    site.page("<link rel=\"stylesheet\" href=\"/static/gone.css\">");

    site.cmd()
        .args(["fingerprint", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.css"));
}

#[test]
fn test_invalid_config_syntax() {
    let site = Site::with_config("[bundle\nenabled = ");
    site.page("");

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file syntax"));
}

#[test]
fn test_invalid_env_override() {
    let site = Site::new();
    site.page("");

    site.cmd()
        .env("CSSBUNDLE_ENABLED", "sometimes")
        .args(["bundle", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSSBUNDLE_ENABLED must be a boolean"));
}

#[test]
fn test_missing_document() {
    let site = Site::new();

    site.cmd()
        .args(["bundle", "nope.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.html"));
}
