//! Tests for `cssbundle bundle`.

use predicates::prelude::*;
use serde_json::Value;

use crate::common::{Site, mixed_site};

#[test]
fn test_bundle_renders_one_block_per_scope() {
    let site = Site::new();
    mixed_site(&site);

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<style type=\"text/css\" media=\"screen\">"))
        .stdout(predicate::str::contains("<style type=\"text/css\" media=\"print\">"))
        .stdout(predicate::str::contains(
            "* { margin: 0; }\n@import \"lib/colors.less\";\nbody { color: @fg; }\n.banner { display: none; }",
        ))
        .stdout(predicate::str::contains("<style").count(2));
}

#[test]
fn test_bundle_json_describes_groups() {
    let site = Site::new();
    mixed_site(&site);

    let output = site.cmd().args(["bundle", "page.html", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["active"], true);
    assert!(report.get("passthrough").is_none());

    let groups = report["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["scope"], "screen");
    assert_eq!(groups[0]["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(groups[0]["nodes"][2]["kind"], "hunk");
    assert_eq!(groups[0]["fingerprint"], serde_json::json!(["100", "200", "400", "300"]));
    assert_eq!(groups[1]["scope"], "print");
    assert_eq!(groups[1]["nodes"][0]["basename"], "print.css");
    assert!(groups[1]["cache_key"].as_str().unwrap().starts_with("cssbundle."));
}

#[test]
fn test_disabled_bundle_passes_markup_through() {
    let site = Site::with_config("[bundle]\nenabled = false\nroot = \"static\"\n");
    mixed_site(&site);

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<link rel="stylesheet" href="/static/reset.css" media="screen">"#,
        ))
        .stdout(predicate::str::contains("<style media=\"screen\">.banner { display: none; }</style>"))
        .stdout(predicate::str::contains("type=\"text/css\"").not());
}

#[test]
fn test_disabled_bundle_json_reports_passthrough() {
    let site = Site::with_config("[bundle]\nenabled = false\nroot = \"static\"\n");
    mixed_site(&site);

    let output = site.cmd().args(["bundle", "page.html", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["active"], false);
    assert!(report["groups"].as_array().unwrap().is_empty());
    let passthrough = report["passthrough"].as_str().unwrap();
    assert!(passthrough.contains(r#"<link rel="stylesheet" href="/static/reset.css" media="screen">"#));
    assert!(!passthrough.contains("type=\"text/css\""));
}

#[test]
fn test_force_bundles_when_disabled() {
    let site = Site::with_config("[bundle]\nenabled = false\nroot = \"static\"\n");
    mixed_site(&site);

    // Merging is off, so every node is its own block
    site.cmd()
        .args(["bundle", "page.html", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<style type=\"text/css\"").count(4));
}

#[test]
fn test_precompilers_isolate_nodes() {
    let site = Site::with_config(
        "[bundle]\nenabled = false\nprecompilers = [\"less\"]\nroot = \"static\"\n",
    );
    mixed_site(&site);

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<style type=\"text/css\"").count(4));
}

#[test]
fn test_env_override_disables_merging() {
    let site = Site::new();
    mixed_site(&site);

    site.cmd()
        .env("CSSBUNDLE_ENABLED", "false")
        .args(["bundle", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type=\"text/css\"").not());
}

#[test]
fn test_explicit_config_path() {
    let site = Site::new();
    mixed_site(&site);
    site.tree.write("alt/other.toml", "[bundle]\nenabled = false\nroot = \"../static\"\n").unwrap();

    site.cmd()
        .args(["--config", "alt/other.toml", "bundle", "page.html", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<style type=\"text/css\"").count(4));
}

#[test]
fn test_unscoped_styles_render_without_media() {
    let site = Site::new();
    site.stylesheet("one.css", "p { margin: 0; }", 1)
        .page("<link rel=\"stylesheet\" href=\"/static/one.css\">\n<style>em { color: red; }</style>");

    site.cmd()
        .args(["bundle", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<style type=\"text/css\">\np { margin: 0; }\nem { color: red; }\n</style>",
        ));
}
