//! Stylesheet element extraction from HTML fragments.
//!
//! The scanner finds `<link>` and `<style>` elements with regular expressions
//! and ignores everything else. It is deliberately small: it skips HTML
//! comments, understands double-, single- and unquoted attribute values, and
//! does not build a document tree.
//!
//! ```rust
//! use cssbundle_cli::markup::{Element, parse_css_elements};
//!
//! let html = r#"<link rel="stylesheet" href="/static/one.css" media="screen">
//! <style>p { border: 5px solid green; }</style>"#;
//!
//! let elements = parse_css_elements(html);
//! assert_eq!(elements.len(), 2);
//! assert_eq!(elements[0].attribute("media"), Some("screen"));
//! assert_eq!(elements[1].inner_text(), "p { border: 5px solid green; }");
//! ```

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

use super::HtmlElement;

struct Patterns {
    comment: Regex,
    element: Regex,
    attribute: Regex,
}

static PATTERNS: OnceLock<Option<Patterns>> = OnceLock::new();

fn patterns() -> Option<&'static Patterns> {
    PATTERNS
        .get_or_init(|| {
            Some(Patterns {
                comment: Regex::new(r"(?s)<!--.*?-->").ok()?,
                element: Regex::new(
                    r"(?is)<style\b(?P<style_attrs>[^>]*)>(?P<text>.*?)</style\s*>|<link\b(?P<link_attrs>[^>]*?)/?>",
                )
                .ok()?,
                attribute: Regex::new(
                    r#"(?P<name>[^\s=/>"']+)(?:\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\s"'>]+)))?"#,
                )
                .ok()?,
            })
        })
        .as_ref()
}

/// Extract `link` and `style` elements from `html` in document order.
#[must_use]
pub fn parse_css_elements(html: &str) -> Vec<HtmlElement> {
    let Some(patterns) = patterns() else {
        return Vec::new();
    };

    let html = patterns.comment.replace_all(html, "");
    let mut elements = Vec::new();

    for cap in patterns.element.captures_iter(&html) {
        let Some(source) = cap.get(0) else {
            continue;
        };

        let element = if let Some(attrs) = cap.name("link_attrs") {
            HtmlElement::from_source(
                "link",
                parse_attributes(&patterns.attribute, attrs.as_str()),
                "",
                source.as_str(),
            )
        } else {
            let attrs = cap.name("style_attrs").map_or("", |m| m.as_str());
            let text = cap.name("text").map_or("", |m| m.as_str());
            HtmlElement::from_source(
                "style",
                parse_attributes(&patterns.attribute, attrs),
                text,
                source.as_str(),
            )
        };
        elements.push(element);
    }

    debug!("Scanned {} stylesheet element(s)", elements.len());
    elements
}

fn parse_attributes(pattern: &Regex, attrs: &str) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();

    for cap in pattern.captures_iter(attrs) {
        let Some(name) = cap.name("name") else {
            continue;
        };
        let value = cap
            .name("dq")
            .or_else(|| cap.name("sq"))
            .or_else(|| cap.name("bare"))
            .map_or("", |m| m.as_str());

        // First occurrence wins, as in browsers
        attributes.entry(name.as_str().to_ascii_lowercase()).or_insert_with(|| value.to_string());
    }

    attributes
}
