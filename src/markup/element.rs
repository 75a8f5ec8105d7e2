//! The element capability interface consumed by the node splitter.

use std::collections::BTreeMap;
use std::fmt;

/// A markup element as seen by the bundling core.
///
/// The core never parses markup itself. Any parser can feed it by
/// implementing this trait for its element type.
pub trait Element: fmt::Debug {
    /// Lowercase tag name, e.g. `link` or `style`.
    fn name(&self) -> &str;

    /// Attributes keyed by lowercase name.
    fn attributes(&self) -> &BTreeMap<String, String>;

    /// Text content between the opening and closing tag.
    fn inner_text(&self) -> &str;

    /// The element rendered back to markup.
    fn render(&self) -> String;

    /// Look up a single attribute.
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attributes(&self) -> &BTreeMap<String, String> {
        (**self).attributes()
    }

    fn inner_text(&self) -> &str {
        (**self).inner_text()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

/// Element produced by the HTML scanner or built directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    name: String,
    attributes: BTreeMap<String, String>,
    text: String,
    source: String,
}

impl HtmlElement {
    /// Build an element and synthesize its markup.
    pub fn new<I, K, V>(name: &str, attributes: I, text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.to_ascii_lowercase();
        let attributes: BTreeMap<String, String> = attributes
            .into_iter()
            .map(|(k, v)| (k.into().to_ascii_lowercase(), v.into()))
            .collect();
        let text = text.into();

        let attrs = attributes
            .iter()
            .map(|(k, v)| format!(" {k}=\"{}\"", v.replace('"', "&quot;")))
            .collect::<String>();
        let source = if name == "link" {
            format!("<{name}{attrs}>")
        } else {
            format!("<{name}{attrs}>{text}</{name}>")
        };

        Self {
            name,
            attributes,
            text,
            source,
        }
    }

    /// A `<link rel="stylesheet">` element.
    #[must_use]
    pub fn stylesheet(href: &str, media: Option<&str>) -> Self {
        let mut attributes = vec![("rel", "stylesheet"), ("href", href)];
        if let Some(media) = media {
            attributes.push(("media", media));
        }
        Self::new("link", attributes, "")
    }

    /// An inline `<style>` element.
    #[must_use]
    pub fn inline_style(text: &str, media: Option<&str>) -> Self {
        Self::new("style", media.map(|m| ("media", m)), text)
    }

    pub(crate) fn from_source(
        name: &str,
        attributes: BTreeMap<String, String>,
        text: &str,
        source: &str,
    ) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attributes,
            text: text.to_string(),
            source: source.to_string(),
        }
    }
}

impl Element for HtmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    fn inner_text(&self) -> &str {
        &self.text
    }

    fn render(&self) -> String {
        self.source.clone()
    }
}
