//! Markup input for the bundling core.
//!
//! - [`Element`] - the fixed capability interface the splitter consumes
//! - [`HtmlElement`] - the concrete element type
//! - [`parse_css_elements`] - regex scanner producing elements from HTML

mod element;
mod scanner;

pub use element::{Element, HtmlElement};
pub use scanner::parse_css_elements;
