//! Parsed HTML pages and microformat field lookup

mod document;

pub use document::{DocumentError, HtmlDocument, HtmlNode};
