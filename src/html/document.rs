//! HtmlDocument: a parsed page plus the base URI it was fetched from
//!
//! Class markers are matched as whitespace-separated tokens of the `class`
//! attribute, ASCII case-insensitive. Searches include the node itself.

use crate::rdf::Iri;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid base URI '{uri}': {source}")]
    InvalidBaseUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
}

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
    base_uri: Url,
}

impl HtmlDocument {
    /// Parse `html`, resolving relative references against `base_uri`.
    pub fn parse(html: &str, base_uri: &str) -> Result<Self, DocumentError> {
        let base_uri = Url::parse(base_uri).map_err(|source| DocumentError::InvalidBaseUri {
            uri: base_uri.to_string(),
            source,
        })?;
        Ok(Self {
            html: Html::parse_document(html),
            base_uri,
        })
    }

    /// The document element (`<html>`)
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode {
            element: self.html.root_element(),
        }
    }

    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    pub fn base_iri(&self) -> Iri {
        Iri::from(&self.base_uri)
    }

    /// Text of the first `<title>` element, if non-empty.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let title = self.html.select(&selector).next()?;
        let text = collapse_whitespace(title.text());
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Resolve `relative` against the base URI.
    ///
    /// References that cannot be resolved are returned unchanged.
    pub fn absolutize(&self, relative: &str) -> String {
        match self.base_uri.join(relative) {
            Ok(url) => url.to_string(),
            Err(_) => relative.to_string(),
        }
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("base_uri", &self.base_uri.as_str())
            .finish_non_exhaustive()
    }
}

/// One element of a parsed page, used as the scope for field lookups.
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlNode<'a> {
    /// Tag name, lowercase
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn has_class(&self, marker: &str) -> bool {
        self.element
            .value()
            .classes()
            .any(|class| class.eq_ignore_ascii_case(marker))
    }

    /// All elements at or below this node carrying `marker`, in document order.
    pub fn find_all_by_class(&self, marker: &str) -> Vec<HtmlNode<'a>> {
        self.element
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|element| HtmlNode { element })
            .filter(|node| node.has_class(marker))
            .collect()
    }

    /// Value of the first node carrying `marker`, or `""`.
    pub fn singular_text(&self, marker: &str) -> String {
        self.find_all_by_class(marker)
            .first()
            .map(HtmlNode::value)
            .unwrap_or_default()
    }

    /// Values of every node carrying `marker`, in document order.
    pub fn plural_text(&self, marker: &str) -> Vec<String> {
        self.find_all_by_class(marker)
            .iter()
            .map(HtmlNode::value)
            .collect()
    }

    /// Link-shaped value of the first node carrying `marker`, or `""`.
    ///
    /// The returned string is as written in the page; callers resolve it.
    pub fn singular_url(&self, marker: &str) -> String {
        let Some(node) = self.find_all_by_class(marker).into_iter().next() else {
            return String::new();
        };
        let attr = match node.name() {
            "a" | "area" | "link" => "href",
            "img" => "src",
            "object" => "data",
            _ => return node.value(),
        };
        match node.element.value().attr(attr) {
            Some(link) => link.trim().to_string(),
            None => node.value(),
        }
    }

    /// Human-readable value of this node.
    ///
    /// `<abbr title>` yields the title; anything else yields its text.
    pub fn value(&self) -> String {
        if self.name() == "abbr" {
            if let Some(title) = self.element.value().attr("title") {
                return title.trim().to_string();
            }
        }
        collapse_whitespace(self.element.text())
    }
}

fn collapse_whitespace<'t>(chunks: impl Iterator<Item = &'t str>) -> String {
    let text: String = chunks.collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
