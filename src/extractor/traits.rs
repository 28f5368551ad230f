//! Extractor trait — the contract microformat extractors implement

use super::session::ExtractionSession;
use super::ExtractionError;

/// Registration metadata for an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorDescription {
    /// Stable identifier, also used as the provenance resource name
    pub name: &'static str,
    /// Namespace prefixes the extractor's output uses, as (prefix, namespace)
    pub prefixes: Vec<(&'static str, &'static str)>,
    /// Accepted media types, optionally with a quality parameter (`text/html;q=0.1`)
    pub media_types: Vec<&'static str>,
}

impl ExtractorDescription {
    /// Whether `media_type` matches one of the accepted types.
    ///
    /// Parameters on either side are ignored; comparison is case-insensitive.
    pub fn accepts(&self, media_type: &str) -> bool {
        let wanted = bare_media_type(media_type);
        self.media_types
            .iter()
            .any(|accepted| bare_media_type(accepted).eq_ignore_ascii_case(wanted))
    }
}

fn bare_media_type(media_type: &str) -> &str {
    media_type.split(';').next().unwrap_or_default().trim()
}

/// The contract extractors implement.
///
/// An extractor walks one document and writes what it recognizes as triples.
/// It returns whether it found anything; finding nothing is not an error.
pub trait Extractor: Send + Sync {
    fn description(&self) -> &ExtractorDescription;

    fn name(&self) -> &'static str {
        self.description().name
    }

    /// Walk `session.document()`, writing triples through the session.
    fn extract(&self, session: &mut ExtractionSession<'_>) -> Result<bool, ExtractionError>;
}
