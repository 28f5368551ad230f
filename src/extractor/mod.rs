//! Extraction layer
//!
//! Extractors walk a parsed page and push triples into a `TripleSink`.
//! `run_extractor` frames one run in an open/close context pair.

mod context;
pub mod hcalendar;
mod registry;
mod session;
mod sink;
mod traits;

pub use context::ExtractionContext;
pub use hcalendar::{ComponentKind, HCalendarExtractor};
pub use registry::{ExtractorRegistry, RunReport};
pub use session::ExtractionSession;
pub use sink::{SinkError, TripleSink};
pub use traits::{Extractor, ExtractorDescription};

use crate::html::HtmlDocument;
use thiserror::Error;
use tracing::debug;

/// Errors from running extractors.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("unknown extractor: {0}")]
    UnknownExtractor(String),
}

/// Run one extractor over `document`, writing into `sink`.
///
/// Opens a whole-document context, reports the page title as its label,
/// runs the extractor and closes the context. The context is closed even
/// when extraction fails; the first error wins.
pub fn run_extractor(
    extractor: &dyn Extractor,
    document: &HtmlDocument,
    sink: &mut dyn TripleSink,
) -> Result<bool, ExtractionError> {
    let context = ExtractionContext::new(extractor.name(), document.base_iri());
    sink.open_context(&context)?;

    let outcome = extract_in_context(extractor, document, &context, sink);
    let closed = sink.close_context(&context);

    let found = outcome?;
    closed?;
    debug!(extractor = extractor.name(), document = %context.document_uri, found, "extraction finished");
    Ok(found)
}

fn extract_in_context(
    extractor: &dyn Extractor,
    document: &HtmlDocument,
    context: &ExtractionContext,
    sink: &mut dyn TripleSink,
) -> Result<bool, ExtractionError> {
    if let Some(title) = document.title() {
        sink.receive_label(&title, context)?;
    }
    let mut session = ExtractionSession::new(document, context.clone(), sink);
    let found = extractor.extract(&mut session)?;
    debug!(triples = session.triples_written(), "extractor session done");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Iri, Resource, Term};

    /// Accepts the context protocol but fails every triple.
    #[derive(Default)]
    struct FailingSink {
        opened: usize,
        closed: usize,
    }

    impl TripleSink for FailingSink {
        fn open_context(&mut self, _: &ExtractionContext) -> Result<(), SinkError> {
            self.opened += 1;
            Ok(())
        }

        fn close_context(&mut self, _: &ExtractionContext) -> Result<(), SinkError> {
            self.closed += 1;
            Ok(())
        }

        fn receive_triple(&mut self, _: &Resource, _: &Iri, _: &Term, _: &ExtractionContext) -> Result<(), SinkError> {
            Err(SinkError::Downstream("disk full".into()))
        }

        fn receive_label(&mut self, _: &str, _: &ExtractionContext) -> Result<(), SinkError> {
            Ok(())
        }

        fn close(&mut self) -> Result<(), SinkError> {
            Ok(())
        }
    }

    // === Scenario: A sink failure propagates and the context is still closed ===
    #[test]
    fn sink_failure_propagates() {
        let doc = HtmlDocument::parse(r#"<div class="vevent"></div>"#, "http://example.org/").unwrap();
        let mut sink = FailingSink::default();

        let err = run_extractor(&HCalendarExtractor::new(), &doc, &mut sink).unwrap_err();
        assert!(matches!(err, ExtractionError::Sink(SinkError::Downstream(_))));
        assert_eq!(sink.opened, 1);
        assert_eq!(sink.closed, 1);
    }

    // === Scenario: Title is reported as the document label ===
    #[test]
    fn title_reported_as_label() {
        let doc = HtmlDocument::parse(
            "<html><head><title>Events</title></head><body></body></html>",
            "http://example.org/",
        )
        .unwrap();
        let mut sink = crate::writer::MemoryTripleSink::new();
        let found = run_extractor(&HCalendarExtractor::new(), &doc, &mut sink).unwrap();

        assert!(!found);
        assert_eq!(sink.labels(), vec!["Events".to_string()]);
        assert!(sink.triples().is_empty());
        assert_eq!(sink.closed_contexts().len(), 1);
    }
}
