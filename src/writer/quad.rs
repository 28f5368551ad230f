//! QuadWriter: the TripleSink that turns triples into quads
//!
//! Each triple lands in the graph named by its context's document URI.
//! With a metadata graph configured, the writer also records which
//! extractors ran on each document, and the document's label.

use crate::extractor::{ExtractionContext, SinkError, TripleSink};
use crate::rdf::vocab::{any23, rdfs};
use crate::rdf::{Iri, Resource, Term};
use tracing::warn;

/// Consumes quads.
pub trait QuadSink {
    fn write_quad(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        graph: &Iri,
    ) -> Result<(), SinkError>;

    /// Flush and release any buffered output.
    fn close(&mut self) -> Result<(), SinkError>;
}

impl<Q: QuadSink + ?Sized> QuadSink for &mut Q {
    fn write_quad(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        graph: &Iri,
    ) -> Result<(), SinkError> {
        (**self).write_quad(subject, predicate, object, graph)
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }
}

impl<Q: QuadSink + ?Sized> QuadSink for Box<Q> {
    fn write_quad(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        graph: &Iri,
    ) -> Result<(), SinkError> {
        (**self).write_quad(subject, predicate, object, graph)
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }
}

/// A TripleSink that forwards every triple as a quad to a downstream QuadSink.
///
/// The downstream is closed exactly once: by `close()`, or on drop if the
/// writer was never closed.
pub struct QuadWriter<Q: QuadSink> {
    downstream: Q,
    metadata_graph: Option<Iri>,
    closed: bool,
}

impl<Q: QuadSink> QuadWriter<Q> {
    pub fn new(downstream: Q) -> Self {
        Self {
            downstream,
            metadata_graph: None,
            closed: false,
        }
    }

    /// Record provenance and labels in `metadata_graph`.
    pub fn with_metadata_graph(downstream: Q, metadata_graph: Iri) -> Self {
        Self {
            downstream,
            metadata_graph: Some(metadata_graph),
            closed: false,
        }
    }

    pub fn metadata_graph(&self) -> Option<&Iri> {
        self.metadata_graph.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), SinkError> {
        if self.closed {
            Err(SinkError::Closed)
        } else {
            Ok(())
        }
    }
}

impl<Q: QuadSink> TripleSink for QuadWriter<Q> {
    fn open_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError> {
        self.ensure_open()?;
        let Some(meta) = &self.metadata_graph else {
            return Ok(());
        };
        self.downstream.write_quad(
            &Resource::Iri(context.document_uri.clone()),
            &any23::extractor(),
            &Term::Iri(any23::extractor_resource(&context.extractor_name)),
            meta,
        )
    }

    fn close_context(&mut self, _context: &ExtractionContext) -> Result<(), SinkError> {
        Ok(())
    }

    fn receive_triple(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        context: &ExtractionContext,
    ) -> Result<(), SinkError> {
        self.ensure_open()?;
        self.downstream
            .write_quad(subject, predicate, object, &context.document_uri)
    }

    fn receive_label(&mut self, label: &str, context: &ExtractionContext) -> Result<(), SinkError> {
        self.ensure_open()?;
        let Some(meta) = &self.metadata_graph else {
            return Ok(());
        };
        if !context.is_document_context() {
            return Ok(());
        }
        self.downstream.write_quad(
            &Resource::Iri(context.document_uri.clone()),
            &rdfs::label(),
            &Term::literal(label),
            meta,
        )
    }

    fn close(&mut self) -> Result<(), SinkError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.downstream.close()
    }
}

impl<Q: QuadSink> Drop for QuadWriter<Q> {
    fn drop(&mut self) {
        if !self.closed {
            if let Err(e) = self.close() {
                warn!(error = %e, "failed to close quad sink on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::BlankNode;
    use crate::writer::MemoryQuadSink;

    fn doc_ctx() -> ExtractionContext {
        ExtractionContext::new("html-mf-hcalendar", Iri::new("http://example.org/page"))
    }

    fn meta() -> Iri {
        Iri::new("http://example.org/meta")
    }

    // === Scenario: Triples land in the document graph ===
    #[test]
    fn triple_becomes_quad_in_document_graph() {
        let quads = MemoryQuadSink::new();
        let mut writer = QuadWriter::new(quads.clone());
        let ctx = doc_ctx();
        let s = Resource::from(BlankNode::new());

        writer.open_context(&ctx).unwrap();
        writer
            .receive_triple(&s, &Iri::new("http://example.org/p"), &Term::literal("v"), &ctx)
            .unwrap();
        writer.receive_label("Title", &ctx).unwrap();
        writer.close_context(&ctx).unwrap();
        writer.close().unwrap();

        let written = quads.quads();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].subject, s);
        assert_eq!(written[0].graph, ctx.document_uri);
    }

    // === Scenario: Metadata graph records provenance per opened context ===
    #[test]
    fn provenance_quad_per_open_context() {
        let quads = MemoryQuadSink::new();
        let mut writer = QuadWriter::with_metadata_graph(quads.clone(), meta());
        let ctx = doc_ctx();

        writer.open_context(&ctx).unwrap();
        writer.close_context(&ctx).unwrap();
        writer.open_context(&ctx).unwrap();

        let written = quads.quads();
        assert_eq!(written.len(), 2);
        for quad in &written {
            assert_eq!(quad.subject, Resource::Iri(ctx.document_uri.clone()));
            assert_eq!(quad.predicate, any23::extractor());
            assert_eq!(quad.object, Term::Iri(any23::extractor_resource("html-mf-hcalendar")));
            assert_eq!(quad.graph, meta());
        }
    }

    // === Scenario: Labels are recorded only for whole-document contexts ===
    #[test]
    fn label_only_for_document_context() {
        let quads = MemoryQuadSink::new();
        let mut writer = QuadWriter::with_metadata_graph(quads.clone(), meta());
        let ctx = doc_ctx();

        writer.receive_label("Events", &ctx).unwrap();
        writer.receive_label("Nested", &ctx.sub_context("part-1")).unwrap();

        let written = quads.quads();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].predicate, rdfs::label());
        assert_eq!(written[0].object, Term::literal("Events"));
        assert_eq!(written[0].graph, meta());
    }

    // === Scenario: Downstream closed exactly once, writes refused afterwards ===
    #[test]
    fn close_forwards_once() {
        let quads = MemoryQuadSink::new();
        let mut writer = QuadWriter::new(quads.clone());
        let ctx = doc_ctx();

        writer.close().unwrap();
        writer.close().unwrap();
        assert_eq!(quads.close_count(), 1);

        let err = writer
            .receive_triple(&Resource::from(BlankNode::new()), &Iri::new("http://p/"), &Term::literal("x"), &ctx)
            .unwrap_err();
        assert!(matches!(err, SinkError::Closed));
        assert!(matches!(writer.open_context(&ctx), Err(SinkError::Closed)));

        drop(writer);
        assert_eq!(quads.close_count(), 1);
        assert!(quads.quads().is_empty());
    }

    // === Scenario: Dropping an unclosed writer closes the downstream ===
    #[test]
    fn drop_closes_downstream() {
        let quads = MemoryQuadSink::new();
        {
            let mut writer = QuadWriter::new(quads.clone());
            writer.open_context(&doc_ctx()).unwrap();
        }
        assert_eq!(quads.close_count(), 1);
    }

    // === Scenario: Writer works over a borrowed downstream ===
    #[test]
    fn borrowed_downstream() {
        let mut quads = MemoryQuadSink::new();
        {
            let mut writer = QuadWriter::new(&mut quads);
            writer
                .receive_triple(&Resource::from(BlankNode::new()), &Iri::new("http://p/"), &Term::literal("x"), &doc_ctx())
                .unwrap();
        }
        assert_eq!(quads.quads().len(), 1);
        assert_eq!(quads.close_count(), 1);
    }
}
