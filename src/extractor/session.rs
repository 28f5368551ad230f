//! ExtractionSession: per-call state shared by microformat extractors
//!
//! A session lives for exactly one extractor run over one document. It owns
//! the context, borrows the sink, and carries the helpers every extractor
//! needs (conditional adds, URI resolution, fresh anonymous nodes).

use super::context::ExtractionContext;
use super::sink::{SinkError, TripleSink};
use crate::html::HtmlDocument;
use crate::rdf::{BlankNode, Iri, Resource, Term};

pub struct ExtractionSession<'a> {
    document: &'a HtmlDocument,
    context: ExtractionContext,
    sink: &'a mut dyn TripleSink,
    triples_written: usize,
}

impl<'a> ExtractionSession<'a> {
    pub fn new(
        document: &'a HtmlDocument,
        context: ExtractionContext,
        sink: &'a mut dyn TripleSink,
    ) -> Self {
        Self {
            document,
            context,
            sink,
            triples_written: 0,
        }
    }

    pub fn context(&self) -> &ExtractionContext {
        &self.context
    }

    pub fn document(&self) -> &'a HtmlDocument {
        self.document
    }

    /// The page itself as a resource, identified by its base URI.
    pub fn document_resource(&self) -> Resource {
        Resource::Iri(self.document.base_iri())
    }

    /// Allocate an anonymous node scoped to this session.
    pub fn fresh_node(&self) -> BlankNode {
        BlankNode::new()
    }

    pub fn absolutize(&self, relative: &str) -> String {
        self.document.absolutize(relative)
    }

    pub fn write_triple(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
    ) -> Result<(), SinkError> {
        self.sink
            .receive_triple(subject, predicate, object, &self.context)?;
        self.triples_written += 1;
        Ok(())
    }

    /// Write a string literal property unless `value` is empty.
    ///
    /// Returns whether a triple was written.
    pub fn add_string_property(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        value: &str,
    ) -> Result<bool, SinkError> {
        if value.is_empty() {
            return Ok(false);
        }
        self.write_triple(subject, predicate, &Term::literal(value))?;
        Ok(true)
    }

    pub fn triples_written(&self) -> usize {
        self.triples_written
    }
}
