//! TripleSink trait and sink error type
//!
//! The sink is the interface through which extractors push triples out.
//! Every method reports failure so a broken downstream stops the current
//! document instead of being silently dropped.

use super::context::ExtractionContext;
use crate::rdf::{Iri, Resource, Term};
use thiserror::Error;

/// Errors raised by a sink while accepting output.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink already closed")]
    Closed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("downstream error: {0}")]
    Downstream(String),
}

/// Receives the triples produced by extractors.
///
/// Protocol: `open_context`, then any number of `receive_triple` /
/// `receive_label` for that context, then `close_context`; repeat per
/// context; finally `close` once. Nothing may be written after `close`.
pub trait TripleSink {
    fn open_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError>;

    /// Second half of the context protocol. Implementations may do nothing.
    fn close_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError>;

    fn receive_triple(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        context: &ExtractionContext,
    ) -> Result<(), SinkError>;

    /// A human-readable label for the context's document (e.g. its title).
    fn receive_label(&mut self, label: &str, context: &ExtractionContext) -> Result<(), SinkError>;

    /// Flush and release any buffered output.
    fn close(&mut self) -> Result<(), SinkError>;
}

impl<S: TripleSink + ?Sized> TripleSink for &mut S {
    fn open_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError> {
        (**self).open_context(context)
    }

    fn close_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError> {
        (**self).close_context(context)
    }

    fn receive_triple(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        context: &ExtractionContext,
    ) -> Result<(), SinkError> {
        (**self).receive_triple(subject, predicate, object, context)
    }

    fn receive_label(&mut self, label: &str, context: &ExtractionContext) -> Result<(), SinkError> {
        (**self).receive_label(label, context)
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }
}

impl<S: TripleSink + ?Sized> TripleSink for Box<S> {
    fn open_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError> {
        (**self).open_context(context)
    }

    fn close_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError> {
        (**self).close_context(context)
    }

    fn receive_triple(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        context: &ExtractionContext,
    ) -> Result<(), SinkError> {
        (**self).receive_triple(subject, predicate, object, context)
    }

    fn receive_label(&mut self, label: &str, context: &ExtractionContext) -> Result<(), SinkError> {
        (**self).receive_label(label, context)
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }
}
