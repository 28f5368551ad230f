//! In-memory sinks
//!
//! Cloning a sink yields another handle onto the same recorded state, so a
//! caller can keep one handle while handing the other to a writer.

use crate::extractor::{ExtractionContext, SinkError, TripleSink};
use crate::rdf::{Iri, Quad, Resource, Term, Triple};
use super::quad::QuadSink;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct QuadState {
    quads: Vec<Quad>,
    close_count: usize,
}

/// Records every quad written to it.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuadSink {
    state: Arc<Mutex<QuadState>>,
}

impl MemoryQuadSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quads(&self) -> Vec<Quad> {
        lock(&self.state).quads.clone()
    }

    /// Quads whose graph is `graph`
    pub fn in_graph(&self, graph: &Iri) -> Vec<Quad> {
        lock(&self.state)
            .quads
            .iter()
            .filter(|q| &q.graph == graph)
            .cloned()
            .collect()
    }

    pub fn close_count(&self) -> usize {
        lock(&self.state).close_count
    }
}

impl QuadSink for MemoryQuadSink {
    fn write_quad(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        graph: &Iri,
    ) -> Result<(), SinkError> {
        let mut state = lock(&self.state);
        if state.close_count > 0 {
            return Err(SinkError::Closed);
        }
        state.quads.push(Quad::new(
            subject.clone(),
            predicate.clone(),
            object.clone(),
            graph.clone(),
        ));
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        lock(&self.state).close_count += 1;
        Ok(())
    }
}

/// A context protocol call seen by a MemoryTripleSink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextEvent {
    Opened(ExtractionContext),
    Closed(ExtractionContext),
}

#[derive(Debug, Default)]
struct TripleState {
    triples: Vec<(Triple, ExtractionContext)>,
    labels: Vec<(String, ExtractionContext)>,
    events: Vec<ContextEvent>,
    closed: bool,
}

/// Records triples, labels and context events.
#[derive(Debug, Clone, Default)]
pub struct MemoryTripleSink {
    state: Arc<Mutex<TripleState>>,
}

impl MemoryTripleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triples(&self) -> Vec<Triple> {
        lock(&self.state)
            .triples
            .iter()
            .map(|(triple, _)| triple.clone())
            .collect()
    }

    /// Triples paired with the context they arrived under
    pub fn triples_with_context(&self) -> Vec<(Triple, ExtractionContext)> {
        lock(&self.state).triples.clone()
    }

    pub fn labels(&self) -> Vec<String> {
        lock(&self.state)
            .labels
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }

    pub fn events(&self) -> Vec<ContextEvent> {
        lock(&self.state).events.clone()
    }

    pub fn opened_contexts(&self) -> Vec<ExtractionContext> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ContextEvent::Opened(ctx) => Some(ctx),
                ContextEvent::Closed(_) => None,
            })
            .collect()
    }

    pub fn closed_contexts(&self) -> Vec<ExtractionContext> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ContextEvent::Closed(ctx) => Some(ctx),
                ContextEvent::Opened(_) => None,
            })
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        lock(&self.state).closed
    }

    fn ensure_open(state: &TripleState) -> Result<(), SinkError> {
        if state.closed {
            Err(SinkError::Closed)
        } else {
            Ok(())
        }
    }
}

impl TripleSink for MemoryTripleSink {
    fn open_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError> {
        let mut state = lock(&self.state);
        Self::ensure_open(&state)?;
        state.events.push(ContextEvent::Opened(context.clone()));
        Ok(())
    }

    fn close_context(&mut self, context: &ExtractionContext) -> Result<(), SinkError> {
        let mut state = lock(&self.state);
        Self::ensure_open(&state)?;
        state.events.push(ContextEvent::Closed(context.clone()));
        Ok(())
    }

    fn receive_triple(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        context: &ExtractionContext,
    ) -> Result<(), SinkError> {
        let mut state = lock(&self.state);
        Self::ensure_open(&state)?;
        let triple = Triple::new(subject.clone(), predicate.clone(), object.clone());
        state.triples.push((triple, context.clone()));
        Ok(())
    }

    fn receive_label(&mut self, label: &str, context: &ExtractionContext) -> Result<(), SinkError> {
        let mut state = lock(&self.state);
        Self::ensure_open(&state)?;
        state.labels.push((label.to_string(), context.clone()));
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        lock(&self.state).closed = true;
        Ok(())
    }
}
