//! NQuadsWriter: quads as N-Quads lines

use crate::extractor::SinkError;
use crate::rdf::{Iri, Quad, Resource, Term};
use super::quad::QuadSink;
use std::io::{BufWriter, Write};

/// Writes one N-Quads statement per line to a buffered writer.
pub struct NQuadsWriter<W: Write> {
    out: BufWriter<W>,
    closed: bool,
}

impl<W: Write> NQuadsWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
            closed: false,
        }
    }
}

impl<W: Write> QuadSink for NQuadsWriter<W> {
    fn write_quad(
        &mut self,
        subject: &Resource,
        predicate: &Iri,
        object: &Term,
        graph: &Iri,
    ) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        let quad = Quad::new(subject.clone(), predicate.clone(), object.clone(), graph.clone());
        writeln!(self.out, "{}", quad)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.closed = true;
        self.out.flush()?;
        Ok(())
    }
}
