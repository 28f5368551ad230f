//! JsonLinesWriter: quads as one JSON object per line

use crate::extractor::SinkError;
use crate::rdf::{Iri, Quad, Resource, Term};
use super::quad::QuadSink;
use std::io::{BufWriter, Write};

pub struct JsonLinesWriter<W: Write> {
    out: BufWriter<W>,
    closed: bool,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
            closed: false,
        }
    }
}

impl<W: Write> QuadSink for JsonLinesWriter<W> {
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
        serde_json::to_writer(&mut self.out, &quad)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.closed = true;
        self.out.flush()?;
        Ok(())
    }
}
