//! hcalrdf: hCalendar microformat extraction into RDF
//!
//! Walks a parsed HTML page, recognizes hCalendar markup and writes the
//! calendar data as RDF triples. `QuadWriter` turns those triples into
//! quads, one named graph per source document, optionally recording which
//! extractor ran where.
//!
//! # Core Concepts
//!
//! - **Extractors**: per-microformat walkers implementing [`Extractor`]
//! - **Sinks**: [`TripleSink`] receives triples; [`QuadSink`] receives quads
//! - **Contexts**: [`ExtractionContext`] names the document and the extractor
//!
//! # Example
//!
//! ```
//! use hcalrdf::{run_extractor, HCalendarExtractor, HtmlDocument, MemoryQuadSink, QuadWriter, TripleSink};
//!
//! let html = r#"<div class="vevent"><span class="summary">Launch</span></div>"#;
//! let doc = HtmlDocument::parse(html, "http://example.org/events").unwrap();
//!
//! let quads = MemoryQuadSink::new();
//! let mut writer = QuadWriter::new(quads.clone());
//! assert!(run_extractor(&HCalendarExtractor::new(), &doc, &mut writer).unwrap());
//! writer.close().unwrap();
//! assert_eq!(quads.quads().len(), 4);
//! ```

pub mod config;
pub mod extractor;
pub mod html;
pub mod rdf;
pub mod writer;

pub use config::{CliOverrides, Config, ConfigError, OutputFormat};
pub use extractor::{
    run_extractor, ComponentKind, ExtractionContext, ExtractionError, ExtractionSession, Extractor,
    ExtractorDescription, ExtractorRegistry, HCalendarExtractor, RunReport, SinkError, TripleSink,
};
pub use html::{DocumentError, HtmlDocument, HtmlNode};
pub use rdf::{BlankNode, Iri, Literal, Quad, Resource, Term, Triple};
pub use writer::{ContextEvent, JsonLinesWriter, MemoryQuadSink, MemoryTripleSink, NQuadsWriter, QuadSink, QuadWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
