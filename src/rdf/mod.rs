//! RDF term model and vocabularies

mod term;
pub mod vocab;

pub use term::{BlankNode, Iri, Literal, Quad, Resource, Term, Triple};
