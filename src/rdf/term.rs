//! RDF terms, triples and quads

use serde::Serialize;
use uuid::Uuid;

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Wrap a string that is already an absolute IRI.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&url::Url> for Iri {
    fn from(url: &url::Url) -> Self {
        Self(url.as_str().to_string())
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// An anonymous node, unique to the extraction call that allocated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlankNode(Uuid);

impl BlankNode {
    /// Allocate a fresh blank node
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Node label without the `_:` prefix
    pub fn label(&self) -> String {
        format!("b{}", self.0.simple())
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlankNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.label())
    }
}

/// A plain string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Literal {
    pub lexical: String,
}

impl Literal {
    pub fn new(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")
    }
}

/// A term that may appear in subject position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Resource {
    Iri(Iri),
    Blank(BlankNode),
}

impl From<Iri> for Resource {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for Resource {
    fn from(node: BlankNode) -> Self {
        Self::Blank(node)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Blank(node) => node.fmt(f),
        }
    }
}

/// A term that may appear in object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Term {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl Term {
    pub fn literal(lexical: impl Into<String>) -> Self {
        Self::Literal(Literal::new(lexical))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Lexical form if this term is a literal
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(literal) => Some(&literal.lexical),
            _ => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Self::Blank(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Resource> for Term {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Iri(iri) => Self::Iri(iri),
            Resource::Blank(node) => Self::Blank(node),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Blank(node) => node.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

/// A subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Triple {
    pub subject: Resource,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<Resource>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

/// A triple placed in a named graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Quad {
    pub subject: Resource,
    pub predicate: Iri,
    pub object: Term,
    pub graph: Iri,
}

impl Quad {
    pub fn new(
        subject: impl Into<Resource>,
        predicate: Iri,
        object: impl Into<Term>,
        graph: Iri,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
            graph,
        }
    }
}

/// Renders as one N-Quads statement, without the trailing newline.
impl std::fmt::Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} .",
            self.subject, self.predicate, self.object, self.graph
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_nodes_are_never_equal() {
        let a = BlankNode::new();
        let b = BlankNode::new();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("_:b"));
    }

    #[test]
    fn literal_escapes_quotes_and_newlines() {
        let literal = Literal::new("say \"hi\"\nnow\\");
        assert_eq!(literal.to_string(), r#""say \"hi\"\nnow\\""#);
    }

    #[test]
    fn quad_renders_as_nquads_statement() {
        let quad = Quad::new(
            Iri::new("http://example.org/page"),
            Iri::new("http://example.org/p"),
            Term::literal("v"),
            Iri::new("http://example.org/graph"),
        );
        assert_eq!(
            quad.to_string(),
            "<http://example.org/page> <http://example.org/p> \"v\" <http://example.org/graph> ."
        );
    }

    #[test]
    fn term_serializes_with_type_tag() {
        let json = serde_json::to_value(Term::literal("x")).unwrap();
        assert_eq!(json["type"], "literal");
        assert_eq!(json["value"]["lexical"], "x");

        let json = serde_json::to_value(Term::from(Iri::new("http://a/"))).unwrap();
        assert_eq!(json["type"], "iri");
        assert_eq!(json["value"], "http://a/");
    }
}
