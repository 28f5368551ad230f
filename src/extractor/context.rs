//! Extraction context: which document, which extractor

use crate::rdf::Iri;

/// Identifies the source document of a triple and the extractor that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionContext {
    /// Name of the extractor producing triples under this context
    pub extractor_name: String,
    /// The document being extracted; also the graph name for quads
    pub document_uri: Iri,
    /// Set for sub-extractions within the document, `None` for the whole document
    pub local_id: Option<String>,
}

impl ExtractionContext {
    /// A context covering the whole document.
    pub fn new(extractor_name: impl Into<String>, document_uri: Iri) -> Self {
        Self {
            extractor_name: extractor_name.into(),
            document_uri,
            local_id: None,
        }
    }

    /// A context for one part of the same document.
    pub fn sub_context(&self, local_id: impl Into<String>) -> Self {
        Self {
            extractor_name: self.extractor_name.clone(),
            document_uri: self.document_uri.clone(),
            local_id: Some(local_id.into()),
        }
    }

    pub fn is_document_context(&self) -> bool {
        self.local_id.is_none()
    }
}

impl std::fmt::Display for ExtractionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.local_id {
            Some(local) => write!(f, "{}:{}#{}", self.extractor_name, self.document_uri.as_str(), local),
            None => write!(f, "{}:{}", self.extractor_name, self.document_uri.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_context_is_not_document_context() {
        let ctx = ExtractionContext::new("html-mf-hcalendar", Iri::new("http://example.org/"));
        assert!(ctx.is_document_context());

        let sub = ctx.sub_context("event-1");
        assert!(!sub.is_document_context());
        assert_eq!(sub.document_uri, ctx.document_uri);
        assert_eq!(sub.extractor_name, "html-mf-hcalendar");
        assert_eq!(sub.to_string(), "html-mf-hcalendar:http://example.org/#event-1");
    }
}
