//! Extractor registry — lookup by name and media type
//!
//! Registration order is run order. The registry never looks inside the
//! triples an extractor produces.

use super::hcalendar::HCalendarExtractor;
use super::sink::TripleSink;
use super::traits::Extractor;
use super::{run_extractor, ExtractionError};
use crate::html::HtmlDocument;
use std::sync::Arc;

/// Result of running every matching extractor over one document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// How many extractors were invoked
    pub extractors_run: usize,
    /// Names of the extractors that found something
    pub found: Vec<String>,
}

/// Holds the available extractors.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// A registry holding every built-in extractor.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HCalendarExtractor::new()));
        registry
    }

    /// Add an extractor. A later registration with the same name replaces the earlier one.
    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        self.extractors.retain(|e| e.name() != extractor.name());
        self.extractors.push(extractor);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Extractor>> {
        self.extractors.iter().find(|e| e.name() == name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Extractor>> {
        self.extractors.iter()
    }

    /// Extractors accepting `media_type`, in registration order.
    pub fn for_media_type(&self, media_type: &str) -> Vec<Arc<dyn Extractor>> {
        self.extractors
            .iter()
            .filter(|e| e.description().accepts(media_type))
            .cloned()
            .collect()
    }

    /// Keep only the named extractors, in registry order.
    ///
    /// Fails on the first name that is not registered.
    pub fn select(&self, names: &[String]) -> Result<ExtractorRegistry, ExtractionError> {
        if let Some(missing) = names.iter().find(|name| self.get(name).is_none()) {
            return Err(ExtractionError::UnknownExtractor(missing.clone()));
        }
        Ok(Self {
            extractors: self
                .extractors
                .iter()
                .filter(|e| names.iter().any(|name| name == e.name()))
                .cloned()
                .collect(),
        })
    }

    /// Run every extractor accepting `media_type` over `document`.
    ///
    /// A sink error aborts the run.
    pub fn run_all(
        &self,
        document: &HtmlDocument,
        media_type: &str,
        sink: &mut dyn TripleSink,
    ) -> Result<RunReport, ExtractionError> {
        let mut report = RunReport::default();
        for extractor in self.for_media_type(media_type) {
            report.extractors_run += 1;
            if run_extractor(extractor.as_ref(), document, sink)? {
                report.found.push(extractor.name().to_string());
            }
        }
        Ok(report)
    }
}
