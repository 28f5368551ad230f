//! Vocabulary terms used by the extractors and writers
//!
//! Every lookup is a pure function of its name, so the same name always
//! yields the same IRI.

use super::term::Iri;

pub mod rdf {
    use super::Iri;

    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    pub fn type_() -> Iri {
        Iri::new(format!("{NS}type"))
    }
}

pub mod rdfs {
    use super::Iri;

    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    pub fn label() -> Iri {
        Iri::new(format!("{NS}label"))
    }
}

/// The W3C RDF Calendar vocabulary.
pub mod ical {
    use super::Iri;

    pub const NS: &str = "http://www.w3.org/2002/12/cal/icaltzd#";

    /// Class IRI for a component or calendar name such as `Vevent`.
    pub fn resource(name: &str) -> Iri {
        Iri::new(format!("{NS}{name}"))
    }

    /// Property IRI for a field name such as `dtstart`.
    pub fn property(name: &str) -> Iri {
        Iri::new(format!("{NS}{name}"))
    }

    pub fn vcalendar() -> Iri {
        resource("Vcalendar")
    }

    pub fn component() -> Iri {
        property("component")
    }

    pub fn categories() -> Iri {
        property("categories")
    }

    pub fn uid() -> Iri {
        property("uid")
    }

    pub fn url() -> Iri {
        property("url")
    }

    pub fn rrule() -> Iri {
        property("rrule")
    }

    pub fn freq() -> Iri {
        property("freq")
    }

    pub fn domain_of_rrule() -> Iri {
        resource("DomainOf_rrule")
    }

    pub fn organizer() -> Iri {
        property("organizer")
    }

    pub fn cal_address() -> Iri {
        property("calAddress")
    }
}

/// Extraction provenance vocabulary.
pub mod any23 {
    use super::Iri;

    pub const NS: &str = "http://vocab.sindice.net/any23#";

    /// Links a document to an extractor that ran on it
    pub fn extractor() -> Iri {
        Iri::new(format!("{NS}extractor"))
    }

    pub fn extractor_resource(name: &str) -> Iri {
        Iri::new(format!("{NS}extractor/{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ical_lookups_are_stable() {
        assert_eq!(ical::resource("Vevent"), ical::resource("Vevent"));
        assert_eq!(
            ical::resource("Vevent").as_str(),
            "http://www.w3.org/2002/12/cal/icaltzd#Vevent"
        );
        assert_eq!(ical::property("class").as_str(), format!("{}class", ical::NS));
    }

    #[test]
    fn extractor_resource_embeds_name() {
        assert_eq!(
            any23::extractor_resource("html-mf-hcalendar").as_str(),
            "http://vocab.sindice.net/any23#extractor/html-mf-hcalendar"
        );
    }
}
