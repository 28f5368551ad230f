//! HCalendarExtractor — the hCalendar microformat (http://microformats.org/wiki/hcalendar)
//!
//! Maps calendar markup to the W3C RDF Calendar vocabulary:
//! - The page is the calendar: one `Vcalendar` type triple per `vcalendar` node,
//!   subject = base URI. With no `vcalendar` but some `vevent`, the whole
//!   document counts as one calendar.
//! - Each `vevent`/`vtodo`/`vjournal`/`vfreebusy` node becomes a fresh blank
//!   node linked from the calendar by `component`.
//! - Field values are copied as-is; nothing is validated.

use super::session::ExtractionSession;
use super::traits::{Extractor, ExtractorDescription};
use super::ExtractionError;
use crate::html::HtmlNode;
use crate::rdf::vocab::{ical, rdf};
use crate::rdf::{Iri, Resource, Term};
use tracing::debug;

pub const NAME: &str = "html-mf-hcalendar";

/// The calendar component kinds, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Event,
    Todo,
    Journal,
    FreeBusy,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [Self::Event, Self::Todo, Self::Journal, Self::FreeBusy];

    /// Class marker in the page
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Event => "vevent",
            Self::Todo => "vtodo",
            Self::Journal => "vjournal",
            Self::FreeBusy => "vfreebusy",
        }
    }

    /// Class name in the calendar vocabulary
    pub const fn vocabulary_name(self) -> &'static str {
        match self {
            Self::Event => "Vevent",
            Self::Todo => "Vtodo",
            Self::Journal => "Vjournal",
            Self::FreeBusy => "Vfreebusy",
        }
    }

    pub fn class(self) -> Iri {
        ical::resource(self.vocabulary_name())
    }
}

/// Single-valued text fields; the marker doubles as the property name.
pub const SINGULAR_TEXT_FIELDS: [&str; 9] = [
    "dtstart",
    "dtstamp",
    "dtend",
    "summary",
    "class",
    "transp",
    "description",
    "status",
    "location",
];

const CALENDAR_MARKER: &str = "vcalendar";
const CATEGORY_MARKER: &str = "category";

/// Extractor for hCalendar markup.
pub struct HCalendarExtractor {
    description: ExtractorDescription,
}

impl HCalendarExtractor {
    pub fn new() -> Self {
        Self {
            description: ExtractorDescription {
                name: NAME,
                prefixes: vec![("rdf", rdf::NS), ("ical", ical::NS)],
                media_types: vec!["text/html;q=0.1", "application/xhtml+xml;q=0.1"],
            },
        }
    }

    fn extract_calendar(
        &self,
        session: &mut ExtractionSession<'_>,
        node: HtmlNode<'_>,
    ) -> Result<bool, ExtractionError> {
        let calendar = session.document_resource();
        session.write_triple(&calendar, &rdf::type_(), &ical::vcalendar().into())?;

        let mut found = false;
        let mut components = 0usize;
        for kind in ComponentKind::ALL {
            for component_node in node.find_all_by_class(kind.marker()) {
                found |= self.extract_component(session, component_node, &calendar, kind)?;
                components += 1;
            }
        }
        debug!(
            document = session.context().document_uri.as_str(),
            components, "hcalendar: extracted calendar"
        );
        Ok(found)
    }

    fn extract_component(
        &self,
        session: &mut ExtractionSession<'_>,
        node: HtmlNode<'_>,
        calendar: &Resource,
        kind: ComponentKind,
    ) -> Result<bool, ExtractionError> {
        let component = Resource::from(session.fresh_node());
        session.write_triple(&component, &rdf::type_(), &kind.class().into())?;
        add_text_properties(session, node, &component)?;
        add_url(session, node, &component)?;
        add_recurrence_rules(session, node, &component)?;
        add_organizers(session, node, &component)?;
        add_uid(session, node, &component)?;
        session.write_triple(calendar, &ical::component(), &component.clone().into())?;
        Ok(true)
    }
}

impl Default for HCalendarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HCalendarExtractor {
    fn description(&self) -> &ExtractorDescription {
        &self.description
    }

    fn extract(&self, session: &mut ExtractionSession<'_>) -> Result<bool, ExtractionError> {
        let root = session.document().root();
        let mut calendars = root.find_all_by_class(CALENDAR_MARKER);
        if calendars.is_empty() && !root.find_all_by_class(ComponentKind::Event.marker()).is_empty() {
            // No wrapper: the page itself is the calendar
            calendars.push(root);
        }

        let mut found = false;
        for calendar in calendars {
            found |= self.extract_calendar(session, calendar)?;
        }
        Ok(found)
    }
}

fn add_text_properties(
    session: &mut ExtractionSession<'_>,
    node: HtmlNode<'_>,
    component: &Resource,
) -> Result<(), ExtractionError> {
    for field in SINGULAR_TEXT_FIELDS {
        let value = node.singular_text(field);
        session.add_string_property(component, &ical::property(field), &value)?;
    }
    for value in node.plural_text(CATEGORY_MARKER) {
        session.add_string_property(component, &ical::categories(), &value)?;
    }
    Ok(())
}

fn add_url(
    session: &mut ExtractionSession<'_>,
    node: HtmlNode<'_>,
    component: &Resource,
) -> Result<(), ExtractionError> {
    let url = node.singular_url("url");
    if url.is_empty() {
        return Ok(());
    }
    let absolute = Iri::new(session.absolutize(&url));
    session.write_triple(component, &ical::url(), &Term::Iri(absolute))?;
    Ok(())
}

fn add_recurrence_rules(
    session: &mut ExtractionSession<'_>,
    node: HtmlNode<'_>,
    component: &Resource,
) -> Result<(), ExtractionError> {
    for rule in node.find_all_by_class("rrule") {
        let rrule = Resource::from(session.fresh_node());
        session.write_triple(&rrule, &rdf::type_(), &ical::domain_of_rrule().into())?;
        session.add_string_property(&rrule, &ical::freq(), &rule.singular_text("freq"))?;
        session.write_triple(component, &ical::rrule(), &rrule.into())?;
    }
    Ok(())
}

fn add_organizers(
    session: &mut ExtractionSession<'_>,
    node: HtmlNode<'_>,
    component: &Resource,
) -> Result<(), ExtractionError> {
    for organizer_node in node.find_all_by_class("organizer") {
        // untyped
        let organizer = Resource::from(session.fresh_node());
        let address = organizer_node.singular_url("organizer");
        session.add_string_property(&organizer, &ical::cal_address(), &address)?;
        session.write_triple(component, &ical::organizer(), &organizer.into())?;
    }
    Ok(())
}

/// Read like a URL but written as a plain literal, never resolved.
fn add_uid(
    session: &mut ExtractionSession<'_>,
    node: HtmlNode<'_>,
    component: &Resource,
) -> Result<(), ExtractionError> {
    let uid = node.singular_url("uid");
    session.add_string_property(component, &ical::uid(), &uid)?;
    Ok(())
}
