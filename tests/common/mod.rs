//! Shared fixtures for hcalrdf integration tests

#![allow(dead_code)]

use hcalrdf::{run_extractor, HCalendarExtractor, HtmlDocument, MemoryQuadSink, QuadWriter, TripleSink};

pub const BASE: &str = "http://example.org/calendar/2020.html";
pub const META: &str = "http://example.org/meta";

/// A conference page: explicit calendar, two events, one todo.
pub const CONFERENCE: &str = r#"<!DOCTYPE html>
<html>
<head><title>RustConf Schedule</title></head>
<body>
  <div class="vcalendar">
    <div class="vevent" id="keynote">
      <a class="url uid" href="/talks/keynote">
        <span class="summary">Opening Keynote</span>
      </a>
      <abbr class="dtstart" title="2020-08-20T09:00:00">Aug 20, 9am</abbr>
      <abbr class="dtend" title="2020-08-20T10:00:00">10am</abbr>
      <span class="location">Main Hall</span>
      <span class="category">keynote</span>
      <span class="category">community</span>
      <a class="organizer" href="mailto:chair@example.org">Program Chair</a>
      <div class="rrule"><span class="freq">YEARLY</span></div>
    </div>
    <div class="vevent">
      <span class="summary">Lunch</span>
      <span class="dtstart">2020-08-20T12:00:00</span>
      <span class="status">CONFIRMED</span>
    </div>
    <div class="vtodo">
      <span class="summary">Submit slides</span>
      <span class="dtstamp">2020-08-01</span>
    </div>
  </div>
</body>
</html>"#;

pub fn parse(html: &str) -> HtmlDocument {
    HtmlDocument::parse(html, BASE).expect("fixture base URI is absolute")
}

/// Run the hCalendar extractor through a QuadWriter and return the recorded quads.
pub fn extract_quads(html: &str, metadata_graph: Option<&str>) -> (bool, MemoryQuadSink) {
    let doc = parse(html);
    let quads = MemoryQuadSink::new();
    let mut writer = match metadata_graph {
        Some(graph) => QuadWriter::with_metadata_graph(quads.clone(), hcalrdf::Iri::new(graph)),
        None => QuadWriter::new(quads.clone()),
    };
    let found = run_extractor(&HCalendarExtractor::new(), &doc, &mut writer).expect("memory sink never fails");
    writer.close().expect("memory sink never fails");
    (found, quads)
}
