//! Structural validation of serialized entries.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

/// Categories a validation issue can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    ParseError,
    MissingElement,
    MissingAttribute,
    Exception,
}

/// One problem found in a fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
}

/// Outcome of validating one fragment. Problems are data, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

/// Structurally validate a serialized `<entry>` fragment.
///
/// Checks that the fragment is well-formed, that the root element is
/// `<entry>` with an `id` attribute, and that an immediate
/// `<lexical-unit>` child exists. A parse failure stops the scan; the
/// structural checks accumulate. This function never panics and has no
/// error path of its own.
#[must_use]
pub fn validate(xml: &str) -> ValidationReport {
    let mut reader = Reader::from_str(xml);
    let mut scan = Scan::default();
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                scan.element(&e, depth);
                depth += 1;
            }
            Ok(Event::Empty(e)) => scan.element(&e, depth),
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                scan.push(
                    IssueKind::ParseError,
                    format!(
                        "XML parse error at byte {}: {err}",
                        reader.buffer_position()
                    ),
                );
                return scan.into_report();
            }
        }
    }

    if !scan.root_seen {
        scan.push(IssueKind::MissingElement, "no entry element found");
    } else if scan.root_is_entry && !scan.lexical_unit_seen {
        scan.push(IssueKind::MissingElement, "entry has no lexical-unit child");
    }
    scan.into_report()
}

#[derive(Default)]
struct Scan {
    errors: Vec<ValidationIssue>,
    root_seen: bool,
    root_is_entry: bool,
    lexical_unit_seen: bool,
}

impl Scan {
    fn element(&mut self, start: &BytesStart<'_>, depth: usize) {
        if depth == 0 && !self.root_seen {
            self.root_seen = true;
            if start.name().as_ref() == b"entry" {
                self.root_is_entry = true;
                self.check_id(start);
            } else {
                self.push(
                    IssueKind::MissingElement,
                    format!(
                        "root element is <{}>, expected <entry>",
                        String::from_utf8_lossy(start.name().as_ref())
                    ),
                );
            }
        } else if depth == 1 && self.root_is_entry && start.name().as_ref() == b"lexical-unit" {
            self.lexical_unit_seen = true;
        }
    }

    fn check_id(&mut self, start: &BytesStart<'_>) {
        for attr in start.attributes() {
            match attr {
                Ok(attr) if attr.key.as_ref() == b"id" => return,
                Ok(_) => {}
                Err(err) => {
                    self.push(
                        IssueKind::Exception,
                        format!("could not read entry attributes: {err}"),
                    );
                    return;
                }
            }
        }
        self.push(IssueKind::MissingAttribute, "entry element has no id attribute");
    }

    fn push(&mut self, kind: IssueKind, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            kind,
            message: message.into(),
        });
    }

    fn into_report(self) -> ValidationReport {
        ValidationReport {
            valid: self.errors.is_empty(),
            errors: self.errors,
        }
    }
}
