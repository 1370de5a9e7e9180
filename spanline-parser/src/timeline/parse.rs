//! Line-oriented parsing of spanline notation
//!
//! The grammar is a single anchored-per-line pattern:
//!
//! ```text
//! line         := group_header | event_line | blank_or_unmatched
//! group_header := "#" <text>
//! event_line   := [date_token] ["~" [date_token]] <whitespace> <free_text>
//! date_token   := YYYY-MM-DD(["T"]HH:MM:SS)?
//! ```
//!
//! [`parse_report`] keeps a per-line [`LineOutcome`] so callers (and tests)
//! can see what was skipped; [`parse`] is the permissive convenience that
//! discards the report. Neither ever errors: unmatched lines are dropped,
//! not reported as failures.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::event::TimelineEvent;

/// Matches an event line: optional start token, optional `~` plus end token,
/// a whitespace separator, then the name. The match is not anchored to the
/// line start, which tolerates stray leading text the way the notation always
/// has; the date groups only ever capture well-formed tokens.
static EVENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d{4}-\d{2}-\d{2}(?:T?\d{2}:\d{2}:\d{2})?)?~?(\d{4}-\d{2}-\d{2}(?:T?\d{2}:\d{2}:\d{2})?)?\s(.+)",
    )
    .expect("event line pattern is valid")
});

/// What a single input line contributed to the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LineOutcome {
    /// The line produced an event; `index` points into [`ParseReport::events`].
    Event { index: usize },
    /// The line was a `#` header and set the group for following lines.
    GroupHeader { group: String },
    /// The line contained only whitespace.
    Blank,
    /// The line matched nothing and was dropped.
    Skipped,
}

/// Structured outcome of one parse call: the events plus a per-line record
/// of what happened. Line records are in input order, one per line of the
/// trimmed source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub events: Vec<TimelineEvent>,
    pub lines: Vec<LineOutcome>,
}

impl ParseReport {
    /// Number of lines dropped as unmatched.
    pub fn skipped(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, LineOutcome::Skipped))
            .count()
    }

    /// Number of whitespace-only lines.
    pub fn blanks(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, LineOutcome::Blank))
            .count()
    }

    pub fn into_events(self) -> Vec<TimelineEvent> {
        self.events
    }
}

/// Parse spanline notation, keeping the per-line record.
///
/// The source is trimmed as a whole (not per line) before splitting, so a
/// leading or trailing blank region contributes no line records. The current
/// group resets to empty on every call; it never leaks across invocations.
pub fn parse_report(source: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut current_group = String::new();

    for line in source.trim().split('\n') {
        if let Some(header) = line.strip_prefix('#') {
            current_group = header.trim().to_string();
            report.lines.push(LineOutcome::GroupHeader {
                group: current_group.clone(),
            });
            continue;
        }
        if line.trim().is_empty() {
            report.lines.push(LineOutcome::Blank);
            continue;
        }
        match EVENT_LINE.captures(line) {
            Some(caps) => {
                report.events.push(TimelineEvent {
                    group: current_group.clone(),
                    start: caps.get(1).map(|m| m.as_str().to_string()),
                    end: caps.get(2).map(|m| m.as_str().to_string()),
                    name: caps
                        .get(3)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default(),
                });
                report.lines.push(LineOutcome::Event {
                    index: report.events.len() - 1,
                });
            }
            None => report.lines.push(LineOutcome::Skipped),
        }
    }

    report
}

/// Parse spanline notation into events, dropping unmatched lines silently.
pub fn parse(source: &str) -> Vec<TimelineEvent> {
    parse_report(source).into_events()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_start() {
        let events = parse("2024-01-01 Launch");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start.as_deref(), Some("2024-01-01"));
        assert_eq!(events[0].end, None);
        assert_eq!(events[0].name, "Launch");
        assert_eq!(events[0].group, "");
    }

    #[test]
    fn full_datetime_start() {
        let events = parse("2024-01-01T09:30:00 Standup");
        assert_eq!(events[0].start.as_deref(), Some("2024-01-01T09:30:00"));
        assert_eq!(events[0].name, "Standup");
    }

    #[test]
    fn datetime_without_t_separator() {
        // The grammar makes the T optional, not mandatory.
        let events = parse("2024-01-0109:30:00 Standup");
        assert_eq!(events[0].start.as_deref(), Some("2024-01-0109:30:00"));
    }

    #[test]
    fn start_and_end_range() {
        let events = parse("2024-01-01~2024-02-01 Sprint");
        assert_eq!(events[0].start.as_deref(), Some("2024-01-01"));
        assert_eq!(events[0].end.as_deref(), Some("2024-02-01"));
        assert_eq!(events[0].name, "Sprint");
    }

    #[test]
    fn end_only_range() {
        let events = parse("~2024-02-01 Deadline");
        assert_eq!(events[0].start, None);
        assert_eq!(events[0].end.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn group_headers_apply_forward() {
        let source = "#Phase A\n2024-01-01 Kickoff\n#Phase B\n2024-02-01 Review";
        let events = parse(source);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].group, "Phase A");
        assert_eq!(events[0].name, "Kickoff");
        assert_eq!(events[1].group, "Phase B");
        assert_eq!(events[1].name, "Review");
    }

    #[test]
    fn group_is_empty_before_first_header() {
        let events = parse("2024-01-01 Early\n#Later\n2024-01-02 Late");
        assert_eq!(events[0].group, "");
        assert_eq!(events[1].group, "Later");
    }

    #[test]
    fn header_line_produces_no_event() {
        let report = parse_report("# Solo header");
        assert!(report.events.is_empty());
        assert_eq!(
            report.lines,
            vec![LineOutcome::GroupHeader {
                group: "Solo header".to_string()
            }]
        );
    }

    #[test]
    fn whitespace_only_line_is_blank_not_skipped() {
        let report = parse_report("2024-01-01 A\n   \n2024-01-02 B");
        assert_eq!(report.events.len(), 2);
        assert_eq!(report.blanks(), 1);
        assert_eq!(report.skipped(), 0);
    }

    #[test]
    fn unmatched_line_is_recorded_as_skipped() {
        let report = parse_report("nodatehere\n2024-01-01 Ok");
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.lines[0], LineOutcome::Skipped);
    }

    #[test]
    fn whole_input_is_trimmed_not_per_line() {
        let report = parse_report("\n\n2024-01-01 A\n");
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.events.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = parse_report("");
        assert!(report.events.is_empty());
        // trim leaves an empty string whose single split piece is blank
        assert_eq!(report.events.len(), 0);
    }

    #[test]
    fn event_order_follows_input_order() {
        let events = parse("2024-03-01 Third?\n2024-01-01 First\n2024-02-01 Second");
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Third?", "First", "Second"]);
    }
}
