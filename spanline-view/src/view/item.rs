//! Widget items derived from parsed events
//!
//! Identity is a synthetic monotonically increasing index assigned in input
//! order. The event name is display content only, so two events sharing a
//! name never collapse into one item.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use spanline_parser::timeline::TimelineEvent;

/// One drawable item handed to a render surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    /// Synthetic identity, unique within one composition.
    pub id: usize,
    /// Displayed label; may still contain raw `[[...]]` wikilink text, which
    /// the refinement pass rewrites on the rendered element.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    pub group: String,
}

impl TimelineItem {
    /// Items without a resolvable start have no position on the axis.
    pub fn is_positioned(&self) -> bool {
        self.start.is_some()
    }

    /// Instants are drawn as points, ranges as spans.
    pub fn is_instant(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }
}

/// Convert a notation date literal to an instant.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM:SS`, and the
/// T-less `YYYY-MM-DDHH:MM:SS` the grammar tolerates. Anything else,
/// including structurally valid but impossible calendar dates, yields `None`.
pub fn to_instant(literal: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(literal, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(literal, "%Y-%m-%d%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(literal, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Build widget items from parsed events, in input order.
///
/// Start/end literals that fail instant conversion become `None`, which
/// excludes them from window computation but keeps the item renderable as an
/// unpositioned entry.
pub fn items_from_events(events: &[TimelineEvent]) -> Vec<TimelineItem> {
    events
        .iter()
        .enumerate()
        .map(|(id, event)| TimelineItem {
            id,
            content: event.name.clone(),
            start: event.start.as_deref().and_then(to_instant),
            end: event.end.as_deref().and_then(to_instant),
            group: event.group.clone(),
        })
        .collect()
}
