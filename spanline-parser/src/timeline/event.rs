//! The event record produced by parsing
//!
//! One record per matched input line. Records are created fresh on every
//! parse call and never mutated afterwards; ordering follows input order.

use serde::{Deserialize, Serialize};

/// A parsed timeline event: one matched input line.
///
/// `start` and `end` hold the date/time literal exactly as written in the
/// source (`YYYY-MM-DD`, optionally followed by `T?hh:mm:ss`). No calendar
/// interpretation happens at this layer; conversion to instants is the view
/// layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Group this event belongs to; empty before the first `#` header.
    pub group: String,
    /// Start literal, verbatim from the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End literal; `None` marks an instant event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Free-text label, possibly containing `[[...]]` wikilinks.
    pub name: String,
}

impl TimelineEvent {
    /// An instant event has a start but no end and is drawn as a point.
    pub fn is_instant(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Whether this event carries any date literal at all. Events without
    /// dates are representable but excluded from window computation.
    pub fn has_dates(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}
