//! Wikilink scanning inside event names
//!
//! Names may embed `[[Target|Display]]` tokens. [`segments`] splits a name
//! into plain-text and link segments so a renderer can rewrite the link
//! portions into live anchors; [`first_link`] is the common case of checking
//! whether a name carries a link at all.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WIKILINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\[\]]+)\]\]").expect("wikilink pattern is valid"));

/// A `[[...]]` token, split into navigation target and display text.
///
/// `[[Target|Display]]` splits on the first pipe; `[[Target]]` uses the same
/// text for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiLink {
    pub target: String,
    pub display: String,
}

impl WikiLink {
    fn from_inner(inner: &str) -> Self {
        match inner.split_once('|') {
            Some((target, display)) => WikiLink {
                target: target.to_string(),
                display: display.to_string(),
            },
            None => WikiLink {
                target: inner.to_string(),
                display: inner.to_string(),
            },
        }
    }
}

/// One piece of a segmented name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NameSegment {
    Text { text: String },
    Link { link: WikiLink },
}

/// The first wikilink in `name`, if any.
pub fn first_link(name: &str) -> Option<WikiLink> {
    WIKILINK
        .captures(name)
        .map(|caps| WikiLink::from_inner(&caps[1]))
}

/// Split a name into plain-text and link segments, in order. A name without
/// any `[[...]]` token comes back as a single text segment.
pub fn segments(name: &str) -> Vec<NameSegment> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for caps in WIKILINK.captures_iter(name) {
        let whole = caps.get(0).expect("capture 0 always present");
        if whole.start() > cursor {
            out.push(NameSegment::Text {
                text: name[cursor..whole.start()].to_string(),
            });
        }
        out.push(NameSegment::Link {
            link: WikiLink::from_inner(&caps[1]),
        });
        cursor = whole.end();
    }

    if cursor < name.len() || out.is_empty() {
        out.push(NameSegment::Text {
            text: name[cursor..].to_string(),
        });
    }

    out
}
