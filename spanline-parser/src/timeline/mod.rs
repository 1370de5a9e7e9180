//! Main module for spanline parsing functionality

pub mod event;
pub mod link;
pub mod parse;

pub use event::TimelineEvent;
pub use parse::{parse, parse_report, LineOutcome, ParseReport};
