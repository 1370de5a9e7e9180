//! # spanline-parser
//!
//! A parser for the spanline timeline notation.
//!
//! The notation is line oriented: a line starting with `#` names a group that
//! applies to every following event line until the next header; every other
//! line is either an event (optional start date, optional `~`-separated end
//! date, then a name) or is recorded as skipped. Parsing never fails — the
//! output is a plain value for all inputs.
//!
//! Event names may carry `[[Target|Display]]` wikilinks; the [`timeline::link`]
//! module segments names so a renderer can turn those into live links.

#![allow(rustdoc::invalid_html_tags)]

pub mod timeline;
