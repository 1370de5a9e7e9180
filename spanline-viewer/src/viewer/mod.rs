//! Rich terminal viewer app for spanline timelines
pub mod app;
pub mod model;
pub mod surface;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;
