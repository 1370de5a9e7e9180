//! Presentation layer for spanline timelines
//!
//!     This crate turns parsed timeline events into everything a renderer
//!     needs: widget items with synthetic identities, a visible date window
//!     with proportional margin, and a widget options bag (zoom bounds,
//!     scroll flags).
//!
//! Architecture
//!
//!     - RenderSurface trait: the capability seam. A surface exposes its
//!       rendered item and lane elements for querying and mutation; any
//!       concrete renderer (the terminal viewer, a test fake) plugs in here.
//!     - compose(): the orchestration entry point. Mounts a fresh surface,
//!       draws the items, and runs the refinement passes.
//!     - Refinement: post-draw element adjustments (overflow class removal,
//!       lane tinting, wikilink rewriting) applied against an explicit
//!       surface handle, re-runnable on any lifecycle notification.
//!
//!     This is a pure lib: it powers the viewer and the CLI but is shell
//!     agnostic. Nothing here touches a terminal, std streams, or env vars.

#![allow(rustdoc::invalid_html_tags)]

pub mod view;
