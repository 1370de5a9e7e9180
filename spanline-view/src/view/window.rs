//! Visible-window and zoom-bound computation
//!
//! The initial window is the event date range padded by a proportional
//! margin on each side. An event set with no resolvable dates gets the
//! configured fallback window instead of undefined math.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use super::item::TimelineItem;
use super::settings::ComposeSettings;

/// The date range the surface initially displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl VisibleWindow {
    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// Configuration bag handed to the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetOptions {
    pub zoomable: bool,
    pub horizontal_scroll: bool,
    pub vertical_scroll: bool,
    pub show_current_time: bool,
    /// Smallest span, in seconds, the user may zoom in to.
    pub zoom_min_secs: i64,
    /// Largest span, in seconds, the user may zoom out to.
    pub zoom_max_secs: i64,
    pub window: VisibleWindow,
}

/// Compute the visible window for a set of items.
///
/// Collects every present start and end instant, takes min and max, and pads
/// the range by `margin_ratio` on each side. A 10-day range with the default
/// ratio gets a 2-day margin. With no instants at all the window falls back
/// to `fallback_reference` plus/minus half of `fallback_window_days`.
pub fn visible_window(items: &[TimelineItem], settings: &ComposeSettings) -> VisibleWindow {
    let instants: Vec<NaiveDateTime> = items
        .iter()
        .flat_map(|item| item.start.into_iter().chain(item.end))
        .collect();

    let (min, max) = match (instants.iter().min(), instants.iter().max()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => {
            let half = Duration::days(settings.fallback_window_days) / 2;
            return VisibleWindow {
                start: settings.fallback_reference - half,
                end: settings.fallback_reference + half,
            };
        }
    };

    let range = max - min;
    let margin = Duration::seconds((range.num_seconds() as f64 * settings.margin_ratio) as i64);
    VisibleWindow {
        start: min - margin,
        end: max + margin,
    }
}

/// Derive the widget options for a computed window: zoom and both scroll
/// axes on, current-time indicator off, zoom-out bounded by the full window
/// span, zoom-in bounded by the configured floor (clamped so it never
/// exceeds the span itself).
pub fn widget_options(window: &VisibleWindow, settings: &ComposeSettings) -> WidgetOptions {
    let span_secs = window.span().num_seconds();
    WidgetOptions {
        zoomable: true,
        horizontal_scroll: true,
        vertical_scroll: true,
        show_current_time: false,
        zoom_min_secs: settings.zoom_floor_secs.min(span_secs),
        zoom_max_secs: span_secs,
        window: *window,
    }
}
