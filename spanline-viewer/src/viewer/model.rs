//! Data model for the timeline viewer
//!
//! The Model struct holds the pure application state:
//! - The composed timeline items and their lane layout
//! - The current view window (mutated by zoom and pan)
//! - The current item selection
//!
//! This separation of concerns makes testing easier: the model is pure data
//! and can be tested independently of rendering and UI logic.

use chrono::{Duration, NaiveDateTime};
use spanline_view::view::surface::lane_groups;
use spanline_view::view::{TimelineItem, VisibleWindow, WidgetOptions};

/// Fraction of the current span moved by one pan step.
const PAN_STEP_RATIO: f64 = 0.1;
/// Span multiplier for one zoom-in step.
const ZOOM_IN_FACTOR: f64 = 0.8;
/// Span multiplier for one zoom-out step.
const ZOOM_OUT_FACTOR: f64 = 1.25;

/// The core data model
#[derive(Debug, Clone)]
pub struct Model {
    /// Composed items, in input order; item id == index.
    items: Vec<TimelineItem>,
    /// Lane groups in first-seen order.
    lanes: Vec<String>,
    /// Widget options from composition; zoom bounds live here.
    options: WidgetOptions,
    /// Current view window; starts at the composed window.
    window: VisibleWindow,
    /// Selected item index, if any.
    selected: Option<usize>,
}

impl Model {
    pub fn new(items: Vec<TimelineItem>, options: WidgetOptions) -> Self {
        let lanes = lane_groups(&items);
        Model {
            items,
            lanes,
            window: options.window,
            options,
            selected: None,
        }
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn lanes(&self) -> &[String] {
        &self.lanes
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// Items belonging to one lane, in input order.
    pub fn lane_items(&self, group: &str) -> Vec<&TimelineItem> {
        self.items.iter().filter(|i| i.group == group).collect()
    }

    // ========== Selection ==========

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&TimelineItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Cycle selection forward; wraps around and starts at the first item.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        });
    }

    /// Cycle selection backward; wraps around and starts at the last item.
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        });
    }

    // ========== Zoom and pan ==========

    /// Zoom in one step, bounded below by the options' zoom floor.
    pub fn zoom_in(&mut self) {
        let span = self.window.span().num_seconds();
        let next = ((span as f64 * ZOOM_IN_FACTOR) as i64).max(self.options.zoom_min_secs);
        self.set_span_around_center(next);
    }

    /// Zoom out one step, bounded above by the full composed window span.
    pub fn zoom_out(&mut self) {
        let span = self.window.span().num_seconds();
        let next = ((span as f64 * ZOOM_OUT_FACTOR) as i64).min(self.options.zoom_max_secs);
        self.set_span_around_center(next);
    }

    /// Shift the window one step into the past.
    pub fn pan_left(&mut self) {
        let step = self.pan_step();
        self.window = VisibleWindow {
            start: self.window.start - step,
            end: self.window.end - step,
        };
    }

    /// Shift the window one step into the future.
    pub fn pan_right(&mut self) {
        let step = self.pan_step();
        self.window = VisibleWindow {
            start: self.window.start + step,
            end: self.window.end + step,
        };
    }

    /// Restore the composed window.
    pub fn reset_window(&mut self) {
        self.window = self.options.window;
    }

    fn pan_step(&self) -> Duration {
        Duration::seconds(
            ((self.window.span().num_seconds() as f64) * PAN_STEP_RATIO) as i64,
        )
    }

    fn set_span_around_center(&mut self, span_secs: i64) {
        let center = self.window.start + self.window.span() / 2;
        let half = Duration::seconds(span_secs / 2);
        self.window = VisibleWindow {
            start: center - half,
            end: center + half,
        };
    }

    // ========== Position mapping ==========

    /// Horizontal position of an instant within the current window, as a
    /// fraction in `[0, 1]`. `None` when the instant is outside the window
    /// or the window is degenerate.
    pub fn x_fraction(&self, t: NaiveDateTime) -> Option<f64> {
        let span = self.window.span().num_seconds();
        if span <= 0 {
            return None;
        }
        let offset = (t - self.window.start).num_seconds();
        if offset < 0 || offset > span {
            return None;
        }
        Some(offset as f64 / span as f64)
    }
}
