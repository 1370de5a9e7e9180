//! Main module for spanline view composition

pub mod compose;
pub mod item;
pub mod refine;
pub mod settings;
pub mod surface;
pub mod window;

pub use compose::{compose, Composition};
pub use item::{items_from_events, to_instant, TimelineItem};
pub use settings::ComposeSettings;
pub use surface::{ElementContent, ItemElement, LaneElement, LifecycleEvent, RenderSurface};
pub use window::{visible_window, widget_options, VisibleWindow, WidgetOptions};
