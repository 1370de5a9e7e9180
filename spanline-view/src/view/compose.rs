//! Composition entry point
//!
//! `compose` wires everything together: events become items, items a window
//! and options, and a render surface is mounted, drawn, and refined. The
//! returned [`Composition`] is the handle the driving shell keeps for
//! re-running refinement on lifecycle notifications.

use std::sync::atomic::{AtomicUsize, Ordering};

use spanline_parser::timeline::TimelineEvent;

use super::item::{items_from_events, TimelineItem};
use super::refine;
use super::settings::ComposeSettings;
use super::surface::{LifecycleEvent, RenderSurface};
use super::window::{visible_window, widget_options, VisibleWindow, WidgetOptions};

static SURFACE_SEQ: AtomicUsize = AtomicUsize::new(0);

/// A distinct surface identity per composition, so repeated invocations on
/// the same container never collide.
fn next_surface_id() -> String {
    let n = SURFACE_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("spanline-surface-{n}")
}

/// The live result of one composition: the derived presentation data plus
/// the identity of the surface it was drawn on. Compositions own no shared
/// state; two calls over the same events produce structurally identical but
/// fully independent results.
#[derive(Debug, Clone)]
pub struct Composition {
    pub surface_id: String,
    pub items: Vec<TimelineItem>,
    pub window: VisibleWindow,
    pub options: WidgetOptions,
    settings: ComposeSettings,
}

impl Composition {
    /// Re-run the refinement passes on a lifecycle notification. The surface
    /// handle is explicit; every event triggers the same passes since any
    /// redraw may have rebuilt the elements.
    pub fn notify(&self, surface: &mut dyn RenderSurface, _event: LifecycleEvent) {
        refine::refine(surface, &self.settings.lane_tint);
    }
}

/// Compose a timeline onto a surface.
///
/// Mounts a fresh nested surface, draws the items under computed options,
/// and immediately runs refinement for the initial `Ready`. Never fails:
/// empty event sets draw an empty timeline over the fallback window.
pub fn compose(
    events: &[TimelineEvent],
    surface: &mut dyn RenderSurface,
    settings: &ComposeSettings,
) -> Composition {
    let items = items_from_events(events);
    let window = visible_window(&items, settings);
    let options = widget_options(&window, settings);
    let surface_id = next_surface_id();

    surface.mount(&surface_id);
    surface.draw(&items, &options);

    let composition = Composition {
        surface_id,
        items,
        window,
        options,
        settings: settings.clone(),
    };
    composition.notify(surface, LifecycleEvent::Ready);
    composition
}
