//! The render-surface capability seam
//!
//! A [`RenderSurface`] is anything that can mount a presentation surface,
//! draw a set of items, and expose its rendered elements for querying and
//! mutation. The refinement passes are written against this trait so they
//! stay testable without a terminal; the interactive viewer is one concrete
//! implementation, the test fake another.

use super::item::TimelineItem;
use super::window::WidgetOptions;

/// Class a renderer puts on item elements whose labels it would clip. The
/// refinement pass strips it so long labels render in full.
pub const OVERFLOW_HIDDEN_CLASS: &str = "overflow-hidden";

/// Notifications a live surface emits after drawing. Refinement re-runs on
/// every one of them, since a redraw may have rebuilt the elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Item set or layout changed.
    Change,
    /// Visible window moved or zoomed.
    RangeChanged,
    /// Surface dimensions changed.
    Resize,
    /// Initial draw completed.
    Ready,
}

/// What an item element currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    Text(String),
    /// A rewritten wikilink: a navigable anchor with display text.
    Link { target: String, display: String },
}

/// A rendered item element, queryable and mutable between draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemElement {
    /// Id of the [`TimelineItem`] this element renders.
    pub item_id: usize,
    /// Style classes the renderer applied.
    pub classes: Vec<String>,
    pub content: ElementContent,
}

impl ItemElement {
    /// The usual element a renderer produces: plain text, clipped label.
    pub fn clipped(item: &TimelineItem) -> Self {
        ItemElement {
            item_id: item.id,
            classes: vec![OVERFLOW_HIDDEN_CLASS.to_string()],
            content: ElementContent::Text(item.content.clone()),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A rendered background lane, one per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneElement {
    pub group: String,
    /// Background fill; `None` until the refinement pass tints it.
    pub fill: Option<String>,
}

/// Capability contract for timeline renderers.
///
/// `mount` receives a surface identity that is distinct per composition, so
/// repeated invocations against one container do not collide (last writer
/// wins if an identity is somehow reused). `draw` replaces the element sets;
/// the element accessors expose them for refinement. All queries degrade to
/// empty slices rather than erroring.
pub trait RenderSurface {
    /// Create (or replace) the nested presentation surface.
    fn mount(&mut self, surface_id: &str);

    /// Draw the item set under the given options, rebuilding the rendered
    /// elements.
    fn draw(&mut self, items: &[TimelineItem], options: &WidgetOptions);

    /// Rendered item elements, in draw order.
    fn items_mut(&mut self) -> &mut Vec<ItemElement>;

    /// Rendered background lanes, one per group in first-seen order.
    fn lanes_mut(&mut self) -> &mut Vec<LaneElement>;
}

/// Lanes in first-seen order for a set of items. Renderers share this so a
/// surface and its model agree on lane layout.
pub fn lane_groups(items: &[TimelineItem]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for item in items {
        if !groups.iter().any(|g| g == &item.group) {
            groups.push(item.group.clone());
        }
    }
    groups
}
