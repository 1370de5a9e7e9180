//! Terminal implementation of the render-surface contract
//!
//! The terminal renderer keeps its rendered elements as plain data; the ui
//! module reads them each frame. Labels start out clipped (the overflow
//! class) exactly like the upstream widget's default; the refinement pass
//! strips that class so long names draw in full.

use spanline_view::view::surface::lane_groups;
use spanline_view::view::{ItemElement, LaneElement, RenderSurface, TimelineItem, WidgetOptions};

/// The viewer's render surface: a mounted identity plus the element sets the
/// refinement passes query and mutate.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    surface_id: Option<String>,
    items: Vec<ItemElement>,
    lanes: Vec<LaneElement>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface_id(&self) -> Option<&str> {
        self.surface_id.as_deref()
    }

    /// Element for a given item id, if drawn.
    pub fn element_for(&self, item_id: usize) -> Option<&ItemElement> {
        self.items.iter().find(|e| e.item_id == item_id)
    }

    /// Lane element for a group, if drawn.
    pub fn lane_for(&self, group: &str) -> Option<&LaneElement> {
        self.lanes.iter().find(|l| l.group == group)
    }
}

impl RenderSurface for TerminalSurface {
    fn mount(&mut self, surface_id: &str) {
        // Remounting replaces the previous surface; last writer wins.
        self.surface_id = Some(surface_id.to_string());
        self.items.clear();
        self.lanes.clear();
    }

    fn draw(&mut self, items: &[TimelineItem], _options: &WidgetOptions) {
        self.items = items.iter().map(ItemElement::clipped).collect();
        self.lanes = lane_groups(items)
            .into_iter()
            .map(|group| LaneElement { group, fill: None })
            .collect();
    }

    fn items_mut(&mut self) -> &mut Vec<ItemElement> {
        &mut self.items
    }

    fn lanes_mut(&mut self) -> &mut Vec<LaneElement> {
        &mut self.lanes
    }
}
