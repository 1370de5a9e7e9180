//! Post-draw refinement passes
//!
//! Three element adjustments run after every draw and on every lifecycle
//! notification: strip the overflow-hiding class so long labels are not
//! clipped, tint background lanes, and rewrite names carrying `[[...]]`
//! wikilinks into link elements. The surface handle is passed in explicitly;
//! there is no global surface lookup.

use spanline_parser::timeline::link;

use super::surface::{ElementContent, RenderSurface, OVERFLOW_HIDDEN_CLASS};

/// Run all refinement passes against a surface.
///
/// Every pass is a no-op on elements it does not apply to, and all of them
/// are idempotent, so re-running on each lifecycle event is safe.
pub fn refine(surface: &mut dyn RenderSurface, lane_tint: &str) {
    strip_overflow(surface);
    tint_lanes(surface, lane_tint);
    rewrite_links(surface);
}

/// Remove the overflow-hiding class from every item element.
pub fn strip_overflow(surface: &mut dyn RenderSurface) {
    for element in surface.items_mut() {
        element.classes.retain(|c| c != OVERFLOW_HIDDEN_CLASS);
    }
}

/// Fill every background lane with the configured tint.
pub fn tint_lanes(surface: &mut dyn RenderSurface, tint: &str) {
    for lane in surface.lanes_mut() {
        lane.fill = Some(tint.to_string());
    }
}

/// Replace the text of any element whose name embeds a wikilink with a link
/// element carrying the target and display text. Elements already rewritten
/// or without a link are left alone.
pub fn rewrite_links(surface: &mut dyn RenderSurface) {
    for element in surface.items_mut() {
        if let ElementContent::Text(text) = &element.content {
            if let Some(link) = link::first_link(text) {
                element.content = ElementContent::Link {
                    target: link.target,
                    display: link.display,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::item::items_from_events;
    use crate::view::surface::{ItemElement, LaneElement, LifecycleEvent};
    use crate::view::window::WidgetOptions;
    use crate::view::TimelineItem;

    /// Minimal in-memory surface for exercising the passes.
    #[derive(Default)]
    struct MemorySurface {
        items: Vec<ItemElement>,
        lanes: Vec<LaneElement>,
    }

    impl RenderSurface for MemorySurface {
        fn mount(&mut self, _surface_id: &str) {}

        fn draw(&mut self, items: &[TimelineItem], _options: &WidgetOptions) {
            self.items = items.iter().map(ItemElement::clipped).collect();
            self.lanes = crate::view::surface::lane_groups(items)
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

    fn drawn(source: &str) -> MemorySurface {
        let items = items_from_events(&spanline_parser::timeline::parse(source));
        let settings = crate::view::ComposeSettings::default();
        let window = crate::view::visible_window(&items, &settings);
        let options = crate::view::widget_options(&window, &settings);
        let mut surface = MemorySurface::default();
        surface.draw(&items, &options);
        surface
    }

    #[test]
    fn strip_overflow_clears_the_class_everywhere() {
        let mut surface = drawn("2024-01-01 A long label indeed\n2024-01-02 B");
        strip_overflow(&mut surface);
        assert!(surface
            .items
            .iter()
            .all(|e| !e.has_class(OVERFLOW_HIDDEN_CLASS)));
    }

    #[test]
    fn tint_fills_every_lane() {
        let mut surface = drawn("#One\n2024-01-01 A\n#Two\n2024-01-02 B");
        tint_lanes(&mut surface, "light-gray");
        assert_eq!(surface.lanes.len(), 2);
        assert!(surface
            .lanes
            .iter()
            .all(|l| l.fill.as_deref() == Some("light-gray")));
    }

    #[test]
    fn piped_wikilink_becomes_anchor_with_display_text() {
        let mut surface = drawn("2024-01-01 [[Target|Display]]");
        rewrite_links(&mut surface);
        assert_eq!(
            surface.items[0].content,
            ElementContent::Link {
                target: "Target".to_string(),
                display: "Display".to_string(),
            }
        );
    }

    #[test]
    fn bare_wikilink_uses_target_as_display() {
        let mut surface = drawn("2024-01-01 [[Target]]");
        rewrite_links(&mut surface);
        assert_eq!(
            surface.items[0].content,
            ElementContent::Link {
                target: "Target".to_string(),
                display: "Target".to_string(),
            }
        );
    }

    #[test]
    fn plain_names_are_untouched() {
        let mut surface = drawn("2024-01-01 Launch");
        rewrite_links(&mut surface);
        assert_eq!(
            surface.items[0].content,
            ElementContent::Text("Launch".to_string())
        );
    }

    #[test]
    fn refine_is_idempotent_across_lifecycle_events() {
        let mut surface = drawn("#G\n2024-01-01 [[T|D]]\n2024-01-02 plain");
        for _ in [
            LifecycleEvent::Ready,
            LifecycleEvent::Change,
            LifecycleEvent::RangeChanged,
            LifecycleEvent::Resize,
        ] {
            refine(&mut surface, "light-gray");
        }
        let first = surface.items.clone();
        refine(&mut surface, "light-gray");
        assert_eq!(surface.items, first);
    }

    #[test]
    fn refine_on_empty_surface_is_a_noop() {
        let mut surface = MemorySurface::default();
        refine(&mut surface, "light-gray");
        assert!(surface.items.is_empty());
        assert!(surface.lanes.is_empty());
    }
}
