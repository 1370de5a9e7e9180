//! Application state and input handling
//!
//! App owns the model, the terminal render surface, and the composition
//! handle. Key handling mutates the model; window changes raise the
//! RangeChanged lifecycle notification so refinement re-runs, mirroring the
//! widget contract the composition layer expects.

use crossterm::event::{KeyCode, KeyEvent};
use spanline_view::view::{Composition, LifecycleEvent, RenderSurface};

use super::model::Model;
use super::surface::TerminalSurface;

pub struct App {
    pub model: Model,
    pub surface: TerminalSurface,
    pub composition: Composition,
    pub show_title_bar: bool,
    pub show_status_line: bool,
}

impl App {
    pub fn new(model: Model, surface: TerminalSurface, composition: Composition) -> Self {
        App {
            model,
            surface,
            composition,
            show_title_bar: true,
            show_status_line: true,
        }
    }

    /// Handle one key press. Quit keys are handled by the event loop; this
    /// covers navigation only.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.model.zoom_in();
                self.range_changed();
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.model.zoom_out();
                self.range_changed();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.model.pan_left();
                self.range_changed();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.model.pan_right();
                self.range_changed();
            }
            KeyCode::Down | KeyCode::Char('j') => self.model.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.model.select_prev(),
            KeyCode::Char('r') => {
                self.model.reset_window();
                self.range_changed();
            }
            _ => {}
        }
    }

    /// The terminal resized; the renderer redraws, so refinement re-runs.
    pub fn resized(&mut self) {
        self.redraw(LifecycleEvent::Resize);
    }

    fn range_changed(&mut self) {
        self.redraw(LifecycleEvent::RangeChanged);
    }

    /// Redraw the surface's elements and notify the composition so the
    /// refinement passes run against the fresh elements.
    fn redraw(&mut self, event: LifecycleEvent) {
        self.surface
            .draw(&self.composition.items, &self.composition.options);
        self.composition.notify(&mut self.surface, event);
    }
}
