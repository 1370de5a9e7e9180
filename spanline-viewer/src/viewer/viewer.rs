//! Viewer entry point and terminal event loop
//!
//! Loads the timeline file, composes it onto the terminal surface, and runs
//! the crossterm/ratatui loop. Quit on `q` or Ctrl-C; resize events trigger
//! the Resize lifecycle notification before the next frame.

use crossterm::event::{self, Event, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use spanline_config::Loader;
use spanline_parser::timeline::parse;
use spanline_view::view::compose;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use super::app::App;
use super::model::Model;
use super::surface::TerminalSurface;
use super::ui;

/// Run the viewer for the given timeline file
pub fn run_viewer(file_path: PathBuf, config_path: Option<PathBuf>) -> io::Result<()> {
    // Load the file
    let content = fs::read_to_string(&file_path)?;
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    // Layer configuration: embedded defaults, then the optional user file
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    let config = loader
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("config error: {e}")))?;
    let settings = config
        .compose_settings()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("config error: {e}")))?;

    // Parse and compose. Parsing never fails; an empty or garbage file just
    // composes an empty timeline over the fallback window.
    let events = parse(&content);
    let mut surface = TerminalSurface::new();
    let composition = compose(&events, &mut surface, &settings);

    let model = Model::new(composition.items.clone(), composition.options);
    let mut app = App::new(model, surface, composition);
    app.show_title_bar = config.viewer.show_title_bar;
    app.show_status_line = config.viewer.show_status_line;

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, &file_name);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    file_name: &str,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app, file_name);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(key, app) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    // Re-run refinement; the next draw() uses new dimensions
                    app.resized();
                }
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}

fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    use crossterm::event::KeyCode;
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => {
            app.handle_key(key);
            false
        }
    }
}
