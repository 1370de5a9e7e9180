//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed, optional)
//! - Lane section (responsive height): one bordered lane per group, items
//!   positioned horizontally by their instant within the current window
//! - Axis line (1 line, fixed)
//! - Status line (1 line, fixed, optional)

use super::app::App;
use chrono::Duration;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use spanline_view::view::surface::OVERFLOW_HIDDEN_CLASS;
use spanline_view::view::{ElementContent, ItemElement, TimelineItem};

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 40;
/// Height of the axis line
const AXIS_HEIGHT: u16 = 1;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;
/// Label length a clipped element is cut to
const CLIPPED_LABEL_LEN: usize = 12;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, file_name: &str) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let mut constraints = Vec::new();
    if app.show_title_bar {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(1));
    constraints.push(Constraint::Length(AXIS_HEIGHT));
    if app.show_status_line {
        constraints.push(Constraint::Length(STATUS_LINE_HEIGHT));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let mut next = 0;
    if app.show_title_bar {
        render_title_bar(frame, chunks[next], file_name);
        next += 1;
    }
    render_lanes(frame, chunks[next], app);
    render_axis(frame, chunks[next + 1], app);
    if app.show_status_line {
        render_status_line(frame, chunks[next + 2], app);
    }
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, file_name: &str) {
    let title = format!("spanline:: {}", file_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_lanes(frame: &mut Frame, area: Rect, app: &App) {
    let lanes = app.model.lanes();
    if lanes.is_empty() {
        let paragraph = Paragraph::new("No timeline events")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    // One bordered block per lane, sized to its item count; leftover space
    // stays empty below the last lane.
    let mut constraints: Vec<Constraint> = lanes
        .iter()
        .map(|g| Constraint::Length(app.model.lane_items(g).len() as u16 + 2))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, group) in lanes.iter().enumerate() {
        render_lane(frame, chunks[i], app, group);
    }
}

fn render_lane(frame: &mut Frame, area: Rect, app: &App, group: &str) {
    let fill = app
        .surface
        .lane_for(group)
        .and_then(|l| l.fill.as_deref())
        .map(fill_color)
        .unwrap_or(Color::Reset);

    let title = if group.is_empty() { "(ungrouped)" } else { group };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().bg(fill));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .model
        .lane_items(group)
        .into_iter()
        .map(|item| item_line(app, item, inner_area.width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_area);
}

/// One positioned row for an item: padding up to its window position, a
/// marker (point or span bar), then the element's label.
fn item_line<'a>(app: &App, item: &TimelineItem, width: u16) -> Line<'a> {
    let width = width.max(1) as usize;
    let element = app.surface.element_for(item.id);
    let selected = app.model.selected() == Some(item.id);

    let col = item
        .start
        .and_then(|t| app.model.x_fraction(t))
        .map(|f| (f * (width.saturating_sub(1)) as f64) as usize);

    let mut marker = String::new();
    let pad = match col {
        Some(col) => {
            marker.push_str(&span_marker(app, item, col, width));
            col
        }
        None => {
            // Unpositioned or out-of-window items sit at the left edge.
            marker.push('·');
            0
        }
    };

    let mut spans = vec![Span::raw(" ".repeat(pad)), Span::raw(marker)];
    spans.push(Span::raw(" "));
    spans.push(label_span(element, selected));
    Line::from(spans)
}

/// Marker glyphs: a point for instants, a bar from start to end for ranges
/// (clamped to the window edge).
fn span_marker(app: &App, item: &TimelineItem, start_col: usize, width: usize) -> String {
    match item.end {
        None => "◆".to_string(),
        Some(end) => {
            let end_col = app
                .model
                .x_fraction(end)
                .map(|f| (f * (width.saturating_sub(1)) as f64) as usize)
                .unwrap_or(width.saturating_sub(1));
            let len = end_col.saturating_sub(start_col);
            if len < 2 {
                "├┤".to_string()
            } else {
                format!("├{}┤", "─".repeat(len - 1))
            }
        }
    }
}

/// The element's label: link display text when rewritten, clipped text when
/// the overflow class is still present, plain text otherwise.
fn label_span<'a>(element: Option<&ItemElement>, selected: bool) -> Span<'a> {
    let mut style = Style::default();
    if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }

    match element {
        None => Span::styled("?", style.fg(Color::DarkGray)),
        Some(el) => match &el.content {
            ElementContent::Link { display, .. } => Span::styled(
                display.clone(),
                style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
            ElementContent::Text(text) => {
                if el.has_class(OVERFLOW_HIDDEN_CLASS) {
                    Span::styled(clip(text), style)
                } else {
                    Span::styled(text.clone(), style)
                }
            }
        },
    }
}

fn clip(text: &str) -> String {
    if text.chars().count() <= CLIPPED_LABEL_LEN {
        text.to_string()
    } else {
        let cut: String = text.chars().take(CLIPPED_LABEL_LEN).collect();
        format!("{cut}…")
    }
}

fn render_axis(frame: &mut Frame, area: Rect, app: &App) {
    let window = app.model.window();
    let axis = format!(
        "◀ {}  ·  span {}  ·  {} ▶",
        window.start.format("%Y-%m-%d %H:%M:%S"),
        format_span(window.span()),
        window.end.format("%Y-%m-%d %H:%M:%S"),
    );
    let paragraph = Paragraph::new(axis).style(Style::default().fg(Color::Yellow));
    frame.render_widget(paragraph, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match app.model.selected_item() {
        Some(item) => {
            spans.push(Span::styled(
                "Selected: ",
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(
                "{}/{}",
                item.id + 1,
                app.model.items().len()
            )));
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(item.content.clone()));
            if let Some(start) = item.start {
                spans.push(Span::raw(" | "));
                spans.push(Span::raw(start.format("%Y-%m-%d %H:%M:%S").to_string()));
            }
            if let Some(end) = item.end {
                spans.push(Span::raw(" → "));
                spans.push(Span::raw(end.format("%Y-%m-%d %H:%M:%S").to_string()));
            }
            if let Some(ElementContent::Link { target, .. }) = app
                .surface
                .element_for(item.id)
                .map(|e| e.content.clone())
            {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled("link: ", Style::default().fg(Color::Yellow)));
                spans.push(Span::styled(target, Style::default().fg(Color::Blue)));
            }
        }
        None => {
            spans.push(Span::raw(
                "←/→ pan | +/- zoom | ↑/↓ select | r reset | q quit",
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}

/// Human-scale span formatting for the axis line.
fn format_span(span: Duration) -> String {
    let secs = span.num_seconds();
    if secs >= 86_400 {
        format!("{}d", secs / 86_400)
    } else if secs >= 3_600 {
        format!("{}h", secs / 3_600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

fn fill_color(fill: &str) -> Color {
    match fill {
        "light-gray" => Color::Gray,
        "dark-gray" => Color::DarkGray,
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_terminal_width() {
        assert_eq!(MIN_TERMINAL_WIDTH, 40);
    }

    #[test]
    fn test_status_line_height_constant() {
        assert_eq!(STATUS_LINE_HEIGHT, 1);
    }

    #[test]
    fn clip_leaves_short_labels_alone() {
        assert_eq!(clip("short"), "short");
    }

    #[test]
    fn clip_cuts_long_labels_with_ellipsis() {
        let clipped = clip("a very long label that would overflow");
        assert_eq!(clipped.chars().count(), CLIPPED_LABEL_LEN + 1);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn span_formatting_picks_the_largest_unit() {
        assert_eq!(format_span(Duration::days(14)), "14d");
        assert_eq!(format_span(Duration::hours(5)), "5h");
        assert_eq!(format_span(Duration::minutes(3)), "3m");
        assert_eq!(format_span(Duration::seconds(42)), "42s");
    }

    #[test]
    fn known_fills_map_to_terminal_colors() {
        assert_eq!(fill_color("light-gray"), Color::Gray);
        assert_eq!(fill_color("nonsense"), Color::Reset);
    }
}
