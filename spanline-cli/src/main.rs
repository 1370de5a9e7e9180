//! Command-line interface for spanline
//! This binary parses timeline notation files and prints the parsed events,
//! the composed widget items, the computed visible window, or the per-line
//! parse report as JSON. The interactive rendering lives in `spanv`.
//!
//! Usage:
//!   spanline `<path>` [--format `<format>`] [--config `<config>`]

use clap::{Arg, Command, ValueHint};
use std::process;

use spanline_config::Loader;
use spanline_parser::timeline::{parse_report, ParseReport};
use spanline_view::view::{items_from_events, visible_window, widget_options, ComposeSettings};

fn main() {
    let matches = Command::new("spanline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting spanline timeline files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the timeline file")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: events-json, items-json, window-json, report")
                .default_value("events-json"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a spanline configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches.get_one::<String>("format").unwrap();
    let config = matches.get_one::<String>("config");
    handle_execute_command(path, format, config.map(String::as_str));
}

/// Read, parse, and format one timeline file.
fn handle_execute_command(path: &str, format: &str, config_path: Option<&str>) {
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(1);
    });

    let report = parse_report(&content);

    let formatted = match format {
        "events-json" => serde_json::to_string_pretty(&report.events),
        "report" => serde_json::to_string_pretty(&report),
        "items-json" => serde_json::to_string_pretty(&compose_items(&report, config_path).0),
        "window-json" => serde_json::to_string_pretty(&compose_items(&report, config_path).1),
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: events-json, items-json, window-json, report");
            process::exit(1);
        }
    };
    let formatted = formatted.unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        process::exit(1);
    });

    println!("{}", formatted);
}

/// Derive the presentation data the way compose() would, without mounting a
/// surface: items with synthetic ids plus the options bag around the
/// computed window.
fn compose_items(
    report: &ParseReport,
    config_path: Option<&str>,
) -> (
    Vec<spanline_view::view::TimelineItem>,
    spanline_view::view::WidgetOptions,
) {
    let settings = load_settings(config_path);
    let items = items_from_events(&report.events);
    let window = visible_window(&items, &settings);
    let options = widget_options(&window, &settings);
    (items, options)
}

fn load_settings(config_path: Option<&str>) -> ComposeSettings {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    loader
        .build()
        .and_then(|config| config.compose_settings())
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        })
}
