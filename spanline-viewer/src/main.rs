//! Standalone binary for the spanline interactive timeline viewer.
//! Usage:
//!   spanv <path> [--config <file>]

mod viewer;

use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("spanv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for spanline timelines")
        .arg(
            Arg::new("path")
                .help("Path to the timeline file to open")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a spanline configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let config = matches.get_one::<String>("config").map(PathBuf::from);
    if let Err(err) = viewer::viewer::run_viewer(PathBuf::from(path), config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
