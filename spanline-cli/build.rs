use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("spanline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting spanline timeline files")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "spanline", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "spanline", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "spanline", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
