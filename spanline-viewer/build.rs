use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("spanv")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "spanv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "spanv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "spanv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
