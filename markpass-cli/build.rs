use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the built-in renderers from markpass-convert's registry
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_RENDERERS: &[&str] = &["line-breaks", "markdown", "markdown-basic"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("markpass")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown with raw HTML passthrough to HTML")
        .arg(
            Arg::new("input")
                .help("Input files (reads stdin when omitted or for '-')")
                .index(1)
                .num_args(0..)
                .action(ArgAction::Append)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout, single input only)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("renderer")
                .long("renderer")
                .short('r')
                .help("Renderer to use")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    AVAILABLE_RENDERERS,
                ))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-renderers")
                .long("list-renderers")
                .help("List available renderers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("document")
                .long("document")
                .help("Wrap the output in an article shell")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Title used when the source has no level-1 heading"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON object per input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a markpass.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity")
                .action(ArgAction::Count),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "markpass", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "markpass", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "markpass", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
