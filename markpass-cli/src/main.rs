// Command-line interface for markpass
//
// This binary renders Markdown (with embedded raw HTML) to HTML fragments using the
// markpass-convert renderers. Settings come from the embedded defaults, an optional
// ./markpass.toml, an explicit --config file and finally the command-line flags, in that order.
//
// Usage:
//  markpass [INPUT]...                     - Render files (stdin when none, or for "-")
//  markpass doc.md -o doc.html             - Write to a file instead of stdout
//  markpass doc.md -r line-breaks          - Pick a renderer by name
//  markpass doc.md --document              - Wrap the output in the article shell
//  markpass a.md b.md --json               - One {"title", "body"} JSON object per input
//  markpass --list-renderers               - List available renderers
//
// Logging goes to stderr. MARKPASS_LOG takes an env-filter directive; otherwise -v raises
// the level from warn to info, -vv to debug.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use markpass_config::{ConfigError, Loader, MarkpassConfig};
use markpass_convert::{
    render_document, CachedRenderer, DocumentOptions, Renderer, RendererRegistry,
};
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "MARKPASS_LOG";
const STDIN_INPUT: &str = "-";

fn build_cli() -> Command {
    Command::new("markpass")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown with raw HTML passthrough to HTML")
        .long_about(
            "markpass renders Markdown to an HTML fragment.\n\n\
            Raw HTML containers (div, section, figure, ...), iframes, videos and void tags\n\
            such as img are passed through byte for byte; everything around them gets the\n\
            Markdown treatment. Nothing is escaped or sanitized.\n\n\
            Examples:\n  \
            markpass post.md                        # Render to stdout\n  \
            cat post.md | markpass                  # Read from stdin\n  \
            markpass post.md -o post.html           # Render to a file\n  \
            markpass post.md --document             # Article shell with a title header\n  \
            markpass *.md --json                    # One JSON object per input",
        )
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
                .value_name("PATH")
                .help("Output file path (defaults to stdout, single input only)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("renderer")
                .long("renderer")
                .short('r')
                .value_name("NAME")
                .help("Renderer to use (overrides convert.renderer)")
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
                .help("Wrap the output in an article shell with a title header")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .help("Title used when the source has no level-1 heading"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one {\"title\", \"body\"} JSON object per input")
                .action(ArgAction::SetTrue)
                .conflicts_with("document"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markpass.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_count("verbose"));

    let registry = RendererRegistry::default();
    if matches.get_flag("list-renderers") {
        handle_list_renderers_command(&registry);
        return;
    }

    let inputs: Vec<String> = matches
        .get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    if output.is_some() && inputs.len() > 1 {
        build_cli()
            .error(
                ErrorKind::ArgumentConflict,
                "--output can only be used with a single input",
            )
            .exit();
    }

    let config = load_cli_config(&matches);
    tracing::debug!(?config, "configuration loaded");

    let base = registry.get(&config.convert.renderer).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Use --list-renderers to see the available renderers");
        std::process::exit(1);
    });
    let renderer: Box<dyn Renderer + '_> = match config.cache.capacity_if_enabled() {
        Some(capacity) => Box::new(CachedRenderer::new(base, capacity)),
        None => Box::new(base),
    };

    let sources = read_inputs(&inputs);
    tracing::info!(
        renderer = renderer.name(),
        inputs = sources.len(),
        "rendering"
    );

    if matches.get_flag("json") {
        let lines = render_json_lines(&sources, renderer.as_ref(), &config);
        write_output(output, &lines.join("\n"));
        return;
    }

    let rendered: Vec<String> = sources
        .iter()
        .map(|source| render_one(source, renderer.as_ref(), &config))
        .collect();
    write_output(output, &rendered.join("\n"));
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn load_cli_config(matches: &ArgMatches) -> MarkpassConfig {
    let loader = Loader::new().with_optional_file("markpass.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    apply_flag_overrides(loader, matches)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

fn apply_flag_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, ConfigError> {
    if let Some(renderer) = matches.get_one::<String>("renderer") {
        loader = loader.set_override("convert.renderer", renderer.as_str())?;
    }
    if matches.get_flag("document") {
        loader = loader.set_override("document.wrap", true)?;
    }
    if let Some(title) = matches.get_one::<String>("title") {
        loader = loader.set_override("document.default_title", title.as_str())?;
    }
    Ok(loader)
}

/// Read every input, with stdin standing in for "-" or for an empty list.
fn read_inputs(inputs: &[String]) -> Vec<String> {
    if inputs.is_empty() {
        return vec![read_stdin()];
    }

    inputs
        .iter()
        .map(|path| {
            if path == STDIN_INPUT {
                return read_stdin();
            }
            fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading file '{path}': {e}");
                std::process::exit(1);
            })
        })
        .collect()
}

fn read_stdin() -> String {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    });
    source
}

fn render_one(source: &str, renderer: &dyn Renderer, config: &MarkpassConfig) -> String {
    if !config.document.wrap {
        return renderer.render(source);
    }
    let options = DocumentOptions::from(&config.document);
    render_document(source, renderer, &options).to_html()
}

/// One serialized `{"title", "body"}` object per source.
fn render_json_lines(
    sources: &[String],
    renderer: &dyn Renderer,
    config: &MarkpassConfig,
) -> Vec<String> {
    let options = DocumentOptions::from(&config.document);
    sources
        .iter()
        .map(|source| {
            let document = render_document(source, renderer, &options);
            serde_json::to_string(&document).unwrap_or_else(|e| {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            })
        })
        .collect()
}

fn write_output(output: Option<&str>, contents: &str) {
    match output {
        Some(path) => {
            fs::write(path, contents).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{contents}"),
    }
}

/// Handle the list-renderers command
fn handle_list_renderers_command(registry: &RendererRegistry) {
    println!("Available renderers:\n");
    for name in registry.list_renderers() {
        if let Ok(renderer) = registry.get(&name) {
            println!("  {name:<16}{}", renderer.description());
        }
    }
}
