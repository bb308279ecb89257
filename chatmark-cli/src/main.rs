// Command-line interface for chatmark
//
// This binary converts messages between the rich editor's raw content state and
// WhatsApp-style wire markup, and shows how wire markup renders as inline elements.
//
// The conversions themselves live in the chatmark-babel crate; this is only the shell
// around it (argument parsing, config loading, file I/O, logging).
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file
// extension, while being overwrittable by an explicit --from flag.
// Usage:
//  chatmark <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  chatmark convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above
//  chatmark render <input> [--json]       - Print the inline elements of a wire file
//  chatmark --list-formats                - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  chatmark message.txt --to tag --extra-link-target _self
//
// Logging goes to stderr and is controlled by RUST_LOG (defaults to warnings only).

use chatmark_babel::format::parse_bool_option;
use chatmark_babel::{
    render_wire_as_inline_with_options, FormatRegistry, InlineElement, LinkAttributes,
    RenderOptions, WireRules,
};
use chatmark_config::{ChatmarkConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("chatmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert and render WhatsApp-style message markup")
        .long_about(
            "chatmark converts chat messages between the rich editor's raw content state\n\
            and WhatsApp-style markup (*bold*, _italic_, ~strike~, ``code``).\n\n\
            Commands:\n  \
            - convert: Transform between formats (wire, raw, tag)\n  \
            - render:  Show the inline elements a wire message displays as\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            chatmark message.txt --to raw            # Wire markup to editor JSON\n  \
            chatmark state.json --to wire -o msg.txt # Editor JSON to wire markup\n  \
            chatmark render message.txt              # List inline elements",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chatmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - wire: WhatsApp-style markup (.txt, .wa)\n  \
                    - raw:  Rich editor raw content state (.json)\n  \
                    - tag:  XML-like view of the rendered inline elements (output only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render wire markup into inline elements")
                .arg(
                    Arg::new("input")
                        .help("Wire markup file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the elements as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["convert", "render", "help"].contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let registry = build_registry(&config);

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_from_path(input) {
                    Some(detected) => detected.to_string(),
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let json = sub_matches.get_flag("json");
            handle_render_command(input, json, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Registry whose formats follow the loaded configuration.
fn build_registry(config: &ChatmarkConfig) -> FormatRegistry {
    FormatRegistry::configured(
        WireRules::from(&config.wire),
        RenderOptions::from(&config.render),
        LinkAttributes::from(&config.render.link),
    )
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    debug!(input, from, to, "converting");

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    json: bool,
    extra_params: &HashMap<String, String>,
    config: &ChatmarkConfig,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let mut options = RenderOptions::from(&config.render);
    if let Some(raw) = extra_params.get("detect-links") {
        options.detect_links = parse_bool_option("detect-links", raw).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    }

    let elements = render_wire_as_inline_with_options(source.as_str(), &options);

    if json {
        let text = serde_json::to_string_pretty(&elements).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{text}");
    } else {
        for element in &elements {
            println!("{}", describe_element(element));
        }
    }
}

/// One line per element, newlines escaped so each element stays on its line.
fn describe_element(element: &InlineElement) -> String {
    let shown = match element {
        InlineElement::Link { url, .. } => url.as_str(),
        other => other.text(),
    };
    format!("{}: {}", element.kind(), shown.replace('\n', "\\n"))
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &ChatmarkConfig) {
    println!("Available formats:\n");
    let registry = build_registry(config);
    for format in registry.formats() {
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("from");
        }
        if format.supports_serialization() {
            modes.push("to");
        }
        println!(
            "  {:<6} [{}] {} (.{})",
            format.name(),
            modes.join("/"),
            format.description(),
            format.file_extensions().join(", .")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ChatmarkConfig {
    let loader = Loader::new().with_optional_file("chatmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
