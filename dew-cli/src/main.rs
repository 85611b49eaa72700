// Command-line interface for DewBloom module content
//
// This binary converts, inspects and prepares the content files the CMS stores for a course
// module. All of the work is done by dew-babel; this crate reads files, layers configuration
// and reports errors.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension
// (.json is structured, .tiptap is the editor document) and can be overridden with --from.
// Usage:
//  dew <input> --to <format> [--from <format>] [--output <file>]          - Convert between formats (default)
//  dew convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  dew inspect <path> [<transform>]       - Execute a transform (defaults to "structured-treeviz")
//  dew normalize <input>                  - Module content as the CMS persists it
//  dew paginate <input> [--boxes-per-page <n>] - Theory save payload with its pages
//  dew --list-formats                     - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  dew module.json --to html --extra-show-answers false --extra-standalone

mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use dew_babel::transforms::{normalize_module_content, theory_save_payload};
use dew_babel::FormatRegistry;
use dew_config::{DewConfig, Loader, PROJECT_CONFIG_FILE};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["inspect", "convert", "normalize", "paginate", "help"];

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

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

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

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Module content file (.json or .tiptap)")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("dew")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert and inspect DewBloom module content")
        .long_about(
            "dew works with the content files of DewBloom course modules.\n\n\
            Commands:\n  \
            - convert:   Transform between formats (structured, tiptap, html, treeviz)\n  \
            - inspect:   View the persisted, editor or paginated form of a module\n  \
            - normalize: Rewrite editor documents as structured content\n  \
            - paginate:  Split a theory module into pages\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            dew inspect module.json                    # Outline of the content\n  \
            dew lesson.tiptap --to structured          # Editor document to sections\n  \
            dew module.json --to html -o preview.html  # Render the module\n  \
            dew paginate theory.json --boxes-per-page 2",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List conversion formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a dew.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect a module content file")
                .long_about(
                    "View a module content file after save normalization.\n\n\
                    Transforms:\n  \
                    - structured-treeviz: outline of the content (default)\n  \
                    - structured-json:    content as the CMS persists it\n  \
                    - rich-json:          content as the editor loads it\n  \
                    - pages-json:         pages of a theory module\n\n\
                    Examples:\n  \
                    dew inspect lesson.tiptap\n  \
                    dew inspect theory.json pages-json --extra-boxes-per-page 2",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'structured-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between content formats (default command)")
                .long_about(
                    "Convert module content between formats.\n\n\
                    Supported formats:\n  \
                    - structured: persisted sections JSON (.json)\n  \
                    - tiptap:     editor document JSON (.tiptap)\n  \
                    - html:       rendered content (.html, output only)\n  \
                    - treeviz:    outline (.tree, output only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    dew convert lesson.tiptap --to structured\n  \
                    dew module.json --to tiptap -o module.tiptap\n  \
                    dew module.json --to html --extra-standalone -o preview.html",
                )
                .arg(input_arg())
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
            Command::new("normalize")
                .about("Rewrite editor documents in a module as structured content")
                .long_about(
                    "Applies the save normalization of the CMS: an editor document becomes a\n\
                    sections document, and editor documents inside info boxes are converted\n\
                    in place. Anything else is printed unchanged.\n\n\
                    Examples:\n  \
                    dew normalize lesson.tiptap\n  \
                    dew normalize theory.json > theory.normalized.json",
                )
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("paginate")
                .about("Print the save payload of a theory module")
                .long_about(
                    "Normalizes a theory module and splits its info boxes into pages.\n\
                    Prints the content (with boxesPerPage set) and its pages as submodules.\n\
                    The page size comes from the module itself, then --boxes-per-page,\n\
                    then theory.boxes_per_page in the configuration.\n\n\
                    Examples:\n  \
                    dew paginate theory.json\n  \
                    dew paginate theory.json --boxes-per-page 3",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("boxes-per-page")
                        .long("boxes-per-page")
                        .value_name("N")
                        .help("Boxes per page when the module stores none")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A file as first argument means the convert subcommand was left out
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
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

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(matches.get_flag("verbose"), &config.logging.level);
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required_input(sub_matches);
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required_input(sub_matches);
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => {
                    let registry = FormatRegistry::default();
                    match registry.detect_format_from_filename(input) {
                        Some(detected) => detected,
                        None => {
                            eprintln!("Error: Could not detect format from filename '{input}'");
                            eprintln!("Please specify --from explicitly");
                            std::process::exit(1);
                        }
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("normalize", sub_matches)) => {
            handle_normalize_command(required_input(sub_matches), &config);
        }
        Some(("paginate", sub_matches)) => {
            let boxes_per_page = sub_matches.get_one::<usize>("boxes-per-page").copied();
            handle_paginate_command(required_input(sub_matches), boxes_per_page, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required_input(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .expect("input is required")
}

/// Install the stderr subscriber. RUST_LOG wins over the configured level.
fn init_logging(verbose: bool, configured_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(configured_level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn read_json(path: &str) -> Value {
    let source = read_source(path);
    serde_json::from_str(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: '{path}' is not valid JSON: {e}");
        std::process::exit(1);
    })
}

fn print_json(value: &Value, config: &DewConfig) {
    let text = transforms::to_json_string(value, config.convert.json.pretty).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    print!("{text}");
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &DewConfig,
) {
    let source = read_source(path);
    let params = build_inspect_params(config, extra_params);
    tracing::debug!(path, transform, "inspecting module content");

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &DewConfig,
) {
    let registry = FormatRegistry::default();

    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = read_source(input);
    tracing::debug!(input, from, to, "converting module content");

    let content = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let format_options = convert_params(to, config, extra_params);
    let mut text = registry
        .serialize_with_options(&content, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::info!(path, format = to, "wrote converted content");
        }
        None => print!("{text}"),
    }
}

/// Handle the normalize command
fn handle_normalize_command(input: &str, config: &DewConfig) {
    let value = read_json(input);
    print_json(&normalize_module_content(&value), config);
}

/// Handle the paginate command
fn handle_paginate_command(input: &str, boxes_per_page: Option<usize>, config: &DewConfig) {
    let value = read_json(input);
    let per_page = boxes_per_page.unwrap_or_else(|| config.theory.effective_boxes_per_page());

    match theory_save_payload(&value, per_page) {
        Some(payload) => print_json(&payload, config),
        None => {
            eprintln!("Error: '{input}' is not a theory module (no infoBoxes)");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:\n");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            let mut modes = Vec::new();
            if format.supports_parsing() {
                modes.push("read");
            }
            if format.supports_serialization() {
                modes.push("write");
            }
            println!(
                "  {format_name:<12} {:<10} .{:<14} {}",
                modes.join("/"),
                format.file_extensions().join(", ."),
                format.description()
            );
        }
    }

    println!("\nInspect transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DewConfig {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
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

fn apply_config_overrides(config: &mut DewConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["show-answers", "show-correct-answers"]) {
        config.render.html.show_correct_answers = parse_bool_arg("show-answers", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["standalone"]) {
        config.render.html.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["title"]) {
        config.render.html.title = raw;
    }
    if let Some(raw) = take_override(extra_params, &["pretty"]) {
        config.convert.json.pretty = parse_bool_arg("pretty", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["boxes-per-page"]) {
        config.theory.boxes_per_page = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid value '{raw}' for --extra-boxes-per-page");
            std::process::exit(1);
        });
    }
}

fn build_inspect_params(
    config: &DewConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = config.convert.json.to_params();
    params.insert(
        "boxes-per-page".to_string(),
        config.theory.effective_boxes_per_page().to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

/// Serialize options for the target format: configured values first, then --extra-* params
fn convert_params(
    to: &str,
    config: &DewConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = match to {
        "html" => config.render.html.to_params(),
        "structured" | "tiptap" => config.convert.json.to_params(),
        _ => HashMap::new(),
    };

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
