// Command-line interface for quichem
//
// This binary renders chemical shorthand in one of the output notations, and shows how a
// shorthand string was parsed.
//
// Its first user is the quichem LaTeX package, which shells out to `quichem <notation>` and
// pastes whatever is printed into the document. That contract shapes the defaults: the format
// is mhchem unless told otherwise, a parse failure for the LaTeX formats is printed as a
// \PackageError on stdout (the package cannot read stderr), and running the binary with no
// argument at all prints a confirmation that the installation works.
//
// Usage:
//  quichem                                          - Installation check
//  quichem <notation> [--to <format>] [-o <file>]   - Render (default)
//  quichem convert <notation> [--to <format>] [-o <file>]  - Same as above (explicit)
//  quichem inspect <notation> [<transform>]         - Show the parse (defaults to "ast-treeviz")
//  quichem --list-formats                           - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  quichem 'so4.2-' --to latex --extra-enclose false

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use quichem_babel::{parse_bool, BackendFormat, Format, FormatRegistry};
use quichem_config::{Loader, QuichemConfig};
use std::collections::HashMap;
use std::fs;

const INSTALLATION_CHECK: &str =
    "Congratulations! Your quichem installation is set up with LaTeX support.";

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
            // A following argument is the value unless it is another flag
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
    Command::new("quichem")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders chemical shorthand as HTML, LaTeX, mhchem, reStructuredText or text")
        .long_about(
            "quichem turns a compact shorthand for chemical formulas and equations into\n\
            typeset notation.\n\n\
            Shorthand:\n  \
            h2o            elements and counts, lower case\n  \
            so4.2-         '.' ends a count, '=' is a positive and '-' a negative charge\n  \
            ca'oh'2        groups are quoted, and need a count\n  \
            2h2=o2-2h2o    '=' between items is '+', '-' is the reaction arrow\n  \
            cuso4/5h2o     '/' adds water of hydration\n  \
            naq, h2;l      states follow the item, ';' forces one\n\n\
            Commands:\n  \
            - convert: Render a formula (default command)\n  \
            - inspect: Show how a formula was parsed\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quichem 'h==oh-'                       # mhchem, for the LaTeX package\n  \
            quichem cuso4/5h2o --to html           # HTML on stdout\n  \
            quichem so4.2-aq -o sulfate.tex        # LaTeX, picked from the extension\n  \
            quichem inspect ge''nh4'2o'4           # Tree view of the parse",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quichem.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log what the tool is doing to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show how a formula was parsed")
                .long_about(
                    "View the parse of a formula.\n\n\
                    Transforms (stage-format):\n  \
                    - ast-treeviz:  AST as tree visualization (default)\n  \
                    - ast-repr:     AST in bracketed notation\n  \
                    - ast-json:     AST as JSON\n  \
                    - ast-quichem:  canonical shorthand, every implicit choice spelled out\n\n\
                    Extra Parameters:\n  \
                    --extra-show-defaults   Show implicit coefficients, counts, charges and states\n  \
                    --extra-pretty false    Single-line JSON\n\n\
                    Examples:\n  \
                    quichem inspect li=s                 # Tree visualization (default)\n  \
                    quichem inspect li=s ast-quichem     # li.=;s",
                )
                .arg(
                    Arg::new("notation")
                        .help("The formula, in shorthand")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'ast-treeviz'")
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
                .about("Render a formula (default command)")
                .long_about(
                    "Render a formula in one of the output formats.\n\n\
                    The format is --to if given, else picked from the extension of the\n\
                    output file, else convert.format from the configuration (mhchem).\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    quichem convert h2o --to plain        # H₂O\n  \
                    quichem h2o --to latex -o water.tex   # 'convert' is optional",
                )
                .arg(
                    Arg::new("notation")
                        .help("The formula, in shorthand")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .long_help(
                            "Target format to render to.\n\n\
                            Available formats: html, plain, latex, mhchem, rst, quichem, repr, treeviz\n\
                            Use the format name, not the file extension.",
                        )
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
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // The LaTeX package runs the bare binary to check the installation
    if args.len() == 1 {
        println!("{INSTALLATION_CHECK}");
        return;
    }

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
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

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let notation = sub_matches
                .get_one::<String>("notation")
                .expect("notation is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .cloned()
                .unwrap_or_else(|| config.inspect.transform.clone());
            handle_inspect_command(notation, &transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let notation = sub_matches
                .get_one::<String>("notation")
                .expect("notation is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_target_format(
                sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output,
                &config,
            );
            handle_convert_command(notation, &to, output, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// `--to`, else the output file's extension, else the configured default
fn resolve_target_format(to: Option<&str>, output: Option<&str>, config: &QuichemConfig) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    if let Some(path) = output {
        if let Some(detected) = FormatRegistry::default().detect_format_from_filename(path) {
            tracing::debug!(path, format = %detected, "format detected from output file");
            return detected;
        }
    }
    config.convert.format.clone()
}

/// Handle the inspect command
fn handle_inspect_command(
    notation: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &QuichemConfig,
) {
    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(notation, transform, &params).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    notation: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &QuichemConfig,
) {
    let registry = FormatRegistry::default();

    let format = registry.get(to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let ast = match quichem_core::parse(notation) {
        Ok(ast) => ast,
        Err(e) => match format.format_error(notation, &e) {
            // The LaTeX package reads stdout, so the failure is reported there
            Some(report) => {
                tracing::debug!(error = %e, "reporting parse error in {to} markup");
                emit(&report, output);
                return;
            }
            None => {
                eprintln!("Parse error: {e}");
                std::process::exit(1);
            }
        },
    };

    let format_options = build_convert_params(to, config, extra_params);

    let text = registry
        .serialize_with_options(&ast, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    emit(&text, output);
}

fn emit(text: &str, output: Option<&str>) {
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{text}"),
    }
}

fn is_display_backend(name: &str) -> bool {
    BackendFormat::all()
        .iter()
        .any(|backend| backend.name() == name)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description())
            .unwrap_or("");
        println!("  {format_name:<10}{description}");
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> QuichemConfig {
    let loader = Loader::new().with_optional_file("quichem.toml");
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

/// Moves the extras that are configuration keys into `config`.
///
/// What remains in `extra_params` is passed to the format untouched.
fn apply_config_overrides(config: &mut QuichemConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("show-defaults") {
        config.inspect.treeviz.show_defaults = parse_bool_arg("show-defaults", &raw);
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.inspect.json.pretty = parse_bool_arg("pretty", &raw);
    }
    if let Some(raw) = extra_params.remove("enclose") {
        config.convert.enclose = parse_bool_arg("enclose", &raw);
    }
}

fn build_inspect_params(
    config: &QuichemConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "show-defaults".to_string(),
        config.inspect.treeviz.show_defaults.to_string(),
    );
    params.insert("pretty".to_string(), config.inspect.json.pretty.to_string());

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

/// Options for the target format: the configured settings that apply to it, then the extras.
fn build_convert_params(
    to: &str,
    config: &QuichemConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = if is_display_backend(to) {
        config.convert.format_options()
    } else {
        HashMap::new()
    };

    if to == "treeviz" {
        params.insert(
            "show-defaults".to_string(),
            config.inspect.treeviz.show_defaults.to_string(),
        );
    }

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    parse_bool(raw).unwrap_or_else(|| {
        eprintln!("Invalid boolean value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
