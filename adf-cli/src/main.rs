//! Command-line interface for ADF documents
//! This binary validates ADF JSON files and converts them to HTML, Markdown or normalized JSON.
//!
//! Usage:
//!   adf validate `<path>` [--strict] [--json]                  - Check a document's structure
//!   adf convert `<path>` [--to `<format>`] [--output `<file>`]   - Convert a document
//!   adf formats                                               - List available formats
//!
//! Every command accepts `--config <file>` to layer a TOML file over the built-in defaults.
//! Diagnostics go to stderr; set `ADF_LOG` (e.g. `ADF_LOG=debug`) to see more of them.

use adf_babel::{FormatRegistry, HtmlFormat};
use adf_config::{AdfConfig, Loader};
use adf_core::loader::{self, FileType};
use adf_core::{validate, Document, ValidationResult};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("adf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for validating and converting Atlassian Document Format files")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("validate")
                .about("Check the structure of an ADF document")
                .arg(
                    Arg::new("path")
                        .help("Path to the ADF JSON file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on warnings too")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the validation result as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an ADF document to another format")
                .arg(
                    Arg::new("path")
                        .help("Path to the ADF JSON file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Target format (default: from the output extension, then config)")
                        .value_parser(["html", "markdown", "json"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout"),
                )
                .arg(
                    Arg::new("no-styles")
                        .long("no-styles")
                        .help("Emit an HTML fragment without the standalone page and stylesheet")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Convert even if validation fails")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("fallback")
                        .long("fallback")
                        .help("Render unparseable input as an error document instead of failing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing();

    let Some((command, sub)) = matches.subcommand() else {
        unreachable!("clap requires a subcommand");
    };
    let config = load_config(sub.get_one::<String>("config"));

    match command {
        "validate" => handle_validate_command(sub, &config),
        "convert" => handle_convert_command(sub, &config),
        "formats" => handle_formats_command(&config),
        _ => unreachable!("unknown subcommand {}", command),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ADF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&String>) -> AdfConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Read an ADF source file, refusing Markdown input
fn read_source(path: &str) -> String {
    if loader::detect_file_type(path) == FileType::Markdown {
        eprintln!(
            "Markdown input is not supported: {} (only ADF JSON can be read)",
            path
        );
        std::process::exit(1);
    }
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        std::process::exit(1);
    })
}

fn print_issues(result: &ValidationResult) {
    for issue in &result.errors {
        eprintln!("error: {}", issue);
    }
    for issue in &result.warnings {
        eprintln!("warning: {}", issue);
    }
}

/// Handle the validate command
fn handle_validate_command(matches: &ArgMatches, config: &AdfConfig) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let strict = matches.get_flag("strict") || config.validation.strict;

    let source = read_source(path);
    let value = loader::parse_value(&source).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    });

    let result = validate(&value);
    tracing::info!(path = %path, strict, "validation finished");

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
            eprintln!("Error formatting result: {}", e);
            std::process::exit(1);
        });
        println!("{}", json);
    } else {
        print_issues(&result);
        if result.passes(strict) {
            println!("{}: valid", path);
        } else {
            println!(
                "{}: invalid ({} errors, {} warnings)",
                path,
                result.errors.len(),
                result.warnings.len()
            );
        }
    }

    if !result.passes(strict) {
        std::process::exit(1);
    }
}

/// Load, check and return the document to convert
fn load_for_conversion(path: &str, matches: &ArgMatches, config: &AdfConfig) -> Document {
    let source = read_source(path);

    let value = match loader::parse_value(&source) {
        Ok(value) => value,
        Err(e) if matches.get_flag("fallback") => {
            tracing::warn!(path = %path, error = %e, "rendering fallback document");
            return loader::fallback_document(&source, &e.to_string());
        }
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    };

    let result = validate(&value);
    if !result.passes(config.validation.strict) {
        print_issues(&result);
        if !matches.get_flag("force") {
            eprintln!("{}: refusing to convert an invalid document (use --force)", path);
            std::process::exit(1);
        }
        tracing::warn!(path = %path, "converting invalid document");
    }

    Document::from_value(value)
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &AdfConfig) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let output = matches.get_one::<String>("output");

    let mut html_options = config.export.html_options();
    if matches.get_flag("no-styles") {
        html_options.include_styles = false;
    }
    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormat::new(html_options));

    let target = match matches.get_one::<String>("to") {
        Some(to) => to.clone(),
        None => output
            .and_then(|out| Path::new(out).extension())
            .and_then(|ext| ext.to_str())
            .and_then(|ext| registry.find_by_extension(ext))
            .map(|format| format.name().to_string())
            .unwrap_or_else(|| config.export.default_format.to_string()),
    };

    let document = load_for_conversion(path, matches, config);
    let rendered = registry.serialize(&document, &target).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });
    tracing::info!(path = %path, format = %target, "converted document");

    match output {
        Some(out) => {
            std::fs::write(out, &rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{}': {}", out, e);
                std::process::exit(1);
            });
        }
        None => print!("{}", rendered),
    }
}

/// Handle the formats command
fn handle_formats_command(config: &AdfConfig) {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let extensions = format
            .file_extensions()
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ");
        let marker = if name == config.export.default_format.as_str() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<10} {} [{}]{}",
            name,
            format.description(),
            extensions,
            marker
        );
    }
}
