use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use xmldoc2md::{xml_to_markdown, ConvertOptions};

fn cli() -> Command {
    Command::new("xmldoc2md")
        .about("Convert XML API documentation to Markdown")
        .override_usage("xmldoc2md [-i] <INPUT> [[-o] <OUTPUT>]")
        .arg(
            Arg::new("input")
                .help("XML documentation file")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Markdown file to write (defaults to INPUT with a .md extension)")
                .index(2),
        )
        .arg(
            Arg::new("input-flag")
                .short('i')
                .long("input")
                .value_name("INPUT")
                .help("XML documentation file")
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("output-flag")
                .short('o')
                .long("output")
                .value_name("OUTPUT")
                .help("Markdown file to write")
                .conflicts_with("output"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON conversion options"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Also print the Markdown to stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn path_arg(matches: &ArgMatches, positional: &str, flag: &str) -> Option<PathBuf> {
    matches
        .get_one::<String>(flag)
        .or_else(|| matches.get_one::<String>(positional))
        .map(PathBuf::from)
}

fn run(input: &Path, output: &Path, matches: &ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let options = ConvertOptions::resolve(config_path)?;
    debug!(?options, "resolved options");

    let xml = fs::read_to_string(input)
        .with_context(|| format!("failed to read '{}'", input.display()))?;
    let markdown = xml_to_markdown(&xml, &options)
        .with_context(|| format!("failed to convert '{}'", input.display()))?;

    if matches.get_flag("print") {
        println!("{}", markdown);
    }

    fs::write(output, &markdown)
        .with_context(|| format!("failed to write '{}'", output.display()))?;
    info!(bytes = markdown.len(), output = %output.display(), "wrote markdown");

    println!("File '{}' has been created or replaced.", output.display());
    Ok(())
}

fn main() -> ExitCode {
    let mut command = cli();
    let matches = command.clone().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let Some(input) = path_arg(&matches, "input", "input-flag") else {
        eprintln!("{}", command.render_usage());
        return ExitCode::FAILURE;
    };

    if !input.is_file() {
        eprintln!("File '{}' does not exist.", input.display());
        return ExitCode::FAILURE;
    }

    let output = path_arg(&matches, "output", "output-flag")
        .unwrap_or_else(|| input.with_extension("md"));

    match run(&input, &output, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
