use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{print_report, OutputFormat};
use recase::config::CliOverrides;
use recase::{CaseStyle, Config, ConversionReport, Converter, Input, KEBAB_SENTINEL};
use std::io::{self, BufRead};
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert words between camelCase, dot.case and kebab-case", long_about = None)]
struct Cli {
    /// Strings to convert (reads one per line from stdin when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case style (camel, dot, kebab)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Parse each input as a JSON value instead of a raw string
    #[arg(short, long)]
    json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs fail to convert
    #[arg(long)]
    no_fail: bool,

    /// Print the kebab sentinel string instead of failing on non-string input
    #[arg(long)]
    legacy_kebab: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(CliOverrides {
        style: cli.style,
        format: cli.format,
        no_color: cli.no_color,
        no_fail: cli.no_fail,
    })?;
    debug!(?config, "resolved configuration");

    if cli.legacy_kebab && config.style != CaseStyle::Kebab {
        warn!(style = %config.style, "--legacy-kebab only affects kebab style");
    }

    let raw_inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs
    };

    let converter = Converter::new(config.style);
    let mut report = ConversionReport::new(config.style);

    for raw in raw_inputs {
        let input = if cli.json { parse_json_input(&raw)? } else { Input::from(raw) };

        let outcome = match converter.convert_input(&input) {
            Err(_) if cli.legacy_kebab && config.style == CaseStyle::Kebab => {
                Ok(KEBAB_SENTINEL.to_string())
            }
            outcome => outcome,
        };
        report.push(input, outcome);
    }

    print_report(&report, config.color, &config.format)?;

    // Exit with appropriate code
    if report.has_failures() && config.fail_on_error {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read inputs from stdin")
}

fn parse_json_input(raw: &str) -> Result<Input> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .with_context(|| format!("Failed to parse JSON input: {}", raw))?;
    Ok(Input::from_json(&value))
}
