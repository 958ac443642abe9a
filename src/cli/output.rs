use crate::{CaseError, ConversionReport, Input};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: String,
    converted: usize,
    failed: usize,
    results: Vec<JsonResult>,
}

pub fn print_report(report: &ConversionReport, colored_output: bool, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_report(report, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_report(report),
    }
}

fn print_text_report(report: &ConversionReport, colored_output: bool) {
    for conversion in &report.conversions {
        match &conversion.outcome {
            Ok(output) => println!("{}", output),
            Err(err) => eprintln!("{}", format_failure(&conversion.input, err, colored_output)),
        }
    }

    if report.has_failures() {
        eprintln!("{}", format_summary(report, colored_output));
    }
}

fn print_json_report(report: &ConversionReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&json_output(report))?);
    Ok(())
}

fn json_output(report: &ConversionReport) -> JsonOutput {
    let results = report
        .conversions
        .iter()
        .map(|c| JsonResult {
            input: c.input.to_string(),
            output: c.outcome.as_ref().ok().cloned(),
            error: c.outcome.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    JsonOutput {
        style: report.style.to_string(),
        converted: report.converted,
        failed: report.failed,
        results,
    }
}

fn format_failure(input: &Input, err: &CaseError, colored: bool) -> String {
    let input = format!("{:?}", input.to_string());
    if colored {
        format!("{} {}: {}", "error:".red().bold(), input.yellow(), err)
    } else {
        format!("error: {}: {}", input, err)
    }
}

fn format_summary(report: &ConversionReport, colored: bool) -> String {
    let total = report.conversions.len();
    let input_word = if total == 1 { "input" } else { "inputs" };

    if colored {
        format!(
            "{} {} of {} {} failed to convert",
            "✗".red().bold(),
            report.failed.to_string().red().bold(),
            total,
            input_word
        )
    } else {
        format!(
            "✗ {} of {} {} failed to convert",
            report.failed, total, input_word
        )
    }
}
