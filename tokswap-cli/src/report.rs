use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;
use tokswap_core::{Finding, RewriteResult, preset::PRESETS};

use crate::error::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn to_json<T: Serialize>(data: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Render a rewrite summary. Per-rule counts are listed in `detailed` mode.
pub fn render_rewrite(
    result: &RewriteResult,
    format: OutputFormat,
    detailed: bool,
) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(result);
    }

    let verb = if result.written {
        "Rewrote"
    } else {
        "Would rewrite"
    };
    let mut out = format!(
        "{} {}: {} rules applied, {} replacements.",
        verb,
        result.destination.display(),
        result.rules_applied,
        result.total_replacements()
    );
    if detailed {
        for outcome in &result.outcomes {
            let _ = write!(out, "\n  {:>5}  {}", outcome.replacements, outcome.rule);
        }
    }
    Ok(out)
}

pub fn render_findings(findings: &[Finding], format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(&findings);
    }
    if findings.is_empty() {
        return Ok("No overlapping rules found.".to_string());
    }
    Ok(findings
        .iter()
        .map(|finding| format!("warning: {}", finding))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[derive(Serialize)]
struct PresetSummary {
    name: &'static str,
    description: &'static str,
    rules: usize,
}

pub fn render_presets(format: OutputFormat) -> CliResult<String> {
    let summaries: Vec<PresetSummary> = PRESETS
        .iter()
        .map(|preset| PresetSummary {
            name: preset.name,
            description: preset.description,
            rules: preset.rules.len(),
        })
        .collect();

    if format == OutputFormat::Json {
        return to_json(&summaries);
    }

    let mut out = String::from("Available presets:\n");
    for summary in &summaries {
        let _ = write!(
            out,
            "\n  {} ({} rules)\n    {}",
            summary.name, summary.rules, summary.description
        );
    }
    Ok(out)
}
