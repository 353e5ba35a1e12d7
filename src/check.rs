//! Batch checking of SIF files from the command line.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::core::{Document, Validator};
use crate::validation::Diagnostic;

/// Findings of one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Flat record of the JSON report
#[derive(Debug, Serialize)]
struct JsonFinding<'a> {
    path: String,
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
}

/// Validate one file. Files are treated as SIF regardless of extension.
pub fn check_file(path: &Path, validator: &Validator) -> Result<FileReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let id = path.display().to_string();
    let diagnostics = validator
        .validate(&Document::sif(id, text))
        .unwrap_or_default();

    Ok(FileReport {
        path: path.to_path_buf(),
        diagnostics,
    })
}

/// Validate every file, stopping at the first unreadable one
pub fn check_files(paths: &[PathBuf], validator: &Validator) -> Result<Vec<FileReport>> {
    paths.iter().map(|path| check_file(path, validator)).collect()
}

/// Render reports; text lines use one-based line and column numbers
pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        for d in &report.diagnostics {
            let _ = writeln!(
                out,
                "{}:{}:{}: warning: {}",
                report.path.display(),
                d.line + 1,
                d.start_column + 1,
                d.message
            );
        }
    }
    out
}

fn render_json(reports: &[FileReport]) -> Result<String> {
    let findings: Vec<JsonFinding<'_>> = reports
        .iter()
        .flat_map(|report| {
            report.diagnostics.iter().map(|diagnostic| JsonFinding {
                path: report.path.display().to_string(),
                diagnostic,
            })
        })
        .collect();

    let mut out = serde_json::to_string_pretty(&findings).context("Failed to serialize findings")?;
    out.push('\n');
    Ok(out)
}
