use serde::Serialize;

use crate::checker::FileOutcome;
use crate::error::Result;
use crate::runner::RunReport;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    method: &'a str,
    searched_paths: Vec<String>,
    results: Vec<FileResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct Summary {
    files_analyzed: usize,
    errors_count: usize,
    exit_code: i32,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_analyzed: report.summary.files_analyzed,
                errors_count: report.summary.errors_count,
                exit_code: report.summary.exit_code,
            },
            method: &report.method_name,
            searched_paths: report
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            results: report
                .outcomes
                .iter()
                .map(|o| convert_outcome(o, &report.method_name))
                .collect(),
            error: report.abort_message(),
        };

        Ok(serde_json::to_string_pretty(&output)? + "\n")
    }
}

fn convert_outcome(outcome: &FileOutcome, method_name: &str) -> FileResult {
    let reason = outcome.reason();
    FileResult {
        path: outcome.path.display().to_string(),
        status: if reason.is_some() { "failed" } else { "passed" },
        reason: reason.map(|r| r.code()),
        message: reason.map(|r| r.message(&outcome.path, method_name)),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
