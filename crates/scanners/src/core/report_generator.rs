use crate::core::analysis_response::AnalysisResponse;
use crate::core::{AnalysisResult, BugRecord};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(result: &AnalysisResult, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Markdown => Ok(Self::generate_markdown(result)),
            ReportFormat::Json => Self::generate_json(result),
        }
    }

    /// Same document the HTTP endpoint returns.
    fn generate_json(result: &AnalysisResult) -> Result<String> {
        let response = AnalysisResponse::from(result.clone());
        serde_json::to_string_pretty(&response)
            .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {}", e))
    }

    fn generate_markdown(result: &AnalysisResult) -> String {
        let mut report = String::new();

        report.push_str("# 2LS Analysis Report\n\n");

        if !result.has_bugs() {
            report.push_str("No bugs found. The code passed all the selected checks.\n\n");
        } else {
            report.push_str(&format!("Found {} issue(s):\n\n", result.bugs.len()));
            report.push_str("| # | Type | CWE | Location |\n");
            report.push_str("|---|------|-----|----------|\n");
            for (idx, bug) in result.bugs.iter().enumerate() {
                report.push_str(&format!(
                    "| {} | {} | {} | `{}` |\n",
                    idx + 1,
                    bug.bug_type,
                    bug.cwe_id
                        .as_ref()
                        .map(|id| format!("CWE-{}", id))
                        .unwrap_or_else(|| "-".to_string()),
                    Self::truncate(&bug.source_location, 60)
                ));
            }
            report.push('\n');

            for (idx, bug) in result.bugs.iter().enumerate() {
                Self::append_bug(&mut report, idx, bug);
            }
        }

        report.push_str("## Raw Output\n\n```\n");
        report.push_str(result.raw_output.trim_end());
        report.push_str("\n```\n");

        report
    }

    fn append_bug(report: &mut String, idx: usize, bug: &BugRecord) {
        report.push_str(&format!("### Bug #{}: {}\n\n", idx + 1, bug.bug_type));

        if let (Some(id), Some(url)) = (&bug.cwe_id, bug.cwe_url()) {
            report.push_str(&format!("**CWE**: [CWE-{}]({})\n", id, url));
            if let Some(ref description) = bug.cwe_description {
                report.push_str(&format!("> {}\n", description));
            }
            report.push('\n');
        }

        report.push_str(&format!("**Description**: {}\n\n", bug.description));
        report.push_str(&format!("**Line**: `{}`\n\n", bug.source_location));

        if bug.has_trace() {
            report.push_str("**Trace**:\n\n```\n");
            report.push_str(&bug.trace);
            report.push_str("\n```\n\n");
        }
    }

    fn truncate(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let kept: String = s.chars().take(max_len - 3).collect();
            format!("{}...", kept)
        }
    }
}
