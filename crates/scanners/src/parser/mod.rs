//! Scraper for 2LS diagnostic output
//!
//! The analyzer prints an informal, line-oriented report. When a property
//! fails it emits `VERIFICATION FAILED` plus one line per failed property,
//! each tagged like `[main.pointer_dereference.3]`, optionally followed by a
//! `Trace:` block. The parser turns that into [`BugRecord`]s. Anything it
//! does not recognise is skipped: the format is not a contract, so missing a
//! line degrades to fewer reported bugs rather than an error.

pub mod rules;
pub mod trace;

pub use rules::{CweAssignment, DiagnosticRule, RuleSet};
pub use trace::extract_trace;

use crate::core::{AnalysisResult, BugRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const VERIFICATION_FAILED: &str = "VERIFICATION FAILED";

/// CRLF, LF, bare CR and the escaped two-character `\n` all end a line.
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\n|\r|\\n").expect("line break pattern"));

pub fn split_lines(raw_output: &str) -> Vec<&str> {
    LINE_BREAK.split(raw_output).collect()
}

pub struct OutputParser<'r> {
    rules: &'r RuleSet,
}

impl OutputParser<'static> {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::standard(),
        }
    }
}

impl Default for OutputParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> OutputParser<'r> {
    pub fn with_rules(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    pub fn parse(&self, raw_output: &str) -> AnalysisResult {
        let lines = split_lines(raw_output);

        let verification_failed = lines.iter().any(|line| line.contains(VERIFICATION_FAILED));
        if !verification_failed {
            debug!("no failed properties in {} lines of output", lines.len());
            return AnalysisResult::clean(raw_output);
        }

        let bugs: Vec<BugRecord> = lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let rule = self.rules.first_match(line)?;
                let record = rule.build(line)?;
                Some(record.with_trace(extract_trace(&lines, index)))
            })
            .collect();

        debug!(
            "verification failed, scraped {} bug(s) from {} lines",
            bugs.len(),
            lines.len()
        );

        AnalysisResult {
            bugs,
            raw_output: raw_output.to_string(),
            verification_failed,
        }
    }
}

/// Parses with the standard 2LS rule set.
pub fn parse_output(raw_output: &str) -> AnalysisResult {
    OutputParser::new().parse(raw_output)
}
