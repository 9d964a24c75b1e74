use crate::core::cwe::{self, CweEntry};
use crate::core::BugCategory;
use serde::{Deserialize, Serialize};

/// One diagnostic scraped from analyzer output.
///
/// Field names on the wire follow what the bundled front end reads:
/// the location token travels as `line` and the CWE id as `cwe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugRecord {
    #[serde(rename = "type")]
    pub bug_type: String,

    pub description: String,

    /// Opaque location token as printed by the tool, e.g. `main.c:7` or
    /// `main.pointer_dereference.1`.
    #[serde(rename = "line")]
    pub source_location: String,

    #[serde(rename = "cwe", skip_serializing_if = "Option::is_none", default)]
    pub cwe_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cwe_description: Option<String>,

    #[serde(default)]
    pub trace: String,
}

impl BugRecord {
    pub fn new(bug_type: &str, source_location: &str, description: &str) -> Self {
        Self {
            bug_type: bug_type.to_string(),
            description: description.to_string(),
            source_location: source_location.to_string(),
            cwe_id: None,
            cwe_description: None,
            trace: String::new(),
        }
    }

    pub fn with_cwe(mut self, entry: &CweEntry) -> Self {
        self.cwe_id = Some(entry.identifier.to_string());
        self.cwe_description = Some(entry.description.to_string());
        self
    }

    pub fn with_category(self, category: Option<BugCategory>) -> Self {
        match category {
            Some(category) => self.with_cwe(cwe::lookup(category)),
            None => self,
        }
    }

    pub fn with_trace(mut self, trace: String) -> Self {
        self.trace = trace;
        self
    }

    pub fn has_trace(&self) -> bool {
        !self.trace.is_empty()
    }

    pub fn cwe_url(&self) -> Option<String> {
        self.cwe_id
            .as_ref()
            .map(|id| format!("https://cwe.mitre.org/data/definitions/{}.html", id))
    }
}

/// Parsed view of one analyzer run. `raw_output` is always the exact text
/// handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub bugs: Vec<BugRecord>,

    #[serde(rename = "output")]
    pub raw_output: String,

    #[serde(default)]
    pub verification_failed: bool,
}

impl AnalysisResult {
    pub fn clean(raw_output: &str) -> Self {
        Self {
            bugs: Vec::new(),
            raw_output: raw_output.to_string(),
            verification_failed: false,
        }
    }

    pub fn has_bugs(&self) -> bool {
        !self.bugs.is_empty()
    }

    pub fn count_by_type(&self, bug_type: &str) -> usize {
        self.bugs.iter().filter(|b| b.bug_type == bug_type).count()
    }
}
