use crate::core::{AnalysisResult, BugRecord};
use serde::{Deserialize, Serialize};

/// Reported run status. Always `success` once the analyzer produced output:
/// the presence of bugs, not the status, signals a failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: AnalysisStatus,

    pub bugs: Vec<BugRecord>,

    pub output: String,
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            status: AnalysisStatus::Success,
            bugs: result.bugs,
            output: result.raw_output,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_success_even_with_bugs() {
        let result = AnalysisResult {
            bugs: vec![BugRecord::new("Division by Zero", "main.c:8", "division by zero")],
            raw_output: "VERIFICATION FAILED".to_string(),
            verification_failed: true,
        };

        let value = serde_json::to_value(AnalysisResponse::from(result)).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["bugs"].as_array().unwrap().len(), 1);
        assert_eq!(value["output"], "VERIFICATION FAILED");
    }
}
