use crate::analyzer::AnalysisOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub options: Option<AnalysisOptions>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("No code provided")]
    MissingCode,

    #[error("Invalid request body: {0}")]
    Malformed(String),
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>, options: AnalysisOptions) -> Self {
        Self {
            code: Some(code.into()),
            options: Some(options),
        }
    }

    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        serde_json::from_slice(body).map_err(|e| RequestError::Malformed(e.to_string()))
    }

    /// Code is required and must be non-empty; options default to all off.
    pub fn validate(self) -> Result<(String, AnalysisOptions), RequestError> {
        match self.code {
            Some(code) if !code.is_empty() => Ok((code, self.options.unwrap_or_default())),
            _ => Err(RequestError::MissingCode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let body = br#"{"code": "int main(){return 0;}", "options": {"heap": true}}"#;
        let (code, options) = AnalysisRequest::from_json(body).unwrap().validate().unwrap();
        assert_eq!(code, "int main(){return 0;}");
        assert!(options.heap);
        assert!(!options.pointer_check);
    }

    #[test]
    fn test_options_may_be_absent() {
        let (_, options) = AnalysisRequest::from_json(br#"{"code": "x"}"#)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(options, AnalysisOptions::default());
    }

    #[test]
    fn test_missing_or_empty_code() {
        let bodies: [&[u8]; 3] = [br#"{}"#, br#"{"code": ""}"#, br#"{"code": null}"#];
        for body in bodies {
            let err = AnalysisRequest::from_json(body).unwrap().validate().unwrap_err();
            assert_eq!(err, RequestError::MissingCode);
            assert_eq!(err.to_string(), "No code provided");
        }
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            AnalysisRequest::from_json(b"code=1"),
            Err(RequestError::Malformed(_))
        ));
        assert!(matches!(
            AnalysisRequest::from_json(br#"{"code": 12}"#),
            Err(RequestError::Malformed(_))
        ));
    }
}
