//! Invocation of the external analyzer
//!
//! The analyzer is an opaque subprocess: we hand it a source file plus flags
//! and get text back. [`Analyzer`] is the seam the HTTP layer talks to, so
//! tests can swap the real 2LS binary for [`CannedAnalyzer`].

pub mod mock;
pub mod options;
pub mod twols;

pub use mock::CannedAnalyzer;
pub use options::{AnalysisOptions, OPTION_FLAGS};
pub use twols::TwoLsAnalyzer;

use crate::core::AnalysisResult;
use crate::parser::parse_output;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to stage source file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to launch {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Analysis timed out after {0} seconds")]
    Timeout(u64),

    #[error("Analyzer exited with {}", describe_exit(.code))]
    ExitStatus { code: Option<i32>, output: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[async_trait]
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;

    /// Runs the tool on `code` and returns its combined stdout and stderr.
    async fn run(&self, code: &str, options: &AnalysisOptions) -> Result<String, AnalyzerError>;

    async fn analyze(
        &self,
        code: &str,
        options: &AnalysisOptions,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let output = self.run(code, options).await?;
        Ok(parse_output(&output))
    }
}
