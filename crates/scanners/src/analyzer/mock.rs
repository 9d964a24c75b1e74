use crate::analyzer::{AnalysisOptions, Analyzer, AnalyzerError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Analyzer stand-in that replays fixed output. Records the flags it was
/// asked for so callers can check option plumbing.
pub struct CannedAnalyzer {
    output: String,
    failure: Option<String>,
    call_count: AtomicUsize,
    last_flags: Mutex<Vec<&'static str>>,
}

impl CannedAnalyzer {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            failure: None,
            call_count: AtomicUsize::new(0),
            last_flags: Mutex::new(Vec::new()),
        }
    }

    /// Every run fails as if the binary could not be started.
    pub fn failing(message: impl Into<String>) -> Self {
        let mut analyzer = Self::new(String::new());
        analyzer.failure = Some(message.into());
        analyzer
    }

    /// A failed pointer check on `main.c:7`, shaped like 2LS output.
    pub fn null_dereference() -> Self {
        Self::new(
            "2LS version 0.9\n\
             ** Results:\n\
             [main.c:7] pointer_dereference.1: NULL pointer dereference detected\n\
             \n\
             VERIFICATION FAILED\n",
        )
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn last_flags(&self) -> Vec<&'static str> {
        self.last_flags
            .lock()
            .map(|flags| flags.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Analyzer for CannedAnalyzer {
    fn name(&self) -> &str {
        "canned"
    }

    async fn run(&self, _code: &str, options: &AnalysisOptions) -> Result<String, AnalyzerError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut flags) = self.last_flags.lock() {
            *flags = options.flags();
        }

        match &self.failure {
            Some(message) => Err(AnalyzerError::Spawn {
                binary: self.name().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message.clone()),
            }),
            None => Ok(self.output.clone()),
        }
    }
}
