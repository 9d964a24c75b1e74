//! Canary Scanners - 2LS output scraping and invocation
//!
//! This crate wraps the 2LS static analyzer for C: it builds the command line
//! from a set of check options, runs the tool under a timeout, and scrapes
//! its informal text report into typed bug records annotated with CWE ids.
//! The analyzer's own verification logic stays inside the external binary.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod core;
pub mod parser;

pub use crate::core::{
    classify, lookup, AnalysisRequest, AnalysisResponse, AnalysisResult, BugCategory, BugRecord,
    CweEntry,
};

pub use analyzer::{AnalysisOptions, Analyzer, AnalyzerError, CannedAnalyzer, TwoLsAnalyzer};

pub use config::CanaryConfig;

pub use parser::{extract_trace, parse_output, OutputParser};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
