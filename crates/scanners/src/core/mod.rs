//! Core data model for scraped analyzer diagnostics
//!
//! Bug categories and their CWE entries are fixed constant data. The
//! classifier maps free-text diagnostics onto a category, and the result
//! types carry the scraped records back to the HTTP layer and the CLI.

pub mod category;
pub mod classifier;
pub mod cwe;
pub mod result;

pub mod analysis_request;
pub mod analysis_response;
pub mod report_generator;

pub use category::BugCategory;
pub use classifier::classify;
pub use cwe::{lookup, CweEntry, CWE_TABLE};
pub use result::{AnalysisResult, BugRecord};

pub use analysis_request::{AnalysisRequest, RequestError};
pub use analysis_response::{AnalysisResponse, AnalysisStatus, ErrorResponse};
pub use report_generator::{ReportFormat, ReportGenerator};
