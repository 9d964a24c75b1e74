//! Command implementations for the Canary CLI
//!
//! `serve` hosts the HTTP API, `analyze` runs 2LS on a local file, and
//! `parse` scrapes a report that was saved earlier. `examples` and `cwe`
//! print the built-in reference data.

pub mod analyze;
pub mod cwe;
pub mod examples;
pub mod parse;
pub mod serve;
