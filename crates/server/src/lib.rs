//! Canary Server - HTTP front for the 2LS analyzer
//!
//! Serves `POST /api/analyze` plus the example catalog, the CWE table, a
//! health probe and, optionally, the browser bundle. Requests are routed
//! to [`Reply`] values first and written to the socket afterwards.

pub mod error;
pub mod reply;
pub mod routes;
pub mod server;
pub mod state;
pub mod static_files;

pub use error::ServerError;
pub use reply::Reply;
pub use routes::route;
pub use server::{CanaryServer, ShutdownHandle};
pub use state::AppState;
