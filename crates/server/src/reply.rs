use canary_scanners::core::ErrorResponse;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::error;

/// What a route decided to send back. Kept apart from `tiny_http` so routes
/// can be exercised without a socket.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json { status: u16, body: Value },
    File {
        path: PathBuf,
        content_type: &'static str,
    },
}

impl Reply {
    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Reply::Json { status, body },
            Err(e) => {
                error!("failed to serialize response body: {}", e);
                Reply::error(500, "Failed to serialize response")
            }
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        let body = ErrorResponse::new(message);
        Reply::Json {
            status,
            body: serde_json::json!({ "error": body.error }),
        }
    }

    pub fn not_found() -> Self {
        Reply::error(404, "Not found")
    }

    pub fn status(&self) -> u16 {
        match self {
            Reply::Json { status, .. } => *status,
            Reply::File { .. } => 200,
        }
    }
}
