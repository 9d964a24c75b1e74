use crate::reply::Reply;
use crate::state::AppState;
use crate::static_files;
use canary_scanners::core::{cwe, AnalysisRequest, AnalysisResponse};
use canary_scanners::{catalog, VERSION};
use serde_json::json;
use tiny_http::Method;
use tracing::{error, info};

/// Dispatches one request. `url` may carry a query string; it is ignored.
pub async fn route(state: &AppState, method: &Method, url: &str, body: &[u8]) -> Reply {
    let path = url.split('?').next().unwrap_or(url);

    match (method, path) {
        (Method::Post, "/api/analyze") => analyze(state, body).await,
        (_, "/api/analyze") => Reply::error(405, "Method not allowed"),
        (Method::Get, "/api/examples") => Reply::json(200, &catalog::all()),
        (Method::Get, "/api/cwe") => cwe_table(),
        (Method::Get, "/api/health") => Reply::json(200, &json!({ "status": "ok", "version": VERSION })),
        (Method::Get, _) if path.starts_with("/api/examples/") => {
            let key = &path["/api/examples/".len()..];
            match catalog::find(key) {
                Some(example) => Reply::json(200, example),
                None => Reply::error(404, format!("Unknown example: {}", key)),
            }
        }
        (Method::Get, _) if !path.starts_with("/api/") => static_asset(state, path),
        _ => Reply::not_found(),
    }
}

async fn analyze(state: &AppState, body: &[u8]) -> Reply {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        Ok(AnalysisRequest::default())
    } else {
        AnalysisRequest::from_json(body)
    };

    let (code, options) = match request.and_then(AnalysisRequest::validate) {
        Ok(parts) => parts,
        Err(e) => return Reply::error(400, e.to_string()),
    };

    match state.analyzer.analyze(&code, &options).await {
        Ok(result) => {
            info!(
                "{} run finished: {} bug(s), verification {}",
                state.analyzer.name(),
                result.bugs.len(),
                if result.verification_failed { "failed" } else { "not failed" }
            );
            Reply::json(200, &AnalysisResponse::from(result))
        }
        Err(e) => {
            error!("Error analyzing code: {}", e);
            Reply::error(500, format!("Error analyzing code: {}", e))
        }
    }
}

fn cwe_table() -> Reply {
    let entries: Vec<_> = cwe::CWE_TABLE
        .iter()
        .map(|entry| {
            json!({
                "category": entry.category,
                "cwe": entry.identifier,
                "description": entry.description,
                "url": entry.reference_url(),
            })
        })
        .collect();
    Reply::json(200, &entries)
}

fn static_asset(state: &AppState, path: &str) -> Reply {
    let Some(root) = state.settings.static_dir.as_deref() else {
        return Reply::not_found();
    };

    match static_files::resolve(root, path) {
        Some(file) => Reply::File {
            content_type: static_files::content_type(&file),
            path: file,
        },
        None => Reply::not_found(),
    }
}
