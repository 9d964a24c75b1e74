use crate::error::ServerError;
use crate::reply::Reply;
use crate::routes;
use crate::state::AppState;
use canary_scanners::{CanaryConfig, TwoLsAnalyzer};
use std::fs::File;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Header, Request, Response, Server};
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

pub struct CanaryServer {
    http: Arc<Server>,
    state: Arc<AppState>,
}

/// Stops a running [`CanaryServer`] from another task or a signal handler.
#[derive(Clone)]
pub struct ShutdownHandle {
    http: Arc<Server>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.http.unblock();
    }
}

impl CanaryServer {
    pub fn bind(state: AppState) -> Result<Self, ServerError> {
        let addr = state.settings.bind.clone();
        let http = Server::http(addr.as_str()).map_err(|e| ServerError::Bind {
            addr: addr.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            http: Arc::new(http),
            state: Arc::new(state),
        })
    }

    /// Binds with the real 2LS analyzer described by `config`.
    pub fn from_config(config: &CanaryConfig) -> Result<Self, ServerError> {
        let analyzer = Arc::new(TwoLsAnalyzer::new(config.analyzer.clone()));
        Self::bind(AppState::new(analyzer, config.server.clone()))
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            http: self.http.clone(),
        }
    }

    /// Accepts requests until [`ShutdownHandle::shutdown`] is called. Each
    /// request is handled on its own task.
    pub async fn run(self) -> Result<(), ServerError> {
        let runtime = Handle::current();
        let http = self.http;
        let state = self.state;

        match http.server_addr().to_ip() {
            Some(addr) => info!("Listening on http://{}", addr),
            None => info!("Listening on {}", state.settings.bind),
        }
        info!("Analyzer: {}", state.analyzer.name());

        tokio::task::spawn_blocking(move || loop {
            match http.recv() {
                Ok(request) => {
                    runtime.spawn(handle_request(state.clone(), request));
                }
                Err(e) => {
                    debug!("accept loop stopped: {}", e);
                    break;
                }
            }
        })
        .await
        .map_err(|e| ServerError::Worker(e.to_string()))?;

        info!("Server stopped");
        Ok(())
    }
}

async fn handle_request(state: Arc<AppState>, mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();
    let limit = state.settings.max_body_bytes;

    let read = tokio::task::spawn_blocking(move || {
        let body = read_body(&mut request, limit);
        (request, body)
    })
    .await;

    let (request, body) = match read {
        Ok(parts) => parts,
        Err(e) => {
            error!("{} {}: body reader failed: {}", method, url, e);
            return;
        }
    };

    let reply = match body {
        Ok(body) => routes::route(&state, &method, &url, &body).await,
        Err(reply) => reply,
    };
    info!("{} {} -> {}", method, url, reply.status());

    match tokio::task::spawn_blocking(move || respond(request, reply)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("{} {}: failed to send response: {}", method, url, e),
        Err(e) => error!("{} {}: response writer failed: {}", method, url, e),
    }
}

fn read_body(request: &mut Request, limit: usize) -> Result<Vec<u8>, Reply> {
    if request.body_length().is_some_and(|len| len > limit) {
        return Err(Reply::error(413, "Request body too large"));
    }

    let mut body = Vec::new();
    request
        .as_reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut body)
        .map_err(|e| Reply::error(400, format!("Invalid request body: {}", e)))?;

    if body.len() > limit {
        return Err(Reply::error(413, "Request body too large"));
    }
    Ok(body)
}

fn respond(request: Request, reply: Reply) -> std::io::Result<()> {
    match reply {
        Reply::Json { status, body } => {
            let response = Response::from_string(body.to_string()).with_status_code(status);
            request.respond(with_content_type(response, "application/json"))
        }
        Reply::File { path, content_type } => match File::open(&path) {
            Ok(file) => request.respond(with_content_type(Response::from_file(file), content_type)),
            Err(e) => {
                warn!("failed to open {}: {}", path.display(), e);
                respond(request, Reply::not_found())
            }
        },
    }
}

fn with_content_type<R: Read>(response: Response<R>, value: &str) -> Response<R> {
    match Header::from_bytes(&b"Content-Type"[..], value.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
