//! The HTTP endpoint: routing, the accept loop, and shutdown.

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;

use folio_query::{Gateway, QueryResponse, ResponseError, execute};
use serde_json::{Value, json};
use tiny_http::{Header, Method, Request, Response};

use crate::error::{RequestError, ServerError};
use crate::request::{decode_get, decode_post, split_url};

const HEALTH_PATH: &str = "/healthz";

/// Largest request body accepted, in bytes.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Status code and JSON body for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn from_response(response: &QueryResponse) -> Self {
        match serde_json::to_value(response) {
            Ok(body) => Self::ok(body),
            Err(e) => Self::error(500, e.to_string()),
        }
    }

    fn error(status: u16, message: String) -> Self {
        let response = QueryResponse {
            data: None,
            errors: vec![ResponseError {
                message,
                path: None,
            }],
        };
        Self {
            status,
            body: serde_json::to_value(response).unwrap_or(Value::Null),
        }
    }
}

impl From<RequestError> for Reply {
    fn from(error: RequestError) -> Self {
        Self::error(error.status(), error.to_string())
    }
}

/// Routes requests for the query path and the health check.
#[derive(Debug, Clone)]
pub struct Endpoint {
    gateway: Arc<Gateway>,
    path: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>, path: impl Into<String>) -> Self {
        Self {
            gateway,
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Answer one request. Pure apart from logging.
    #[must_use]
    pub fn handle(&self, method: &Method, url: &str, content_type: Option<&str>, body: &str) -> Reply {
        let (path, query_string) = split_url(url);

        if path == HEALTH_PATH {
            return match method {
                Method::Get | Method::Head => Reply::ok(json!({"status": "ok"})),
                other => RequestError::MethodNotAllowed(other.to_string()).into(),
            };
        }
        if path != self.path {
            return RequestError::NotFound.into();
        }

        let request = match method {
            Method::Get => decode_get(query_string),
            Method::Post => decode_post(content_type, body),
            other => Err(RequestError::MethodNotAllowed(other.to_string())),
        };
        match request {
            Ok(request) => Reply::from_response(&execute(&self.gateway, &request)),
            Err(error) => {
                tracing::warn!(%method, %url, %error, "rejected request");
                error.into()
            }
        }
    }
}

/// A bound listener, ready to run.
pub struct HttpServer {
    server: Arc<tiny_http::Server>,
    addr: SocketAddr,
    endpoint: Arc<Endpoint>,
}

/// Stops a running [`HttpServer`] from another task or thread.
#[derive(Clone)]
pub struct ShutdownHandle(Arc<tiny_http::Server>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.unblock();
    }
}

impl HttpServer {
    /// Bind `addr` (`host:port`; port 0 picks a free port).
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound.
    pub fn bind(addr: &str, endpoint: Endpoint) -> Result<Self, ServerError> {
        let server = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;
        let addr = server.server_addr().to_ip().ok_or(ServerError::NoAddress)?;
        Ok(Self {
            server: Arc::new(server),
            addr,
            endpoint: Arc::new(endpoint),
        })
    }

    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.server))
    }

    /// Serve until Ctrl-C or [`ShutdownHandle::shutdown`].
    ///
    /// `tiny_http` blocks on `recv`, so the accept loop runs on a blocking task.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Runtime` if the accept loop panics.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(addr = %self.addr, path = self.endpoint.path(), "serving queries");

        let handle = self.shutdown_handle();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutting down");
                handle.shutdown();
            }
        });

        let Self { server, endpoint, .. } = self;
        tokio::task::spawn_blocking(move || {
            for request in server.incoming_requests() {
                respond(request, &endpoint);
            }
        })
        .await
        .map_err(|e| ServerError::Runtime(format!("spawn_blocking join: {e}")))
    }
}

fn respond(mut request: Request, endpoint: &Endpoint) {
    let reply = match read_body(request.as_reader(), MAX_BODY_BYTES) {
        Ok(body) => {
            let content_type = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().to_string());
            endpoint.handle(request.method(), request.url(), content_type.as_deref(), &body)
        }
        Err(e) => e.into(),
    };

    tracing::debug!(method = %request.method(), url = request.url(), status = reply.status, "handled");

    let mut response = Response::from_string(reply.body.to_string()).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response = response.with_header(header);
    }
    if let Err(e) = request.respond(response) {
        tracing::warn!(error = %e, "failed to send response");
    }
}

/// Read at most `limit` bytes of UTF-8 body; anything longer is rejected.
fn read_body(reader: impl Read, limit: u64) -> Result<String, RequestError> {
    let mut body = String::new();
    reader
        .take(limit + 1)
        .read_to_string(&mut body)
        .map_err(|e| RequestError::BadRequest(format!("Unreadable body: {e}")))?;
    if body.len() as u64 > limit {
        return Err(RequestError::BadRequest(format!(
            "Request body exceeds {limit} bytes"
        )));
    }
    Ok(body)
}
