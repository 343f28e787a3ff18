//! # folio-server
//!
//! HTTP endpoint for Folio queries, built on `tiny_http`.
//!
//! One path (default `/api/graphql`) accepts GET and POST query requests and
//! answers with the `{data, errors}` envelope; `/healthz` reports liveness.

pub mod error;
pub mod request;
pub mod server;

pub use error::{RequestError, ServerError};
pub use server::{Endpoint, HttpServer, Reply, ShutdownHandle};
