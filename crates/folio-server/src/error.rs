use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("server has no IP address")]
    NoAddress,

    #[error("accept loop failed: {0}")]
    Runtime(String),
}

/// Why an HTTP request could not be turned into a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound,

    #[error("Method {0} is not allowed; use GET or POST")]
    MethodNotAllowed(String),
}

impl RequestError {
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed(_) => 405,
        }
    }
}
