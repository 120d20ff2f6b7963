use crate::rgl::envelope::{ErrorEnvelope, RemoteErrorKind};

/// All errors that can occur while talking to the RGL API.
///
/// A missing resource is not an error: endpoints return a zero record or an
/// empty collection instead.
#[derive(thiserror::Error, Debug)]
pub enum RglError {
    /// The steam id does not carry the steam64 prefix. No request was sent.
    #[error("invalid steam id {id:?}: expected a steam64 id starting with {prefix}")]
    InvalidSteamId { id: String, prefix: &'static str },

    /// The search query is shorter than the API accepts. No request was sent.
    #[error("search query {query:?} is too short: at least {min} characters required")]
    QueryTooShort { query: String, min: usize },

    /// The configured base URL cannot have path segments appended to it.
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),

    /// A rate limit was configured with a zero request count, burst or interval.
    #[error("invalid rate limit: {0}")]
    InvalidRateLimit(&'static str),

    /// The wait on the rate limiter was cancelled before a token was issued.
    #[error("rate limiter wait cancelled")]
    LimiterCancelled,

    /// The API answered 429 Too Many Requests. Calls are not retried.
    #[error("rate limited by the API for {url}")]
    RateLimited { url: String },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a status code the endpoint does not handle.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// Failed to serialize a request body.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A write endpoint rejected the request with a structured error envelope.
    #[error("{kind} for {url}: {envelope}")]
    Remote {
        url: String,
        kind: RemoteErrorKind,
        envelope: ErrorEnvelope,
    },

    /// A write endpoint rejected the request and its body was not an envelope.
    #[error("unreadable error body (status {status}) from {url}: {source}")]
    EnvelopeParse {
        url: String,
        status: reqwest::StatusCode,
        source: serde_json::Error,
    },

    /// Failed to parse a timestamp returned by the API.
    #[error("failed to parse timestamp: {0}")]
    DateParse(#[from] chrono::ParseError),
}

impl RglError {
    /// True for errors caused by the caller's input, whether caught locally
    /// or reported by the API.
    pub fn is_validation(&self) -> bool {
        match self {
            RglError::InvalidSteamId { .. } | RglError::QueryTooShort { .. } => true,
            RglError::Remote { kind, .. } => kind.is_validation(),
            _ => false,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, RglError::RateLimited { .. })
    }
}

pub type Result<T> = std::result::Result<T, RglError>;
