//! Structured error bodies returned by the write (POST) endpoints.

use std::fmt;
use std::str::FromStr;

use reqwest::Response;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RglError;

/// `{"statusCode": 400, "error": "Bad Request", "message": [{"code": ..., "message": ...}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: Vec<EnvelopeMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMessage {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorEnvelope {
    /// Kind of the first coded message.
    pub fn kind(&self) -> RemoteErrorKind {
        self.message
            .first()
            .and_then(|m| RemoteErrorKind::from_str(&m.code).ok())
            .unwrap_or(RemoteErrorKind::Unrecognized)
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.error)?;
        for m in &self.message {
            write!(f, "; {}: {}", m.code, m.message)?;
        }
        Ok(())
    }
}

/// What a rejected write request was rejected for.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum_macros::EnumString)]
pub enum RemoteErrorKind {
    /// The request body had the wrong JSON type. Points at an encoding bug
    /// rather than bad input.
    #[strum(serialize = "invalid_type")]
    InvalidEncoding,
    #[strum(serialize = "too_small")]
    QueryTooShort,
    #[strum(serialize = "invalid_string")]
    MalformedSteamId,
    #[strum(disabled)]
    Unrecognized,
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidEncoding => "invalid request encoding",
            Self::QueryTooShort => "search query too short",
            Self::MalformedSteamId => "malformed steam id in request",
            Self::Unrecognized => "request rejected",
        };
        f.write_str(text)
    }
}

impl RemoteErrorKind {
    pub fn is_validation(self) -> bool {
        matches!(self, Self::QueryTooShort | Self::MalformedSteamId)
    }
}

/// Turn a rejected POST answer into an error.
pub(crate) async fn interpret(url: String, response: Response) -> RglError {
    let status = response.status();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return RglError::ResponseBody { url, source: e },
    };
    match serde_json::from_slice::<ErrorEnvelope>(&body) {
        Ok(envelope) => {
            let kind = envelope.kind();
            debug!(url, %status, %kind, "error envelope");
            RglError::Remote {
                url,
                kind,
                envelope,
            }
        }
        Err(e) => RglError::EnvelopeParse {
            url,
            status,
            source: e,
        },
    }
}
