use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// OpenAI API error details
#[derive(Debug, Deserialize)]
struct OpenAIApiErrorPayload {
    error: Option<OpenAIApiError>,
}

/// Specific error information from OpenAI API
#[derive(Debug, Deserialize)]
struct OpenAIApiError {
    message: String,
}

/// Errors that can occur during a Responses API exchange
///
/// The display text of each variant starts with the category prefix shown to
/// the user.
#[derive(Debug, Error)]
pub enum ResponsesError {
    /// The request payload could not be serialized
    #[error("marshal error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP client or request could not be constructed
    #[error("request error: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    /// Network failure, including the request timeout
    #[error("http error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Any status other than 200 OK
    #[error("API error: {status}\n{body}")]
    Api {
        status: StatusCode,
        body: String,
        /// `error.message` from the body, when the body is a structured API error
        message: Option<String>,
    },

    /// The body of a 200 response is not the expected JSON
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// No answer text in the decoded response
    #[error("no text in response")]
    EmptyResponse,
}

impl ResponsesError {
    /// Check whether the failure was caused by the request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Parse an error response from the OpenAI API
pub(crate) fn parse_error_response(status: StatusCode, bytes: &bytes::Bytes) -> ResponsesError {
    let message = serde_json::from_slice::<OpenAIApiErrorPayload>(bytes)
        .ok()
        .and_then(|payload| payload.error)
        .map(|error| error.message);

    ResponsesError::Api {
        status,
        body: String::from_utf8_lossy(bytes).into_owned(),
        message,
    }
}
