use bon::Builder;
use log::{debug, info};
use reqwest::{StatusCode, header::CONTENT_TYPE};
use std::time::Duration;

use crate::{ResponsesError, ResponsesRequest, ResponsesResponse, error::parse_error_response};

/// Base URL of the OpenAI API
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Bound on a whole exchange: connect, send and receive
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI Responses API client
#[derive(Debug, Clone, Builder)]
pub struct OpenAI {
    /// API key for authentication
    #[builder(into)]
    api_key: String,

    /// Base URL for the API (allows for custom endpoints)
    #[builder(default = DEFAULT_BASE_URL.to_string(), into)]
    base_url: String,

    /// Timeout applied to every request
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl OpenAI {
    /// Create a new OpenAI client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }

    /// Send a Responses API request and decode the reply.
    ///
    /// Exactly one attempt is made. Any status other than 200 is returned as
    /// [`ResponsesError::Api`] with the raw body.
    pub async fn send_responses(
        &self,
        request: &ResponsesRequest,
    ) -> Result<ResponsesResponse, ResponsesError> {
        let body = request.to_body()?;
        let url = self.endpoint();

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ResponsesError::InvalidRequest)?;

        let http_request = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(ResponsesError::InvalidRequest)?;

        info!("POST {url} model={}", request.model);
        debug!(
            "request body: {} bytes",
            http_request
                .body()
                .and_then(reqwest::Body::as_bytes)
                .map_or(0, <[u8]>::len)
        );

        let response = client.execute(http_request).await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!("response status {status}, {} bytes", bytes.len());

        if status != StatusCode::OK {
            return Err(parse_error_response(status, &bytes));
        }

        let decoded: ResponsesResponse =
            serde_json::from_slice(&bytes).map_err(ResponsesError::Decode)?;
        debug!(
            "response id={} status={} usage={:?} reasoning_tokens={}",
            decoded.id.as_deref().unwrap_or("-"),
            decoded.status.as_deref().unwrap_or("-"),
            decoded.usage,
            decoded.reasoning_tokens()
        );
        Ok(decoded)
    }

    /// Send a request and return only the extracted answer text
    pub async fn respond_text(&self, request: &ResponsesRequest) -> Result<String, ResponsesError> {
        self.send_responses(request).await?.into_text()
    }
}

fn transport_error(err: reqwest::Error) -> ResponsesError {
    if err.is_timeout() {
        debug!("request timed out");
    }
    ResponsesError::Transport(err)
}
