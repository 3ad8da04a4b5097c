//! Minimal client for the OpenAI Responses API
//!
//! This crate covers a single exchange with `POST /v1/responses`:
//! - Building the request payload (model, input, verbosity, reasoning effort)
//! - Sending it with bearer authentication and a bounded timeout
//! - Decoding the reply and extracting the answer text
//!
//! # Example
//!
//! ```rust,no_run
//! use responses_ox::{OpenAI, ReasoningConfig, ResponsesRequest, TextConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAI::new("your-api-key");
//!
//!     let request = ResponsesRequest::builder()
//!         .model("gpt-5-mini")
//!         .input("Write a haiku about borrow checking")
//!         .text(TextConfig::with_verbosity("low"))
//!         .reasoning(ReasoningConfig::with_effort("minimal"))
//!         .build();
//!
//!     let text = client.respond_text(&request).await?;
//!     println!("{text}");
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAI};
pub use error::ResponsesError;
pub use request::{ReasoningConfig, ResponsesRequest, ResponsesRequestBuilder, TextConfig};
pub use response::{
    OutputContent, OutputItem, OutputTokensDetails, ResponseBody, ResponsesResponse,
    ResponsesUsage,
};
