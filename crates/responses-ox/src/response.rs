use log::debug;
use serde::{Deserialize, Deserializer};

use crate::ResponsesError;

/// Response from OpenAI Responses API
///
/// Only the fields needed to locate the answer are required to decode; the
/// metadata is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponsesResponse {
    /// Unique identifier for the response
    pub id: Option<String>,

    /// Model used for the response
    pub model: Option<String>,

    /// Response status (e.g., "completed", "incomplete", "failed")
    pub status: Option<String>,

    /// Usage statistics
    pub usage: Option<ResponsesUsage>,

    /// Where the answer text lives
    #[serde(flatten)]
    pub body: ResponseBody,
}

/// The two ways a reply can carry its answer.
///
/// Decoded from the raw `output_text` / `output` pair: a non-blank
/// `output_text` wins, anything else falls back to the structured items.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBody")]
pub enum ResponseBody {
    /// Convenience `output_text` field
    PlainText(String),
    /// Detailed `output` items, scanned in order
    Structured(Vec<OutputItem>),
}

#[derive(Deserialize)]
struct RawBody {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    output: Vec<OutputItem>,
}

impl From<RawBody> for ResponseBody {
    fn from(raw: RawBody) -> Self {
        match raw.output_text {
            Some(text) if !text.trim().is_empty() => Self::PlainText(text),
            _ => Self::Structured(raw.output),
        }
    }
}

/// Individual output item in the response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputItem {
    /// Item type (e.g., "message", "reasoning")
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,

    /// Content blocks; absent for items such as reasoning
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Vec<OutputContent>,
}

/// Content block inside an output item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputContent {
    /// Block type (e.g., "output_text", "refusal")
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,

    /// Text payload for text blocks
    #[serde(default)]
    pub text: Option<String>,
}

/// Usage statistics for Responses API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponsesUsage {
    /// Total input tokens
    pub input_tokens: Option<u32>,

    /// Total output tokens
    pub output_tokens: Option<u32>,

    /// Total tokens used
    pub total_tokens: Option<u32>,

    /// Breakdown of output tokens
    pub output_tokens_details: Option<OutputTokensDetails>,
}

/// Output token breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputTokensDetails {
    /// Reasoning tokens used
    pub reasoning_tokens: Option<u32>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl OutputContent {
    /// Text of an `output_text` block that is not blank, returned as sent
    pub fn output_text(&self) -> Option<&str> {
        if self.content_type.as_deref() != Some("output_text") {
            return None;
        }
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

impl OutputItem {
    /// First usable `output_text` block of this item
    pub fn output_text(&self) -> Option<&str> {
        self.content.iter().find_map(OutputContent::output_text)
    }
}

impl ResponseBody {
    /// Resolve the answer text, first match wins.
    ///
    /// `PlainText` is returned trimmed; a structured block is returned
    /// untouched so leading indentation survives.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::PlainText(text) => Some(text.trim()),
            Self::Structured(items) => items.iter().find_map(OutputItem::output_text),
        }
    }

    fn source(&self) -> String {
        match self {
            Self::PlainText(_) => "output_text".to_string(),
            Self::Structured(items) => {
                let item_type = items
                    .iter()
                    .find(|item| item.output_text().is_some())
                    .and_then(|item| item.item_type.as_deref())
                    .unwrap_or("untyped");
                format!("output ({item_type} item)")
            }
        }
    }
}

impl ResponsesResponse {
    /// Get the answer text from the response
    pub fn text(&self) -> Option<&str> {
        self.body.text()
    }

    /// Consume the response, returning the answer text or `EmptyResponse`
    pub fn into_text(self) -> Result<String, ResponsesError> {
        match self.body.text() {
            Some(text) => {
                debug!("answer taken from {}", self.body.source());
                Ok(text.to_string())
            }
            None => Err(ResponsesError::EmptyResponse),
        }
    }

    /// Get reasoning tokens used, zero when unreported
    pub fn reasoning_tokens(&self) -> u32 {
        self.usage
            .as_ref()
            .and_then(|u| u.output_tokens_details.as_ref())
            .and_then(|d| d.reasoning_tokens)
            .unwrap_or(0)
    }
}
