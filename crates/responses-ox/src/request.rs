use bon::Builder;
use serde::{Deserialize, Serialize};

/// Request for the OpenAI Responses API
///
/// The shape is fixed: every field is always serialized. Values of `verbosity`
/// and `effort` are passed through untouched and validated by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(builder_type(vis = "pub"), state_mod(vis = "pub"))]
pub struct ResponsesRequest {
    /// Model to use (e.g., "gpt-5-mini", "gpt-5")
    #[builder(into)]
    pub model: String,

    /// Prompt text sent as plain string input
    #[builder(into)]
    pub input: String,

    /// Text output configuration
    pub text: TextConfig,

    /// Reasoning configuration
    pub reasoning: ReasoningConfig,
}

/// Text output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Verbosity level: "low", "medium", "high"
    pub verbosity: String,
}

/// Reasoning configuration for the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningConfig {
    /// Reasoning effort level: "minimal", "low", "medium", "high"
    pub effort: String,
}

impl TextConfig {
    /// Create text config with verbosity level
    pub fn with_verbosity(verbosity: impl Into<String>) -> Self {
        Self {
            verbosity: verbosity.into(),
        }
    }
}

impl ReasoningConfig {
    /// Create reasoning config with effort level
    pub fn with_effort(effort: impl Into<String>) -> Self {
        Self {
            effort: effort.into(),
        }
    }
}

impl ResponsesRequest {
    /// Serialize the request into the JSON body sent over the wire
    pub fn to_body(&self) -> Result<Vec<u8>, crate::ResponsesError> {
        serde_json::to_vec(self).map_err(crate::ResponsesError::Serialize)
    }
}
