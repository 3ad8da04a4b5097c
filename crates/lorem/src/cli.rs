use clap::{ArgAction, Parser};
use responses_ox::{ReasoningConfig, ResponsesRequest, TextConfig};

pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_EFFORT: &str = "minimal";
pub const DEFAULT_VERBOSITY: &str = "low";

/// Ask an OpenAI model a question and print the answer.
#[derive(Debug, Clone, Parser)]
#[command(name = "lorem", version)]
#[command(about = "Send a prompt to the OpenAI Responses API and print the reply")]
pub struct Args {
    /// OpenAI model (e.g. gpt-5-mini)
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Reasoning effort: minimal|medium|high
    #[arg(long, default_value = DEFAULT_EFFORT)]
    pub effort: String,

    /// Verbosity: low|medium|high
    #[arg(long, default_value = DEFAULT_VERBOSITY)]
    pub verbosity: String,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Prompt words, joined with spaces. Read from stdin when omitted
    #[arg(value_name = "PROMPT", trailing_var_arg = true)]
    pub prompt: Vec<String>,
}

impl Args {
    /// Build the request payload for an already resolved prompt
    pub fn request(&self, prompt: impl Into<String>) -> ResponsesRequest {
        ResponsesRequest::builder()
            .model(self.model.as_str())
            .input(prompt)
            .text(TextConfig::with_verbosity(self.verbosity.as_str()))
            .reasoning(ReasoningConfig::with_effort(self.effort.as_str()))
            .build()
    }
}
