use responses_ox::ResponsesError;
use thiserror::Error;

/// Exit status for a missing prompt
pub const EXIT_USAGE: u8 = 2;
/// Exit status for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Everything that can end a `lorem` run early
#[derive(Debug, Error)]
pub enum CliError {
    /// No prompt in the arguments or on stdin
    #[error("usage: lorem [flags] <prompt>")]
    Usage,

    /// A required environment variable is unset or empty
    #[error("error: {0} not set")]
    MissingCredential(&'static str),

    /// Failure while talking to the API
    #[error(transparent)]
    Responses(#[from] ResponsesError),

    /// The answer could not be written to stdout
    #[error("write error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
