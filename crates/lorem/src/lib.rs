//! `lorem`: send one prompt to the OpenAI Responses API and print the answer.
//!
//! The flow is linear: resolve the prompt, read the credential, build the
//! request, send it, extract the answer and print it. Every failure is fatal
//! and maps to an exit status through [`CliError::exit_code`].

use std::io::{Read, Write};

use log::debug;

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;

pub use cli::Args;
pub use config::Config;
pub use error::CliError;

/// Run one invocation.
///
/// The prompt is resolved before `load_config` is called, so a missing
/// prompt is reported as a usage error even without a key. Neither check
/// touches the network.
pub async fn run<R, W, F>(args: &Args, load_config: F, stdin: R, stdout: W) -> Result<(), CliError>
where
    R: Read,
    W: Write,
    F: FnOnce() -> Result<Config, CliError>,
{
    let prompt = prompt::resolve(&args.prompt, stdin)?;
    let config = load_config()?;
    ask(&config, args, &prompt, stdout).await
}

/// Send `prompt` with the options in `args` and write the answer to `out`.
pub async fn ask<W: Write>(
    config: &Config,
    args: &Args,
    prompt: &str,
    mut out: W,
) -> Result<(), CliError> {
    debug!("using {config:?}");
    let request = args.request(prompt);
    let text = config.client().respond_text(&request).await?;

    write!(out, "\n{text}\n\n")?;
    out.flush()?;
    Ok(())
}
