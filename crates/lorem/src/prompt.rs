use std::io::Read;

use log::{debug, warn};

use crate::CliError;

/// Resolve the prompt from positional words, falling back to stdin.
///
/// Words are joined with single spaces and trimmed. Stdin is only read when
/// the words are empty. A prompt that is still empty is a usage error.
pub fn resolve<R: Read>(words: &[String], mut stdin: R) -> Result<String, CliError> {
    let joined = words.join(" ");
    let prompt = joined.trim();
    if !prompt.is_empty() {
        return Ok(prompt.to_string());
    }

    debug!("no prompt arguments, reading stdin");
    let mut buf = Vec::new();
    if let Err(err) = stdin.read_to_end(&mut buf) {
        warn!("failed to read stdin: {err}");
        buf.clear();
    }

    let input = String::from_utf8_lossy(&buf);
    let prompt = input.trim();
    if prompt.is_empty() {
        return Err(CliError::Usage);
    }
    Ok(prompt.to_string())
}
