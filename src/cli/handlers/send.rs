//! Send command handler
//!
//! Builds the configured chain, sends the message once and writes the
//! resulting lines to the output.

use std::io::Write;

use crate::config::NotifierConfig;
use crate::error::AppResult;
use crate::services::notifications::Transcript;

/// Handler for the send command
pub struct SendCommandHandler {
    config: NotifierConfig,
}

impl SendCommandHandler {
    /// Create a new send command handler
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    /// Send the configured message through the configured chain
    ///
    /// # Errors
    /// Only fails if writing to `out` fails; sending itself cannot fail.
    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<Transcript> {
        let chain = self.config.chain();
        let span = tracing::info_span!("send", order = %chain.execution_order());
        let _enter = span.enter();

        let transcript = chain.build().deliver(&self.config.message);
        write_transcript(out, &transcript)?;
        out.flush()?;

        tracing::info!(lines = transcript.len(), "Notification sent");
        Ok(transcript)
    }
}

/// Write each transcript line followed by a newline
pub(crate) fn write_transcript<W: Write>(out: &mut W, transcript: &Transcript) -> AppResult<()> {
    for line in transcript.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
