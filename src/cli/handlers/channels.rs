//! Channels command handler

use std::io::Write;

use crate::error::AppResult;
use crate::services::notifications::ChannelKind;

/// Handler for the channels command
pub struct ChannelsCommandHandler;

impl ChannelsCommandHandler {
    /// Write one `name<TAB>LABEL` line per channel, in declaration order
    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for kind in ChannelKind::ALL {
            writeln!(out, "{}\t{}", kind.as_str(), kind.label())?;
        }
        out.flush()?;
        Ok(())
    }
}
