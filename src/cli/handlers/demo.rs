//! Demo command handler
//!
//! Frames a single send with a header, the execution order, a footer and
//! the list of advantages of stacking decorators.

use std::io::Write;

use super::send::write_transcript;
use crate::config::NotifierConfig;
use crate::error::AppResult;
use crate::services::notifications::ChannelKind;

const HEADER: &str = "=== DEMOSTRACIÓN DEL PATRÓN DECORATOR ===";
const FOOTER: &str = "=== FIN DE LA DEMOSTRACIÓN ===";

const ADVANTAGES: &[&str] = &[
    "1. Flexibilidad: Puedes combinar decoradores en cualquier orden",
    "2. Extensibilidad: Agregar nuevos canales sin modificar código existente",
    "3. Reutilización: Cada decorador es independiente y reutilizable",
    "4. Principio de Responsabilidad Única: Cada decorador tiene una sola responsabilidad",
    "5. Principio Abierto/Cerrado: Abierto para extensión, cerrado para modificación",
];

/// Describes which channels the demonstration goes through
fn intro_line(channels: &[ChannelKind]) -> &'static str {
    if channels.is_empty() {
        "Enviando notificación solo por el notificador base:"
    } else if ChannelKind::ALL.iter().all(|kind| channels.contains(kind)) {
        "Enviando notificación a través de todos los canales:"
    } else {
        "Enviando notificación a través de los canales configurados:"
    }
}

/// Handler for the demo command
pub struct DemoCommandHandler {
    config: NotifierConfig,
}

impl DemoCommandHandler {
    /// Create a new demo command handler
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    /// Run the demonstration
    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let chain = self.config.chain();

        writeln!(out, "{}", HEADER)?;
        writeln!(out)?;
        writeln!(out, "{}", intro_line(&self.config.channels))?;
        writeln!(out, "Orden de ejecución: {}", chain.execution_order())?;
        writeln!(out)?;

        let transcript = chain.build().deliver(&self.config.message);
        write_transcript(out, &transcript)?;

        writeln!(out)?;
        writeln!(out, "{}", FOOTER)?;
        writeln!(out)?;
        writeln!(out, "VENTAJAS DEL PATRÓN DECORATOR:")?;
        for advantage in ADVANTAGES {
            writeln!(out, "{}", advantage)?;
        }
        out.flush()?;

        tracing::info!(lines = transcript.len(), "Demonstration finished");
        Ok(())
    }
}
