//! Core notifier trait and types.
//!
//! This module provides the abstraction every layer of a notification chain
//! implements, whether it is the base sender or a channel decorator.

use std::fmt;

/// Lines emitted by a single send, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one emitted line
    pub fn emit(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Returns the emitted lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of emitted lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the transcript, returning the owned lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl IntoIterator for Transcript {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Trait for every layer of a notification chain
///
/// Sending never fails: each layer appends exactly one line to the transcript.
/// Implementations are immutable after construction, so a chain can be shared
/// across threads and sent through repeatedly with identical output.
///
/// # Example Implementation
/// ```ignore
/// pub struct ConsoleNotifier;
///
/// impl Notifier for ConsoleNotifier {
///     fn send(&self, message: &str, transcript: &mut Transcript) {
///         transcript.emit(format!("console: {}", message));
///     }
///
///     fn name(&self) -> &'static str {
///         "console"
///     }
/// }
/// ```
pub trait Notifier: Send + Sync {
    /// Sends a notification message
    ///
    /// # Arguments
    /// * `message` - The message to send, passed through unmodified
    /// * `transcript` - Receives the lines produced by this layer and all inner layers
    fn send(&self, message: &str, transcript: &mut Transcript);

    /// Returns the layer name for logging/debugging
    fn name(&self) -> &'static str;

    /// Sends a message into a fresh transcript and returns it
    fn deliver(&self, message: &str) -> Transcript {
        let mut transcript = Transcript::new();
        self.send(message, &mut transcript);
        transcript
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send(&self, message: &str, transcript: &mut Transcript) {
        (**self).send(message, transcript)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoNotifier;

    impl Notifier for EchoNotifier {
        fn send(&self, message: &str, transcript: &mut Transcript) {
            transcript.emit(message);
        }

        fn name(&self) -> &'static str {
            "echo"
        }
    }

    #[test]
    fn test_deliver_starts_from_empty_transcript() {
        let notifier = EchoNotifier;
        let transcript = notifier.deliver("hola");
        assert_eq!(transcript.lines(), &["hola".to_string()]);
        assert_eq!(notifier.deliver("hola"), transcript);
    }

    #[test]
    fn test_boxed_notifier_forwards() {
        let boxed: Box<dyn Notifier> = Box::new(EchoNotifier);
        assert_eq!(boxed.name(), "echo");
        assert_eq!(boxed.deliver("x").into_lines(), vec!["x".to_string()]);
    }

    #[test]
    fn test_transcript_display_is_newline_terminated() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        transcript.emit("a");
        transcript.emit(String::from("b"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.to_string(), "a\nb\n");
    }
}
