use tracing::{info, warn};

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

/// Non-blocking channel for reporting results to the user.
pub trait Feedback {
    /// Reports a successful result.
    fn info(&mut self, text: &str);

    /// Reports a recoverable problem. Never interrupts control flow.
    fn warning(&mut self, text: &str);
}

/// Sends feedback to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn info(&mut self, text: &str) {
        info!(target: "vertex_snap::feedback", "{text}");
    }

    fn warning(&mut self, text: &str) {
        warn!(target: "vertex_snap::feedback", "{text}");
    }
}

/// Keeps every message in memory, for inspection after the fact.
#[derive(Debug, Default, Clone)]
pub struct RecordedFeedback {
    pub messages: Vec<Message>,
}

impl RecordedFeedback {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of warnings recorded.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .count()
    }

    fn push(&mut self, level: MessageLevel, text: &str) {
        self.messages.push(Message {
            level,
            text: text.to_owned(),
        });
    }
}

impl Feedback for RecordedFeedback {
    fn info(&mut self, text: &str) {
        info!(target: "vertex_snap::feedback", "{text}");
        self.push(MessageLevel::Info, text);
    }

    fn warning(&mut self, text: &str) {
        warn!(target: "vertex_snap::feedback", "{text}");
        self.push(MessageLevel::Warning, text);
    }
}
