use std::fmt;

pub const NO_CHANGES_MESSAGE: &str = "No changes detected to generate a commit message.";

/// Outcome of asking for a commit message suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitMessage {
    /// Nothing to summarize; the backend was never called.
    NoChanges,
    /// Text returned by the language model, untouched.
    Generated(String),
}

impl CommitMessage {
    pub fn as_str(&self) -> &str {
        match self {
            CommitMessage::NoChanges => NO_CHANGES_MESSAGE,
            CommitMessage::Generated(text) => text,
        }
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
}
