//! Structured REPL output.
//!
//! `ReplCore` never prints; it returns messages that the outer loop renders.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplMsg {
    /// Informational message (general feedback)
    Info(String),
    /// Operation failed
    Error(String),
    /// Main result (what the user asked for)
    Output(String),
    /// Step-by-step derivation trace
    Steps(String),
}

impl ReplMsg {
    pub fn output(s: impl Into<String>) -> Self {
        ReplMsg::Output(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        ReplMsg::Info(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        ReplMsg::Error(s.into())
    }

    pub fn steps(s: impl Into<String>) -> Self {
        ReplMsg::Steps(s.into())
    }
}

/// Collection of messages returned by a ReplCore operation
pub type ReplReply = Vec<ReplMsg>;

/// What the read loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
