//! Error taxonomy for the voice coordination core.
//!
//! A single enum covers every non-fatal condition the coordinator and
//! transport can hit. Nothing here is fatal to the server process: a bad
//! peer is isolated (disconnected, or told `unknown_agent`) and the
//! coordinator keeps running. This mirrors the manual `Display` + `Error`
//! style used for `OrchestrationError` / `ResourceError` in the reference
//! crate rather than pulling in a derive-macro error crate.

use std::error::Error;
use std::fmt;

/// Errors surfaced by coordinator operations and the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinatorError {
    /// An operation referenced an agent id that isn't registered.
    UnknownAgent(String),
    /// An inbound duplex message was malformed (missing `type`, bad JSON).
    InvalidMessage(String),
    /// Sending to a peer's outbound channel failed or timed out.
    ChannelSendFailed(String),
    /// The current speaker exceeded `estimated_duration + grace`.
    SpeechTimeout(String),
    /// The janitor evicted an agent whose heartbeat lapsed.
    StaleAgent(String),
}

impl fmt::Display for CoordinatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinatorError::UnknownAgent(id) => write!(f, "unknown agent: {}", id),
            CoordinatorError::InvalidMessage(msg) => write!(f, "invalid message: {}", msg),
            CoordinatorError::ChannelSendFailed(id) => {
                write!(f, "channel send failed for agent: {}", id)
            }
            CoordinatorError::SpeechTimeout(id) => write!(f, "speech timeout for agent: {}", id),
            CoordinatorError::StaleAgent(id) => write!(f, "stale agent evicted: {}", id),
        }
    }
}

impl Error for CoordinatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        let err = CoordinatorError::UnknownAgent("agent-1".into());
        assert_eq!(err.to_string(), "unknown agent: agent-1");
    }
}
