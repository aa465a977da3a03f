//! Core data model: [`Agent`], [`AgentStatus`], [`VoiceRequest`].
//!
//! These types are intentionally plain data — the invariants that govern how
//! they're created and mutated (at most one `speaking` agent, stable queue
//! ordering, ...) live in [`crate::voice::coordinator`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Default priority assigned to an agent or request when none is given.
pub const DEFAULT_PRIORITY: u8 = 5;
/// Valid priority range, inclusive on both ends.
pub const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;
/// Default estimated speaking duration, in seconds.
pub const DEFAULT_ESTIMATED_DURATION: f64 = 10.0;
/// Upper bound on `estimated_duration`, in seconds. Requests exceeding this
/// are clamped rather than rejected.
pub const MAX_ESTIMATED_DURATION: f64 = 60.0;

/// Clamp a client-supplied priority into [`PRIORITY_RANGE`].
pub fn clamp_priority(priority: i64) -> u8 {
    priority.clamp(*PRIORITY_RANGE.start() as i64, *PRIORITY_RANGE.end() as i64) as u8
}

/// Clamp a client-supplied estimated duration into `[0, MAX_ESTIMATED_DURATION]`.
pub fn clamp_duration(seconds: f64) -> f64 {
    seconds.clamp(0.0, MAX_ESTIMATED_DURATION)
}

/// Liveness status an agent can report about itself.
///
/// `Speaking` is deliberately excluded from this enum — only the coordinator
/// may put an agent into that state, via [`AgentStatus::Speaking`] on the
/// wider [`AgentStatus`] type used internally. See
/// [`ClientStatus`](crate::voice::transport::messages::ClientStatus) for the
/// subset a client is allowed to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Idle,
    Speaking,
    Listening,
    Busy,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Idle => "idle",
            AgentStatus::Speaking => "speaking",
            AgentStatus::Listening => "listening",
            AgentStatus::Busy => "busy",
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered client identity that can hold speech turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    /// Free-form category (e.g. `"claude-code"`, `"autoagent"`, `"websurfer"`).
    pub agent_type: String,
    pub status: AgentStatus,
    pub connected_at: DateTime<Utc>,
    pub last_heartbeat: DateTime<Utc>,
    pub priority: u8,
    pub workspace_id: Option<String>,
    pub user_id: Option<String>,
}

impl Agent {
    /// Build a freshly-registered agent: `status = idle`, both timestamps
    /// stamped to now.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        agent_type: impl Into<String>,
        priority: u8,
        workspace_id: Option<String>,
        user_id: Option<String>,
    ) -> Self {
        let now = super::clock::now_utc();
        Self {
            id: id.into(),
            name: name.into(),
            agent_type: agent_type.into(),
            status: AgentStatus::Idle,
            connected_at: now,
            last_heartbeat: now,
            priority: clamp_priority(priority as i64),
            workspace_id,
            user_id,
        }
    }
}

/// A pending (or just-granted) request to speak.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceRequest {
    pub id: String,
    pub agent_id: String,
    pub message: String,
    pub priority: u8,
    pub request_time: DateTime<Utc>,
    pub estimated_duration: f64,
    /// Opaque pass-through bag, never interpreted by the coordinator.
    #[serde(default)]
    pub voice_settings: HashMap<String, Value>,
}

impl VoiceRequest {
    pub fn new(
        agent_id: impl Into<String>,
        message: impl Into<String>,
        priority: u8,
        estimated_duration: f64,
        voice_settings: HashMap<String, Value>,
    ) -> Self {
        Self {
            id: super::clock::new_id(),
            agent_id: agent_id.into(),
            message: message.into(),
            priority: clamp_priority(priority as i64),
            request_time: super::clock::now_utc(),
            estimated_duration: clamp_duration(estimated_duration),
            voice_settings,
        }
    }
}
