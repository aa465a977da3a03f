//! Status view: a read-only, point-in-time-consistent snapshot of the
//! coordinator for diagnostics and the `registration_confirmed` payload.

use super::registry::AgentRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of coordinator state at a single instant.
///
/// Built while holding the coordinator's lock, so callers never observe a
/// `current_speaker` with no agent in `speaking` status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub server_time: DateTime<Utc>,
    pub total_agents: usize,
    pub current_speaker: Option<String>,
    pub queue_length: usize,
    pub agents_by_status: HashMap<String, usize>,
}

/// Build a snapshot from the registry and queue length. Free function (not a
/// method) so it can be called from inside the coordinator's locked sections
/// without borrowing issues.
pub fn build_snapshot(
    agents: &AgentRegistry,
    current_speaker: Option<String>,
    queue_length: usize,
) -> StatusSnapshot {
    let agents_by_status = agents
        .counts_by_status()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    StatusSnapshot {
        server_time: super::clock::now_utc(),
        total_agents: agents.len(),
        current_speaker,
        queue_length,
        agents_by_status,
    }
}
