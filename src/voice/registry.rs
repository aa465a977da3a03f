//! Agent registry: the map from agent id to [`Agent`] record.
//!
//! This is plain, synchronous bookkeeping — the [`Coordinator`](crate::voice::coordinator::Coordinator)
//! is what wraps it in a mutex and decides when to call it. Keeping it as a
//! bare struct instead of baking locking in here makes the single-speaker
//! invariant easy to check from one place.

use super::clock::now_utc;
use super::model::{clamp_priority, Agent, AgentStatus};
use std::collections::HashMap;

/// In-memory table of connected agents.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Agent>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self {
            agents: HashMap::new(),
        }
    }

    /// Insert or replace the record for `agent`. Re-registering an existing
    /// id is treated as a reconnect: the record is fully reset to `idle`,
    /// not merged with the previous one.
    pub fn register(&mut self, agent: Agent) {
        self.agents.insert(agent.id.clone(), agent);
    }

    pub fn get(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.get(agent_id)
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.agents.contains_key(agent_id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// Update `last_heartbeat`. No-op if the agent is unknown — heartbeats
    /// from a disconnected or never-registered agent are silently dropped.
    pub fn heartbeat(&mut self, agent_id: &str) {
        if let Some(agent) = self.agents.get_mut(agent_id) {
            agent.last_heartbeat = now_utc();
        }
    }

    /// Set the coordinator-owned `speaking` flag. Bypasses the
    /// client-settable-status restriction because only the coordinator
    /// calls this.
    pub fn set_speaking(&mut self, agent_id: &str) -> bool {
        if let Some(agent) = self.agents.get_mut(agent_id) {
            agent.status = AgentStatus::Speaking;
            true
        } else {
            false
        }
    }

    /// Set status back to idle (used after a speech turn ends).
    pub fn set_idle(&mut self, agent_id: &str) -> bool {
        if let Some(agent) = self.agents.get_mut(agent_id) {
            agent.status = AgentStatus::Idle;
            true
        } else {
            false
        }
    }

    /// Apply a client-declared status update (`idle`/`listening`/`busy`) and
    /// optional priority change. Returns `false` if the agent is unknown.
    /// Callers must reject `AgentStatus::Speaking` before calling this — see
    /// [`crate::voice::transport::messages::ClientStatus`], which doesn't even
    /// have a `Speaking` variant to offer.
    pub fn set_client_status(
        &mut self,
        agent_id: &str,
        status: AgentStatus,
        priority: Option<u8>,
    ) -> bool {
        if let Some(agent) = self.agents.get_mut(agent_id) {
            agent.status = status;
            if let Some(p) = priority {
                agent.priority = clamp_priority(p as i64);
            }
            agent.last_heartbeat = now_utc();
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, agent_id: &str) -> Option<Agent> {
        self.agents.remove(agent_id)
    }

    /// Agent ids whose `last_heartbeat` is older than `now - timeout`.
    pub fn stale_agent_ids(&self, timeout: chrono::Duration) -> Vec<String> {
        let now = now_utc();
        self.agents
            .values()
            .filter(|agent| now - agent.last_heartbeat > timeout)
            .map(|agent| agent.id.clone())
            .collect()
    }

    pub fn counts_by_status(&self) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::from([
            (AgentStatus::Idle.as_str(), 0),
            (AgentStatus::Speaking.as_str(), 0),
            (AgentStatus::Listening.as_str(), 0),
            (AgentStatus::Busy.as_str(), 0),
        ]);
        for agent in self.agents.values() {
            *counts.entry(agent.status.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
