//! The coordinator: single-writer arbiter of who gets to speak.
//!
//! All mutable state lives behind one `tokio::sync::Mutex<Inner>`, following
//! the same "short critical section, dispatch after unlock" shape used for
//! outbound fan-out elsewhere in this lineage. A coordinator step (register,
//! submit, complete, disconnect, ...) computes its state change and the list
//! of events it produced while holding the lock, then releases the lock and
//! sends those events — so two concurrent steps can never interleave their
//! effects on `Inner`, and a slow peer socket never blocks the lock.

use super::clock::{now_monotonic, now_utc};
use super::config::CoordinatorConfig;
use super::error::CoordinatorError;
use super::model::{clamp_duration, clamp_priority, Agent, AgentStatus, VoiceRequest};
use super::queue::VoiceQueue;
use super::registry::AgentRegistry;
use super::status::{build_snapshot, StatusSnapshot};
use super::transport::messages::ServerMessage;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;

/// Why a speech turn ended, surfaced to clients on `speech_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// The speaker reported `speech_complete` itself.
    Normal,
    /// The grace-extended `estimated_duration` elapsed with no report.
    Timeout,
}

impl CompletionReason {
    fn is_timeout(self) -> bool {
        matches!(self, CompletionReason::Timeout)
    }
}

/// Outcome of [`Coordinator::submit`].
#[derive(Debug, Clone)]
pub enum SubmitResult {
    /// Granted immediately; no queueing occurred.
    Granted {
        request_id: String,
        queued_at: chrono::DateTime<chrono::Utc>,
    },
    /// Queued behind other pending requests, at this 1-based position.
    Queued {
        request_id: String,
        queued_at: chrono::DateTime<chrono::Utc>,
        position: usize,
    },
}

impl SubmitResult {
    pub fn request_id(&self) -> &str {
        match self {
            SubmitResult::Granted { request_id, .. } => request_id,
            SubmitResult::Queued { request_id, .. } => request_id,
        }
    }

    pub fn queued_at(&self) -> chrono::DateTime<chrono::Utc> {
        match self {
            SubmitResult::Granted { queued_at, .. } => *queued_at,
            SubmitResult::Queued { queued_at, .. } => *queued_at,
        }
    }

    /// 1-based queue position, or `0` if the request was immediately taken
    /// as current speaker.
    pub fn queue_position(&self) -> usize {
        match self {
            SubmitResult::Granted { .. } => 0,
            SubmitResult::Queued { position, .. } => *position,
        }
    }
}

/// One pending outbound delivery, computed under the lock and sent after
/// release.
type Outbound = (String, mpsc::Sender<ServerMessage>, ServerMessage);

struct Inner {
    agents: AgentRegistry,
    queue: VoiceQueue,
    current_speaker: Option<String>,
    current_request_id: Option<String>,
    speaking_started_at: Option<Instant>,
    timeout_handle: Option<AbortHandle>,
    peers: HashMap<String, mpsc::Sender<ServerMessage>>,
}

impl Inner {
    fn new() -> Self {
        Self {
            agents: AgentRegistry::new(),
            queue: VoiceQueue::new(),
            current_speaker: None,
            current_request_id: None,
            speaking_started_at: None,
            timeout_handle: None,
            peers: HashMap::new(),
        }
    }

    fn broadcast(&self, out: &mut Vec<Outbound>, msg: ServerMessage, except: Option<&str>) {
        for (id, sender) in &self.peers {
            if Some(id.as_str()) == except {
                continue;
            }
            out.push((id.clone(), sender.clone(), msg.clone()));
        }
    }

    fn send_to(&self, out: &mut Vec<Outbound>, agent_id: &str, msg: ServerMessage) {
        if let Some(sender) = self.peers.get(agent_id) {
            out.push((agent_id.to_string(), sender.clone(), msg));
        }
    }

    /// Clear `current_speaker` state and broadcast `speech_complete`.
    /// Deliberately does *not* drain the queue — callers that need the next
    /// speaker granted must call `drain` themselves, after any other events
    /// for this step (e.g. `agent_disconnected`) have been queued, so the
    /// total order of emitted events matches the order coordinator steps
    /// actually happened in.
    fn clear_speaker(&mut self, out: &mut Vec<Outbound>, reason: CompletionReason) {
        if let Some(handle) = self.timeout_handle.take() {
            handle.abort();
        }
        if let Some(agent_id) = self.current_speaker.take() {
            self.current_request_id = None;
            self.speaking_started_at = None;
            self.agents.set_idle(&agent_id);
            self.broadcast(
                out,
                ServerMessage::SpeechComplete {
                    agent_id,
                    timeout: reason.is_timeout(),
                },
                None,
            );
        }
    }

    /// If nobody is currently speaking and the queue is non-empty, pop the
    /// head, mark it as the speaker, and queue the `speak_granted` /
    /// `agent_speaking` events. Returns the data needed to arm a timeout,
    /// since arming requires a spawn that must happen outside the lock.
    fn drain(&mut self, out: &mut Vec<Outbound>) -> Option<(String, String, Duration)> {
        if self.current_speaker.is_some() {
            return None;
        }
        loop {
            let request = self.queue.pop()?;
            if !self.agents.contains(&request.agent_id) {
                // Agent disconnected while queued; its requests should have
                // been purged already, but skip defensively rather than
                // grant a turn to nobody.
                continue;
            }
            let agent_name = self
                .agents
                .get(&request.agent_id)
                .map(|a| a.name.clone())
                .unwrap_or_default();
            self.agents.set_speaking(&request.agent_id);
            self.current_speaker = Some(request.agent_id.clone());
            self.current_request_id = Some(request.id.clone());
            self.speaking_started_at = Some(now_monotonic());

            self.send_to(
                out,
                &request.agent_id,
                ServerMessage::SpeakGranted {
                    request_id: request.id.clone(),
                    message: request.message.clone(),
                    voice_settings: request.voice_settings.clone(),
                    estimated_duration: request.estimated_duration,
                },
            );
            self.broadcast(
                out,
                ServerMessage::AgentSpeaking {
                    speaker_id: request.agent_id.clone(),
                    speaker_name: agent_name,
                    estimated_duration: request.estimated_duration,
                },
                Some(&request.agent_id),
            );

            return Some((
                request.agent_id,
                request.id,
                Duration::from_secs_f64(request.estimated_duration),
            ));
        }
    }
}

/// Handle to the shared coordination state. Cheap to clone — every clone
/// shares the same lock and peer table.
#[derive(Clone)]
pub struct Coordinator {
    inner: Arc<Mutex<Inner>>,
    config: Arc<CoordinatorConfig>,
}

impl Coordinator {
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::new())),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Register (or re-register) an agent and attach its outbound channel.
    /// Re-registration under an id already in use resets that agent's
    /// record — a reconnect, not a merge — and replaces its peer sender, so
    /// a stale connection silently stops receiving events.
    pub async fn register(
        &self,
        agent_id: impl Into<String>,
        name: impl Into<String>,
        agent_type: impl Into<String>,
        priority: Option<u8>,
        workspace_id: Option<String>,
        user_id: Option<String>,
        sender: mpsc::Sender<ServerMessage>,
    ) -> Agent {
        let agent_id = agent_id.into();
        let agent = Agent::new(
            agent_id.clone(),
            name,
            agent_type,
            priority.unwrap_or(super::model::DEFAULT_PRIORITY),
            workspace_id,
            user_id,
        );

        let mut outbound = Vec::new();
        let snapshot;
        {
            let mut inner = self.inner.lock().await;
            inner.agents.register(agent.clone());
            inner.peers.insert(agent_id.clone(), sender);
            snapshot = build_snapshot(
                &inner.agents,
                inner.current_speaker.clone(),
                inner.queue.len(),
            );
            inner.broadcast(
                &mut outbound,
                ServerMessage::AgentJoined {
                    agent: agent.clone(),
                },
                Some(&agent_id),
            );
            inner.send_to(
                &mut outbound,
                &agent_id,
                ServerMessage::RegistrationConfirmed {
                    agent_id: agent_id.clone(),
                    server_status: snapshot,
                },
            );
        }
        log::info!("agent {} registered ({})", agent_id, agent.agent_type);
        self.dispatch(outbound).await;
        agent
    }

    pub async fn heartbeat(&self, agent_id: &str) -> Result<(), CoordinatorError> {
        let mut inner = self.inner.lock().await;
        if !inner.agents.contains(agent_id) {
            return Err(CoordinatorError::UnknownAgent(agent_id.to_string()));
        }
        inner.agents.heartbeat(agent_id);
        Ok(())
    }

    /// Apply a client-declared status/priority change. Rejects any attempt
    /// to self-declare `speaking`, which only the coordinator may assign.
    pub async fn set_client_status(
        &self,
        agent_id: &str,
        status: AgentStatus,
        priority: Option<u8>,
    ) -> Result<(), CoordinatorError> {
        if status == AgentStatus::Speaking {
            return Err(CoordinatorError::InvalidMessage(
                "clients may not self-declare speaking".to_string(),
            ));
        }
        let mut outbound = Vec::new();
        {
            let mut inner = self.inner.lock().await;
            if !inner.agents.set_client_status(agent_id, status, priority) {
                return Err(CoordinatorError::UnknownAgent(agent_id.to_string()));
            }
            let effective_priority = inner
                .agents
                .get(agent_id)
                .map(|a| a.priority)
                .unwrap_or(super::model::DEFAULT_PRIORITY);
            inner.broadcast(
                &mut outbound,
                ServerMessage::AgentStatusUpdate {
                    agent_id: agent_id.to_string(),
                    status,
                    priority: effective_priority,
                },
                None,
            );
        }
        self.dispatch(outbound).await;
        Ok(())
    }

    /// Submit a speak request. Grants it immediately if nobody is speaking
    /// and the queue is empty, otherwise enqueues it by priority.
    pub async fn submit(
        &self,
        agent_id: &str,
        message: impl Into<String>,
        priority: Option<u8>,
        estimated_duration: Option<f64>,
        voice_settings: HashMap<String, serde_json::Value>,
    ) -> Result<SubmitResult, CoordinatorError> {
        let priority = priority
            .map(|p| clamp_priority(p as i64))
            .unwrap_or(super::model::DEFAULT_PRIORITY);
        let estimated_duration = clamp_duration(
            estimated_duration.unwrap_or(super::model::DEFAULT_ESTIMATED_DURATION),
        );
        let request = VoiceRequest::new(agent_id, message, priority, estimated_duration, voice_settings);
        let request_id = request.id.clone();
        let queued_at = request.request_time;

        let mut outbound = Vec::new();
        let drained;
        let position;
        {
            let mut inner = self.inner.lock().await;
            if !inner.agents.contains(agent_id) {
                return Err(CoordinatorError::UnknownAgent(agent_id.to_string()));
            }
            position = inner.queue.enqueue(request);
            drained = inner.drain(&mut outbound);
        }
        self.dispatch(outbound).await;

        let result = match &drained {
            Some((_, granted_id, _)) if *granted_id == request_id => SubmitResult::Granted {
                request_id: request_id.clone(),
                queued_at,
            },
            _ => SubmitResult::Queued {
                request_id: request_id.clone(),
                queued_at,
                position,
            },
        };

        if let Some((speaker_id, granted_request_id, duration)) = drained {
            self.arm_timeout(speaker_id, granted_request_id, duration).await;
        }
        Ok(result)
    }

    /// End the current speaker's turn (normal completion or a timeout firing)
    /// and grant the next queued request, if any.
    pub async fn complete(
        &self,
        agent_id: &str,
        reason: CompletionReason,
    ) -> Result<(), CoordinatorError> {
        let mut outbound = Vec::new();
        let drained;
        {
            let mut inner = self.inner.lock().await;
            if inner.current_speaker.as_deref() != Some(agent_id) {
                // Already ended (e.g. raced with a timeout or a disconnect);
                // nothing to do.
                return Ok(());
            }
            inner.clear_speaker(&mut outbound, reason);
            drained = inner.drain(&mut outbound);
        }
        log::info!("agent {} completed speaking ({:?})", agent_id, reason);
        self.dispatch(outbound).await;
        if let Some((speaker_id, request_id, duration)) = drained {
            self.arm_timeout(speaker_id, request_id, duration).await;
        }
        Ok(())
    }

    /// Remove an agent entirely: drop its queued requests, end its turn if
    /// it was speaking, then broadcast the disconnect, then grant the next
    /// speaker. Done as one critical section so the emitted event order is
    /// exactly `speech_complete -> agent_disconnected -> speak_granted`,
    /// matching a single coordinator step regardless of how many things
    /// happened to be true about the departing agent.
    pub async fn disconnect(&self, agent_id: &str) {
        let mut outbound = Vec::new();
        let drained;
        let removed;
        {
            let mut inner = self.inner.lock().await;
            inner.queue.remove_by_agent(agent_id);
            if inner.current_speaker.as_deref() == Some(agent_id) {
                inner.clear_speaker(&mut outbound, CompletionReason::Normal);
            }
            inner.peers.remove(agent_id);
            removed = inner.agents.remove(agent_id);
            if let Some(agent) = &removed {
                inner.broadcast(
                    &mut outbound,
                    ServerMessage::AgentDisconnected {
                        agent_id: agent_id.to_string(),
                        agent_name: agent.name.clone(),
                    },
                    None,
                );
            }
            drained = inner.drain(&mut outbound);
        }
        if removed.is_some() {
            log::info!("agent {} disconnected", agent_id);
        }
        self.dispatch(outbound).await;
        if let Some((speaker_id, request_id, duration)) = drained {
            self.arm_timeout(speaker_id, request_id, duration).await;
        }
    }

    /// Approximate wait time for a still-queued request: a constant
    /// allowance for however long the current speaker has left, plus the
    /// summed `estimated_duration` of every request ahead of it. Returns
    /// `0` for a request that isn't queued at all — already granted (it's
    /// the current speaker's own turn) or already terminated.
    pub async fn estimate_wait(&self, request_id: &str) -> f64 {
        let inner = self.inner.lock().await;
        if inner.queue.position_of(request_id) == 0 {
            return 0.0;
        }
        let mut wait = inner.queue.duration_ahead_of(request_id);
        if inner.current_speaker.is_some() {
            wait += self.config.estimated_wait_constant.as_secs_f64();
        }
        wait
    }

    pub async fn status_snapshot(&self) -> StatusSnapshot {
        let inner = self.inner.lock().await;
        build_snapshot(
            &inner.agents,
            inner.current_speaker.clone(),
            inner.queue.len(),
        )
    }

    pub async fn list_agents(&self) -> Vec<Agent> {
        let inner = self.inner.lock().await;
        inner.agents.iter().cloned().collect()
    }

    pub async fn stale_agent_ids(&self) -> Vec<String> {
        let inner = self.inner.lock().await;
        inner
            .agents
            .stale_agent_ids(chrono::Duration::from_std(self.config.heartbeat_timeout).unwrap())
    }

    /// Spawn the grace-extended timeout for a just-granted turn, then
    /// briefly reacquire the lock to store its abort handle. Since the lock
    /// can't be held across the spawn (the caller that granted the turn may
    /// still be holding it, or may have just released it), there's a window
    /// where a concurrent `complete`/`disconnect` could already have ended
    /// this exact turn by the time we come back to store the handle; in
    /// that case the request no longer matches and we abort the task we
    /// just spawned instead of leaving it to fire later against a stale
    /// turn.
    async fn arm_timeout(&self, agent_id: String, request_id: String, duration: Duration) {
        let grace = duration + self.config.speech_grace;
        let coordinator = self.clone();
        let timeout_agent_id = agent_id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            coordinator
                .complete(&timeout_agent_id, CompletionReason::Timeout)
                .await
                .ok();
        });

        let mut inner = self.inner.lock().await;
        if inner.current_speaker.as_deref() == Some(agent_id.as_str())
            && inner.current_request_id.as_deref() == Some(request_id.as_str())
        {
            inner.timeout_handle = Some(handle.abort_handle());
        } else {
            handle.abort_handle().abort();
        }
    }

    async fn dispatch(&self, outbound: Vec<Outbound>) {
        for (agent_id, sender, msg) in outbound {
            let coordinator = self.clone();
            let timeout = self.config.send_timeout;
            tokio::spawn(async move {
                match tokio::time::timeout(timeout, sender.send(msg)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(_)) | Err(_) => {
                        log::warn!("dropping unreachable peer {}", agent_id);
                        coordinator.disconnect(&agent_id).await;
                    }
                }
            });
        }
    }

    /// Exposed for transport code that needs `now_utc` consistency with the
    /// coordinator's own timestamps (e.g. stamping a REST response).
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        now_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> (mpsc::Sender<ServerMessage>, mpsc::Receiver<ServerMessage>) {
        mpsc::channel(32)
    }

    async fn register(coordinator: &Coordinator, id: &str, priority: u8) -> mpsc::Receiver<ServerMessage> {
        let (tx, rx) = channel();
        coordinator
            .register(id, format!("Agent {id}"), "claude-code", Some(priority), None, None, tx)
            .await;
        rx
    }

    #[tokio::test]
    async fn single_agent_is_granted_immediately() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        let mut rx = register(&coordinator, "a1", 5).await;
        let _ = rx.recv().await; // registration_confirmed

        let result = coordinator
            .submit("a1", "hello", None, Some(5.0), HashMap::new())
            .await
            .unwrap();
        assert!(matches!(result, SubmitResult::Granted { .. }));

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, ServerMessage::SpeakGranted { .. }));
    }

    #[tokio::test]
    async fn second_request_is_queued_behind_first() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        let mut rx_a = register(&coordinator, "a1", 5).await;
        let mut rx_b = register(&coordinator, "a2", 5).await;
        let _ = rx_a.recv().await;
        let _ = rx_b.recv().await;
        let _ = rx_b.recv().await; // agent_joined for a1's broadcast to a2, order varies; drain defensively below

        coordinator
            .submit("a1", "first", None, Some(5.0), HashMap::new())
            .await
            .unwrap();
        let result = coordinator
            .submit("a2", "second", None, Some(5.0), HashMap::new())
            .await
            .unwrap();
        match result {
            SubmitResult::Queued { position, .. } => assert_eq!(position, 1),
            other => panic!("expected Queued, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn higher_priority_jumps_the_queue() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        register(&coordinator, "a1", 5).await;
        register(&coordinator, "a2", 5).await;
        register(&coordinator, "a3", 5).await;

        coordinator
            .submit("a1", "low", Some(3), Some(5.0), HashMap::new())
            .await
            .unwrap();
        coordinator
            .submit("a2", "mid", Some(5), Some(5.0), HashMap::new())
            .await
            .unwrap();
        let high = coordinator
            .submit("a3", "high", Some(9), Some(5.0), HashMap::new())
            .await
            .unwrap();
        match high {
            SubmitResult::Queued { position, .. } => assert_eq!(position, 1),
            other => panic!("expected Queued, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn completing_grants_next_in_queue() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        let mut rx_b = register(&coordinator, "a2", 5).await;
        register(&coordinator, "a1", 5).await;
        let _ = rx_b.recv().await;

        coordinator
            .submit("a1", "first", None, Some(0.01), HashMap::new())
            .await
            .unwrap();
        let queued = coordinator
            .submit("a2", "second", None, Some(0.01), HashMap::new())
            .await
            .unwrap();
        assert!(matches!(queued, SubmitResult::Queued { .. }));

        coordinator
            .complete("a1", CompletionReason::Normal)
            .await
            .unwrap();

        let mut saw_grant = false;
        for _ in 0..5 {
            if let Ok(Some(ServerMessage::SpeakGranted { .. })) =
                tokio::time::timeout(Duration::from_millis(50), rx_b.recv()).await
            {
                saw_grant = true;
                break;
            }
        }
        assert!(saw_grant, "a2 should have been granted after a1 completed");
    }

    #[tokio::test]
    async fn disconnect_while_speaking_emits_complete_then_disconnect_then_grant() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        let mut rx_b = register(&coordinator, "a2", 5).await;
        register(&coordinator, "a1", 5).await;
        let _ = rx_b.recv().await;

        coordinator
            .submit("a1", "first", None, Some(5.0), HashMap::new())
            .await
            .unwrap();
        coordinator
            .submit("a2", "second", None, Some(5.0), HashMap::new())
            .await
            .unwrap();

        coordinator.disconnect("a1").await;

        let mut events = Vec::new();
        for _ in 0..4 {
            match tokio::time::timeout(Duration::from_millis(100), rx_b.recv()).await {
                Ok(Some(msg)) => events.push(msg),
                _ => break,
            }
        }

        let kinds: Vec<&str> = events
            .iter()
            .map(|m| match m {
                ServerMessage::SpeechComplete { .. } => "speech_complete",
                ServerMessage::AgentDisconnected { .. } => "agent_disconnected",
                ServerMessage::SpeakGranted { .. } => "speak_granted",
                _ => "other",
            })
            .collect();

        let complete_idx = kinds.iter().position(|k| *k == "speech_complete");
        let disconnect_idx = kinds.iter().position(|k| *k == "agent_disconnected");
        let grant_idx = kinds.iter().position(|k| *k == "speak_granted");
        assert!(complete_idx.is_some() && disconnect_idx.is_some() && grant_idx.is_some());
        assert!(complete_idx < disconnect_idx);
        assert!(disconnect_idx < grant_idx);
    }

    #[tokio::test]
    async fn clients_cannot_self_declare_speaking() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        register(&coordinator, "a1", 5).await;
        let err = coordinator
            .set_client_status("a1", AgentStatus::Speaking, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CoordinatorError::InvalidMessage(_)));
    }

    #[tokio::test]
    async fn unknown_agent_operations_return_error() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        let err = coordinator.heartbeat("ghost").await.unwrap_err();
        assert!(matches!(err, CoordinatorError::UnknownAgent(_)));
    }

    #[tokio::test]
    async fn estimate_wait_is_zero_for_the_granted_requests_own_turn() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        register(&coordinator, "a1", 5).await;
        let result = coordinator
            .submit("a1", "hello", None, Some(5.0), HashMap::new())
            .await
            .unwrap();
        assert!(matches!(result, SubmitResult::Granted { .. }));
        assert_eq!(coordinator.estimate_wait(result.request_id()).await, 0.0);
    }

    #[tokio::test]
    async fn estimate_wait_accounts_for_ahead_durations_and_current_speaker() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        register(&coordinator, "a1", 5).await;
        register(&coordinator, "a2", 5).await;
        register(&coordinator, "a3", 5).await;

        coordinator
            .submit("a1", "first", None, Some(10.0), HashMap::new())
            .await
            .unwrap();
        coordinator
            .submit("a2", "second", None, Some(20.0), HashMap::new())
            .await
            .unwrap();
        let third = coordinator
            .submit("a3", "third", None, Some(30.0), HashMap::new())
            .await
            .unwrap();

        // a1 is speaking; a2 (20s) sits ahead of a3 in the queue.
        let wait = coordinator.estimate_wait(third.request_id()).await;
        assert_eq!(wait, 20.0 + 5.0);
    }

    #[tokio::test]
    async fn estimate_wait_is_zero_for_an_unknown_request_id() {
        let coordinator = Coordinator::new(CoordinatorConfig::default());
        assert_eq!(coordinator.estimate_wait("not-a-real-id").await, 0.0);
    }
}
