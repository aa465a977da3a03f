//! Priority-ordered pending speech request queue.
//!
//! Ordering rule: strictly descending `priority`; ties broken by strictly
//! ascending `request_time` (FIFO within a priority band). Implemented as a
//! linear-scan insert — O(n), but trivially correct and this service's
//! queues are small (single coordinator, modest agent fleets).

use super::model::VoiceRequest;

/// The priority-ordered list of pending [`VoiceRequest`]s.
#[derive(Debug, Default)]
pub struct VoiceQueue {
    requests: Vec<VoiceRequest>,
}

impl VoiceQueue {
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
        }
    }

    /// Insert `request`, preserving the priority-desc/FIFO-within-priority
    /// ordering. Returns the 1-based position it landed at.
    pub fn enqueue(&mut self, request: VoiceRequest) -> usize {
        let idx = self
            .requests
            .iter()
            .position(|existing| request.priority > existing.priority)
            .unwrap_or(self.requests.len());
        self.requests.insert(idx, request);
        idx + 1
    }

    pub fn peek(&self) -> Option<&VoiceRequest> {
        self.requests.first()
    }

    pub fn pop(&mut self) -> Option<VoiceRequest> {
        if self.requests.is_empty() {
            None
        } else {
            Some(self.requests.remove(0))
        }
    }

    /// Remove every request belonging to `agent_id`. Returns how many were
    /// removed.
    pub fn remove_by_agent(&mut self, agent_id: &str) -> usize {
        let before = self.requests.len();
        self.requests.retain(|r| r.agent_id != agent_id);
        before - self.requests.len()
    }

    /// 1-based position of `request_id`, or `0` if it isn't queued.
    pub fn position_of(&self, request_id: &str) -> usize {
        self.requests
            .iter()
            .position(|r| r.id == request_id)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Total `estimated_duration` of every request strictly ahead of
    /// `request_id`. Returns `0.0` if the request isn't queued.
    pub fn duration_ahead_of(&self, request_id: &str) -> f64 {
        let mut total = 0.0;
        for r in &self.requests {
            if r.id == request_id {
                return total;
            }
            total += r.estimated_duration;
        }
        0.0
    }
}
