//! Wire message types for the duplex channel.
//!
//! Tagged enums following the `#[serde(tag = "type")]` pattern used
//! throughout this lineage's WebSocket handlers — one Rust variant per JSON
//! `type` discriminant, inbound and outbound kept as separate enums since
//! they never overlap.

use crate::voice::model::{Agent, AgentStatus};
use crate::voice::status::StatusSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Liveness status a client is allowed to self-report. Notably missing
/// `Speaking` — only the coordinator can put an agent into that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Idle,
    Listening,
    Busy,
}

impl From<ClientStatus> for AgentStatus {
    fn from(status: ClientStatus) -> Self {
        match status {
            ClientStatus::Idle => AgentStatus::Idle,
            ClientStatus::Listening => AgentStatus::Listening,
            ClientStatus::Busy => AgentStatus::Busy,
        }
    }
}

/// Messages a client sends over the duplex channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "register")]
    Register {
        #[serde(default)]
        name: Option<String>,
        #[serde(default, rename = "agent_type")]
        agent_type: Option<String>,
        #[serde(default)]
        priority: Option<u8>,
        #[serde(default)]
        workspace_id: Option<String>,
        #[serde(default)]
        user_id: Option<String>,
    },
    #[serde(rename = "heartbeat")]
    Heartbeat,
    #[serde(rename = "speak_request")]
    SpeakRequest {
        #[serde(default)]
        message: String,
        #[serde(default)]
        priority: Option<u8>,
        #[serde(default)]
        estimated_duration: Option<f64>,
        #[serde(default)]
        voice_settings: HashMap<String, Value>,
    },
    #[serde(rename = "status_update")]
    StatusUpdate {
        status: ClientStatus,
        #[serde(default)]
        priority: Option<u8>,
    },
    #[serde(rename = "speech_complete")]
    SpeechComplete,
}

/// Messages the server sends over the duplex channel (and, for
/// `AgentJoined`/`AgentStatusUpdate`/`AgentDisconnected`, fans out through
/// the REST surface's equivalent too — see `docs` on
/// [`crate::voice::coordinator::Coordinator`]).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "registration_confirmed")]
    RegistrationConfirmed {
        agent_id: String,
        server_status: StatusSnapshot,
    },
    #[serde(rename = "speak_granted")]
    SpeakGranted {
        request_id: String,
        message: String,
        voice_settings: HashMap<String, Value>,
        estimated_duration: f64,
    },
    #[serde(rename = "speak_denied")]
    SpeakDenied { reason: String },
    #[serde(rename = "agent_speaking")]
    AgentSpeaking {
        speaker_id: String,
        speaker_name: String,
        estimated_duration: f64,
    },
    #[serde(rename = "speech_complete")]
    SpeechComplete { agent_id: String, timeout: bool },
    #[serde(rename = "agent_joined")]
    AgentJoined { agent: Agent },
    #[serde(rename = "agent_status_update")]
    AgentStatusUpdate {
        agent_id: String,
        status: AgentStatus,
        priority: u8,
    },
    #[serde(rename = "agent_disconnected")]
    AgentDisconnected {
        agent_id: String,
        agent_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_message_parses_with_defaults() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"register","name":"A"}"#).unwrap();
        match msg {
            ClientMessage::Register { name, priority, .. } => {
                assert_eq!(name.as_deref(), Some("A"));
                assert_eq!(priority, None);
            }
            _ => panic!("expected Register"),
        }
    }

    #[test]
    fn status_update_rejects_speaking_variant() {
        let err = serde_json::from_str::<ClientMessage>(
            r#"{"type":"status_update","status":"speaking"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn speech_complete_roundtrips_tag() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"speech_complete"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::SpeechComplete));
    }

    #[test]
    fn server_message_serializes_with_type_tag() {
        let msg = ServerMessage::SpeechComplete {
            agent_id: "a1".into(),
            timeout: true,
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "speech_complete");
        assert_eq!(json["timeout"], true);
    }
}
