//! WebSocket duplex channel: one agent per connection.
//!
//! Mirrors the split-socket/pump-task shape used for realtime voice sessions
//! elsewhere in this corpus — the socket is split into a sink and a stream,
//! a bounded channel feeds the sink from a dedicated pump task, and the
//! connection's own task owns the stream, translating inbound JSON into
//! [`Coordinator`] calls.

use super::super::coordinator::{CompletionReason, Coordinator};
use super::messages::{ClientMessage, ServerMessage};
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

pub async fn ws_handler(ws: WebSocketUpgrade, State(coordinator): State<Coordinator>) -> Response {
    ws.on_upgrade(|socket| handle_session(socket, coordinator))
}

async fn handle_session(socket: WebSocket, coordinator: Coordinator) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let capacity = coordinator.config().outbound_channel_capacity;
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(capacity);

    let pump = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(e) => {
                    log::error!("failed to serialize outbound message: {}", e);
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut agent_id: Option<String> = None;

    while let Some(Ok(msg)) = ws_rx.next().await {
        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let client_msg: ClientMessage = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("dropping unparseable message: {}", e);
                continue;
            }
        };

        if let ClientMessage::Register {
            name,
            agent_type,
            priority,
            workspace_id,
            user_id,
        } = client_msg
        {
            let id = super::super::clock::new_id();
            coordinator
                .register(
                    id.clone(),
                    name.unwrap_or_else(|| id.clone()),
                    agent_type.unwrap_or_else(|| "unknown".to_string()),
                    priority,
                    workspace_id,
                    user_id,
                    tx.clone(),
                )
                .await;
            agent_id = Some(id);
            continue;
        }

        let Some(id) = agent_id.as_ref() else {
            log::warn!("ignoring message received before registration");
            continue;
        };

        // Any inbound message counts as liveness, not just an explicit
        // `heartbeat` — matches the "heartbeat is additionally implicit on
        // every inbound message" rule. Harmless to repeat for the
        // `Heartbeat` variant itself.
        let _ = coordinator.heartbeat(id).await;

        match client_msg {
            ClientMessage::Register { .. } => unreachable!("handled above"),
            ClientMessage::Heartbeat => {}
            ClientMessage::SpeakRequest {
                message,
                priority,
                estimated_duration,
                voice_settings,
            } => {
                if let Err(e) = coordinator
                    .submit(id, message, priority, estimated_duration, voice_settings)
                    .await
                {
                    let _ = tx
                        .send(ServerMessage::SpeakDenied {
                            reason: e.to_string(),
                        })
                        .await;
                }
            }
            ClientMessage::StatusUpdate { status, priority } => {
                if coordinator
                    .set_client_status(id, status.into(), priority)
                    .await
                    .is_err()
                {
                    log::warn!("status update from unknown agent {}", id);
                }
            }
            ClientMessage::SpeechComplete => {
                let _ = coordinator.complete(id, CompletionReason::Normal).await;
            }
        }
    }

    pump.abort();
    if let Some(id) = agent_id {
        coordinator.disconnect(&id).await;
    }
}
