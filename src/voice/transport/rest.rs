//! Stateless REST surface: request/response endpoints that don't need a
//! held-open connection. Grounded on the reference crate's MCP HTTP adapter —
//! same `Router` + `State` + `Json` shape, one closure per route, status
//! codes mapped from [`CoordinatorError`].

use super::super::coordinator::Coordinator;
use super::super::model::AgentStatus;
use super::messages::ClientStatus;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

/// Routes not yet bound to a state instance, so [`super::build_router`] can
/// merge them with the duplex route before applying `with_state` once.
pub fn routes() -> Router<Coordinator> {
    Router::new()
        .route("/status", get(get_status))
        .route("/agents", get(list_agents))
        .route("/agents/{agent_id}/speak", post(submit_speak))
        .route("/agents/{agent_id}/status", post(update_status))
        .route("/agents/{agent_id}/heartbeat", post(heartbeat))
}

pub fn router(coordinator: Coordinator) -> Router {
    routes().with_state(coordinator)
}

async fn get_status(State(coordinator): State<Coordinator>) -> Response {
    let snapshot = coordinator.status_snapshot().await;
    (StatusCode::OK, Json(snapshot)).into_response()
}

async fn list_agents(State(coordinator): State<Coordinator>) -> Response {
    let agents = coordinator.list_agents().await;
    let total = agents.len();
    (StatusCode::OK, Json(json!({ "agents": agents, "total": total }))).into_response()
}

#[derive(Debug, Deserialize)]
struct SpeakBody {
    message: String,
    #[serde(default)]
    priority: Option<u8>,
    #[serde(default)]
    estimated_duration: Option<f64>,
    #[serde(default)]
    voice_settings: HashMap<String, serde_json::Value>,
}

async fn submit_speak(
    State(coordinator): State<Coordinator>,
    Path(agent_id): Path<String>,
    Json(body): Json<SpeakBody>,
) -> Response {
    match coordinator
        .submit(
            &agent_id,
            body.message,
            body.priority,
            body.estimated_duration,
            body.voice_settings,
        )
        .await
    {
        Ok(result) => {
            let estimated_wait = coordinator.estimate_wait(result.request_id()).await;
            (
                StatusCode::OK,
                Json(json!({
                    "request_id": result.request_id(),
                    "queued_at": result.queued_at(),
                    "queue_position": result.queue_position(),
                    "estimated_wait": estimated_wait,
                })),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status: ClientStatus,
    #[serde(default)]
    priority: Option<u8>,
}

async fn update_status(
    State(coordinator): State<Coordinator>,
    Path(agent_id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Response {
    let status: AgentStatus = body.status.into();
    match coordinator
        .set_client_status(&agent_id, status, body.priority)
        .await
    {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(e) => error_response(e),
    }
}

async fn heartbeat(
    State(coordinator): State<Coordinator>,
    Path(agent_id): Path<String>,
) -> Response {
    match coordinator.heartbeat(&agent_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: super::super::error::CoordinatorError) -> Response {
    use super::super::error::CoordinatorError;
    let status = match err {
        CoordinatorError::UnknownAgent(_) => StatusCode::NOT_FOUND,
        CoordinatorError::InvalidMessage(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
