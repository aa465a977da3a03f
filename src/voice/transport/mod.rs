//! The network surface: a WebSocket duplex channel for agents that stay
//! connected, plus a small REST surface for one-shot requests that don't
//! need a held-open socket (status polling, scripted agents).

pub mod duplex;
pub mod messages;
pub mod rest;

use super::coordinator::Coordinator;
use axum::routing::get;
use axum::Router;

/// Build the full `Router`: REST endpoints merged with the `/ws` upgrade
/// route, both sharing one [`Coordinator`] as state.
pub fn build_router(coordinator: Coordinator) -> Router {
    rest::routes()
        .route("/ws", get(duplex::ws_handler))
        .with_state(coordinator)
}
