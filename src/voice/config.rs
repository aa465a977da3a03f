//! Configuration for the voice coordination service.
//!
//! Mirrors the reference crate's `CloudLLMConfig`: a plain struct constructed
//! in code with a `Default` impl. No TOML/YAML/env-var parsing framework is
//! introduced — layered configuration is out of scope for the core. The
//! binary entry point may still read a single `PORT` variable as a minimal
//! convenience; that's a property of `main.rs`, not of this struct.

use std::net::SocketAddr;
use std::time::Duration;

/// Tunable timing and capacity parameters for a [`Coordinator`](crate::voice::coordinator::Coordinator).
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Address the HTTP/WebSocket transport binds to.
    pub bind_addr: SocketAddr,
    /// How often the janitor sweeps for stale agents.
    pub janitor_interval: Duration,
    /// How long an agent may go without a heartbeat before the janitor
    /// evicts it.
    pub heartbeat_timeout: Duration,
    /// Fixed grace window added to `estimated_duration` before a speech
    /// turn is force-completed as a timeout.
    pub speech_grace: Duration,
    /// Constant used by `estimate_wait` to approximate the current
    /// speaker's remaining time.
    pub estimated_wait_constant: Duration,
    /// Capacity of each per-agent outbound event channel.
    pub outbound_channel_capacity: usize,
    /// How long a single outbound send may block before being treated as a
    /// disconnect.
    pub send_timeout: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8765".parse().expect("static address parses"),
            janitor_interval: Duration::from_secs(30),
            heartbeat_timeout: Duration::from_secs(120),
            speech_grace: Duration::from_secs(10),
            estimated_wait_constant: Duration::from_secs(5),
            outbound_channel_capacity: 64,
            send_timeout: Duration::from_secs(5),
        }
    }
}
