//! Stale-agent eviction.
//!
//! A background loop that periodically scans for agents whose heartbeat has
//! lapsed and disconnects them, freeing anyone waiting behind them in the
//! queue or holding the floor. Same "spawn a sleep loop" shape as the
//! reference crate's memory-expiration sweep, just checking heartbeats
//! instead of TTLs.

use super::coordinator::Coordinator;

/// Spawn the sweep loop. Returns its `JoinHandle` so the caller can abort it
/// on shutdown; dropping the handle without aborting leaves it running,
/// which is fine for the lifetime of the server process.
pub fn spawn(coordinator: Coordinator) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let interval = coordinator.config().janitor_interval;
        loop {
            tokio::time::sleep(interval).await;
            let stale = coordinator.stale_agent_ids().await;
            for agent_id in stale {
                log::warn!("janitor evicting stale agent {}", agent_id);
                coordinator.disconnect(&agent_id).await;
            }
        }
    })
}
