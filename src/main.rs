use std::net::SocketAddr;
use voice_coordinator::voice::config::CoordinatorConfig;
use voice_coordinator::voice::{janitor, transport, Coordinator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = CoordinatorConfig::default();
    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port.parse().map_err(|_| "PORT must be a valid u16")?;
        let mut addr = config.bind_addr;
        addr.set_port(port);
        config.bind_addr = addr;
    }

    let bind_addr: SocketAddr = config.bind_addr;
    let coordinator = Coordinator::new(config);
    let janitor_handle = janitor::spawn(coordinator.clone());

    let app = transport::build_router(coordinator);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    log::info!("voice coordinator listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    janitor_handle.abort();
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::info!("shutdown signal received");
}
