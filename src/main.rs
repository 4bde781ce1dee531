mod bootstrap;

use switcher_api::AppState;
use switcher_events::{AppEvent, EventBus};
use crate::bootstrap::{config, logging, router, table};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config_path = std::env::var("SWITCHER_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    // Built once; every request shares it read-only
    let path_table = table::initialize(&config, &events).await?;

    let app = router::build(&config, AppState::new(path_table));
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = bind_server(&addr).await?;

    events.emit(AppEvent::Ready {
        addr: addr.to_string(),
        base_url: config.server.base_url.to_string(),
    });

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received, initiating graceful shutdown...");
    };

    axum::serve(listener, app.into_make_service())
        .tcp_nodelay(config.server.tcp_nodelay)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}

async fn bind_server(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.split(':').last().unwrap_or("unknown");
            tracing::error!("❌ Port {} is already in use", port);
            tracing::error!("Another application is using this port");
            tracing::error!("Solutions:");
            tracing::error!("1. Stop the other application");
            tracing::error!("2. Change the port in config.toml");
            #[cfg(target_os = "windows")]
            tracing::error!("3. Find process: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("3. Find process: lsof -i :{}", port);
        } else {
            tracing::error!("❌ Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}
