use rep_tracker::{load_store, persist_store, router, AppState, Config, Session};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let session = Session::restore(load_store(&config.data_path).await);
    if let Err(err) = persist_store(&config.data_path, session.store()).await {
        error!("failed to persist restored state: {err}");
    }
    info!(
        count = session.state().count,
        goal = session.state().goal,
        theme = session.state().theme.as_str(),
        "restored tracker state"
    );

    let app = router(AppState::new(config.data_path.clone(), session));

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
