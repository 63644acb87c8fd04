//! orb-server: serves the lookup routes over the datastore selected by `ORB_ENVIRONMENT`.
//!
//! Run from repo root: `cargo run -p orb-server`

use orb_api::{app_router, ensure_datastore_exists, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("orb_api=info,orb_server=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config)?;
    ensure_datastore_exists(&state.provider)?;
    tracing::info!(
        environment = %state.provider.environment(),
        datastore = %state.provider.path().display(),
        "datastore resolved"
    );

    let app = app_router(state);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
