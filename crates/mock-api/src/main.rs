use signalfx_mock_api::config::MockApiConfig;
use signalfx_mock_api::{router, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match MockApiConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let app = router(AppState::new(config.auth_token));
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.addr, "bind failed: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.addr, "mock alert-muting API listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server: {e}");
    }
}
