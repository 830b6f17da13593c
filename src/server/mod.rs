//! HTTP surface for the gesture inference service.
//!
//! One prediction endpoint plus a static landing page, with permissive
//! CORS so browser frontends can call the service from any origin.

mod api;
mod error;
mod handlers;
mod state;

pub use api::create_router;
pub use handlers::{PredictRequest, PredictResponse};
pub use state::AppState;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use log::info;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the landing page and frontend assets. `None`
    /// falls back to the built-in page.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: Some(PathBuf::from("static")),
        }
    }
}

/// Binds the listener and serves requests until ctrl-c.
pub async fn run_server(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Gesture inference service listening on http://{} (model {})",
        addr,
        if state.model.is_some() { "loaded" } else { "unavailable" }
    );

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received, stopping server");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.static_dir.is_some());
    }
}
