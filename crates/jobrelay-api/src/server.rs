//! API server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use jobrelay_config::ServerConfig;

use crate::http::monitoring::init_start_time;
use crate::http::routes::create_router;
use crate::state::AppState;

/// The HTTP server.
pub struct ApiServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Serve until Ctrl+C.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(self.state.clone());

        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        init_start_time();
        info!("API server listening on {}", addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("API server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::MemoryJobStore;
    use jobrelay_config::{JobsConfig, RemoteConfig};
    use jobrelay_gitlab::{CommitRelay, GitLabClient};

    fn create_test_state() -> Arc<AppState> {
        let remote = RemoteConfig::new("tok", 1, "g/p");
        let relay = Arc::new(CommitRelay::new(
            Arc::new(GitLabClient::new(remote.clone())),
            "main",
        ));
        Arc::new(AppState::new(
            Arc::new(MemoryJobStore::default()),
            relay,
            remote,
            JobsConfig::default(),
        ))
    }

    #[test]
    fn test_api_server_addr() {
        let server = ApiServer::new(ServerConfig::default(), create_test_state());
        assert_eq!(server.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_api_server_addr_format() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        let server = ApiServer::new(config, create_test_state());
        assert_eq!(server.addr(), "0.0.0.0:3000");
    }

    #[tokio::test]
    async fn test_api_server_rejects_bad_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
        };
        let server = ApiServer::new(config, create_test_state());
        assert!(server.run().await.is_err());
    }
}
