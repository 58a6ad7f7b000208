//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the HTTP clients are instantiated and
//! wired into the core services.

use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use promptline_clients::{
    ClientConfig, DefaultCompletionClient, DefaultContentSafetyClient, DefaultLanguageClient,
};
use promptline_core::{
    CompletionPort, ContentSafetyPort, GrammarAnalyzerPort, MetricsService, PipelineSettings,
    PipelineTelemetry, PromptValidationService, ResponseGenerationService,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow only these origins. Validated when the configuration is read.
    AllowOrigins(Vec<HeaderValue>),
}

/// Listen address and CORS settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The collaborator ports the pipelines run against.
pub struct CollaboratorPorts {
    pub grammar: Arc<dyn GrammarAnalyzerPort>,
    pub safety: Arc<dyn ContentSafetyPort>,
    /// Completion deployment for rewrites and suggestions.
    pub rewrite: Arc<dyn CompletionPort>,
    /// Completion deployment for final responses.
    pub response: Arc<dyn CompletionPort>,
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    pub validation: Arc<PromptValidationService>,
    pub generation: Arc<ResponseGenerationService>,
    pub metrics: Arc<MetricsService>,
}

impl AxumContext {
    /// Wire the services around `ports`, sharing one telemetry recorder
    /// between both pipelines and the metrics service.
    pub fn from_ports(ports: CollaboratorPorts, settings: PipelineSettings) -> Self {
        let telemetry = Arc::new(PipelineTelemetry::new());

        let validation = PromptValidationService::new(
            ports.grammar,
            ports.safety,
            ports.rewrite,
            settings.clone(),
        )
        .with_observer(telemetry.clone());

        let generation =
            ResponseGenerationService::new(ports.response, settings).with_observer(telemetry.clone());

        Self {
            validation: Arc::new(validation),
            generation: Arc::new(generation),
            metrics: Arc::new(MetricsService::new(telemetry)),
        }
    }
}

/// Build the HTTP clients from `config` and wire them into the services.
pub fn bootstrap(config: &AppConfig) -> Result<AxumContext> {
    let client_config = ClientConfig::new().with_timeout(config.settings.collaborator_timeout);

    if config.content_safety.is_none() {
        warn!("Content Safety credentials missing; every prompt will be rejected");
    }
    if config.language.is_none() {
        warn!("Language credentials missing; grammar analysis will be skipped");
    }
    if config.rewrite.is_none() || config.response.is_none() {
        warn!("Completion provider missing for at least one deployment; fallbacks will be used");
    }

    info!(
        target: "promptline.bootstrap",
        safety_policy = %config.settings.safety_policy,
        timeout_secs = config.settings.collaborator_timeout.as_secs(),
        rewrite = ?config.rewrite,
        response = ?config.response,
        "Bootstrapping pipelines"
    );

    let ports = CollaboratorPorts {
        grammar: Arc::new(DefaultLanguageClient::new(
            config.language.clone(),
            &client_config,
        )?),
        safety: Arc::new(DefaultContentSafetyClient::new(
            config.content_safety.clone(),
            &client_config,
        )?),
        rewrite: Arc::new(DefaultCompletionClient::new(
            config.rewrite.clone(),
            &client_config,
        )?),
        response: Arc::new(DefaultCompletionClient::new(
            config.response.clone(),
            &client_config,
        )?),
    };

    Ok(AxumContext::from_ports(ports, config.settings.clone()))
}

/// Start the web server and run until Ctrl-C.
pub async fn start_server(config: AppConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    let app = create_router(ctx, &config.server.cors);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("promptline listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("promptline stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_without_credentials() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        let ctx = bootstrap(&config).unwrap();

        assert_eq!(ctx.validation.settings(), &config.settings);
        assert_eq!(ctx.metrics.snapshot().accuracy_pct, 0.0);
    }

    #[test]
    fn test_server_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig::AllowAll,
        };
        assert_eq!(server.addr(), "127.0.0.1:0");
    }
}
