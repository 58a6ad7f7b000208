//! `serve` - run the HTTP server.

use anyhow::Result;
use promptline_axum::{AppConfig, start_server};

/// Apply command-line overrides to `config`.
pub fn apply_overrides(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> AppConfig {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config
}

pub async fn execute(config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    start_server(apply_overrides(config, host, port)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        let config = apply_overrides(config, Some("127.0.0.1".to_string()), Some(9000));
        assert_eq!(config.server.addr(), "127.0.0.1:9000");

        let config = apply_overrides(config, None, None);
        assert_eq!(config.server.addr(), "127.0.0.1:9000");
    }
}
