use std::env;
use anyhow::{Context, Result};

use crate::greeting::GreetingStrategy;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub greeting_strategy: GreetingStrategy,
    pub response_limit: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any variable source, `lookup` returning `None` for unset keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let greeting_strategy = match lookup("GREETING_STRATEGY") {
            Some(value) => value
                .parse::<GreetingStrategy>()
                .context("GREETING_STRATEGY must be 'static' or 'decorated'")?,
            None => GreetingStrategy::default(),
        };

        let response_limit = lookup("RESPONSE_LIMIT")
            .map(|value| value.parse::<usize>())
            .transpose()
            .context("RESPONSE_LIMIT must be a byte count")?;

        Ok(Config {
            service_port,
            service_host,
            greeting_strategy,
            response_limit,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Greeting strategy: {}", self.greeting_strategy.as_str());
        match self.response_limit {
            Some(limit) => tracing::info!("  Response limit: {} bytes", limit),
            None => tracing::info!("  Response limit: none"),
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("SERVICE_PORT", "3000"),
            ("SERVICE_HOST", "127.0.0.1"),
            ("GREETING_STRATEGY", "decorated"),
            ("RESPONSE_LIMIT", "512"),
        ])
        .unwrap();

        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.greeting_strategy, GreetingStrategy::Decorated);
        assert_eq!(config.response_limit, Some(512));
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.greeting_strategy, GreetingStrategy::Static);
        assert_eq!(config.response_limit, None);
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[("SERVICE_PORT", "not-a-number")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_from(&[("SERVICE_PORT", "99999")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_strategy() {
        let result = config_from(&[("GREETING_STRATEGY", "cowsay")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("GREETING_STRATEGY"));
        // The underlying parse error stays in the chain
        assert!(format!("{:#}", error).contains("cowsay"));
    }

    #[test]
    fn test_invalid_response_limit() {
        let result = config_from(&[("RESPONSE_LIMIT", "-1")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("RESPONSE_LIMIT"));
    }
}
