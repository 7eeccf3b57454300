//! Configuration validation.

use super::Config;
use crate::error::{CatalogError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.source.host.is_empty() {
        return Err(CatalogError::Config("source.host is required".into()));
    }
    if config.source.database.is_empty() {
        return Err(CatalogError::Config("source.database is required".into()));
    }
    if config.source.user.is_empty() {
        return Err(CatalogError::Config("source.user is required".into()));
    }
    if config.source.port == 0 {
        return Err(CatalogError::Config("source.port must be non-zero".into()));
    }

    if config.pool.max_connections == 0 {
        return Err(CatalogError::Config(
            "pool.max_connections must be at least 1".into(),
        ));
    }
    if config.pool.connection_timeout_secs == 0 {
        return Err(CatalogError::Config(
            "pool.connection_timeout_secs must be at least 1".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PoolConfig, SourceConfig};

    fn valid_config() -> Config {
        Config {
            source: SourceConfig {
                host: "localhost".to_string(),
                port: 1433,
                database: "master".to_string(),
                user: "sa".to_string(),
                password: "password".to_string(),
                encrypt: false,
                trust_server_cert: true,
            },
            pool: PoolConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = valid_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_source_host() {
        let mut config = valid_config();
        config.source.host = "".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_missing_user() {
        let mut config = valid_config();
        config.source.user = "".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_pool_size() {
        let mut config = valid_config();
        config.pool.max_connections = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_source_config_debug_redacts_password() {
        let mut config = valid_config();
        config.source.password = "super_secret_password_123".to_string();
        let debug_output = format!("{:?}", config.source);
        assert!(
            debug_output.contains("[REDACTED]"),
            "Debug output should contain [REDACTED]"
        );
        assert!(
            !debug_output.contains("super_secret_password_123"),
            "Debug output should not contain actual password value"
        );
    }
}
