//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use std::path::Path;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

impl SourceConfig {
    /// Build an ADO-style connection string, with the password masked.
    pub fn display_string(&self) -> String {
        format!(
            "Server=tcp:{},{};Database={};User Id={};Password=****;Encrypt={};TrustServerCertificate={}",
            self.host, self.port, self.database, self.user, self.encrypt, self.trust_server_cert
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_applies_defaults() {
        let yaml = r#"
source:
  host: db.internal
  user: sa
  password: secret
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.source.port, 1433);
        assert_eq!(config.source.database, "master");
        assert!(config.source.encrypt);
        assert!(!config.source.trust_server_cert);
        assert_eq!(config.pool.max_connections, 4);
        assert_eq!(config.pool.connection_timeout_secs, 30);
    }

    #[test]
    fn test_from_yaml_explicit_values() {
        let yaml = r#"
source:
  host: localhost
  port: 14330
  database: AdventureWorks
  user: reader
  password: pw
  encrypt: false
  trust_server_cert: true
pool:
  max_connections: 2
  connection_timeout_secs: 5
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.source.port, 14330);
        assert_eq!(config.source.database, "AdventureWorks");
        assert!(!config.source.encrypt);
        assert_eq!(config.pool.max_connections, 2);
    }

    #[test]
    fn test_from_yaml_rejects_missing_source() {
        let err = Config::from_yaml("pool:\n  max_connections: 2\n").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_display_string_masks_password() {
        let config = Config::from_yaml(
            "source:\n  host: h\n  user: u\n  password: hunter2\n",
        )
        .unwrap();
        let s = config.source.display_string();
        assert!(s.contains("Server=tcp:h,1433"));
        assert!(!s.contains("hunter2"));
    }
}
