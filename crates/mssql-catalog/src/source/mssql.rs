//! SQL Server row source backed by a bb8 pool of tiberius clients.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use bb8::{Pool, PooledConnection};
use serde::Serialize;
use tiberius::{AuthMethod, Client, Config, EncryptionLevel, Query};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::{debug, info, warn};

use super::RowSource;
use crate::config::{Config as CatalogConfig, PoolConfig, SourceConfig};
use crate::error::{CatalogError, Result};
use crate::reader::{Param, RowReader};

/// Idle connection timeout (5 minutes).
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Maximum connection lifetime (30 minutes).
const POOL_MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// TCP keepalive interval (30 seconds).
const TCP_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(30);

/// Connection manager for bb8 pool with tiberius.
#[derive(Clone)]
struct TiberiusConnectionManager {
    config: SourceConfig,
}

impl TiberiusConnectionManager {
    fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    fn build_config(&self) -> Config {
        let mut config = Config::new();
        config.host(&self.config.host);
        config.port(self.config.port);
        config.database(&self.config.database);
        config.authentication(AuthMethod::sql_server(&self.config.user, &self.config.password));

        if self.config.encrypt {
            if self.config.trust_server_cert {
                config.trust_cert();
            }
            config.encryption(EncryptionLevel::Required);
        } else {
            config.encryption(EncryptionLevel::NotSupported);
        }

        config
    }
}

fn io_error(e: std::io::Error, what: &str) -> tiberius::error::Error {
    tiberius::error::Error::Io {
        kind: e.kind(),
        message: format!("{}: {}", what, e),
    }
}

#[async_trait]
impl bb8::ManageConnection for TiberiusConnectionManager {
    type Connection = Client<Compat<TcpStream>>;
    type Error = tiberius::error::Error;

    async fn connect(&self) -> std::result::Result<Self::Connection, Self::Error> {
        let config = self.build_config();
        let tcp = TcpStream::connect(config.get_addr())
            .await
            .map_err(|e| io_error(e, "Failed to connect"))?;
        tcp.set_nodelay(true).ok();

        // Keepalives go through socket2; the tokio stream does not expose them.
        let std_tcp = tcp
            .into_std()
            .map_err(|e| io_error(e, "Failed to detach socket"))?;
        let socket = socket2::Socket::from(std_tcp);
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(TCP_KEEPALIVE_INTERVAL)
            .with_interval(TCP_KEEPALIVE_INTERVAL);
        if let Err(e) = socket.set_tcp_keepalive(&keepalive) {
            warn!("Failed to set TCP keepalive on MSSQL connection: {}", e);
        }

        let std_tcp: std::net::TcpStream = socket.into();
        std_tcp.set_nonblocking(true).ok();
        let tcp = TcpStream::from_std(std_tcp).map_err(|e| io_error(e, "Failed to convert socket"))?;

        Client::connect(config, tcp.compat_write()).await
    }

    async fn is_valid(&self, conn: &mut Self::Connection) -> std::result::Result<(), Self::Error> {
        conn.simple_query("SELECT 1").await?.into_row().await?;
        Ok(())
    }

    fn has_broken(&self, _conn: &mut Self::Connection) -> bool {
        false
    }
}

/// Outcome of [`MssqlPool::health_check`].
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    pub healthy: bool,
    pub latency_ms: u64,
    /// First line of `@@VERSION`.
    pub server_version: Option<String>,
    pub error: Option<String>,
}

/// Pooled SQL Server connections.
pub struct MssqlPool {
    pool: Pool<TiberiusConnectionManager>,
    config: SourceConfig,
}

impl MssqlPool {
    /// Connect using the `source` and `pool` sections of a loaded config.
    pub async fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::connect(config.source.clone(), &config.pool).await
    }

    /// Build the pool and verify one connection with `SELECT 1`.
    pub async fn connect(config: SourceConfig, pool_config: &PoolConfig) -> Result<Self> {
        let manager = TiberiusConnectionManager::new(config.clone());
        let pool = Pool::builder()
            .max_size(pool_config.max_connections)
            .min_idle(Some(1))
            .connection_timeout(Duration::from_secs(pool_config.connection_timeout_secs))
            .idle_timeout(Some(POOL_IDLE_TIMEOUT))
            .max_lifetime(Some(POOL_MAX_LIFETIME))
            .test_on_check_out(true)
            .build(manager)
            .await
            .map_err(|e| CatalogError::pool(e, "creating MSSQL connection pool"))?;

        {
            let mut conn = pool
                .get()
                .await
                .map_err(|e| CatalogError::pool(e, "testing MSSQL connection"))?;
            conn.simple_query("SELECT 1").await?.into_row().await?;
        }

        info!(
            "Connected to MSSQL: {} (pool_size={})",
            config.display_string(),
            pool_config.max_connections
        );

        Ok(Self { pool, config })
    }

    /// Connection settings the pool was built with.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn get_client(&self) -> Result<PooledConnection<'_, TiberiusConnectionManager>> {
        self.pool
            .get()
            .await
            .map_err(|e| CatalogError::pool(e, "getting MSSQL connection from pool"))
    }

    /// Round-trip to the server and report latency and version.
    ///
    /// Failures are reported in the result, not as an error.
    pub async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        match self.server_version().await {
            Ok(version) => HealthCheckResult {
                healthy: true,
                latency_ms: start.elapsed().as_millis() as u64,
                server_version: version,
                error: None,
            },
            Err(e) => {
                warn!("Health check failed: {}", e);
                HealthCheckResult {
                    healthy: false,
                    latency_ms: start.elapsed().as_millis() as u64,
                    server_version: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn server_version(&self) -> Result<Option<String>> {
        let mut client = self.get_client().await?;
        let row = client.simple_query("SELECT @@VERSION").await?.into_row().await?;
        Ok(row.and_then(|r| {
            r.get::<&str, _>(0)
                .and_then(|v| v.lines().next())
                .map(|v| v.trim().to_string())
        }))
    }
}

#[async_trait]
impl RowSource for MssqlPool {
    async fn fetch(&self, sql: &str, params: &[Param]) -> Result<RowReader> {
        let mut client = self.get_client().await?;

        let mut query = Query::new(sql);
        for param in params {
            param.bind_to(&mut query);
        }

        let stream = query.query(&mut *client).await?;
        let rows = stream.into_first_result().await?;
        debug!("Fetched {} rows ({} params)", rows.len(), params.len());

        RowReader::from_rows(rows)
    }
}
