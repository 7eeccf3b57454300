//! # mssql-catalog
//!
//! Strongly typed readers over SQL Server catalog views and dynamic
//! management views.
//!
//! Each view (`sys.schemas`, `sys.dm_tran_locks`, `sys.xml_schema_types`, ...)
//! gets a reader with:
//!
//! - the fixed SQL text used to query it,
//! - a named ordinal constant per projected column,
//! - a typed accessor per column, nullable columns surfacing as `Option<T>`,
//! - `to_data()` for the current row and `read_all()` for the rest.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mssql_catalog::{Catalog, Config, MssqlPool, RowSource};
//! use mssql_catalog::views::DmTranLocksReader;
//!
//! #[tokio::main]
//! async fn main() -> mssql_catalog::Result<()> {
//!     let config = Config::load("config.yaml")?;
//!     let pool = MssqlPool::from_config(&config).await?;
//!
//!     for lock in pool.read_view::<DmTranLocksReader>().await? {
//!         println!("{} {} {}", lock.request_session_id, lock.resource_type, lock.request_mode);
//!     }
//!
//!     let catalog = Catalog::new(pool);
//!     if let Some(schema_id) = catalog.schema_id("dbo").await? {
//!         println!("{} tables in dbo", catalog.tables_in_schema(schema_id).await?.len());
//!     }
//!     Ok(())
//! }
//! ```

#![recursion_limit = "256"]

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod reader;
pub mod source;
pub mod views;

pub use catalog::{Catalog, PrimaryKey};
pub use config::{Config, PoolConfig, SourceConfig};
pub use crate::core::{ConversionError, FromSqlValue, SqlValue, SystemColumnType};
pub use error::{CatalogError, Result};
pub use reader::{Param, RowReader};
pub use source::{HealthCheckResult, MssqlPool, RowSource};
pub use views::registry::{self, ViewInfo};
pub use views::CatalogView;
