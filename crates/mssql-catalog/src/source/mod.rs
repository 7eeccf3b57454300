//! Where rows come from.
//!
//! [`RowSource`] is the single seam between the readers and a database: run
//! one statement with positional parameters and hand back a [`RowReader`].
//! [`MssqlPool`] is the SQL Server implementation.

mod mssql;

pub use mssql::{HealthCheckResult, MssqlPool};

use async_trait::async_trait;

use crate::error::Result;
use crate::reader::{Param, RowReader};
use crate::views::CatalogView;

/// Executes catalog queries.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Run `sql` with `params` bound to `@P1`, `@P2`, ... and return the first
    /// result set.
    async fn fetch(&self, sql: &str, params: &[Param]) -> Result<RowReader>;

    /// Run a view's query unfiltered and read every row.
    async fn read_view<V: CatalogView>(&self) -> Result<Vec<V::Data>>
    where
        Self: Sized,
    {
        let reader = self.fetch(V::SQL, &[]).await?;
        V::from_reader(reader).into_data()
    }
}
