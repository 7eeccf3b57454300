//! Typed readers over SQL Server catalog views and DMVs.
//!
//! Every module here declares one view through `catalog_view!` and exposes a
//! reader (`XxxReader`) plus its row type. Generic code works through the
//! [`CatalogView`] trait; the CLI goes through [`registry`].

#[macro_use]
mod macros;

pub mod registry;

pub mod all_parameters;
pub mod check_constraints;
pub mod columns;
pub mod computed_columns;
pub mod databases;
pub mod default_constraints;
pub mod dm_db_xtp_checkpoint_stats;
pub mod dm_exec_query_stats;
pub mod dm_exec_requests;
pub mod dm_resource_governor_resource_pools;
pub mod dm_tran_locks;
pub mod foreign_key_columns;
pub mod foreign_keys;
pub mod identity_columns;
pub mod index_columns;
pub mod indexes;
pub mod masked_columns;
pub mod objects;
pub mod query_store_runtime_stats;
pub mod schemas;
pub mod system_columns;
pub mod system_objects;
pub mod system_views;
pub mod tables;
pub mod types;
pub mod views;
pub mod xml_schema_types;

pub use all_parameters::{AllParametersReader, Parameter};
pub use check_constraints::{CheckConstraint, CheckConstraintsReader};
pub use columns::{Column, ColumnsReader};
pub use computed_columns::{ComputedColumn, ComputedColumnsReader};
pub use databases::{
    Database, DatabaseState, DatabaseUserAccess, DatabasesReader, PageVerifyOption, RecoveryModel,
};
pub use default_constraints::{DefaultConstraint, DefaultConstraintsReader};
pub use dm_db_xtp_checkpoint_stats::{DmDbXtpCheckpointStats, DmDbXtpCheckpointStatsReader};
pub use dm_exec_query_stats::{DmExecQueryStats, DmExecQueryStatsReader};
pub use dm_exec_requests::{DmExecRequest, DmExecRequestsReader};
pub use dm_resource_governor_resource_pools::{
    DmResourceGovernorResourcePool, DmResourceGovernorResourcePoolsReader,
};
pub use dm_tran_locks::{DmTranLock, DmTranLocksReader};
pub use foreign_key_columns::{ForeignKeyColumn, ForeignKeyColumnsReader};
pub use foreign_keys::{ForeignKey, ForeignKeysReader};
pub use identity_columns::{IdentityColumn, IdentityColumnsReader};
pub use index_columns::{IndexColumn, IndexColumnsReader};
pub use indexes::{Index, IndexesReader};
pub use masked_columns::{MaskedColumn, MaskedColumnsReader};
pub use objects::{Object, ObjectsReader};
pub use query_store_runtime_stats::{QueryStoreRuntimeStats, QueryStoreRuntimeStatsReader};
pub use schemas::{Schema, SchemasReader};
pub use system_columns::SystemColumnsReader;
pub use system_objects::SystemObjectsReader;
pub use system_views::SystemViewsReader;
pub use tables::{Table, TablesReader};
pub use types::{DatabaseType, TypesReader};
pub use views::{View, ViewsReader};
pub use xml_schema_types::{XmlSchemaType, XmlSchemaTypesReader};

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::reader::{Param, RowReader};

/// A reader bound to one catalog view.
pub trait CatalogView: Sized {
    /// Row type produced by the reader.
    type Data: Serialize + Clone + Send + 'static;

    /// Fully qualified view name, e.g. `sys.schemas`.
    const VIEW: &'static str;

    /// Fixed SELECT text.
    const SQL: &'static str;

    /// Table alias used in [`Self::SQL`].
    const ALIAS: &'static str;

    /// Column names in SELECT order; the index of a name is its ordinal.
    const COLUMNS: &'static [&'static str];

    /// Wrap a cursor positioned before the first row.
    fn from_reader(reader: RowReader) -> Self;

    /// Consume the reader and collect every remaining row.
    fn into_data(self) -> Result<Vec<Self::Data>>;

    /// Ordinal of `column`, case-insensitive.
    fn ordinal_of(column: &str) -> Option<usize> {
        Self::COLUMNS.iter().position(|c| c.eq_ignore_ascii_case(column))
    }

    /// `alias.[column]` for a projected column, with the SQL spelling of its name.
    fn qualified_column(column: &str) -> Result<String> {
        let ordinal = Self::ordinal_of(column).ok_or_else(|| CatalogError::UnknownColumn {
            view: Self::VIEW.to_string(),
            column: column.to_string(),
        })?;
        Ok(format!("{}.[{}]", Self::ALIAS, Self::COLUMNS[ordinal]))
    }

    /// [`Self::SQL`] with an equality predicate per filter column, bound to
    /// `@P1`, `@P2`, ... in the given order.
    fn filtered_sql(filters: &[&str]) -> Result<String> {
        let mut predicates = Vec::with_capacity(filters.len());
        for (i, name) in filters.iter().enumerate() {
            predicates.push(format!("{} = @P{}", Self::qualified_column(name)?, i + 1));
        }
        Ok(append_where(Self::SQL, &predicates))
    }

    /// Statement and bind values for `(column, value)` equality filters.
    ///
    /// `= NULL` never matches in SQL Server, so a [`Param::Null`] filter
    /// becomes `IS NULL` and takes no parameter slot.
    fn bound_sql(filters: &[(&str, Param)]) -> Result<(String, Vec<Param>)> {
        let mut predicates = Vec::with_capacity(filters.len());
        let mut params = Vec::with_capacity(filters.len());
        for (name, value) in filters {
            let column = Self::qualified_column(name)?;
            if *value == Param::Null {
                predicates.push(format!("{} IS NULL", column));
            } else {
                params.push(value.clone());
                predicates.push(format!("{} = @P{}", column, params.len()));
            }
        }
        Ok((append_where(Self::SQL, &predicates), params))
    }
}

fn append_where(sql: &str, predicates: &[String]) -> String {
    if predicates.is_empty() {
        sql.to_string()
    } else {
        format!("{}\nWHERE {}", sql, predicates.join("\n  AND "))
    }
}

/// A one-row reader for a view, filled with a plausible value per declared
/// type except for the columns named in `nulls`.
#[cfg(test)]
pub(crate) fn sample_reader(
    columns: &[&str],
    rust_types: &[&str],
    nulls: &[&str],
) -> RowReader {
    use crate::core::SqlValue;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    let row = columns
        .iter()
        .zip(rust_types)
        .map(|(column, ty)| {
            if nulls.contains(column) {
                return SqlValue::Null;
            }
            let ty: String = ty.chars().filter(|c| !c.is_whitespace()).collect();
            let ty = ty
                .strip_prefix("Option<")
                .and_then(|t| t.strip_suffix('>'))
                .unwrap_or(&ty);
            match ty {
                "String" => SqlValue::String((*column).to_string()),
                "bool" => SqlValue::Bool(true),
                "i16" => SqlValue::I16(1),
                "i32" => SqlValue::I32(1),
                "i64" => SqlValue::I64(1),
                "f32" => SqlValue::F32(1.0),
                "f64" => SqlValue::F64(1.0),
                "Decimal" => SqlValue::Decimal(Decimal::from(1)),
                "Vec<u8>" => SqlValue::Bytes(vec![0x02, 0x00]),
                "Uuid" => SqlValue::Uuid(uuid::Uuid::nil()),
                "NaiveDateTime" => SqlValue::DateTime(
                    NaiveDate::from_ymd_opt(2024, 1, 1)
                        .unwrap()
                        .and_hms_opt(0, 0, 0)
                        .unwrap(),
                ),
                // tinyint and the code enums decoded from it
                _ => SqlValue::U8(0),
            }
        })
        .collect();

    RowReader::new(columns.iter().map(|c| c.to_string()).collect(), vec![row])
}
