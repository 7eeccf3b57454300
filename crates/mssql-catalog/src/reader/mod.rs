//! Forward-only row cursor with typed, null-aware accessors.
//!
//! [`RowReader`] is what every catalog view reader wraps. It owns a
//! materialized result set and walks it one row at a time: nothing is
//! readable until the first [`RowReader::read`], and a row cannot be revisited
//! once the cursor moves past it.

mod params;

pub use params::Param;

use std::collections::VecDeque;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tiberius::Row;
use tracing::warn;
use uuid::Uuid;

use crate::core::{FromSqlValue, SqlValue};
use crate::error::{CatalogError, Result};

/// Forward-only cursor over a result set.
#[derive(Debug, Clone)]
pub struct RowReader {
    columns: Vec<String>,
    pending: VecDeque<Vec<SqlValue>>,
    current: Option<Vec<SqlValue>>,
    records_read: usize,
}

/// Generates `get_*` and `get_nullable_*` pairs for one Rust type.
macro_rules! typed_getters {
    ($($get:ident, $get_nullable:ident => $ty:ty;)+) => {
        $(
            #[doc = concat!("Read a non-NULL `", stringify!($ty), "` column.")]
            pub fn $get(&self, ordinal: usize) -> Result<$ty> {
                self.get::<$ty>(ordinal)
            }

            #[doc = concat!("Read a nullable `", stringify!($ty), "` column.")]
            pub fn $get_nullable(&self, ordinal: usize) -> Result<Option<$ty>> {
                self.get::<Option<$ty>>(ordinal)
            }
        )+
    };
}

impl RowReader {
    /// Create a reader over already converted rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self {
            columns,
            pending: rows.into(),
            current: None,
            records_read: 0,
        }
    }

    /// Create a reader from tiberius rows of a single result set.
    ///
    /// Column names come from the first row's metadata; an empty result set
    /// yields a reader with no columns.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let columns = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let mut converted = Vec::with_capacity(rows.len());
        for row in rows {
            let values = row
                .into_iter()
                .map(SqlValue::from_column_data)
                .collect::<Result<Vec<_>>>()?;
            converted.push(values);
        }

        Ok(Self::new(columns, converted))
    }

    /// Advance to the next row. Returns `false` once the result set is exhausted.
    pub fn read(&mut self) -> bool {
        self.current = self.pending.pop_front();
        if self.current.is_some() {
            self.records_read += 1;
            true
        } else {
            false
        }
    }

    /// Whether a current row is available.
    pub fn has_row(&self) -> bool {
        self.current.is_some()
    }

    /// Number of rows consumed so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Number of rows not yet read.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Number of columns in the result set.
    pub fn field_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in result set order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Name of the column at `ordinal`.
    pub fn column_name(&self, ordinal: usize) -> Result<&str> {
        self.columns
            .get(ordinal)
            .map(String::as_str)
            .ok_or(CatalogError::OrdinalOutOfRange {
                ordinal,
                field_count: self.columns.len(),
            })
    }

    /// Ordinal of a column by name (case-insensitive).
    pub fn get_ordinal(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Raw value at `ordinal` in the current row.
    pub fn get_value(&self, ordinal: usize) -> Result<&SqlValue> {
        let row = self.current.as_ref().ok_or(CatalogError::NoCurrentRow)?;
        row.get(ordinal).ok_or(CatalogError::OrdinalOutOfRange {
            ordinal,
            field_count: row.len(),
        })
    }

    /// Whether the value at `ordinal` is NULL.
    pub fn is_null(&self, ordinal: usize) -> Result<bool> {
        Ok(self.get_value(ordinal)?.is_null())
    }

    /// Read and convert the value at `ordinal`.
    ///
    /// Use `Option<T>` for nullable columns; any other `T` rejects NULL.
    pub fn get<T: FromSqlValue>(&self, ordinal: usize) -> Result<T> {
        let value = self.get_value(ordinal)?;
        T::from_sql_value(value).map_err(|e| {
            let column = self.columns.get(ordinal).map(String::as_str).unwrap_or("?");
            warn!("Column access failed at ordinal {} ({}): {}", ordinal, column, e);
            CatalogError::column(ordinal, column, e)
        })
    }

    /// Read and convert a nullable value at `ordinal`.
    pub fn get_nullable<T: FromSqlValue>(&self, ordinal: usize) -> Result<Option<T>> {
        self.get::<Option<T>>(ordinal)
    }

    typed_getters! {
        get_bool, get_nullable_bool => bool;
        get_u8, get_nullable_u8 => u8;
        get_i16, get_nullable_i16 => i16;
        get_i32, get_nullable_i32 => i32;
        get_i64, get_nullable_i64 => i64;
        get_f32, get_nullable_f32 => f32;
        get_f64, get_nullable_f64 => f64;
        get_decimal, get_nullable_decimal => Decimal;
        get_string, get_nullable_string => String;
        get_bytes, get_nullable_bytes => Vec<u8>;
        get_uuid, get_nullable_uuid => Uuid;
        get_datetime, get_nullable_datetime => NaiveDateTime;
        get_date, get_nullable_date => NaiveDate;
        get_time, get_nullable_time => NaiveTime;
        get_datetime_offset, get_nullable_datetime_offset => DateTime<FixedOffset>;
    }
}
