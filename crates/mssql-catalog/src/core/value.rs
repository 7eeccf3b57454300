//! Owned cell values read from SQL Server result sets.
//!
//! Rows are materialized before they are handed to a reader, so every value
//! owns its data. [`SqlValue::from_column_data`] is the single place where
//! tiberius wire types become Rust values.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tiberius::{ColumnData, FromSql};
use uuid::Uuid;

use crate::error::{CatalogError, Result};

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,

    /// bit
    Bool(bool),

    /// tinyint
    U8(u8),

    /// smallint
    I16(i16),

    /// int
    I32(i32),

    /// bigint
    I64(i64),

    /// real
    F32(f32),

    /// float
    F64(f64),

    /// decimal, numeric
    Decimal(Decimal),

    /// Character data, including sysname and xml.
    String(String),

    /// binary, varbinary
    Bytes(Vec<u8>),

    /// uniqueidentifier
    Uuid(Uuid),

    /// datetime, datetime2, smalldatetime
    DateTime(NaiveDateTime),

    /// date
    Date(NaiveDate),

    /// time
    Time(NaiveTime),

    /// datetimeoffset
    DateTimeOffset(DateTime<FixedOffset>),
}

impl SqlValue {
    /// Convert raw tiberius column data into an owned value.
    pub fn from_column_data(data: ColumnData<'static>) -> Result<Self> {
        let value = match data {
            ColumnData::U8(v) => v.map(SqlValue::U8),
            ColumnData::I16(v) => v.map(SqlValue::I16),
            ColumnData::I32(v) => v.map(SqlValue::I32),
            ColumnData::I64(v) => v.map(SqlValue::I64),
            ColumnData::F32(v) => v.map(SqlValue::F32),
            ColumnData::F64(v) => v.map(SqlValue::F64),
            ColumnData::Bit(v) => v.map(SqlValue::Bool),
            ColumnData::String(v) => v.map(|s| SqlValue::String(s.into_owned())),
            ColumnData::Guid(v) => v.map(SqlValue::Uuid),
            ColumnData::Binary(v) => v.map(|b| SqlValue::Bytes(b.into_owned())),
            ColumnData::Xml(v) => v.map(|x| SqlValue::String(x.into_owned().into_string())),
            ColumnData::Numeric(v) => match v {
                Some(n) => Some(SqlValue::Decimal(
                    Decimal::try_from_i128_with_scale(n.value(), u32::from(n.scale()))
                        .map_err(|e| {
                            CatalogError::Conversion(format!(
                                "numeric {} (scale {}) out of range: {}",
                                n.value(),
                                n.scale(),
                                e
                            ))
                        })?,
                )),
                None => None,
            },
            ref d @ (ColumnData::DateTime(_)
            | ColumnData::SmallDateTime(_)
            | ColumnData::DateTime2(_)) => NaiveDateTime::from_sql(d)?.map(SqlValue::DateTime),
            ref d @ ColumnData::Date(_) => NaiveDate::from_sql(d)?.map(SqlValue::Date),
            ref d @ ColumnData::Time(_) => NaiveTime::from_sql(d)?.map(SqlValue::Time),
            ref d @ ColumnData::DateTimeOffset(_) => {
                DateTime::<FixedOffset>::from_sql(d)?.map(SqlValue::DateTimeOffset)
            }
        };

        Ok(value.unwrap_or(SqlValue::Null))
    }

    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// SQL Server type family of the value, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bit",
            SqlValue::U8(_) => "tinyint",
            SqlValue::I16(_) => "smallint",
            SqlValue::I32(_) => "int",
            SqlValue::I64(_) => "bigint",
            SqlValue::F32(_) => "real",
            SqlValue::F64(_) => "float",
            SqlValue::Decimal(_) => "decimal",
            SqlValue::String(_) => "nvarchar",
            SqlValue::Bytes(_) => "varbinary",
            SqlValue::Uuid(_) => "uniqueidentifier",
            SqlValue::DateTime(_) => "datetime2",
            SqlValue::Date(_) => "date",
            SqlValue::Time(_) => "time",
            SqlValue::DateTimeOffset(_) => "datetimeoffset",
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Bool(v) => write!(f, "{}", v),
            SqlValue::U8(v) => write!(f, "{}", v),
            SqlValue::I16(v) => write!(f, "{}", v),
            SqlValue::I32(v) => write!(f, "{}", v),
            SqlValue::I64(v) => write!(f, "{}", v),
            SqlValue::F32(v) => write!(f, "{}", v),
            SqlValue::F64(v) => write!(f, "{}", v),
            SqlValue::Decimal(v) => write!(f, "{}", v),
            SqlValue::String(v) => f.write_str(v),
            SqlValue::Bytes(v) => {
                f.write_str("0x")?;
                for b in v {
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
            SqlValue::Uuid(v) => write!(f, "{}", v),
            SqlValue::DateTime(v) => write!(f, "{}", v),
            SqlValue::Date(v) => write!(f, "{}", v),
            SqlValue::Time(v) => write!(f, "{}", v),
            SqlValue::DateTimeOffset(v) => write!(f, "{}", v),
        }
    }
}

// From implementations for common types
impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        SqlValue::U8(v)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        SqlValue::I16(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::I32(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::I64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        SqlValue::F32(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::F64(v)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        SqlValue::Decimal(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::String(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::String(v.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

impl From<Uuid> for SqlValue {
    fn from(v: Uuid) -> Self {
        SqlValue::Uuid(v)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(v: NaiveDateTime) -> Self {
        SqlValue::DateTime(v)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Date(v)
    }
}

impl From<NaiveTime> for SqlValue {
    fn from(v: NaiveTime) -> Self {
        SqlValue::Time(v)
    }
}

impl From<DateTime<FixedOffset>> for SqlValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        SqlValue::DateTimeOffset(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlValue::Null)
    }
}
