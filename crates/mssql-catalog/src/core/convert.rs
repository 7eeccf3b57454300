//! Typed conversion out of [`SqlValue`].
//!
//! Conversions accept the exact SQL Server type and any type that widens to
//! the target without loss (`tinyint` into `i32`, `real` into `f64`, ...).
//! Narrowing is never performed; callers ask for the wider Rust type instead.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use super::value::SqlValue;

/// Why a value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// NULL read through a non-nullable accessor.
    #[error("unexpected NULL in non-nullable column")]
    UnexpectedNull,

    /// Value of an incompatible SQL type.
    #[error("cannot read {actual} value as {expected}")]
    InvalidCast {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Conversion from an owned cell value into a Rust type.
///
/// `Option<T>` maps NULL to `None`; every other implementation rejects NULL.
pub trait FromSqlValue: Sized {
    /// Rust-side name used in error messages.
    const EXPECTED: &'static str;

    /// Convert a non-NULL value.
    fn from_non_null(value: &SqlValue) -> Option<Self>;

    /// Convert a value, rejecting NULL.
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConversionError> {
        if value.is_null() {
            return Err(ConversionError::UnexpectedNull);
        }
        Self::from_non_null(value).ok_or(ConversionError::InvalidCast {
            expected: Self::EXPECTED,
            actual: value.type_name(),
        })
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        T::from_non_null(value).map(Some)
    }

    fn from_sql_value(value: &SqlValue) -> Result<Self, ConversionError> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_sql_value(value).map(Some)
    }
}

impl FromSqlValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for u8 {
    const EXPECTED: &'static str = "u8";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::U8(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for i16 {
    const EXPECTED: &'static str = "i16";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::U8(v) => Some(i16::from(*v)),
            SqlValue::I16(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for i32 {
    const EXPECTED: &'static str = "i32";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::U8(v) => Some(i32::from(*v)),
            SqlValue::I16(v) => Some(i32::from(*v)),
            SqlValue::I32(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for i64 {
    const EXPECTED: &'static str = "i64";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::U8(v) => Some(i64::from(*v)),
            SqlValue::I16(v) => Some(i64::from(*v)),
            SqlValue::I32(v) => Some(i64::from(*v)),
            SqlValue::I64(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::F32(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::F32(v) => Some(f64::from(*v)),
            SqlValue::F64(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for Decimal {
    const EXPECTED: &'static str = "Decimal";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Decimal(v) => Some(*v),
            SqlValue::U8(v) => Some(Decimal::from(*v)),
            SqlValue::I16(v) => Some(Decimal::from(*v)),
            SqlValue::I32(v) => Some(Decimal::from(*v)),
            SqlValue::I64(v) => Some(Decimal::from(*v)),
            _ => None,
        }
    }
}

impl FromSqlValue for String {
    const EXPECTED: &'static str = "String";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromSqlValue for Vec<u8> {
    const EXPECTED: &'static str = "Vec<u8>";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Bytes(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromSqlValue for Uuid {
    const EXPECTED: &'static str = "Uuid";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Uuid(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for NaiveDateTime {
    const EXPECTED: &'static str = "NaiveDateTime";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for NaiveDate {
    const EXPECTED: &'static str = "NaiveDate";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Date(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for NaiveTime {
    const EXPECTED: &'static str = "NaiveTime";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Time(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromSqlValue for DateTime<FixedOffset> {
    const EXPECTED: &'static str = "DateTime<FixedOffset>";

    fn from_non_null(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::DateTimeOffset(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(i32::from_sql_value(&SqlValue::I32(5)), Ok(5));
        assert_eq!(bool::from_sql_value(&SqlValue::Bool(true)), Ok(true));
        assert_eq!(
            String::from_sql_value(&SqlValue::String("sys".into())),
            Ok("sys".to_string())
        );
    }

    #[test]
    fn test_widening() {
        assert_eq!(i64::from_sql_value(&SqlValue::U8(200)), Ok(200));
        assert_eq!(i32::from_sql_value(&SqlValue::I16(-3)), Ok(-3));
        assert_eq!(f64::from_sql_value(&SqlValue::F32(0.5)), Ok(0.5));
        assert_eq!(
            Decimal::from_sql_value(&SqlValue::I64(10)),
            Ok(Decimal::from(10))
        );
    }

    #[test]
    fn test_no_narrowing() {
        assert_eq!(
            i16::from_sql_value(&SqlValue::I32(1)),
            Err(ConversionError::InvalidCast {
                expected: "i16",
                actual: "int"
            })
        );
        assert!(u8::from_sql_value(&SqlValue::I16(1)).is_err());
    }

    #[test]
    fn test_null_handling() {
        assert_eq!(
            i32::from_sql_value(&SqlValue::Null),
            Err(ConversionError::UnexpectedNull)
        );
        assert_eq!(Option::<i32>::from_sql_value(&SqlValue::Null), Ok(None));
        assert_eq!(Option::<i32>::from_sql_value(&SqlValue::U8(1)), Ok(Some(1)));
    }

    #[test]
    fn test_nullable_still_checks_type() {
        let err = Option::<Uuid>::from_sql_value(&SqlValue::String("x".into())).unwrap_err();
        assert_eq!(err.to_string(), "cannot read nvarchar value as Uuid");
    }
}
