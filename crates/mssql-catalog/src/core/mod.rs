//! Cell values and typed conversion.
//!
//! - [`value`]: owned representation of a SQL Server cell
//! - [`convert`]: the [`FromSqlValue`] trait used by every typed accessor
//! - [`column_type`]: built-in type classification of a column

pub mod column_type;
pub mod convert;
pub mod value;

pub use column_type::SystemColumnType;
pub use convert::{ConversionError, FromSqlValue};
pub use value::SqlValue;
