//! Typed query parameters.

use chrono::NaiveDateTime;
use tiberius::Query;
use uuid::Uuid;

/// A bind value for a parameterized catalog query (`@P1`, `@P2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Typed NULL. As a filter value it is matched with `IS NULL`, see
    /// [`CatalogView::bound_sql`](crate::views::CatalogView::bound_sql).
    Null,
    Bool(bool),
    U8(u8),
    I16(i16),
    I32(i32),
    I64(i64),
    F64(f64),
    String(String),
    Uuid(Uuid),
    Bytes(Vec<u8>),
    DateTime(NaiveDateTime),
}

impl Param {
    /// Bind this value as the next positional parameter of `query`.
    pub fn bind_to<'a>(&self, query: &mut Query<'a>) {
        match self {
            Param::Null => query.bind(Option::<i32>::None),
            Param::Bool(v) => query.bind(*v),
            Param::U8(v) => query.bind(*v),
            Param::I16(v) => query.bind(*v),
            Param::I32(v) => query.bind(*v),
            Param::I64(v) => query.bind(*v),
            Param::F64(v) => query.bind(*v),
            Param::String(v) => query.bind(v.clone()),
            Param::Uuid(v) => query.bind(*v),
            Param::Bytes(v) => query.bind(v.clone()),
            Param::DateTime(v) => query.bind(*v),
        }
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<u8> for Param {
    fn from(v: u8) -> Self {
        Param::U8(v)
    }
}

impl From<i16> for Param {
    fn from(v: i16) -> Self {
        Param::I16(v)
    }
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::I32(v)
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::I64(v)
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::F64(v)
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::String(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::String(v.to_string())
    }
}

impl From<Uuid> for Param {
    fn from(v: Uuid) -> Self {
        Param::Uuid(v)
    }
}

impl From<Vec<u8>> for Param {
    fn from(v: Vec<u8>) -> Self {
        Param::Bytes(v)
    }
}

impl From<NaiveDateTime> for Param {
    fn from(v: NaiveDateTime) -> Self {
        Param::DateTime(v)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Param::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Param::from(5i32), Param::I32(5));
        assert_eq!(Param::from("dbo"), Param::String("dbo".into()));
        assert_eq!(Param::from(Option::<i32>::None), Param::Null);
        assert_eq!(Param::from(Some(7u8)), Param::U8(7));
    }

    #[test]
    fn test_bind_to_query_does_not_panic() {
        let mut query = Query::new("SELECT @P1, @P2, @P3");
        Param::I32(1).bind_to(&mut query);
        Param::String("x".into()).bind_to(&mut query);
        Param::Null.bind_to(&mut query);
    }
}
