//! The `catalog_view!` generator.
//!
//! One invocation produces, for a single catalog view:
//!
//! - the row struct (`data`), one public field per projected column, unless
//!   the view `shares` the row struct of a view with the same columns,
//! - the reader struct (`reader`) wrapping a [`RowReader`](crate::reader::RowReader),
//! - `SQL`, `VIEW`, `ALIAS`, `COLUMNS` and one zero-based ordinal constant per column,
//! - one typed accessor per column, `to_data()` and `read_all()`,
//! - the [`CatalogView`](crate::views::CatalogView) impl.
//!
//! Ordinals are assigned in declaration order, so the column list must follow
//! the SELECT list. A column whose name is not a valid Rust identifier is
//! declared as `field as "column"`.
//!
//! `sql_code_enum!` declares a Rust enum for a `tinyint` code column. Codes
//! it does not list are kept as `Other(code)`.

macro_rules! catalog_view {
    (@ordinals $idx:expr;) => {};
    (@ordinals $idx:expr; $head:ident $($rest:ident)*) => {
        pub const $head: usize = $idx;
        catalog_view!(@ordinals $idx + 1; $($rest)*);
    };

    (@colname $field:ident) => { stringify!($field) };
    (@colname $field:ident $col:literal) => { $col };

    (
        @reader
        $(#[$reader_meta:meta])*
        reader $reader:ident;
        data $data:ident;
        view $view:literal;
        alias $alias:literal;
        sql $sql:literal;
        columns {
            $(
                $(#[$field_meta:meta])*
                $field:ident $(as $col:literal)? : $ty:ty => $ordinal:ident
            ),+
        }
    ) => {
        $(#[$reader_meta])*
        #[derive(Debug)]
        pub struct $reader {
            reader: $crate::reader::RowReader,
        }

        impl $reader {
            /// Fully qualified view name.
            pub const VIEW: &'static str = $view;

            /// Table alias used in [`Self::SQL`].
            pub const ALIAS: &'static str = $alias;

            /// Fixed query text.
            pub const SQL: &'static str = $sql;

            /// Column names in SELECT order.
            pub const COLUMNS: &'static [&'static str] =
                &[$(catalog_view!(@colname $field $($col)?)),+];

            catalog_view!(@ordinals 0usize; $($ordinal)+);

            /// Declared Rust type of each column, in SELECT order.
            #[cfg(test)]
            pub(crate) const RUST_TYPES: &'static [&'static str] = &[$(stringify!($ty)),+];

            /// Wrap a cursor positioned before the first row.
            pub fn new(reader: $crate::reader::RowReader) -> Self {
                Self { reader }
            }

            /// Advance to the next row.
            pub fn read(&mut self) -> bool {
                self.reader.read()
            }

            /// The wrapped cursor.
            pub fn inner(&self) -> &$crate::reader::RowReader {
                &self.reader
            }

            /// Give back the wrapped cursor.
            pub fn into_inner(self) -> $crate::reader::RowReader {
                self.reader
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> $crate::error::Result<$ty> {
                    self.reader.get::<$ty>(Self::$ordinal)
                }
            )+

            /// Materialize the current row.
            pub fn to_data(&self) -> $crate::error::Result<$data> {
                Ok($data {
                    $($field: self.$field()?,)+
                })
            }

            /// Read every remaining row into a list.
            pub fn read_all(mut self) -> $crate::error::Result<Vec<$data>> {
                let mut list = Vec::with_capacity(self.reader.remaining());
                while self.read() {
                    list.push(self.to_data()?);
                }
                Ok(list)
            }
        }

        impl $crate::views::CatalogView for $reader {
            type Data = $data;

            const VIEW: &'static str = $view;
            const SQL: &'static str = $sql;
            const ALIAS: &'static str = $alias;
            const COLUMNS: &'static [&'static str] = <$reader>::COLUMNS;

            fn from_reader(reader: $crate::reader::RowReader) -> Self {
                <$reader>::new(reader)
            }

            fn into_data(self) -> $crate::error::Result<Vec<$data>> {
                <$reader>::read_all(self)
            }
        }
    };

    (
        $(#[$reader_meta:meta])*
        reader $reader:ident;
        $(#[$data_meta:meta])*
        data $data:ident;
        view $view:literal;
        alias $alias:literal;
        sql $sql:literal;
        columns {
            $(
                $(#[$field_meta:meta])*
                $field:ident $(as $col:literal)? : $ty:ty => $ordinal:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$data_meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $data {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        catalog_view! {
            @reader
            $(#[$reader_meta])*
            reader $reader;
            data $data;
            view $view;
            alias $alias;
            sql $sql;
            columns {
                $(
                    $(#[$field_meta])*
                    $field $(as $col)? : $ty => $ordinal
                ),+
            }
        }
    };

    // Same shape as an existing row type; the column list must match its fields.
    (
        $(#[$reader_meta:meta])*
        reader $reader:ident;
        shares $data:ident;
        view $view:literal;
        alias $alias:literal;
        sql $sql:literal;
        columns {
            $(
                $(#[$field_meta:meta])*
                $field:ident $(as $col:literal)? : $ty:ty => $ordinal:ident
            ),+ $(,)?
        }
    ) => {
        catalog_view! {
            @reader
            $(#[$reader_meta])*
            reader $reader;
            data $data;
            view $view;
            alias $alias;
            sql $sql;
            columns {
                $(
                    $(#[$field_meta])*
                    $field $(as $col)? : $ty => $ordinal
                ),+
            }
        }
    };
}

macro_rules! sql_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            Other(u8),
        }

        impl $name {
            pub fn from_code(code: u8) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Other(other),
                }
            }

            pub fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code,)+
                    $name::Other(code) => code,
                }
            }
        }

        impl $crate::core::FromSqlValue for $name {
            const EXPECTED: &'static str = stringify!($name);

            fn from_non_null(value: &$crate::core::SqlValue) -> Option<Self> {
                match value {
                    $crate::core::SqlValue::U8(code) => Some(Self::from_code(*code)),
                    _ => None,
                }
            }
        }
    };
}
