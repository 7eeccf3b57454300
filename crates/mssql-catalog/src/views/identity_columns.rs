//! `sys.identity_columns`.

use rust_decimal::Decimal;

catalog_view! {
    /// Reader over `sys.identity_columns`.
    ///
    /// The `sql_variant` seed, increment and last values are converted to
    /// `decimal(38, 0)` in the query.
    reader IdentityColumnsReader;
    /// One row of `sys.identity_columns`.
    data IdentityColumn;
    view "sys.identity_columns";
    alias "ic";
    sql "SELECT ic.[object_id]
      ,ic.[name]
      ,ic.[column_id]
      ,ic.[system_type_id]
      ,ic.[user_type_id]
      ,ic.[max_length]
      ,ic.[precision]
      ,ic.[scale]
      ,ic.[is_nullable]
      ,CONVERT(decimal(38, 0), ic.[seed_value]) AS [seed_value]
      ,CONVERT(decimal(38, 0), ic.[increment_value]) AS [increment_value]
      ,CONVERT(decimal(38, 0), ic.[last_value]) AS [last_value]
      ,ic.[is_not_for_replication]
FROM [sys].[identity_columns] ic";
    columns {
        object_id: i32 => OBJECT_ID,
        name: String => NAME,
        column_id: i32 => COLUMN_ID,
        system_type_id: u8 => SYSTEM_TYPE_ID,
        user_type_id: i32 => USER_TYPE_ID,
        max_length: i16 => MAX_LENGTH,
        precision: u8 => PRECISION,
        scale: u8 => SCALE,
        is_nullable: Option<bool> => IS_NULLABLE,
        seed_value: Option<Decimal> => SEED_VALUE,
        increment_value: Option<Decimal> => INCREMENT_VALUE,
        /// Last identity value generated; `None` if no rows were inserted yet.
        last_value: Option<Decimal> => LAST_VALUE,
        is_not_for_replication: Option<bool> => IS_NOT_FOR_REPLICATION,
    }
}
