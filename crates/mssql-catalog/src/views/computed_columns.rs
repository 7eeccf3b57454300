//! `sys.computed_columns`.

catalog_view! {
    /// Reader over `sys.computed_columns`.
    reader ComputedColumnsReader;
    /// One row of `sys.computed_columns`.
    data ComputedColumn;
    view "sys.computed_columns";
    alias "cc";
    sql "SELECT cc.[object_id]
      ,cc.[name]
      ,cc.[column_id]
      ,cc.[system_type_id]
      ,cc.[user_type_id]
      ,cc.[max_length]
      ,cc.[precision]
      ,cc.[scale]
      ,cc.[collation_name]
      ,cc.[is_nullable]
      ,cc.[definition]
      ,cc.[uses_database_collation]
      ,cc.[is_persisted]
FROM [sys].[computed_columns] cc";
    columns {
        object_id: i32 => OBJECT_ID,
        name: String => NAME,
        column_id: i32 => COLUMN_ID,
        system_type_id: u8 => SYSTEM_TYPE_ID,
        user_type_id: i32 => USER_TYPE_ID,
        max_length: i16 => MAX_LENGTH,
        precision: u8 => PRECISION,
        scale: u8 => SCALE,
        collation_name: Option<String> => COLLATION_NAME,
        is_nullable: Option<bool> => IS_NULLABLE,
        /// SQL text of the computed column expression.
        definition: Option<String> => DEFINITION,
        uses_database_collation: bool => USES_DATABASE_COLLATION,
        is_persisted: bool => IS_PERSISTED,
    }
}
