//! `sys.foreign_key_columns`.

catalog_view! {
    /// Reader over `sys.foreign_key_columns`, one row per column of each foreign key.
    reader ForeignKeyColumnsReader;
    /// One row of `sys.foreign_key_columns`.
    data ForeignKeyColumn;
    view "sys.foreign_key_columns";
    alias "fkc";
    sql "SELECT fkc.[constraint_object_id]
      ,fkc.[constraint_column_id]
      ,fkc.[parent_object_id]
      ,fkc.[parent_column_id]
      ,fkc.[referenced_object_id]
      ,fkc.[referenced_column_id]
FROM [sys].[foreign_key_columns] fkc";
    columns {
        constraint_object_id: i32 => CONSTRAINT_OBJECT_ID,
        constraint_column_id: i32 => CONSTRAINT_COLUMN_ID,
        parent_object_id: i32 => PARENT_OBJECT_ID,
        parent_column_id: i32 => PARENT_COLUMN_ID,
        referenced_object_id: i32 => REFERENCED_OBJECT_ID,
        referenced_column_id: i32 => REFERENCED_COLUMN_ID,
    }
}
