//! `sys.index_columns`.

catalog_view! {
    /// Reader over `sys.index_columns`.
    reader IndexColumnsReader;
    /// One row of `sys.index_columns`.
    data IndexColumn;
    view "sys.index_columns";
    alias "idxc";
    sql "SELECT idxc.[object_id]
      ,idxc.[index_id]
      ,idxc.[index_column_id]
      ,idxc.[column_id]
      ,idxc.[key_ordinal]
      ,idxc.[partition_ordinal]
      ,idxc.[is_descending_key]
      ,idxc.[is_included_column]
FROM [sys].[index_columns] idxc";
    columns {
        object_id: i32 => OBJECT_ID,
        index_id: i32 => INDEX_ID,
        index_column_id: i32 => INDEX_COLUMN_ID,
        column_id: i32 => COLUMN_ID,
        /// 1-based position within the key; 0 for included columns.
        key_ordinal: u8 => KEY_ORDINAL,
        partition_ordinal: u8 => PARTITION_ORDINAL,
        is_descending_key: Option<bool> => IS_DESCENDING_KEY,
        is_included_column: Option<bool> => IS_INCLUDED_COLUMN,
    }
}
