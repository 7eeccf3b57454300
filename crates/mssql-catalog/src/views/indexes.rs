//! `sys.indexes`.

catalog_view! {
    /// Reader over `sys.indexes`.
    reader IndexesReader;
    /// One row of `sys.indexes`.
    data Index;
    view "sys.indexes";
    alias "i";
    sql "SELECT i.[object_id]
      ,i.[name]
      ,i.[index_id]
      ,i.[type]
      ,i.[type_desc]
      ,i.[is_unique]
      ,i.[data_space_id]
      ,i.[ignore_dup_key]
      ,i.[is_primary_key]
      ,i.[is_unique_constraint]
      ,i.[fill_factor]
      ,i.[is_padded]
      ,i.[is_disabled]
      ,i.[is_hypothetical]
      ,i.[allow_row_locks]
      ,i.[allow_page_locks]
      ,i.[has_filter]
      ,i.[filter_definition]
FROM [sys].[indexes] i";
    columns {
        object_id: i32 => OBJECT_ID,
        /// Index name; `None` for a heap.
        name: Option<String> => NAME,
        index_id: i32 => INDEX_ID,
        /// 0 = heap, 1 = clustered, 2 = nonclustered, 5 and 6 = columnstore.
        index_type as "type": u8 => TYPE,
        type_desc: Option<String> => TYPE_DESC,
        is_unique: Option<bool> => IS_UNIQUE,
        data_space_id: Option<i32> => DATA_SPACE_ID,
        ignore_dup_key: Option<bool> => IGNORE_DUP_KEY,
        is_primary_key: Option<bool> => IS_PRIMARY_KEY,
        is_unique_constraint: Option<bool> => IS_UNIQUE_CONSTRAINT,
        fill_factor: u8 => FILL_FACTOR,
        is_padded: Option<bool> => IS_PADDED,
        is_disabled: Option<bool> => IS_DISABLED,
        is_hypothetical: Option<bool> => IS_HYPOTHETICAL,
        allow_row_locks: Option<bool> => ALLOW_ROW_LOCKS,
        allow_page_locks: Option<bool> => ALLOW_PAGE_LOCKS,
        has_filter: Option<bool> => HAS_FILTER,
        filter_definition: Option<String> => FILTER_DEFINITION,
    }
}
