//! `sys.columns`.

catalog_view! {
    /// Reader over `sys.columns`, the columns of tables, views and table-valued functions.
    reader ColumnsReader;
    /// One row of `sys.columns`.
    data Column;
    view "sys.columns";
    alias "c";
    sql "SELECT c.[object_id]
      ,c.[name]
      ,c.[column_id]
      ,c.[system_type_id]
      ,c.[user_type_id]
      ,c.[max_length]
      ,c.[precision]
      ,c.[scale]
      ,c.[collation_name]
      ,c.[is_nullable]
      ,c.[is_ansi_padded]
      ,c.[is_rowguidcol]
      ,c.[is_identity]
      ,c.[is_computed]
      ,c.[is_filestream]
      ,c.[is_replicated]
      ,c.[is_non_sql_subscribed]
      ,c.[is_merge_published]
      ,c.[is_dts_replicated]
      ,c.[is_xml_document]
      ,c.[xml_collection_id]
      ,c.[default_object_id]
      ,c.[rule_object_id]
      ,c.[is_sparse]
      ,c.[is_column_set]
      ,c.[generated_always_type]
      ,c.[generated_always_type_desc]
      ,c.[is_hidden]
      ,c.[is_masked]
FROM [sys].[columns] c";
    columns {
        object_id: i32 => OBJECT_ID,
        name: String => NAME,
        column_id: i32 => COLUMN_ID,
        system_type_id: u8 => SYSTEM_TYPE_ID,
        user_type_id: i32 => USER_TYPE_ID,
        /// Maximum length in bytes; `-1` for `max` types and `xml`.
        max_length: i16 => MAX_LENGTH,
        precision: u8 => PRECISION,
        scale: u8 => SCALE,
        collation_name: Option<String> => COLLATION_NAME,
        is_nullable: Option<bool> => IS_NULLABLE,
        is_ansi_padded: bool => IS_ANSI_PADDED,
        is_rowguidcol: bool => IS_ROWGUIDCOL,
        is_identity: bool => IS_IDENTITY,
        is_computed: bool => IS_COMPUTED,
        is_filestream: bool => IS_FILESTREAM,
        is_replicated: Option<bool> => IS_REPLICATED,
        is_non_sql_subscribed: Option<bool> => IS_NON_SQL_SUBSCRIBED,
        is_merge_published: Option<bool> => IS_MERGE_PUBLISHED,
        is_dts_replicated: Option<bool> => IS_DTS_REPLICATED,
        is_xml_document: bool => IS_XML_DOCUMENT,
        xml_collection_id: i32 => XML_COLLECTION_ID,
        /// Default constraint bound to the column, 0 if none.
        default_object_id: i32 => DEFAULT_OBJECT_ID,
        rule_object_id: i32 => RULE_OBJECT_ID,
        is_sparse: Option<bool> => IS_SPARSE,
        is_column_set: Option<bool> => IS_COLUMN_SET,
        generated_always_type: Option<u8> => GENERATED_ALWAYS_TYPE,
        generated_always_type_desc: Option<String> => GENERATED_ALWAYS_TYPE_DESC,
        is_hidden: Option<bool> => IS_HIDDEN,
        is_masked: Option<bool> => IS_MASKED,
    }
}
