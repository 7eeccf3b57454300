//! `sys.system_columns`.

use super::Column;

catalog_view! {
    /// Reader over `sys.system_columns`, the columns of system objects.
    reader SystemColumnsReader;
    shares Column;
    view "sys.system_columns";
    alias "sc";
    sql "SELECT sc.[object_id]
      ,sc.[name]
      ,sc.[column_id]
      ,sc.[system_type_id]
      ,sc.[user_type_id]
      ,sc.[max_length]
      ,sc.[precision]
      ,sc.[scale]
      ,sc.[collation_name]
      ,sc.[is_nullable]
      ,sc.[is_ansi_padded]
      ,sc.[is_rowguidcol]
      ,sc.[is_identity]
      ,sc.[is_computed]
      ,sc.[is_filestream]
      ,sc.[is_replicated]
      ,sc.[is_non_sql_subscribed]
      ,sc.[is_merge_published]
      ,sc.[is_dts_replicated]
      ,sc.[is_xml_document]
      ,sc.[xml_collection_id]
      ,sc.[default_object_id]
      ,sc.[rule_object_id]
      ,sc.[is_sparse]
      ,sc.[is_column_set]
      ,sc.[generated_always_type]
      ,sc.[generated_always_type_desc]
      ,sc.[is_hidden]
      ,sc.[is_masked]
FROM [sys].[system_columns] sc";
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
