//! `sys.views`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.views`.
    reader ViewsReader;
    /// One row of `sys.views`.
    data View;
    view "sys.views";
    alias "v";
    sql "SELECT v.[name]
      ,v.[object_id]
      ,v.[principal_id]
      ,v.[schema_id]
      ,v.[parent_object_id]
      ,v.[type]
      ,v.[type_desc]
      ,v.[create_date]
      ,v.[modify_date]
      ,v.[is_ms_shipped]
      ,v.[is_published]
      ,v.[is_schema_published]
      ,v.[is_replicated]
      ,v.[has_replication_filter]
      ,v.[has_opaque_metadata]
      ,v.[has_unchecked_assembly_data]
      ,v.[with_check_option]
      ,v.[is_date_correlation_view]
      ,v.[is_tracked_by_cdc]
FROM [sys].[views] v";
    columns {
        name: String => NAME,
        object_id: i32 => OBJECT_ID,
        principal_id: Option<i32> => PRINCIPAL_ID,
        schema_id: i32 => SCHEMA_ID,
        parent_object_id: i32 => PARENT_OBJECT_ID,
        object_type as "type": String => TYPE,
        type_desc: String => TYPE_DESC,
        create_date: NaiveDateTime => CREATE_DATE,
        modify_date: NaiveDateTime => MODIFY_DATE,
        is_ms_shipped: bool => IS_MS_SHIPPED,
        is_published: bool => IS_PUBLISHED,
        is_schema_published: bool => IS_SCHEMA_PUBLISHED,
        is_replicated: Option<bool> => IS_REPLICATED,
        has_replication_filter: Option<bool> => HAS_REPLICATION_FILTER,
        has_opaque_metadata: bool => HAS_OPAQUE_METADATA,
        has_unchecked_assembly_data: bool => HAS_UNCHECKED_ASSEMBLY_DATA,
        with_check_option: bool => WITH_CHECK_OPTION,
        is_date_correlation_view: bool => IS_DATE_CORRELATION_VIEW,
        is_tracked_by_cdc: Option<bool> => IS_TRACKED_BY_CDC,
    }
}
