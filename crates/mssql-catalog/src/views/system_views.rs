//! `sys.system_views`.

use chrono::NaiveDateTime;

use super::View;

catalog_view! {
    /// Reader over `sys.system_views`, the catalog views and DMVs themselves.
    reader SystemViewsReader;
    shares View;
    view "sys.system_views";
    alias "ssv";
    sql "SELECT ssv.[name]
      ,ssv.[object_id]
      ,ssv.[principal_id]
      ,ssv.[schema_id]
      ,ssv.[parent_object_id]
      ,ssv.[type]
      ,ssv.[type_desc]
      ,ssv.[create_date]
      ,ssv.[modify_date]
      ,ssv.[is_ms_shipped]
      ,ssv.[is_published]
      ,ssv.[is_schema_published]
      ,ssv.[is_replicated]
      ,ssv.[has_replication_filter]
      ,ssv.[has_opaque_metadata]
      ,ssv.[has_unchecked_assembly_data]
      ,ssv.[with_check_option]
      ,ssv.[is_date_correlation_view]
      ,ssv.[is_tracked_by_cdc]
FROM [sys].[system_views] ssv";
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
