//! `sys.tables`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.tables`.
    reader TablesReader;
    /// One row of `sys.tables`.
    data Table;
    view "sys.tables";
    alias "t";
    sql "SELECT t.[name]
      ,t.[object_id]
      ,t.[principal_id]
      ,t.[schema_id]
      ,t.[parent_object_id]
      ,t.[type]
      ,t.[type_desc]
      ,t.[create_date]
      ,t.[modify_date]
      ,t.[is_ms_shipped]
      ,t.[is_published]
      ,t.[is_schema_published]
      ,t.[lob_data_space_id]
      ,t.[filestream_data_space_id]
      ,t.[max_column_id_used]
      ,t.[lock_on_bulk_load]
      ,t.[uses_ansi_nulls]
      ,t.[is_replicated]
      ,t.[has_replication_filter]
      ,t.[is_merge_published]
      ,t.[is_sync_tran_subscribed]
      ,t.[has_unchecked_assembly_data]
      ,t.[text_in_row_limit]
      ,t.[large_value_types_out_of_row]
      ,t.[is_tracked_by_cdc]
      ,t.[lock_escalation]
      ,t.[lock_escalation_desc]
      ,t.[is_filetable]
      ,t.[is_memory_optimized]
      ,t.[durability]
      ,t.[durability_desc]
      ,t.[temporal_type]
      ,t.[temporal_type_desc]
      ,t.[history_table_id]
      ,t.[is_remote_data_archive_enabled]
      ,t.[is_external]
FROM [sys].[tables] t";
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
        lob_data_space_id: i32 => LOB_DATA_SPACE_ID,
        filestream_data_space_id: Option<i32> => FILESTREAM_DATA_SPACE_ID,
        max_column_id_used: i32 => MAX_COLUMN_ID_USED,
        lock_on_bulk_load: bool => LOCK_ON_BULK_LOAD,
        uses_ansi_nulls: Option<bool> => USES_ANSI_NULLS,
        is_replicated: Option<bool> => IS_REPLICATED,
        has_replication_filter: Option<bool> => HAS_REPLICATION_FILTER,
        is_merge_published: Option<bool> => IS_MERGE_PUBLISHED,
        is_sync_tran_subscribed: Option<bool> => IS_SYNC_TRAN_SUBSCRIBED,
        has_unchecked_assembly_data: bool => HAS_UNCHECKED_ASSEMBLY_DATA,
        text_in_row_limit: Option<i32> => TEXT_IN_ROW_LIMIT,
        large_value_types_out_of_row: Option<bool> => LARGE_VALUE_TYPES_OUT_OF_ROW,
        is_tracked_by_cdc: Option<bool> => IS_TRACKED_BY_CDC,
        lock_escalation: Option<u8> => LOCK_ESCALATION,
        lock_escalation_desc: Option<String> => LOCK_ESCALATION_DESC,
        is_filetable: Option<bool> => IS_FILETABLE,
        is_memory_optimized: Option<bool> => IS_MEMORY_OPTIMIZED,
        durability: Option<u8> => DURABILITY,
        durability_desc: Option<String> => DURABILITY_DESC,
        /// 0 = non-temporal, 1 = history table, 2 = system-versioned table.
        temporal_type: Option<u8> => TEMPORAL_TYPE,
        temporal_type_desc: Option<String> => TEMPORAL_TYPE_DESC,
        /// History table of a system-versioned table.
        history_table_id: Option<i32> => HISTORY_TABLE_ID,
        is_remote_data_archive_enabled: Option<bool> => IS_REMOTE_DATA_ARCHIVE_ENABLED,
        is_external: bool => IS_EXTERNAL,
    }
}
