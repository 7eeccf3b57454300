//! `sys.databases`.

use chrono::NaiveDateTime;
use uuid::Uuid;

sql_code_enum! {
    /// `sys.databases.user_access`.
    DatabaseUserAccess {
        MultiUser = 0,
        SingleUser = 1,
        RestrictedUser = 2,
    }
}

sql_code_enum! {
    /// `sys.databases.state`.
    DatabaseState {
        Online = 0,
        Restoring = 1,
        Recovering = 2,
        RecoveryPending = 3,
        Suspect = 4,
        Emergency = 5,
        Offline = 6,
        Copying = 7,
        OfflineSecondary = 10,
    }
}

sql_code_enum! {
    /// `sys.databases.recovery_model`.
    RecoveryModel {
        Full = 1,
        BulkLogged = 2,
        Simple = 3,
    }
}

sql_code_enum! {
    /// `sys.databases.page_verify_option`.
    PageVerifyOption {
        None = 0,
        TornPageDetection = 1,
        Checksum = 2,
    }
}

catalog_view! {
    /// Reader over `sys.databases`, one row per database on the instance.
    reader DatabasesReader;
    /// One row of `sys.databases`.
    data Database;
    view "sys.databases";
    alias "sd";
    sql "SELECT sd.[name]
      ,sd.[database_id]
      ,sd.[source_database_id]
      ,sd.[owner_sid]
      ,sd.[create_date]
      ,sd.[compatibility_level]
      ,sd.[collation_name]
      ,sd.[user_access]
      ,sd.[user_access_desc]
      ,sd.[is_read_only]
      ,sd.[is_auto_close_on]
      ,sd.[is_auto_shrink_on]
      ,sd.[state]
      ,sd.[state_desc]
      ,sd.[is_in_standby]
      ,sd.[is_cleanly_shutdown]
      ,sd.[is_supplemental_logging_enabled]
      ,sd.[snapshot_isolation_state]
      ,sd.[snapshot_isolation_state_desc]
      ,sd.[is_read_committed_snapshot_on]
      ,sd.[recovery_model]
      ,sd.[recovery_model_desc]
      ,sd.[page_verify_option]
      ,sd.[page_verify_option_desc]
      ,sd.[is_auto_create_stats_on]
      ,sd.[is_auto_create_stats_incremental_on]
      ,sd.[is_auto_update_stats_on]
      ,sd.[is_auto_update_stats_async_on]
      ,sd.[is_ansi_null_default_on]
      ,sd.[is_ansi_nulls_on]
      ,sd.[is_ansi_padding_on]
      ,sd.[is_ansi_warnings_on]
      ,sd.[is_arithabort_on]
      ,sd.[is_concat_null_yields_null_on]
      ,sd.[is_numeric_roundabort_on]
      ,sd.[is_quoted_identifier_on]
      ,sd.[is_recursive_triggers_on]
      ,sd.[is_cursor_close_on_commit_on]
      ,sd.[is_local_cursor_default]
      ,sd.[is_fulltext_enabled]
      ,sd.[is_trustworthy_on]
      ,sd.[is_db_chaining_on]
      ,sd.[is_parameterization_forced]
      ,sd.[is_master_key_encrypted_by_server]
      ,sd.[is_query_store_on]
      ,sd.[is_published]
      ,sd.[is_subscribed]
      ,sd.[is_merge_published]
      ,sd.[is_distributor]
      ,sd.[is_sync_with_backup]
      ,sd.[service_broker_guid]
      ,sd.[is_broker_enabled]
      ,sd.[log_reuse_wait]
      ,sd.[log_reuse_wait_desc]
      ,sd.[is_date_correlation_on]
      ,sd.[is_cdc_enabled]
      ,sd.[is_encrypted]
      ,sd.[is_honor_broker_priority_on]
      ,sd.[replica_id]
      ,sd.[group_database_id]
      ,sd.[resource_pool_id]
      ,sd.[default_language_lcid]
      ,sd.[default_language_name]
      ,sd.[default_fulltext_language_lcid]
      ,sd.[default_fulltext_language_name]
      ,sd.[is_nested_triggers_on]
      ,sd.[is_transform_noise_words_on]
      ,sd.[two_digit_year_cutoff]
      ,sd.[containment]
      ,sd.[containment_desc]
      ,sd.[target_recovery_time_in_seconds]
      ,sd.[delayed_durability]
      ,sd.[delayed_durability_desc]
      ,sd.[is_memory_optimized_elevate_to_snapshot_on]
      ,sd.[is_federation_member]
      ,sd.[is_remote_data_archive_enabled]
      ,sd.[is_mixed_page_allocation_on]
      ,sd.[is_temporal_history_retention_enabled]
      ,sd.[catalog_collation_type]
      ,sd.[catalog_collation_type_desc]
      ,sd.[physical_database_name]
      ,sd.[is_result_set_caching_on]
      ,sd.[is_accelerated_database_recovery_on]
      ,sd.[is_tempdb_spill_to_remote_store]
      ,sd.[is_stale_page_detection_on]
      ,sd.[is_memory_optimized_enabled]
FROM [sys].[databases] sd";
    columns {
        /// Database name, unique within the instance.
        name: String => NAME,
        /// Database identifier, unique within the instance.
        database_id: i32 => DATABASE_ID,
        /// Source database of a snapshot; `None` for regular databases.
        source_database_id: Option<i32> => SOURCE_DATABASE_ID,
        owner_sid: Vec<u8> => OWNER_SID,
        create_date: NaiveDateTime => CREATE_DATE,
        /// Compatibility level, e.g. `150` for SQL Server 2019.
        compatibility_level: u8 => COMPATIBILITY_LEVEL,
        collation_name: Option<String> => COLLATION_NAME,
        user_access: DatabaseUserAccess => USER_ACCESS,
        user_access_desc: String => USER_ACCESS_DESC,
        is_read_only: bool => IS_READ_ONLY,
        is_auto_close_on: bool => IS_AUTO_CLOSE_ON,
        is_auto_shrink_on: bool => IS_AUTO_SHRINK_ON,
        state: DatabaseState => STATE,
        state_desc: String => STATE_DESC,
        is_in_standby: bool => IS_IN_STANDBY,
        is_cleanly_shutdown: bool => IS_CLEANLY_SHUTDOWN,
        is_supplemental_logging_enabled: bool => IS_SUPPLEMENTAL_LOGGING_ENABLED,
        snapshot_isolation_state: u8 => SNAPSHOT_ISOLATION_STATE,
        snapshot_isolation_state_desc: String => SNAPSHOT_ISOLATION_STATE_DESC,
        is_read_committed_snapshot_on: bool => IS_READ_COMMITTED_SNAPSHOT_ON,
        recovery_model: RecoveryModel => RECOVERY_MODEL,
        recovery_model_desc: String => RECOVERY_MODEL_DESC,
        page_verify_option: PageVerifyOption => PAGE_VERIFY_OPTION,
        page_verify_option_desc: String => PAGE_VERIFY_OPTION_DESC,
        is_auto_create_stats_on: bool => IS_AUTO_CREATE_STATS_ON,
        is_auto_create_stats_incremental_on: bool => IS_AUTO_CREATE_STATS_INCREMENTAL_ON,
        is_auto_update_stats_on: bool => IS_AUTO_UPDATE_STATS_ON,
        is_auto_update_stats_async_on: bool => IS_AUTO_UPDATE_STATS_ASYNC_ON,
        is_ansi_null_default_on: bool => IS_ANSI_NULL_DEFAULT_ON,
        is_ansi_nulls_on: bool => IS_ANSI_NULLS_ON,
        is_ansi_padding_on: bool => IS_ANSI_PADDING_ON,
        is_ansi_warnings_on: bool => IS_ANSI_WARNINGS_ON,
        is_arithabort_on: bool => IS_ARITHABORT_ON,
        is_concat_null_yields_null_on: bool => IS_CONCAT_NULL_YIELDS_NULL_ON,
        is_numeric_roundabort_on: bool => IS_NUMERIC_ROUNDABORT_ON,
        is_quoted_identifier_on: bool => IS_QUOTED_IDENTIFIER_ON,
        is_recursive_triggers_on: bool => IS_RECURSIVE_TRIGGERS_ON,
        is_cursor_close_on_commit_on: bool => IS_CURSOR_CLOSE_ON_COMMIT_ON,
        is_local_cursor_default: bool => IS_LOCAL_CURSOR_DEFAULT,
        is_fulltext_enabled: bool => IS_FULLTEXT_ENABLED,
        is_trustworthy_on: bool => IS_TRUSTWORTHY_ON,
        is_db_chaining_on: bool => IS_DB_CHAINING_ON,
        is_parameterization_forced: bool => IS_PARAMETERIZATION_FORCED,
        is_master_key_encrypted_by_server: bool => IS_MASTER_KEY_ENCRYPTED_BY_SERVER,
        is_query_store_on: bool => IS_QUERY_STORE_ON,
        is_published: bool => IS_PUBLISHED,
        is_subscribed: bool => IS_SUBSCRIBED,
        is_merge_published: bool => IS_MERGE_PUBLISHED,
        is_distributor: bool => IS_DISTRIBUTOR,
        is_sync_with_backup: bool => IS_SYNC_WITH_BACKUP,
        service_broker_guid: Uuid => SERVICE_BROKER_GUID,
        is_broker_enabled: bool => IS_BROKER_ENABLED,
        log_reuse_wait: i16 => LOG_REUSE_WAIT,
        log_reuse_wait_desc: String => LOG_REUSE_WAIT_DESC,
        is_date_correlation_on: bool => IS_DATE_CORRELATION_ON,
        is_cdc_enabled: bool => IS_CDC_ENABLED,
        is_encrypted: bool => IS_ENCRYPTED,
        is_honor_broker_priority_on: bool => IS_HONOR_BROKER_PRIORITY_ON,
        replica_id: Option<Uuid> => REPLICA_ID,
        group_database_id: Option<Uuid> => GROUP_DATABASE_ID,
        /// Resource pool bound for memory-optimized tables; `None` when unbound.
        resource_pool_id: Option<i32> => RESOURCE_POOL_ID,
        /// The contained-database settings below are NULL unless `containment` is non-zero.
        default_language_lcid: Option<i16> => DEFAULT_LANGUAGE_LCID,
        default_language_name: Option<String> => DEFAULT_LANGUAGE_NAME,
        default_fulltext_language_lcid: Option<i32> => DEFAULT_FULLTEXT_LANGUAGE_LCID,
        default_fulltext_language_name: Option<String> => DEFAULT_FULLTEXT_LANGUAGE_NAME,
        is_nested_triggers_on: Option<bool> => IS_NESTED_TRIGGERS_ON,
        is_transform_noise_words_on: Option<bool> => IS_TRANSFORM_NOISE_WORDS_ON,
        two_digit_year_cutoff: Option<i16> => TWO_DIGIT_YEAR_CUTOFF,
        containment: u8 => CONTAINMENT,
        containment_desc: String => CONTAINMENT_DESC,
        target_recovery_time_in_seconds: Option<i32> => TARGET_RECOVERY_TIME_IN_SECONDS,
        /// 0 = DISABLED, 1 = ALLOWED, 2 = FORCED.
        delayed_durability: i32 => DELAYED_DURABILITY,
        delayed_durability_desc: String => DELAYED_DURABILITY_DESC,
        is_memory_optimized_elevate_to_snapshot_on: bool => IS_MEMORY_OPTIMIZED_ELEVATE_TO_SNAPSHOT_ON,
        is_federation_member: bool => IS_FEDERATION_MEMBER,
        is_remote_data_archive_enabled: bool => IS_REMOTE_DATA_ARCHIVE_ENABLED,
        is_mixed_page_allocation_on: bool => IS_MIXED_PAGE_ALLOCATION_ON,
        is_temporal_history_retention_enabled: bool => IS_TEMPORAL_HISTORY_RETENTION_ENABLED,
        catalog_collation_type: i32 => CATALOG_COLLATION_TYPE,
        catalog_collation_type_desc: String => CATALOG_COLLATION_TYPE_DESC,
        physical_database_name: String => PHYSICAL_DATABASE_NAME,
        is_result_set_caching_on: bool => IS_RESULT_SET_CACHING_ON,
        is_accelerated_database_recovery_on: bool => IS_ACCELERATED_DATABASE_RECOVERY_ON,
        is_tempdb_spill_to_remote_store: bool => IS_TEMPDB_SPILL_TO_REMOTE_STORE,
        is_stale_page_detection_on: bool => IS_STALE_PAGE_DETECTION_ON,
        is_memory_optimized_enabled: bool => IS_MEMORY_OPTIMIZED_ENABLED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SqlValue;
    use crate::reader::RowReader;
    use chrono::NaiveDate;

    /// `master` on a default instance: not contained, no resource pool binding.
    fn master_row() -> Vec<SqlValue> {
        DatabasesReader::COLUMNS
            .iter()
            .map(|column| match *column {
                "name" | "physical_database_name" => "master".into(),
                "database_id" => SqlValue::I32(1),
                "owner_sid" => SqlValue::Bytes(vec![1]),
                "create_date" => SqlValue::DateTime(
                    NaiveDate::from_ymd_opt(2003, 4, 8)
                        .unwrap()
                        .and_hms_opt(9, 13, 36)
                        .unwrap(),
                ),
                "compatibility_level" => SqlValue::U8(160),
                "collation_name" => "SQL_Latin1_General_CP1_CI_AS".into(),
                "user_access" | "state" | "snapshot_isolation_state" | "containment" => {
                    SqlValue::U8(0)
                }
                "recovery_model" => SqlValue::U8(3),
                "page_verify_option" => SqlValue::U8(2),
                "log_reuse_wait" => SqlValue::U8(0),
                "user_access_desc" => "MULTI_USER".into(),
                "state_desc" => "ONLINE".into(),
                "snapshot_isolation_state_desc" => "ON".into(),
                "recovery_model_desc" => "SIMPLE".into(),
                "page_verify_option_desc" => "CHECKSUM".into(),
                "log_reuse_wait_desc" => "NOTHING".into(),
                "containment_desc" => "NONE".into(),
                "delayed_durability_desc" => "DISABLED".into(),
                "catalog_collation_type_desc" => "DATABASE_DEFAULT".into(),
                "service_broker_guid" => SqlValue::Uuid(Uuid::nil()),
                "target_recovery_time_in_seconds" | "delayed_durability" | "catalog_collation_type" => {
                    SqlValue::I32(0)
                }
                "source_database_id"
                | "replica_id"
                | "group_database_id"
                | "resource_pool_id"
                | "default_language_lcid"
                | "default_language_name"
                | "default_fulltext_language_lcid"
                | "default_fulltext_language_name"
                | "is_nested_triggers_on"
                | "is_transform_noise_words_on"
                | "two_digit_year_cutoff" => SqlValue::Null,
                _ => SqlValue::Bool(false),
            })
            .collect()
    }

    #[test]
    fn test_reads_non_contained_database() {
        let reader = RowReader::new(
            DatabasesReader::COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![master_row()],
        );

        let databases = DatabasesReader::new(reader).read_all().unwrap();
        assert_eq!(databases.len(), 1);

        let master = &databases[0];
        assert_eq!(master.name, "master");
        assert_eq!(master.state, DatabaseState::Online);
        assert_eq!(master.user_access, DatabaseUserAccess::MultiUser);
        assert_eq!(master.recovery_model, RecoveryModel::Simple);
        assert_eq!(master.page_verify_option, PageVerifyOption::Checksum);
        assert_eq!(master.resource_pool_id, None);
        assert_eq!(master.default_language_lcid, None);
        assert_eq!(master.two_digit_year_cutoff, None);
        assert_eq!(master.is_nested_triggers_on, None);
    }

    #[test]
    fn test_unlisted_codes_are_kept() {
        assert_eq!(DatabaseState::from_code(10), DatabaseState::OfflineSecondary);
        assert_eq!(DatabaseState::from_code(42), DatabaseState::Other(42));
        assert_eq!(DatabaseState::Other(42).code(), 42);
        assert_eq!(RecoveryModel::BulkLogged.code(), 2);
        assert_eq!(
            serde_json::to_value(PageVerifyOption::TornPageDetection).unwrap(),
            serde_json::json!("TornPageDetection")
        );
    }

    #[test]
    fn test_ordinals_follow_select_order() {
        assert_eq!(DatabasesReader::NAME, 0);
        assert_eq!(DatabasesReader::OWNER_SID, 3);
        assert_eq!(DatabasesReader::IS_QUERY_STORE_ON, 44);
        assert_eq!(DatabasesReader::IS_MEMORY_OPTIMIZED_ENABLED, 85);
        assert_eq!(DatabasesReader::COLUMNS.len(), 86);
    }
}
