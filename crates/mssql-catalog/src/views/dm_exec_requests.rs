//! `sys.dm_exec_requests`.

use chrono::NaiveDateTime;
use uuid::Uuid;

catalog_view! {
    /// Reader over `sys.dm_exec_requests`, one row per request executing on the server.
    reader DmExecRequestsReader;
    /// One row of `sys.dm_exec_requests`.
    data DmExecRequest;
    view "sys.dm_exec_requests";
    alias "der";
    sql "SELECT der.[session_id]
      ,der.[request_id]
      ,der.[start_time]
      ,der.[status]
      ,der.[command]
      ,der.[sql_handle]
      ,der.[statement_start_offset]
      ,der.[statement_end_offset]
      ,der.[plan_handle]
      ,der.[database_id]
      ,der.[user_id]
      ,der.[connection_id]
      ,der.[blocking_session_id]
      ,der.[wait_type]
      ,der.[wait_time]
      ,der.[last_wait_type]
      ,der.[wait_resource]
      ,der.[open_transaction_count]
      ,der.[open_resultset_count]
      ,der.[transaction_id]
      ,der.[context_info]
      ,der.[percent_complete]
      ,der.[estimated_completion_time]
      ,der.[cpu_time]
      ,der.[total_elapsed_time]
      ,der.[scheduler_id]
      ,der.[task_address]
      ,der.[reads]
      ,der.[writes]
      ,der.[logical_reads]
      ,der.[text_size]
      ,der.[language]
      ,der.[date_format]
      ,der.[date_first]
      ,der.[quoted_identifier]
      ,der.[arithabort]
      ,der.[ansi_null_dflt_on]
      ,der.[ansi_defaults]
      ,der.[ansi_warnings]
      ,der.[ansi_padding]
      ,der.[ansi_nulls]
      ,der.[concat_null_yields_null]
      ,der.[transaction_isolation_level]
      ,der.[lock_timeout]
      ,der.[deadlock_priority]
      ,der.[row_count]
      ,der.[prev_error]
      ,der.[nest_level]
      ,der.[granted_query_memory]
      ,der.[executing_managed_code]
      ,der.[group_id]
      ,der.[query_hash]
      ,der.[query_plan_hash]
      ,der.[statement_sql_handle]
      ,der.[statement_context_id]
      ,der.[dop]
      ,der.[parallel_worker_count]
      ,der.[external_script_request_id]
      ,der.[is_resumable]
      ,der.[page_resource]
      ,der.[page_server_reads]
FROM [sys].[dm_exec_requests] der";
    columns {
        /// Session the request belongs to.
        session_id: i16 => SESSION_ID,
        request_id: i32 => REQUEST_ID,
        start_time: NaiveDateTime => START_TIME,
        /// `background`, `running`, `runnable`, `sleeping` or `suspended`.
        status: String => STATUS,
        command: String => COMMAND,
        sql_handle: Option<Vec<u8>> => SQL_HANDLE,
        statement_start_offset: Option<i32> => STATEMENT_START_OFFSET,
        statement_end_offset: Option<i32> => STATEMENT_END_OFFSET,
        plan_handle: Option<Vec<u8>> => PLAN_HANDLE,
        database_id: i16 => DATABASE_ID,
        user_id: i32 => USER_ID,
        connection_id: Option<Uuid> => CONNECTION_ID,
        /// Session blocking this request, if any.
        blocking_session_id: Option<i16> => BLOCKING_SESSION_ID,
        wait_type: Option<String> => WAIT_TYPE,
        wait_time: i32 => WAIT_TIME,
        last_wait_type: String => LAST_WAIT_TYPE,
        wait_resource: String => WAIT_RESOURCE,
        open_transaction_count: i32 => OPEN_TRANSACTION_COUNT,
        open_resultset_count: i32 => OPEN_RESULTSET_COUNT,
        transaction_id: i64 => TRANSACTION_ID,
        context_info: Option<Vec<u8>> => CONTEXT_INFO,
        /// Work completed for operations that report progress, such as `BACKUP`.
        percent_complete: f32 => PERCENT_COMPLETE,
        estimated_completion_time: i64 => ESTIMATED_COMPLETION_TIME,
        cpu_time: i32 => CPU_TIME,
        total_elapsed_time: i32 => TOTAL_ELAPSED_TIME,
        scheduler_id: Option<i32> => SCHEDULER_ID,
        task_address: Option<Vec<u8>> => TASK_ADDRESS,
        reads: i64 => READS,
        writes: i64 => WRITES,
        logical_reads: i64 => LOGICAL_READS,
        text_size: i32 => TEXT_SIZE,
        language: Option<String> => LANGUAGE,
        date_format: Option<String> => DATE_FORMAT,
        date_first: i16 => DATE_FIRST,
        quoted_identifier: bool => QUOTED_IDENTIFIER,
        arithabort: bool => ARITHABORT,
        ansi_null_dflt_on: bool => ANSI_NULL_DFLT_ON,
        ansi_defaults: bool => ANSI_DEFAULTS,
        ansi_warnings: bool => ANSI_WARNINGS,
        ansi_padding: bool => ANSI_PADDING,
        ansi_nulls: bool => ANSI_NULLS,
        concat_null_yields_null: bool => CONCAT_NULL_YIELDS_NULL,
        transaction_isolation_level: i16 => TRANSACTION_ISOLATION_LEVEL,
        lock_timeout: i32 => LOCK_TIMEOUT,
        deadlock_priority: i32 => DEADLOCK_PRIORITY,
        row_count: i64 => ROW_COUNT,
        prev_error: i32 => PREV_ERROR,
        nest_level: i32 => NEST_LEVEL,
        granted_query_memory: i32 => GRANTED_QUERY_MEMORY,
        executing_managed_code: bool => EXECUTING_MANAGED_CODE,
        group_id: i32 => GROUP_ID,
        query_hash: Option<Vec<u8>> => QUERY_HASH,
        query_plan_hash: Option<Vec<u8>> => QUERY_PLAN_HASH,
        statement_sql_handle: Option<Vec<u8>> => STATEMENT_SQL_HANDLE,
        statement_context_id: Option<i64> => STATEMENT_CONTEXT_ID,
        dop: i32 => DOP,
        parallel_worker_count: Option<i32> => PARALLEL_WORKER_COUNT,
        external_script_request_id: Option<Uuid> => EXTERNAL_SCRIPT_REQUEST_ID,
        is_resumable: bool => IS_RESUMABLE,
        page_resource: Option<Vec<u8>> => PAGE_RESOURCE,
        page_server_reads: i64 => PAGE_SERVER_READS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::sample_reader;

    #[test]
    fn test_background_request_without_batch_or_blocker() {
        let reader = sample_reader(
            DmExecRequestsReader::COLUMNS,
            DmExecRequestsReader::RUST_TYPES,
            &[
                "sql_handle",
                "statement_start_offset",
                "statement_end_offset",
                "plan_handle",
                "connection_id",
                "blocking_session_id",
                "wait_type",
                "query_hash",
                "query_plan_hash",
                "statement_sql_handle",
                "statement_context_id",
                "external_script_request_id",
                "page_resource",
            ],
        );

        let rows = DmExecRequestsReader::new(reader).read_all().unwrap();
        let row = &rows[0];
        assert_eq!(row.sql_handle, None);
        assert_eq!(row.plan_handle, None);
        assert_eq!(row.connection_id, None);
        assert_eq!(row.blocking_session_id, None);
        assert_eq!(row.wait_type, None);
        assert_eq!(row.external_script_request_id, None);
        assert_eq!(row.page_resource, None);
        assert_eq!(row.language.as_deref(), Some("language"));
    }
}
