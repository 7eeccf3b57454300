//! `sys.dm_exec_query_stats`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.dm_exec_query_stats`, aggregate performance statistics for cached query plans.
    reader DmExecQueryStatsReader;
    /// One row of `sys.dm_exec_query_stats`.
    data DmExecQueryStats;
    view "sys.dm_exec_query_stats";
    alias "deqs";
    sql "SELECT deqs.[sql_handle]
      ,deqs.[statement_start_offset]
      ,deqs.[statement_end_offset]
      ,deqs.[plan_generation_num]
      ,deqs.[plan_handle]
      ,deqs.[creation_time]
      ,deqs.[last_execution_time]
      ,deqs.[execution_count]
      ,deqs.[total_worker_time]
      ,deqs.[last_worker_time]
      ,deqs.[min_worker_time]
      ,deqs.[max_worker_time]
      ,deqs.[total_physical_reads]
      ,deqs.[last_physical_reads]
      ,deqs.[min_physical_reads]
      ,deqs.[max_physical_reads]
      ,deqs.[total_logical_writes]
      ,deqs.[last_logical_writes]
      ,deqs.[min_logical_writes]
      ,deqs.[max_logical_writes]
      ,deqs.[total_logical_reads]
      ,deqs.[last_logical_reads]
      ,deqs.[min_logical_reads]
      ,deqs.[max_logical_reads]
      ,deqs.[total_clr_time]
      ,deqs.[last_clr_time]
      ,deqs.[min_clr_time]
      ,deqs.[max_clr_time]
      ,deqs.[total_elapsed_time]
      ,deqs.[last_elapsed_time]
      ,deqs.[min_elapsed_time]
      ,deqs.[max_elapsed_time]
      ,deqs.[query_hash]
      ,deqs.[query_plan_hash]
      ,deqs.[total_rows]
      ,deqs.[last_rows]
      ,deqs.[min_rows]
      ,deqs.[max_rows]
      ,deqs.[statement_sql_handle]
      ,deqs.[statement_context_id]
      ,deqs.[total_dop]
      ,deqs.[last_dop]
      ,deqs.[min_dop]
      ,deqs.[max_dop]
      ,deqs.[total_grant_kb]
      ,deqs.[last_grant_kb]
      ,deqs.[min_grant_kb]
      ,deqs.[max_grant_kb]
      ,deqs.[total_used_grant_kb]
      ,deqs.[last_used_grant_kb]
      ,deqs.[min_used_grant_kb]
      ,deqs.[max_used_grant_kb]
      ,deqs.[total_ideal_grant_kb]
      ,deqs.[last_ideal_grant_kb]
      ,deqs.[min_ideal_grant_kb]
      ,deqs.[max_ideal_grant_kb]
      ,deqs.[total_reserved_threads]
      ,deqs.[last_reserved_threads]
      ,deqs.[min_reserved_threads]
      ,deqs.[max_reserved_threads]
      ,deqs.[total_used_threads]
      ,deqs.[last_used_threads]
      ,deqs.[min_used_threads]
      ,deqs.[max_used_threads]
      ,deqs.[total_columnstore_segment_reads]
      ,deqs.[last_columnstore_segment_reads]
      ,deqs.[min_columnstore_segment_reads]
      ,deqs.[max_columnstore_segment_reads]
      ,deqs.[total_columnstore_segment_skips]
      ,deqs.[last_columnstore_segment_skips]
      ,deqs.[min_columnstore_segment_skips]
      ,deqs.[max_columnstore_segment_skips]
      ,deqs.[total_spills]
      ,deqs.[last_spills]
      ,deqs.[min_spills]
      ,deqs.[max_spills]
      ,deqs.[total_num_physical_reads]
      ,deqs.[last_num_physical_reads]
      ,deqs.[min_num_physical_reads]
      ,deqs.[max_num_physical_reads]
      ,deqs.[total_page_server_reads]
      ,deqs.[last_page_server_reads]
      ,deqs.[min_page_server_reads]
      ,deqs.[max_page_server_reads]
      ,deqs.[total_num_page_server_reads]
      ,deqs.[last_num_page_server_reads]
      ,deqs.[min_num_page_server_reads]
      ,deqs.[max_num_page_server_reads]
FROM [sys].[dm_exec_query_stats] deqs";
    columns {
        /// Token identifying the batch or stored procedure the query belongs to.
        sql_handle: Vec<u8> => SQL_HANDLE,
        statement_start_offset: i32 => STATEMENT_START_OFFSET,
        statement_end_offset: i32 => STATEMENT_END_OFFSET,
        plan_generation_num: Option<i64> => PLAN_GENERATION_NUM,
        plan_handle: Vec<u8> => PLAN_HANDLE,
        creation_time: Option<NaiveDateTime> => CREATION_TIME,
        last_execution_time: Option<NaiveDateTime> => LAST_EXECUTION_TIME,
        /// Number of times the plan has been executed since it was last compiled.
        execution_count: i64 => EXECUTION_COUNT,
        /// Total CPU time, in microseconds.
        total_worker_time: i64 => TOTAL_WORKER_TIME,
        last_worker_time: i64 => LAST_WORKER_TIME,
        min_worker_time: i64 => MIN_WORKER_TIME,
        max_worker_time: i64 => MAX_WORKER_TIME,
        total_physical_reads: i64 => TOTAL_PHYSICAL_READS,
        last_physical_reads: i64 => LAST_PHYSICAL_READS,
        min_physical_reads: i64 => MIN_PHYSICAL_READS,
        max_physical_reads: i64 => MAX_PHYSICAL_READS,
        total_logical_writes: i64 => TOTAL_LOGICAL_WRITES,
        last_logical_writes: i64 => LAST_LOGICAL_WRITES,
        min_logical_writes: i64 => MIN_LOGICAL_WRITES,
        max_logical_writes: i64 => MAX_LOGICAL_WRITES,
        total_logical_reads: i64 => TOTAL_LOGICAL_READS,
        last_logical_reads: i64 => LAST_LOGICAL_READS,
        min_logical_reads: i64 => MIN_LOGICAL_READS,
        max_logical_reads: i64 => MAX_LOGICAL_READS,
        total_clr_time: i64 => TOTAL_CLR_TIME,
        last_clr_time: i64 => LAST_CLR_TIME,
        min_clr_time: i64 => MIN_CLR_TIME,
        max_clr_time: i64 => MAX_CLR_TIME,
        total_elapsed_time: i64 => TOTAL_ELAPSED_TIME,
        last_elapsed_time: i64 => LAST_ELAPSED_TIME,
        min_elapsed_time: i64 => MIN_ELAPSED_TIME,
        max_elapsed_time: i64 => MAX_ELAPSED_TIME,
        query_hash: Option<Vec<u8>> => QUERY_HASH,
        query_plan_hash: Option<Vec<u8>> => QUERY_PLAN_HASH,
        total_rows: Option<i64> => TOTAL_ROWS,
        last_rows: Option<i64> => LAST_ROWS,
        min_rows: Option<i64> => MIN_ROWS,
        max_rows: Option<i64> => MAX_ROWS,
        statement_sql_handle: Option<Vec<u8>> => STATEMENT_SQL_HANDLE,
        statement_context_id: Option<i64> => STATEMENT_CONTEXT_ID,
        total_dop: Option<i64> => TOTAL_DOP,
        last_dop: Option<i64> => LAST_DOP,
        min_dop: Option<i64> => MIN_DOP,
        max_dop: Option<i64> => MAX_DOP,
        total_grant_kb: Option<i64> => TOTAL_GRANT_KB,
        last_grant_kb: Option<i64> => LAST_GRANT_KB,
        min_grant_kb: Option<i64> => MIN_GRANT_KB,
        max_grant_kb: Option<i64> => MAX_GRANT_KB,
        total_used_grant_kb: Option<i64> => TOTAL_USED_GRANT_KB,
        last_used_grant_kb: Option<i64> => LAST_USED_GRANT_KB,
        min_used_grant_kb: Option<i64> => MIN_USED_GRANT_KB,
        max_used_grant_kb: Option<i64> => MAX_USED_GRANT_KB,
        total_ideal_grant_kb: Option<i64> => TOTAL_IDEAL_GRANT_KB,
        last_ideal_grant_kb: Option<i64> => LAST_IDEAL_GRANT_KB,
        min_ideal_grant_kb: Option<i64> => MIN_IDEAL_GRANT_KB,
        max_ideal_grant_kb: Option<i64> => MAX_IDEAL_GRANT_KB,
        total_reserved_threads: Option<i64> => TOTAL_RESERVED_THREADS,
        last_reserved_threads: Option<i64> => LAST_RESERVED_THREADS,
        min_reserved_threads: Option<i64> => MIN_RESERVED_THREADS,
        max_reserved_threads: Option<i64> => MAX_RESERVED_THREADS,
        total_used_threads: Option<i64> => TOTAL_USED_THREADS,
        last_used_threads: Option<i64> => LAST_USED_THREADS,
        min_used_threads: Option<i64> => MIN_USED_THREADS,
        max_used_threads: Option<i64> => MAX_USED_THREADS,
        total_columnstore_segment_reads: Option<i64> => TOTAL_COLUMNSTORE_SEGMENT_READS,
        last_columnstore_segment_reads: Option<i64> => LAST_COLUMNSTORE_SEGMENT_READS,
        min_columnstore_segment_reads: Option<i64> => MIN_COLUMNSTORE_SEGMENT_READS,
        max_columnstore_segment_reads: Option<i64> => MAX_COLUMNSTORE_SEGMENT_READS,
        total_columnstore_segment_skips: Option<i64> => TOTAL_COLUMNSTORE_SEGMENT_SKIPS,
        last_columnstore_segment_skips: Option<i64> => LAST_COLUMNSTORE_SEGMENT_SKIPS,
        min_columnstore_segment_skips: Option<i64> => MIN_COLUMNSTORE_SEGMENT_SKIPS,
        max_columnstore_segment_skips: Option<i64> => MAX_COLUMNSTORE_SEGMENT_SKIPS,
        total_spills: Option<i64> => TOTAL_SPILLS,
        last_spills: Option<i64> => LAST_SPILLS,
        min_spills: Option<i64> => MIN_SPILLS,
        max_spills: Option<i64> => MAX_SPILLS,
        total_num_physical_reads: i64 => TOTAL_NUM_PHYSICAL_READS,
        last_num_physical_reads: i64 => LAST_NUM_PHYSICAL_READS,
        min_num_physical_reads: i64 => MIN_NUM_PHYSICAL_READS,
        max_num_physical_reads: i64 => MAX_NUM_PHYSICAL_READS,
        total_page_server_reads: i64 => TOTAL_PAGE_SERVER_READS,
        last_page_server_reads: i64 => LAST_PAGE_SERVER_READS,
        min_page_server_reads: i64 => MIN_PAGE_SERVER_READS,
        max_page_server_reads: i64 => MAX_PAGE_SERVER_READS,
        total_num_page_server_reads: i64 => TOTAL_NUM_PAGE_SERVER_READS,
        last_num_page_server_reads: i64 => LAST_NUM_PAGE_SERVER_READS,
        min_num_page_server_reads: i64 => MIN_NUM_PAGE_SERVER_READS,
        max_num_page_server_reads: i64 => MAX_NUM_PAGE_SERVER_READS,
    }
}
