//! `sys.query_store_runtime_stats`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.query_store_runtime_stats`, runtime statistics recorded by the Query Store.
    reader QueryStoreRuntimeStatsReader;
    /// One row of `sys.query_store_runtime_stats`.
    data QueryStoreRuntimeStats;
    view "sys.query_store_runtime_stats";
    alias "qsrs";
    sql "SELECT qsrs.[runtime_stats_id]
      ,qsrs.[plan_id]
      ,qsrs.[runtime_stats_interval_id]
      ,qsrs.[execution_type]
      ,qsrs.[execution_type_desc]
      ,qsrs.[first_execution_time]
      ,qsrs.[last_execution_time]
      ,qsrs.[count_executions]
      ,qsrs.[avg_duration]
      ,qsrs.[last_duration]
      ,qsrs.[min_duration]
      ,qsrs.[max_duration]
      ,qsrs.[stdev_duration]
      ,qsrs.[avg_cpu_time]
      ,qsrs.[last_cpu_time]
      ,qsrs.[min_cpu_time]
      ,qsrs.[max_cpu_time]
      ,qsrs.[stdev_cpu_time]
      ,qsrs.[avg_logical_io_reads]
      ,qsrs.[last_logical_io_reads]
      ,qsrs.[min_logical_io_reads]
      ,qsrs.[max_logical_io_reads]
      ,qsrs.[stdev_logical_io_reads]
      ,qsrs.[avg_logical_io_writes]
      ,qsrs.[last_logical_io_writes]
      ,qsrs.[min_logical_io_writes]
      ,qsrs.[max_logical_io_writes]
      ,qsrs.[stdev_logical_io_writes]
      ,qsrs.[avg_physical_io_reads]
      ,qsrs.[last_physical_io_reads]
      ,qsrs.[min_physical_io_reads]
      ,qsrs.[max_physical_io_reads]
      ,qsrs.[stdev_physical_io_reads]
      ,qsrs.[avg_clr_time]
      ,qsrs.[last_clr_time]
      ,qsrs.[min_clr_time]
      ,qsrs.[max_clr_time]
      ,qsrs.[stdev_clr_time]
      ,qsrs.[avg_dop]
      ,qsrs.[last_dop]
      ,qsrs.[min_dop]
      ,qsrs.[max_dop]
      ,qsrs.[stdev_dop]
      ,qsrs.[avg_query_max_used_memory]
      ,qsrs.[last_query_max_used_memory]
      ,qsrs.[min_query_max_used_memory]
      ,qsrs.[max_query_max_used_memory]
      ,qsrs.[stdev_query_max_used_memory]
      ,qsrs.[avg_rowcount]
      ,qsrs.[last_rowcount]
      ,qsrs.[min_rowcount]
      ,qsrs.[max_rowcount]
      ,qsrs.[stdev_rowcount]
      ,qsrs.[avg_num_physical_io_reads]
      ,qsrs.[last_num_physical_io_reads]
      ,qsrs.[min_num_physical_io_reads]
      ,qsrs.[max_num_physical_io_reads]
      ,qsrs.[stdev_num_physical_io_reads]
      ,qsrs.[avg_log_bytes_used]
      ,qsrs.[last_log_bytes_used]
      ,qsrs.[min_log_bytes_used]
      ,qsrs.[max_log_bytes_used]
      ,qsrs.[stdev_log_bytes_used]
      ,qsrs.[avg_tempdb_space_used]
      ,qsrs.[last_tempdb_space_used]
      ,qsrs.[min_tempdb_space_used]
      ,qsrs.[max_tempdb_space_used]
      ,qsrs.[stdev_tempdb_space_used]
FROM [sys].[query_store_runtime_stats] qsrs";
    columns {
        runtime_stats_id: i64 => RUNTIME_STATS_ID,
        plan_id: i64 => PLAN_ID,
        runtime_stats_interval_id: i64 => RUNTIME_STATS_INTERVAL_ID,
        /// 0 = regular, 3 = client aborted, 4 = exception aborted.
        execution_type: u8 => EXECUTION_TYPE,
        execution_type_desc: Option<String> => EXECUTION_TYPE_DESC,
        first_execution_time: NaiveDateTime => FIRST_EXECUTION_TIME,
        last_execution_time: NaiveDateTime => LAST_EXECUTION_TIME,
        count_executions: i64 => COUNT_EXECUTIONS,
        avg_duration: Option<f64> => AVG_DURATION,
        last_duration: i64 => LAST_DURATION,
        min_duration: i64 => MIN_DURATION,
        max_duration: i64 => MAX_DURATION,
        stdev_duration: Option<f64> => STDEV_DURATION,
        avg_cpu_time: Option<f64> => AVG_CPU_TIME,
        last_cpu_time: i64 => LAST_CPU_TIME,
        min_cpu_time: i64 => MIN_CPU_TIME,
        max_cpu_time: i64 => MAX_CPU_TIME,
        stdev_cpu_time: Option<f64> => STDEV_CPU_TIME,
        avg_logical_io_reads: Option<f64> => AVG_LOGICAL_IO_READS,
        last_logical_io_reads: i64 => LAST_LOGICAL_IO_READS,
        min_logical_io_reads: i64 => MIN_LOGICAL_IO_READS,
        max_logical_io_reads: i64 => MAX_LOGICAL_IO_READS,
        stdev_logical_io_reads: Option<f64> => STDEV_LOGICAL_IO_READS,
        avg_logical_io_writes: Option<f64> => AVG_LOGICAL_IO_WRITES,
        last_logical_io_writes: i64 => LAST_LOGICAL_IO_WRITES,
        min_logical_io_writes: i64 => MIN_LOGICAL_IO_WRITES,
        max_logical_io_writes: i64 => MAX_LOGICAL_IO_WRITES,
        stdev_logical_io_writes: Option<f64> => STDEV_LOGICAL_IO_WRITES,
        avg_physical_io_reads: Option<f64> => AVG_PHYSICAL_IO_READS,
        last_physical_io_reads: i64 => LAST_PHYSICAL_IO_READS,
        min_physical_io_reads: i64 => MIN_PHYSICAL_IO_READS,
        max_physical_io_reads: i64 => MAX_PHYSICAL_IO_READS,
        stdev_physical_io_reads: Option<f64> => STDEV_PHYSICAL_IO_READS,
        avg_clr_time: Option<f64> => AVG_CLR_TIME,
        last_clr_time: i64 => LAST_CLR_TIME,
        min_clr_time: i64 => MIN_CLR_TIME,
        max_clr_time: i64 => MAX_CLR_TIME,
        stdev_clr_time: Option<f64> => STDEV_CLR_TIME,
        avg_dop: Option<f64> => AVG_DOP,
        last_dop: i64 => LAST_DOP,
        min_dop: i64 => MIN_DOP,
        max_dop: i64 => MAX_DOP,
        stdev_dop: Option<f64> => STDEV_DOP,
        avg_query_max_used_memory: Option<f64> => AVG_QUERY_MAX_USED_MEMORY,
        last_query_max_used_memory: i64 => LAST_QUERY_MAX_USED_MEMORY,
        min_query_max_used_memory: i64 => MIN_QUERY_MAX_USED_MEMORY,
        max_query_max_used_memory: i64 => MAX_QUERY_MAX_USED_MEMORY,
        stdev_query_max_used_memory: Option<f64> => STDEV_QUERY_MAX_USED_MEMORY,
        avg_rowcount: Option<f64> => AVG_ROWCOUNT,
        last_rowcount: i64 => LAST_ROWCOUNT,
        min_rowcount: i64 => MIN_ROWCOUNT,
        max_rowcount: i64 => MAX_ROWCOUNT,
        stdev_rowcount: Option<f64> => STDEV_ROWCOUNT,
        avg_num_physical_io_reads: Option<f64> => AVG_NUM_PHYSICAL_IO_READS,
        last_num_physical_io_reads: Option<i64> => LAST_NUM_PHYSICAL_IO_READS,
        min_num_physical_io_reads: Option<i64> => MIN_NUM_PHYSICAL_IO_READS,
        max_num_physical_io_reads: Option<i64> => MAX_NUM_PHYSICAL_IO_READS,
        stdev_num_physical_io_reads: Option<f64> => STDEV_NUM_PHYSICAL_IO_READS,
        avg_log_bytes_used: Option<f64> => AVG_LOG_BYTES_USED,
        last_log_bytes_used: Option<i64> => LAST_LOG_BYTES_USED,
        min_log_bytes_used: Option<i64> => MIN_LOG_BYTES_USED,
        max_log_bytes_used: Option<i64> => MAX_LOG_BYTES_USED,
        stdev_log_bytes_used: Option<f64> => STDEV_LOG_BYTES_USED,
        avg_tempdb_space_used: Option<f64> => AVG_TEMPDB_SPACE_USED,
        last_tempdb_space_used: Option<i64> => LAST_TEMPDB_SPACE_USED,
        min_tempdb_space_used: Option<i64> => MIN_TEMPDB_SPACE_USED,
        max_tempdb_space_used: Option<i64> => MAX_TEMPDB_SPACE_USED,
        stdev_tempdb_space_used: Option<f64> => STDEV_TEMPDB_SPACE_USED,
    }
}
