//! `sys.dm_resource_governor_resource_pools`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.dm_resource_governor_resource_pools`.
    reader DmResourceGovernorResourcePoolsReader;
    /// One row of `sys.dm_resource_governor_resource_pools`.
    data DmResourceGovernorResourcePool;
    view "sys.dm_resource_governor_resource_pools";
    alias "drgrp";
    sql "SELECT drgrp.[pool_id]
      ,drgrp.[name]
      ,drgrp.[statistics_start_time]
      ,drgrp.[total_cpu_usage_ms]
      ,drgrp.[cache_memory_kb]
      ,drgrp.[compile_memory_kb]
      ,drgrp.[used_memgrant_kb]
      ,drgrp.[total_memgrant_count]
      ,drgrp.[total_memgrant_timeout_count]
      ,drgrp.[active_memgrant_count]
      ,drgrp.[active_memgrant_kb]
      ,drgrp.[memgrant_waiter_count]
      ,drgrp.[max_memory_kb]
      ,drgrp.[used_memory_kb]
      ,drgrp.[target_memory_kb]
      ,drgrp.[out_of_memory_count]
      ,drgrp.[min_cpu_percent]
      ,drgrp.[max_cpu_percent]
      ,drgrp.[min_memory_percent]
      ,drgrp.[max_memory_percent]
      ,drgrp.[cap_cpu_percent]
      ,drgrp.[min_iops_per_volume]
      ,drgrp.[max_iops_per_volume]
      ,drgrp.[read_io_queued_total]
      ,drgrp.[read_io_issued_total]
      ,drgrp.[read_io_completed_total]
      ,drgrp.[read_io_throttled_total]
      ,drgrp.[read_bytes_total]
      ,drgrp.[read_io_stall_total_ms]
      ,drgrp.[read_io_stall_queued_ms]
      ,drgrp.[write_io_queued_total]
      ,drgrp.[write_io_issued_total]
      ,drgrp.[write_io_completed_total]
      ,drgrp.[write_io_throttled_total]
      ,drgrp.[write_bytes_total]
      ,drgrp.[write_io_stall_total_ms]
      ,drgrp.[write_io_stall_queued_ms]
      ,drgrp.[io_issue_violations_total]
      ,drgrp.[io_issue_delay_total_ms]
      ,drgrp.[io_issue_ahead_total_ms]
      ,drgrp.[reserved_io_limited_by_volume_total]
      ,drgrp.[io_issue_delay_non_throttled_total_ms]
      ,drgrp.[total_cpu_delayed_ms]
      ,drgrp.[total_cpu_active_ms]
      ,drgrp.[total_cpu_violation_delay_ms]
      ,drgrp.[total_cpu_violation_sec]
      ,drgrp.[total_cpu_usage_preemptive_ms]
FROM [sys].[dm_resource_governor_resource_pools] drgrp";
    columns {
        pool_id: i32 => POOL_ID,
        name: String => NAME,
        statistics_start_time: NaiveDateTime => STATISTICS_START_TIME,
        total_cpu_usage_ms: i64 => TOTAL_CPU_USAGE_MS,
        cache_memory_kb: i64 => CACHE_MEMORY_KB,
        compile_memory_kb: i64 => COMPILE_MEMORY_KB,
        used_memgrant_kb: i64 => USED_MEMGRANT_KB,
        total_memgrant_count: i64 => TOTAL_MEMGRANT_COUNT,
        total_memgrant_timeout_count: i64 => TOTAL_MEMGRANT_TIMEOUT_COUNT,
        active_memgrant_count: i32 => ACTIVE_MEMGRANT_COUNT,
        active_memgrant_kb: i64 => ACTIVE_MEMGRANT_KB,
        memgrant_waiter_count: i32 => MEMGRANT_WAITER_COUNT,
        max_memory_kb: i64 => MAX_MEMORY_KB,
        used_memory_kb: i64 => USED_MEMORY_KB,
        target_memory_kb: i64 => TARGET_MEMORY_KB,
        out_of_memory_count: i64 => OUT_OF_MEMORY_COUNT,
        min_cpu_percent: i32 => MIN_CPU_PERCENT,
        max_cpu_percent: i32 => MAX_CPU_PERCENT,
        min_memory_percent: i32 => MIN_MEMORY_PERCENT,
        max_memory_percent: i32 => MAX_MEMORY_PERCENT,
        cap_cpu_percent: i32 => CAP_CPU_PERCENT,
        min_iops_per_volume: Option<i32> => MIN_IOPS_PER_VOLUME,
        max_iops_per_volume: Option<i32> => MAX_IOPS_PER_VOLUME,
        read_io_queued_total: Option<i32> => READ_IO_QUEUED_TOTAL,
        read_io_issued_total: Option<i32> => READ_IO_ISSUED_TOTAL,
        read_io_completed_total: i32 => READ_IO_COMPLETED_TOTAL,
        read_io_throttled_total: Option<i32> => READ_IO_THROTTLED_TOTAL,
        read_bytes_total: i64 => READ_BYTES_TOTAL,
        read_io_stall_total_ms: i64 => READ_IO_STALL_TOTAL_MS,
        read_io_stall_queued_ms: Option<i64> => READ_IO_STALL_QUEUED_MS,
        write_io_queued_total: Option<i32> => WRITE_IO_QUEUED_TOTAL,
        write_io_issued_total: Option<i32> => WRITE_IO_ISSUED_TOTAL,
        write_io_completed_total: i32 => WRITE_IO_COMPLETED_TOTAL,
        write_io_throttled_total: Option<i32> => WRITE_IO_THROTTLED_TOTAL,
        write_bytes_total: i64 => WRITE_BYTES_TOTAL,
        write_io_stall_total_ms: i64 => WRITE_IO_STALL_TOTAL_MS,
        write_io_stall_queued_ms: Option<i64> => WRITE_IO_STALL_QUEUED_MS,
        io_issue_violations_total: Option<i32> => IO_ISSUE_VIOLATIONS_TOTAL,
        io_issue_delay_total_ms: Option<i64> => IO_ISSUE_DELAY_TOTAL_MS,
        io_issue_ahead_total_ms: Option<i64> => IO_ISSUE_AHEAD_TOTAL_MS,
        reserved_io_limited_by_volume_total: Option<i32> => RESERVED_IO_LIMITED_BY_VOLUME_TOTAL,
        io_issue_delay_non_throttled_total_ms: Option<i64> => IO_ISSUE_DELAY_NON_THROTTLED_TOTAL_MS,
        total_cpu_delayed_ms: i64 => TOTAL_CPU_DELAYED_MS,
        total_cpu_active_ms: i64 => TOTAL_CPU_ACTIVE_MS,
        total_cpu_violation_delay_ms: i64 => TOTAL_CPU_VIOLATION_DELAY_MS,
        total_cpu_violation_sec: i64 => TOTAL_CPU_VIOLATION_SEC,
        total_cpu_usage_preemptive_ms: i64 => TOTAL_CPU_USAGE_PREEMPTIVE_MS,
    }
}
