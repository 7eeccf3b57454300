//! `sys.dm_db_xtp_checkpoint_stats`.

use rust_decimal::Decimal;
use uuid::Uuid;

catalog_view! {
    /// Reader over `sys.dm_db_xtp_checkpoint_stats`, In-Memory OLTP checkpoint statistics for the current database.
    reader DmDbXtpCheckpointStatsReader;
    /// One row of `sys.dm_db_xtp_checkpoint_stats`.
    data DmDbXtpCheckpointStats;
    view "sys.dm_db_xtp_checkpoint_stats";
    alias "ddxcs";
    sql "SELECT ddxcs.[last_lsn_processed]
      ,ddxcs.[end_of_log_lsn]
      ,ddxcs.[bytes_to_end_of_log]
      ,ddxcs.[log_consumption_rate]
      ,ddxcs.[active_scan_time_in_ms]
      ,ddxcs.[total_wait_time_in_ms]
      ,ddxcs.[waits_for_io_count]
      ,ddxcs.[io_wait_time_in_ms]
      ,ddxcs.[waits_for_new_log_count]
      ,ddxcs.[new_log_wait_time_in_ms]
      ,ddxcs.[idle_attempts_count]
      ,ddxcs.[tx_segments_dispatched_count]
      ,ddxcs.[segment_bytes_dispatched]
      ,ddxcs.[bytes_serialized]
      ,ddxcs.[serializer_user_time_in_ms]
      ,ddxcs.[serializer_kernel_time_in_ms]
      ,ddxcs.[xtp_log_bytes_consumed]
      ,ddxcs.[checkpoints_closed]
      ,ddxcs.[last_closed_checkpoint_ts]
      ,ddxcs.[hardened_recovery_lsn]
      ,ddxcs.[hardened_root_file_guid]
      ,ddxcs.[hardened_root_file_watermark]
      ,ddxcs.[hardened_truncation_lsn]
      ,ddxcs.[log_bytes_since_last_close]
      ,ddxcs.[time_since_last_close_in_ms]
      ,ddxcs.[current_checkpoint_id]
      ,ddxcs.[current_checkpoint_segment_count]
      ,ddxcs.[recovery_lsn_candidate]
      ,ddxcs.[outstanding_checkpoint_count]
      ,ddxcs.[closing_checkpoint_id]
      ,ddxcs.[recovery_checkpoint_id]
      ,ddxcs.[recovery_checkpoint_ts]
      ,ddxcs.[bootstrap_recovery_lsn]
      ,ddxcs.[bootstrap_root_file_guid]
      ,ddxcs.[internal_error_code]
      ,ddxcs.[tail_cache_page_count]
      ,ddxcs.[tail_cache_max_page_count]
      ,ddxcs.[tail_cache_min_needed_lsn]
      ,ddxcs.[merge_outstanding_merges]
      ,ddxcs.[merge_stats_number_of_merges]
      ,ddxcs.[merge_stats_log_blocks_merged]
      ,ddxcs.[merge_stats_bytes_merged]
      ,ddxcs.[merge_stats_user_time]
      ,ddxcs.[merge_stats_kernel_time]
      ,ddxcs.[bytes_of_large_data_serialized]
FROM [sys].[dm_db_xtp_checkpoint_stats] ddxcs";
    columns {
        /// Last LSN seen by the controller.
        last_lsn_processed: Option<Decimal> => LAST_LSN_PROCESSED,
        /// LSN at the end of the log.
        end_of_log_lsn: Option<Decimal> => END_OF_LOG_LSN,
        bytes_to_end_of_log: Option<i64> => BYTES_TO_END_OF_LOG,
        log_consumption_rate: Option<i64> => LOG_CONSUMPTION_RATE,
        active_scan_time_in_ms: Option<i64> => ACTIVE_SCAN_TIME_IN_MS,
        total_wait_time_in_ms: Option<i64> => TOTAL_WAIT_TIME_IN_MS,
        waits_for_io_count: Option<i64> => WAITS_FOR_IO_COUNT,
        io_wait_time_in_ms: Option<i64> => IO_WAIT_TIME_IN_MS,
        waits_for_new_log_count: Option<i64> => WAITS_FOR_NEW_LOG_COUNT,
        new_log_wait_time_in_ms: Option<i64> => NEW_LOG_WAIT_TIME_IN_MS,
        idle_attempts_count: Option<i64> => IDLE_ATTEMPTS_COUNT,
        tx_segments_dispatched_count: Option<i64> => TX_SEGMENTS_DISPATCHED_COUNT,
        segment_bytes_dispatched: Option<i64> => SEGMENT_BYTES_DISPATCHED,
        bytes_serialized: Option<i64> => BYTES_SERIALIZED,
        serializer_user_time_in_ms: Option<i64> => SERIALIZER_USER_TIME_IN_MS,
        serializer_kernel_time_in_ms: Option<i64> => SERIALIZER_KERNEL_TIME_IN_MS,
        xtp_log_bytes_consumed: Option<i64> => XTP_LOG_BYTES_CONSUMED,
        checkpoints_closed: Option<i64> => CHECKPOINTS_CLOSED,
        last_closed_checkpoint_ts: Option<i64> => LAST_CLOSED_CHECKPOINT_TS,
        hardened_recovery_lsn: Option<Decimal> => HARDENED_RECOVERY_LSN,
        hardened_root_file_guid: Option<Uuid> => HARDENED_ROOT_FILE_GUID,
        hardened_root_file_watermark: Option<i64> => HARDENED_ROOT_FILE_WATERMARK,
        hardened_truncation_lsn: Option<Decimal> => HARDENED_TRUNCATION_LSN,
        log_bytes_since_last_close: Option<i64> => LOG_BYTES_SINCE_LAST_CLOSE,
        time_since_last_close_in_ms: Option<i64> => TIME_SINCE_LAST_CLOSE_IN_MS,
        current_checkpoint_id: Option<i64> => CURRENT_CHECKPOINT_ID,
        current_checkpoint_segment_count: Option<i64> => CURRENT_CHECKPOINT_SEGMENT_COUNT,
        recovery_lsn_candidate: Option<Decimal> => RECOVERY_LSN_CANDIDATE,
        outstanding_checkpoint_count: Option<i64> => OUTSTANDING_CHECKPOINT_COUNT,
        closing_checkpoint_id: Option<i64> => CLOSING_CHECKPOINT_ID,
        recovery_checkpoint_id: Option<i64> => RECOVERY_CHECKPOINT_ID,
        recovery_checkpoint_ts: Option<i64> => RECOVERY_CHECKPOINT_TS,
        bootstrap_recovery_lsn: Option<Decimal> => BOOTSTRAP_RECOVERY_LSN,
        bootstrap_root_file_guid: Option<Uuid> => BOOTSTRAP_ROOT_FILE_GUID,
        internal_error_code: Option<i64> => INTERNAL_ERROR_CODE,
        tail_cache_page_count: Option<i64> => TAIL_CACHE_PAGE_COUNT,
        tail_cache_max_page_count: Option<i64> => TAIL_CACHE_MAX_PAGE_COUNT,
        tail_cache_min_needed_lsn: Option<Decimal> => TAIL_CACHE_MIN_NEEDED_LSN,
        merge_outstanding_merges: Option<i64> => MERGE_OUTSTANDING_MERGES,
        merge_stats_number_of_merges: Option<i64> => MERGE_STATS_NUMBER_OF_MERGES,
        merge_stats_log_blocks_merged: Option<i64> => MERGE_STATS_LOG_BLOCKS_MERGED,
        merge_stats_bytes_merged: Option<i64> => MERGE_STATS_BYTES_MERGED,
        merge_stats_user_time: Option<i64> => MERGE_STATS_USER_TIME,
        merge_stats_kernel_time: Option<i64> => MERGE_STATS_KERNEL_TIME,
        bytes_of_large_data_serialized: Option<i64> => BYTES_OF_LARGE_DATA_SERIALIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::sample_reader;

    #[test]
    fn test_idle_checkpoint_has_no_recovery_state() {
        let reader = sample_reader(
            DmDbXtpCheckpointStatsReader::COLUMNS,
            DmDbXtpCheckpointStatsReader::RUST_TYPES,
            &[
                "hardened_root_file_guid",
                "bootstrap_root_file_guid",
                "recovery_lsn_candidate",
                "bootstrap_recovery_lsn",
                "tail_cache_min_needed_lsn",
                "closing_checkpoint_id",
            ],
        );

        let rows = DmDbXtpCheckpointStatsReader::new(reader).read_all().unwrap();
        let row = &rows[0];
        assert_eq!(row.hardened_root_file_guid, None);
        assert_eq!(row.bootstrap_root_file_guid, None);
        assert_eq!(row.recovery_lsn_candidate, None);
        assert_eq!(row.closing_checkpoint_id, None);
        assert_eq!(row.last_lsn_processed, Some(Decimal::from(1)));
        assert_eq!(row.checkpoints_closed, Some(1));
    }
}
