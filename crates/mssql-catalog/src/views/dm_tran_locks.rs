//! `sys.dm_tran_locks`.

use uuid::Uuid;

catalog_view! {
    /// Reader over `sys.dm_tran_locks`, currently active lock manager resources.
    reader DmTranLocksReader;
    /// One row of `sys.dm_tran_locks`.
    data DmTranLock;
    view "sys.dm_tran_locks";
    alias "dtl";
    sql "SELECT dtl.[resource_type]
      ,dtl.[resource_subtype]
      ,dtl.[resource_database_id]
      ,dtl.[resource_description]
      ,dtl.[resource_associated_entity_id]
      ,dtl.[resource_lock_partition]
      ,dtl.[request_mode]
      ,dtl.[request_type]
      ,dtl.[request_status]
      ,dtl.[request_reference_count]
      ,dtl.[request_lifetime]
      ,dtl.[request_session_id]
      ,dtl.[request_exec_context_id]
      ,dtl.[request_request_id]
      ,dtl.[request_owner_type]
      ,dtl.[request_owner_id]
      ,dtl.[request_owner_guid]
      ,dtl.[request_owner_lockspace_id]
      ,dtl.[lock_owner_address]
FROM [sys].[dm_tran_locks] dtl";
    columns {
        resource_type: String => RESOURCE_TYPE,
        resource_subtype: String => RESOURCE_SUBTYPE,
        resource_database_id: i32 => RESOURCE_DATABASE_ID,
        resource_description: Option<String> => RESOURCE_DESCRIPTION,
        resource_associated_entity_id: Option<i64> => RESOURCE_ASSOCIATED_ENTITY_ID,
        resource_lock_partition: Option<i32> => RESOURCE_LOCK_PARTITION,
        /// Lock mode, e.g. `S`, `X` or `IX`.
        request_mode: String => REQUEST_MODE,
        request_type: String => REQUEST_TYPE,
        /// `GRANT`, `CONVERT`, `WAIT`, `LOW_PRIORITY_CONVERT`, ...
        request_status: String => REQUEST_STATUS,
        request_reference_count: i16 => REQUEST_REFERENCE_COUNT,
        request_lifetime: i32 => REQUEST_LIFETIME,
        /// Session that owns the request.
        request_session_id: i32 => REQUEST_SESSION_ID,
        request_exec_context_id: i32 => REQUEST_EXEC_CONTEXT_ID,
        request_request_id: i32 => REQUEST_REQUEST_ID,
        request_owner_type: String => REQUEST_OWNER_TYPE,
        request_owner_id: Option<i64> => REQUEST_OWNER_ID,
        request_owner_guid: Option<Uuid> => REQUEST_OWNER_GUID,
        request_owner_lockspace_id: Option<String> => REQUEST_OWNER_LOCKSPACE_ID,
        lock_owner_address: Vec<u8> => LOCK_OWNER_ADDRESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SqlValue;
    use crate::reader::RowReader;

    fn lock_row() -> Vec<SqlValue> {
        DmTranLocksReader::COLUMNS
            .iter()
            .map(|column| match *column {
                "resource_database_id" => SqlValue::I32(5),
                "resource_associated_entity_id" => SqlValue::I64(72057594043236352),
                "resource_lock_partition" => SqlValue::Null,
                "request_reference_count" => SqlValue::I16(1),
                "request_lifetime" | "request_exec_context_id" | "request_request_id" => {
                    SqlValue::I32(0)
                }
                "request_session_id" => SqlValue::I32(53),
                "request_owner_id" => SqlValue::I64(4711),
                "request_owner_guid" => SqlValue::Uuid(Uuid::nil()),
                "lock_owner_address" => SqlValue::Bytes(vec![0xde, 0xad]),
                "request_mode" => SqlValue::String("IX".into()),
                other => SqlValue::String(other.to_uppercase()),
            })
            .collect()
    }

    #[test]
    fn test_to_data_maps_every_column() {
        let columns = DmTranLocksReader::COLUMNS.iter().map(|c| c.to_string()).collect();
        let mut locks = DmTranLocksReader::new(RowReader::new(columns, vec![lock_row()]));
        assert!(locks.read());

        assert_eq!(locks.request_session_id().unwrap(), 53);
        assert_eq!(locks.resource_lock_partition().unwrap(), None);

        let lock = locks.to_data().unwrap();
        assert_eq!(lock.request_mode, "IX");
        assert_eq!(lock.resource_type, "RESOURCE_TYPE");
        assert_eq!(lock.resource_associated_entity_id, Some(72057594043236352));
        assert_eq!(lock.request_owner_guid, Some(Uuid::nil()));
        assert_eq!(lock.lock_owner_address, vec![0xde, 0xad]);
    }

    #[test]
    fn test_null_in_required_column_fails() {
        let columns = DmTranLocksReader::COLUMNS.iter().map(|c| c.to_string()).collect();
        let mut row = lock_row();
        row[DmTranLocksReader::REQUEST_MODE] = SqlValue::Null;
        let mut locks = DmTranLocksReader::new(RowReader::new(columns, vec![row]));
        locks.read();

        let err = locks.to_data().unwrap_err();
        assert!(err.to_string().contains("request_mode"));
    }
}
