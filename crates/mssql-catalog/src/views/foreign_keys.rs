//! `sys.foreign_keys`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.foreign_keys`.
    reader ForeignKeysReader;
    /// One row of `sys.foreign_keys`.
    data ForeignKey;
    view "sys.foreign_keys";
    alias "fk";
    sql "SELECT fk.[name]
      ,fk.[object_id]
      ,fk.[principal_id]
      ,fk.[schema_id]
      ,fk.[parent_object_id]
      ,fk.[type]
      ,fk.[type_desc]
      ,fk.[create_date]
      ,fk.[modify_date]
      ,fk.[is_ms_shipped]
      ,fk.[is_published]
      ,fk.[is_schema_published]
      ,fk.[referenced_object_id]
      ,fk.[key_index_id]
      ,fk.[is_disabled]
      ,fk.[is_not_for_replication]
      ,fk.[is_not_trusted]
      ,fk.[delete_referential_action]
      ,fk.[delete_referential_action_desc]
      ,fk.[update_referential_action]
      ,fk.[update_referential_action_desc]
      ,fk.[is_system_named]
FROM [sys].[foreign_keys] fk";
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
        referenced_object_id: Option<i32> => REFERENCED_OBJECT_ID,
        /// Key index on the referenced object.
        key_index_id: Option<i32> => KEY_INDEX_ID,
        is_disabled: bool => IS_DISABLED,
        is_not_for_replication: bool => IS_NOT_FOR_REPLICATION,
        is_not_trusted: bool => IS_NOT_TRUSTED,
        /// 0 = NO ACTION, 1 = CASCADE, 2 = SET NULL, 3 = SET DEFAULT.
        delete_referential_action: Option<u8> => DELETE_REFERENTIAL_ACTION,
        delete_referential_action_desc: Option<String> => DELETE_REFERENTIAL_ACTION_DESC,
        update_referential_action: Option<u8> => UPDATE_REFERENTIAL_ACTION,
        update_referential_action_desc: Option<String> => UPDATE_REFERENTIAL_ACTION_DESC,
        is_system_named: bool => IS_SYSTEM_NAMED,
    }
}
