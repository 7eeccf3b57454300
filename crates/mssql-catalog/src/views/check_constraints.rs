//! `sys.check_constraints`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.check_constraints`.
    reader CheckConstraintsReader;
    /// One row of `sys.check_constraints`.
    data CheckConstraint;
    view "sys.check_constraints";
    alias "chk";
    sql "SELECT chk.[name]
      ,chk.[object_id]
      ,chk.[principal_id]
      ,chk.[schema_id]
      ,chk.[parent_object_id]
      ,chk.[type]
      ,chk.[type_desc]
      ,chk.[create_date]
      ,chk.[modify_date]
      ,chk.[is_ms_shipped]
      ,chk.[is_published]
      ,chk.[is_schema_published]
      ,chk.[is_disabled]
      ,chk.[is_not_for_replication]
      ,chk.[is_not_trusted]
      ,chk.[parent_column_id]
      ,chk.[definition]
      ,chk.[uses_database_collation]
      ,chk.[is_system_named]
FROM [sys].[check_constraints] chk";
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
        is_disabled: bool => IS_DISABLED,
        is_not_for_replication: bool => IS_NOT_FOR_REPLICATION,
        is_not_trusted: bool => IS_NOT_TRUSTED,
        /// Column the constraint is defined on, 0 for table-level constraints.
        parent_column_id: i32 => PARENT_COLUMN_ID,
        definition: Option<String> => DEFINITION,
        uses_database_collation: Option<bool> => USES_DATABASE_COLLATION,
        is_system_named: bool => IS_SYSTEM_NAMED,
    }
}
