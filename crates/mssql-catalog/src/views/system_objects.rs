//! `sys.system_objects`.

use chrono::NaiveDateTime;

use super::Object;

catalog_view! {
    /// Reader over `sys.system_objects`, the schema-scoped objects that ship with SQL Server.
    reader SystemObjectsReader;
    shares Object;
    view "sys.system_objects";
    alias "so";
    sql "SELECT so.[name]
      ,so.[object_id]
      ,so.[principal_id]
      ,so.[schema_id]
      ,so.[parent_object_id]
      ,so.[type]
      ,so.[type_desc]
      ,so.[create_date]
      ,so.[modify_date]
      ,so.[is_ms_shipped]
      ,so.[is_published]
      ,so.[is_schema_published]
FROM [sys].[system_objects] so";
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
    }
}
