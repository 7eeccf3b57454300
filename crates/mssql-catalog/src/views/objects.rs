//! `sys.objects`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.objects`, every user-defined schema-scoped object.
    reader ObjectsReader;
    /// One row of `sys.objects`.
    data Object;
    view "sys.objects";
    alias "o";
    sql "SELECT o.[name]
      ,o.[object_id]
      ,o.[principal_id]
      ,o.[schema_id]
      ,o.[parent_object_id]
      ,o.[type]
      ,o.[type_desc]
      ,o.[create_date]
      ,o.[modify_date]
      ,o.[is_ms_shipped]
      ,o.[is_published]
      ,o.[is_schema_published]
FROM [sys].[objects] o";
    columns {
        name: String => NAME,
        object_id: i32 => OBJECT_ID,
        principal_id: Option<i32> => PRINCIPAL_ID,
        schema_id: i32 => SCHEMA_ID,
        /// Owning object for triggers and constraints, 0 otherwise.
        parent_object_id: i32 => PARENT_OBJECT_ID,
        /// Object type code, e.g. `U` for a user table or `V` for a view.
        object_type as "type": String => TYPE,
        type_desc: String => TYPE_DESC,
        create_date: NaiveDateTime => CREATE_DATE,
        modify_date: NaiveDateTime => MODIFY_DATE,
        is_ms_shipped: bool => IS_MS_SHIPPED,
        is_published: bool => IS_PUBLISHED,
        is_schema_published: bool => IS_SCHEMA_PUBLISHED,
    }
}
