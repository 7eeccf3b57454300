//! `sys.default_constraints`.

use chrono::NaiveDateTime;

catalog_view! {
    /// Reader over `sys.default_constraints`.
    reader DefaultConstraintsReader;
    /// One row of `sys.default_constraints`.
    data DefaultConstraint;
    view "sys.default_constraints";
    alias "dc";
    sql "SELECT dc.[name]
      ,dc.[object_id]
      ,dc.[principal_id]
      ,dc.[schema_id]
      ,dc.[parent_object_id]
      ,dc.[type]
      ,dc.[type_desc]
      ,dc.[create_date]
      ,dc.[modify_date]
      ,dc.[is_ms_shipped]
      ,dc.[is_published]
      ,dc.[is_schema_published]
      ,dc.[parent_column_id]
      ,dc.[definition]
      ,dc.[is_system_named]
FROM [sys].[default_constraints] dc";
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
        parent_column_id: i32 => PARENT_COLUMN_ID,
        definition: Option<String> => DEFINITION,
        is_system_named: bool => IS_SYSTEM_NAMED,
    }
}
