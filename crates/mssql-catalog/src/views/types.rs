//! `sys.types`.

catalog_view! {
    /// Reader over `sys.types`, system and user-defined types.
    reader TypesReader;
    /// One row of `sys.types`.
    data DatabaseType;
    view "sys.types";
    alias "ty";
    sql "SELECT ty.[name]
      ,ty.[system_type_id]
      ,ty.[user_type_id]
      ,ty.[schema_id]
      ,ty.[principal_id]
      ,ty.[max_length]
      ,ty.[precision]
      ,ty.[scale]
      ,ty.[collation_name]
      ,ty.[is_nullable]
      ,ty.[is_user_defined]
      ,ty.[is_assembly_type]
      ,ty.[default_object_id]
      ,ty.[rule_object_id]
      ,ty.[is_table_type]
FROM [sys].[types] ty";
    columns {
        name: String => NAME,
        system_type_id: u8 => SYSTEM_TYPE_ID,
        user_type_id: i32 => USER_TYPE_ID,
        schema_id: i32 => SCHEMA_ID,
        principal_id: Option<i32> => PRINCIPAL_ID,
        max_length: i16 => MAX_LENGTH,
        precision: u8 => PRECISION,
        scale: u8 => SCALE,
        collation_name: Option<String> => COLLATION_NAME,
        is_nullable: Option<bool> => IS_NULLABLE,
        is_user_defined: bool => IS_USER_DEFINED,
        is_assembly_type: bool => IS_ASSEMBLY_TYPE,
        default_object_id: i32 => DEFAULT_OBJECT_ID,
        rule_object_id: i32 => RULE_OBJECT_ID,
        is_table_type: bool => IS_TABLE_TYPE,
    }
}
