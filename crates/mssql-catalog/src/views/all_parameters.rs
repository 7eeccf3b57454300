//! `sys.all_parameters`.

catalog_view! {
    /// Reader over `sys.all_parameters`, parameters of user and system modules.
    ///
    /// The `sql_variant` default value is converted to `nvarchar(4000)` in the query.
    reader AllParametersReader;
    /// One row of `sys.all_parameters`.
    data Parameter;
    view "sys.all_parameters";
    alias "ap";
    sql "SELECT ap.[object_id]
      ,ap.[name]
      ,ap.[parameter_id]
      ,ap.[system_type_id]
      ,ap.[user_type_id]
      ,ap.[max_length]
      ,ap.[precision]
      ,ap.[scale]
      ,ap.[is_output]
      ,ap.[is_cursor_ref]
      ,ap.[has_default_value]
      ,ap.[is_xml_document]
      ,CONVERT(nvarchar(4000), ap.[default_value]) AS [default_value]
      ,ap.[xml_collection_id]
      ,ap.[is_readonly]
      ,ap.[is_nullable]
      ,ap.[encryption_type]
      ,ap.[encryption_type_desc]
      ,ap.[encryption_algorithm_name]
      ,ap.[column_encryption_key_id]
      ,ap.[column_encryption_key_database_name]
FROM [sys].[all_parameters] ap";
    columns {
        object_id: i32 => OBJECT_ID,
        name: Option<String> => NAME,
        /// Position in the parameter list; 0 is the return value of a function.
        parameter_id: i32 => PARAMETER_ID,
        system_type_id: u8 => SYSTEM_TYPE_ID,
        user_type_id: i32 => USER_TYPE_ID,
        max_length: i16 => MAX_LENGTH,
        precision: u8 => PRECISION,
        scale: u8 => SCALE,
        is_output: bool => IS_OUTPUT,
        is_cursor_ref: bool => IS_CURSOR_REF,
        has_default_value: bool => HAS_DEFAULT_VALUE,
        is_xml_document: bool => IS_XML_DOCUMENT,
        /// Default value when `has_default_value` is set.
        default_value: Option<String> => DEFAULT_VALUE,
        xml_collection_id: i32 => XML_COLLECTION_ID,
        is_readonly: bool => IS_READONLY,
        is_nullable: Option<bool> => IS_NULLABLE,
        encryption_type: Option<i32> => ENCRYPTION_TYPE,
        encryption_type_desc: Option<String> => ENCRYPTION_TYPE_DESC,
        encryption_algorithm_name: Option<String> => ENCRYPTION_ALGORITHM_NAME,
        column_encryption_key_id: Option<i32> => COLUMN_ENCRYPTION_KEY_ID,
        column_encryption_key_database_name: Option<String> => COLUMN_ENCRYPTION_KEY_DATABASE_NAME,
    }
}
