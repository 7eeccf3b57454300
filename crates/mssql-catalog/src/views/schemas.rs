//! `sys.schemas`.

catalog_view! {
    /// Reader over `sys.schemas`.
    reader SchemasReader;
    /// One row of `sys.schemas`.
    data Schema;
    view "sys.schemas";
    alias "s";
    sql "SELECT s.[name]
      ,s.[schema_id]
      ,s.[principal_id]
FROM [sys].[schemas] s";
    columns {
        name: String => NAME,
        schema_id: i32 => SCHEMA_ID,
        /// Owner of the schema.
        principal_id: Option<i32> => PRINCIPAL_ID,
    }
}
