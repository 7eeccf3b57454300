//! `sys.masked_columns`.

catalog_view! {
    /// Reader over `sys.masked_columns`, the columns protected by dynamic data masking.
    reader MaskedColumnsReader;
    /// One row of `sys.masked_columns`.
    data MaskedColumn;
    view "sys.masked_columns";
    alias "mc";
    sql "SELECT mc.[object_id]
      ,mc.[name]
      ,mc.[column_id]
      ,mc.[system_type_id]
      ,mc.[user_type_id]
      ,mc.[max_length]
      ,mc.[precision]
      ,mc.[scale]
      ,mc.[collation_name]
      ,mc.[is_nullable]
      ,mc.[is_ansi_padded]
      ,mc.[is_rowguidcol]
      ,mc.[is_identity]
      ,mc.[is_filestream]
      ,mc.[is_replicated]
      ,mc.[is_non_sql_subscribed]
      ,mc.[is_merge_published]
      ,mc.[is_dts_replicated]
      ,mc.[is_xml_document]
      ,mc.[xml_collection_id]
      ,mc.[default_object_id]
      ,mc.[rule_object_id]
      ,mc.[definition]
      ,mc.[uses_database_collation]
      ,mc.[is_persisted]
      ,mc.[is_computed]
      ,mc.[is_sparse]
      ,mc.[is_column_set]
      ,mc.[generated_always_type]
      ,mc.[generated_always_type_desc]
      ,mc.[encryption_type]
      ,mc.[encryption_type_desc]
      ,mc.[encryption_algorithm_name]
      ,mc.[column_encryption_key_id]
      ,mc.[column_encryption_key_database_name]
      ,mc.[is_hidden]
      ,mc.[is_masked]
      ,mc.[masking_function]
      ,mc.[graph_type]
      ,mc.[graph_type_desc]
FROM [sys].[masked_columns] mc";
    columns {
        /// ID of the table the masked column belongs to.
        object_id: i32 => OBJECT_ID,
        /// Column name, unique within the table.
        name: String => NAME,
        /// Column ID, unique within the table.
        column_id: i32 => COLUMN_ID,
        /// ID of the system type of the column.
        system_type_id: u8 => SYSTEM_TYPE_ID,
        /// ID of the type of the column as defined by the user.
        user_type_id: i32 => USER_TYPE_ID,
        /// Maximum length in bytes; `-1` for `max` types and `xml`.
        max_length: i16 => MAX_LENGTH,
        /// Precision for numeric columns, otherwise 0.
        precision: u8 => PRECISION,
        /// Scale for numeric columns, otherwise 0.
        scale: u8 => SCALE,
        /// Collation of character columns.
        collation_name: Option<String> => COLLATION_NAME,
        /// Column accepts NULL.
        is_nullable: Option<bool> => IS_NULLABLE,
        is_ansi_padded: bool => IS_ANSI_PADDED,
        is_rowguidcol: bool => IS_ROWGUIDCOL,
        /// Column has identity values.
        is_identity: bool => IS_IDENTITY,
        is_filestream: bool => IS_FILESTREAM,
        is_replicated: Option<bool> => IS_REPLICATED,
        is_non_sql_subscribed: Option<bool> => IS_NON_SQL_SUBSCRIBED,
        is_merge_published: Option<bool> => IS_MERGE_PUBLISHED,
        is_dts_replicated: Option<bool> => IS_DTS_REPLICATED,
        is_xml_document: bool => IS_XML_DOCUMENT,
        xml_collection_id: Option<i32> => XML_COLLECTION_ID,
        default_object_id: Option<i32> => DEFAULT_OBJECT_ID,
        rule_object_id: Option<i32> => RULE_OBJECT_ID,
        /// Masking definition text for computed columns.
        definition: Option<String> => DEFINITION,
        uses_database_collation: Option<bool> => USES_DATABASE_COLLATION,
        is_persisted: Option<bool> => IS_PERSISTED,
        /// Column is computed.
        is_computed: bool => IS_COMPUTED,
        is_sparse: Option<bool> => IS_SPARSE,
        is_column_set: Option<bool> => IS_COLUMN_SET,
        /// 0 = not generated, 1 = AS_ROW_START, 2 = AS_ROW_END.
        generated_always_type: Option<u8> => GENERATED_ALWAYS_TYPE,
        generated_always_type_desc: Option<String> => GENERATED_ALWAYS_TYPE_DESC,
        /// 1 = deterministic, 2 = randomized.
        encryption_type: Option<i32> => ENCRYPTION_TYPE,
        encryption_type_desc: Option<String> => ENCRYPTION_TYPE_DESC,
        encryption_algorithm_name: Option<String> => ENCRYPTION_ALGORITHM_NAME,
        column_encryption_key_id: Option<i32> => COLUMN_ENCRYPTION_KEY_ID,
        column_encryption_key_database_name: Option<String> => COLUMN_ENCRYPTION_KEY_DATABASE_NAME,
        /// Column is hidden from `SELECT *`.
        is_hidden: Option<bool> => IS_HIDDEN,
        /// Column is masked by a dynamic data masking function.
        is_masked: bool => IS_MASKED,
        /// The masking function, e.g. `default()` or `email()`.
        masking_function: Option<String> => MASKING_FUNCTION,
        graph_type: Option<i32> => GRAPH_TYPE,
        graph_type_desc: Option<String> => GRAPH_TYPE_DESC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::sample_reader;

    #[test]
    fn test_masked_int_column_has_no_collation_or_encryption() {
        let reader = sample_reader(
            MaskedColumnsReader::COLUMNS,
            MaskedColumnsReader::RUST_TYPES,
            &[
                "collation_name",
                "definition",
                "uses_database_collation",
                "is_persisted",
                "encryption_type",
                "encryption_type_desc",
                "encryption_algorithm_name",
                "column_encryption_key_id",
                "column_encryption_key_database_name",
                "graph_type",
                "graph_type_desc",
            ],
        );

        let rows = MaskedColumnsReader::new(reader).read_all().unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.masking_function.as_deref(), Some("masking_function"));
        assert_eq!(row.collation_name, None);
        assert_eq!(row.definition, None);
        assert_eq!(row.is_persisted, None);
        assert_eq!(row.encryption_type, None);
        assert_eq!(row.column_encryption_key_database_name, None);
        assert_eq!(row.graph_type_desc, None);
        assert_eq!(row.is_nullable, Some(true));
    }
}
