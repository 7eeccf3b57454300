//! Metadata lookups over a [`RowSource`].
//!
//! Each lookup runs one catalog view query filtered by equality predicates
//! and returns the typed rows. Lookups that identify a single row return
//! `Option`.

use serde::Serialize;
use tracing::debug;

use crate::core::SystemColumnType;
use crate::error::Result;
use crate::reader::Param;
use crate::source::RowSource;
use crate::views::{
    AllParametersReader, CatalogView, CheckConstraint, CheckConstraintsReader, Column,
    ColumnsReader, ComputedColumn, ComputedColumnsReader, Database, DatabaseType, DatabasesReader,
    DefaultConstraint, DefaultConstraintsReader, ForeignKey, ForeignKeyColumn,
    ForeignKeyColumnsReader, ForeignKeysReader, IdentityColumn, IdentityColumnsReader, Index,
    IndexColumn, IndexColumnsReader, IndexesReader, Object, ObjectsReader, Parameter, Schema,
    SchemasReader, SystemColumnsReader, SystemObjectsReader, SystemViewsReader, Table,
    TablesReader, TypesReader, View, ViewsReader,
};

/// A primary key index with its key columns in key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryKey {
    pub index: Index,
    pub columns: Vec<IndexColumn>,
}

/// Catalog queries against one database.
pub struct Catalog<S> {
    source: S,
}

impl<S: RowSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying row source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Every row of `V`.
    pub async fn read_all<V: CatalogView>(&self) -> Result<Vec<V::Data>> {
        self.read_where::<V>(&[]).await
    }

    /// Rows of `V` matching every `(column, value)` pair. A [`Param::Null`]
    /// value matches NULL.
    pub async fn read_where<V: CatalogView>(
        &self,
        filters: &[(&str, Param)],
    ) -> Result<Vec<V::Data>> {
        let (sql, params) = V::bound_sql(filters)?;

        debug!(
            "Querying {} filtered by {:?}",
            V::VIEW,
            filters.iter().map(|(column, _)| *column).collect::<Vec<_>>()
        );
        let reader = self.source.fetch(&sql, &params).await?;
        let rows = V::from_reader(reader).into_data()?;
        debug!("Read {} rows from {}", rows.len(), V::VIEW);
        Ok(rows)
    }

    /// First row of `V` matching the filters.
    pub async fn first_where<V: CatalogView>(
        &self,
        filters: &[(&str, Param)],
    ) -> Result<Option<V::Data>> {
        Ok(self.read_where::<V>(filters).await?.into_iter().next())
    }

    // Schemas

    pub async fn schemas(&self) -> Result<Vec<Schema>> {
        self.read_all::<SchemasReader>().await
    }

    pub async fn schema(&self, schema_id: i32) -> Result<Option<Schema>> {
        self.first_where::<SchemasReader>(&[("schema_id", schema_id.into())])
            .await
    }

    pub async fn schema_by_name(&self, name: &str) -> Result<Option<Schema>> {
        self.first_where::<SchemasReader>(&[("name", name.into())]).await
    }

    /// Id of the schema called `name`.
    pub async fn schema_id(&self, name: &str) -> Result<Option<i32>> {
        Ok(self.schema_by_name(name).await?.map(|s| s.schema_id))
    }

    // Objects

    pub async fn objects(&self, schema_id: i32) -> Result<Vec<Object>> {
        self.read_where::<ObjectsReader>(&[("schema_id", schema_id.into())])
            .await
    }

    pub async fn object(&self, object_id: i32) -> Result<Option<Object>> {
        self.first_where::<ObjectsReader>(&[("object_id", object_id.into())])
            .await
    }

    /// Objects that ship with SQL Server (`sys.system_objects`).
    pub async fn system_objects(&self) -> Result<Vec<Object>> {
        self.read_all::<SystemObjectsReader>().await
    }

    pub async fn system_objects_in_schema(&self, schema_id: i32) -> Result<Vec<Object>> {
        self.read_where::<SystemObjectsReader>(&[("schema_id", schema_id.into())])
            .await
    }

    pub async fn system_object(&self, object_id: i32) -> Result<Option<Object>> {
        self.first_where::<SystemObjectsReader>(&[("object_id", object_id.into())])
            .await
    }

    pub async fn system_object_by_name(&self, schema_id: i32, name: &str) -> Result<Option<Object>> {
        self.first_where::<SystemObjectsReader>(&[
            ("schema_id", schema_id.into()),
            ("name", name.into()),
        ])
        .await
    }

    // Tables and views

    pub async fn tables(&self) -> Result<Vec<Table>> {
        self.read_all::<TablesReader>().await
    }

    pub async fn tables_in_schema(&self, schema_id: i32) -> Result<Vec<Table>> {
        self.read_where::<TablesReader>(&[("schema_id", schema_id.into())])
            .await
    }

    pub async fn table(&self, schema_id: i32, name: &str) -> Result<Option<Table>> {
        self.first_where::<TablesReader>(&[("schema_id", schema_id.into()), ("name", name.into())])
            .await
    }

    pub async fn views(&self) -> Result<Vec<View>> {
        self.read_all::<ViewsReader>().await
    }

    pub async fn views_in_schema(&self, schema_id: i32) -> Result<Vec<View>> {
        self.read_where::<ViewsReader>(&[("schema_id", schema_id.into())])
            .await
    }

    pub async fn view(&self, schema_id: i32, name: &str) -> Result<Option<View>> {
        self.first_where::<ViewsReader>(&[("schema_id", schema_id.into()), ("name", name.into())])
            .await
    }

    /// Catalog views and DMVs (`sys.system_views`).
    pub async fn system_views(&self) -> Result<Vec<View>> {
        self.read_all::<SystemViewsReader>().await
    }

    pub async fn system_views_in_schema(&self, schema_id: i32) -> Result<Vec<View>> {
        self.read_where::<SystemViewsReader>(&[("schema_id", schema_id.into())])
            .await
    }

    pub async fn system_view(&self, schema_id: i32, object_id: i32) -> Result<Option<View>> {
        self.first_where::<SystemViewsReader>(&[
            ("schema_id", schema_id.into()),
            ("object_id", object_id.into()),
        ])
        .await
    }

    // Columns

    /// Columns of a table or view, ordered by `column_id`.
    pub async fn columns(&self, object_id: i32) -> Result<Vec<Column>> {
        let mut columns = self
            .read_where::<ColumnsReader>(&[("object_id", object_id.into())])
            .await?;
        columns.sort_by_key(|c| c.column_id);
        Ok(columns)
    }

    pub async fn column(&self, object_id: i32, column_id: i32) -> Result<Option<Column>> {
        self.first_where::<ColumnsReader>(&[
            ("object_id", object_id.into()),
            ("column_id", column_id.into()),
        ])
        .await
    }

    /// Columns of a system object (`sys.system_columns`), ordered by `column_id`.
    pub async fn system_columns(&self, object_id: i32) -> Result<Vec<Column>> {
        let mut columns = self
            .read_where::<SystemColumnsReader>(&[("object_id", object_id.into())])
            .await?;
        columns.sort_by_key(|c| c.column_id);
        Ok(columns)
    }

    pub async fn system_column(&self, object_id: i32, column_id: i32) -> Result<Option<Column>> {
        self.first_where::<SystemColumnsReader>(&[
            ("object_id", object_id.into()),
            ("column_id", column_id.into()),
        ])
        .await
    }

    /// Built-in type a column is stored as.
    ///
    /// `nvarchar` and CLR columns are resolved through the column's type row:
    /// `sysname`, `geometry`, `geography` and `hierarchyid` in the `sys`
    /// schema get their own variant, a user CLR type is `Unknown`.
    pub async fn system_column_type(&self, column: &Column) -> Result<SystemColumnType> {
        if !SystemColumnType::needs_type_row(column.system_type_id) {
            return Ok(SystemColumnType::from_system_type_id(column.system_type_id));
        }

        let database_type = match self
            .first_where::<TypesReader>(&[("user_type_id", column.user_type_id.into())])
            .await?
        {
            Some(database_type) => database_type,
            None => return Ok(SystemColumnType::Unknown),
        };

        if Some(database_type.schema_id) == self.schema_id("sys").await? {
            if let Some(known) = SystemColumnType::from_sys_type_name(&database_type.name) {
                return Ok(known);
            }
        }
        Ok(SystemColumnType::from_system_type_id(database_type.system_type_id))
    }

    /// Identity columns of a table, ordered by `column_id`.
    pub async fn identity_columns(&self, object_id: i32) -> Result<Vec<IdentityColumn>> {
        let mut columns = self
            .read_where::<IdentityColumnsReader>(&[("object_id", object_id.into())])
            .await?;
        columns.sort_by_key(|c| c.column_id);
        Ok(columns)
    }

    /// Computed columns of a table, ordered by `column_id`.
    pub async fn computed_columns(&self, object_id: i32) -> Result<Vec<ComputedColumn>> {
        let mut columns = self
            .read_where::<ComputedColumnsReader>(&[("object_id", object_id.into())])
            .await?;
        columns.sort_by_key(|c| c.column_id);
        Ok(columns)
    }

    /// Parameters of a procedure or function, ordered by `parameter_id`.
    pub async fn parameters(&self, object_id: i32) -> Result<Vec<Parameter>> {
        let mut parameters = self
            .read_where::<AllParametersReader>(&[("object_id", object_id.into())])
            .await?;
        parameters.sort_by_key(|p| p.parameter_id);
        Ok(parameters)
    }

    // Constraints and keys

    /// Default constraint bound to one column.
    pub async fn default_constraint(
        &self,
        parent_object_id: i32,
        column_id: i32,
    ) -> Result<Option<DefaultConstraint>> {
        self.first_where::<DefaultConstraintsReader>(&[
            ("parent_object_id", parent_object_id.into()),
            ("parent_column_id", column_id.into()),
        ])
        .await
    }

    /// Every check constraint on a table, table-level and column-level.
    pub async fn check_constraints(&self, object_id: i32) -> Result<Vec<CheckConstraint>> {
        self.read_where::<CheckConstraintsReader>(&[("parent_object_id", object_id.into())])
            .await
    }

    /// Table-level check constraints (`parent_column_id = 0`).
    pub async fn table_check_constraints(&self, object_id: i32) -> Result<Vec<CheckConstraint>> {
        self.column_check_constraints(object_id, 0).await
    }

    /// Check constraints declared on one column.
    pub async fn column_check_constraints(
        &self,
        object_id: i32,
        column_id: i32,
    ) -> Result<Vec<CheckConstraint>> {
        self.read_where::<CheckConstraintsReader>(&[
            ("parent_object_id", object_id.into()),
            ("parent_column_id", column_id.into()),
        ])
        .await
    }

    /// Every foreign key in the database.
    pub async fn all_foreign_keys(&self) -> Result<Vec<ForeignKey>> {
        self.read_all::<ForeignKeysReader>().await
    }

    /// Foreign keys declared on `parent_object_id`.
    pub async fn foreign_keys(&self, parent_object_id: i32) -> Result<Vec<ForeignKey>> {
        self.read_where::<ForeignKeysReader>(&[("parent_object_id", parent_object_id.into())])
            .await
    }

    /// Column pairs of one foreign key, ordered by `constraint_column_id`.
    pub async fn foreign_key_columns(
        &self,
        constraint_object_id: i32,
    ) -> Result<Vec<ForeignKeyColumn>> {
        let mut columns = self
            .read_where::<ForeignKeyColumnsReader>(&[(
                "constraint_object_id",
                constraint_object_id.into(),
            )])
            .await?;
        columns.sort_by_key(|c| c.constraint_column_id);
        Ok(columns)
    }

    // Indexes

    pub async fn indexes(&self, object_id: i32) -> Result<Vec<Index>> {
        self.read_where::<IndexesReader>(&[("object_id", object_id.into())])
            .await
    }

    /// Columns of one index, ordered by `index_column_id`.
    pub async fn index_columns(&self, object_id: i32, index_id: i32) -> Result<Vec<IndexColumn>> {
        let mut columns = self
            .read_where::<IndexColumnsReader>(&[
                ("object_id", object_id.into()),
                ("index_id", index_id.into()),
            ])
            .await?;
        columns.sort_by_key(|c| c.index_column_id);
        Ok(columns)
    }

    /// The primary key of a table, if it has one.
    pub async fn primary_key(&self, object_id: i32) -> Result<Option<PrimaryKey>> {
        let index = match self
            .first_where::<IndexesReader>(&[
                ("object_id", object_id.into()),
                ("is_primary_key", true.into()),
            ])
            .await?
        {
            Some(index) => index,
            None => return Ok(None),
        };

        let mut columns = self.index_columns(object_id, index.index_id).await?;
        columns.retain(|c| c.key_ordinal > 0);
        columns.sort_by_key(|c| c.key_ordinal);
        Ok(Some(PrimaryKey { index, columns }))
    }

    // Types and databases

    /// A type by schema and name, system or user-defined.
    pub async fn database_type(&self, schema_id: i32, name: &str) -> Result<Option<DatabaseType>> {
        self.first_where::<TypesReader>(&[("schema_id", schema_id.into()), ("name", name.into())])
            .await
    }

    /// First type called `name` in any schema.
    pub async fn database_type_by_name(&self, name: &str) -> Result<Option<DatabaseType>> {
        self.first_where::<TypesReader>(&[("name", name.into())])
            .await
    }

    /// A built-in type by `system_type_id`.
    ///
    /// Built-in types are the ones with `is_user_defined = 0`. The CLR types
    /// `hierarchyid`, `geometry` and `geography` share id 240, so for that id
    /// the first of them is returned.
    pub async fn system_type(&self, system_type_id: u8) -> Result<Option<DatabaseType>> {
        self.first_where::<TypesReader>(&[
            ("system_type_id", system_type_id.into()),
            ("is_user_defined", false.into()),
        ])
        .await
    }

    pub async fn databases(&self) -> Result<Vec<Database>> {
        self.read_all::<DatabasesReader>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SqlValue;
    use crate::error::CatalogError;
    use crate::reader::RowReader;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned result sets and records every statement.
    #[derive(Default)]
    struct FakeSource {
        results: Mutex<VecDeque<RowReader>>,
        calls: Mutex<Vec<(String, Vec<Param>)>>,
    }

    impl FakeSource {
        fn with(results: Vec<RowReader>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                calls: Mutex::default(),
            }
        }

        fn calls(&self) -> Vec<(String, Vec<Param>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RowSource for FakeSource {
        async fn fetch(&self, sql: &str, params: &[Param]) -> Result<RowReader> {
            self.calls
                .lock()
                .unwrap()
                .push((sql.to_string(), params.to_vec()));
            Ok(self
                .results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| RowReader::new(Vec::new(), Vec::new())))
        }
    }

    fn rows<V: CatalogView>(rows: Vec<Vec<SqlValue>>) -> RowReader {
        RowReader::new(V::COLUMNS.iter().map(|c| c.to_string()).collect(), rows)
    }

    fn schema_row(name: &str, id: i32) -> Vec<SqlValue> {
        vec![name.into(), SqlValue::I32(id), SqlValue::I32(1)]
    }

    fn index_column_row(index_column_id: i32, column_id: i32, key_ordinal: u8) -> Vec<SqlValue> {
        vec![
            SqlValue::I32(42),
            SqlValue::I32(1),
            SqlValue::I32(index_column_id),
            SqlValue::I32(column_id),
            SqlValue::U8(key_ordinal),
            SqlValue::U8(0),
            SqlValue::Bool(false),
            SqlValue::Bool(key_ordinal == 0),
        ]
    }

    fn column_row(column_id: i32, name: &str, system_type_id: u8, user_type_id: i32) -> Vec<SqlValue> {
        ColumnsReader::COLUMNS
            .iter()
            .map(|column| match *column {
                "object_id" => SqlValue::I32(42),
                "name" => name.into(),
                "column_id" => SqlValue::I32(column_id),
                "system_type_id" => SqlValue::U8(system_type_id),
                "user_type_id" => SqlValue::I32(user_type_id),
                "max_length" => SqlValue::I16(-1),
                "precision" | "scale" => SqlValue::U8(0),
                "xml_collection_id" | "default_object_id" | "rule_object_id" => SqlValue::I32(0),
                "collation_name" | "generated_always_type" | "generated_always_type_desc"
                | "is_hidden" | "is_masked" => SqlValue::Null,
                "is_nullable" => SqlValue::Bool(true),
                _ => SqlValue::Bool(false),
            })
            .collect()
    }

    fn read_column(row: Vec<SqlValue>) -> Column {
        ColumnsReader::new(rows::<ColumnsReader>(vec![row]))
            .read_all()
            .unwrap()
            .remove(0)
    }

    fn parameter_row(parameter_id: i32, name: &str) -> Vec<SqlValue> {
        AllParametersReader::COLUMNS
            .iter()
            .map(|column| match *column {
                "object_id" => SqlValue::I32(9),
                "name" => name.into(),
                "parameter_id" => SqlValue::I32(parameter_id),
                "system_type_id" => SqlValue::U8(56),
                "user_type_id" => SqlValue::I32(56),
                "max_length" => SqlValue::I16(4),
                "precision" => SqlValue::U8(10),
                "scale" => SqlValue::U8(0),
                "xml_collection_id" => SqlValue::I32(0),
                "is_output" => SqlValue::Bool(parameter_id == 0),
                "default_value"
                | "is_nullable"
                | "encryption_type"
                | "encryption_type_desc"
                | "encryption_algorithm_name"
                | "column_encryption_key_id"
                | "column_encryption_key_database_name" => SqlValue::Null,
                _ => SqlValue::Bool(false),
            })
            .collect()
    }

    fn type_row(name: &str, system_type_id: u8, user_type_id: i32, schema_id: i32) -> Vec<SqlValue> {
        TypesReader::COLUMNS
            .iter()
            .map(|column| match *column {
                "name" => name.into(),
                "system_type_id" => SqlValue::U8(system_type_id),
                "user_type_id" => SqlValue::I32(user_type_id),
                "schema_id" => SqlValue::I32(schema_id),
                "principal_id" | "collation_name" => SqlValue::Null,
                "max_length" => SqlValue::I16(-1),
                "precision" | "scale" => SqlValue::U8(0),
                "is_nullable" => SqlValue::Bool(true),
                "is_user_defined" => SqlValue::Bool(schema_id != 4),
                "is_assembly_type" => SqlValue::Bool(system_type_id == 240),
                "default_object_id" | "rule_object_id" => SqlValue::I32(0),
                _ => SqlValue::Bool(false),
            })
            .collect()
    }

    fn foreign_key_column_row(constraint_column_id: i32) -> Vec<SqlValue> {
        vec![
            SqlValue::I32(900),
            SqlValue::I32(constraint_column_id),
            SqlValue::I32(42),
            SqlValue::I32(constraint_column_id + 1),
            SqlValue::I32(17),
            SqlValue::I32(constraint_column_id),
        ]
    }

    fn index_row() -> Vec<SqlValue> {
        IndexesReader::COLUMNS
            .iter()
            .map(|column| match *column {
                "object_id" => SqlValue::I32(42),
                "index_id" => SqlValue::I32(1),
                "name" => "PK_orders".into(),
                "type" | "fill_factor" => SqlValue::U8(1),
                "type_desc" => "CLUSTERED".into(),
                "data_space_id" => SqlValue::I32(1),
                "filter_definition" => SqlValue::Null,
                "is_primary_key" | "is_unique" => SqlValue::Bool(true),
                _ => SqlValue::Bool(false),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_read_all_runs_plain_sql() {
        let source = FakeSource::with(vec![rows::<SchemasReader>(vec![
            schema_row("dbo", 1),
            schema_row("sales", 5),
        ])]);
        let catalog = Catalog::new(source);

        let schemas = catalog.schemas().await.unwrap();
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[1].name, "sales");

        let calls = catalog.source().calls();
        assert_eq!(calls, vec![(SchemasReader::SQL.to_string(), Vec::new())]);
    }

    #[tokio::test]
    async fn test_schema_id_binds_name() {
        let source = FakeSource::with(vec![rows::<SchemasReader>(vec![schema_row("sales", 5)])]);
        let catalog = Catalog::new(source);

        assert_eq!(catalog.schema_id("sales").await.unwrap(), Some(5));

        let (sql, params) = catalog.source().calls().remove(0);
        assert!(sql.ends_with("WHERE s.[name] = @P1"));
        assert_eq!(params, vec![Param::String("sales".into())]);
    }

    #[tokio::test]
    async fn test_single_row_lookup_returns_none_when_empty() {
        let catalog = Catalog::new(FakeSource::default());
        assert_eq!(catalog.table(1, "missing").await.unwrap(), None);

        let (sql, params) = catalog.source().calls().remove(0);
        assert!(sql.contains("FROM [sys].[tables] t"));
        assert!(sql.ends_with("WHERE t.[schema_id] = @P1\n  AND t.[name] = @P2"));
        assert_eq!(params, vec![Param::I32(1), Param::String("missing".into())]);
    }

    #[tokio::test]
    async fn test_primary_key_collects_key_columns_in_order() {
        let source = FakeSource::with(vec![
            rows::<IndexesReader>(vec![index_row()]),
            rows::<IndexColumnsReader>(vec![
                index_column_row(2, 3, 2),
                index_column_row(1, 1, 1),
            ]),
        ]);
        let catalog = Catalog::new(source);

        let pk = catalog.primary_key(42).await.unwrap().unwrap();
        assert_eq!(pk.index.name.as_deref(), Some("PK_orders"));
        assert_eq!(pk.index.index_type, 1);
        let column_ids: Vec<i32> = pk.columns.iter().map(|c| c.column_id).collect();
        assert_eq!(column_ids, vec![1, 3]);

        let calls = catalog.source().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, vec![Param::I32(42), Param::Bool(true)]);
        assert_eq!(calls[1].1, vec![Param::I32(42), Param::I32(1)]);
    }

    #[tokio::test]
    async fn test_primary_key_absent() {
        let catalog = Catalog::new(FakeSource::default());
        assert_eq!(catalog.primary_key(7).await.unwrap(), None);
        assert_eq!(catalog.source().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_system_type_filters_on_built_in_flag() {
        let source = FakeSource::with(vec![rows::<TypesReader>(vec![type_row(
            "hierarchyid",
            240,
            128,
            4,
        )])]);
        let catalog = Catalog::new(source);

        let found = catalog.system_type(240).await.unwrap().unwrap();
        assert_eq!(found.name, "hierarchyid");
        assert_eq!(found.user_type_id, 128);

        let (sql, params) = catalog.source().calls().remove(0);
        assert!(sql.ends_with("WHERE ty.[system_type_id] = @P1\n  AND ty.[is_user_defined] = @P2"));
        assert_eq!(params, vec![Param::U8(240), Param::Bool(false)]);
    }

    #[tokio::test]
    async fn test_database_type_by_name_ignores_schema() {
        let catalog = Catalog::new(FakeSource::default());
        assert_eq!(catalog.database_type_by_name("money").await.unwrap(), None);

        let (sql, params) = catalog.source().calls().remove(0);
        assert!(sql.ends_with("WHERE ty.[name] = @P1"));
        assert_eq!(params, vec![Param::String("money".into())]);
    }

    #[tokio::test]
    async fn test_columns_sorted_by_column_id() {
        let source = FakeSource::with(vec![rows::<ColumnsReader>(vec![
            column_row(3, "total", 106, 106),
            column_row(1, "id", 56, 56),
            column_row(2, "customer", 231, 231),
        ])]);
        let catalog = Catalog::new(source);

        let names: Vec<String> = catalog
            .columns(42)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["id", "customer", "total"]);
    }

    #[tokio::test]
    async fn test_parameters_sorted_by_parameter_id() {
        let source = FakeSource::with(vec![rows::<AllParametersReader>(vec![
            parameter_row(2, "@to"),
            parameter_row(0, ""),
            parameter_row(1, "@from"),
        ])]);
        let catalog = Catalog::new(source);

        let parameters = catalog.parameters(9).await.unwrap();
        let ids: Vec<i32> = parameters.iter().map(|p| p.parameter_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(parameters[0].is_output);
        assert_eq!(parameters[0].default_value, None);
        assert_eq!(parameters[2].name.as_deref(), Some("@to"));
    }

    #[tokio::test]
    async fn test_index_columns_sorted_by_index_column_id() {
        let source = FakeSource::with(vec![rows::<IndexColumnsReader>(vec![
            index_column_row(3, 5, 0),
            index_column_row(1, 1, 1),
            index_column_row(2, 3, 2),
        ])]);
        let catalog = Catalog::new(source);

        let ids: Vec<i32> = catalog
            .index_columns(42, 1)
            .await
            .unwrap()
            .iter()
            .map(|c| c.index_column_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_foreign_key_columns_sorted_by_constraint_column_id() {
        let source = FakeSource::with(vec![rows::<ForeignKeyColumnsReader>(vec![
            foreign_key_column_row(2),
            foreign_key_column_row(3),
            foreign_key_column_row(1),
        ])]);
        let catalog = Catalog::new(source);

        let ids: Vec<i32> = catalog
            .foreign_key_columns(900)
            .await
            .unwrap()
            .iter()
            .map(|c| c.constraint_column_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_null_filter_is_matched_with_is_null() {
        let catalog = Catalog::new(FakeSource::default());
        catalog
            .read_where::<ColumnsReader>(&[
                ("collation_name", Param::Null),
                ("object_id", Param::I32(42)),
            ])
            .await
            .unwrap();

        let (sql, params) = catalog.source().calls().remove(0);
        assert!(sql.ends_with("WHERE c.[collation_name] IS NULL\n  AND c.[object_id] = @P1"));
        assert_eq!(params, vec![Param::I32(42)]);
    }

    #[tokio::test]
    async fn test_table_check_constraints_use_parent_column_zero() {
        let catalog = Catalog::new(FakeSource::default());
        catalog.table_check_constraints(42).await.unwrap();
        catalog.column_check_constraints(42, 3).await.unwrap();

        let calls = catalog.source().calls();
        assert!(calls[0]
            .0
            .ends_with("WHERE chk.[parent_object_id] = @P1\n  AND chk.[parent_column_id] = @P2"));
        assert_eq!(calls[0].1, vec![Param::I32(42), Param::I32(0)]);
        assert_eq!(calls[1].1, vec![Param::I32(42), Param::I32(3)]);
    }

    #[tokio::test]
    async fn test_system_lookups_query_system_views() {
        let catalog = Catalog::new(FakeSource::default());
        catalog.system_objects().await.unwrap();
        catalog.system_view(4, -405).await.unwrap();
        catalog.system_columns(-405).await.unwrap();
        catalog.views().await.unwrap();
        catalog.all_foreign_keys().await.unwrap();

        let calls = catalog.source().calls();
        assert_eq!(calls[0].0, SystemObjectsReader::SQL);
        assert!(calls[1].0.contains("FROM [sys].[system_views] ssv"));
        assert!(calls[1]
            .0
            .ends_with("WHERE ssv.[schema_id] = @P1\n  AND ssv.[object_id] = @P2"));
        assert!(calls[2].0.ends_with("WHERE sc.[object_id] = @P1"));
        assert_eq!(calls[3].0, ViewsReader::SQL);
        assert_eq!(calls[4].0, ForeignKeysReader::SQL);
    }

    #[tokio::test]
    async fn test_system_column_type_plain_type_needs_no_query() {
        let catalog = Catalog::new(FakeSource::default());
        let column = read_column(column_row(1, "id", 56, 56));

        assert_eq!(
            catalog.system_column_type(&column).await.unwrap(),
            SystemColumnType::Int
        );
        assert!(catalog.source().calls().is_empty());
    }

    #[tokio::test]
    async fn test_system_column_type_resolves_clr_type() {
        let source = FakeSource::with(vec![
            rows::<TypesReader>(vec![type_row("geography", 240, 130, 4)]),
            rows::<SchemasReader>(vec![schema_row("sys", 4)]),
        ]);
        let catalog = Catalog::new(source);
        let column = read_column(column_row(4, "location", 240, 130));

        assert_eq!(
            catalog.system_column_type(&column).await.unwrap(),
            SystemColumnType::Geography
        );
        assert_eq!(catalog.source().calls()[0].1, vec![Param::I32(130)]);
    }

    #[tokio::test]
    async fn test_system_column_type_sysname_and_user_types() {
        let source = FakeSource::with(vec![
            rows::<TypesReader>(vec![type_row("sysname", 231, 256, 4)]),
            rows::<SchemasReader>(vec![schema_row("sys", 4)]),
            rows::<TypesReader>(vec![type_row("Point", 240, 257, 1)]),
            rows::<SchemasReader>(vec![schema_row("sys", 4)]),
            rows::<TypesReader>(vec![type_row("Phone", 231, 258, 1)]),
            rows::<SchemasReader>(vec![schema_row("sys", 4)]),
        ]);
        let catalog = Catalog::new(source);

        let sysname = read_column(column_row(1, "name", 231, 256));
        let point = read_column(column_row(2, "location", 240, 257));
        let phone = read_column(column_row(3, "phone", 231, 258));

        assert_eq!(
            catalog.system_column_type(&sysname).await.unwrap(),
            SystemColumnType::SysName
        );
        assert_eq!(
            catalog.system_column_type(&point).await.unwrap(),
            SystemColumnType::Unknown
        );
        assert_eq!(
            catalog.system_column_type(&phone).await.unwrap(),
            SystemColumnType::NVarChar
        );
    }

    #[tokio::test]
    async fn test_read_where_rejects_unknown_column_before_querying() {
        let catalog = Catalog::new(FakeSource::default());
        let err = catalog
            .read_where::<TablesReader>(&[("no_such_column", Param::I32(1))])
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownColumn { .. }));
        assert!(catalog.source().calls().is_empty());
    }

    #[tokio::test]
    async fn test_conversion_failure_surfaces() {
        let source = FakeSource::with(vec![rows::<SchemasReader>(vec![vec![
            SqlValue::Null,
            SqlValue::I32(1),
            SqlValue::Null,
        ]])]);
        let catalog = Catalog::new(source);

        let err = catalog.schemas().await.unwrap_err();
        assert!(matches!(err, CatalogError::Column { ordinal: 0, .. }));
    }
}
